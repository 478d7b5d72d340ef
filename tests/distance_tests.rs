//! Unit tests for the distance kernels and the distance provider.

use cvrp_greedy::distance::{att, ceil_2d, euc_2d, euc_3d, geo, man_2d, man_3d, max_2d, max_3d};
use cvrp_greedy::{Coord2D, Coord3D, Distance, EdgeWeightType, EdgeWeights, Error, ProblemInstance};

fn p(x: f64, y: f64) -> Coord2D {
    Coord2D::new(x, y)
}

fn q(x: f64, y: f64, z: f64) -> Coord3D {
    Coord3D::new(x, y, z)
}

#[test]
fn test_euc_2d() {
    assert_eq!(euc_2d(p(0.0, 0.0), p(3.0, 4.0)), 5);
    // sqrt(2) = 1.414 rounds down, sqrt(200) = 14.14 rounds down
    assert_eq!(euc_2d(p(0.0, 0.0), p(1.0, 1.0)), 1);
    assert_eq!(euc_2d(p(0.0, 0.0), p(10.0, 10.0)), 14);
    // 2.5 rounds up
    assert_eq!(euc_2d(p(0.0, 0.0), p(2.5, 0.0)), 3);
    assert_eq!(euc_2d(p(7.0, 7.0), p(7.0, 7.0)), 0);
}

#[test]
fn test_ceil_2d() {
    assert_eq!(ceil_2d(p(0.0, 0.0), p(1.0, 1.0)), 2);
    assert_eq!(ceil_2d(p(0.0, 0.0), p(3.0, 4.0)), 5);
    assert_eq!(ceil_2d(p(0.0, 0.0), p(0.1, 0.0)), 1);
}

#[test]
fn test_man_and_max_2d() {
    assert_eq!(man_2d(p(0.0, 0.0), p(3.0, -4.0)), 7);
    assert_eq!(man_2d(p(0.2, 0.0), p(0.0, 0.2)), 0);
    assert_eq!(max_2d(p(0.0, 0.0), p(3.0, -4.0)), 4);
    // Each axis is rounded before taking the maximum
    assert_eq!(max_2d(p(0.0, 0.0), p(2.5, 2.4)), 3);
}

#[test]
fn test_att_rounds_up_only_below_exact_value() {
    // 30^2 + 10^2 = 1000, r = sqrt(100) = 10 exactly: no increment
    assert_eq!(att(p(0.0, 0.0), p(30.0, 10.0)), 10);
    // r = sqrt(10) = 3.162, nint gives 3 which is below r: incremented
    assert_eq!(att(p(0.0, 0.0), p(10.0, 0.0)), 4);
    // r = sqrt(12.1) = 3.478, nint gives 3: incremented
    assert_eq!(att(p(0.0, 0.0), p(11.0, 0.0)), 4);
}

#[test]
fn test_geo() {
    // Identical points still pay the +1 of the formula
    assert_eq!(geo(p(0.0, 0.0), p(0.0, 0.0)), 1);
    // One degree of latitude
    assert_eq!(geo(p(1.0, 0.0), p(0.0, 0.0)), 112);
    assert_eq!(geo(p(38.24, 20.42), p(39.57, 26.15)), 509);
    assert_eq!(geo(p(39.57, 26.15), p(38.24, 20.42)), 509);
    // Negative coordinates truncate toward zero
    assert_eq!(geo(p(-33.52, 151.13), p(51.30, -0.07)), 17014);
}

#[test]
fn test_3d_kernels() {
    assert_eq!(euc_3d(q(0.0, 0.0, 0.0), q(1.0, 1.0, 1.0)), 2);
    assert_eq!(euc_3d(q(0.0, 0.0, 0.0), q(2.0, 4.0, 4.0)), 6);
    assert_eq!(man_3d(q(0.0, 0.0, 0.0), q(1.0, -2.0, 3.0)), 6);
    assert_eq!(max_3d(q(0.0, 0.0, 0.0), q(1.0, -2.0, 3.0)), 3);
}

#[test]
fn test_kernel_lookup_by_dimensionality() {
    assert!(EdgeWeightType::EUC_2D.kernel_2d().is_some());
    assert!(EdgeWeightType::GEO.kernel_2d().is_some());
    assert!(EdgeWeightType::EUC_2D.kernel_3d().is_none());
    assert!(EdgeWeightType::EUC_3D.kernel_3d().is_some());
    assert!(EdgeWeightType::EUC_3D.kernel_2d().is_none());
    assert!(EdgeWeightType::XRAY1.kernel_2d().is_none());
    assert!(EdgeWeightType::EXPLICIT.kernel_3d().is_none());
}

#[test]
fn test_edge_weight_type_names() {
    assert_eq!("EUC_2D".parse::<EdgeWeightType>().unwrap(), EdgeWeightType::EUC_2D);
    assert_eq!(" ceil_2d ".parse::<EdgeWeightType>().unwrap(), EdgeWeightType::CEIL_2D);
    assert_eq!(EdgeWeightType::ATT.to_string(), "ATT");
    assert!(matches!(
        "EUC_4D".parse::<EdgeWeightType>(),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn test_explicit_weights_take_precedence() {
    let mut weights = EdgeWeights::full_matrix(2);
    weights.set(0, 1, 42);
    weights.set(1, 0, 7);

    let instance = ProblemInstance::new("precedence")
        .with_edge_weights(weights)
        .with_edge_weight_type(EdgeWeightType::EUC_2D)
        .with_node_coords_2d(vec![p(0.0, 0.0), p(3.0, 4.0)]);

    let distance = Distance::from_instance(&instance).unwrap();
    // Asymmetric weights are used as they are
    assert_eq!(distance.get(0, 1), 42);
    assert_eq!(distance.get(1, 0), 7);
}

#[test]
fn test_coordinate_sources() {
    let instance = ProblemInstance::new("2d")
        .with_edge_weight_type(EdgeWeightType::MAN_2D)
        .with_node_coords_2d(vec![p(0.0, 0.0), p(3.0, -4.0)]);
    assert_eq!(Distance::from_instance(&instance).unwrap().get(0, 1), 7);

    let instance = ProblemInstance::new("3d")
        .with_edge_weight_type(EdgeWeightType::EUC_3D)
        .with_node_coords_3d(vec![q(0.0, 0.0, 0.0), q(2.0, 4.0, 4.0)]);
    assert_eq!(Distance::from_instance(&instance).unwrap().get(1, 0), 6);
}

#[test]
fn test_unsupported_or_missing_source() {
    // 3-D formula over 2-D coordinates
    let instance = ProblemInstance::new("mismatch")
        .with_edge_weight_type(EdgeWeightType::EUC_3D)
        .with_node_coords_2d(vec![p(0.0, 0.0)]);
    assert!(matches!(
        Distance::from_instance(&instance),
        Err(Error::Configuration(_))
    ));

    // Coordinates without a formula
    let instance = ProblemInstance::new("untyped").with_node_coords_2d(vec![p(0.0, 0.0)]);
    assert!(matches!(
        Distance::from_instance(&instance),
        Err(Error::Configuration(_))
    ));

    // Nothing at all
    let instance = ProblemInstance::new("empty");
    assert!(matches!(
        Distance::from_instance(&instance),
        Err(Error::Configuration(_))
    ));
}
