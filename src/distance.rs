//! Distance kernels and the distance provider used by every builder.
//!
//! All kernels return integer distances following the TSPLIB conventions:
//! `nint(x) = (x + 0.5)` truncated toward zero.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::problem::{Coord2D, Coord3D, ProblemInstance};
use crate::weights::EdgeWeights;

/// How the edge weights of an instance are given.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeWeightType {
    /// Weights are listed explicitly.
    EXPLICIT,
    EUC_2D,
    EUC_3D,
    MAX_2D,
    MAX_3D,
    MAN_2D,
    MAN_3D,
    /// Euclidean distance in 2-D rounded up.
    CEIL_2D,
    /// Geographical distance on an idealised sphere.
    GEO,
    /// Pseudo-Euclidean distance used by `att48` and `att532`.
    ATT,
    XRAY1,
    XRAY2,
    SPECIAL,
}

impl EdgeWeightType {
    pub const ALL: [EdgeWeightType; 13] = [
        EdgeWeightType::EXPLICIT,
        EdgeWeightType::EUC_2D,
        EdgeWeightType::EUC_3D,
        EdgeWeightType::MAX_2D,
        EdgeWeightType::MAX_3D,
        EdgeWeightType::MAN_2D,
        EdgeWeightType::MAN_3D,
        EdgeWeightType::CEIL_2D,
        EdgeWeightType::GEO,
        EdgeWeightType::ATT,
        EdgeWeightType::XRAY1,
        EdgeWeightType::XRAY2,
        EdgeWeightType::SPECIAL,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EdgeWeightType::EXPLICIT => "EXPLICIT",
            EdgeWeightType::EUC_2D => "EUC_2D",
            EdgeWeightType::EUC_3D => "EUC_3D",
            EdgeWeightType::MAX_2D => "MAX_2D",
            EdgeWeightType::MAX_3D => "MAX_3D",
            EdgeWeightType::MAN_2D => "MAN_2D",
            EdgeWeightType::MAN_3D => "MAN_3D",
            EdgeWeightType::CEIL_2D => "CEIL_2D",
            EdgeWeightType::GEO => "GEO",
            EdgeWeightType::ATT => "ATT",
            EdgeWeightType::XRAY1 => "XRAY1",
            EdgeWeightType::XRAY2 => "XRAY2",
            EdgeWeightType::SPECIAL => "SPECIAL",
        }
    }

    /// The 2-D kernel for this weight type, if there is one.
    pub fn kernel_2d(self) -> Option<Kernel2D> {
        match self {
            EdgeWeightType::EUC_2D => Some(euc_2d),
            EdgeWeightType::MAX_2D => Some(max_2d),
            EdgeWeightType::MAN_2D => Some(man_2d),
            EdgeWeightType::CEIL_2D => Some(ceil_2d),
            EdgeWeightType::GEO => Some(geo),
            EdgeWeightType::ATT => Some(att),
            _ => None,
        }
    }

    /// The 3-D kernel for this weight type, if there is one.
    pub fn kernel_3d(self) -> Option<Kernel3D> {
        match self {
            EdgeWeightType::EUC_3D => Some(euc_3d),
            EdgeWeightType::MAX_3D => Some(max_3d),
            EdgeWeightType::MAN_3D => Some(man_3d),
            _ => None,
        }
    }
}

impl fmt::Display for EdgeWeightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EdgeWeightType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        EdgeWeightType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::configuration(format!("unknown edge weight type \"{name}\"")))
    }
}

pub type Kernel2D = fn(Coord2D, Coord2D) -> i64;
pub type Kernel3D = fn(Coord3D, Coord3D) -> i64;

fn nint(value: f64) -> i64 {
    (value + 0.5) as i64
}

pub fn euc_2d(a: Coord2D, b: Coord2D) -> i64 {
    let (dx, dy) = (a.x - b.x, a.y - b.y);
    nint((dx * dx + dy * dy).sqrt())
}

pub fn euc_3d(a: Coord3D, b: Coord3D) -> i64 {
    let (dx, dy, dz) = (a.x - b.x, a.y - b.y, a.z - b.z);
    nint((dx * dx + dy * dy + dz * dz).sqrt())
}

pub fn man_2d(a: Coord2D, b: Coord2D) -> i64 {
    nint((a.x - b.x).abs() + (a.y - b.y).abs())
}

pub fn man_3d(a: Coord3D, b: Coord3D) -> i64 {
    nint((a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs())
}

pub fn max_2d(a: Coord2D, b: Coord2D) -> i64 {
    nint((a.x - b.x).abs()).max(nint((a.y - b.y).abs()))
}

pub fn max_3d(a: Coord3D, b: Coord3D) -> i64 {
    nint((a.x - b.x).abs())
        .max(nint((a.y - b.y).abs()))
        .max(nint((a.z - b.z).abs()))
}

pub fn ceil_2d(a: Coord2D, b: Coord2D) -> i64 {
    let (dx, dy) = (a.x - b.x, a.y - b.y);
    (dx * dx + dy * dy).sqrt().ceil() as i64
}

const GEO_PI: f64 = 3.141592;
const EARTH_RADIUS: f64 = 6378.388;

/// Decode a `DDD.MM` component into radians.
fn geo_radians(value: f64) -> f64 {
    let deg = value.trunc();
    let min = value - deg;
    GEO_PI * (deg + 5.0 * min / 3.0) / 180.0
}

/// Geographical distance; `x` is latitude and `y` is longitude.
pub fn geo(a: Coord2D, b: Coord2D) -> i64 {
    let (lat_a, long_a) = (geo_radians(a.x), geo_radians(a.y));
    let (lat_b, long_b) = (geo_radians(b.x), geo_radians(b.y));

    let q1 = (long_a - long_b).cos();
    let q2 = (lat_a - lat_b).cos();
    let q3 = (lat_a + lat_b).cos();
    let cosine = (0.5 * ((1.0 + q1) * q2 - (1.0 - q1) * q3)).clamp(-1.0, 1.0);
    (EARTH_RADIUS * cosine.acos() + 1.0) as i64
}

/// Pseudo-Euclidean distance: rounds up whenever `nint` falls below the exact value.
pub fn att(a: Coord2D, b: Coord2D) -> i64 {
    let (dx, dy) = (a.x - b.x, a.y - b.y);
    let r = ((dx * dx + dy * dy) / 10.0).sqrt();
    let t = nint(r);
    if (t as f64) < r {
        t + 1
    } else {
        t
    }
}

/// Read-only distance lookup over one of the instance's distance sources.
#[derive(Clone, Copy)]
pub enum Distance<'a> {
    Weights(&'a EdgeWeights),
    Coord2D {
        coords: &'a [Coord2D],
        kernel: Kernel2D,
    },
    Coord3D {
        coords: &'a [Coord3D],
        kernel: Kernel3D,
    },
}

impl<'a> Distance<'a> {
    /// Select the distance source of an instance.
    ///
    /// Explicit weights win over 2-D coordinates, which win over 3-D ones.
    pub fn from_instance(instance: &'a ProblemInstance) -> Result<Self> {
        if let Some(weights) = &instance.edge_weights {
            return Ok(Distance::Weights(weights));
        }

        let kind = instance.edge_weight_type;

        if let Some(coords) = &instance.node_coords_2d {
            let kind = kind.ok_or_else(|| {
                Error::configuration("instance has 2D coordinates but no edge weight type")
            })?;
            let kernel = kind.kernel_2d().ok_or_else(|| {
                Error::configuration(format!("edge weight type {kind} is not supported for 2D coordinates"))
            })?;
            return Ok(Distance::Coord2D { coords, kernel });
        }

        if let Some(coords) = &instance.node_coords_3d {
            let kind = kind.ok_or_else(|| {
                Error::configuration("instance has 3D coordinates but no edge weight type")
            })?;
            let kernel = kind.kernel_3d().ok_or_else(|| {
                Error::configuration(format!("edge weight type {kind} is not supported for 3D coordinates"))
            })?;
            return Ok(Distance::Coord3D { coords, kernel });
        }

        Err(Error::configuration(
            "instance has no means of calculating a distance",
        ))
    }

    /// Distance from `from` to `to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> i64 {
        match self {
            Distance::Weights(weights) => weights.get(from, to),
            Distance::Coord2D { coords, kernel } => kernel(coords[from], coords[to]),
            Distance::Coord3D { coords, kernel } => kernel(coords[from], coords[to]),
        }
    }
}

impl fmt::Debug for Distance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Weights(weights) => write!(f, "Distance::Weights({} nodes)", weights.size()),
            Distance::Coord2D { coords, .. } => write!(f, "Distance::Coord2D({} nodes)", coords.len()),
            Distance::Coord3D { coords, .. } => write!(f, "Distance::Coord3D({} nodes)", coords.len()),
        }
    }
}
