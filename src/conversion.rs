//! # Cartesian and spherical representations
//!
//! Conversions between Cartesian vectors and spherical angles, and between a position and
//! a position/velocity pair. All conversions are closed form and exact to rounding.
//!
//! The spherical angles are a longitude `theta` (right ascension, terrestrial longitude...)
//! measured anticlockwise from the x axis about z, and a latitude `phi` measured from the
//! x-y plane towards +z.
use nalgebra::{Matrix3, Vector3, Vector6};

use crate::constants::Radian;

/// Position and velocity held together.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionVelocity {
    pub p: Vector3<f64>,
    pub v: Vector3<f64>,
}

impl PositionVelocity {
    pub fn new(p: Vector3<f64>, v: Vector3<f64>) -> Self {
        PositionVelocity { p, v }
    }

    /// Rotate both the position and the velocity by `r`.
    pub fn rotate(&self, r: &Matrix3<f64>) -> Self {
        PositionVelocity {
            p: r * self.p,
            v: r * self.v,
        }
    }
}

impl From<Vector6<f64>> for PositionVelocity {
    fn from(pv: Vector6<f64>) -> Self {
        PositionVelocity {
            p: pv.fixed_rows::<3>(0).into_owned(),
            v: pv.fixed_rows::<3>(3).into_owned(),
        }
    }
}

impl From<PositionVelocity> for Vector6<f64> {
    fn from(pv: PositionVelocity) -> Self {
        Vector6::new(pv.p.x, pv.p.y, pv.p.z, pv.v.x, pv.v.y, pv.v.z)
    }
}

/// Cartesian vector to spherical angles.
///
/// Arguments
/// ---------
/// * `p`: Cartesian vector, any length.
///
/// Returns
/// --------
/// * `(theta, phi)`: longitude in `(-π, π]` and latitude in `[-π/2, π/2]`.
///
/// Remarks
/// -------
/// * The null vector returns `(0, 0)`.
/// * On the z axis the longitude is 0.
pub fn c2s(p: &Vector3<f64>) -> (Radian, Radian) {
    let d2 = p.x * p.x + p.y * p.y;

    let theta = if d2 == 0.0 { 0.0 } else { p.y.atan2(p.x) };
    let phi = if p.z == 0.0 { 0.0 } else { p.z.atan2(d2.sqrt()) };

    (theta, phi)
}

/// Spherical angles to a unit vector.
pub fn s2c(theta: Radian, phi: Radian) -> Vector3<f64> {
    let cp = phi.cos();
    Vector3::new(theta.cos() * cp, theta.sin() * cp, phi.sin())
}

/// Cartesian vector to spherical polar coordinates `(theta, phi, r)`.
pub fn p2s(p: &Vector3<f64>) -> (Radian, Radian, f64) {
    let (theta, phi) = c2s(p);
    (theta, phi, p.norm())
}

/// Spherical polar coordinates to a Cartesian vector.
pub fn s2p(theta: Radian, phi: Radian, r: f64) -> Vector3<f64> {
    s2c(theta, phi) * r
}

/// Lift a position into a position/velocity pair at rest.
pub fn p2pv(p: &Vector3<f64>) -> PositionVelocity {
    PositionVelocity {
        p: *p,
        v: Vector3::zeros(),
    }
}

/// Discard the velocity of a position/velocity pair.
pub fn pv2p(pv: &PositionVelocity) -> Vector3<f64> {
    pv.p
}

/// Spherical coordinates and their rates to a position/velocity pair.
///
/// Arguments
/// ---------
/// * `theta`, `phi`, `r`: longitude, latitude and radial distance.
/// * `td`, `pd`, `rd`: rates of change of the three coordinates.
pub fn s2pv(theta: Radian, phi: Radian, r: f64, td: f64, pd: f64, rd: f64) -> PositionVelocity {
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    let rcp = r * cp;
    let x = rcp * ct;
    let y = rcp * st;
    let rpd = r * pd;
    let w = rpd * sp - cp * rd;

    PositionVelocity {
        p: Vector3::new(x, y, r * sp),
        v: Vector3::new(-y * td - w * ct, x * td - w * st, rpd * cp + sp * rd),
    }
}

/// Spherical coordinates and rates of a position/velocity pair.
///
/// Returns
/// --------
/// * `(theta, phi, r, td, pd, rd)`.
///
/// Remarks
/// -------
/// * With a null position, the direction is taken from the velocity and the rates of the
///   angles are zero.
/// * On the z axis, `theta` and its rate are zero.
pub fn pv2s(pv: &PositionVelocity) -> (Radian, Radian, f64, f64, f64, f64) {
    let (xd, yd, zd) = (pv.v.x, pv.v.y, pv.v.z);

    let (mut x, mut y, mut z) = (pv.p.x, pv.p.y, pv.p.z);
    let mut rxy2 = x * x + y * y;
    let mut r2 = rxy2 + z * z;
    let rtrue = r2.sqrt();

    // Null position: use the direction of motion instead.
    let mut rw = rtrue;
    if rtrue == 0.0 {
        x = xd;
        y = yd;
        z = zd;
        rxy2 = x * x + y * y;
        r2 = rxy2 + z * z;
        rw = r2.sqrt();
    }

    let rxy = rxy2.sqrt();
    let xyp = x * xd + y * yd;

    let (theta, phi, td, pd) = if rxy2 != 0.0 {
        (
            y.atan2(x),
            z.atan2(rxy),
            (x * yd - y * xd) / rxy2,
            (zd * rxy2 - z * xyp) / (r2 * rxy),
        )
    } else {
        let phi = if z != 0.0 { z.atan2(rxy) } else { 0.0 };
        (0.0, phi, 0.0, 0.0)
    };

    let rd = if rw != 0.0 { (xyp + z * zd) / rw } else { 0.0 };

    (theta, phi, rtrue, td, pd, rd)
}
