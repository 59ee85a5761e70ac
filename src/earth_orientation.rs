//! # Earth rotation and polar motion
//!
//! Angles describing the Earth's spin about the Celestial Intermediate Pole, and the
//! polar-motion matrix tying the CIP to the terrestrial frame.
//!
//! ## Overview
//!
//! - CIO-based rotation: [`era00`] (Earth rotation angle) and [`eors`] (equation of the
//!   origins)
//! - Equinox-based rotation: Greenwich mean sidereal time ([`gmst00`], [`gmst06`]), the
//!   equation of the equinoxes ([`ee00`], [`ee00a`], [`ee00b`], [`ee06a`], [`eect00`])
//!   and Greenwich apparent sidereal time ([`gst00a`], [`gst00b`], [`gst06`], [`gst06a`])
//! - Polar motion: [`sp00`] (TIO locator s′) and [`pom00`]
//!
//! Time angles are returned in `[0, 2π)`.
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Radian, DJ00, DPI, RADSEC},
    precession::{bpn2xy, obl80, pnm06a, pr00},
    rotation::{anp, anpm, identity, rx, ry, rz},
    series::{term, FundamentalArgs, Nutation, SeriesEvaluator, SeriesTerm},
    time::JulianDate,
};

/// Polar-motion coordinates of the CIP with respect to the ITRS, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarMotion {
    pub xp: Radian,
    pub yp: Radian,
}

impl PolarMotion {
    pub fn new(xp: Radian, yp: Radian) -> Self {
        PolarMotion { xp, yp }
    }

    /// Polar-motion matrix for this pole position and the TIO locator `sp`.
    pub fn matrix(&self, sp: Radian) -> Matrix3<f64> {
        pom00(self.xp, self.yp, sp)
    }
}

/// Earth rotation angle, IAU 2000.
///
/// ```text
/// θ = 2π (0.7790572732640 + 1.00273781191135448 · Du),   Du = UT1 − 2451545.0
/// ```
///
/// Arguments
/// ---------
/// * `ut1`: UT1 date; any split works, the fractional days of both parts are kept apart
///   from the integer days to preserve precision.
///
/// Returns
/// --------
/// * ERA in radians, in `[0, 2π)`.
pub fn era00(ut1: JulianDate) -> Radian {
    let (d1, d2) = if ut1.jd1 < ut1.jd2 {
        (ut1.jd1, ut1.jd2)
    } else {
        (ut1.jd2, ut1.jd1)
    };
    let t = d1 + (d2 - DJ00);

    // Fractional part of the Julian Date.
    let f = (d1 % 1.0) + (d2 % 1.0);

    anp(DPI * (f + 0.7790572732640 + 0.00273781191135448 * t))
}

/// Greenwich mean sidereal time, consistent with IAU 2000 resolutions.
///
/// Arguments
/// ---------
/// * `ut1`: UT1 date, drives the Earth rotation angle.
/// * `tt`: TT date, drives the precession polynomial.
pub fn gmst00(ut1: JulianDate, tt: JulianDate) -> Radian {
    let t = tt.centuries_since_j2000();

    anp(era00(ut1)
        + (0.014506 + (4612.15739966 + (1.39667721 + (-0.00009344 + (0.00001882) * t) * t) * t) * t)
            * RADSEC)
}

/// Greenwich mean sidereal time, consistent with IAU 2006 precession.
pub fn gmst06(ut1: JulianDate, tt: JulianDate) -> Radian {
    let t = tt.centuries_since_j2000();

    anp(era00(ut1)
        + (0.014506
            + (4612.156534
                + (1.3915817 + (-0.00000044 + (-0.000029956 + (-0.0000000368) * t) * t) * t)
                    * t)
                * t)
            * RADSEC)
}

/// Complementary terms of order t⁰ (IERS Conventions 2003, Table 5.2e).
#[rustfmt::skip]
const E0: [SeriesTerm; 33] = [
    term([0, 0, 0, 0, 1, 0, 0, 0], 2640.96e-6, -0.39e-6),
    term([0, 0, 0, 0, 2, 0, 0, 0], 63.52e-6, -0.02e-6),
    term([0, 0, 2, -2, 3, 0, 0, 0], 11.75e-6, 0.01e-6),
    term([0, 0, 2, -2, 1, 0, 0, 0], 11.21e-6, 0.01e-6),
    term([0, 0, 2, -2, 2, 0, 0, 0], -4.55e-6, 0.00e-6),
    term([0, 0, 2, 0, 3, 0, 0, 0], 2.02e-6, 0.00e-6),
    term([0, 0, 2, 0, 1, 0, 0, 0], 1.98e-6, 0.00e-6),
    term([0, 0, 0, 0, 3, 0, 0, 0], -1.72e-6, 0.00e-6),
    term([0, 1, 0, 0, 1, 0, 0, 0], -1.41e-6, -0.01e-6),
    term([0, 1, 0, 0, -1, 0, 0, 0], -1.26e-6, -0.01e-6),

    term([1, 0, 0, 0, -1, 0, 0, 0], -0.63e-6, 0.00e-6),
    term([1, 0, 0, 0, 1, 0, 0, 0], -0.63e-6, 0.00e-6),
    term([0, 1, 2, -2, 3, 0, 0, 0], 0.46e-6, 0.00e-6),
    term([0, 1, 2, -2, 1, 0, 0, 0], 0.45e-6, 0.00e-6),
    term([0, 0, 4, -4, 4, 0, 0, 0], 0.36e-6, 0.00e-6),
    term([0, 0, 1, -1, 1, -8, 12, 0], -0.24e-6, -0.12e-6),
    term([0, 0, 2, 0, 0, 0, 0, 0], 0.32e-6, 0.00e-6),
    term([0, 0, 2, 0, 2, 0, 0, 0], 0.28e-6, 0.00e-6),
    term([1, 0, 2, 0, 3, 0, 0, 0], 0.27e-6, 0.00e-6),
    term([1, 0, 2, 0, 1, 0, 0, 0], 0.26e-6, 0.00e-6),

    term([0, 0, 2, -2, 0, 0, 0, 0], -0.21e-6, 0.00e-6),
    term([0, 1, -2, 2, -3, 0, 0, 0], 0.19e-6, 0.00e-6),
    term([0, 1, -2, 2, -1, 0, 0, 0], 0.18e-6, 0.00e-6),
    term([0, 0, 0, 0, 0, 8, -13, -1], -0.10e-6, 0.05e-6),
    term([0, 0, 0, 2, 0, 0, 0, 0], 0.15e-6, 0.00e-6),
    term([2, 0, -2, 0, -1, 0, 0, 0], -0.14e-6, 0.00e-6),
    term([1, 0, 0, -2, 1, 0, 0, 0], 0.14e-6, 0.00e-6),
    term([0, 1, 2, -2, 2, 0, 0, 0], -0.14e-6, 0.00e-6),
    term([1, 0, 0, -2, -1, 0, 0, 0], 0.14e-6, 0.00e-6),
    term([0, 0, 4, -2, 4, 0, 0, 0], 0.13e-6, 0.00e-6),

    term([0, 0, 2, -2, 4, 0, 0, 0], -0.11e-6, 0.00e-6),
    term([1, 0, -2, 0, -3, 0, 0, 0], 0.11e-6, 0.00e-6),
    term([1, 0, -2, 0, -1, 0, 0, 0], 0.11e-6, 0.00e-6),
];

/// Complementary terms of order t¹.
const E1: [SeriesTerm; 1] = [term([0, 0, 0, 0, 1, 0, 0, 0], -0.87e-6, 0.00e-6)];

/// Equation of the equinoxes complementary terms, consistent with IAU 2000 resolutions.
///
/// The complementary terms are the part of the equation of the equinoxes that is not
/// `Δψ cos ε_A`. They are a series in the fundamental arguments (IERS Conventions 2003,
/// Table 5.2e).
///
/// Arguments
/// ---------
/// * `tt`: TT date.
///
/// Returns
/// --------
/// * The complementary terms in radians.
pub fn eect00(tt: JulianDate) -> Radian {
    let t = tt.centuries_since_j2000();
    let fa = FundamentalArgs::at(t);

    let s0 = fa.sum(&E0);
    let s1 = fa.sum(&E1);

    (s0 + s1 * t) * RADSEC
}

/// Equation of the equinoxes, IAU 2000, given the nutation in longitude and mean obliquity.
///
/// ```text
/// EE = Δψ · cos ε_A + complementary terms
/// ```
///
/// Arguments
/// ---------
/// * `tt`: TT date.
/// * `epsa`: mean obliquity of date.
/// * `dpsi`: nutation in longitude.
pub fn ee00(tt: JulianDate, epsa: Radian, dpsi: Radian) -> Radian {
    dpsi * epsa.cos() + eect00(tt)
}

fn ee00_with(tt: JulianDate, nutation: Nutation) -> Radian {
    let (_, depspr) = pr00(tt);
    let epsa = obl80(tt) + depspr;
    ee00(tt, epsa, nutation.dpsi)
}

/// Equation of the equinoxes, compatible with IAU 2000A precession-nutation.
pub fn ee00a<S: SeriesEvaluator + ?Sized>(series: &S, tt: JulianDate) -> Radian {
    ee00_with(tt, series.nut00a(tt))
}

/// Equation of the equinoxes, compatible with IAU 2000B precession-nutation.
pub fn ee00b<S: SeriesEvaluator + ?Sized>(series: &S, tt: JulianDate) -> Radian {
    ee00_with(tt, series.nut00b(tt))
}

/// Equation of the equinoxes, compatible with IAU 2006/2000A, in `[-π, π)`.
///
/// Obtained as `GST06A − GMST06` with UT1 set equal to TT.
pub fn ee06a<S: SeriesEvaluator + ?Sized>(series: &S, tt: JulianDate) -> Radian {
    anpm(gst06a(series, tt, tt) - gmst06(tt, tt))
}

/// Greenwich apparent sidereal time, IAU 2000A.
pub fn gst00a<S: SeriesEvaluator + ?Sized>(series: &S, ut1: JulianDate, tt: JulianDate) -> Radian {
    anp(gmst00(ut1, tt) + ee00a(series, tt))
}

/// Greenwich apparent sidereal time, IAU 2000B.
///
/// Only UT1 is needed: the 2000B model takes TT equal to UT1, which costs at most
/// about 0.1 mas over 1900-2100.
pub fn gst00b<S: SeriesEvaluator + ?Sized>(series: &S, ut1: JulianDate) -> Radian {
    anp(gmst00(ut1, ut1) + ee00b(series, ut1))
}

/// Greenwich apparent sidereal time, IAU 2006, given the NPB matrix.
///
/// Arguments
/// ---------
/// * `series`: source of the CIO locator.
/// * `ut1`: UT1 date.
/// * `tt`: TT date.
/// * `rnpb`: nutation × precession × bias matrix.
///
/// Returns
/// --------
/// * `ERA − EO`, the equation of the origins being taken from `rnpb` and `s06`.
pub fn gst06<S: SeriesEvaluator + ?Sized>(
    series: &S,
    ut1: JulianDate,
    tt: JulianDate,
    rnpb: &Matrix3<f64>,
) -> Radian {
    let cip = bpn2xy(rnpb);
    let s = series.s06(tt, cip.x, cip.y);

    anp(era00(ut1) - eors(rnpb, s))
}

/// Greenwich apparent sidereal time, IAU 2006/2000A.
pub fn gst06a<S: SeriesEvaluator + ?Sized>(series: &S, ut1: JulianDate, tt: JulianDate) -> Radian {
    let rnpb = pnm06a(series, tt);
    gst06(series, ut1, tt, &rnpb)
}

/// Equation of the origins, given the BPN matrix and the CIO locator.
///
/// Arguments
/// ---------
/// * `rnpb`: classical nutation × precession × bias matrix.
/// * `s`: CIO locator.
///
/// Returns
/// --------
/// * The equation of the origins, `ERA − GST`.
///
/// Remarks
/// -------
/// * The CIO is located on the CIP equator from `s`, then its distance from the
///   equinox (the origin of `rnpb`) is measured (Wallace & Capitaine 2006).
pub fn eors(rnpb: &Matrix3<f64>, s: Radian) -> Radian {
    let x = rnpb[(2, 0)];
    let ax = x / (1.0 + rnpb[(2, 2)]);
    let xs = 1.0 - ax * x;
    let ys = -ax * rnpb[(2, 1)];
    let zs = -x;
    let p = rnpb[(0, 0)] * xs + rnpb[(0, 1)] * ys + rnpb[(0, 2)] * zs;
    let q = rnpb[(1, 0)] * xs + rnpb[(1, 1)] * ys + rnpb[(1, 2)] * zs;

    if p != 0.0 || q != 0.0 {
        s - q.atan2(p)
    } else {
        s
    }
}

/// Equation of the origins, IAU 2006 precession and IAU 2000A nutation.
pub fn eo06a<S: SeriesEvaluator + ?Sized>(series: &S, tt: JulianDate) -> Radian {
    let r = pnm06a(series, tt);
    let cip = bpn2xy(&r);
    let s = series.s06(tt, cip.x, cip.y);
    eors(&r, s)
}

/// TIO locator s′, positioning the Terrestrial Intermediate Origin on the CIP equator.
///
/// ```text
/// s' = -47 µas · t
/// ```
/// with `t` in Julian centuries of TT since J2000.0 (IERS Conventions 2003).
pub fn sp00(tt: JulianDate) -> Radian {
    let t = tt.centuries_since_j2000();
    -47e-6 * t * RADSEC
}

/// Polar-motion matrix, IAU 2000.
///
/// ```text
/// W = R₁(-yp) · R₂(-xp) · R₃(s')
/// ```
///
/// Arguments
/// ---------
/// * `xp`, `yp`: coordinates of the pole, radians.
/// * `sp`: TIO locator s′, radians.
///
/// Returns
/// --------
/// * The matrix rotating TIRS vectors into the ITRS.
pub fn pom00(xp: Radian, yp: Radian, sp: Radian) -> Matrix3<f64> {
    let mut rpom = identity();
    rz(sp, &mut rpom);
    ry(-xp, &mut rpom);
    rx(-yp, &mut rpom);
    rpom
}
