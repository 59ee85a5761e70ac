//! # Frame bias, precession and nutation matrices
//!
//! Closed-form precession angle polynomials and the matrices built from them, for the
//! IAU 2000 (Lieske angles with the 2000 rate corrections) and IAU 2006
//! (Fukushima-Williams angles) models.
//!
//! ## Overview
//!
//! - Frame bias and precession-rate corrections: [`bi00`], [`pr00`]
//! - Mean obliquity: [`obl80`], [`obl06`]
//! - Bias-precession matrices: [`bp00`], [`bp06`], [`pmat06`]
//! - Fukushima-Williams angles and matrix: [`pfw06`], [`fw2m`]
//! - Nutation matrix: [`numat`]
//! - Full bias-precession-nutation (BPN) products: [`pn00`], [`pn00a`], [`pn00b`],
//!   [`pnm00a`], [`pnm00b`], [`pn06`], [`pn06a`], [`pnm06a`]
//! - CIP coordinates from a BPN matrix: [`bpn2xy`]
//!
//! Nutation angles come from a [`SeriesEvaluator`]; everything else is computed here.
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Radian, RADSEC, T2000},
    rotation::{identity, rx, ry, rz},
    series::{Nutation, SeriesEvaluator},
    time::JulianDate,
};

/// Obliquity of the ecliptic at J2000.0 in the IAU 1976 model (arcseconds).
const EPS0_1976: f64 = 84381.448;

/// Coordinates of the Celestial Intermediate Pole in the GCRS.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CipCoordinates {
    pub x: f64,
    pub y: f64,
}

/// Frame bias corrections to the IAU 1976 precession-nutation quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBias {
    /// Longitude correction
    pub dpsibi: Radian,
    /// Obliquity correction
    pub depsbi: Radian,
    /// ICRS right ascension of the J2000.0 mean equinox
    pub dra: Radian,
}

/// Fukushima-Williams precession angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FukushimaWilliams {
    /// F-W angle γ̄
    pub gamb: Radian,
    /// F-W angle φ̄
    pub phib: Radian,
    /// F-W angle ψ̄
    pub psib: Radian,
    /// Mean obliquity ε_A
    pub epsa: Radian,
}

/// Bias-precession matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasPrecession {
    /// Frame bias (GCRS → mean J2000.0)
    pub rb: Matrix3<f64>,
    /// Precession (mean J2000.0 → mean of date)
    pub rp: Matrix3<f64>,
    /// Bias-precession (GCRS → mean of date)
    pub rbp: Matrix3<f64>,
}

/// Everything produced on the way to the BPN matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecessionNutation {
    /// Mean obliquity
    pub epsa: Radian,
    /// Frame bias matrix
    pub rb: Matrix3<f64>,
    /// Precession matrix
    pub rp: Matrix3<f64>,
    /// Bias-precession matrix
    pub rbp: Matrix3<f64>,
    /// Nutation matrix
    pub rn: Matrix3<f64>,
    /// Bias-precession-nutation matrix (GCRS → true equator and equinox of date)
    pub rbpn: Matrix3<f64>,
}

/// Frame bias components of the IAU 2000 precession-nutation models.
///
/// Returns
/// --------
/// * The longitude and obliquity corrections and the ICRS right ascension of the
///   J2000.0 mean equinox (IERS Conventions 2003, Chapter 5).
pub fn bi00() -> FrameBias {
    FrameBias {
        dpsibi: -0.041775 * RADSEC,
        depsbi: -0.0068192 * RADSEC,
        dra: -0.0146 * RADSEC,
    }
}

/// IAU 2000 precession-rate corrections to the IAU 1976 model.
///
/// Arguments
/// ---------
/// * `tt`: TT date.
///
/// Returns
/// --------
/// * `(dpsipr, depspr)`: corrections to the precession in longitude and obliquity, radians.
pub fn pr00(tt: JulianDate) -> (Radian, Radian) {
    const PRECOR: f64 = -0.29965 * RADSEC;
    const OBLCOR: f64 = -0.02524 * RADSEC;

    let t = tt.centuries_since_j2000();
    (PRECOR * t, OBLCOR * t)
}

/// Mean obliquity of the ecliptic, IAU 1980 model.
pub fn obl80(tt: JulianDate) -> Radian {
    let t = tt.centuries_since_j2000();
    RADSEC * (EPS0_1976 + (-46.8150 + (-0.00059 + 0.001813 * t) * t) * t)
}

/// Mean obliquity of the ecliptic, IAU 2006 precession model.
pub fn obl06(tt: JulianDate) -> Radian {
    let t = tt.centuries_since_j2000();
    (84381.406
        + (-46.836769
            + (-0.0001831 + (0.00200340 + (-0.000000576 + (-0.0000000434) * t) * t) * t) * t)
            * t)
        * RADSEC
}

/// Frame bias and precession matrices, IAU 2000.
///
/// The precession matrix is built from the Lieske et al. (1977) angles with the
/// [`pr00`] rate corrections applied:
///
/// ```text
/// RB = R₁(-Δε_bi) · R₂(Δψ_bi · sin ε₀) · R₃(dα₀)
/// RP = R₃(χ_A) · R₁(-ω_A) · R₃(-ψ_A) · R₁(ε₀)
/// ```
///
/// Arguments
/// ---------
/// * `tt`: TT date.
///
/// Returns
/// --------
/// * [`BiasPrecession`] with `rbp = rp · rb`.
pub fn bp00(tt: JulianDate) -> BiasPrecession {
    let eps0 = EPS0_1976 * RADSEC;
    let t = tt.centuries_since_j2000();

    let bias = bi00();

    // Lieske angles.
    let psia77 = (5038.7784 + (-1.07259 + (-0.001147) * t) * t) * t * RADSEC;
    let oma77 = eps0 + ((0.05127 + (-0.007726) * t) * t) * t * RADSEC;
    let chia = (10.5526 + (-2.38064 + (-0.001125) * t) * t) * t * RADSEC;

    let (dpsipr, depspr) = pr00(tt);
    let psia = psia77 + dpsipr;
    let oma = oma77 + depspr;

    let mut rb = identity();
    rz(bias.dra, &mut rb);
    ry(bias.dpsibi * eps0.sin(), &mut rb);
    rx(-bias.depsbi, &mut rb);

    let mut rp = identity();
    rx(eps0, &mut rp);
    rz(-psia, &mut rp);
    rx(-oma, &mut rp);
    rz(chia, &mut rp);

    BiasPrecession {
        rb,
        rp,
        rbp: rp * rb,
    }
}

/// Fukushima-Williams precession angles, IAU 2006.
///
/// The `psib` angle includes the frame bias, so [`fw2m`] applied to these angles yields
/// the bias-precession matrix directly.
pub fn pfw06(tt: JulianDate) -> FukushimaWilliams {
    let t = tt.centuries_since_j2000();

    let gamb = (-0.052928
        + (10.556378
            + (0.4932044 + (-0.00031238 + (-0.000002788 + (0.0000000260) * t) * t) * t) * t)
            * t)
        * RADSEC;
    let phib = (84381.412819
        + (-46.811016
            + (0.0511268 + (0.00053289 + (-0.000000440 + (-0.0000000176) * t) * t) * t) * t)
            * t)
        * RADSEC;
    let psib = (-0.041775
        + (5038.481484
            + (1.5584175 + (-0.00018522 + (-0.000026452 + (-0.0000000148) * t) * t) * t) * t)
            * t)
        * RADSEC;

    FukushimaWilliams {
        gamb,
        phib,
        psib,
        epsa: obl06(tt),
    }
}

/// Matrix from Fukushima-Williams angles: `R₁(-ε) · R₃(-ψ) · R₁(φ) · R₃(γ)`.
///
/// With the nutation added to `psi` and `eps` this is the full BPN matrix.
pub fn fw2m(gamb: Radian, phib: Radian, psi: Radian, eps: Radian) -> Matrix3<f64> {
    let mut r = identity();
    rz(gamb, &mut r);
    rx(phib, &mut r);
    rz(-psi, &mut r);
    rx(-eps, &mut r);
    r
}

/// Precession matrix including frame bias, IAU 2006.
pub fn pmat06(tt: JulianDate) -> Matrix3<f64> {
    let fw = pfw06(tt);
    fw2m(fw.gamb, fw.phib, fw.psib, fw.epsa)
}

/// Frame bias and precession matrices, IAU 2006.
pub fn bp06(tt: JulianDate) -> BiasPrecession {
    let rb = pmat06(JulianDate::from_mjd(T2000));
    let rbp = pmat06(tt);

    BiasPrecession {
        rb,
        rp: rbp * rb.transpose(),
        rbp,
    }
}

/// Nutation matrix: `R₁(-(ε_A + Δε)) · R₃(-Δψ) · R₁(ε_A)`.
///
/// Arguments
/// ---------
/// * `epsa`: mean obliquity of date.
/// * `dpsi`, `deps`: nutation in longitude and obliquity.
pub fn numat(epsa: Radian, dpsi: Radian, deps: Radian) -> Matrix3<f64> {
    let mut r = identity();
    rx(epsa, &mut r);
    rz(-dpsi, &mut r);
    rx(-(epsa + deps), &mut r);
    r
}

/// Precession-nutation, IAU 2000 model, given the nutation.
///
/// Arguments
/// ---------
/// * `tt`: TT date.
/// * `nutation`: nutation in longitude and obliquity; any IAU 2000 flavour, or
///   observed values corrected with IERS celestial pole offsets.
///
/// Returns
/// --------
/// * [`PrecessionNutation`] with the mean obliquity `obl80 + depspr` and
///   `rbpn = rn · rbp`.
pub fn pn00(tt: JulianDate, nutation: Nutation) -> PrecessionNutation {
    let (_, depspr) = pr00(tt);
    let epsa = obl80(tt) + depspr;

    let bp = bp00(tt);
    let rn = numat(epsa, nutation.dpsi, nutation.deps);

    PrecessionNutation {
        epsa,
        rb: bp.rb,
        rp: bp.rp,
        rbp: bp.rbp,
        rn,
        rbpn: rn * bp.rbp,
    }
}

/// [`pn00`] with the IAU 2000A nutation.
pub fn pn00a<S: SeriesEvaluator + ?Sized>(
    series: &S,
    tt: JulianDate,
) -> (Nutation, PrecessionNutation) {
    let nutation = series.nut00a(tt);
    (nutation, pn00(tt, nutation))
}

/// [`pn00`] with the IAU 2000B nutation.
pub fn pn00b<S: SeriesEvaluator + ?Sized>(
    series: &S,
    tt: JulianDate,
) -> (Nutation, PrecessionNutation) {
    let nutation = series.nut00b(tt);
    (nutation, pn00(tt, nutation))
}

/// BPN matrix, IAU 2000A.
pub fn pnm00a<S: SeriesEvaluator + ?Sized>(series: &S, tt: JulianDate) -> Matrix3<f64> {
    pn00a(series, tt).1.rbpn
}

/// BPN matrix, IAU 2000B.
pub fn pnm00b<S: SeriesEvaluator + ?Sized>(series: &S, tt: JulianDate) -> Matrix3<f64> {
    pn00b(series, tt).1.rbpn
}

/// Precession-nutation, IAU 2006 model, given the nutation.
///
/// The matrices are built from Fukushima-Williams angles: the frame bias is the
/// bias-precession matrix at J2000.0, and the BPN matrix uses `ψ̄ + Δψ` and `ε_A + Δε`.
pub fn pn06(tt: JulianDate, nutation: Nutation) -> PrecessionNutation {
    let fw0 = pfw06(JulianDate::from_mjd(T2000));
    let rb = fw2m(fw0.gamb, fw0.phib, fw0.psib, fw0.epsa);

    let fw = pfw06(tt);
    let rbp = fw2m(fw.gamb, fw.phib, fw.psib, fw.epsa);
    let rp = rbp * rb.transpose();

    let rbpn = fw2m(
        fw.gamb,
        fw.phib,
        fw.psib + nutation.dpsi,
        fw.epsa + nutation.deps,
    );
    let rn = rbpn * rbp.transpose();

    PrecessionNutation {
        epsa: fw.epsa,
        rb,
        rp,
        rbp,
        rn,
        rbpn,
    }
}

/// [`pn06`] with the IAU 2000A nutation adjusted to IAU 2006.
pub fn pn06a<S: SeriesEvaluator + ?Sized>(
    series: &S,
    tt: JulianDate,
) -> (Nutation, PrecessionNutation) {
    let nutation = series.nut06a(tt);
    (nutation, pn06(tt, nutation))
}

/// BPN matrix, IAU 2006/2000A.
pub fn pnm06a<S: SeriesEvaluator + ?Sized>(series: &S, tt: JulianDate) -> Matrix3<f64> {
    let fw = pfw06(tt);
    let nutation = series.nut06a(tt);
    fw2m(
        fw.gamb,
        fw.phib,
        fw.psib + nutation.dpsi,
        fw.epsa + nutation.deps,
    )
}

/// CIP `(x, y)` from a BPN matrix: the first two elements of its bottom row.
pub fn bpn2xy(rbpn: &Matrix3<f64>) -> CipCoordinates {
    CipCoordinates {
        x: rbpn[(2, 0)],
        y: rbpn[(2, 1)],
    }
}
