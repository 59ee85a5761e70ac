//! # Celestial-to-terrestrial matrix
//!
//! Assembly of RC2T, the matrix taking GCRS vectors to the ITRS:
//!
//! ```text
//! CIO based:      RC2T = RPOM · R₃(ERA) · RC2I
//! Equinox based:  RC2T = RPOM · R₃(GST) · RBPN
//! ```
//!
//! [`c2tcio`] and [`c2teqx`] are the two assemblers. The façades on top of them take TT
//! and UT1 dates plus the pole coordinates and run the whole chain for one model:
//!
//! | Façade        | Precession-nutation          | Rotation     | s′       |
//! |---------------|------------------------------|--------------|----------|
//! | [`c2t00a`]    | IAU 2000A                    | ERA          | [`sp00`] |
//! | [`c2t00b`]    | IAU 2000B                    | ERA          | 0        |
//! | [`c2t06a`]    | IAU 2006/2000A               | ERA          | [`sp00`] |
//! | [`c2tpe`]     | IAU 2000, given (Δψ, Δε)     | GMST00 + EE  | [`sp00`] |
//! | [`c2txy`]     | given CIP (x, y)             | ERA          | [`sp00`] |
//! | [`c2t_bpn`]   | given BPN matrix             | ERA          | [`sp00`] |
//!
//! The variants taking nutation angles, CIP coordinates or a BPN matrix let a caller
//! evaluate the expensive precession-nutation once and update only the Earth rotation
//! over a tracking pass.
use std::{fmt, str::FromStr};

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::{
    constants::Radian,
    earth_orientation::{era00, ee00, gmst00, gst00a, gst00b, gst06, sp00, PolarMotion},
    frame_errors::FrameError,
    intermediate::{c2i00a, c2i00b, c2i06a, c2ibpn, c2ixy, Model},
    precession::{pn00, pnm00a, pnm00b, pnm06a, CipCoordinates},
    rotation::rz,
    series::{Nutation, SeriesEvaluator},
    time::JulianDate,
};

/// Which intermediate frame carries the Earth rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Convention {
    /// Celestial Intermediate Origin and Earth rotation angle.
    #[default]
    Cio,
    /// True equinox and Greenwich apparent sidereal time.
    Equinox,
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Cio => f.pad("CIO"),
            Convention::Equinox => f.pad("equinox"),
        }
    }
}

impl FromStr for Convention {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cio" | "era" => Ok(Convention::Cio),
            "equinox" | "eqx" | "gst" => Ok(Convention::Equinox),
            _ => Err(FrameError::UnknownConvention(s.to_string())),
        }
    }
}

/// Assemble RC2T from the CIO-based components.
///
/// Arguments
/// ---------
/// * `rc2i`: celestial-to-intermediate matrix.
/// * `era`: Earth rotation angle.
/// * `rpom`: polar-motion matrix.
///
/// Returns
/// --------
/// * `rpom · R₃(era) · rc2i`.
pub fn c2tcio(rc2i: &Matrix3<f64>, era: Radian, rpom: &Matrix3<f64>) -> Matrix3<f64> {
    let mut r = *rc2i;
    rz(era, &mut r);
    rpom * r
}

/// Assemble RC2T from the equinox-based components.
///
/// Arguments
/// ---------
/// * `rbpn`: celestial-to-true matrix (bias-precession-nutation).
/// * `gst`: Greenwich apparent sidereal time.
/// * `rpom`: polar-motion matrix.
///
/// Returns
/// --------
/// * `rpom · R₃(gst) · rbpn`.
pub fn c2teqx(rbpn: &Matrix3<f64>, gst: Radian, rpom: &Matrix3<f64>) -> Matrix3<f64> {
    let mut r = *rbpn;
    rz(gst, &mut r);
    rpom * r
}

/// Earth rotation and polar motion around a given RC2I, CIO based.
fn cio_chain(
    rc2i: &Matrix3<f64>,
    tt: JulianDate,
    ut1: JulianDate,
    pm: PolarMotion,
) -> Matrix3<f64> {
    let era = era00(ut1);
    let rpom = pm.matrix(sp00(tt));
    c2tcio(rc2i, era, &rpom)
}

/// Celestial-to-terrestrial matrix, IAU 2000A, CIO based.
///
/// Arguments
/// ---------
/// * `series`: nutation and CIO-locator series.
/// * `tt`: TT date.
/// * `ut1`: UT1 date.
/// * `pm`: pole coordinates, e.g. from IERS bulletins.
pub fn c2t00a<S: SeriesEvaluator + ?Sized>(
    series: &S,
    tt: JulianDate,
    ut1: JulianDate,
    pm: PolarMotion,
) -> Matrix3<f64> {
    let rc2i = c2i00a(series, tt);
    cio_chain(&rc2i, tt, ut1, pm)
}

/// Celestial-to-terrestrial matrix, IAU 2000B, CIO based.
///
/// The TIO locator s′ is neglected, consistently with the 1 mas accuracy of the model.
pub fn c2t00b<S: SeriesEvaluator + ?Sized>(
    series: &S,
    tt: JulianDate,
    ut1: JulianDate,
    pm: PolarMotion,
) -> Matrix3<f64> {
    let rc2i = c2i00b(series, tt);
    let era = era00(ut1);
    let rpom = pm.matrix(0.0);
    c2tcio(&rc2i, era, &rpom)
}

/// Celestial-to-terrestrial matrix, IAU 2006/2000A, CIO based.
pub fn c2t06a<S: SeriesEvaluator + ?Sized>(
    series: &S,
    tt: JulianDate,
    ut1: JulianDate,
    pm: PolarMotion,
) -> Matrix3<f64> {
    let rc2i = c2i06a(series, tt);
    cio_chain(&rc2i, tt, ut1, pm)
}

/// Celestial-to-terrestrial matrix, equinox based, given the nutation.
///
/// Arguments
/// ---------
/// * `tt`, `ut1`: TT and UT1 dates.
/// * `nutation`: nutation in longitude and obliquity, any IAU 2000 flavour.
/// * `pm`: pole coordinates.
///
/// Returns
/// --------
/// * `RPOM · R₃(GMST00 + EE00) · RBPN`, the BPN matrix coming from [`pn00`].
pub fn c2tpe(
    tt: JulianDate,
    ut1: JulianDate,
    nutation: Nutation,
    pm: PolarMotion,
) -> Matrix3<f64> {
    let pn = pn00(tt, nutation);
    let gmst = gmst00(ut1, tt);
    let ee = ee00(tt, pn.epsa, nutation.dpsi);
    let rpom = pm.matrix(sp00(tt));

    c2teqx(&pn.rbpn, gmst + ee, &rpom)
}

/// Celestial-to-terrestrial matrix, CIO based, given the CIP coordinates.
///
/// `s` is evaluated from the IAU 2000A series.
pub fn c2txy<S: SeriesEvaluator + ?Sized>(
    series: &S,
    tt: JulianDate,
    ut1: JulianDate,
    cip: CipCoordinates,
    pm: PolarMotion,
) -> Matrix3<f64> {
    let rc2i = c2ixy(series, tt, cip.x, cip.y);
    cio_chain(&rc2i, tt, ut1, pm)
}

/// Celestial-to-terrestrial matrix, CIO based, given a bias-precession-nutation matrix.
pub fn c2t_bpn<S: SeriesEvaluator + ?Sized>(
    series: &S,
    tt: JulianDate,
    ut1: JulianDate,
    rbpn: &Matrix3<f64>,
    pm: PolarMotion,
) -> Matrix3<f64> {
    let rc2i = c2ibpn(series, tt, rbpn);
    cio_chain(&rc2i, tt, ut1, pm)
}

/// Celestial-to-terrestrial matrix, equinox based, for the selected model.
///
/// | Model      | BPN          | GST                      | s′       |
/// |------------|--------------|--------------------------|----------|
/// | `Iau2000A` | [`pnm00a`]   | [`gst00a`]               | [`sp00`] |
/// | `Iau2000B` | [`pnm00b`]   | [`gst00b`]               | 0        |
/// | `Iau2006A` | [`pnm06a`]   | [`gst06`] from that BPN  | [`sp00`] |
pub fn c2t_equinox<S: SeriesEvaluator + ?Sized>(
    series: &S,
    model: Model,
    tt: JulianDate,
    ut1: JulianDate,
    pm: PolarMotion,
) -> Matrix3<f64> {
    let (rbpn, gst, sp) = match model {
        Model::Iau2000A => (pnm00a(series, tt), gst00a(series, ut1, tt), sp00(tt)),
        Model::Iau2000B => (pnm00b(series, tt), gst00b(series, ut1), 0.0),
        Model::Iau2006A => {
            let rbpn = pnm06a(series, tt);
            let gst = gst06(series, ut1, tt, &rbpn);
            (rbpn, gst, sp00(tt))
        }
    };

    c2teqx(&rbpn, gst, &pm.matrix(sp))
}

/// Celestial-to-terrestrial matrix, CIO based, for the selected model.
pub fn c2t<S: SeriesEvaluator + ?Sized>(
    series: &S,
    model: Model,
    tt: JulianDate,
    ut1: JulianDate,
    pm: PolarMotion,
) -> Matrix3<f64> {
    match model {
        Model::Iau2000A => c2t00a(series, tt, ut1, pm),
        Model::Iau2000B => c2t00b(series, tt, ut1, pm),
        Model::Iau2006A => c2t06a(series, tt, ut1, pm),
    }
}
