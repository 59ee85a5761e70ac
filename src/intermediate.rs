//! # Celestial-to-intermediate matrix
//!
//! Builders for RC2I, the matrix taking GCRS vectors to the Celestial Intermediate
//! Reference System (CIP pole, CIO origin). RC2I can be built from
//!
//! * the CIP coordinates `(x, y)` and the CIO locator `s` ([`c2ixys`]),
//! * the CIP coordinates alone, `s` being evaluated from the IAU 2000A series ([`c2ixy`]),
//! * a bias-precession-nutation matrix ([`c2ibpn`]),
//! * a TT date and a model ([`c2i00a`], [`c2i00b`], [`c2i06a`], [`c2i`]).
use std::{fmt, str::FromStr};

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::{
    constants::Radian,
    frame_errors::FrameError,
    precession::{bpn2xy, pnm00a, pnm00b, pnm06a},
    rotation::{identity, ry, rz},
    series::SeriesEvaluator,
    time::JulianDate,
};

/// Precession-nutation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Model {
    /// IAU 2000A: full nutation series, IAU 2000 precession.
    Iau2000A,
    /// IAU 2000B: truncated nutation series, s′ neglected. About 1 mas.
    Iau2000B,
    /// IAU 2006 precession with IAU 2000A nutation.
    #[default]
    Iau2006A,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::Iau2000A, Model::Iau2000B, Model::Iau2006A];
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Model::Iau2000A => "IAU2000A",
            Model::Iau2000B => "IAU2000B",
            Model::Iau2006A => "IAU2006A",
        };
        f.pad(name)
    }
}

impl FromStr for Model {
    type Err = FrameError;

    /// Accepts `IAU2000A`, `2000A`, `IAU 2000B`, `iau2006a`, `2006`, `IAU2006/2000A`...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_uppercase();
        let key = key.strip_prefix("IAU").unwrap_or(&key);

        match key {
            "2000A" => Ok(Model::Iau2000A),
            "2000B" => Ok(Model::Iau2000B),
            "2006" | "2006A" | "2006/2000A" => Ok(Model::Iau2006A),
            _ => Err(FrameError::UnknownModel(s.to_string())),
        }
    }
}

/// Celestial-to-intermediate matrix from the CIP coordinates and the CIO locator.
///
/// With `E = atan2(y, x)` and `d = atan(√(r² / (1 − r²)))`, `r² = x² + y²`:
///
/// ```text
/// RC2I = R₃(-(E + s)) · R₂(d) · R₃(E)
/// ```
///
/// Arguments
/// ---------
/// * `x`, `y`: CIP coordinates in the GCRS.
/// * `s`: CIO locator.
///
/// Returns
/// --------
/// * RC2I, such that `v_CIRS = RC2I · v_GCRS`.
///
/// Remarks
/// -------
/// * At the pole (`x = y = 0`) `E` is taken as zero and RC2I reduces to `R₃(-s)`.
pub fn c2ixys(x: f64, y: f64, s: Radian) -> Matrix3<f64> {
    let r2 = x * x + y * y;
    let e = if r2 > 0.0 { y.atan2(x) } else { 0.0 };
    let d = (r2 / (1.0 - r2)).sqrt().atan();

    let mut rc2i = identity();
    rz(e, &mut rc2i);
    ry(d, &mut rc2i);
    rz(-(e + s), &mut rc2i);
    rc2i
}

/// Celestial-to-intermediate matrix from the CIP coordinates, with `s` from the IAU 2000A
/// locator series.
///
/// Arguments
/// ---------
/// * `series`: source of the CIO locator.
/// * `tt`: TT date at which `s` is evaluated.
/// * `x`, `y`: CIP coordinates, e.g. from a precession-nutation model or corrected with
///   IERS celestial pole offsets.
pub fn c2ixy<S: SeriesEvaluator + ?Sized>(
    series: &S,
    tt: JulianDate,
    x: f64,
    y: f64,
) -> Matrix3<f64> {
    c2ixys(x, y, series.s00(tt, x, y))
}

/// Celestial-to-intermediate matrix from a bias-precession-nutation matrix (IAU 2000).
///
/// The CIP is read from the bottom row of `rbpn`, then [`c2ixy`] is applied.
pub fn c2ibpn<S: SeriesEvaluator + ?Sized>(
    series: &S,
    tt: JulianDate,
    rbpn: &Matrix3<f64>,
) -> Matrix3<f64> {
    let cip = bpn2xy(rbpn);
    c2ixy(series, tt, cip.x, cip.y)
}

/// Celestial-to-intermediate matrix, IAU 2000A.
pub fn c2i00a<S: SeriesEvaluator + ?Sized>(series: &S, tt: JulianDate) -> Matrix3<f64> {
    let rbpn = pnm00a(series, tt);
    c2ibpn(series, tt, &rbpn)
}

/// Celestial-to-intermediate matrix, IAU 2000B.
pub fn c2i00b<S: SeriesEvaluator + ?Sized>(series: &S, tt: JulianDate) -> Matrix3<f64> {
    let rbpn = pnm00b(series, tt);
    c2ibpn(series, tt, &rbpn)
}

/// Celestial-to-intermediate matrix, IAU 2006/2000A, with `s` from the IAU 2006 series.
pub fn c2i06a<S: SeriesEvaluator + ?Sized>(series: &S, tt: JulianDate) -> Matrix3<f64> {
    let rbpn = pnm06a(series, tt);
    let cip = bpn2xy(&rbpn);
    let s = series.s06(tt, cip.x, cip.y);
    c2ixys(cip.x, cip.y, s)
}

/// Celestial-to-intermediate matrix for the selected model.
pub fn c2i<S: SeriesEvaluator + ?Sized>(series: &S, model: Model, tt: JulianDate) -> Matrix3<f64> {
    match model {
        Model::Iau2000A => c2i00a(series, tt),
        Model::Iau2000B => c2i00b(series, tt),
        Model::Iau2006A => c2i06a(series, tt),
    }
}

#[cfg(test)]
mod intermediate_test {
    use super::*;
    use crate::{
        rotation::{from_rows, is_orthogonal},
        series::ErfaSeries,
    };
    use approx::assert_relative_eq;

    const TT: JulianDate = JulianDate {
        jd1: 2400000.5,
        jd2: 53736.0,
    };

    const X: f64 = 0.5791308486706011000e-3;
    const Y: f64 = 0.4020579816732961219e-4;

    #[test]
    fn test_c2ixys() {
        let rc2i = c2ixys(X, Y, -0.1220040848472271978e-7);
        let expected = [
            [0.9999998323037157138, 0.5581984869168499149e-9, -0.5791308491611282180e-3],
            [-0.2384261642670440317e-7, 0.9999999991917468964, -0.4020579110169668931e-4],
            [0.5791308486706011000e-3, 0.4020579816732961219e-4, 0.9999998314954627590],
        ];
        assert_relative_eq!(rc2i, from_rows(expected), epsilon = 1e-12);
        assert!(is_orthogonal(&rc2i, 1e-12));
    }

    #[test]
    fn test_c2ixys_pole() {
        let s = 2.5e-8;
        let rc2i = c2ixys(0.0, 0.0, s);
        let mut expected = identity();
        rz(-s, &mut expected);
        assert_eq!(rc2i, expected);
    }

    #[test]
    fn test_c2ixy() {
        let rc2i = c2ixy(&ErfaSeries, TT, X, Y);
        let expected = [
            [0.9999998323037157138, 0.5581526349032241205e-9, -0.5791308491611263745e-3],
            [-0.2384257057469842953e-7, 0.9999999991917468964, -0.4020579110172324363e-4],
            [0.5791308486706011000e-3, 0.4020579816732961219e-4, 0.9999998314954627590],
        ];
        assert_relative_eq!(rc2i, from_rows(expected), epsilon = 1e-12);
    }

    #[test]
    fn test_c2ibpn() {
        let rbpn = from_rows([
            [9.999962358680738e-1, -2.516417057665452e-3, -1.093569785342370e-3],
            [2.516462370370876e-3, 9.999968329010883e-1, 4.006159587358310e-5],
            [1.093465510215479e-3, -4.281337229063151e-5, 9.999993067231767e-1],
        ]);
        let rc2i = c2ibpn(&ErfaSeries, JulianDate::new(2400000.5, 50123.9999), &rbpn);
        let expected = [
            [0.9999994021664089977, -0.3869195948017503664e-8, -0.1093465511383285076e-2],
            [0.5068413965715446111e-7, 0.9999999990835075686, 0.4281334246452708915e-4],
            [0.1093465510215479000e-2, -0.4281337229063151000e-4, 0.9999994012499173103],
        ];
        assert_relative_eq!(rc2i, from_rows(expected), epsilon = 1e-12);
    }

    #[test]
    fn test_c2i00a() {
        let rc2i = c2i00a(&ErfaSeries, TT);
        let expected = [
            [0.9999998323037165557, 0.5581526348992140183e-9, -0.5791308477073443415e-3],
            [-0.2384266227870752452e-7, 0.9999999991917405258, -0.4020594955028209745e-4],
            [0.5791308472168152904e-3, 0.4020595661591500259e-4, 0.9999998314954572304],
        ];
        assert_relative_eq!(rc2i, from_rows(expected), epsilon = 1e-12);
    }

    #[test]
    fn test_c2i00b() {
        let rc2i = c2i00b(&ErfaSeries, TT);
        let expected = [
            [0.9999998323040954356, 0.5581526349131823372e-9, -0.5791301934855394005e-3],
            [-0.2384239285499175543e-7, 0.9999999991917574043, -0.4020552974819030066e-4],
            [0.5791301929950208873e-3, 0.4020553681373720832e-4, 0.9999998314958529887],
        ];
        assert_relative_eq!(rc2i, from_rows(expected), epsilon = 1e-12);
    }

    #[test]
    fn test_c2i06a() {
        let rc2i = c2i06a(&ErfaSeries, TT);
        let expected = [
            [0.9999998323037159379, 0.5581121329587613787e-9, -0.5791308487740529749e-3],
            [-0.2384253169452306581e-7, 0.9999999991917467827, -0.4020579392895682558e-4],
            [0.5791308482835292617e-3, 0.4020580099454020310e-4, 0.9999998314954628695],
        ];
        assert_relative_eq!(rc2i, from_rows(expected), epsilon = 1e-12);
    }

    #[test]
    fn test_c2i_dispatch() {
        for model in Model::ALL {
            let rc2i = c2i(&ErfaSeries, model, TT);
            assert!(is_orthogonal(&rc2i, 1e-12));
        }
        assert_eq!(c2i(&ErfaSeries, Model::Iau2006A, TT), c2i06a(&ErfaSeries, TT));
    }

    #[test]
    fn test_model_from_str() {
        assert_eq!("IAU2000A".parse::<Model>(), Ok(Model::Iau2000A));
        assert_eq!("iau 2000b".parse::<Model>(), Ok(Model::Iau2000B));
        assert_eq!("2006".parse::<Model>(), Ok(Model::Iau2006A));
        assert_eq!("IAU2006/2000A".parse::<Model>(), Ok(Model::Iau2006A));
        assert_eq!(
            "IAU1980".parse::<Model>(),
            Err(FrameError::UnknownModel("IAU1980".into()))
        );
        for model in Model::ALL {
            assert_eq!(model.to_string().parse::<Model>(), Ok(model));
        }
    }
}
