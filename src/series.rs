//! # Nutation and CIO-locator series
//!
//! The IAU 2000A nutation (1365 luni-solar and planetary terms), its 77-term 2000B
//! abridgement and the series part of the CIO locator `s` are long tabulated evaluators.
//! The frame pipeline only composes their outputs, so it reaches them through the
//! [`SeriesEvaluator`] trait. [`ErfaSeries`], the default implementation, takes the full
//! 2000A nutation and the 2006 CIO locator from the `erfa` crate; the 2000B nutation
//! ([`nut00b`]) and the 2000 CIO locator ([`s00`]) are evaluated here from their own tables.
//!
//! The module also carries the IERS 2003 fundamental arguments shared by those series and
//! by the equation-of-the-equinoxes complementary terms.
use erfa::aliases::{eraNut00a, eraS06};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Radian, DPI, RADSEC, TURNAS},
    time::JulianDate,
};

/// Nutation in longitude and obliquity, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutation {
    pub dpsi: Radian,
    pub deps: Radian,
}

impl Nutation {
    pub fn new(dpsi: Radian, deps: Radian) -> Self {
        Nutation { dpsi, deps }
    }
}

impl From<(f64, f64)> for Nutation {
    fn from((dpsi, deps): (f64, f64)) -> Self {
        Nutation { dpsi, deps }
    }
}

/// Source of the nutation and CIO-locator series.
///
/// Every method takes a Terrestrial Time date and must be a pure function of its inputs.
/// The `Send + Sync` bound lets a configured
/// [`EarthOrientation`](crate::orientation::EarthOrientation) be shared between threads.
pub trait SeriesEvaluator: Send + Sync {
    /// IAU 2000A nutation (MHB2000, full series).
    fn nut00a(&self, tt: JulianDate) -> Nutation;

    /// IAU 2000B nutation (truncated series, about 1 mas accuracy).
    fn nut00b(&self, tt: JulianDate) -> Nutation;

    /// CIO locator `s` consistent with IAU 2000A precession-nutation, given the CIP `(x, y)`.
    fn s00(&self, tt: JulianDate, x: f64, y: f64) -> Radian;

    /// CIO locator `s` consistent with IAU 2006 precession and IAU 2000A nutation.
    fn s06(&self, tt: JulianDate, x: f64, y: f64) -> Radian;

    /// IAU 2000A nutation adjusted to the IAU 2006 precession.
    ///
    /// The 2000A amplitudes are rescaled for the secular change of the Earth's dynamical
    /// form factor J2 (`-2.7774e-6 · t`) and for the IAU 2006 obliquity at J2000.0.
    fn nut06a(&self, tt: JulianDate) -> Nutation {
        let t = tt.centuries_since_j2000();
        let fj2 = -2.7774e-6 * t;

        let Nutation { dpsi: dp, deps: de } = self.nut00a(tt);
        Nutation {
            dpsi: dp + dp * (0.4697e-6 + fj2),
            deps: de + de * fj2,
        }
    }
}

/// Default series evaluator: `erfa` for IAU 2000A nutation and `s06`, native tables otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErfaSeries;

impl SeriesEvaluator for ErfaSeries {
    fn nut00a(&self, tt: JulianDate) -> Nutation {
        eraNut00a(tt.jd1, tt.jd2).into()
    }

    fn nut00b(&self, tt: JulianDate) -> Nutation {
        nut00b(tt)
    }

    fn s00(&self, tt: JulianDate, x: f64, y: f64) -> Radian {
        s00(tt, x, y)
    }

    fn s06(&self, tt: JulianDate, x: f64, y: f64) -> Radian {
        eraS06(tt.jd1, tt.jd2, x, y)
    }
}

impl<S: SeriesEvaluator + ?Sized> SeriesEvaluator for &S {
    fn nut00a(&self, tt: JulianDate) -> Nutation {
        (**self).nut00a(tt)
    }

    fn nut00b(&self, tt: JulianDate) -> Nutation {
        (**self).nut00b(tt)
    }

    fn s00(&self, tt: JulianDate, x: f64, y: f64) -> Radian {
        (**self).s00(tt, x, y)
    }

    fn s06(&self, tt: JulianDate, x: f64, y: f64) -> Radian {
        (**self).s06(tt, x, y)
    }

    fn nut06a(&self, tt: JulianDate) -> Nutation {
        (**self).nut06a(tt)
    }
}

// -------------------------------------------------------------------------------------------------
// Fundamental arguments (IERS Conventions 2003)
// -------------------------------------------------------------------------------------------------

/// The eight Delaunay and planetary arguments entering the complementary terms.
///
/// All angles are in radians; `t` is in Julian centuries of TDB (TT is adequate)
/// since J2000.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArgs {
    /// Mean anomaly of the Moon, l
    pub l: Radian,
    /// Mean anomaly of the Sun, l'
    pub lp: Radian,
    /// Mean argument of latitude of the Moon, F
    pub f: Radian,
    /// Mean elongation of the Moon from the Sun, D
    pub d: Radian,
    /// Mean longitude of the Moon's ascending node, Ω
    pub om: Radian,
    /// Mean longitude of Venus
    pub venus: Radian,
    /// Mean longitude of the Earth
    pub earth: Radian,
    /// General accumulated precession in longitude
    pub pa: Radian,
}

impl FundamentalArgs {
    pub fn at(t: f64) -> Self {
        FundamentalArgs {
            l: mean_anomaly_moon(t),
            lp: mean_anomaly_sun(t),
            f: mean_argument_of_latitude(t),
            d: mean_elongation(t),
            om: mean_node_moon(t),
            venus: mean_longitude_venus(t),
            earth: mean_longitude_earth(t),
            pa: general_precession(t),
        }
    }

    /// Arguments in the column order of the series tables.
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.l, self.lp, self.f, self.d, self.om, self.venus, self.earth, self.pa,
        ]
    }

    /// Linear combination `Σ n_j · arg_j` for one series term.
    pub(crate) fn argument(&self, multipliers: &[i8; 8]) -> Radian {
        multipliers
            .iter()
            .zip(self.as_array())
            .map(|(&n, a)| f64::from(n) * a)
            .sum()
    }

    /// Sum `s·sin(arg) + c·cos(arg)` over a series, smallest terms first.
    pub(crate) fn sum(&self, terms: &[SeriesTerm]) -> f64 {
        terms.iter().rev().fold(0.0, |acc, term| {
            let a = self.argument(&term.nfa);
            acc + (term.s * a.sin() + term.c * a.cos())
        })
    }
}

/// One term of a series in the fundamental arguments: multipliers for
/// `l, l', F, D, Ω, L_Ve, L_E, p_A`, then the sine and cosine amplitudes (arcseconds).
pub(crate) struct SeriesTerm {
    nfa: [i8; 8],
    s: f64,
    c: f64,
}

pub(crate) const fn term(nfa: [i8; 8], s: f64, c: f64) -> SeriesTerm {
    SeriesTerm { nfa, s, c }
}

/// Evaluate a polynomial in `t` given in arcseconds, reduce it modulo a full turn and
/// convert to radians.
fn delaunay(t: f64, c: [f64; 5]) -> Radian {
    let arcsec = c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])));
    (arcsec % TURNAS) * RADSEC
}

pub fn mean_anomaly_moon(t: f64) -> Radian {
    delaunay(
        t,
        [485868.249036, 1717915923.2178, 31.8792, 0.051635, -0.00024470],
    )
}

pub fn mean_anomaly_sun(t: f64) -> Radian {
    delaunay(
        t,
        [1287104.793048, 129596581.0481, -0.5532, 0.000136, -0.00001149],
    )
}

pub fn mean_argument_of_latitude(t: f64) -> Radian {
    delaunay(
        t,
        [335779.526232, 1739527262.8478, -12.7512, -0.001037, 0.00000417],
    )
}

pub fn mean_elongation(t: f64) -> Radian {
    delaunay(
        t,
        [1072260.703692, 1602961601.2090, -6.3706, 0.006593, -0.00003169],
    )
}

pub fn mean_node_moon(t: f64) -> Radian {
    delaunay(
        t,
        [450160.398036, -6962890.5431, 7.4722, 0.007702, -0.00005939],
    )
}

pub fn mean_longitude_venus(t: f64) -> Radian {
    (3.176146697 + 1021.3285546211 * t) % DPI
}

pub fn mean_longitude_earth(t: f64) -> Radian {
    (1.753470314 + 628.3075849991 * t) % DPI
}

/// Not reduced modulo 2π.
pub fn general_precession(t: f64) -> Radian {
    (0.024381750 + 0.00000538691 * t) * t
}

// -------------------------------------------------------------------------------------------------
// IAU 2000B nutation
// -------------------------------------------------------------------------------------------------

/// 0.1 microarcsecond → radians
const U2R: f64 = RADSEC / 1e7;

/// Fixed offsets standing in for the planetary terms, in radians (-0.135 mas, +0.388 mas).
const DPPLAN: Radian = -0.135 * RADSEC / 1e3;
const DEPLAN: Radian = 0.388 * RADSEC / 1e3;

/// One luni-solar term: multipliers of `l, l', F, D, Ω`, then the longitude amplitudes
/// `(sin, t·sin, cos)` and the obliquity amplitudes `(cos, t·cos, sin)`, in 0.1 µas.
struct LunisolarTerm {
    n: [i8; 5],
    sp: f64,
    spt: f64,
    cp: f64,
    ce: f64,
    cet: f64,
    se: f64,
}

const fn ls(n: [i8; 5], lon: [f64; 3], obl: [f64; 3]) -> LunisolarTerm {
    LunisolarTerm {
        n,
        sp: lon[0],
        spt: lon[1],
        cp: lon[2],
        ce: obl[0],
        cet: obl[1],
        se: obl[2],
    }
}

/// The 77 largest luni-solar terms of the IAU 2000A series.
#[rustfmt::skip]
const LUNISOLAR_B: [LunisolarTerm; 77] = [
    ls([0, 0, 0, 0, 1], [-172064161.0, -174666.0, 33386.0], [92052331.0, 9086.0, 15377.0]),
    ls([0, 0, 2, -2, 2], [-13170906.0, -1675.0, -13696.0], [5730336.0, -3015.0, -4587.0]),
    ls([0, 0, 2, 0, 2], [-2276413.0, -234.0, 2796.0], [978459.0, -485.0, 1374.0]),
    ls([0, 0, 0, 0, 2], [2074554.0, 207.0, -698.0], [-897492.0, 470.0, -291.0]),
    ls([0, 1, 0, 0, 0], [1475877.0, -3633.0, 11817.0], [73871.0, -184.0, -1924.0]),
    ls([0, 1, 2, -2, 2], [-516821.0, 1226.0, -524.0], [224386.0, -677.0, -174.0]),
    ls([1, 0, 0, 0, 0], [711159.0, 73.0, -872.0], [-6750.0, 0.0, 358.0]),
    ls([0, 0, 2, 0, 1], [-387298.0, -367.0, 380.0], [200728.0, 18.0, 318.0]),
    ls([1, 0, 2, 0, 2], [-301461.0, -36.0, 816.0], [129025.0, -63.0, 367.0]),
    ls([0, -1, 2, -2, 2], [215829.0, -494.0, 111.0], [-95929.0, 299.0, 132.0]),

    ls([0, 0, 2, -2, 1], [128227.0, 137.0, 181.0], [-68982.0, -9.0, 39.0]),
    ls([-1, 0, 2, 0, 2], [123457.0, 11.0, 19.0], [-53311.0, 32.0, -4.0]),
    ls([-1, 0, 0, 2, 0], [156994.0, 10.0, -168.0], [-1235.0, 0.0, 82.0]),
    ls([1, 0, 0, 0, 1], [63110.0, 63.0, 27.0], [-33228.0, 0.0, -9.0]),
    ls([-1, 0, 0, 0, 1], [-57976.0, -63.0, -189.0], [31429.0, 0.0, -75.0]),
    ls([-1, 0, 2, 2, 2], [-59641.0, -11.0, 149.0], [25543.0, -11.0, 66.0]),
    ls([1, 0, 2, 0, 1], [-51613.0, -42.0, 129.0], [26366.0, 0.0, 78.0]),
    ls([-2, 0, 2, 0, 1], [45893.0, 50.0, 31.0], [-24236.0, -10.0, 20.0]),
    ls([0, 0, 0, 2, 0], [63384.0, 11.0, -150.0], [-1220.0, 0.0, 29.0]),
    ls([0, 0, 2, 2, 2], [-38571.0, -1.0, 158.0], [16452.0, -11.0, 68.0]),

    ls([0, -2, 2, -2, 2], [32481.0, 0.0, 0.0], [-13870.0, 0.0, 0.0]),
    ls([-2, 0, 0, 2, 0], [-47722.0, 0.0, -18.0], [477.0, 0.0, -25.0]),
    ls([2, 0, 2, 0, 2], [-31046.0, -1.0, 131.0], [13238.0, -11.0, 59.0]),
    ls([1, 0, 2, -2, 2], [28593.0, 0.0, -1.0], [-12338.0, 10.0, -3.0]),
    ls([-1, 0, 2, 0, 1], [20441.0, 21.0, 10.0], [-10758.0, 0.0, -3.0]),
    ls([2, 0, 0, 0, 0], [29243.0, 0.0, -74.0], [-609.0, 0.0, 13.0]),
    ls([0, 0, 2, 0, 0], [25887.0, 0.0, -66.0], [-550.0, 0.0, 11.0]),
    ls([0, 1, 0, 0, 1], [-14053.0, -25.0, 79.0], [8551.0, -2.0, -45.0]),
    ls([-1, 0, 0, 2, 1], [15164.0, 10.0, 11.0], [-8001.0, 0.0, -1.0]),
    ls([0, 2, 2, -2, 2], [-15794.0, 72.0, -16.0], [6850.0, -42.0, -5.0]),

    ls([0, 0, -2, 2, 0], [21783.0, 0.0, 13.0], [-167.0, 0.0, 13.0]),
    ls([1, 0, 0, -2, 1], [-12873.0, -10.0, -37.0], [6953.0, 0.0, -14.0]),
    ls([0, -1, 0, 0, 1], [-12654.0, 11.0, 63.0], [6415.0, 0.0, 26.0]),
    ls([-1, 0, 2, 2, 1], [-10204.0, 0.0, 25.0], [5222.0, 0.0, 15.0]),
    ls([0, 2, 0, 0, 0], [16707.0, -85.0, -10.0], [168.0, -1.0, 10.0]),
    ls([1, 0, 2, 2, 2], [-7691.0, 0.0, 44.0], [3268.0, 0.0, 19.0]),
    ls([-2, 0, 2, 0, 0], [-11024.0, 0.0, -14.0], [104.0, 0.0, 2.0]),
    ls([0, 1, 2, 0, 2], [7566.0, -21.0, -11.0], [-3250.0, 0.0, -5.0]),
    ls([0, 0, 2, 2, 1], [-6637.0, -11.0, 25.0], [3353.0, 0.0, 14.0]),
    ls([0, -1, 2, 0, 2], [-7141.0, 21.0, 8.0], [3070.0, 0.0, 4.0]),

    ls([0, 0, 0, 2, 1], [-6302.0, -11.0, 2.0], [3272.0, 0.0, 4.0]),
    ls([1, 0, 2, -2, 1], [5800.0, 10.0, 2.0], [-3045.0, 0.0, -1.0]),
    ls([2, 0, 2, -2, 2], [6443.0, 0.0, -7.0], [-2768.0, 0.0, -4.0]),
    ls([-2, 0, 0, 2, 1], [-5774.0, -11.0, -15.0], [3041.0, 0.0, -5.0]),
    ls([2, 0, 2, 0, 1], [-5350.0, 0.0, 21.0], [2695.0, 0.0, 12.0]),
    ls([0, -1, 2, -2, 1], [-4752.0, -11.0, -3.0], [2719.0, 0.0, -3.0]),
    ls([0, 0, 0, -2, 1], [-4940.0, -11.0, -21.0], [2720.0, 0.0, -9.0]),
    ls([-1, -1, 0, 2, 0], [7350.0, 0.0, -8.0], [-51.0, 0.0, 4.0]),
    ls([2, 0, 0, -2, 1], [4065.0, 0.0, 6.0], [-2206.0, 0.0, 1.0]),
    ls([1, 0, 0, 2, 0], [6579.0, 0.0, -24.0], [-199.0, 0.0, 2.0]),

    ls([0, 1, 2, -2, 1], [3579.0, 0.0, 5.0], [-1900.0, 0.0, 1.0]),
    ls([1, -1, 0, 0, 0], [4725.0, 0.0, -6.0], [-41.0, 0.0, 3.0]),
    ls([-2, 0, 2, 0, 2], [-3075.0, 0.0, -2.0], [1313.0, 0.0, -1.0]),
    ls([3, 0, 2, 0, 2], [-2904.0, 0.0, 15.0], [1233.0, 0.0, 7.0]),
    ls([0, -1, 0, 2, 0], [4348.0, 0.0, -10.0], [-81.0, 0.0, 2.0]),
    ls([1, -1, 2, 0, 2], [-2878.0, 0.0, 8.0], [1232.0, 0.0, 4.0]),
    ls([0, 0, 0, 1, 0], [-4230.0, 0.0, 5.0], [-20.0, 0.0, -2.0]),
    ls([-1, -1, 2, 2, 2], [-2819.0, 0.0, 7.0], [1207.0, 0.0, 3.0]),
    ls([-1, 0, 2, 0, 0], [-4056.0, 0.0, 5.0], [40.0, 0.0, -2.0]),
    ls([0, -1, 2, 2, 2], [-2647.0, 0.0, 11.0], [1129.0, 0.0, 5.0]),

    ls([-2, 0, 0, 0, 1], [-2294.0, 0.0, -10.0], [1266.0, 0.0, -4.0]),
    ls([1, 1, 2, 0, 2], [2481.0, 0.0, -7.0], [-1062.0, 0.0, -3.0]),
    ls([2, 0, 0, 0, 1], [2179.0, 0.0, -2.0], [-1129.0, 0.0, -2.0]),
    ls([-1, 1, 0, 1, 0], [3276.0, 0.0, 1.0], [-9.0, 0.0, 0.0]),
    ls([1, 1, 0, 0, 0], [-3389.0, 0.0, 5.0], [35.0, 0.0, -2.0]),
    ls([1, 0, 2, 0, 0], [3339.0, 0.0, -13.0], [-107.0, 0.0, 1.0]),
    ls([-1, 0, 2, -2, 1], [-1987.0, 0.0, -6.0], [1073.0, 0.0, -2.0]),
    ls([1, 0, 0, 0, 2], [-1981.0, 0.0, 0.0], [854.0, 0.0, 0.0]),
    ls([-1, 0, 0, 1, 0], [4026.0, 0.0, -353.0], [-553.0, 0.0, -139.0]),
    ls([0, 0, 2, 1, 2], [1660.0, 0.0, -5.0], [-710.0, 0.0, -2.0]),

    ls([-1, 0, 2, 4, 2], [-1521.0, 0.0, 9.0], [647.0, 0.0, 4.0]),
    ls([-1, 1, 0, 1, 1], [1314.0, 0.0, 0.0], [-700.0, 0.0, 0.0]),
    ls([0, -2, 2, -2, 1], [-1283.0, 0.0, 0.0], [672.0, 0.0, 0.0]),
    ls([1, 0, 2, 2, 1], [-1331.0, 0.0, 8.0], [663.0, 0.0, 4.0]),
    ls([-2, 0, 2, 2, 2], [1383.0, 0.0, -2.0], [-594.0, 0.0, -2.0]),
    ls([-1, 0, 0, 0, 2], [1405.0, 0.0, 4.0], [-610.0, 0.0, 2.0]),
    ls([1, 1, 2, -2, 2], [1290.0, 0.0, 0.0], [-556.0, 0.0, 0.0]),
];

/// IAU 2000B nutation (McCarthy & Luzum 2003).
///
/// The first 77 luni-solar terms of the 2000A series with linear Delaunay arguments, plus
/// constant offsets replacing the planetary series. Agrees with IAU 2000A to about 1 mas
/// between 1995 and 2050.
///
/// Arguments
/// ---------
/// * `tt`: TT date.
///
/// Returns
/// --------
/// * The nutation in longitude and obliquity, in radians.
pub fn nut00b(tt: JulianDate) -> Nutation {
    let t = tt.centuries_since_j2000();

    // linear terms only in the 2000B abridgement
    let el = ((485868.249036 + 1717915923.2178 * t) % TURNAS) * RADSEC;
    let elp = ((1287104.79305 + 129596581.0481 * t) % TURNAS) * RADSEC;
    let f = ((335779.526232 + 1739527262.8478 * t) % TURNAS) * RADSEC;
    let d = ((1072260.70369 + 1602961601.2090 * t) % TURNAS) * RADSEC;
    let om = ((450160.398036 - 6962890.5431 * t) % TURNAS) * RADSEC;
    let args = [el, elp, f, d, om];

    let (dp, de) = LUNISOLAR_B
        .iter()
        .rev()
        .fold((0.0, 0.0), |(dp, de), term| {
            let arg = term
                .n
                .iter()
                .zip(args)
                .map(|(&n, a)| f64::from(n) * a)
                .sum::<f64>()
                % DPI;
            let (sarg, carg) = arg.sin_cos();
            (
                dp + (term.sp + term.spt * t) * sarg + term.cp * carg,
                de + (term.ce + term.cet * t) * carg + term.se * sarg,
            )
        });

    Nutation {
        dpsi: dp * U2R + DPPLAN,
        deps: de * U2R + DEPLAN,
    }
}

// -------------------------------------------------------------------------------------------------
// CIO locator s, IAU 2000A
// -------------------------------------------------------------------------------------------------

/// Polynomial part of `s + XY/2`, arcseconds (IERS Conventions 2003, Table 5.2c).
const SP_00: [f64; 6] = [
    94.00e-6,
    3808.35e-6,
    -119.94e-6,
    -72574.09e-6,
    27.70e-6,
    15.61e-6,
];

/// Series for `s + XY/2`, terms of order t⁰.
#[rustfmt::skip]
const S0: [SeriesTerm; 33] = [
    term([0, 0, 0, 0, 1, 0, 0, 0], -2640.73e-6, 0.39e-6),
    term([0, 0, 0, 0, 2, 0, 0, 0], -63.53e-6, 0.02e-6),
    term([0, 0, 2, -2, 3, 0, 0, 0], -11.75e-6, -0.01e-6),
    term([0, 0, 2, -2, 1, 0, 0, 0], -11.21e-6, -0.01e-6),
    term([0, 0, 2, -2, 2, 0, 0, 0], 4.57e-6, 0.00e-6),
    term([0, 0, 2, 0, 3, 0, 0, 0], -2.02e-6, 0.00e-6),
    term([0, 0, 2, 0, 1, 0, 0, 0], -1.98e-6, 0.00e-6),
    term([0, 0, 0, 0, 3, 0, 0, 0], 1.72e-6, 0.00e-6),
    term([0, 1, 0, 0, 1, 0, 0, 0], 1.41e-6, 0.01e-6),
    term([0, 1, 0, 0, -1, 0, 0, 0], 1.26e-6, 0.01e-6),

    term([1, 0, 0, 0, -1, 0, 0, 0], 0.63e-6, 0.00e-6),
    term([1, 0, 0, 0, 1, 0, 0, 0], 0.63e-6, 0.00e-6),
    term([0, 1, 2, -2, 3, 0, 0, 0], -0.46e-6, 0.00e-6),
    term([0, 1, 2, -2, 1, 0, 0, 0], -0.45e-6, 0.00e-6),
    term([0, 0, 4, -4, 4, 0, 0, 0], -0.36e-6, 0.00e-6),
    term([0, 0, 1, -1, 1, -8, 12, 0], 0.24e-6, 0.12e-6),
    term([0, 0, 2, 0, 0, 0, 0, 0], -0.32e-6, 0.00e-6),
    term([0, 0, 2, 0, 2, 0, 0, 0], -0.28e-6, 0.00e-6),
    term([1, 0, 2, 0, 3, 0, 0, 0], -0.27e-6, 0.00e-6),
    term([1, 0, 2, 0, 1, 0, 0, 0], -0.26e-6, 0.00e-6),

    term([0, 0, 2, -2, 0, 0, 0, 0], 0.21e-6, 0.00e-6),
    term([0, 1, -2, 2, -3, 0, 0, 0], -0.19e-6, 0.00e-6),
    term([0, 1, -2, 2, -1, 0, 0, 0], -0.18e-6, 0.00e-6),
    term([0, 0, 0, 0, 0, 8, -13, -1], 0.10e-6, -0.05e-6),
    term([0, 0, 0, 2, 0, 0, 0, 0], -0.15e-6, 0.00e-6),
    term([2, 0, -2, 0, -1, 0, 0, 0], 0.14e-6, 0.00e-6),
    term([0, 1, 2, -2, 2, 0, 0, 0], 0.14e-6, 0.00e-6),
    term([1, 0, 0, -2, 1, 0, 0, 0], -0.14e-6, 0.00e-6),
    term([1, 0, 0, -2, -1, 0, 0, 0], -0.14e-6, 0.00e-6),
    term([0, 0, 4, -2, 4, 0, 0, 0], -0.13e-6, 0.00e-6),

    term([0, 0, 2, -2, 4, 0, 0, 0], 0.11e-6, 0.00e-6),
    term([1, 0, -2, 0, -3, 0, 0, 0], -0.11e-6, 0.00e-6),
    term([1, 0, -2, 0, -1, 0, 0, 0], -0.11e-6, 0.00e-6),
];

/// Series for `s + XY/2`, terms of order t¹.
#[rustfmt::skip]
const S1: [SeriesTerm; 3] = [
    term([0, 0, 0, 0, 2, 0, 0, 0], -0.07e-6, 3.57e-6),
    term([0, 0, 0, 0, 1, 0, 0, 0], 1.71e-6, -0.03e-6),
    term([0, 0, 2, -2, 3, 0, 0, 0], 0.00e-6, 0.48e-6),
];

/// Series for `s + XY/2`, terms of order t².
#[rustfmt::skip]
const S2: [SeriesTerm; 25] = [
    term([0, 0, 0, 0, 1, 0, 0, 0], 743.53e-6, -0.17e-6),
    term([0, 0, 2, -2, 2, 0, 0, 0], 56.91e-6, 0.06e-6),
    term([0, 0, 2, 0, 2, 0, 0, 0], 9.84e-6, -0.01e-6),
    term([0, 0, 0, 0, 2, 0, 0, 0], -8.85e-6, 0.01e-6),
    term([0, 1, 0, 0, 0, 0, 0, 0], -6.38e-6, -0.05e-6),
    term([1, 0, 0, 0, 0, 0, 0, 0], -3.07e-6, 0.00e-6),
    term([0, 1, 2, -2, 2, 0, 0, 0], 2.23e-6, 0.00e-6),
    term([0, 0, 2, 0, 1, 0, 0, 0], 1.67e-6, 0.00e-6),
    term([1, 0, 2, 0, 2, 0, 0, 0], 1.30e-6, 0.00e-6),
    term([0, 1, -2, 2, -2, 0, 0, 0], 0.93e-6, 0.00e-6),

    term([1, 0, 0, -2, 0, 0, 0, 0], 0.68e-6, 0.00e-6),
    term([0, 0, 2, -2, 1, 0, 0, 0], -0.55e-6, 0.00e-6),
    term([1, 0, -2, 0, -2, 0, 0, 0], 0.53e-6, 0.00e-6),
    term([0, 0, 0, 2, 0, 0, 0, 0], -0.27e-6, 0.00e-6),
    term([1, 0, 0, 0, 1, 0, 0, 0], -0.27e-6, 0.00e-6),
    term([1, 0, -2, -2, -2, 0, 0, 0], -0.26e-6, 0.00e-6),
    term([1, 0, 0, 0, -1, 0, 0, 0], -0.25e-6, 0.00e-6),
    term([1, 0, 2, 0, 1, 0, 0, 0], 0.22e-6, 0.00e-6),
    term([2, 0, 0, -2, 0, 0, 0, 0], -0.21e-6, 0.00e-6),
    term([2, 0, -2, 0, -1, 0, 0, 0], 0.20e-6, 0.00e-6),

    term([0, 0, 2, 2, 2, 0, 0, 0], 0.17e-6, 0.00e-6),
    term([2, 0, 2, 0, 2, 0, 0, 0], 0.13e-6, 0.00e-6),
    term([2, 0, 0, 0, 0, 0, 0, 0], -0.13e-6, 0.00e-6),
    term([1, 0, 2, -2, 2, 0, 0, 0], -0.12e-6, 0.00e-6),
    term([0, 0, 2, 0, 0, 0, 0, 0], -0.11e-6, 0.00e-6),
];

/// Series for `s + XY/2`, terms of order t³.
#[rustfmt::skip]
const S3: [SeriesTerm; 4] = [
    term([0, 0, 0, 0, 1, 0, 0, 0], 0.30e-6, -23.51e-6),
    term([0, 0, 2, -2, 2, 0, 0, 0], -0.03e-6, -1.39e-6),
    term([0, 0, 2, 0, 2, 0, 0, 0], -0.01e-6, -0.24e-6),
    term([0, 0, 0, 0, 2, 0, 0, 0], 0.00e-6, 0.22e-6),
];

/// Series for `s + XY/2`, terms of order t⁴.
#[rustfmt::skip]
const S4: [SeriesTerm; 1] = [
    term([0, 0, 0, 0, 1, 0, 0, 0], -0.26e-6, -0.01e-6),
];

/// CIO locator `s` consistent with IAU 2000A precession-nutation.
///
/// `s` is evaluated as the series for `s + XY/2` less `XY/2`, with the IERS 2003
/// fundamental arguments.
///
/// Arguments
/// ---------
/// * `tt`: TT date.
/// * `x`, `y`: CIP coordinates at that date.
///
/// Returns
/// --------
/// * The CIO locator in radians.
pub fn s00(tt: JulianDate, x: f64, y: f64) -> Radian {
    let t = tt.centuries_since_j2000();
    let fa = FundamentalArgs::at(t);

    let w0 = SP_00[0] + fa.sum(&S0);
    let w1 = SP_00[1] + fa.sum(&S1);
    let w2 = SP_00[2] + fa.sum(&S2);
    let w3 = SP_00[3] + fa.sum(&S3);
    let w4 = SP_00[4] + fa.sum(&S4);
    let w5 = SP_00[5];

    (w0 + (w1 + (w2 + (w3 + (w4 + w5 * t) * t) * t) * t) * t) * RADSEC - x * y / 2.0
}
