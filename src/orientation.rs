//! # Configured Earth orientation
//!
//! [`EarthOrientation`] bundles a precession-nutation [`Model`], a [`Convention`] for the
//! Earth rotation and a [`SeriesEvaluator`], and exposes the whole GCRS → ITRS chain
//! behind a handful of methods. It is the entry point for code that only wants "the
//! matrix at this date" without choosing between the individual functions of
//! [`terrestrial`](crate::terrestrial) and [`intermediate`](crate::intermediate).
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use earthframe::earth_orientation::PolarMotion;
//! use earthframe::intermediate::Model;
//! use earthframe::orientation::{EarthOrientation, OrientationParams};
//! use hifitime::Epoch;
//! use nalgebra::Vector3;
//!
//! let params = OrientationParams::builder()
//!     .model(Model::Iau2000B)
//!     .convention_name("equinox")
//!     .build()
//!     .unwrap();
//! let earth = EarthOrientation::new(params);
//!
//! let epoch = Epoch::from_gregorian_utc_at_midnight(2024, 3, 20);
//! let pm = PolarMotion::new(1.0e-6, 1.5e-6);
//! let rc2t = earth.celestial_to_terrestrial_at(&epoch, -0.0123, pm);
//!
//! let itrs = rc2t * Vector3::new(1.0, 0.0, 0.0);
//! ```
//!
//! ## Notes
//!
//! - The object holds no cache: every call runs the full chain. Callers tracking over a
//!   pass can evaluate the precession-nutation once and use [`c2t_bpn`] or [`c2txy`]
//!   directly.
//! - `EarthOrientation` is `Send + Sync` whenever its series evaluator is, which the trait
//!   requires.
//!
//! ## See also
//! ------------
//! * [`c2t`] / [`c2t_equinox`] – The two routes dispatched by [`Convention`].
//! * [`JulianDate::from_epoch_tt`] / [`JulianDate::from_epoch_ut1`] – Epoch bridging.
//!
//! [`c2t_bpn`]: crate::terrestrial::c2t_bpn
//! [`c2txy`]: crate::terrestrial::c2txy
use std::fmt;

use hifitime::Epoch;
use log::{debug, trace};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    earth_orientation::PolarMotion,
    frame_errors::FrameError,
    intermediate::{c2i, Model},
    precession::{pnm00a, pnm00b, pnm06a},
    rotation::{rxp, trxp},
    series::{ErfaSeries, SeriesEvaluator},
    terrestrial::{c2t, c2t_equinox, Convention},
    time::JulianDate,
};

/// Model and convention selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrientationParams {
    pub model: Model,
    pub convention: Convention,
}

impl OrientationParams {
    /// Start a builder initialized with the defaults (IAU 2006/2000A, CIO based).
    pub fn builder() -> OrientationParamsBuilder {
        OrientationParamsBuilder::new()
    }
}

/// Builder for [`OrientationParams`].
///
/// The `*_name` setters parse their argument; a parse failure is kept and reported by
/// [`build`](OrientationParamsBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct OrientationParamsBuilder {
    params: OrientationParams,
    error: Option<FrameError>,
}

impl OrientationParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: Model) -> Self {
        self.params.model = model;
        self
    }

    pub fn convention(mut self, convention: Convention) -> Self {
        self.params.convention = convention;
        self
    }

    /// Select the model by name, e.g. `"IAU2000A"` or `"2006"`.
    pub fn model_name(mut self, name: &str) -> Self {
        match name.parse() {
            Ok(model) => self.params.model = model,
            Err(err) => self.keep_first(err),
        }
        self
    }

    /// Select the convention by name, `"cio"` or `"equinox"`.
    pub fn convention_name(mut self, name: &str) -> Self {
        match name.parse() {
            Ok(convention) => self.params.convention = convention,
            Err(err) => self.keep_first(err),
        }
        self
    }

    fn keep_first(&mut self, err: FrameError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    /// Finalize the builder.
    ///
    /// Returns
    /// --------
    /// * `Err(FrameError::UnknownModel | FrameError::UnknownConvention)` for the first
    ///   name that failed to parse, `Ok(OrientationParams)` otherwise.
    pub fn build(self) -> Result<OrientationParams, FrameError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.params),
        }
    }
}

impl fmt::Display for OrientationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Earth Orientation Parameters")?;
            writeln!(f, "----------------------------")?;
            writeln!(f, "  model      = {:<12}# precession-nutation", self.model)?;
            write!(f, "  convention = {:<12}# Earth rotation route", self.convention)
        } else {
            write!(f, "{}/{}", self.model, self.convention)
        }
    }
}

/// GCRS ↔ ITRS transformation for a fixed model and convention.
#[derive(Debug, Clone)]
pub struct EarthOrientation<S: SeriesEvaluator = ErfaSeries> {
    params: OrientationParams,
    series: S,
}

impl EarthOrientation<ErfaSeries> {
    /// Earth orientation backed by the ERFA nutation and CIO-locator series.
    pub fn new(params: OrientationParams) -> Self {
        Self::with_series(params, ErfaSeries)
    }
}

impl Default for EarthOrientation<ErfaSeries> {
    fn default() -> Self {
        Self::new(OrientationParams::default())
    }
}

impl<S: SeriesEvaluator> EarthOrientation<S> {
    /// Earth orientation with a caller-supplied series evaluator.
    pub fn with_series(params: OrientationParams, series: S) -> Self {
        debug!("Earth orientation configured: {params}");
        EarthOrientation { params, series }
    }

    pub fn params(&self) -> &OrientationParams {
        &self.params
    }

    pub fn series(&self) -> &S {
        &self.series
    }

    /// Matrix from the GCRS to the intermediate frame of the configured convention.
    ///
    /// Returns
    /// --------
    /// * CIO based: RC2I, GCRS → CIRS.
    /// * Equinox based: RBPN, GCRS → true equator and equinox of date.
    pub fn celestial_to_intermediate(&self, tt: JulianDate) -> Matrix3<f64> {
        trace!("celestial-to-intermediate at TT {:?} with {}", tt, self.params);
        match self.params.convention {
            Convention::Cio => c2i(&self.series, self.params.model, tt),
            Convention::Equinox => match self.params.model {
                Model::Iau2000A => pnm00a(&self.series, tt),
                Model::Iau2000B => pnm00b(&self.series, tt),
                Model::Iau2006A => pnm06a(&self.series, tt),
            },
        }
    }

    /// Celestial-to-terrestrial matrix RC2T.
    ///
    /// Arguments
    /// ---------
    /// * `tt`: TT date.
    /// * `ut1`: UT1 date.
    /// * `pm`: pole coordinates.
    pub fn celestial_to_terrestrial(
        &self,
        tt: JulianDate,
        ut1: JulianDate,
        pm: PolarMotion,
    ) -> Matrix3<f64> {
        trace!(
            "celestial-to-terrestrial at TT {:?}, UT1 {:?} with {}",
            tt,
            ut1,
            self.params
        );
        match self.params.convention {
            Convention::Cio => c2t(&self.series, self.params.model, tt, ut1, pm),
            Convention::Equinox => c2t_equinox(&self.series, self.params.model, tt, ut1, pm),
        }
    }

    /// Celestial-to-terrestrial matrix at a `hifitime` epoch.
    ///
    /// Arguments
    /// ---------
    /// * `epoch`: instant of evaluation, in any time scale.
    /// * `dut1`: `UT1 − UTC` in seconds.
    /// * `pm`: pole coordinates.
    pub fn celestial_to_terrestrial_at(
        &self,
        epoch: &Epoch,
        dut1: f64,
        pm: PolarMotion,
    ) -> Matrix3<f64> {
        let tt = JulianDate::from_epoch_tt(epoch);
        let ut1 = JulianDate::from_epoch_ut1(epoch, dut1);
        self.celestial_to_terrestrial(tt, ut1, pm)
    }

    /// Rotate a GCRS vector into the ITRS.
    pub fn gcrs_to_itrs(
        &self,
        v: &Vector3<f64>,
        tt: JulianDate,
        ut1: JulianDate,
        pm: PolarMotion,
    ) -> Vector3<f64> {
        rxp(&self.celestial_to_terrestrial(tt, ut1, pm), v)
    }

    /// Rotate an ITRS vector into the GCRS, using the transpose of RC2T.
    pub fn itrs_to_gcrs(
        &self,
        v: &Vector3<f64>,
        tt: JulianDate,
        ut1: JulianDate,
        pm: PolarMotion,
    ) -> Vector3<f64> {
        trxp(&self.celestial_to_terrestrial(tt, ut1, pm), v)
    }
}

#[cfg(test)]
mod orientation_test {
    use super::*;
    use crate::{
        rotation::is_orthogonal,
        series::Nutation,
        terrestrial::{c2t00a, c2t00b, c2t06a},
    };
    use approx::assert_relative_eq;
    use hifitime::TimeScale;

    const TT: JulianDate = JulianDate {
        jd1: 2400000.5,
        jd2: 53736.0,
    };

    fn pole() -> PolarMotion {
        PolarMotion::new(2.55060238e-7, 1.860359247e-6)
    }

    #[test]
    fn test_default_params() {
        let params = OrientationParams::default();
        assert_eq!(params.model, Model::Iau2006A);
        assert_eq!(params.convention, Convention::Cio);
        assert_eq!(OrientationParams::builder().build(), Ok(params));
    }

    #[test]
    fn test_builder_names() {
        let params = OrientationParams::builder()
            .model_name("IAU 2000B")
            .convention_name("equinox")
            .build()
            .unwrap();
        assert_eq!(params.model, Model::Iau2000B);
        assert_eq!(params.convention, Convention::Equinox);
    }

    #[test]
    fn test_builder_reports_first_error() {
        let err = OrientationParams::builder()
            .model_name("IAU1976")
            .convention_name("ecliptic")
            .build()
            .unwrap_err();
        assert_eq!(err, FrameError::UnknownModel("IAU1976".into()));

        let err = OrientationParams::builder()
            .convention_name("ecliptic")
            .model(Model::Iau2000A)
            .build()
            .unwrap_err();
        assert_eq!(err, FrameError::UnknownConvention("ecliptic".into()));
    }

    #[test]
    fn test_display() {
        let params = OrientationParams::default();
        assert_eq!(params.to_string(), "IAU2006A/CIO");

        let pretty = format!("{params:#}");
        assert!(pretty.starts_with("Earth Orientation Parameters"));
        assert!(pretty.contains("model      = IAU2006A"));
        assert!(pretty.contains("convention = CIO"));
    }

    #[test]
    fn test_params_serde() {
        let params = OrientationParams {
            model: Model::Iau2000A,
            convention: Convention::Equinox,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: OrientationParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_cio_dispatch() {
        let cases: [(Model, Matrix3<f64>); 3] = [
            (Model::Iau2000A, c2t00a(&ErfaSeries, TT, TT, pole())),
            (Model::Iau2000B, c2t00b(&ErfaSeries, TT, TT, pole())),
            (Model::Iau2006A, c2t06a(&ErfaSeries, TT, TT, pole())),
        ];
        for (model, expected) in cases {
            let params = OrientationParams::builder().model(model).build().unwrap();
            let earth = EarthOrientation::new(params);
            assert_eq!(earth.celestial_to_terrestrial(TT, TT, pole()), expected);
        }
    }

    #[test]
    fn test_equinox_dispatch() {
        for model in Model::ALL {
            let params = OrientationParams {
                model,
                convention: Convention::Equinox,
            };
            let earth = EarthOrientation::new(params);
            let rc2t = earth.celestial_to_terrestrial(TT, TT, pole());
            assert_eq!(rc2t, c2t_equinox(&ErfaSeries, model, TT, TT, pole()));
            assert!(is_orthogonal(&rc2t, 1e-12));
        }
    }

    #[test]
    fn test_celestial_to_intermediate() {
        let cio = EarthOrientation::default();
        assert_eq!(cio.celestial_to_intermediate(TT), c2i(&ErfaSeries, Model::Iau2006A, TT));

        let eqx = EarthOrientation::new(OrientationParams {
            model: Model::Iau2006A,
            convention: Convention::Equinox,
        });
        assert_eq!(eqx.celestial_to_intermediate(TT), pnm06a(&ErfaSeries, TT));
    }

    #[test]
    fn test_epoch_entry_point() {
        let earth = EarthOrientation::default();
        let epoch = Epoch::from_mjd_in_time_scale(53736.0, TimeScale::UTC);
        let dut1 = -0.3;

        let at_epoch = earth.celestial_to_terrestrial_at(&epoch, dut1, pole());
        let tt = JulianDate::from_epoch_tt(&epoch);
        let ut1 = JulianDate::from_epoch_ut1(&epoch, dut1);
        assert_eq!(at_epoch, earth.celestial_to_terrestrial(tt, ut1, pole()));
    }

    #[test]
    fn test_vector_round_trip() {
        let earth = EarthOrientation::default();
        let v = Vector3::new(0.3, -0.4, 0.866);

        let itrs = earth.gcrs_to_itrs(&v, TT, TT, pole());
        assert_relative_eq!(itrs.norm(), v.norm(), epsilon = 1e-15);

        let back = earth.itrs_to_gcrs(&itrs, TT, TT, pole());
        assert_relative_eq!(back, v, epsilon = 1e-14);
    }

    struct FrozenNutation;

    impl SeriesEvaluator for FrozenNutation {
        fn nut00a(&self, _tt: JulianDate) -> Nutation {
            Nutation::default()
        }
        fn nut00b(&self, _tt: JulianDate) -> Nutation {
            Nutation::default()
        }
        fn s00(&self, _tt: JulianDate, _x: f64, _y: f64) -> f64 {
            0.0
        }
        fn s06(&self, _tt: JulianDate, _x: f64, _y: f64) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_custom_series() {
        let earth = EarthOrientation::with_series(OrientationParams::default(), FrozenNutation);
        let rc2t = earth.celestial_to_terrestrial(TT, TT, pole());
        assert!(is_orthogonal(&rc2t, 1e-12));
        assert_eq!(rc2t, c2t06a(&FrozenNutation, TT, TT, pole()));

        // without nutation the matrix drifts away from the ERFA-backed one
        let erfa = c2t06a(&ErfaSeries, TT, TT, pole());
        assert!((rc2t - erfa).abs().max() > 1e-6);
    }
}
