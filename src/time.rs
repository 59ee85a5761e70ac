//! # Two-part Julian dates and calendar conversion
//!
//! Every epoch entering the precession, nutation and Earth-rotation models is a
//! [`JulianDate`]: two `f64` whose sum is the Julian Date in the relevant time scale
//! (TT or UT1). The split is left to the caller. The common choices are
//!
//! * `(2400000.5, mjd)`, the MJD method, used throughout the tests,
//! * `(2451545.0, days since J2000)`, the J2000 method,
//! * `(integer day, fraction of day)`, the date and time method.
//!
//! Whatever the split, the two parts are never added into a single `f64` before the J2000
//! offset is removed, so the sub-microsecond resolution of the small part survives.
//!
//! The module also converts Gregorian calendar dates to and from Julian Dates, and
//! bridges `hifitime` epochs into two-part dates.
use hifitime::{Duration, Epoch, Unit, MJD_J1900};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{DJ00, DJC, JDTOMJD, MJD},
    frame_errors::FrameError,
};

/// Earliest year accepted by [`cal2jd`].
const IYMIN: i32 = -4799;

/// Month lengths of a common year.
const MTAB: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Lower bound accepted by [`jd2cal`] (Julian Date).
const DJMIN: f64 = -68569.5;

/// Upper bound accepted by [`jd2cal`] (Julian Date).
const DJMAX: f64 = 1e9;

/// Julian Date held as two parts whose sum is the date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        JulianDate { jd1, jd2 }
    }

    /// Julian Date from a Modified Julian Date, split as `(2400000.5, mjd)`.
    pub fn from_mjd(mjd: MJD) -> Self {
        JulianDate {
            jd1: JDTOMJD,
            jd2: mjd,
        }
    }

    /// The J2000.0 epoch, `(2451545.0, 0.0)`.
    pub fn j2000() -> Self {
        JulianDate { jd1: DJ00, jd2: 0.0 }
    }

    /// Days elapsed since J2000.0, computed as `(jd1 - DJ00) + jd2`.
    pub fn days_since_j2000(&self) -> f64 {
        (self.jd1 - DJ00) + self.jd2
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DJC
    }

    /// Terrestrial Time of a `hifitime` epoch.
    ///
    /// Arguments
    /// ---------
    /// * `epoch`: any `hifitime` epoch; its time scale is handled by `hifitime`.
    ///
    /// Returns
    /// --------
    /// * The TT date as `(2400000.5 + whole MJD days, fraction of day)`.
    pub fn from_epoch_tt(epoch: &Epoch) -> Self {
        Self::from_mjd_duration(epoch.to_mjd_tt_duration())
    }

    /// UT1 of a `hifitime` epoch given `UT1 − UTC`.
    ///
    /// Arguments
    /// ---------
    /// * `epoch`: any `hifitime` epoch.
    /// * `dut1`: `UT1 − UTC` in seconds, as published by the IERS.
    ///
    /// Returns
    /// --------
    /// * The UT1 date as `(2400000.5 + whole MJD days, fraction of day)`.
    pub fn from_epoch_ut1(epoch: &Epoch, dut1: f64) -> Self {
        let mjd_utc = epoch.to_utc_duration() + Unit::Day * MJD_J1900;
        Self::from_mjd_duration(mjd_utc + Unit::Second * dut1)
    }

    /// Split a duration past the MJD origin at the day boundary.
    ///
    /// The whole days are exact in `jd1`; the nanosecond count of the remainder is only
    /// rounded once, when the fraction is formed.
    fn from_mjd_duration(mjd: Duration) -> Self {
        let whole = mjd.floor(Unit::Day * 1);
        JulianDate {
            jd1: JDTOMJD + whole.to_unit(Unit::Day),
            jd2: (mjd - whole).to_unit(Unit::Day),
        }
    }
}

impl Default for JulianDate {
    fn default() -> Self {
        JulianDate::j2000()
    }
}

impl From<(f64, f64)> for JulianDate {
    fn from((jd1, jd2): (f64, f64)) -> Self {
        JulianDate::new(jd1, jd2)
    }
}

fn is_leap_year(iy: i32) -> bool {
    iy % 4 == 0 && (iy % 100 != 0 || iy % 400 == 0)
}

/// Convert a Gregorian calendar date to a two-part Julian Date.
///
/// Arguments
/// ---------
/// * `iy`: year, -4799 or later.
/// * `im`: month, 1 to 12.
/// * `id`: day of the month.
///
/// Returns
/// --------
/// * `(2400000.5, MJD)` at 0h of the given day.
///
/// Errors
/// ------
/// * [`FrameError::BadYear`], [`FrameError::BadMonth`] or [`FrameError::BadDay`] when the
///   corresponding field is out of range. Leap years follow the Gregorian rule.
///
/// Remarks
/// -------
/// * The proleptic Gregorian calendar is used for all dates, with no Julian-calendar
///   switch in 1582.
pub fn cal2jd(iy: i32, im: i32, id: i32) -> Result<JulianDate, FrameError> {
    if iy < IYMIN {
        return Err(FrameError::BadYear(iy));
    }
    if !(1..=12).contains(&im) {
        return Err(FrameError::BadMonth(im));
    }

    let leap = i32::from(im == 2 && is_leap_year(iy));
    if id < 1 || id > MTAB[(im - 1) as usize] + leap {
        return Err(FrameError::BadDay(id));
    }

    // Integer divisions truncate towards zero, which the formula relies on.
    let my = (im - 14) / 12;
    let iypmy = i64::from(iy + my);
    let im = i64::from(im);
    let my = i64::from(my);
    let mjd = (1461 * (iypmy + 4800)) / 4 + (367 * (im - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + i64::from(id)
        - 2432076;

    Ok(JulianDate::from_mjd(mjd as f64))
}

/// Convert a two-part Julian Date to a Gregorian year, month, day and fraction of day.
///
/// Arguments
/// ---------
/// * `jd`: the date; any split is accepted.
///
/// Returns
/// --------
/// * `(year, month, day, fraction)`, the fraction being in `[0, 1)`.
///
/// Errors
/// ------
/// * [`FrameError::DateOutOfRange`] when the date is before JD -68569.5 or after JD 1e9.
///
/// Remarks
/// -------
/// * The day fraction is accumulated with compensated summation, so a date split as
///   `(2400000.5, 50123.9999)` returns a fraction of `0.9999` to the precision of the
///   second part.
pub fn jd2cal(jd: JulianDate) -> Result<(i32, i32, i32, f64), FrameError> {
    let dj = jd.jd1 + jd.jd2;
    if !(DJMIN..=DJMAX).contains(&dj) {
        return Err(FrameError::DateOutOfRange(dj));
    }

    // Separate the day and fraction parts of each input.
    let d1 = jd.jd1.round();
    let d2 = jd.jd2.round();
    let mut jday = d1 as i64 + d2 as i64;
    let fractions = [jd.jd1 - d1, jd.jd2 - d2];

    // f1 + f2 + 0.5 with compensated summation.
    let mut s = 0.5_f64;
    let mut cs = 0.0_f64;
    for x in fractions {
        let t = s + x;
        cs += if s.abs() >= x.abs() {
            (s - t) + x
        } else {
            (x - t) + s
        };
        s = t;
        if s >= 1.0 {
            jday += 1;
            s -= 1.0;
        }
    }
    let mut f = s + cs;
    cs = f - s;

    if f < 0.0 {
        f = s + 1.0;
        cs += (1.0 - f) + s;
        s = f;
        f = s + cs;
        cs = f - s;
        jday -= 1;
    }

    // A fraction that rounds to 1.0 belongs to the next day.
    if (f - 1.0) >= -f64::EPSILON / 4.0 {
        let t = s - 1.0;
        cs += (s - t) - 1.0;
        s = t;
        f = s + cs;
        if -f64::EPSILON / 2.0 < f {
            jday += 1;
            f = f.max(0.0);
        }
    }

    let mut l = jday + 68569;
    let n = (4 * l) / 146097;
    l -= (146097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1461001;
    l -= (1461 * i) / 4 - 31;
    let k = (80 * l) / 2447;
    let id = (l - (2447 * k) / 80) as i32;
    l = k / 11;
    let im = (k + 2 - 12 * l) as i32;
    let iy = (100 * (n - 49) + i + l) as i32;

    Ok((iy, im, id, f))
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use crate::constants::SECONDS_PER_DAY;
    use hifitime::TimeScale;

    #[test]
    fn test_cal2jd() {
        let jd = cal2jd(2003, 6, 1).unwrap();
        assert_eq!(jd.jd1, 2400000.5);
        assert_eq!(jd.jd2, 52791.0);

        let jd = cal2jd(2000, 1, 1).unwrap();
        assert_eq!(jd.jd2, 51544.0);
    }

    #[test]
    fn test_cal2jd_leap_years() {
        assert!(cal2jd(2000, 2, 29).is_ok());
        assert!(cal2jd(2024, 2, 29).is_ok());
        assert_eq!(cal2jd(1900, 2, 29), Err(FrameError::BadDay(29)));
        assert_eq!(cal2jd(2023, 2, 29), Err(FrameError::BadDay(29)));
    }

    #[test]
    fn test_cal2jd_rejections() {
        assert_eq!(cal2jd(-4800, 1, 1), Err(FrameError::BadYear(-4800)));
        assert_eq!(cal2jd(2003, 13, 1), Err(FrameError::BadMonth(13)));
        assert_eq!(cal2jd(2003, 0, 1), Err(FrameError::BadMonth(0)));
        assert_eq!(cal2jd(2003, 6, 31), Err(FrameError::BadDay(31)));
        assert_eq!(cal2jd(2003, 4, 32), Err(FrameError::BadDay(32)));
        assert_eq!(cal2jd(2003, 4, 0), Err(FrameError::BadDay(0)));
        assert!(cal2jd(-4799, 1, 1).is_ok());
    }

    #[test]
    fn test_jd2cal() {
        let (iy, im, id, fd) = jd2cal(JulianDate::new(2400000.5, 50123.9999)).unwrap();
        assert_eq!((iy, im, id), (1996, 2, 10));
        assert_relative_eq!(fd, 0.9999, epsilon = 1e-7);

        let (iy, im, id, fd) = jd2cal(JulianDate::new(2451545.0, -0.5)).unwrap();
        assert_eq!((iy, im, id), (2000, 1, 1));
        assert_eq!(fd, 0.0);
    }

    #[test]
    fn test_jd2cal_inverts_cal2jd() {
        for (iy, im, id) in [(1972, 1, 1), (2016, 12, 31), (-1000, 3, 1), (2100, 2, 28)] {
            let jd = cal2jd(iy, im, id).unwrap();
            let (y, m, d, f) = jd2cal(jd).unwrap();
            assert_eq!((y, m, d), (iy, im, id));
            assert_eq!(f, 0.0);
        }
    }

    #[test]
    fn test_jd2cal_out_of_range() {
        assert_eq!(
            jd2cal(JulianDate::new(-70000.0, 0.0)),
            Err(FrameError::DateOutOfRange(-70000.0))
        );
    }

    #[test]
    fn test_centuries_keep_both_parts() {
        let a = JulianDate::new(2400000.5, 53736.0);
        let b = JulianDate::new(2451545.0, 2191.5);
        assert_relative_eq!(
            a.centuries_since_j2000(),
            b.centuries_since_j2000(),
            epsilon = 1e-15
        );
        assert_eq!(JulianDate::j2000().centuries_since_j2000(), 0.0);
    }

    #[test]
    fn test_from_hifitime_epoch() {
        // MJD 53736.5
        let epoch = Epoch::from_gregorian(2006, 1, 1, 12, 0, 0, 0, TimeScale::TT);
        let tt = JulianDate::from_epoch_tt(&epoch);
        assert_eq!(tt.jd1, JDTOMJD + 53736.0);
        assert_abs_diff_eq!(tt.jd2, 0.5, epsilon = 1e-14);

        let utc = Epoch::from_gregorian(2006, 1, 1, 12, 0, 0, 0, TimeScale::UTC);
        let ut1 = JulianDate::from_epoch_ut1(&utc, -0.3);
        assert_eq!(ut1.jd1, JDTOMJD + 53736.0);
        assert_abs_diff_eq!(ut1.jd2, 0.5 - 0.3 / SECONDS_PER_DAY, epsilon = 1e-14);
    }

    #[test]
    fn test_hifitime_epoch_keeps_nanoseconds() {
        let epoch = Epoch::from_gregorian(2006, 1, 1, 12, 0, 0, 0, TimeScale::TT);
        let base = JulianDate::from_epoch_tt(&epoch);
        let later = JulianDate::from_epoch_tt(&(epoch + Unit::Nanosecond * 250));

        // a single f64 MJD near 53736 resolves about 0.6 µs
        assert_eq!(later.jd1, base.jd1);
        let elapsed = (later.jd2 - base.jd2) * SECONDS_PER_DAY;
        assert_abs_diff_eq!(elapsed, 250e-9, epsilon = 1e-10);

        let ut1 = JulianDate::from_epoch_ut1(&epoch, 0.0);
        let ut1_later = JulianDate::from_epoch_ut1(&epoch, 250e-9);
        let elapsed = (ut1_later.jd2 - ut1.jd2) * SECONDS_PER_DAY;
        assert_abs_diff_eq!(elapsed, 250e-9, epsilon = 1e-10);
    }

    #[test]
    fn test_hifitime_epoch_before_mjd_origin() {
        let epoch = Epoch::from_mjd_in_time_scale(-10.25, TimeScale::TT);
        let tt = JulianDate::from_epoch_tt(&epoch);
        assert_relative_eq!(tt.jd1 + tt.jd2, JDTOMJD - 10.25, epsilon = 1e-9);
    }
}
