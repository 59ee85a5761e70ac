#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use earthframe::{earth_orientation::PolarMotion, time::JulianDate};
use nalgebra::Matrix3;

/// TT epochs spread over 1900-2100, as `(2400000.5, MJD)`.
pub const EPOCHS_MJD: [f64; 6] = [15020.0, 33282.25, 51544.5, 53736.0, 60000.75, 88069.0];

pub fn epochs() -> impl Iterator<Item = JulianDate> {
    EPOCHS_MJD.into_iter().map(JulianDate::from_mjd)
}

/// UT1 close to the given TT, about one minute behind.
pub fn ut1_near(tt: JulianDate) -> JulianDate {
    JulianDate::new(tt.jd1, tt.jd2 - 64.0 / 86400.0)
}

pub fn pole() -> PolarMotion {
    PolarMotion::new(2.55060238e-7, 1.860359247e-6)
}

pub fn assert_matrix_close(actual: &Matrix3<f64>, expected: &Matrix3<f64>, epsilon: f64) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(a, e, epsilon = epsilon);
    }
}

pub fn assert_orthogonal(m: &Matrix3<f64>, epsilon: f64) {
    assert_matrix_close(&(m * m.transpose()), &Matrix3::identity(), epsilon);
}
