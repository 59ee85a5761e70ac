mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use earthframe::{
    conversion::{c2s, p2pv, pv2s, s2c, s2pv},
    earth_orientation::ee00,
    rotation::{matrix_from_nested, matrix_from_slice, to_rows, vector_from_slice},
    series::ErfaSeries,
    terrestrial::c2t06a,
    time::cal2jd,
    Convention, EarthOrientation, FrameError, JulianDate, Model, OrientationParams,
};
use hifitime::{Epoch, TimeScale};
use nalgebra::Vector3;

use crate::common::{assert_matrix_close, assert_orthogonal, epochs, pole, ut1_near};

#[test]
fn test_equation_of_equinoxes_reference() {
    let tt = JulianDate::new(2400000.5, 53736.0);
    let ee = ee00(tt, 0.4090789763356509900, -0.9630909107115582393e-5);
    assert_abs_diff_eq!(ee, -0.8834193235367965479e-5, epsilon = 1e-18);
}

#[test]
fn test_calendar_date_to_matrix() {
    let tt = cal2jd(2006, 1, 1).unwrap();
    assert_eq!(tt, JulianDate::new(2400000.5, 53736.0));

    let earth = EarthOrientation::default();
    let rc2t = earth.celestial_to_terrestrial(tt, tt, pole());
    assert_eq!(rc2t, c2t06a(&ErfaSeries, tt, tt, pole()));
}

#[test]
fn test_calendar_rejections() {
    assert_eq!(cal2jd(-4800, 1, 1), Err(FrameError::BadYear(-4800)));
    assert_eq!(cal2jd(2020, 13, 1), Err(FrameError::BadMonth(13)));
    assert_eq!(cal2jd(2020, 9, 32), Err(FrameError::BadDay(32)));
}

#[test]
fn test_hifitime_epoch_matches_mjd_split() {
    let earth = EarthOrientation::default();
    let epoch = Epoch::from_mjd_in_time_scale(53736.0, TimeScale::TT);

    // zero dut1 and a TT epoch: UT1 trails TT by TT - UTC
    let from_epoch = earth.celestial_to_terrestrial_at(&epoch, 0.0, pole());
    let tt = JulianDate::from_mjd(53736.0);
    let ut1 = JulianDate::from_mjd(epoch.to_mjd_utc_days());
    let from_split = earth.celestial_to_terrestrial(tt, ut1, pole());
    assert_matrix_close(&from_epoch, &from_split, 1e-9);
    assert_orthogonal(&from_epoch, 1e-12);
}

#[test]
fn test_every_configuration_is_a_rotation() {
    for model in Model::ALL {
        for convention in [Convention::Cio, Convention::Equinox] {
            let params = OrientationParams { model, convention };
            let earth = EarthOrientation::new(params);
            assert_eq!(earth.params(), &params);

            for tt in epochs() {
                let rc2t = earth.celestial_to_terrestrial(tt, ut1_near(tt), pole());
                assert_orthogonal(&rc2t, 1e-12);
                assert_orthogonal(&earth.celestial_to_intermediate(tt), 1e-12);
            }
        }
    }
}

#[test]
fn test_star_direction_to_terrestrial_and_back() {
    let earth = EarthOrientation::default();
    let tt = JulianDate::from_mjd(60000.75);
    let ut1 = ut1_near(tt);

    let (ra, dec) = (1.234, -0.456);
    let itrs = earth.gcrs_to_itrs(&s2c(ra, dec), tt, ut1, pole());
    assert_relative_eq!(itrs.norm(), 1.0, epsilon = 1e-15);

    let (ra_back, dec_back) = c2s(&earth.itrs_to_gcrs(&itrs, tt, ut1, pole()));
    assert_abs_diff_eq!(ra_back, ra, epsilon = 1e-14);
    assert_abs_diff_eq!(dec_back, dec, epsilon = 1e-14);
}

#[test]
fn test_rotating_a_state_keeps_spherical_rates() {
    let pv = s2pv(0.5, 0.2, 7000.0, 1e-4, -2e-5, 0.3);
    let rc2t = earth_matrix();
    let rotated = pv.rotate(&rc2t);

    let (_, _, r, _, _, rd) = pv2s(&rotated);
    assert_relative_eq!(r, 7000.0, epsilon = 1e-9);
    assert_relative_eq!(rd, 0.3, epsilon = 1e-12);

    let (_, _, _, td, pd, rd) = pv2s(&p2pv(&rotated.p));
    assert_eq!((td, pd, rd), (0.0, 0.0, 0.0));
}

fn earth_matrix() -> nalgebra::Matrix3<f64> {
    let tt = JulianDate::from_mjd(53736.0);
    EarthOrientation::default().celestial_to_terrestrial(tt, tt, pole())
}

#[test]
fn test_array_boundary() {
    let rc2t = earth_matrix();
    let flat: Vec<f64> = to_rows(&rc2t).iter().flatten().copied().collect();
    assert_eq!(matrix_from_slice(&flat), Ok(rc2t));

    let nested: Vec<Vec<f64>> = to_rows(&rc2t).iter().map(|row| row.to_vec()).collect();
    assert_eq!(matrix_from_nested(&nested), Ok(rc2t));
}

#[test]
fn test_shape_errors() {
    assert_eq!(
        matrix_from_slice(&[1.0; 8]),
        Err(FrameError::InvalidShape {
            expected: "9 elements".into(),
            found: "8 elements".into(),
        })
    );
    assert_eq!(
        matrix_from_nested(&[vec![1.0; 3], vec![1.0; 3]]),
        Err(FrameError::InvalidShape {
            expected: "3 rows".into(),
            found: "2 rows".into(),
        })
    );
    assert_eq!(
        matrix_from_nested(&[vec![1.0; 3], vec![1.0; 4], vec![1.0; 3]]),
        Err(FrameError::InvalidShape {
            expected: "3 columns".into(),
            found: "4 columns in row 1".into(),
        })
    );
    assert_eq!(vector_from_slice(&[1.0, 2.0, 3.0]), Ok(Vector3::new(1.0, 2.0, 3.0)));
    assert!(vector_from_slice(&[1.0, 2.0]).is_err());
}
