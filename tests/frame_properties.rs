mod common;

use approx::assert_abs_diff_eq;
use earthframe::{
    earth_orientation::{era00, sp00},
    intermediate::{c2i, c2ixys, Model},
    precession::{bpn2xy, pnm00a, pnm00b, pnm06a},
    rotation::{rxr, rz},
    series::{ErfaSeries, SeriesEvaluator},
    terrestrial::{c2t, c2t_equinox, c2tcio},
};

use crate::common::{assert_matrix_close, assert_orthogonal, epochs, pole, ut1_near};

#[test]
fn test_matrices_are_orthogonal() {
    for tt in epochs() {
        let ut1 = ut1_near(tt);
        assert_orthogonal(&pole().matrix(sp00(tt)), 1e-12);

        for model in Model::ALL {
            assert_orthogonal(&c2i(&ErfaSeries, model, tt), 1e-12);
            assert_orthogonal(&c2t(&ErfaSeries, model, tt, ut1, pole()), 1e-12);
            assert_orthogonal(&c2t_equinox(&ErfaSeries, model, tt, ut1, pole()), 1e-12);
        }
    }
}

#[test]
fn test_hand_assembly_matches_facade() {
    for tt in epochs() {
        let ut1 = ut1_near(tt);

        for model in Model::ALL {
            let (rbpn, sp) = match model {
                Model::Iau2000A => (pnm00a(&ErfaSeries, tt), sp00(tt)),
                Model::Iau2000B => (pnm00b(&ErfaSeries, tt), 0.0),
                Model::Iau2006A => (pnm06a(&ErfaSeries, tt), sp00(tt)),
            };
            let cip = bpn2xy(&rbpn);
            let s = match model {
                Model::Iau2006A => ErfaSeries.s06(tt, cip.x, cip.y),
                _ => ErfaSeries.s00(tt, cip.x, cip.y),
            };

            let manual = c2tcio(&c2ixys(cip.x, cip.y, s), era00(ut1), &pole().matrix(sp));
            let facade = c2t(&ErfaSeries, model, tt, ut1, pole());
            assert_matrix_close(&manual, &facade, 1e-10);
        }
    }
}

#[test]
fn test_cio_and_equinox_routes_agree() {
    for tt in epochs() {
        let ut1 = ut1_near(tt);
        let cio = c2t(&ErfaSeries, Model::Iau2006A, tt, ut1, pole());
        let eqx = c2t_equinox(&ErfaSeries, Model::Iau2006A, tt, ut1, pole());
        assert_matrix_close(&cio, &eqx, 1e-12);
    }
}

#[test]
fn test_cip_survives_c2ixys() {
    let cases = [
        (0.5791308486706011e-3, 0.4020579816732961e-4, -0.1220040848472272e-7),
        (-2.1e-3, 7.5e-4, 3.0e-8),
        (0.0, 1.0e-5, 0.0),
        (0.1, -0.2, 1.0e-6),
    ];
    for (x, y, s) in cases {
        let cip = bpn2xy(&c2ixys(x, y, s));
        assert_abs_diff_eq!(cip.x, x, epsilon = 1e-15);
        assert_abs_diff_eq!(cip.y, y, epsilon = 1e-15);
    }
}

#[test]
fn test_c2tcio_is_plain_composition() {
    for tt in epochs() {
        let rc2i = c2i(&ErfaSeries, Model::Iau2006A, tt);
        let era = era00(ut1_near(tt));
        let rpom = pole().matrix(sp00(tt));

        let mut rotated = rc2i;
        rz(era, &mut rotated);
        assert_eq!(c2tcio(&rc2i, era, &rpom), rxr(&rpom, &rotated));
    }
}
