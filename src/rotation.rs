//! # Rotation-matrix primitives
//!
//! Elementary frame rotations and the helpers used to move matrices across the public
//! array boundary.
//!
//! ## Convention
//!
//! Every matrix in this crate is a [`Matrix3<f64>`] whose element `(i, j)` multiplies the
//! `j`-th input component into the `i`-th output component, so that a vector is transformed
//! as `out = M * in`. Composition reads right to left: in `a * b`, `b` is applied first.
//!
//! The axis rotations follow the frame-rotation sign used by the IAU algorithms: a positive
//! angle turns the *reference frame* anticlockwise when looking from the positive end of the
//! axis towards the origin. For the Z axis this is
//!
//! ```text
//!          (  cos ψ   sin ψ   0 )
//! R₃(ψ) =  ( -sin ψ   cos ψ   0 )
//!          (    0       0     1 )
//! ```
//!
//! Plain `[[f64; 3]; 3]` arrays are always **row-major** here. Use [`from_rows`] and
//! [`to_rows`] at the boundary; nalgebra's own `From<[[f64; 3]; 3]>` reads the inner arrays
//! as columns and must not be used for IAU matrices.
use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::{
    constants::{Radian, DPI},
    frame_errors::FrameError,
};

/// Cartesian axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Return the 3×3 identity matrix.
pub fn identity() -> Matrix3<f64> {
    Matrix3::identity()
}

/// Build the elementary frame rotation `R_axis(angle)`.
///
/// Arguments
/// ---------
/// * `angle`: rotation angle in radians, positive anticlockwise looking towards the origin.
/// * `axis`: the axis of rotation.
///
/// Returns
/// --------
/// * The orthogonal matrix rotating the reference frame by `angle` about `axis`.
///
/// Remarks
/// -------
/// * nalgebra rotates vectors (active rotation), so the frame rotation is obtained with
///   the opposite angle.
pub fn rotmt(angle: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, -angle).into()
}

/// Rotate `r` about the X axis: `r ← R₁(phi) · r`.
pub fn rx(phi: Radian, r: &mut Matrix3<f64>) {
    *r = rotmt(phi, Axis::X) * *r;
}

/// Rotate `r` about the Y axis: `r ← R₂(theta) · r`.
pub fn ry(theta: Radian, r: &mut Matrix3<f64>) {
    *r = rotmt(theta, Axis::Y) * *r;
}

/// Rotate `r` about the Z axis: `r ← R₃(psi) · r`.
pub fn rz(psi: Radian, r: &mut Matrix3<f64>) {
    *r = rotmt(psi, Axis::Z) * *r;
}

/// Matrix product `a · b`. Neither input is modified.
pub fn rxr(a: &Matrix3<f64>, b: &Matrix3<f64>) -> Matrix3<f64> {
    a * b
}

/// Apply `r` to a vector: `r · p`.
pub fn rxp(r: &Matrix3<f64>, p: &Vector3<f64>) -> Vector3<f64> {
    r * p
}

/// Apply the inverse (transpose) of `r` to a vector: `rᵀ · p`.
pub fn trxp(r: &Matrix3<f64>, p: &Vector3<f64>) -> Vector3<f64> {
    r.tr_mul(p)
}

/// Build a matrix from row-major nested arrays.
pub fn from_rows(rows: [[f64; 3]; 3]) -> Matrix3<f64> {
    Matrix3::new(
        rows[0][0], rows[0][1], rows[0][2], //
        rows[1][0], rows[1][1], rows[1][2], //
        rows[2][0], rows[2][1], rows[2][2],
    )
}

/// Export a matrix as row-major nested arrays.
pub fn to_rows(m: &Matrix3<f64>) -> [[f64; 3]; 3] {
    [
        [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
        [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
        [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
    ]
}

/// Build a matrix from a flat, row-major slice of exactly nine elements.
///
/// Arguments
/// ---------
/// * `values`: the nine matrix elements, row after row.
///
/// Returns
/// --------
/// * The matrix, or [`FrameError::InvalidShape`] when `values` does not hold nine elements.
pub fn matrix_from_slice(values: &[f64]) -> Result<Matrix3<f64>, FrameError> {
    if values.len() != 9 {
        return Err(FrameError::shape("9 elements", format!("{} elements", values.len())));
    }
    Ok(Matrix3::from_row_slice(values))
}

/// Build a matrix from a list of rows, checking that it is exactly 3×3.
pub fn matrix_from_nested(rows: &[Vec<f64>]) -> Result<Matrix3<f64>, FrameError> {
    if rows.len() != 3 {
        return Err(FrameError::shape("3 rows", format!("{} rows", rows.len())));
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != 3) {
        return Err(FrameError::shape(
            "3 columns",
            format!("{} columns in row {i}", row.len()),
        ));
    }

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    matrix_from_slice(&flat)
}

/// Build a 3-vector from a slice of exactly three elements.
pub fn vector_from_slice(values: &[f64]) -> Result<Vector3<f64>, FrameError> {
    if values.len() != 3 {
        return Err(FrameError::shape("3 elements", format!("{} elements", values.len())));
    }
    Ok(Vector3::from_column_slice(values))
}

/// Check that `m · mᵀ` equals the identity to within `tol` on every element.
pub fn is_orthogonal(m: &Matrix3<f64>, tol: f64) -> bool {
    let residual = m * m.transpose() - Matrix3::identity();
    residual.iter().all(|e| e.abs() <= tol)
}

/// Normalize an angle into `[0, 2π)`.
pub fn anp(a: Radian) -> Radian {
    let w = a % DPI;
    if w < 0.0 {
        w + DPI
    } else {
        w
    }
}

/// Normalize an angle into `[-π, π)`.
pub fn anpm(a: Radian) -> Radian {
    let pi = std::f64::consts::PI;
    let mut w = a % DPI;
    if w.abs() >= pi {
        w -= DPI.copysign(a);
    }
    w
}
