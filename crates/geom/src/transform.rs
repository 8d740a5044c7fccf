//! Affine transformation of point slices.

use crate::{Point, Transform};

/// Transforms points in place.
///
/// The matrix carries the linear coefficients `m11, m12, m21, m22` and the
/// translation `m31, m32`.
pub trait TransformPoints {
    fn transform_points(&self, matrix: &Transform, points: &mut [Point]);
}

impl<'l, T: TransformPoints> TransformPoints for &'l T {
    #[inline]
    fn transform_points(&self, matrix: &Transform, points: &mut [Point]) {
        (*self).transform_points(matrix, points)
    }
}

/// The default point transformer, applying the matrix to each point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AffineTransform;

impl TransformPoints for AffineTransform {
    fn transform_points(&self, matrix: &Transform, points: &mut [Point]) {
        for p in points.iter_mut() {
            *p = matrix.transform_point(*p);
        }
    }
}

#[test]
fn translate_and_scale() {
    use crate::point;

    let matrix = Transform::new(2.0, 0.0, 0.0, 3.0, 10.0, 20.0);
    let mut points = [point(0.0, 0.0), point(1.0, 1.0), point(-2.0, 4.0)];
    AffineTransform.transform_points(&matrix, &mut points);

    assert_eq!(points, [point(10.0, 20.0), point(12.0, 23.0), point(6.0, 32.0)]);
}

#[test]
fn shear_uses_row_vector_convention() {
    use crate::point;

    // x' = x * m11 + y * m21, y' = x * m12 + y * m22
    let matrix = Transform::new(1.0, 0.0, 2.0, 1.0, 0.0, 0.0);
    let mut points = [point(1.0, 1.0)];
    AffineTransform.transform_points(&matrix, &mut points);

    assert_eq!(points, [point(3.0, 1.0)]);
}

#[test]
fn empty_slice() {
    let mut points: [Point; 0] = [];
    AffineTransform.transform_points(&Transform::identity(), &mut points);
}
