//! Conservative world bounds of a path.
//!
//! The bounding rectangle computed here is meant to contain everything a
//! renderer could possibly touch when drawing the path, rather than the
//! tightest box around it:
//!
//! - Only the points of the path are considered. Bézier control points are
//!   points like any other, so curves are always contained.
//! - A transform is applied to the corners of the untransformed box, not to
//!   every point, and the size of the result is derived from the absolute
//!   values of the linear coefficients of the matrix. Rotated paths get a
//!   larger box than necessary.
//! - A pen inflates the box on every side by the furthest any join or cap
//!   could reach, whether or not the path has such a join or cap: the miter
//!   limit counts as soon as the path has more than two points, and anchor
//!   end caps count for `2.2` times the pen width.
//!
//! The start cap of the pen is not taken into account.

use crate::geom::TransformPoints;
use crate::math::{point, rect, Point, Rect, Transform};

#[allow(unused_imports)]
use num_traits::Float;

/// Shapes drawn at the ends of open figures.
///
/// Values match the byte representation of line caps. Caps with the
/// [`ANCHOR_BIT`](LineCap::ANCHOR_BIT) set are drawn larger than the pen
/// width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum LineCap {
    #[default]
    Flat = 0x00,
    Square = 0x01,
    Round = 0x02,
    Triangle = 0x03,
    NoAnchor = 0x10,
    SquareAnchor = 0x11,
    RoundAnchor = 0x12,
    DiamondAnchor = 0x13,
    ArrowAnchor = 0x14,
    Custom = 0xff,
}

impl LineCap {
    pub const ANCHOR_BIT: u8 = 0x10;

    #[inline]
    pub fn has_anchor_bit(self) -> bool {
        self as u8 & Self::ANCHOR_BIT != 0
    }
}

/// The parameters of a pen that affect the bounds of a stroked path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct Pen {
    /// Line width.
    ///
    /// Default value: `Pen::DEFAULT_WIDTH`.
    pub width: f32,

    /// How far a miter join may extend, in multiples of the line width.
    ///
    /// Default value: `Pen::DEFAULT_MITER_LIMIT`.
    pub miter_limit: f32,

    /// What cap to use at the start of each figure.
    ///
    /// Default value: `LineCap::Flat`.
    pub start_cap: LineCap,

    /// What cap to use at the end of each figure.
    ///
    /// Default value: `LineCap::Flat`.
    pub end_cap: LineCap,
}

impl Pen {
    pub const DEFAULT_WIDTH: f32 = 1.0;
    pub const DEFAULT_MITER_LIMIT: f32 = 10.0;
    pub const DEFAULT_LINE_CAP: LineCap = LineCap::Flat;

    /// How far anchor end caps extend, in multiples of the line width.
    pub const ANCHOR_CAP_EXTENT: f32 = 2.2;

    pub const DEFAULT: Self = Pen {
        width: Self::DEFAULT_WIDTH,
        miter_limit: Self::DEFAULT_MITER_LIMIT,
        start_cap: Self::DEFAULT_LINE_CAP,
        end_cap: Self::DEFAULT_LINE_CAP,
    };

    #[inline]
    pub fn width(width: f32) -> Self {
        Self::DEFAULT.with_width(width)
    }

    #[inline]
    pub const fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub const fn with_miter_limit(mut self, limit: f32) -> Self {
        self.miter_limit = limit;
        self
    }

    #[inline]
    pub const fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.start_cap = cap;
        self.end_cap = cap;
        self
    }

    #[inline]
    pub const fn with_start_cap(mut self, cap: LineCap) -> Self {
        self.start_cap = cap;
        self
    }

    #[inline]
    pub const fn with_end_cap(mut self, cap: LineCap) -> Self {
        self.end_cap = cap;
        self
    }

    /// How much the bounds of a path with `point_count` points grow on each
    /// side when stroked with this pen.
    pub fn inflation(&self, point_count: usize) -> f32 {
        let mut half_width = self.width / 2.0;

        if point_count > 2 {
            half_width = half_width.max(self.width * self.miter_limit / 2.0);
        }

        if self.end_cap.has_anchor_bit() {
            half_width = half_width.max(self.width * Self::ANCHOR_CAP_EXTENT);
        }

        half_width
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Computes the conservative bounds of a set of path points.
///
/// Returns an empty rectangle at the origin if there is no point.
pub fn world_bounds<T: TransformPoints>(
    points: &[Point],
    transformer: &T,
    matrix: Option<&Transform>,
    pen: Option<&Pen>,
) -> Rect {
    let (first, rest) = match points.split_first() {
        Some(split) => split,
        None => return Rect::zero(),
    };

    let mut min = *first;
    let mut max = *first;
    for p in rest {
        min = Point::min(min, *p);
        max = Point::max(max, *p);
    }

    let mut origin = min;
    let mut width = max.x - min.x;
    let mut height = max.y - min.y;

    if let Some(m) = matrix {
        let mut corners = [
            point(min.x, min.y),
            point(min.x, max.y),
            point(max.x, max.y),
            point(max.x, min.y),
        ];
        transformer.transform_points(m, &mut corners);

        origin = corners[1..]
            .iter()
            .fold(corners[0], |acc, corner| Point::min(acc, *corner));

        let untransformed_width = width;
        width = height * m.m21.abs() + untransformed_width * m.m11.abs();
        height = height * m.m22.abs() + untransformed_width * m.m12.abs();
    }

    if let Some(pen) = pen {
        let inflation = pen.inflation(points.len());
        origin.x -= inflation;
        origin.y -= inflation;
        width += 2.0 * inflation;
        height += 2.0 * inflation;
    }

    rect(origin.x, origin.y, width, height)
}

#[cfg(test)]
use crate::geom::AffineTransform;
#[cfg(test)]
use crate::{FillMode, Path};

#[cfg(test)]
fn triangle() -> Path {
    let mut path = Path::new(FillMode::Alternate);
    path.add_lines(&[point(0.0, 0.0), point(10.0, 0.0), point(10.0, 5.0)])
        .unwrap();
    path
}

#[cfg(test)]
fn segment() -> Path {
    let mut path = Path::new(FillMode::Alternate);
    path.add_line(point(0.0, 0.0), point(10.0, 5.0)).unwrap();
    path
}

#[test]
fn empty_path() {
    let path = Path::new(FillMode::Alternate);
    let pen = Pen::width(4.0);
    let m = Transform::translation(5.0, 5.0);

    assert_eq!(path.world_bounds(None, None), rect(0.0, 0.0, 0.0, 0.0));
    assert_eq!(path.world_bounds(Some(&m), Some(&pen)), rect(0.0, 0.0, 0.0, 0.0));
}

#[test]
fn tight_box_without_transform_or_pen() {
    assert_eq!(triangle().world_bounds(None, None), rect(0.0, 0.0, 10.0, 5.0));

    let mut path = Path::new(FillMode::Alternate);
    path.add_lines(&[point(3.0, -2.0)]).unwrap();
    assert_eq!(path.world_bounds(None, None), rect(3.0, -2.0, 0.0, 0.0));
}

#[test]
fn control_points_are_included() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_beziers(&[point(0.0, 0.0), point(-1.0, 8.0), point(6.0, -4.0), point(4.0, 0.0)])
        .unwrap();

    assert_eq!(path.world_bounds(None, None), rect(-1.0, -4.0, 7.0, 12.0));
}

#[test]
fn scale_and_translation() {
    let m = Transform::new(2.0, 0.0, 0.0, 3.0, 100.0, 200.0);
    assert_eq!(
        triangle().world_bounds(Some(&m), None),
        rect(100.0, 200.0, 20.0, 15.0)
    );

    // Mirroring keeps the size positive.
    let m = Transform::new(-1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    assert_eq!(
        triangle().world_bounds(Some(&m), None),
        rect(-10.0, 0.0, 10.0, 5.0)
    );
}

#[test]
fn quarter_turn() {
    // (x, y) -> (-y, x)
    let m = Transform::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0);
    assert_eq!(
        triangle().world_bounds(Some(&m), None),
        rect(-5.0, 0.0, 5.0, 10.0)
    );
}

#[test]
fn rotation_is_conservative() {
    let h = core::f32::consts::FRAC_1_SQRT_2;
    let m = Transform::new(h, h, -h, h, 0.0, 0.0);
    let bounds = triangle().world_bounds(Some(&m), None);

    assert_eq!(bounds.size.width, 5.0 * h + 10.0 * h);
    assert_eq!(bounds.size.height, 5.0 * h + 10.0 * h);

    // The box contains every transformed point.
    let mut path = triangle();
    path.transform(&m);
    for p in path.points() {
        assert!(p.x >= bounds.min_x() - 1e-4 && p.x <= bounds.max_x() + 1e-4);
        assert!(p.y >= bounds.min_y() - 1e-4 && p.y <= bounds.max_y() + 1e-4);
    }
}

#[test]
fn only_the_corners_are_transformed() {
    struct Shift;
    impl TransformPoints for Shift {
        fn transform_points(&self, _: &Transform, points: &mut [Point]) {
            assert_eq!(points.len(), 4);
            for p in points {
                p.x += 7.0;
                p.y -= 3.0;
            }
        }
    }

    // The origin comes from the transformer, the size from the matrix.
    let m = Transform::new(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
    assert_eq!(
        triangle().world_bounds_with(&Shift, Some(&m), None),
        rect(7.0, -3.0, 20.0, 10.0)
    );
}

#[test]
fn pen_with_unit_miter_limit() {
    let pen = Pen::width(4.0).with_miter_limit(1.0);
    assert_eq!(
        triangle().world_bounds(None, Some(&pen)),
        rect(-2.0, -2.0, 14.0, 9.0)
    );
}

#[test]
fn miter_limit_needs_a_join() {
    let pen = Pen::width(4.0).with_miter_limit(10.0);

    // Two points: no join, half the width.
    assert_eq!(
        segment().world_bounds(None, Some(&pen)),
        rect(-2.0, -2.0, 14.0, 9.0)
    );

    // Three points: width * miter_limit / 2.
    assert_eq!(
        triangle().world_bounds(None, Some(&pen)),
        rect(-20.0, -20.0, 50.0, 45.0)
    );
}

#[test]
fn anchor_end_caps() {
    let inflation = 4.0 * Pen::ANCHOR_CAP_EXTENT;
    let expected = rect(-inflation, -inflation, 10.0 + 2.0 * inflation, 5.0 + 2.0 * inflation);

    for cap in [
        LineCap::NoAnchor,
        LineCap::SquareAnchor,
        LineCap::RoundAnchor,
        LineCap::DiamondAnchor,
        LineCap::ArrowAnchor,
        LineCap::Custom,
    ] {
        let pen = Pen::width(4.0).with_end_cap(cap);
        assert_eq!(segment().world_bounds(None, Some(&pen)), expected, "{:?}", cap);
    }

    for cap in [LineCap::Flat, LineCap::Square, LineCap::Round, LineCap::Triangle] {
        let pen = Pen::width(4.0).with_end_cap(cap);
        assert_eq!(
            segment().world_bounds(None, Some(&pen)),
            rect(-2.0, -2.0, 14.0, 9.0)
        );
    }

    // Start caps are ignored.
    let pen = Pen::width(4.0).with_start_cap(LineCap::ArrowAnchor);
    assert_eq!(
        segment().world_bounds(None, Some(&pen)),
        rect(-2.0, -2.0, 14.0, 9.0)
    );

    // A large miter limit wins over the cap.
    let pen = Pen::width(4.0).with_line_cap(LineCap::RoundAnchor);
    assert_eq!(
        triangle().world_bounds(None, Some(&pen)),
        rect(-20.0, -20.0, 50.0, 45.0)
    );
}

#[test]
fn transform_then_pen() {
    let m = Transform::new(2.0, 0.0, 0.0, 2.0, 1.0, 1.0);
    let pen = Pen::width(2.0).with_miter_limit(1.0);

    // The pen width is not scaled by the transform.
    assert_eq!(
        triangle().world_bounds(Some(&m), Some(&pen)),
        rect(0.0, 0.0, 22.0, 12.0)
    );
    assert_eq!(
        world_bounds(triangle().points(), &AffineTransform, Some(&m), Some(&pen)),
        rect(0.0, 0.0, 22.0, 12.0)
    );
}

#[test]
fn pen_defaults() {
    let pen = Pen::default();
    assert_eq!(pen.width, 1.0);
    assert_eq!(pen.miter_limit, 10.0);
    assert_eq!(pen.start_cap, LineCap::Flat);
    assert_eq!(pen.end_cap, LineCap::Flat);
    assert_eq!(pen.inflation(2), 0.5);
    assert_eq!(pen.inflation(3), 5.0);
}
