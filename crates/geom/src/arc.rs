//! Elliptic arc to cubic bézier conversion.

use crate::{point, Point, Rect};

use core::f32::consts::{FRAC_PI_2, PI};

#[allow(unused_imports)]
use num_traits::Float;

/// Maximum number of points produced for a single arc.
///
/// An arc never produces more than one full turn: four quarter-turn cubic
/// pieces sharing their endpoints, hence `4 * 3 + 1` points.
pub const MAX_ARC_POINTS: usize = 13;

/// Angular spans below this, in radians, are treated as nothing left to draw.
const ANGLE_EPSILON: f32 = 0.00001;

/// An arc of the ellipse inscribed in a rectangle.
///
/// Angles are in degrees. They are measured on the ellipse as seen on screen
/// rather than on the unit circle, so that a start angle of 45 degrees lands
/// on the diagonal of the bounding rectangle's center even when the ellipse
/// is not a circle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcParams {
    /// Bounding rectangle of the full ellipse.
    pub rect: Rect,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl ArcParams {
    #[inline]
    pub fn new(rect: Rect, start_angle: f32, sweep_angle: f32) -> Self {
        ArcParams {
            rect,
            start_angle,
            sweep_angle,
        }
    }

    #[inline]
    pub fn radii(&self) -> (f32, f32) {
        (self.rect.size.width / 2.0, self.rect.size.height / 2.0)
    }

    #[inline]
    pub fn center(&self) -> Point {
        let (rx, ry) = self.radii();
        point(self.rect.origin.x + rx, self.rect.origin.y + ry)
    }
}

/// Converts arcs into cubic bézier control points.
///
/// Implementations are called twice for the same arc: once without an output
/// buffer to learn how many points the arc produces, and once with a buffer
/// of exactly that size to write them. Both calls must report the same count.
///
/// A count of zero means the arc is degenerate and produces nothing.
pub trait ArcToCurve {
    fn curve_points(&self, arc: &ArcParams, output: Option<&mut [Point]>) -> usize;
}

impl<'l, T: ArcToCurve> ArcToCurve for &'l T {
    #[inline]
    fn curve_points(&self, arc: &ArcParams, output: Option<&mut [Point]>) -> usize {
        (*self).curve_points(arc, output)
    }
}

/// The default arc converter.
///
/// Splits the arc into pieces of at most a quarter turn and approximates each
/// piece with one cubic bézier curve. The first point is the start of the
/// arc, then every piece contributes two control points and its endpoint.
/// Sweeps larger than a full turn are clamped to one turn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BezierArcs;

impl ArcToCurve for BezierArcs {
    fn curve_points(&self, arc: &ArcParams, mut output: Option<&mut [Point]>) -> usize {
        let (rx, ry) = arc.radii();

        let start = unstretch_angle(arc.start_angle, rx, ry);
        let end = unstretch_angle(arc.start_angle + arc.sweep_angle, rx, ry);
        let direction = if arc.sweep_angle > 0.0 { 1.0 } else { -1.0 };

        // Break the arc down into pieces of at most a quarter turn. The loop
        // is the same for both passes so that they always agree.
        let mut from = start;
        let mut count = 1;
        while count < MAX_ARC_POINTS {
            // Signed along the sweep direction.
            let remaining = (end - from) * direction;
            if remaining.is_nan() || remaining <= ANGLE_EPSILON {
                break;
            }

            let span = if remaining > FRAC_PI_2 + ANGLE_EPSILON {
                FRAC_PI_2
            } else {
                remaining
            };
            let to = from + span * direction;
            if to == from {
                break;
            }

            if let Some(output) = output.as_deref_mut() {
                write_arc_piece(&mut output[count - 1..count + 3], arc, from, to, count == 1);
            }

            count += 3;
            from = to;
        }

        if count == 1 {
            return 0;
        }

        count
    }
}

/// Writes one cubic piece of at most a quarter turn.
///
/// The first point is shared with the previous piece and only written for
/// the first piece of the arc.
fn write_arc_piece(output: &mut [Point], arc: &ArcParams, from: f32, to: f32, write_first: bool) {
    let (rx, ry) = arc.radii();
    let center = arc.center();

    let (sin_from, cos_from) = from.sin_cos();
    let (sin_to, cos_to) = to.sin_cos();

    let half = (to - from) / 2.0;
    let a = 4.0 / 3.0 * (1.0 - half.cos()) / half.sin();

    let unit = [
        point(cos_from, sin_from),
        point(cos_from - a * sin_from, sin_from + a * cos_from),
        point(cos_to + a * sin_to, sin_to - a * cos_to),
        point(cos_to, sin_to),
    ];

    let first = if write_first { 0 } else { 1 };
    for i in first..4 {
        output[i] = point(unit[i].x * rx + center.x, unit[i].y * ry + center.y);
    }
}

/// Converts an angle in degrees measured on the stretched ellipse into the
/// parametric angle in radians on the unit circle, keeping the same number of
/// full revolutions.
fn unstretch_angle(degrees: f32, rx: f32, ry: f32) -> f32 {
    let angle = degrees.to_radians();
    let (sin, cos) = angle.sin_cos();

    if cos.abs() < ANGLE_EPSILON || sin.abs() < ANGLE_EPSILON {
        return angle;
    }

    let mut stretched = atan2_or_zero(sin / ry.abs(), cos / rx.abs());
    let revs_off = round(angle / (2.0 * PI)) - round(stretched / (2.0 * PI));
    stretched += revs_off * PI * 2.0;

    stretched
}

#[inline]
fn atan2_or_zero(y: f32, x: f32) -> f32 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }

    y.atan2(x)
}

#[inline]
fn round(v: f32) -> f32 {
    (v + 0.5).floor()
}

#[cfg(test)]
fn approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
}

#[cfg(test)]
fn arc_points(arc: &ArcParams) -> std::vec::Vec<Point> {
    let n = BezierArcs.curve_points(arc, None);
    let mut output = std::vec![point(0.0, 0.0); n];
    assert_eq!(BezierArcs.curve_points(arc, Some(&mut output)), n);

    output
}

#[test]
fn degenerate_sweep() {
    let arc = ArcParams::new(crate::rect(0.0, 0.0, 10.0, 10.0), 30.0, 0.0);
    assert_eq!(BezierArcs.curve_points(&arc, None), 0);

    let arc = ArcParams::new(crate::rect(0.0, 0.0, 10.0, 10.0), 30.0, f32::NAN);
    assert_eq!(BezierArcs.curve_points(&arc, None), 0);
}

#[test]
fn point_count() {
    let r = crate::rect(0.0, 0.0, 2.0, 2.0);
    assert_eq!(BezierArcs.curve_points(&ArcParams::new(r, 0.0, 45.0), None), 4);
    assert_eq!(BezierArcs.curve_points(&ArcParams::new(r, 0.0, -45.0), None), 4);
    assert_eq!(BezierArcs.curve_points(&ArcParams::new(r, 10.0, 100.0), None), 7);
    assert_eq!(BezierArcs.curve_points(&ArcParams::new(r, 0.0, 360.0), None), 13);
    assert_eq!(BezierArcs.curve_points(&ArcParams::new(r, 0.0, 1000.0), None), 13);
}

#[test]
fn quarter_circle() {
    let arc = ArcParams::new(crate::rect(0.0, 0.0, 2.0, 2.0), 0.0, 89.0);
    let points = arc_points(&arc);
    assert_eq!(points.len(), 4);

    let end = 89.0f32.to_radians();
    assert!(approx_eq(points[0], point(2.0, 1.0)));
    assert!(approx_eq(points[3], point(1.0 + end.cos(), 1.0 + end.sin())));

    // Control points leave the endpoints along the tangents.
    assert!((points[1].x - 2.0).abs() < 1e-4);
    assert!(points[1].y > 1.0);
}

#[test]
fn negative_sweep() {
    let arc = ArcParams::new(crate::rect(0.0, 0.0, 2.0, 2.0), 0.0, -45.0);
    let points = arc_points(&arc);
    let h = core::f32::consts::FRAC_1_SQRT_2;

    assert!(approx_eq(points[0], point(2.0, 1.0)));
    assert!(approx_eq(points[3], point(1.0 + h, 1.0 - h)));
}

#[test]
fn full_turn_is_closed() {
    let arc = ArcParams::new(crate::rect(-5.0, -5.0, 10.0, 10.0), 90.0, 360.0);
    let points = arc_points(&arc);
    assert_eq!(points.len(), MAX_ARC_POINTS);
    assert!(approx_eq(points[0], points[12]));
    assert!(approx_eq(points[0], point(0.0, 5.0)));
}

#[test]
fn stretched_start_angle() {
    // On a 2:1 ellipse, 45 degrees still points along the diagonal.
    let arc = ArcParams::new(crate::rect(0.0, 0.0, 4.0, 2.0), 45.0, 30.0);
    let points = arc_points(&arc);
    let center = arc.center();
    let d = points[0] - center;

    assert!((d.x - d.y).abs() < 1e-4);
    assert!(d.x > 0.0);
}

#[test]
fn quarter_sweeps_from_axis_angles() {
    let r = crate::rect(0.0, 0.0, 10.0, 10.0);
    for start in [-360.0, -270.0, -90.0, 0.0, 90.0, 180.0, 270.0, 360.0] {
        for sweep in [90.0, -90.0] {
            let arc = ArcParams::new(r, start, sweep);
            let points = arc_points(&arc);
            assert_eq!(points.len(), 4, "start {} sweep {}", start, sweep);
            assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));

            let end = (start + sweep).to_radians();
            assert!(approx_eq(points[3], point(5.0 + 5.0 * end.cos(), 5.0 + 5.0 * end.sin())));
        }
    }

    // A quarter circle starting a full turn back, control points included.
    let points = arc_points(&ArcParams::new(r, -360.0, 90.0));
    let k = 5.0 * 4.0 / 3.0 * (core::f32::consts::SQRT_2 - 1.0);
    let expected = [
        point(10.0, 5.0),
        point(10.0, 5.0 + k),
        point(5.0 + k, 10.0),
        point(5.0, 10.0),
    ];
    for (p, e) in points.iter().zip(expected.iter()) {
        assert!(approx_eq(*p, *e), "{:?} != {:?}", p, e);
    }
}

#[test]
fn every_start_angle_gives_finite_points() {
    let rects = [
        crate::rect(0.0, 0.0, 10.0, 10.0),
        crate::rect(-3.0, 2.0, 40.0, 10.0),
        crate::rect(1.0, 1.0, 5.0, 30.0),
    ];
    let sweeps = [-450.0, -360.0, -90.0, -45.0, 0.5, 45.0, 90.0, 180.0, 270.0, 360.0];

    for r in &rects {
        for sweep in &sweeps {
            for i in -3600..=3600 {
                let arc = ArcParams::new(*r, i as f32 / 10.0, *sweep);
                let n = BezierArcs.curve_points(&arc, None);
                assert!(n <= MAX_ARC_POINTS);
                assert!(n == 0 || n % 3 == 1, "{:?}: {} points", arc, n);

                let mut output = std::vec![point(0.0, 0.0); n];
                assert_eq!(BezierArcs.curve_points(&arc, Some(&mut output)), n, "{:?}", arc);
                assert!(
                    output.iter().all(|p| p.x.is_finite() && p.y.is_finite()),
                    "{:?}: {:?}",
                    arc,
                    output
                );
            }
        }
    }
}
