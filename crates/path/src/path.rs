//! The path data structure.
//!

use crate::bounds::{self, Pen};
use crate::error::{PathError, PathResult};
use crate::geom::{AffineTransform, ArcParams, ArcToCurve, BezierArcs, TransformPoints};
use crate::iterator::Figures;
use crate::math::*;
use crate::point_type::{PointFlags, PointRole, PointType};
use crate::storage::PathStorage;
use crate::FillMode;

use core::fmt;

#[cfg(feature = "serialization")]
use alloc::vec::Vec;

/// A mutable path.
///
/// # Representation
///
/// Paths contain two buffers of the same length:
/// - a buffer of points (endpoints and bézier control points),
/// - and a buffer of [`PointType`] tags, one per point.
///
/// ```ascii
///  _______________________________________________________
/// |       |      |      |        |        |        |
/// | Start | Line | Line | Bezier | Bezier | Bezier | ...
/// |_______|______|______|________|________|________|_
///  _______________________________________________________
/// |       |      |      |        |        |        |
/// | x, y  | x, y | x, y |ctrl x,y|ctrl x,y| to x,y | ...
/// |_______|______|______|________|________|________|_
/// ```
///
/// A figure (or subpath) runs from a `Start` point up to the next one. The
/// last point of a closed figure carries [`PointFlags::CLOSE_SUBPATH`].
///
/// The path remembers whether the next appended point must open a new
/// figure. This is the case for a new path, and after
/// [`start_figure`](Path::start_figure), [`close_figure`](Path::close_figure)
/// or [`close_all_figures`](Path::close_all_figures).
#[derive(Clone)]
#[cfg_attr(
    feature = "serialization",
    derive(Serialize, Deserialize),
    serde(into = "RawPath", try_from = "RawPath")
)]
pub struct Path {
    storage: PathStorage,
    fill_mode: FillMode,
    new_figure: bool,
}

impl Path {
    /// Creates an empty `Path`.
    ///
    /// No memory is allocated until the first point is added.
    #[inline]
    pub fn new(fill_mode: FillMode) -> Self {
        Path {
            storage: PathStorage::new(),
            fill_mode,
            new_figure: true,
        }
    }

    /// Creates a path out of existing points and tag bytes.
    ///
    /// Fails with `InvalidArgument` if the slices have different lengths, if
    /// a byte does not decode, or if the first point is not a `Start` point.
    /// The next point added to the returned path opens a new figure.
    pub fn from_raw(fill_mode: FillMode, points: &[Point], types: &[u8]) -> PathResult<Self> {
        if points.len() != types.len() {
            return Err(PathError::InvalidArgument);
        }

        let mut path = Path::new(fill_mode);
        if points.is_empty() {
            return Ok(path);
        }

        path.storage.reserve(points.len())?;

        for (point, byte) in points.iter().zip(types) {
            let ty = PointType::from_byte(*byte)?;
            if path.is_empty() && !ty.is_start() {
                return Err(PathError::InvalidArgument);
            }

            path.storage.extend(core::slice::from_ref(point), ty);
        }

        Ok(path)
    }

    #[inline]
    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    /// Number of points in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Number of points the path can hold before growing its storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        self.storage.points()
    }

    #[inline]
    pub fn types(&self) -> &[PointType] {
        self.storage.types()
    }

    #[inline]
    pub fn last_point(&self) -> Option<Point> {
        self.points().last().copied()
    }

    /// Whether the next point added opens a new figure.
    #[inline]
    pub fn starts_new_figure(&self) -> bool {
        self.new_figure
    }

    /// Iterates over the figures of the path.
    #[inline]
    pub fn figures(&self) -> Figures {
        Figures::new(self.points(), self.types())
    }

    /// Copies the points into `output` and returns how many were written.
    ///
    /// Fails with `InsufficientBuffer` without writing anything if `output`
    /// is shorter than the path.
    pub fn copy_points_to(&self, output: &mut [Point]) -> PathResult<usize> {
        let count = self.len();
        if output.len() < count {
            return Err(PathError::InsufficientBuffer {
                required: count,
                provided: output.len(),
            });
        }

        output[..count].copy_from_slice(self.points());

        Ok(count)
    }

    /// Copies the tags as bytes into `output` and returns how many were
    /// written.
    ///
    /// Fails with `InsufficientBuffer` without writing anything if `output`
    /// is shorter than the path.
    pub fn copy_types_to(&self, output: &mut [u8]) -> PathResult<usize> {
        let count = self.len();
        if output.len() < count {
            return Err(PathError::InsufficientBuffer {
                required: count,
                provided: output.len(),
            });
        }

        for (byte, ty) in output.iter_mut().zip(self.types()) {
            *byte = ty.to_byte();
        }

        Ok(count)
    }

    /// Appends a polyline.
    ///
    /// Every point is tagged `Line`, except the first one which becomes a
    /// `Start` point if a new figure was pending.
    pub fn add_lines(&mut self, points: &[Point]) -> PathResult<()> {
        if points.is_empty() {
            return Ok(());
        }

        self.storage.reserve(points.len())?;

        let first = self.len();
        self.storage.extend(points, PointType::LINE);
        self.begin_segment(first, PointRole::Line);

        Ok(())
    }

    /// Appends a single line segment.
    #[inline]
    pub fn add_line(&mut self, from: Point, to: Point) -> PathResult<()> {
        self.add_lines(&[from, to])
    }

    /// Appends an elliptic arc, approximated with cubic bézier curves.
    ///
    /// Equivalent to `add_arc_with(&BezierArcs, arc)`.
    #[inline]
    pub fn add_arc(&mut self, arc: &ArcParams) -> PathResult<()> {
        self.add_arc_with(&BezierArcs, arc)
    }

    /// Appends an elliptic arc using a custom arc converter.
    ///
    /// Degenerate arcs (for which the converter produces no point) are
    /// ignored. The first point of the arc becomes a `Start` point if a new
    /// figure was pending, otherwise a `Line` point connecting the arc to the
    /// current figure. The other points are tagged `Bezier`.
    ///
    /// Fails with `InvalidArgument` if the converter writes a different
    /// number of points than it announced.
    pub fn add_arc_with<A: ArcToCurve>(&mut self, converter: &A, arc: &ArcParams) -> PathResult<()> {
        let count = converter.curve_points(arc, None);
        if count == 0 {
            log::trace!("skipping degenerate arc {:?}", arc);
            return Ok(());
        }

        self.storage.reserve(count)?;

        let first = self.len();
        let written = converter.curve_points(arc, Some(self.storage.grow(count, PointType::BEZIER)));
        if written != count {
            log::warn!("arc converter announced {} points but wrote {}", count, written);
            self.storage.truncate(first);
            return Err(PathError::InvalidArgument);
        }

        self.begin_segment(first, PointRole::Line);

        Ok(())
    }

    /// Appends a sequence of cubic bézier curves.
    ///
    /// The first point is the start of the first curve, then each curve
    /// takes two control points and an endpoint, so `points` must hold
    /// `3 * n + 1` points with `n >= 1`, otherwise this fails with
    /// `InvalidArgument`. Tagging follows [`add_arc_with`](Path::add_arc_with).
    pub fn add_beziers(&mut self, points: &[Point]) -> PathResult<()> {
        if points.len() < 4 || (points.len() - 1) % 3 != 0 {
            return Err(PathError::InvalidArgument);
        }

        self.storage.reserve(points.len())?;

        let first = self.len();
        self.storage.extend(points, PointType::BEZIER);
        self.begin_segment(first, PointRole::Line);

        Ok(())
    }

    /// Makes the next added point open a new figure, without closing the
    /// current one.
    #[inline]
    pub fn start_figure(&mut self) {
        self.new_figure = true;
    }

    /// Closes the current figure.
    ///
    /// Does nothing on an empty path.
    pub fn close_figure(&mut self) {
        if let Some(last) = self.storage.types_mut().last_mut() {
            last.insert_flags(PointFlags::CLOSE_SUBPATH);
            self.new_figure = true;
        }
    }

    /// Closes every figure that is followed by another one.
    ///
    /// The last figure is left as is, but the next added point opens a new
    /// figure regardless.
    pub fn close_all_figures(&mut self) {
        let types = self.storage.types_mut();
        for i in 1..types.len() {
            if types[i].is_start() {
                types[i - 1].insert_flags(PointFlags::CLOSE_SUBPATH);
            }
        }

        self.new_figure = true;
    }

    /// Removes all points, keeping the fill mode and the allocated storage.
    pub fn reset(&mut self) {
        self.storage.clear();
        self.new_figure = true;
    }

    /// Applies a transform to all points of the path.
    #[inline]
    pub fn transform(&mut self, matrix: &Transform) {
        self.transform_with(&AffineTransform, matrix);
    }

    /// Applies a transform to all points of the path using a custom point
    /// transformer. Tags are not affected.
    pub fn transform_with<T: TransformPoints>(&mut self, transformer: &T, matrix: &Transform) {
        if self.is_empty() {
            return;
        }

        transformer.transform_points(matrix, self.storage.points_mut());
    }

    /// Returns the transformed path.
    #[inline]
    pub fn transformed(mut self, matrix: &Transform) -> Self {
        self.transform(matrix);
        self
    }

    /// Computes a conservative bounding rectangle of the path as it would be
    /// rendered with an optional transform and an optional pen.
    ///
    /// See the [bounds](crate::bounds) module.
    #[inline]
    pub fn world_bounds(&self, matrix: Option<&Transform>, pen: Option<&Pen>) -> Rect {
        self.world_bounds_with(&AffineTransform, matrix, pen)
    }

    /// Same as [`world_bounds`](Path::world_bounds) with a custom point
    /// transformer.
    #[inline]
    pub fn world_bounds_with<T: TransformPoints>(
        &self,
        transformer: &T,
        matrix: Option<&Transform>,
        pen: Option<&Pen>,
    ) -> Rect {
        bounds::world_bounds(self.points(), transformer, matrix, pen)
    }

    /// Fixes the role of the first point of a freshly appended run.
    fn begin_segment(&mut self, first: usize, continued: PointRole) {
        let role = if self.new_figure {
            PointRole::Start
        } else {
            continued
        };

        self.storage.types_mut()[first].set_role(role);
        self.new_figure = false;
    }
}

impl Default for Path {
    fn default() -> Self {
        Path::new(FillMode::default())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fn write_point(formatter: &mut fmt::Formatter, point: Point) -> fmt::Result {
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.x, formatter)?;
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.y, formatter)
        }

        write!(formatter, "\"")?;

        let mut curve_points = 0;
        for (point, ty) in self.points().iter().zip(self.types()) {
            match ty.role() {
                PointRole::Start => {
                    curve_points = 0;
                    write!(formatter, " M")?;
                }
                PointRole::Line => {
                    curve_points = 0;
                    write!(formatter, " L")?;
                }
                PointRole::Bezier => {
                    if curve_points % 3 == 0 {
                        write!(formatter, " C")?;
                    }
                    curve_points += 1;
                }
            }

            write_point(formatter, *point)?;

            if ty.closes_subpath() {
                write!(formatter, " Z")?;
            }
        }

        write!(formatter, "\"")
    }
}

#[cfg(feature = "serialization")]
#[derive(Clone, Serialize, Deserialize)]
struct RawPath {
    fill_mode: FillMode,
    points: Vec<Point>,
    types: Vec<u8>,
}

#[cfg(feature = "serialization")]
impl From<Path> for RawPath {
    fn from(path: Path) -> Self {
        RawPath {
            fill_mode: path.fill_mode,
            points: path.points().to_vec(),
            types: path.types().iter().map(|ty| ty.to_byte()).collect(),
        }
    }
}

#[cfg(feature = "serialization")]
impl core::convert::TryFrom<RawPath> for Path {
    type Error = PathError;
    fn try_from(raw: RawPath) -> PathResult<Self> {
        Path::from_raw(raw.fill_mode, &raw.points, &raw.types)
    }
}

#[cfg(test)]
use alloc::{format, vec};

#[cfg(test)]
fn roles(path: &Path) -> alloc::vec::Vec<PointRole> {
    path.types().iter().map(|ty| ty.role()).collect()
}

#[cfg(test)]
fn bytes(path: &Path) -> alloc::vec::Vec<u8> {
    path.types().iter().map(|ty| ty.to_byte()).collect()
}

/// Writes `n` points along the x axis, starting at the arc's start angle.
#[cfg(test)]
struct FakeArcs(usize);

#[cfg(test)]
impl ArcToCurve for FakeArcs {
    fn curve_points(&self, arc: &ArcParams, output: Option<&mut [Point]>) -> usize {
        if let Some(output) = output {
            for (i, p) in output.iter_mut().enumerate() {
                *p = point(arc.start_angle + i as f32, 0.0);
            }
        }

        self.0
    }
}

/// Announces one more point than it writes.
#[cfg(test)]
struct LyingArcs;

#[cfg(test)]
impl ArcToCurve for LyingArcs {
    fn curve_points(&self, _: &ArcParams, output: Option<&mut [Point]>) -> usize {
        match output {
            Some(_) => 3,
            None => 4,
        }
    }
}

#[cfg(test)]
fn any_arc(start_angle: f32) -> ArcParams {
    ArcParams::new(rect(0.0, 0.0, 10.0, 10.0), start_angle, 90.0)
}

#[test]
fn new_path_is_empty() {
    let path = Path::new(FillMode::Winding);
    assert_eq!(path.fill_mode(), FillMode::Winding);
    assert_eq!(path.len(), 0);
    assert!(path.is_empty());
    assert_eq!(path.capacity(), 0);
    assert!(path.starts_new_figure());
    assert_eq!(path.last_point(), None);
    assert_eq!(format!("{:?}", path), "\"\"");
}

#[test]
fn lines() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_lines(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)])
        .unwrap();
    path.add_lines(&[point(2.0, 2.0)]).unwrap();

    assert_eq!(path.len(), 4);
    assert_eq!(
        roles(&path),
        vec![PointRole::Start, PointRole::Line, PointRole::Line, PointRole::Line]
    );
    assert!(!path.starts_new_figure());
    assert_eq!(path.last_point(), Some(point(2.0, 2.0)));
    assert_eq!(path.capacity(), 6);
}

#[test]
fn empty_lines_are_a_no_op() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_lines(&[]).unwrap();

    assert!(path.is_empty());
    assert!(path.starts_new_figure());
    assert_eq!(path.capacity(), 0);
}

#[test]
fn single_line() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_line(point(0.0, 0.0), point(3.0, 4.0)).unwrap();
    path.add_line(point(3.0, 4.0), point(5.0, 5.0)).unwrap();

    assert_eq!(
        bytes(&path),
        vec![0x00, 0x01, 0x01, 0x01]
    );
}

#[test]
fn arc_opens_a_figure() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_arc_with(&FakeArcs(4), &any_arc(0.0)).unwrap();

    assert_eq!(
        roles(&path),
        vec![PointRole::Start, PointRole::Bezier, PointRole::Bezier, PointRole::Bezier]
    );
    assert_eq!(
        path.points(),
        &[point(0.0, 0.0), point(1.0, 0.0), point(2.0, 0.0), point(3.0, 0.0)]
    );
    assert!(!path.starts_new_figure());
}

#[test]
fn arc_continues_a_figure() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_lines(&[point(0.0, 0.0), point(1.0, 0.0)]).unwrap();
    path.add_arc_with(&FakeArcs(4), &any_arc(10.0)).unwrap();

    assert_eq!(
        bytes(&path),
        vec![0x00, 0x01, 0x01, 0x03, 0x03, 0x03]
    );
    assert_eq!(path.points()[2], point(10.0, 0.0));
}

#[test]
fn degenerate_arc() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_arc_with(&FakeArcs(0), &any_arc(0.0)).unwrap();
    assert!(path.is_empty());
    assert!(path.starts_new_figure());
    assert_eq!(path.capacity(), 0);

    path.add_arc(&ArcParams::new(rect(0.0, 0.0, 10.0, 10.0), 30.0, 0.0))
        .unwrap();
    assert!(path.is_empty());
}

#[test]
fn default_arcs() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_arc(&ArcParams::new(rect(0.0, 0.0, 10.0, 10.0), 0.0, 45.0))
        .unwrap();
    path.add_arc(&ArcParams::new(rect(0.0, 0.0, 10.0, 10.0), 10.0, 100.0))
        .unwrap();

    assert_eq!(path.len(), 4 + 7);
    assert_eq!(path.types()[0], PointType::START);
    assert_eq!(path.types()[4], PointType::LINE);
    assert_eq!(path.figures().count(), 1);
}

#[test]
fn inconsistent_arc_converter() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_lines(&[point(0.0, 0.0), point(1.0, 0.0)]).unwrap();

    assert_eq!(
        path.add_arc_with(&LyingArcs, &any_arc(0.0)),
        Err(PathError::InvalidArgument)
    );
    assert_eq!(path.len(), 2);
    assert_eq!(path.types().len(), 2);
    assert!(!path.starts_new_figure());
}

#[test]
fn beziers() {
    let mut path = Path::new(FillMode::Alternate);
    let curve = [point(0.0, 0.0), point(1.0, 2.0), point(3.0, 2.0), point(4.0, 0.0)];
    path.add_beziers(&curve).unwrap();
    path.add_beziers(&curve).unwrap();

    assert_eq!(
        bytes(&path),
        vec![0x00, 0x03, 0x03, 0x03, 0x01, 0x03, 0x03, 0x03]
    );

    for n in [0, 1, 2, 3, 5, 6] {
        assert_eq!(
            path.add_beziers(&vec![point(0.0, 0.0); n]),
            Err(PathError::InvalidArgument)
        );
    }
    path.add_beziers(&[point(0.0, 0.0); 7]).unwrap();
    assert_eq!(path.len(), 15);
}

#[test]
fn start_figure() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_lines(&[point(0.0, 0.0), point(1.0, 0.0)]).unwrap();
    path.start_figure();
    path.start_figure();
    assert_eq!(path.len(), 2);

    path.add_lines(&[point(5.0, 5.0), point(6.0, 5.0)]).unwrap();

    // Starting a figure doesn't close the previous one.
    assert_eq!(bytes(&path), vec![0x00, 0x01, 0x00, 0x01]);
    assert_eq!(path.figures().count(), 2);
}

#[test]
fn close_figure() {
    let mut path = Path::new(FillMode::Alternate);
    path.close_figure();
    assert!(path.is_empty());

    path.add_lines(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)])
        .unwrap();
    path.close_figure();
    assert!(path.starts_new_figure());
    assert_eq!(bytes(&path), vec![0x00, 0x01, 0x81]);

    path.add_arc_with(&FakeArcs(4), &any_arc(0.0)).unwrap();
    assert_eq!(path.types()[3], PointType::START);

    path.close_figure();
    assert_eq!(path.types()[6].to_byte(), 0x83);

    // Closing twice keeps the flag set once.
    path.close_figure();
    assert_eq!(path.types()[6].to_byte(), 0x83);
}

#[test]
fn close_all_figures() {
    let mut path = Path::new(FillMode::Alternate);
    path.close_all_figures();
    assert!(path.is_empty());
    assert!(path.starts_new_figure());

    path.add_lines(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)])
        .unwrap();
    path.start_figure();
    path.add_lines(&[point(5.0, 5.0), point(6.0, 5.0)]).unwrap();
    path.start_figure();
    path.add_arc_with(&FakeArcs(4), &any_arc(0.0)).unwrap();

    path.close_all_figures();

    // Figures start at 0, 3 and 5.
    assert_eq!(
        bytes(&path),
        vec![0x00, 0x01, 0x81, 0x00, 0x81, 0x00, 0x03, 0x03, 0x03]
    );
    assert!(path.starts_new_figure());

    path.add_lines(&[point(0.0, 0.0)]).unwrap();
    assert_eq!(path.types()[9], PointType::START);
}

#[test]
fn reset_keeps_capacity() {
    let mut path = Path::new(FillMode::Winding);
    path.add_lines(&[point(0.0, 0.0), point(1.0, 0.0)]).unwrap();
    path.reset();

    assert!(path.is_empty());
    assert!(path.starts_new_figure());
    assert_eq!(path.capacity(), 4);
    assert_eq!(path.fill_mode(), FillMode::Winding);

    path.add_lines(&[point(1.0, 1.0)]).unwrap();
    assert_eq!(path.types()[0], PointType::START);
}

#[test]
fn grow_one_point_at_a_time() {
    let mut path = Path::new(FillMode::Alternate);
    for i in 0..1000 {
        path.add_lines(&[point(i as f32, -(i as f32))]).unwrap();
        assert!(path.capacity() >= path.len());
    }

    assert_eq!(path.len(), 1000);
    assert_eq!(path.capacity(), 1024);

    let mut output = vec![point(0.0, 0.0); 1000];
    assert_eq!(path.copy_points_to(&mut output), Ok(1000));
    for (i, p) in output.iter().enumerate() {
        assert_eq!(*p, point(i as f32, -(i as f32)));
    }

    assert_eq!(path.figures().count(), 1);
}

#[test]
fn copy_to_small_buffers() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_lines(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)])
        .unwrap();

    let mut points = [point(-1.0, -1.0); 2];
    assert_eq!(
        path.copy_points_to(&mut points),
        Err(PathError::InsufficientBuffer {
            required: 3,
            provided: 2
        })
    );
    assert_eq!(points, [point(-1.0, -1.0); 2]);

    let mut types = [0xffu8; 2];
    assert_eq!(
        path.copy_types_to(&mut types),
        Err(PathError::InsufficientBuffer {
            required: 3,
            provided: 2
        })
    );
    assert_eq!(types, [0xff; 2]);

    // Larger buffers are fine, the tail is left untouched.
    let mut types = [0xffu8; 5];
    assert_eq!(path.copy_types_to(&mut types), Ok(3));
    assert_eq!(types, [0x00, 0x01, 0x01, 0xff, 0xff]);

    let empty = Path::new(FillMode::Alternate);
    assert_eq!(empty.copy_points_to(&mut []), Ok(0));
}

#[test]
fn transform() {
    let mut path = Path::new(FillMode::Alternate);
    path.transform(&Transform::translation(1.0, 1.0));
    assert!(path.is_empty());
    assert_eq!(path.capacity(), 0);

    path.add_lines(&[point(0.0, 0.0), point(1.0, 2.0)]).unwrap();
    path.close_figure();
    let types_before = bytes(&path);

    path.transform(&Transform::new(2.0, 0.0, 0.0, 3.0, 10.0, 20.0));
    assert_eq!(path.points(), &[point(10.0, 20.0), point(12.0, 26.0)]);
    assert_eq!(bytes(&path), types_before);

    let path = path.transformed(&Transform::translation(-10.0, -20.0));
    assert_eq!(path.points(), &[point(0.0, 0.0), point(2.0, 6.0)]);
}

#[test]
fn transform_with_custom_transformer() {
    struct Negate;
    impl TransformPoints for Negate {
        fn transform_points(&self, _: &Transform, points: &mut [Point]) {
            for p in points {
                *p = point(-p.x, -p.y);
            }
        }
    }

    let mut path = Path::new(FillMode::Alternate);
    path.add_lines(&[point(1.0, 2.0), point(3.0, 4.0)]).unwrap();
    path.transform_with(&Negate, &Transform::identity());

    assert_eq!(path.points(), &[point(-1.0, -2.0), point(-3.0, -4.0)]);
}

#[test]
fn from_raw() {
    let mut path = Path::new(FillMode::Winding);
    path.add_lines(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)])
        .unwrap();
    path.close_figure();
    path.add_arc_with(&FakeArcs(4), &any_arc(0.0)).unwrap();

    let mut types = vec![0; path.len()];
    path.copy_types_to(&mut types).unwrap();

    let copy = Path::from_raw(FillMode::Winding, path.points(), &types).unwrap();
    assert_eq!(copy.points(), path.points());
    assert_eq!(copy.types(), path.types());
    assert!(copy.starts_new_figure());
    assert_eq!(copy.capacity(), 2 * path.len());

    assert_eq!(
        Path::from_raw(FillMode::Winding, path.points(), &types[1..]).err(),
        Some(PathError::InvalidArgument)
    );
    assert_eq!(
        Path::from_raw(FillMode::Winding, &[point(0.0, 0.0)], &[0x02]).err(),
        Some(PathError::InvalidArgument)
    );
    assert_eq!(
        Path::from_raw(FillMode::Winding, &[point(0.0, 0.0)], &[0x01]).err(),
        Some(PathError::InvalidArgument)
    );
    assert!(Path::from_raw(FillMode::Winding, &[], &[]).unwrap().is_empty());
}

#[test]
fn debug_format() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_lines(&[point(0.0, 0.0), point(1.0, 0.0)]).unwrap();
    path.add_beziers(&[point(1.0, 0.0), point(2.0, 1.0), point(2.0, 2.0), point(1.0, 3.0)])
        .unwrap();
    path.close_figure();

    assert_eq!(
        format!("{:?}", path),
        "\" M 0.0 0.0 L 1.0 0.0 L 1.0 0.0 C 2.0 1.0 2.0 2.0 1.0 3.0 Z\""
    );
}

#[test]
fn from_raw_rejects_late_bad_tags() {
    let points = [point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0)];

    for types in [[0x00, 0x01, 0x48, 0x01], [0x00, 0x01, 0x01, 0x02]] {
        assert_eq!(
            Path::from_raw(FillMode::Alternate, &points, &types).err(),
            Some(PathError::InvalidArgument)
        );
    }

    // Flags on the first tag are fine as long as it starts a figure.
    let path = Path::from_raw(FillMode::Alternate, &points, &[0x20, 0x01, 0x03, 0x83]).unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path.capacity(), 8);
    assert!(path.types()[0].is_start());
    assert!(path.types()[0].flags().contains(PointFlags::MARKER));
    assert_eq!(bytes(&path), vec![0x20, 0x01, 0x03, 0x83]);
    assert_eq!(path.figures().count(), 1);
}

#[test]
fn arc_from_a_full_turn_back() {
    let mut path = Path::new(FillMode::Alternate);
    path.add_arc(&ArcParams::new(rect(0.0, 0.0, 10.0, 10.0), -360.0, 90.0))
        .unwrap();

    assert_eq!(path.len(), 4);
    assert!(path.points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));

    let bounds = path.world_bounds(None, None);
    assert!((bounds.origin.x - 5.0).abs() < 1e-4);
    assert!((bounds.origin.y - 5.0).abs() < 1e-4);
    assert!((bounds.size.width - 5.0).abs() < 1e-4);
    assert!((bounds.size.height - 5.0).abs() < 1e-4);
}
