//! Iteration over the figures of a path.
//!
//! ```
//! use figpath_path::{FillMode, Path};
//! use figpath_path::math::point;
//!
//! let mut path = Path::new(FillMode::Alternate);
//! path.add_lines(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)]).unwrap();
//! path.close_figure();
//! path.add_lines(&[point(5.0, 5.0), point(6.0, 5.0)]).unwrap();
//!
//! for figure in path.figures() {
//!     println!("{} points, closed: {}", figure.points.len(), figure.is_closed());
//! }
//! ```

use crate::math::Point;
use crate::point_type::PointType;

use core::iter::FusedIterator;

/// A run of points from a `Start` point up to the next one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Figure<'l> {
    pub points: &'l [Point],
    pub types: &'l [PointType],
}

impl<'l> Figure<'l> {
    /// Whether the last point of the figure closes it.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.types.last().map_or(false, |ty| ty.closes_subpath())
    }

    #[inline]
    pub fn first_point(&self) -> Point {
        self.points[0]
    }
}

/// Iterator over the figures of a [`Path`](crate::Path).
#[derive(Clone)]
pub struct Figures<'l> {
    points: &'l [Point],
    types: &'l [PointType],
}

impl<'l> Figures<'l> {
    pub(crate) fn new(points: &'l [Point], types: &'l [PointType]) -> Self {
        debug_assert_eq!(points.len(), types.len());
        Figures { points, types }
    }
}

impl<'l> Iterator for Figures<'l> {
    type Item = Figure<'l>;

    fn next(&mut self) -> Option<Figure<'l>> {
        if self.types.is_empty() {
            return None;
        }

        let end = self.types[1..]
            .iter()
            .position(|ty| ty.is_start())
            .map_or(self.types.len(), |idx| idx + 1);

        let (points, rest_points) = self.points.split_at(end);
        let (types, rest_types) = self.types.split_at(end);
        self.points = rest_points;
        self.types = rest_types;

        Some(Figure { points, types })
    }
}

impl<'l> FusedIterator for Figures<'l> {}

#[cfg(test)]
use crate::{math::point, FillMode, Path};

#[test]
fn figures() {
    let mut path = Path::new(FillMode::Alternate);
    assert_eq!(path.figures().next(), None);

    path.add_lines(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)])
        .unwrap();
    path.close_figure();
    path.add_lines(&[point(5.0, 5.0), point(6.0, 5.0)]).unwrap();
    path.start_figure();
    path.add_lines(&[point(9.0, 9.0)]).unwrap();

    let mut figures = path.figures();

    let first = figures.next().unwrap();
    assert_eq!(first.points.len(), 3);
    assert_eq!(first.first_point(), point(0.0, 0.0));
    assert!(first.is_closed());

    let second = figures.next().unwrap();
    assert_eq!(second.points, &[point(5.0, 5.0), point(6.0, 5.0)]);
    assert!(!second.is_closed());

    let third = figures.next().unwrap();
    assert_eq!(third.points, &[point(9.0, 9.0)]);
    assert_eq!(third.types, &[PointType::START]);

    assert_eq!(figures.next(), None);
    assert_eq!(figures.next(), None);
}

#[test]
fn close_all_figures_closes_all_but_the_last() {
    let mut path = Path::new(FillMode::Alternate);
    for i in 0..4 {
        let x = i as f32 * 10.0;
        path.add_lines(&[point(x, 0.0), point(x + 1.0, 0.0), point(x + 1.0, 1.0)])
            .unwrap();
        path.start_figure();
    }
    path.close_all_figures();

    let closed: alloc::vec::Vec<bool> = path.figures().map(|f| f.is_closed()).collect();
    assert_eq!(closed, [true, true, true, false]);
}
