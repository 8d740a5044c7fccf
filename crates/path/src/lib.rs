#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]
#![no_std]

//! A growable path container for vector graphics.
//!
//! A [`Path`] is a flat list of points, each tagged with a [`PointType`]
//! telling whether it starts a figure, ends a line or belongs to a cubic
//! bézier curve, and whether it closes its figure. Paths are built
//! incrementally out of lines, elliptic arcs and bézier curves, and can
//! report a conservative bounding rectangle under a transform and a pen.
//!
//! This crate is reexported in [figpath](../figpath/index.html).
//!
//! # Examples
//!
//! ```
//! use figpath_path::{FillMode, Path};
//! use figpath_path::math::{point, rect};
//! use figpath_path::geom::ArcParams;
//!
//! let mut path = Path::new(FillMode::Alternate);
//! path.add_lines(&[point(0.0, 0.0), point(10.0, 0.0), point(10.0, 5.0)]).unwrap();
//! path.close_figure();
//!
//! // A second figure made of a quarter of an ellipse.
//! path.add_arc(&ArcParams::new(rect(0.0, 0.0, 20.0, 10.0), 0.0, 45.0)).unwrap();
//!
//! assert_eq!(path.len(), 7);
//! assert_eq!(path.figures().count(), 2);
//!
//! let bounds = path.world_bounds(None, None);
//! assert_eq!(bounds.origin, point(0.0, 0.0));
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use figpath_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod bounds;
mod error;
pub mod iterator;
pub mod path;
pub mod point_type;
mod storage;

#[doc(inline)]
pub use crate::bounds::{LineCap, Pen};
pub use crate::error::{PathError, PathResult};
#[doc(inline)]
pub use crate::iterator::{Figure, Figures};
#[doc(inline)]
pub use crate::path::Path;
#[doc(inline)]
pub use crate::point_type::{PointFlags, PointRole, PointType};

pub mod math {
    //! f32 version of the euclid types used everywhere.

    pub use crate::geom::{point, rect, size, vector};
    pub use crate::geom::{Box2D, Point, Rect, Size, Transform, Vector};
}

/// How the interior of a path is determined when it is filled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FillMode {
    /// Even-odd rule.
    #[default]
    Alternate,
    /// Non-zero rule.
    Winding,
}

impl FillMode {
    #[inline]
    pub fn is_in(&self, winding_number: i16) -> bool {
        match *self {
            FillMode::Alternate => winding_number % 2 != 0,
            FillMode::Winding => winding_number != 0,
        }
    }

    #[inline]
    pub fn is_out(&self, winding_number: i16) -> bool {
        !self.is_in(winding_number)
    }
}

#[test]
fn fill_mode_winding_numbers() {
    assert!(FillMode::Alternate.is_in(1));
    assert!(FillMode::Alternate.is_out(2));
    assert!(FillMode::Alternate.is_in(-3));
    assert!(FillMode::Winding.is_in(2));
    assert!(FillMode::Winding.is_in(-1));
    assert!(FillMode::Winding.is_out(0));
    assert_eq!(FillMode::default(), FillMode::Alternate);
}
