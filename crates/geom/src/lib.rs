#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![no_std]

//! Simple 2D geometric collaborators on top of euclid.
//!
//! This crate is reexported in [figpath](../figpath/index.html).
//!
//! # Overview.
//!
//! This crate implements the two pieces of maths the path container
//! delegates to:
//!
//! - converting an elliptic arc, described by the bounding rectangle of its
//!   ellipse and a pair of angles in degrees, into a sequence of cubic
//!   bézier control points (see [`ArcToCurve`] and [`BezierArcs`]),
//! - transforming a slice of points in place with a 2x3 affine matrix
//!   (see [`TransformPoints`] and [`AffineTransform`]).
//!
//! Both are expressed as traits so that callers can plug their own
//! implementation in, or a fake one in tests.
//!
//! # Matrix layout
//!
//! [`Transform`] is euclid's `Transform2D<f32>`, whose fields map directly
//! onto the usual row-vector convention:
//!
//! ```ascii
//! | m11 m12 0 |
//! | m21 m22 0 |
//! | m31 m32 1 |
//! ```
//!
//! `x' = x * m11 + y * m21 + m31` and `y' = x * m12 + y * m22 + m32`.

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod transform;

#[doc(inline)]
pub use crate::arc::{ArcParams, ArcToCurve, BezierArcs, MAX_ARC_POINTS};
#[doc(inline)]
pub use crate::transform::{AffineTransform, TransformPoints};

/// Alias for `euclid::default::Point2D<f32>`.
pub type Point = euclid::default::Point2D<f32>;

/// Alias for `euclid::default::Vector2D<f32>`.
pub type Vector = euclid::default::Vector2D<f32>;

/// Alias for `euclid::default::Size2D<f32>`.
pub type Size = euclid::default::Size2D<f32>;

/// Alias for `euclid::default::Rect<f32>`.
pub type Rect = euclid::default::Rect<f32>;

/// Alias for `euclid::default::Box2D<f32>`.
pub type Box2D = euclid::default::Box2D<f32>;

/// Alias for `euclid::default::Transform2D<f32>`.
pub type Transform = euclid::default::Transform2D<f32>;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Size::new(w, h)`.
#[inline]
pub fn size(w: f32, h: f32) -> Size {
    Size::new(w, h)
}

/// Shorthand for `Rect::new(Point::new(x, y), Size::new(w, h))`.
#[inline]
pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect {
        origin: point(x, y),
        size: size(w, h),
    }
}
