#![deny(bare_trait_objects)]
#![no_std]

//! Growable vector paths.
//!
//! # Crates
//!
//! This meta-crate (`figpath`) reexports the following sub-crates for convenience:
//!
//! * **figpath_path** - The path container: building figures out of lines,
//!   arcs and bézier curves, point tags, figure iteration and world bounds.
//! * **figpath_geom** - Euclid type aliases, elliptic arc approximation and
//!   point transformation.
//!
//! Each `figpath_<name>` crate is reexported as a `<name>` module in `figpath`.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled with the `serialization` feature
//! flag (disabled by default). The `std` feature is enabled by default;
//! without it every crate builds with `no_std` and `alloc`.
//!
//! # Examples
//!
//! ```
//! use figpath::math::{point, rect, Transform};
//! use figpath::geom::ArcParams;
//! use figpath::{FillMode, Path, Pen};
//!
//! let mut path = Path::new(FillMode::Winding);
//! path.add_line(point(0.0, 0.0), point(10.0, 0.0)).unwrap();
//! path.add_arc(&ArcParams::new(rect(0.0, -10.0, 20.0, 20.0), 180.0, -90.0)).unwrap();
//! path.close_figure();
//!
//! assert_eq!(path.figures().count(), 1);
//! assert!(path.types().last().unwrap().closes_subpath());
//!
//! let scale = Transform::scale(2.0, 2.0);
//! let pen = Pen::DEFAULT.with_width(2.0).with_miter_limit(1.0);
//! let bounds = path.world_bounds(Some(&scale), Some(&pen));
//! assert!(bounds.size.width > 20.0);
//! ```

pub extern crate figpath_geom;
pub extern crate figpath_path;

pub use figpath_geom as geom;
pub use figpath_path as path;

pub use figpath_path::math;

#[doc(inline)]
pub use figpath_path::{
    FillMode, Figure, Figures, LineCap, Path, PathError, PathResult, Pen, PointFlags, PointRole,
    PointType,
};
