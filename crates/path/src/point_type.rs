//! Per-point tags.
//!
//! Every point of a [`Path`](crate::Path) carries a [`PointType`]: the
//! structural role of the point and a small set of flags. When exported as a
//! byte the layout is:
//!
//! ```ascii
//!  7   6   5   4   3   2   1   0
//! +---+---+---+---+---+---+---+---+
//! | C | - | M | D | - |   role    |
//! +---+---+---+---+---+---+---+---+
//! ```
//!
//! - role: `0` start of a figure, `1` line, `3` cubic bézier.
//! - `D` (`0x10`): dash mode.
//! - `M` (`0x20`): marker.
//! - `C` (`0x80`): the point closes its figure.

use crate::error::{PathError, PathResult};

use core::convert::TryFrom;
use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// Structural role of a point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PointRole {
    /// First point of a figure.
    Start = 0,
    /// End of a straight segment.
    Line = 1,
    /// Control point or endpoint of a cubic bézier curve.
    Bezier = 3,
}

impl PointRole {
    #[inline]
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(PointRole::Start),
            1 => Some(PointRole::Line),
            3 => Some(PointRole::Bezier),
            _ => None,
        }
    }
}

/// Flags attached to a point, independent of its role.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PointFlags(u8);

impl PointFlags {
    pub const NONE: Self = PointFlags(0);
    pub const DASH_MODE: Self = PointFlags(0x10);
    pub const MARKER: Self = PointFlags(0x20);
    pub const CLOSE_SUBPATH: Self = PointFlags(0x80);

    const ALL_BITS: u8 = 0x10 | 0x20 | 0x80;

    #[inline]
    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL_BITS != 0 {
            return None;
        }

        Some(PointFlags(bits))
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitOr for PointFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, other: Self) -> Self {
        PointFlags(self.0 | other.0)
    }
}

impl BitOrAssign for PointFlags {
    #[inline]
    fn bitor_assign(&mut self, other: Self) {
        self.insert(other);
    }
}

impl fmt::Debug for PointFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }

        let mut sep = "";
        for (flag, name) in [
            (Self::DASH_MODE, "DASH_MODE"),
            (Self::MARKER, "MARKER"),
            (Self::CLOSE_SUBPATH, "CLOSE_SUBPATH"),
        ] {
            if self.contains(flag) {
                write!(f, "{sep}{name}")?;
                sep = " | ";
            }
        }

        Ok(())
    }
}

/// The tag of a point: a role and a set of flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PointType {
    role: PointRole,
    flags: PointFlags,
}

impl PointType {
    pub const START: Self = PointType::new(PointRole::Start);
    pub const LINE: Self = PointType::new(PointRole::Line);
    pub const BEZIER: Self = PointType::new(PointRole::Bezier);

    /// Mask of the role bits in the byte representation.
    pub const ROLE_MASK: u8 = 0x07;

    #[inline]
    pub const fn new(role: PointRole) -> Self {
        PointType {
            role,
            flags: PointFlags::NONE,
        }
    }

    #[inline]
    pub fn role(self) -> PointRole {
        self.role
    }

    #[inline]
    pub fn flags(self) -> PointFlags {
        self.flags
    }

    #[inline]
    pub fn is_start(self) -> bool {
        self.role == PointRole::Start
    }

    #[inline]
    pub fn closes_subpath(self) -> bool {
        self.flags.contains(PointFlags::CLOSE_SUBPATH)
    }

    #[inline]
    pub fn with_flags(mut self, flags: PointFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Replaces the role, keeping the flags.
    #[inline]
    pub fn set_role(&mut self, role: PointRole) {
        self.role = role;
    }

    /// Adds flags, keeping the role and the existing flags.
    #[inline]
    pub fn insert_flags(&mut self, flags: PointFlags) {
        self.flags |= flags;
    }

    #[inline]
    pub fn to_byte(self) -> u8 {
        self.role as u8 | self.flags.bits()
    }

    /// Decodes a tag byte.
    ///
    /// Fails with `InvalidArgument` if the role bits don't name a role or if
    /// a reserved bit is set.
    pub fn from_byte(byte: u8) -> PathResult<Self> {
        let role = PointRole::from_bits(byte & Self::ROLE_MASK).ok_or(PathError::InvalidArgument)?;
        let flags = PointFlags::from_bits(byte & !Self::ROLE_MASK).ok_or(PathError::InvalidArgument)?;

        Ok(PointType { role, flags })
    }
}

impl From<PointType> for u8 {
    #[inline]
    fn from(ty: PointType) -> u8 {
        ty.to_byte()
    }
}

impl TryFrom<u8> for PointType {
    type Error = PathError;
    #[inline]
    fn try_from(byte: u8) -> PathResult<Self> {
        PointType::from_byte(byte)
    }
}

#[test]
fn byte_layout() {
    assert_eq!(PointType::START.to_byte(), 0x00);
    assert_eq!(PointType::LINE.to_byte(), 0x01);
    assert_eq!(PointType::BEZIER.to_byte(), 0x03);
    assert_eq!(
        PointType::LINE
            .with_flags(PointFlags::CLOSE_SUBPATH)
            .to_byte(),
        0x81
    );
    assert_eq!(
        PointType::BEZIER
            .with_flags(PointFlags::MARKER | PointFlags::DASH_MODE)
            .to_byte(),
        0x33
    );
}

#[test]
fn decode() {
    let ty = PointType::from_byte(0x83).unwrap();
    assert_eq!(ty.role(), PointRole::Bezier);
    assert!(ty.closes_subpath());
    assert!(!ty.is_start());

    assert_eq!(PointType::from_byte(0x02), Err(PathError::InvalidArgument));
    assert_eq!(PointType::from_byte(0x07), Err(PathError::InvalidArgument));
    assert_eq!(PointType::from_byte(0x48), Err(PathError::InvalidArgument));
    assert_eq!(PointType::from_byte(0x08), Err(PathError::InvalidArgument));
}

#[test]
fn close_flag_keeps_role() {
    let mut ty = PointType::START;
    ty.insert_flags(PointFlags::CLOSE_SUBPATH);
    assert!(ty.is_start());
    assert!(ty.closes_subpath());

    ty.set_role(PointRole::Line);
    assert!(ty.closes_subpath());
    assert_eq!(ty.to_byte(), 0x81);
}
