//! Lock-step storage for the points and tags of a path.

use crate::error::{PathError, PathResult};
use crate::math::Point;
use crate::point_type::PointType;

use alloc::vec::Vec;

/// The backing storage of a [`Path`](crate::Path).
///
/// Points and their tags live in two parallel vectors that always have the
/// same length. Both share a single logical capacity which only ever grows
/// through [`reserve`](PathStorage::reserve), and which both vectors are
/// guaranteed to have room for.
pub(crate) struct PathStorage {
    points: Vec<Point>,
    types: Vec<PointType>,
    capacity: usize,
}

impl PathStorage {
    #[inline]
    pub fn new() -> Self {
        PathStorage {
            points: Vec::new(),
            types: Vec::new(),
            capacity: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn types(&self) -> &[PointType] {
        &self.types
    }

    #[inline]
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    #[inline]
    pub fn types_mut(&mut self) -> &mut [PointType] {
        &mut self.types
    }

    /// Makes room for `additional` more entries.
    ///
    /// The first allocation holds twice the request. After that the capacity
    /// doubles until the request fits. On failure nothing changes.
    pub fn reserve(&mut self, additional: usize) -> PathResult<()> {
        let count = self.len();

        let new_capacity = if self.capacity == 0 {
            additional
                .max(1)
                .checked_mul(2)
                .ok_or(PathError::OutOfMemory)?
        } else if self.capacity - count < additional {
            let mut capacity = self.capacity;
            while capacity - count < additional {
                capacity = capacity.checked_mul(2).ok_or(PathError::OutOfMemory)?;
            }
            capacity
        } else {
            return Ok(());
        };

        self.reallocate(new_capacity)
    }

    /// Moves both arrays into new allocations of `capacity` entries.
    ///
    /// Both allocations are made before the current ones are released, so a
    /// failure leaves the storage untouched.
    fn reallocate(&mut self, capacity: usize) -> PathResult<()> {
        debug_assert!(capacity >= self.len());

        let mut points = Vec::new();
        let mut types = Vec::new();
        if points.try_reserve_exact(capacity).is_err() || types.try_reserve_exact(capacity).is_err() {
            log::warn!(
                "failed to grow path storage from {} to {} entries",
                self.capacity,
                capacity
            );
            return Err(PathError::OutOfMemory);
        }

        points.extend_from_slice(&self.points);
        types.extend_from_slice(&self.types);

        log::debug!("path storage grown from {} to {} entries", self.capacity, capacity);

        self.points = points;
        self.types = types;
        self.capacity = capacity;

        Ok(())
    }

    /// Appends points sharing the same tag.
    ///
    /// Room must have been reserved.
    pub fn extend(&mut self, points: &[Point], ty: PointType) {
        debug_assert!(self.len() + points.len() <= self.capacity);

        self.points.extend_from_slice(points);
        self.types.extend(core::iter::repeat(ty).take(points.len()));
    }

    /// Appends `count` entries tagged `ty` and returns their points for the
    /// caller to fill.
    ///
    /// Room must have been reserved.
    pub fn grow(&mut self, count: usize, ty: PointType) -> &mut [Point] {
        debug_assert!(self.len() + count <= self.capacity);

        let start = self.len();
        self.points.resize(start + count, Point::zero());
        self.types.resize(start + count, ty);

        &mut self.points[start..]
    }

    /// Drops the entries past `len`, keeping the capacity.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.points.truncate(len);
        self.types.truncate(len);
    }

    /// Drops all entries, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}

impl Clone for PathStorage {
    fn clone(&self) -> Self {
        let mut points = Vec::with_capacity(self.capacity);
        let mut types = Vec::with_capacity(self.capacity);
        points.extend_from_slice(&self.points);
        types.extend_from_slice(&self.types);

        PathStorage {
            points,
            types,
            capacity: self.capacity,
        }
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn first_reservation_doubles_the_request() {
    let mut storage = PathStorage::new();
    assert_eq!(storage.capacity(), 0);

    storage.reserve(3).unwrap();
    assert_eq!(storage.capacity(), 6);
    assert!(storage.is_empty());

    let mut storage = PathStorage::new();
    storage.reserve(0).unwrap();
    assert_eq!(storage.capacity(), 2);
}

#[test]
fn capacity_doubles_until_the_request_fits() {
    let mut storage = PathStorage::new();
    storage.reserve(3).unwrap();
    storage.extend(&[point(0.0, 0.0); 6], PointType::LINE);

    // Enough room, nothing happens.
    let mut storage2 = storage.clone();
    storage2.truncate(2);
    storage2.reserve(4).unwrap();
    assert_eq!(storage2.capacity(), 6);

    storage.reserve(1).unwrap();
    assert_eq!(storage.capacity(), 12);

    storage.extend(&[point(1.0, 1.0); 6], PointType::BEZIER);
    storage.reserve(30).unwrap();
    assert_eq!(storage.capacity(), 48);

    assert_eq!(storage.len(), 12);
    assert_eq!(storage.points().len(), storage.types().len());
    assert_eq!(storage.points()[11], point(1.0, 1.0));
    assert_eq!(storage.types()[0], PointType::LINE);
    assert_eq!(storage.types()[11], PointType::BEZIER);
}

#[test]
fn failed_reservation_leaves_storage_untouched() {
    let mut storage = PathStorage::new();
    assert_eq!(storage.reserve(usize::MAX), Err(PathError::OutOfMemory));
    assert_eq!(storage.reserve(usize::MAX / 4), Err(PathError::OutOfMemory));
    assert_eq!(storage.capacity(), 0);
    assert!(storage.is_empty());

    storage.reserve(2).unwrap();
    storage.extend(&[point(1.0, 2.0), point(3.0, 4.0)], PointType::LINE);
    assert_eq!(storage.reserve(usize::MAX / 4), Err(PathError::OutOfMemory));
    assert_eq!(storage.capacity(), 4);
    assert_eq!(storage.points(), &[point(1.0, 2.0), point(3.0, 4.0)]);
    assert_eq!(storage.types().len(), 2);
}

#[test]
fn grow_and_truncate() {
    let mut storage = PathStorage::new();
    storage.reserve(4).unwrap();
    {
        let slots = storage.grow(4, PointType::BEZIER);
        assert_eq!(slots.len(), 4);
        slots[3] = point(5.0, 5.0);
    }
    assert_eq!(storage.len(), 4);
    assert_eq!(storage.points()[3], point(5.0, 5.0));

    storage.truncate(1);
    assert_eq!(storage.len(), 1);
    assert_eq!(storage.types().len(), 1);
    assert_eq!(storage.capacity(), 8);

    storage.clear();
    assert!(storage.is_empty());
    assert_eq!(storage.capacity(), 8);
}
