//! # Obstacle Registry
//!
//! Fixed-capacity storage for the world's obstacle set. All memory is
//! pre-allocated at construction; inserts past the cap are dropped and
//! reported through the returned count, never an error and never a
//! reallocation.

use bytemuck::{Pod, Zeroable};
use mirage_shared::constants::{FLOATS_PER_OBSTACLE, MAX_OBSTACLES};

/// One registered obstacle.
///
/// Positions wrap modulo the map dimensions. Radius and height are not
/// validated: zero or negative values are legal and simply produce
/// degenerate geometry downstream (a zero-radius obstacle never collides,
/// a negative height always flies over).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Obstacle {
    /// World-plane X position.
    pub x: f32,
    /// World-plane Y position.
    pub y: f32,
    /// Collision radius.
    pub radius: f32,
    /// Height above the ground plane.
    pub height: f32,
    /// Host-assigned identifier, echoed back in visibility records.
    pub id: i32,
    /// Small host-defined tag, echoed back in visibility records.
    pub kind: i32,
}

/// The registry: a pre-allocated slab of [`MAX_OBSTACLES`] records plus a
/// length.
///
/// # Thread Safety
///
/// Not internally synchronized. One writer at a time, and no reader
/// (visibility scan, collision) while a mutation is in progress - the
/// expected calling pattern is a single host thread per frame.
pub struct ObstacleField {
    /// Pre-allocated storage.
    storage: Box<[Obstacle]>,
    /// Number of live records at the front of `storage`.
    len: usize,
}

impl ObstacleField {
    /// Creates an empty field with all storage pre-allocated.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: vec![Obstacle::zeroed(); MAX_OBSTACLES].into_boxed_slice(),
            len: 0,
        }
    }

    /// Clears the field. Idempotent; keeps the allocation.
    pub fn reset(&mut self) {
        self.storage.fill(Obstacle::zeroed());
        self.len = 0;
    }

    /// Appends obstacles from flat 6-float tuples
    /// `(x, y, radius, height, id, kind)` in input order.
    ///
    /// Stops at capacity and returns the number actually inserted, so the
    /// host can detect truncation. An incomplete trailing tuple is ignored.
    #[allow(clippy::cast_possible_truncation)]
    pub fn insert_batch(&mut self, data: &[f32]) -> usize {
        let mut added = 0;
        for tuple in data.chunks_exact(FLOATS_PER_OBSTACLE) {
            if self.len >= self.storage.len() {
                break;
            }
            self.storage[self.len] = Obstacle {
                x: tuple[0],
                y: tuple[1],
                radius: tuple[2],
                height: tuple[3],
                id: tuple[4] as i32,
                kind: tuple[5] as i32,
            };
            self.len += 1;
            added += 1;
        }
        added
    }

    /// Number of registered obstacles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no obstacles are registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// The live records, in insertion order.
    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.storage[..self.len]
    }
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}
