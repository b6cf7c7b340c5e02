//! # Shared Kernel Handle
//!
//! The core crates assume one calling thread per frame and carry no locks.
//! Hosts that spread work across threads wrap the kernel in this handle
//! instead: registry mutations and visibility scans take the write lock,
//! collision queries share the read lock. The constraint the frame
//! protocol states in prose becomes one the compiler enforces.

use crate::kernel::FrameKernel;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Cloneable, lock-guarded handle to a [`FrameKernel`].
#[derive(Clone)]
pub struct SharedKernel {
    inner: Arc<RwLock<FrameKernel>>,
}

impl SharedKernel {
    /// Wraps a fresh kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(FrameKernel::new())),
        }
    }

    /// Shared access for pure queries (collision, counts).
    #[must_use]
    pub fn read(&self) -> RwLockReadGuard<'_, FrameKernel> {
        self.inner.read()
    }

    /// Exclusive access for mutations (reset, insert) and visibility scans
    /// (which reuse the kernel's scratch buffer).
    #[must_use]
    pub fn write(&self) -> RwLockWriteGuard<'_, FrameKernel> {
        self.inner.write()
    }
}

impl Default for SharedKernel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readers_share_while_writer_excludes() {
        let shared = SharedKernel::new();
        shared
            .write()
            .insert_batch(&[10.0, 10.0, 2.0, 1.0, 1.0, 0.0], 1);

        // Two simultaneous readers are fine.
        let a = shared.read();
        let b = shared.read();
        assert_eq!(a.count(), 1);
        assert!(b.check_collision(10.0, 10.0, 0.5, 0.0, 11.0, 10.0, 100.0, 100.0));
        drop(a);
        drop(b);

        // A writer can step in once the readers are gone.
        shared.write().reset();
        assert_eq!(shared.read().count(), 0);
    }

    #[test]
    fn test_handles_share_one_registry() {
        let shared = SharedKernel::new();
        let clone = shared.clone();
        shared
            .write()
            .insert_batch(&[1.0, 1.0, 1.0, 1.0, 1.0, 0.0], 1);
        assert_eq!(clone.read().count(), 1);
    }
}
