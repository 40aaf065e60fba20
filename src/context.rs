//! Allocation policy shared by the multiply/pow/mod_exp entry points.
//!
//! Every mutating primitive in [`crate::magnitude`] grows its backing
//! `Vec<Limb>` through `try_reserve`, so out-of-memory is always an ordinary
//! `Result` on stable Rust rather than a callback the caller must thread
//! through by hand. [`Context`] exists for the one piece of configuration
//! that genuinely varies by caller: the Karatsuba cutoff. A [`LimbAllocator`]
//! trait is also provided for embedders that want limb storage routed
//! through a custom arena instead of the global allocator; ordinary callers
//! never need it.

use std::alloc::{GlobalAlloc, Layout, System};
use std::ptr::NonNull;

/// Minimum limb count at which [`Context`] will ever dispatch to Karatsuba.
pub const MIN_KARATSUBA_THRESHOLD: usize = 2;

/// Default Karatsuba cutoff, chosen empirically: below this many limbs
/// schoolbook multiplication's lower constant factor wins.
pub const DEFAULT_KARATSUBA_THRESHOLD: usize = 32;

/// Pluggable low-level allocator for limb storage.
///
/// Mirrors the allocate/grow/deallocate shape every custom-arena allocator
/// in the ecosystem exposes. `BigMagnitude` does not use this by default
/// (it stores limbs in a plain `Vec`); it is here purely as an extension
/// point for embedders, documented in `DESIGN.md`.
pub trait LimbAllocator {
    /// Allocate a zeroed buffer of `size_bytes`, or `None` on failure.
    fn allocate(&self, size_bytes: usize) -> Option<NonNull<u8>>;
    /// Grow/shrink a previously allocated buffer, or `None` on failure.
    /// On failure the original buffer is left untouched.
    fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_size_bytes: usize,
        new_size_bytes: usize,
    ) -> Option<NonNull<u8>>;
    /// Release a buffer previously returned by `allocate`/`reallocate`.
    fn deallocate(&self, ptr: NonNull<u8>, size_bytes: usize);
}

/// Default [`LimbAllocator`] backed by the process global allocator.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalLimbAllocator;

impl LimbAllocator for GlobalLimbAllocator {
    fn allocate(&self, size_bytes: usize) -> Option<NonNull<u8>> {
        if size_bytes == 0 {
            return NonNull::new(std::ptr::null_mut::<u8>().wrapping_add(1));
        }
        let layout = Layout::array::<u8>(size_bytes).ok()?;
        // SAFETY: layout has non-zero size, checked above.
        let raw = unsafe { System.alloc_zeroed(layout) };
        NonNull::new(raw)
    }

    fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_size_bytes: usize,
        new_size_bytes: usize,
    ) -> Option<NonNull<u8>> {
        if old_size_bytes == 0 {
            return self.allocate(new_size_bytes);
        }
        let old_layout = Layout::array::<u8>(old_size_bytes).ok()?;
        // SAFETY: `ptr` was returned by a prior call to `allocate`/`reallocate`
        // with `old_layout`, and `new_size_bytes` is non-zero whenever this
        // branch is reached by `Context`-mediated callers.
        let raw = unsafe { System.realloc(ptr.as_ptr(), old_layout, new_size_bytes) };
        NonNull::new(raw)
    }

    fn deallocate(&self, ptr: NonNull<u8>, size_bytes: usize) {
        if size_bytes == 0 {
            return;
        }
        if let Ok(layout) = Layout::array::<u8>(size_bytes) {
            // SAFETY: `ptr`/`size_bytes` match a prior `allocate`/`reallocate`.
            unsafe { System.dealloc(ptr.as_ptr(), layout) };
        }
    }
}

/// Per-call configuration for operations that need it (currently just
/// multiplication's schoolbook/Karatsuba crossover).
#[derive(Clone, Copy, Debug)]
pub struct Context {
    karatsuba_threshold: usize,
}

impl Context {
    /// Build a context with an explicit Karatsuba threshold, clamped to the
    /// allowed minimum of [`MIN_KARATSUBA_THRESHOLD`].
    pub fn with_karatsuba_threshold(threshold: usize) -> Self {
        Context {
            karatsuba_threshold: threshold.max(MIN_KARATSUBA_THRESHOLD),
        }
    }

    /// The configured Karatsuba threshold.
    pub fn karatsuba_threshold(&self) -> usize {
        self.karatsuba_threshold
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::with_karatsuba_threshold(DEFAULT_KARATSUBA_THRESHOLD)
    }
}
