//! Zero-cost cell access macros
//!
//! Field buffers are indexed millions of times per frame by the step kernel
//! and the compositor. Indices are always produced by clamped sampling, so
//! release builds skip the bounds check while debug builds keep it.
//!
//! Usage:
//! ```rust
//! use fluid_backdrop_engine::fast;
//!
//! let mut trail = vec![0.0f32; 4];
//! fast!(trail, [1] = 0.25);
//! assert_eq!(*fast!(trail, [1]), 0.25);
//! ```

/// Indexed slice access that is bounds checked only with `debug_assertions`
///
/// - `fast!(slice, [index])` reads and yields a reference
/// - `fast!(slice, [index] = value)` writes
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            // SAFETY: callers only pass indices derived from clamped grid coordinates
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            // SAFETY: callers only pass indices derived from clamped grid coordinates
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
