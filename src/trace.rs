//! Logging shim over the optional `tracing` dependency.
//!
//! With the `tracing` feature disabled these macros expand to nothing, so
//! the build path carries no logging cost.

macro_rules! debug_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    }};
}

macro_rules! trace_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    }};
}

pub(crate) use debug_event;
pub(crate) use trace_event;
