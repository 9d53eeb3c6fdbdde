//! Internal logging macros
//!
//! Forward to `tracing` when the `tracing` feature is enabled and expand to
//! nothing otherwise, keeping the `no_std` build free of a logging backend.

macro_rules! hlc_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

macro_rules! hlc_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

macro_rules! hlc_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
    };
}

pub(crate) use {hlc_debug, hlc_trace, hlc_warn};
