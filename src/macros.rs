//! Feature-gated logging macros.
//!
//! With the `tracing` feature enabled these forward to the matching `tracing`
//! macro; without it they expand to nothing, so default builds carry no
//! logging code at all.

macro_rules! graph_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

macro_rules! graph_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}
