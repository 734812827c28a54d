//! Logging shims.
//!
//! Forward to the `log` facade when the `logging` feature is enabled. With the
//! feature off the arguments are still type-checked but nothing is emitted.

macro_rules! search_debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        ::log::debug!(target: "chess_search", $($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)+);
    }};
}

macro_rules! search_warn {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        ::log::warn!(target: "chess_search", $($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)+);
    }};
}
