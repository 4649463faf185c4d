//! Feature-gated logging macros.
//!
//! With the `logging` feature these forward to the `log` crate; without it
//! they expand to nothing and the arguments are never evaluated.

#![allow(unused_macros)]

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::debug!(target: "stackarena", $($arg)+);
    };
}

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::trace!(target: "stackarena", $($arg)+);
    };
}
