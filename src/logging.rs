//! Logging shims over the `log` facade.
//!
//! With the `logging` feature disabled the arguments are still type-checked
//! and borrowed, but nothing is formatted or emitted, and `log` stays out of
//! minimal builds.

macro_rules! log_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            log::trace!($($arg)+);
        }
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)+);
        }
    };
}

macro_rules! log_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($arg)+);
        }
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)+);
        }
    };
}

macro_rules! log_info {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            log::info!($($arg)+);
        }
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)+);
        }
    };
}

macro_rules! log_warn {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            log::warn!($($arg)+);
        }
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)+);
        }
    };
}

pub(crate) use {log_debug, log_info, log_trace, log_warn};
