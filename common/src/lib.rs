//! Shared pieces of the `xmlcodec` workspace: the per-invocation [`config`],
//! the [`error`] type every codec operation returns, and the logging macros
//! the other crates log through.

pub mod config;
pub mod error;

#[doc(hidden)]
pub use tracing as __tracing;

/// Emits an informational event.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

/// Emits an informational event tagged as a successful outcome.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(status = "success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}
