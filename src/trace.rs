//! Diagnostic events, compiled in only with the `tracing` feature.

/// Emits a `tracing` event at the given level when the `tracing` feature is
/// enabled, and expands to nothing otherwise.
macro_rules! trace_event {
    ($level:ident, $($argument:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($argument)+);
        }
    };
}

pub(crate) use trace_event;
