//! Logging macros that capture the calling function.
//!
//! Every macro takes an optional leading `logger: <expr>,` naming the
//! [`Logger`](crate::Logger) (or any `log::Log`) to write to. Without it
//! the record goes to the process-wide `log` logger.
//!
//! ```
//! let logger = lincoln_logs::Logger::default();
//! lincoln_logs::info!(logger: logger, "listening on {}", 8080);
//! ```

/// Name of the enclosing function, as a `&'static str`
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        $crate::record::enclosing_function($crate::__private::type_name_of(__here))
    }};
}

/// Emit a record at an explicit [`Verbosity`](crate::Verbosity)
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::__emit!(&$logger, $level, $($arg)+)
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::__emit!($crate::__private::log::logger(), $level, $($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::record::emit(
            $logger,
            $level,
            &$crate::record::CallSite {
                module_path: ::core::module_path!(),
                file: ::core::file!(),
                function: $crate::function_name!(),
                line: ::core::line!(),
            },
            ::core::format_args!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Verbosity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Verbosity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Verbosity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Verbosity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Verbosity::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Verbosity::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Verbosity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Verbosity::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! critical {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Verbosity::Critical, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Verbosity::Critical, $($arg)+)
    };
}
