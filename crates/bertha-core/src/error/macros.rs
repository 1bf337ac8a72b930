//! Error macros for bertha

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::BerthaError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a malformed rubric definition
#[macro_export]
macro_rules! bail_definition {
    ($($arg:tt)*) => {
        return Err($crate::error::BerthaError::definition(format!($($arg)*)))
    };
}
