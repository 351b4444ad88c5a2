//! Error macros for markrank

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::MarkrankError::UsageError($msg.to_string()))
    };
}

/// Macro for creating invalid number errors
#[macro_export]
macro_rules! bail_invalid_number {
    ($source:expr, $line:expr, $value:expr) => {
        return Err($crate::error::MarkrankError::invalid_number(
            $source, $line, $value,
        ))
    };
}
