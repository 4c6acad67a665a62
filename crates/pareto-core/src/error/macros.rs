//! Error macros for pareto

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::ParetoError::invalid_value($context, $value))
    };
}

/// Macro for creating invalid cost errors
#[macro_export]
macro_rules! bail_cost {
    ($($arg:tt)*) => {
        return Err($crate::error::ParetoError::invalid_cost(format!($($arg)*)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::ParetoError::UsageError($msg.to_string()))
    };
}

/// Macro for mapping database errors
#[macro_export]
macro_rules! map_db_err {
    ($op:expr, $error:expr) => {
        $crate::error::ParetoError::db_operation($op, $error)
    };
}
