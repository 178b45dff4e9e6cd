//! Utility macros shared across the crate.

/// Returns early with `$error` when `$predicate` does not hold.
///
/// ```ignore
/// ensure!(key_store.is_file(), ConfigError::key_store_not_found(&key_store));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
