//! Path resolution utilities for CLI commands

use std::env;
use std::path::PathBuf;

/// Directory that config discovery and relative data paths start from.
///
/// Falls back to "." if the current directory cannot be determined.
pub fn working_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_dir_matches_current_dir() {
        let result = working_dir();
        if let Ok(current) = env::current_dir() {
            assert_eq!(result, current);
        } else {
            assert_eq!(result, PathBuf::from("."));
        }
    }
}
