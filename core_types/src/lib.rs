use std::path::PathBuf;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Literal prefix of a restart directory name, e.g. "restore.000100".
pub const RESTART_DIR_PREFIX: &str = "restore.";
/// Width of the zero-padded iteration field in a restart directory name.
pub const ITERATION_DIGITS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub enum CoreTypeError {
    ConversionError(String),
}

impl std::fmt::Display for CoreTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreTypeError::ConversionError(msg) => write!(f, "Conversion Error: {}", msg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum CleanupStrategy {
    #[strum(serialize = "KEEP_RECENT_N")]
    KeepRecentN,
    // Future strategies: TIME_BASED, SMART_RETENTION
}

impl TryFrom<&str> for CleanupStrategy {
    type Error = CoreTypeError;
    fn try_from(strategy_name: &str) -> Result<Self, Self::Error> {
        parse_strategy(strategy_name)
    }
}

fn parse_strategy(strategy_name: &str) -> Result<CleanupStrategy, CoreTypeError> {
    CleanupStrategy::iter()
        .find(|strategy| strategy.to_string() == strategy_name)
        .ok_or_else(|| {
            let known = CleanupStrategy::iter()
                .map(|strategy| strategy.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            CoreTypeError::ConversionError(format!(
                "Unknown cleanup strategy: {} (known strategies: {})",
                strategy_name, known
            ))
        })
}

/// One on-disk restart checkpoint candidate: the iteration number decoded
/// from the directory name paired with the directory path it came from.
///
/// Ordering is by iteration number, so a sorted `Vec<RestartIteration>`
/// goes from oldest checkpoint to newest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RestartIteration {
    pub iteration: u32,
    pub path: PathBuf,
}

impl RestartIteration {
    /// Decodes the iteration number from a restart directory base name.
    ///
    /// Accepts exactly `restore.` followed by six ASCII decimal digits
    /// (total length 14). Leading zeros are insignificant, so
    /// "restore.000001" decodes to 1. Any other name returns `None`.
    pub fn parse_iteration_number(dir_name: &str) -> Option<u32> {
        if dir_name.len() != RESTART_DIR_PREFIX.len() + ITERATION_DIGITS {
            return None;
        }
        let number_part = dir_name.strip_prefix(RESTART_DIR_PREFIX)?;
        if !number_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Six digits always fit in u32, but don't assume parse can't fail.
        number_part.parse::<u32>().ok()
    }

    /// Builds a `RestartIteration` from a directory path whose final
    /// component is a valid restart directory name.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let iteration = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(Self::parse_iteration_number)?;
        Some(RestartIteration { iteration, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iteration_number_valid() {
        assert_eq!(
            RestartIteration::parse_iteration_number("restore.000001"),
            Some(1)
        );
        assert_eq!(
            RestartIteration::parse_iteration_number("restore.000100"),
            Some(100)
        );
        assert_eq!(
            RestartIteration::parse_iteration_number("restore.999999"),
            Some(999999)
        );
        assert_eq!(
            RestartIteration::parse_iteration_number("restore.000000"),
            Some(0)
        );
    }

    #[test]
    fn test_parse_iteration_number_invalid() {
        let invalid_names = [
            "restore.12345",         // 5 digits
            "restore.1234567",       // 7 digits
            "restore.abc123",        // contains letters
            "restore_invalid",       // wrong format
            "other_directory",       // completely different
            "restore.",              // no digits
            "restore.000100_backup", // extra suffix
            "Restore.000100",        // case matters
            "",
        ];
        for name in invalid_names {
            assert_eq!(
                RestartIteration::parse_iteration_number(name),
                None,
                "expected {:?} to be rejected",
                name
            );
        }
    }

    #[test]
    fn test_from_path() {
        let iteration =
            RestartIteration::from_path(PathBuf::from("/data/restarts/restore.002500")).unwrap();
        assert_eq!(iteration.iteration, 2500);
        assert_eq!(
            iteration.path,
            PathBuf::from("/data/restarts/restore.002500")
        );

        assert_eq!(
            RestartIteration::from_path(PathBuf::from("/data/restarts/not_a_restart")),
            None
        );
    }

    #[test]
    fn test_restart_iteration_ordering() {
        let mut iterations = vec![
            RestartIteration::from_path(PathBuf::from("/r/restore.000300")).unwrap(),
            RestartIteration::from_path(PathBuf::from("/r/restore.000001")).unwrap(),
            RestartIteration::from_path(PathBuf::from("/r/restore.999999")).unwrap(),
        ];
        iterations.sort();
        let sorted: Vec<u32> = iterations.iter().map(|i| i.iteration).collect();
        assert_eq!(sorted, vec![1, 300, 999999]);
    }

    #[test]
    fn test_cleanup_strategy_from_str() {
        assert_eq!(
            CleanupStrategy::try_from("KEEP_RECENT_N").unwrap(),
            CleanupStrategy::KeepRecentN
        );
        assert!(CleanupStrategy::try_from("SMART_RETENTION").is_err());
        assert!(CleanupStrategy::try_from("keep_recent_n").is_err());
        assert!(CleanupStrategy::try_from("").is_err());
    }

    #[test]
    fn test_cleanup_strategy_display_round_trip() {
        for strategy in CleanupStrategy::iter() {
            let name = strategy.to_string();
            assert_eq!(CleanupStrategy::try_from(name.as_str()).unwrap(), strategy);
        }
    }
}
