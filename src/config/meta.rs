use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::Level;

/// Verbosity of the `cegis` binary, from most to least chatty.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CegisLogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<CegisLogLevel> for Level {
    fn from(value: CegisLogLevel) -> Self {
        match value {
            CegisLogLevel::Trace => Level::TRACE,
            CegisLogLevel::Debug => Level::DEBUG,
            CegisLogLevel::Info => Level::INFO,
            CegisLogLevel::Warn => Level::WARN,
            CegisLogLevel::Error => Level::ERROR,
        }
    }
}

impl Display for CegisLogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CegisLogLevel::Trace => "trace",
            CegisLogLevel::Debug => "debug",
            CegisLogLevel::Info => "info",
            CegisLogLevel::Warn => "warn",
            CegisLogLevel::Error => "error",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_info() {
        assert_eq!(Level::from(CegisLogLevel::default()), Level::INFO);
    }

    #[test]
    fn variants_are_ordered_by_severity() {
        assert!(CegisLogLevel::Trace < CegisLogLevel::Debug);
        assert!(CegisLogLevel::Info < CegisLogLevel::Warn);
        assert!(CegisLogLevel::Warn < CegisLogLevel::Error);
    }

    #[test]
    fn display_matches_filter_directive_names() {
        for level in [
            CegisLogLevel::Trace,
            CegisLogLevel::Debug,
            CegisLogLevel::Info,
            CegisLogLevel::Warn,
            CegisLogLevel::Error,
        ] {
            let parsed: Level = level.to_string().parse().unwrap();
            assert_eq!(parsed, Level::from(level));
        }
    }
}
