use std::fmt::{Display, Formatter};

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// The precedence tier that supplied a resolved value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionOrigin {
    CommandLine,
    Options,
    Default,
}

impl OptionOrigin {
    pub(crate) fn colored(&self) -> ColoredString {
        match self {
            OptionOrigin::CommandLine => self.to_string().green(),
            OptionOrigin::Options => self.to_string().cyan(),
            OptionOrigin::Default => self.to_string().dimmed(),
        }
    }
}

impl Display for OptionOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionOrigin::CommandLine => write!(f, "command line"),
            OptionOrigin::Options => write!(f, "options"),
            OptionOrigin::Default => write!(f, "default"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub origin: OptionOrigin,
}

impl<T> Resolved<T> {
    pub fn new(value: T, origin: OptionOrigin) -> Self {
        Self { value, origin }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
