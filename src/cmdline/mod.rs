use std::collections::BTreeMap;

#[cfg(feature = "clap")]
pub mod args;

/// Read access to parsed command line flags, queried by flag name without
/// the leading dashes.
pub trait CommandLineSource: Sync {
    fn isset(&self, flag: &str) -> bool;

    /// First value given for `flag`, or the empty string when it is unset.
    fn get_value(&self, flag: &str) -> String {
        self.get_values(flag).into_iter().next().unwrap_or_default()
    }

    /// Every value given for a repeatable flag, in command line order.
    fn get_values(&self, flag: &str) -> Vec<String>;
}

/// An in-memory command line, for callers that parse arguments themselves
/// or build flags programmatically. Argument vectors are parsed with
/// [crate::cmdline::args::CegisArgs] when the `clap` feature is enabled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandLine {
    flags: BTreeMap<String, Vec<String>>,
}

impl CommandLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `flag`. Repeated calls append.
    pub fn set(&mut self, flag: &str, value: &str) -> &mut Self {
        self.flags
            .entry(flag.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    pub fn unset(&mut self, flag: &str) -> &mut Self {
        self.flags.remove(flag);
        self
    }
}

impl CommandLineSource for CommandLine {
    fn isset(&self, flag: &str) -> bool {
        self.flags.contains_key(flag)
    }

    fn get_values(&self, flag: &str) -> Vec<String> {
        self.flags.get(flag).cloned().unwrap_or_default()
    }
}
