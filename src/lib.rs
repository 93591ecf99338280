//! Resolution of the settings that drive counterexample-guided inductive
//! synthesis (CEGIS).
//!
//! Settings come from two places owned by the host tool: the parsed command
//! line ([cmdline::CommandLineSource]) and a generic options table
//! ([options::OptionsTable]). [config::CegisOptions] borrows both and answers
//! typed queries, preferring the command line, then the options table, then
//! a built-in default.

pub mod cmdline;
pub mod config;
pub mod error;
pub mod options;

pub use crate::cmdline::{CommandLine, CommandLineSource};
pub use crate::config::CegisOptions;
pub use crate::error::CegisError;
pub use crate::options::{OptionValue, OptionsTable};
