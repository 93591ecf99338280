use std::fmt::Debug;

use tracing::{event, Level};

use crate::cmdline::CommandLineSource;
use crate::config::origin::{OptionOrigin, Resolved};
use crate::config::snapshot::ResolvedCegisOptions;
use crate::error::CegisError;
use crate::options::OptionsTable;

pub mod meta;
pub mod origin;
pub mod snapshot;

pub const ENTRY_FUNCTION_KEY: &str = "function";
pub const ROOT_FUNCTION_KEY: &str = "cegis-root";
pub const TARGET_FUNCTIONS_KEY: &str = "cegis-targets";
pub const SKOLEM_FUNCTION_KEY: &str = "cegis-skolem";
pub const RANKING_FUNCTION_KEY: &str = "cegis-ranking";
pub const MAX_PROG_SIZE_KEY: &str = "cegis-max-prog-size";

pub const DEFAULT_ENTRY_FUNCTION: &str = "main";
pub const DEFAULT_ROOT_FUNCTION: &str = "__CPROVER_synthesis_root";
pub const DEFAULT_TARGET_FUNCTION: &str = "__CPROVER_synthesis_learn";
pub const DEFAULT_MAX_PROG_SIZE: usize = 10;

/// Resolves the CEGIS settings from a command line and an options table.
///
/// Every setting is looked up in the command line first, then in the options
/// table, and falls back to a built-in default when neither configures it.
/// An empty string, an empty list or a zero count in the options table
/// counts as "not configured". Nothing is cached: each call reads both
/// sources again, so the sources stay the only place settings live.
#[derive(Clone, Copy)]
pub struct CegisOptions<'a> {
    cmdline: &'a dyn CommandLineSource,
    options: &'a OptionsTable,
}

fn traced<T: Debug>(key: &str, resolved: Resolved<T>) -> Resolved<T> {
    event!(
        Level::TRACE,
        "{} = {:?} ({})",
        key,
        resolved.value,
        resolved.origin
    );
    resolved
}

fn get_option(
    cmdline: &dyn CommandLineSource,
    options: &OptionsTable,
    key: &str,
    default: &str,
) -> Resolved<String> {
    let resolved = if cmdline.isset(key) {
        Resolved::new(cmdline.get_value(key), OptionOrigin::CommandLine)
    } else {
        let value = options.get_option(key);
        if !value.is_empty() {
            Resolved::new(value, OptionOrigin::Options)
        } else {
            Resolved::new(default.to_string(), OptionOrigin::Default)
        }
    };
    traced(key, resolved)
}

impl<'a> CegisOptions<'a> {
    pub fn new(cmdline: &'a dyn CommandLineSource, options: &'a OptionsTable) -> Self {
        Self { cmdline, options }
    }

    pub fn resolve_entry_function_name(&self) -> Resolved<String> {
        get_option(
            self.cmdline,
            self.options,
            ENTRY_FUNCTION_KEY,
            DEFAULT_ENTRY_FUNCTION,
        )
    }

    pub fn entry_function_name(&self) -> String {
        self.resolve_entry_function_name().into_value()
    }

    pub fn resolve_root_function_name(&self) -> Resolved<String> {
        get_option(
            self.cmdline,
            self.options,
            ROOT_FUNCTION_KEY,
            DEFAULT_ROOT_FUNCTION,
        )
    }

    pub fn root_function_name(&self) -> String {
        self.resolve_root_function_name().into_value()
    }

    /// Targets keep the order they were given in and are not deduplicated.
    pub fn resolve_target_function_names(&self) -> Resolved<Vec<String>> {
        let resolved = if self.cmdline.isset(TARGET_FUNCTIONS_KEY) {
            Resolved::new(
                self.cmdline.get_values(TARGET_FUNCTIONS_KEY),
                OptionOrigin::CommandLine,
            )
        } else {
            let value = self.options.get_list_option(TARGET_FUNCTIONS_KEY);
            if !value.is_empty() {
                Resolved::new(value, OptionOrigin::Options)
            } else {
                Resolved::new(
                    vec![DEFAULT_TARGET_FUNCTION.to_string()],
                    OptionOrigin::Default,
                )
            }
        };
        traced(TARGET_FUNCTIONS_KEY, resolved)
    }

    pub fn target_function_names(&self) -> Vec<String> {
        self.resolve_target_function_names().into_value()
    }

    /// An empty name means no Skolem function is configured.
    pub fn resolve_skolem_function_name(&self) -> Resolved<String> {
        get_option(self.cmdline, self.options, SKOLEM_FUNCTION_KEY, "")
    }

    pub fn skolem_function_name(&self) -> String {
        self.resolve_skolem_function_name().into_value()
    }

    pub fn has_skolem_function(&self) -> bool {
        !self.skolem_function_name().is_empty()
    }

    /// An empty name means no ranking function is configured.
    pub fn resolve_ranking_function_name(&self) -> Resolved<String> {
        get_option(self.cmdline, self.options, RANKING_FUNCTION_KEY, "")
    }

    pub fn ranking_function_name(&self) -> String {
        self.resolve_ranking_function_name().into_value()
    }

    pub fn has_ranking_function(&self) -> bool {
        !self.ranking_function_name().is_empty()
    }

    /// A zero in the options table is indistinguishable from an absent
    /// entry and yields the default, while a zero on the command line is
    /// returned as is. A command line value that is not an unsigned integer
    /// is an error.
    pub fn resolve_max_prog_size(&self) -> Result<Resolved<usize>, CegisError> {
        let resolved = if self.cmdline.isset(MAX_PROG_SIZE_KEY) {
            let value = self.cmdline.get_value(MAX_PROG_SIZE_KEY);
            let size = value
                .parse::<usize>()
                .map_err(|source| CegisError::InvalidMaxProgSize { value, source })?;
            Resolved::new(size, OptionOrigin::CommandLine)
        } else {
            match self.options.get_unsigned_int_option(MAX_PROG_SIZE_KEY) {
                0 => Resolved::new(DEFAULT_MAX_PROG_SIZE, OptionOrigin::Default),
                n => Resolved::new(
                    usize::try_from(n).unwrap_or(usize::MAX),
                    OptionOrigin::Options,
                ),
            }
        };
        Ok(traced(MAX_PROG_SIZE_KEY, resolved))
    }

    pub fn max_prog_size(&self) -> Result<usize, CegisError> {
        Ok(self.resolve_max_prog_size()?.into_value())
    }

    /// Number of functions the synthesizer has to produce: every target,
    /// plus the Skolem and ranking functions when configured.
    pub fn total_target_functions(&self) -> usize {
        let mut result = self.target_function_names().len();
        if self.has_skolem_function() {
            result += 1;
        }
        if self.has_ranking_function() {
            result += 1;
        }
        result
    }

    pub fn get_options(&self) -> &'a OptionsTable {
        self.options
    }

    /// Resolves every setting at once. The result is a detached copy; later
    /// changes to the sources are not reflected in it.
    pub fn snapshot(&self) -> Result<ResolvedCegisOptions, CegisError> {
        Ok(ResolvedCegisOptions {
            entry_function: self.resolve_entry_function_name(),
            root_function: self.resolve_root_function_name(),
            target_functions: self.resolve_target_function_names(),
            skolem_function: self.resolve_skolem_function_name(),
            ranking_function: self.resolve_ranking_function_name(),
            max_prog_size: self.resolve_max_prog_size()?,
            total_target_functions: self.total_target_functions(),
        })
    }
}
