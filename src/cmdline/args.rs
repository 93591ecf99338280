use std::ffi::OsString;

use clap::{Args, Parser};

use crate::cmdline::CommandLineSource;
use crate::config::{
    ENTRY_FUNCTION_KEY, MAX_PROG_SIZE_KEY, RANKING_FUNCTION_KEY, ROOT_FUNCTION_KEY,
    SKOLEM_FUNCTION_KEY, TARGET_FUNCTIONS_KEY,
};
use crate::error::CegisError;

/// The CEGIS flags, meant to be flattened into a host tool's parser with
/// `#[command(flatten)]`.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct CegisArgs {
    /// Entry function to analyze
    #[arg(long = "function", value_name = "NAME")]
    pub function: Option<String>,

    /// Root function marking the synthesis region
    #[arg(long = "cegis-root", value_name = "NAME")]
    pub root: Option<String>,

    /// Function to synthesize; may be repeated
    #[arg(long = "cegis-targets", value_name = "NAME")]
    pub targets: Vec<String>,

    /// Skolem function of the synthesis specification
    #[arg(long = "cegis-skolem", value_name = "NAME")]
    pub skolem: Option<String>,

    /// Ranking function of the synthesis specification
    #[arg(long = "cegis-ranking", value_name = "NAME")]
    pub ranking: Option<String>,

    /// Upper bound on the size of synthesized programs
    // Kept as text: numeric validation happens during resolution.
    #[arg(long = "cegis-max-prog-size", value_name = "UINT")]
    pub max_prog_size: Option<String>,
}

#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct CegisFlags {
    #[command(flatten)]
    cegis: CegisArgs,
}

impl CegisArgs {
    /// Parses a bare list of CEGIS flags, without a leading program name.
    pub fn try_parse_flags<I, T>(args: I) -> Result<Self, CegisError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        CegisFlags::try_parse_from(args)
            .map(|f| f.cegis)
            .map_err(|e| CegisError::CommandLine(e.to_string()))
    }

    fn single(&self, flag: &str) -> Option<&String> {
        match flag {
            ENTRY_FUNCTION_KEY => self.function.as_ref(),
            ROOT_FUNCTION_KEY => self.root.as_ref(),
            SKOLEM_FUNCTION_KEY => self.skolem.as_ref(),
            RANKING_FUNCTION_KEY => self.ranking.as_ref(),
            MAX_PROG_SIZE_KEY => self.max_prog_size.as_ref(),
            _ => None,
        }
    }
}

impl CommandLineSource for CegisArgs {
    fn isset(&self, flag: &str) -> bool {
        match flag {
            TARGET_FUNCTIONS_KEY => !self.targets.is_empty(),
            _ => self.single(flag).is_some(),
        }
    }

    fn get_values(&self, flag: &str) -> Vec<String> {
        match flag {
            TARGET_FUNCTIONS_KEY => self.targets.clone(),
            _ => self.single(flag).cloned().into_iter().collect(),
        }
    }
}
