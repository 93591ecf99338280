use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::config::origin::{OptionOrigin, Resolved};
use crate::config::{
    ENTRY_FUNCTION_KEY, MAX_PROG_SIZE_KEY, RANKING_FUNCTION_KEY, ROOT_FUNCTION_KEY,
    SKOLEM_FUNCTION_KEY, TARGET_FUNCTIONS_KEY,
};
#[cfg(feature = "toml")]
use crate::error::CegisError;
use crate::options::OptionsTable;

/// Every CEGIS setting as resolved at one point in time, together with the
/// tier each value came from. Produced by
/// [crate::config::CegisOptions::snapshot].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolvedCegisOptions {
    pub entry_function: Resolved<String>,
    pub root_function: Resolved<String>,
    pub target_functions: Resolved<Vec<String>>,
    pub skolem_function: Resolved<String>,
    pub ranking_function: Resolved<String>,
    pub max_prog_size: Resolved<usize>,
    pub total_target_functions: usize,
}

impl ResolvedCegisOptions {
    /// The resolved values as an options table.
    ///
    /// Values the options table reads as "not configured" are left out: an
    /// empty function name and a zero program size. An unset Skolem or
    /// ranking function reads back the same way, but an empty entry or root
    /// function and a zero size only come from the command line and would
    /// read back as the defaults.
    pub fn to_options_table(&self) -> OptionsTable {
        let mut table = OptionsTable::new();
        for (key, r) in [
            (ENTRY_FUNCTION_KEY, &self.entry_function),
            (ROOT_FUNCTION_KEY, &self.root_function),
            (SKOLEM_FUNCTION_KEY, &self.skolem_function),
            (RANKING_FUNCTION_KEY, &self.ranking_function),
        ] {
            if !r.value.is_empty() {
                table.set_option(key, r.value.as_str());
            }
        }
        table.set_option(TARGET_FUNCTIONS_KEY, self.target_functions.value.clone());
        if self.max_prog_size.value != 0 {
            table.set_option(MAX_PROG_SIZE_KEY, self.max_prog_size.value as u64);
        }
        table
    }

    /// Settings whose value has no options file form, as `(key, value)`.
    pub fn unrepresentable(&self) -> Vec<(&'static str, String)> {
        let mut keys = vec![];
        for (key, r) in [
            (ENTRY_FUNCTION_KEY, &self.entry_function),
            (ROOT_FUNCTION_KEY, &self.root_function),
        ] {
            if r.value.is_empty() {
                keys.push((key, String::new()));
            }
        }
        if self.max_prog_size.value == 0 {
            keys.push((MAX_PROG_SIZE_KEY, "0".to_string()));
        }
        keys
    }

    /// Renders the settings as an options file. Fails when a setting would
    /// change meaning on reading the file back, see [Self::to_options_table].
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, CegisError> {
        if let Some((key, value)) = self.unrepresentable().into_iter().next() {
            return Err(CegisError::NotRepresentable {
                key: key.to_string(),
                value,
            });
        }
        self.to_options_table().to_toml_string()
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "-"
    } else {
        name
    }
}

fn write_line(
    f: &mut Formatter<'_>,
    key: &str,
    value: &str,
    origin: OptionOrigin,
) -> std::fmt::Result {
    writeln!(f, "{key:<20} {value:<32} [{}]", origin.colored())
}

impl Display for ResolvedCegisOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (key, r) in [
            (ENTRY_FUNCTION_KEY, &self.entry_function),
            (ROOT_FUNCTION_KEY, &self.root_function),
        ] {
            write_line(f, key, display_name(&r.value), r.origin)?;
        }
        write_line(
            f,
            TARGET_FUNCTIONS_KEY,
            &self.target_functions.value.join(", "),
            self.target_functions.origin,
        )?;
        for (key, r) in [
            (SKOLEM_FUNCTION_KEY, &self.skolem_function),
            (RANKING_FUNCTION_KEY, &self.ranking_function),
        ] {
            write_line(f, key, display_name(&r.value), r.origin)?;
        }
        write_line(
            f,
            MAX_PROG_SIZE_KEY,
            &self.max_prog_size.value.to_string(),
            self.max_prog_size.origin,
        )?;
        write!(f, "{:<20} {}", "total targets", self.total_target_functions)
    }
}

#[cfg(test)]
mod tests {
    use crate::cmdline::CommandLine;
    use crate::config::origin::OptionOrigin;
    use crate::config::CegisOptions;
    use crate::options::OptionsTable;

    fn cmdline(flags: &[(&str, &str)]) -> CommandLine {
        let mut cmdline = CommandLine::new();
        for (flag, value) in flags {
            cmdline.set(flag, value);
        }
        cmdline
    }

    #[test]
    fn snapshot_matches_individual_accessors() {
        let cmdline = cmdline(&[("cegis-targets", "t1"), ("cegis-ranking", "rk")]);
        let mut options = OptionsTable::new();
        options.set_option("cegis-max-prog-size", 4u64);
        let cegis = CegisOptions::new(&cmdline, &options);
        let snapshot = cegis.snapshot().unwrap();

        assert_eq!(snapshot.entry_function.value, cegis.entry_function_name());
        assert_eq!(snapshot.target_functions.value, cegis.target_function_names());
        assert_eq!(snapshot.target_functions.origin, OptionOrigin::CommandLine);
        assert_eq!(snapshot.ranking_function.value, "rk");
        assert_eq!(snapshot.max_prog_size.value, 4);
        assert_eq!(snapshot.max_prog_size.origin, OptionOrigin::Options);
        assert_eq!(snapshot.total_target_functions, 2);
    }

    #[test]
    fn snapshot_fails_on_malformed_max_prog_size() {
        let cmdline = cmdline(&[("cegis-max-prog-size", "big")]);
        let options = OptionsTable::new();
        assert!(CegisOptions::new(&cmdline, &options).snapshot().is_err());
    }

    #[test]
    fn options_table_omits_unset_values() {
        let cmdline = cmdline(&[("function", ""), ("cegis-max-prog-size", "0")]);
        let options = OptionsTable::new();
        let snapshot = CegisOptions::new(&cmdline, &options).snapshot().unwrap();
        let table = snapshot.to_options_table();

        assert!(!table.is_set("function"));
        assert!(!table.is_set("cegis-max-prog-size"));
        assert!(!table.is_set("cegis-skolem"));
        assert!(!table.is_set("cegis-ranking"));
        assert_eq!(table.get_option("cegis-root"), "__CPROVER_synthesis_root");
        assert_eq!(
            snapshot.unrepresentable(),
            vec![
                ("function", String::new()),
                ("cegis-max-prog-size", "0".to_string()),
            ]
        );
    }

    #[test]
    fn resolving_from_its_own_table_gives_the_same_values() {
        let cmdline = cmdline(&[
            ("function", "f"),
            ("cegis-targets", "a"),
            ("cegis-targets", "b"),
            ("cegis-skolem", "s"),
            ("cegis-max-prog-size", "3"),
        ]);
        let options = OptionsTable::new();
        let first = CegisOptions::new(&cmdline, &options).snapshot().unwrap();
        assert!(first.unrepresentable().is_empty());

        let empty = CommandLine::new();
        let table = first.to_options_table();
        let second = CegisOptions::new(&empty, &table).snapshot().unwrap();

        assert_eq!(second.entry_function.value, first.entry_function.value);
        assert_eq!(second.root_function.value, first.root_function.value);
        assert_eq!(second.target_functions.value, first.target_functions.value);
        assert_eq!(second.skolem_function.value, first.skolem_function.value);
        assert_eq!(second.ranking_function.value, first.ranking_function.value);
        assert_eq!(second.max_prog_size.value, first.max_prog_size.value);
        assert_eq!(second.total_target_functions, first.total_target_functions);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_report_resolves_to_the_same_values() {
        let cmdline = cmdline(&[
            ("cegis-targets", "x"),
            ("cegis-ranking", "rk"),
            ("cegis-max-prog-size", "12"),
        ]);
        let options = OptionsTable::new();
        let first = CegisOptions::new(&cmdline, &options).snapshot().unwrap();

        let empty = CommandLine::new();
        let table = OptionsTable::from_toml_str(&first.to_toml().unwrap()).unwrap();
        let second = CegisOptions::new(&empty, &table).snapshot().unwrap();

        assert_eq!(second.entry_function.value, "main");
        assert_eq!(second.target_functions.value, vec!["x"]);
        assert_eq!(second.ranking_function.value, "rk");
        assert_eq!(second.max_prog_size.value, 12);
        assert_eq!(second.total_target_functions, first.total_target_functions);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_report_rejects_command_line_sentinels() {
        use crate::error::CegisError;

        let options = OptionsTable::new();
        for (flag, value) in [
            ("cegis-max-prog-size", "0"),
            ("function", ""),
            ("cegis-root", ""),
        ] {
            let cmdline = cmdline(&[(flag, value)]);
            let snapshot = CegisOptions::new(&cmdline, &options).snapshot().unwrap();
            match snapshot.to_toml() {
                Err(CegisError::NotRepresentable { key, .. }) => assert_eq!(key, flag),
                other => panic!("expected {flag} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn display_lists_every_setting() {
        colored::control::set_override(false);
        let cmdline = CommandLine::new();
        let options = OptionsTable::new();
        let text = CegisOptions::new(&cmdline, &options)
            .snapshot()
            .unwrap()
            .to_string();

        assert!(text.contains("__CPROVER_synthesis_root"));
        assert!(text.contains("__CPROVER_synthesis_learn"));
        assert!(text.contains("[default]"));
        assert!(text.lines().any(|l| l.starts_with("cegis-skolem") && l.contains(" - ")));
        assert!(text.ends_with("total targets        1"));
    }
}
