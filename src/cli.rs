// std imports
use std::path::PathBuf;

// third-party imports
use clap::{ArgAction, Parser};
use wildcard::Case;

// local imports
use crate::{
    app::{Options, OutputMode},
    input::InputReference,
    settings::Settings,
};

// ---

/// Filters text lines by a glob-style wildcard pattern, where `*` matches zero or more characters.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, an empty value or `-` discards the files listed before it including the default one.
    #[arg(long, value_name = "FILE", env = "WILDSIFT_CONFIG", num_args = 1, action = ArgAction::Append)]
    pub config: Vec<String>,

    /// Ignore case when matching.
    #[arg(short, long, env = "WILDSIFT_IGNORE_CASE", overrides_with = "ignore_case")]
    pub ignore_case: bool,

    /// Match case, overrides --ignore-case option and the configuration.
    #[arg(short = 's', long, overrides_with = "case_sensitive")]
    pub case_sensitive: bool,

    /// Select lines that do not match the pattern.
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Print only the number of selected lines.
    #[arg(short, long, conflicts_with = "quiet")]
    pub count: bool,

    /// Print nothing, exit with zero status on the first selected line.
    #[arg(short, long)]
    pub quiet: bool,

    /// Test the pattern against the given candidate instead of reading input lines.
    #[arg(short, long, value_name = "CANDIDATE", num_args = 1, action = ArgAction::Append, conflicts_with_all = ["files", "count"])]
    pub any: Vec<String>,

    /// Wildcard pattern matched against whole lines.
    pub pattern: String,

    /// Files to process, standard input is used if none given or `-` is specified.
    ///
    /// Invalid UTF-8 sequences in lines are matched as the replacement character U+FFFD.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    /// Returns configuration files to load after the last reset marker and whether the default one is skipped.
    pub fn config_files(&self) -> (&[String], bool) {
        let (offset, no_default) = self
            .config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (x + 1, true))
            .unwrap_or_default();

        (&self.config[offset..], no_default)
    }

    pub fn inputs(&self) -> Vec<InputReference> {
        if self.files.is_empty() {
            vec![InputReference::Stdin]
        } else {
            self.files.iter().cloned().map(InputReference::from_arg).collect()
        }
    }

    pub fn case(&self, settings: &Settings) -> Case {
        Case::from_ignore_case(!self.case_sensitive && (self.ignore_case || settings.ignore_case))
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.count {
            OutputMode::Count
        } else {
            OutputMode::Lines
        }
    }

    pub fn options(&self, settings: &Settings) -> Options {
        Options {
            pattern: self.pattern.clone(),
            case: self.case(settings),
            invert: self.invert_match,
            strip_cr: settings.strip_cr,
            skip_empty: settings.skip_empty,
            mode: self.output_mode(),
        }
    }
}
