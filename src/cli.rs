use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::{DEFAULT_OUTPUT, DEFAULT_SOURCE, ScanConfig};

/// Two-letter short flags clap cannot express; rewritten to their long forms.
const SHORT_ALIASES: [(&str, &str); 2] = [("-id", "--i_directory"), ("-ie", "--i_extension")];

#[derive(Parser, Debug)]
#[command(name = "projtree")]
#[command(about = "Write a project's directory tree to a markdown file", long_about = None)]
pub struct Cli {
    /// Absolute path to the project folder
    #[arg(short = 's', long = "source", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Path to save the output markdown file (`.md` is appended if missing)
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Directories to ignore, comma-separated (short form: -id)
    #[arg(long = "i_directory", value_name = "DIRS", default_value = "")]
    pub i_directory: String,

    /// Extensions to ignore, comma-separated (short form: -ie)
    #[arg(long = "i_extension", value_name = "EXTS", default_value = "")]
    pub i_extension: String,

    /// Log debug details to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Parses the process arguments, accepting `-id` and `-ie`.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn to_config(&self) -> ScanConfig {
        ScanConfig::new(
            self.source.clone(),
            &self.output,
            &self.i_directory,
            &self.i_extension,
        )
    }
}

/// Rewrites `-id`/`-ie` (plain, `=VALUE` or glued `VALUE`) to the long flags.
/// Arguments after `--` are left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str().and_then(rewrite_short_alias) {
                Some(rewritten) => OsString::from(rewritten),
                None => arg,
            }
        })
        .collect()
}

fn rewrite_short_alias(arg: &str) -> Option<String> {
    SHORT_ALIASES.iter().find_map(|(short, long)| {
        let rest = arg.strip_prefix(short)?;
        if rest.is_empty() {
            return Some((*long).to_owned());
        }
        let value = rest.strip_prefix('=').unwrap_or(rest);
        Some(format!("{long}={value}"))
    })
}
