use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "rust_bank")]
#[command(about = "Single-account bank console", long_about = None)]
pub struct Cli {
    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Log filter (overrides the config file; RUST_LOG wins over both)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse startup flags without letting them block the session.
    ///
    /// Only `--help` comes back as `Err` (the caller prints it and stops).
    /// Anything clap rejects is reported on stderr and replaced by the
    /// defaults, so the menu still runs.
    pub fn parse_lenient<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(e) if is_informational(e.kind()) => Err(e),
            Err(e) => {
                eprintln!(
                    "Ignoring command line ({}). Starting with defaults.",
                    e.kind().as_str().unwrap_or("invalid arguments")
                );
                Ok(Self::default())
            }
        }
    }
}

fn is_informational(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}
