use bobtiler_core::DumpFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for DumpFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Yaml => DumpFormat::Yaml,
            FormatArg::Json => DumpFormat::Json,
        }
    }
}

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "BobTiler",
    version = bobtiler_core::version(),
    about = "BobTiler - builds a tiling layout tree and prints it",
)]
pub struct Args {
    /// Specify custom configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Validate configuration and exit without building a tree
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Use default configuration and ignore config files
    #[arg(long = "defaults")]
    pub use_defaults: bool,

    /// Number of windows to add to the root window
    #[arg(short = 'n', long = "windows", value_name = "COUNT", default_value_t = 0)]
    pub windows: usize,

    /// Output format, overriding the configured one
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<FormatArg>,

    /// Only log info, warnings and errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log everything, including trace output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
