pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "contrast-kit")]
#[command(about = "WCAG 2.1 contrast checks for design-system colors")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(
        long,
        global = true,
        help = "Exit non-zero when a color pair fails WCAG AA"
    )]
    pub fail_on_error: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the relative luminance of a color
    Luminance { color: String },

    /// Print the contrast ratio of a foreground/background pair
    Check {
        foreground: String,
        background: String,

        #[arg(long, help = "Evaluate against the large-text thresholds")]
        large: bool,
    },

    /// Evaluate every pair in a palette TOML file and write reports
    Audit {
        config: String,

        #[arg(long)]
        output: Option<String>,

        #[arg(long, value_delimiter = ',')]
        format: Option<Vec<String>>,

        #[arg(long, help = "Reject colors that are not #RRGGBB")]
        strict: bool,
    },
}
