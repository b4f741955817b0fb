pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{cli::LocalStorage, toml_config::PaletteConfig};
pub use core::audit::AuditEngine;
pub use core::contrast::{
    contrast_ratio, evaluate, get_contrast, get_luminance, meets_aa, meets_level, passes_wcag,
    relative_luminance,
};
pub use domain::model::{Color, ConformanceLevel, ContrastVerdict, TextSize};
pub use utils::error::{ContrastError, Result};
