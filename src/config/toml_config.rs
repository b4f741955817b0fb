use crate::domain::model::{Color, TextSize};
use crate::domain::ports::ReportSettings;
use crate::utils::error::{ContrastError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUPPORTED_FORMATS: [&str; 2] = ["csv", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub palette: PaletteInfo,
    #[serde(default)]
    pub pairs: Vec<PairConfig>,
    #[serde(default)]
    pub output: OutputConfig,
    /// Reject colors that are not exactly `#RRGGBB` instead of reading them as black.
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairConfig {
    pub name: String,
    pub foreground: Color,
    pub background: Color,
    #[serde(default)]
    pub large_text: bool,
}

impl PairConfig {
    pub fn text_size(&self) -> TextSize {
        TextSize::from_large_flag(self.large_text)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            formats: default_formats(),
        }
    }
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_formats() -> Vec<String> {
    SUPPORTED_FORMATS.iter().map(|f| f.to_string()).collect()
}

impl PaletteConfig {
    /// Loads a palette from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| ContrastError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ContrastError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// CLI flags take precedence over the file; the file over the defaults.
    pub fn apply_overrides(
        &mut self,
        output_path: Option<String>,
        formats: Option<Vec<String>>,
        strict: bool,
    ) {
        if let Some(path) = output_path {
            self.output.path = path;
        }
        if let Some(formats) = formats {
            self.output.formats = formats;
        }
        self.strict |= strict;
    }
}

impl ReportSettings for PaletteConfig {
    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }
}

impl Validate for PaletteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("palette.name", &self.palette.name)?;

        if self.pairs.is_empty() {
            return Err(ContrastError::MissingConfigError {
                field: "pairs".to_string(),
            });
        }

        for (i, pair) in self.pairs.iter().enumerate() {
            validation::validate_non_empty_string(&format!("pairs[{}].name", i), &pair.name)?;
            if self.strict {
                validation::validate_hex_color(
                    &format!("pairs[{}].foreground", i),
                    pair.foreground.as_str(),
                )?;
                validation::validate_hex_color(
                    &format!("pairs[{}].background", i),
                    pair.background.as_str(),
                )?;
            }
        }

        validation::validate_unique_names("pairs", self.pairs.iter().map(|p| p.name.as_str()))?;
        validation::validate_path("output.path", self.output_path())?;
        validation::validate_output_formats(
            "output.formats",
            self.output_formats(),
            &SUPPORTED_FORMATS,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: &str = r##"
[palette]
name = "recruit-ui"
description = "Text pairs from the accessibility page"

[[pairs]]
name = "good"
foreground = "#ffffff"
background = "#2563eb"

[[pairs]]
name = "fail"
foreground = "#777777"
background = "#cccccc"
large_text = true
"##;

    #[test]
    fn test_parse_palette_with_defaults() {
        let config = PaletteConfig::from_toml_str(PALETTE).unwrap();
        assert_eq!(config.palette.name, "recruit-ui");
        assert_eq!(config.pairs.len(), 2);
        assert_eq!(config.pairs[0].text_size(), TextSize::Normal);
        assert_eq!(config.pairs[1].text_size(), TextSize::Large);
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.output_formats(), ["csv", "json"]);
        assert!(!config.strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("CONTRAST_KIT_TEST_BRAND", "#2563eb");
        let content = PALETTE.replace(
            r##"background = "#2563eb""##,
            r##"background = "${CONTRAST_KIT_TEST_BRAND}""##,
        );
        let config = PaletteConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.pairs[0].background.as_str(), "#2563eb");
    }

    #[test]
    fn test_unknown_env_var_is_left_in_place() {
        let content = PALETTE.replace(
            r##"foreground = "#777777""##,
            r##"foreground = "${CONTRAST_KIT_TEST_UNSET_VAR}""##,
        );
        let config = PaletteConfig::from_toml_str(&content).unwrap();
        assert_eq!(
            config.pairs[1].foreground.as_str(),
            "${CONTRAST_KIT_TEST_UNSET_VAR}"
        );
        // lenient mode lets it through; strict mode rejects it
        assert!(config.validate().is_ok());
        let mut strict = config.clone();
        strict.strict = true;
        assert!(strict.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = PaletteConfig::from_toml_str(PALETTE).unwrap();
        config.apply_overrides(
            Some("/tmp/reports".to_string()),
            Some(vec!["csv".to_string()]),
            true,
        );
        assert_eq!(config.output_path(), "/tmp/reports");
        assert_eq!(config.output_formats(), ["csv"]);
        assert!(config.strict);
    }

    #[test]
    fn test_rejects_duplicate_and_empty() {
        let dup = PALETTE.replace(r#"name = "fail""#, r#"name = "good""#);
        let config = PaletteConfig::from_toml_str(&dup).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ContrastError::ValidationError { .. })
        ));

        let empty = PaletteConfig::from_toml_str("[palette]\nname = \"x\"\n").unwrap();
        assert!(matches!(
            empty.validate(),
            Err(ContrastError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let content = format!("{}\n[output]\nformats = [\"xml\"]\n", PALETTE);
        let config = PaletteConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.output_path(), "./output");
        assert!(matches!(
            config.validate(),
            Err(ContrastError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = PaletteConfig::from_toml_str("[palette\nname=").unwrap_err();
        assert!(matches!(err, ContrastError::ConfigError { .. }));
    }
}
