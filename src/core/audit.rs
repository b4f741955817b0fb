use crate::config::toml_config::PaletteConfig;
use crate::core::contrast;
use crate::core::{AuditReport, PairReport, ReportSettings, Result, Storage};
use crate::domain::model::ConformanceLevel;
use crate::utils::error::ContrastError;
use chrono::Utc;

pub const CSV_REPORT: &str = "contrast_report.csv";
pub const JSON_REPORT: &str = "contrast_report.json";

pub struct AuditEngine<S: Storage> {
    storage: S,
}

impl<S: Storage> AuditEngine<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Evaluates every pair against its own text size. Nothing is written.
    pub fn audit(&self, config: &PaletteConfig) -> AuditReport {
        let pairs: Vec<PairReport> = config
            .pairs
            .iter()
            .map(|pair| {
                let verdict = contrast::evaluate(&pair.foreground, &pair.background);
                let text_size = pair.text_size();
                let report = PairReport {
                    name: pair.name.clone(),
                    foreground: pair.foreground.clone(),
                    background: pair.background.clone(),
                    text_size,
                    ratio: verdict.ratio,
                    passes_aa: verdict.passes(ConformanceLevel::Aa, text_size),
                    passes_aaa: verdict.passes(ConformanceLevel::Aaa, text_size),
                };
                tracing::debug!(
                    "{}: {} on {} -> {:.2}:1 (AA {}, AAA {})",
                    report.name,
                    report.foreground,
                    report.background,
                    report.ratio,
                    report.passes_aa,
                    report.passes_aaa
                );
                report
            })
            .collect();

        let passed = pairs.iter().filter(|p| p.passes_aa).count();
        AuditReport {
            palette: config.palette.name.clone(),
            generated_at: Utc::now(),
            failed: pairs.len() - passed,
            passed,
            pairs,
        }
    }

    /// Audits the palette and writes one report per configured format.
    /// Returns the full paths of the written files.
    pub fn run(&self, config: &PaletteConfig) -> Result<Vec<String>> {
        let report = self.audit(config);
        self.write_reports(config, &report)
    }

    pub fn write_reports(
        &self,
        config: &PaletteConfig,
        report: &AuditReport,
    ) -> Result<Vec<String>> {
        tracing::info!(
            "Audited palette '{}' ({} pairs)",
            report.palette,
            report.pairs.len()
        );
        tracing::info!("{} passed, {} failed WCAG AA", report.passed, report.failed);
        for failure in report.failures() {
            tracing::warn!(
                "'{}' fails AA at {:.2}:1 ({} text)",
                failure.name,
                failure.ratio,
                failure.text_size
            );
        }

        // render everything first so a bad format leaves nothing half-written
        let mut rendered = Vec::with_capacity(config.output_formats().len());
        for format in config.output_formats() {
            let entry = match format.as_str() {
                "csv" => (CSV_REPORT, render_csv(report)?),
                "json" => (JSON_REPORT, render_json(report)?),
                other => {
                    return Err(ContrastError::InvalidConfigValueError {
                        field: "output.formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format".to_string(),
                    })
                }
            };
            rendered.push(entry);
        }

        let mut written = Vec::with_capacity(rendered.len());
        for (file_name, data) in rendered {
            tracing::debug!("Writing {} ({} bytes)", file_name, data.len());
            self.storage.write_file(file_name, data.as_bytes())?;
            written.push(format!("{}/{}", config.output_path(), file_name));
        }

        Ok(written)
    }
}

pub fn render_csv(report: &AuditReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "name",
        "foreground",
        "background",
        "text_size",
        "ratio",
        "aa",
        "aaa",
    ])?;

    for pair in &report.pairs {
        writer.write_record([
            pair.name.clone(),
            pair.foreground.to_string(),
            pair.background.to_string(),
            pair.text_size.to_string(),
            format!("{:.2}", pair.ratio),
            pair.passes_aa.to_string(),
            pair.passes_aaa.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ContrastError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ContrastError::ValidationError {
        message: format!("CSV report is not valid UTF-8: {}", e),
    })
}

pub fn render_json(report: &AuditReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
