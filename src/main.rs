use clap::Parser;
use contrast_kit::domain::model::ConformanceLevel;
use contrast_kit::utils::{logger, validation::Validate};
use contrast_kit::{
    evaluate, get_luminance, AuditEngine, CliConfig, Color, Command, ContrastError, LocalStorage,
    PaletteConfig, TextSize,
};

const CHECK_FAILURE_CODE: i32 = 1;
const AUDIT_FAILURE_CODE: i32 = 2;

/// Failing pairs only change the exit status under `--fail-on-error`.
fn exit_code_for(all_pass: bool, fail_on_error: bool, failure_code: i32) -> i32 {
    if fail_on_error && !all_pass {
        failure_code
    } else {
        0
    }
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let exit_code = match config.command {
        Command::Luminance { ref color } => {
            println!("{:.4}", get_luminance(color));
            0
        }
        Command::Check {
            ref foreground,
            ref background,
            large,
        } => check(foreground, background, large, config.fail_on_error),
        Command::Audit {
            config: ref path,
            ref output,
            ref format,
            strict,
        } => match audit(path, output.clone(), format.clone(), strict) {
            Ok(all_pass) => exit_code_for(all_pass, config.fail_on_error, AUDIT_FAILURE_CODE),
            Err(e) => {
                tracing::error!(
                    "❌ Audit failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                1
            }
        },
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn check(foreground: &str, background: &str, large: bool, fail_on_error: bool) -> i32 {
    let text_size = TextSize::from_large_flag(large);
    let verdict = evaluate(&Color::from(foreground), &Color::from(background));
    let mark = |ok: bool| if ok { "pass" } else { "fail" };

    println!("{} on {}: {:.2}:1", foreground, background, verdict.ratio);
    println!(
        "AA ({} text):  {}",
        text_size,
        mark(verdict.passes(ConformanceLevel::Aa, text_size))
    );
    println!(
        "AAA ({} text): {}",
        text_size,
        mark(verdict.passes(ConformanceLevel::Aaa, text_size))
    );

    exit_code_for(
        verdict.passes(ConformanceLevel::Aa, text_size),
        fail_on_error,
        CHECK_FAILURE_CODE,
    )
}

fn audit(
    path: &str,
    output: Option<String>,
    formats: Option<Vec<String>>,
    strict: bool,
) -> Result<bool, ContrastError> {
    let mut palette = PaletteConfig::from_file(path)?;
    palette.apply_overrides(output, formats, strict);
    palette.validate()?;

    let storage = LocalStorage::new(palette.output.path.clone());
    let engine = AuditEngine::new(storage);
    let report = engine.audit(&palette);
    for written in engine.write_reports(&palette, &report)? {
        println!("📁 {}", written);
    }

    println!(
        "{}: {} passed, {} failed",
        report.palette, report.passed, report.failed
    );
    Ok(report.all_pass())
}
