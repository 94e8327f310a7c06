use clap::Parser;
use timetable_slots::utils::{error::TimetableError, logger, validation::Validate};
use timetable_slots::{CliConfig, LocalOutput, TimetableEngine};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting timetable-slots");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let output = LocalOutput::new(config.output.clone());
    let engine = TimetableEngine::new(config);

    match engine.run_to_string() {
        Ok(rendered) => match output.write(&rendered) {
            Ok(destination) => {
                tracing::info!("✅ Time slots generated");
                tracing::info!("📁 Output written to: {}", destination);
            }
            Err(e) => fail(&e),
        },
        Err(e) => fail(&e),
    }
}

fn fail(e: &TimetableError) -> ! {
    tracing::error!(
        "❌ timetable-slots failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
