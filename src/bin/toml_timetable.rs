use clap::Parser;
use timetable_slots::config::toml_config::OutputConfig;
use timetable_slots::domain::ports::{OutputFormat, TimingsProvider};
use timetable_slots::utils::{error::TimetableError, logger, validation::Validate};
use timetable_slots::{LocalOutput, TimetableEngine, TomlConfig, Weekday};

#[derive(Parser)]
#[command(name = "toml-timetable")]
#[command(about = "Generate department time slots from a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "timetable.toml")]
    config: String,

    /// Only generate slots for this department
    #[arg(short, long)]
    department: Option<String>,

    /// Override the output format from config
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show what would be generated without writing output
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based timetable tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}'", args.config);
            fail("Configuration loading failed", &e);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(format) = args.format {
        let output = config.output.get_or_insert(OutputConfig {
            format: None,
            path: None,
        });
        output.format = Some(match format {
            OutputFormat::Json => "json".to_string(),
            OutputFormat::Text => "text".to_string(),
        });
        tracing::info!("🔧 Output format overridden to: {:?}", format);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail("Configuration validation failed", &e);
    }

    if let Some(name) = &args.department {
        if let Err(e) = config.retain_department(name) {
            fail("Department selection failed", &e);
        }
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    let output = LocalOutput::new(config.output_path().map(str::to_string));
    let engine = TimetableEngine::new(config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        match engine.run() {
            Ok(registry) => {
                for department in registry.iter() {
                    let slots = department.time_slots.day(Weekday::Monday).map_or(0, |day| day.len());
                    eprintln!("  {}: {} slots per day", department.name(), slots);
                }
            }
            Err(e) => fail("Dry run failed", &e),
        }
        return;
    }

    match engine.run_to_string() {
        Ok(rendered) => match output.write(&rendered) {
            Ok(destination) => {
                tracing::info!("✅ Time slots generated for {}", engine.provider().name());
                tracing::info!("📁 Output written to: {}", destination);
            }
            Err(e) => fail("Writing generated time slots failed", &e),
        },
        Err(e) => fail("Slot generation failed", &e),
    }
}

// 根據錯誤嚴重程度決定退出碼
fn fail(stage: &str, e: &TimetableError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

// Summary goes to stderr so stdout only carries the generated schedule.
fn display_config_summary(config: &TomlConfig, args: &Args) {
    let options = config.partition_options();
    eprintln!("📋 Configuration Summary:");
    eprintln!("  Timetable: {}", config.name());
    eprintln!("  Departments: {}", config.departments.len());
    for department in &config.departments {
        eprintln!(
            "    {} {}-{} ({} min lectures, {} at {} for {} min)",
            department.name,
            department.start_time,
            department.end_time,
            department.lecture_duration,
            department.break_info.name,
            department.break_info.start_time,
            department.break_info.duration_minutes
        );
    }
    eprintln!("  Time parsing: {:?}", options.time_policy);
    eprintln!("  Break window checked: {}", options.validate_break_window);
    eprintln!("  Format: {:?}", config.output_format());
    eprintln!("  Output: {}", config.output_path().unwrap_or("stdout"));

    if args.dry_run {
        eprintln!("  🔍 DRY RUN MODE ENABLED");
    }

    eprintln!();
}
