use clap::Parser;
use mock_dates::utils::error::ErrorSeverity;
use mock_dates::utils::{logger, validation::Validate};
use mock_dates::{CliConfig, ConfigProvider, DateSettings, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 先載入設定檔，日誌等級可能由它決定
    let file_config = match config.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let level = file_config.as_ref().and_then(|c| c.log_level());
    if file_config.as_ref().is_some_and(|c| c.json_logs()) {
        logger::init_json_logger(config.verbose, level);
    } else {
        logger::init_cli_logger(config.verbose, level);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    let validation = config
        .validate()
        .and_then(|_| file_config.as_ref().map_or(Ok(()), |c| c.validate()));
    if let Err(e) = validation {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config, file_config.as_ref()) {
        tracing::error!(
            "❌ mock-dates failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(config: &CliConfig, file_config: Option<&TomlConfig>) -> mock_dates::Result<()> {
    let settings =
        DateSettings::resolve(config, file_config.map(|c| c as &dyn ConfigProvider))?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let Some(input) = &settings.template_input else {
        println!("{}", settings.render_date()?);
        return Ok(());
    };

    let template = settings.template()?;
    match &settings.template_output {
        Some(output) => {
            template.render_file(input, output)?;
        }
        None => {
            let body = std::fs::read_to_string(input)?;
            let rendered = template.render(&body)?;
            tracing::info!("📝 Rendered {} ({} replacement(s))", input, rendered.replacements);
            print!("{}", rendered.body);
        }
    }

    Ok(())
}
