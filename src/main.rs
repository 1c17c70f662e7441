use clap::Parser;
use part_joiner::core::ConfigProvider;
use part_joiner::utils::error::ErrorSeverity;
use part_joiner::utils::{logger, validation::Validate};
use part_joiner::{CliConfig, JoinEngine, JoinError, JoinOptions, LocalWorkspace};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let working_dir = match config.working_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!("❌ Could not determine the working directory: {}", e);
            eprintln!("❌ Could not determine the working directory: {}", e);
            std::process::exit(1);
        }
    };

    let workspace = LocalWorkspace::new(working_dir);
    let engine = JoinEngine::new(workspace, JoinOptions::from_config(&config));

    match engine.run() {
        Ok(summary) => {
            if summary.failed() > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &JoinError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
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
    std::process::exit(exit_code)
}
