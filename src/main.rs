use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use aquamitra::api::{AssistantBackend, HttpBackend};
use aquamitra::core::config::{self, CliOverrides, ResolvedConfig};
use aquamitra::core::controller::Controller;
use aquamitra::core::language::label_for;
use aquamitra::core::state::App;
use aquamitra::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "aquamitra", about = "Terminal chat client for the AquaMitra groundwater assistant")]
struct Args {
    /// Server root, e.g. http://localhost:8000
    #[arg(long)]
    base_url: Option<String>,

    /// Language code sent with each question (en, hi, mr, ...)
    #[arg(short, long)]
    language: Option<String>,

    /// Probe the server and exit instead of starting the UI
    #[arg(long)]
    check: bool,
}

fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match File::create(&config.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(config.log_level, log_config, log_file);
        }
        Err(e) => eprintln!(
            "warning: cannot open log file {}: {}",
            config.log_file.display(),
            e
        ),
    }
}

/// Health + language probe. Prints a short report and reports success.
async fn check(config: &ResolvedConfig) -> bool {
    let http = Arc::new(HttpBackend::new(&config.base_url));
    println!("Server: {}", http.base_url());

    let healthy = match http.health().await {
        Ok(status) => {
            println!("Health: {}", status);
            status == "ok"
        }
        Err(e) => {
            println!("Health: unreachable ({})", e);
            false
        }
    };

    let mut controller = Controller::new(App::from_config(config), http);
    controller.load_languages().await;
    let app = controller.app();
    let languages: Vec<String> = app
        .catalog
        .options()
        .into_iter()
        .map(|o| format!("{} ({})", o.label, o.code))
        .collect();
    println!("Languages: {}", languages.join(", "));
    println!("Selected: {} ({})", label_for(&app.language), app.language);
    println!("Status: {}", app.status_message);

    healthy
}

#[tokio::main]
async fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("warning: {}; using defaults", e);
            config::AquaConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            language: args.language,
        },
    );

    init_logging(&resolved);
    log::info!(
        "AquaMitra starting up (server: {}, language: {})",
        resolved.base_url,
        resolved.language
    );

    if args.check {
        let ok = check(&resolved).await;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    tui::run(resolved)?;
    Ok(ExitCode::SUCCESS)
}
