use account_form::account::AccountType;
use account_form::config::{Config, ConfigError};
use account_form::core::parse_number_input;
use account_form::StubAccountApi;
use account_form::demo::{DemoOptions, FormScript, run_script};
use account_form::runtime::Runtime;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "account-form",
    version,
    about = "Fill out and submit the bank account creation form"
)]
struct Cli {
    /// YAML config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "")]
    nickname: String,

    #[arg(long = "type", default_value = "everyday")]
    account_type: AccountType,

    /// Raw savings goal input, e.g. "50000".
    #[arg(long)]
    savings_goal: Option<String>,

    #[arg(long)]
    failure_rate: Option<f64>,

    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Submissions to try before giving up on remote failures.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    attempts: u32,

    /// Print a JSON summary instead of the view frames.
    #[arg(long)]
    json: bool,

    /// Keep running until the success notice auto-clears.
    #[arg(long)]
    wait_for_clear: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "account-form failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(rate) = cli.failure_rate {
        config.remote.failure_rate = rate;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.remote.delay_ms = delay_ms;
    }
    if cli.seed.is_some() {
        config.remote.seed = cli.seed;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<ExitCode, ConfigError> {
    let config = load_config(&cli)?;
    let api = Arc::new(StubAccountApi::from_config(&config.remote));
    let mut runtime = Runtime::from_config(&config, api);

    let script = FormScript {
        nickname: cli.nickname.clone(),
        account_type: cli.account_type,
        savings_goal: cli.savings_goal.as_deref().and_then(parse_number_input),
    };
    let options = DemoOptions::from_config(&config, cli.attempts, cli.wait_for_clear);

    let report = run_script(&mut runtime, &script, &options, |lines| {
        if cli.json {
            return;
        }
        for line in lines {
            println!("{line}");
        }
        println!("{}", "-".repeat(40));
    });

    if cli.json {
        match serde_json::to_string_pretty(&report.summary) {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::error!(error = %err, "failed to encode summary"),
        }
    }

    Ok(ExitCode::from(report.outcome.exit_code()))
}
