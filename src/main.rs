use std::env;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use calculus::configuration::Configuration;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let Some(config_path) = env::args().nth(1) else {
        eprintln!("usage: calculus <config.json>");
        return ExitCode::from(2);
    };

    let config = Configuration::new();
    if let Err(err) = config.from_reader(&config_path) {
        error!(path = %config_path, "failed to load configuration: {}", err);
        return ExitCode::FAILURE;
    }

    for job in config.integral_jobs().iter() {
        match config.run(job) {
            Ok(value) => println!("{} = {}", job.name(), value),
            Err(err) => {
                error!(name = job.name(), "integration failed: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
