//! fibdev: drive the Fibonacci device from the command line.

use std::process::ExitCode;

use fibdev_lib::{app, config, errors};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    let result = app::run(&config);
    if let Err(e) = &result {
        fibdev_cli::ui::print_error(&format!("{e:#}"));
    }
    ExitCode::from(u8::try_from(errors::exit_status(&result)).unwrap_or(1))
}
