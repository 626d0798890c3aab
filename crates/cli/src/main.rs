//! enumkit CLI - inspect enum definition files.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod settings;

use settings::CliSettings;

fn main() -> anyhow::Result<()> {
    let settings = CliSettings::from_env();

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&settings.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = commands::run(&args, &settings.lookup)?;
    println!("{output}");
    Ok(())
}
