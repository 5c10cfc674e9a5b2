mod cli;
mod input;
mod output;


use anyhow::Context;
use clap::Parser;
use cli::Cli;
use sqd_intervals::IntervalMerger;
use tracing::{debug, info};


fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    init_tracing(args.json_log);

    let tokens = input::read_tokens(&args)?;
    debug!("read {} interval tokens", tokens.len());

    let mut merger = IntervalMerger::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        merger.insert_token(token)
            .with_context(|| format!("failed to merge token #{}", i + 1))?;
    }
    let merged = merger.finish();

    info!(
        "merged {} intervals into {}",
        tokens.len(),
        merged.len()
    );

    output::write_intervals(std::io::stdout().lock(), &merged, args.format)
        .context("failed to write the result")?;

    Ok(())
}


fn init_tracing(json_log: bool) {
    let env_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV)
            .unwrap_or("warn".to_string()),
    );

    if json_log {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}
