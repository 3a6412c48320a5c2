mod error;
mod feed;
mod logger;
mod render;
mod timing;

use std::{path::Path, process::ExitCode};

use chrono::{DateTime, Utc};
use clap::Parser;
use tokio::io::AsyncWriteExt;

use error::Result;
use feed::{
    config::{Args, Config, OutputFormat},
    loader::load_locations,
};
use render::{board::Board, card::CardContext, page};
use timing::zoned_now::zoned_now;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.verbose);

    let config = match Config::resolve(&args) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Config: {:?}", config);

    match run(&config, args.at.map(|at| at.with_timezone(&Utc))).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// One render pass. Returns `false` if the locations could not be loaded; the
/// output then carries a failure notice instead of cards.
async fn run(config: &Config, at: Option<DateTime<Utc>>) -> Result<bool> {
    let zone = config.zone()?;
    let now = match at {
        Some(at) => at,
        None => zoned_now(zone).with_timezone(&Utc),
    };
    tracing::info!("Evaluating hours at {}", now.with_timezone(&zone));

    let context = CardContext {
        now,
        zone,
        campus: &config.campus,
        default_address: &config.default_address,
    };

    let (board, failure) = match load_locations(&config.source).await {
        Ok(locations) => {
            let board = Board::build(&locations, &context);
            if board.is_empty() {
                tracing::warn!("{} lists no locations", config.source);
            }
            (board, None)
        }
        Err(err) => {
            tracing::error!("Could not load {}: {}", config.source, err);
            (Board::default(), Some(format!("Failed to load {}.", config.source)))
        }
    };

    let rendered = match config.format {
        OutputFormat::Html => page::render_html(&board, failure.as_deref())?,
        OutputFormat::Text => page::render_text(&board)?,
        OutputFormat::Json => page::render_json(&board)?,
    };
    write_output(config.output.as_deref(), &rendered).await?;

    Ok(failure.is_none())
}

async fn write_output(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, rendered).await?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(rendered.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
