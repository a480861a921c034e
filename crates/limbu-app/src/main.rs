use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use limbu_config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Limbu word suggestions for text typed on stdin
#[derive(Parser, Debug)]
#[command(name = "limbu-suggest", version)]
struct Args {
    /// JSON config file, replaces the environment config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dictionary JSON URL
    #[arg(long)]
    dictionary_url: Option<String>,

    /// Local dictionary JSON file, takes precedence over the URL
    #[arg(long)]
    dictionary_file: Option<String>,

    /// Max suggestions per line of input
    #[arg(long)]
    limit: Option<usize>,

    /// Force JSON log lines on stderr
    #[arg(long)]
    json_logs: bool,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.dictionary_url {
            config.dictionary.url = url.clone();
        }
        if let Some(file) = &self.dictionary_file {
            config.dictionary.file = Some(file.clone());
        }
        if let Some(limit) = self.limit {
            config.suggestion.limit = limit;
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json || !atty::is(atty::Stream::Stderr) {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.json_logs);

    let mut config = profile::load_config(args.config.as_deref())?;
    args.apply(&mut config);

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks()?;

    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut shutting_down = false;

    loop {
        tokio::select! {
            result = &mut shutdown, if !shutting_down => {
                if let Err(e) = result {
                    tracing::error!("failed to listen for ctrl+c: {e}");
                }
                tracing::info!("Shutdown requested");
                shutting_down = true;
                controller.shutdown();
            }
            joined = tasks.join_next() => match joined {
                None => break,
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    tracing::error!("task exited with error: {e}");
                    controller.shutdown();
                }
                Some(Err(e)) => {
                    tracing::error!("task panicked: {e}");
                    controller.shutdown();
                }
            }
        }
    }

    tracing::info!("Bye");
    Ok(())
}
