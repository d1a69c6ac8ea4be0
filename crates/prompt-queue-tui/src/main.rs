mod clipboard;
mod input;
mod render;
mod runtime;
mod tracing_setup;
mod ui;

use anyhow::Result;
use clap::Parser;
use prompt_queue_core::{CoreConfig, JsonFileStore, LifecycleController, SystemClock};
use std::path::PathBuf;

use crate::clipboard::SystemClipboard;
use crate::runtime::run_app;
use ui::App;

#[derive(Parser, Debug)]
#[command(name = "prompt-queue")]
#[command(about = "A queue of prompts that disappear once you're done with them")]
struct Args {
    /// Directory holding todos.json and settings.json
    #[arg(long, env = "PROMPT_QUEUE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Use the shorter two-step countdown
    #[arg(long)]
    fast: bool,

    /// Countdown steps before a completed prompt disappears
    #[arg(long, value_name = "N", conflicts_with = "fast")]
    countdown: Option<u32>,

    /// Disallow cancelling a running countdown
    #[arg(long)]
    no_cancel: bool,
}

impl Args {
    fn core_config(&self) -> CoreConfig {
        let data_dir = self
            .data_dir
            .clone()
            .unwrap_or_else(CoreConfig::default_data_dir);
        let mut config = if self.fast {
            CoreConfig::fast(data_dir)
        } else {
            CoreConfig::new(data_dir)
        };
        if let Some(steps) = self.countdown {
            config = config.with_countdown_steps(steps);
        }
        config.with_allow_cancel(!self.no_cancel)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.core_config();

    let log_path = tracing_setup::init_tracing(&config.data_dir)?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        log_file = %log_path.display(),
        countdown_steps = config.countdown_steps,
        "starting prompt-queue"
    );

    // Restore the terminal before the panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        tracing::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));

    let store = JsonFileStore::new(&config.data_dir);
    let controller = LifecycleController::initialize(store, SystemClock, config);
    let mut app = App::new(controller, Box::new(SystemClipboard::new()));

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app).await;
    ui::restore_terminal()?;

    if let Err(err) = &result {
        tracing::error!("exited with error: {:#}", err);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_build_config() {
        let args = Args::parse_from(["prompt-queue", "--data-dir", "/tmp/pq", "--countdown", "5"]);
        let config = args.core_config();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/pq"));
        assert_eq!(config.countdown_steps, 5);
        assert!(config.allow_cancel);
    }

    #[test]
    fn test_fast_and_no_cancel() {
        let args = Args::parse_from(["prompt-queue", "--data-dir", "/tmp/pq", "--fast", "--no-cancel"]);
        let config = args.core_config();
        assert_eq!(config.countdown_steps, 2);
        assert!(!config.allow_cancel);
    }

    #[test]
    fn test_fast_conflicts_with_countdown() {
        let result = Args::try_parse_from(["prompt-queue", "--fast", "--countdown", "4"]);
        assert!(result.is_err());
    }
}
