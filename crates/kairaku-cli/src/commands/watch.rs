//! Re-render the home view whenever the part of the day changes.

use std::thread;
use std::time::Duration;

use chrono::Local;
use clap::Args;
use kairaku_core::{Config, HomeScreen, SuggestionEngine, TimeOfDayWatcher};

use super::{open_store, CliResult};
use crate::render;

#[derive(Args)]
pub struct WatchArgs {
    /// Seconds between checks (default: watch.interval_secs from config)
    #[arg(long)]
    interval: Option<u64>,
    /// Stop after this many checks instead of running until interrupted
    #[arg(long)]
    ticks: Option<u64>,
}

pub fn run(args: WatchArgs) -> CliResult {
    let store = open_store()?;
    let config = Config::load_or_default();
    let interval = Duration::from_secs(args.interval.unwrap_or(config.watch.interval_secs).max(1));
    let mut engine = SuggestionEngine::from_entropy().with_count(config.suggestions.count);
    let mut watcher = TimeOfDayWatcher::starting_at(&Local::now());

    let user = store.load_user();
    render::home(&HomeScreen::build(user.as_ref(), watcher.current(), &mut engine));

    let mut tick = 0u64;
    while args.ticks.map_or(true, |limit| tick < limit) {
        thread::sleep(interval);
        tick += 1;
        let Some(time_of_day) = watcher.observe(&Local::now()) else {
            continue;
        };
        tracing::info!(%time_of_day, "refreshing suggestions");
        let user = store.load_user();
        println!();
        render::home(&HomeScreen::build(user.as_ref(), time_of_day, &mut engine));
    }
    Ok(())
}
