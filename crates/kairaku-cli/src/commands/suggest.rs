use clap::Args;
use kairaku_core::suggest::current_time_of_day;
use kairaku_core::{Config, SuggestionEngine, TimeOfDay};

use super::{open_store, CliResult};
use crate::render;

#[derive(Args)]
pub struct SuggestArgs {
    /// Time of day to suggest for (default: now)
    #[arg(long)]
    time: Option<TimeOfDay>,
    /// Number of suggestions (default: suggestions.count from config)
    #[arg(long)]
    count: Option<usize>,
    /// Seed for reproducible picks
    #[arg(long)]
    seed: Option<u64>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: SuggestArgs) -> CliResult {
    let store = open_store()?;
    let config = Config::load_or_default();
    let user = store.load_user();

    let time = args.time.unwrap_or_else(current_time_of_day);
    let mut engine = SuggestionEngine::with_seed(args.seed)
        .with_count(args.count.unwrap_or(config.suggestions.count));
    let suggestions = engine.generate(user.as_ref(), time);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else if user.is_none() {
        println!("No profile yet. Create one with `kairaku profile create`.");
    } else {
        render::suggestion_list(&suggestions, time);
    }
    Ok(())
}
