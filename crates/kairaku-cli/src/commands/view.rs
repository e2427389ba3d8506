use chrono::Local;
use clap::Args;
use kairaku_core::suggest::current_time_of_day;
use kairaku_core::{
    ActivitiesScreen, CategoryFilter, Config, HomeScreen, ProfileScreen, SuggestionEngine, View,
};

use super::{open_store, CliResult};
use crate::render;

#[derive(Args)]
pub struct ViewArgs {
    /// home, profile or activities
    #[arg(default_value_t = View::Home)]
    view: View,
    /// Category filter for the activities view
    #[arg(long)]
    category: Option<String>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: ViewArgs) -> CliResult {
    let store = open_store()?;
    let user = store.load_user();

    match args.view {
        View::Home => {
            let config = Config::load_or_default();
            let mut engine = SuggestionEngine::from_entropy().with_count(config.suggestions.count);
            let screen = HomeScreen::build(user.as_ref(), current_time_of_day(), &mut engine);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&screen)?);
            } else {
                render::home(&screen);
            }
        }
        View::Profile => {
            let screen = ProfileScreen::build(user);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&screen)?);
            } else {
                render::profile(&screen);
            }
        }
        View::Activities => {
            let events = store.load_completions();
            let filter = CategoryFilter::from_option(args.category.as_deref());
            let screen = ActivitiesScreen::build(user.as_ref(), &events, filter, &Local);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&screen)?);
            } else {
                render::activities(&screen);
            }
        }
    }
    Ok(())
}
