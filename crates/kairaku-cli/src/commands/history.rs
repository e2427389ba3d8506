use chrono::Local;
use clap::Args;
use kairaku_core::history::history_by_date;

use super::{open_store, CliResult};

#[derive(Args)]
pub struct HistoryArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: HistoryArgs) -> CliResult {
    let store = open_store()?;
    let activities = store
        .load_user()
        .map(|u| u.meaningful_activities)
        .unwrap_or_default();
    let events = store.load_completions();
    let days = history_by_date(&events, &activities, &Local);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }
    if days.is_empty() {
        println!("No completions yet.");
        return Ok(());
    }
    for day in &days {
        println!("{}", day.date);
        for entry in &day.entries {
            println!(
                "  {}  {}",
                entry.completed_at.with_timezone(&Local).format("%H:%M"),
                entry.activity.name
            );
        }
    }
    Ok(())
}
