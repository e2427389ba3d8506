//! Meaningful activity commands.

use clap::Subcommand;
use kairaku_core::history::{categories, completion_count, filter_by_category};
use kairaku_core::{ActivityDraft, CategoryFilter, Config, TimeOfDay, PRESET_CATEGORIES};

use super::{edit_profile, open_store, CliResult};

#[derive(Subcommand)]
pub enum ActivityAction {
    /// Add a meaningful activity
    Add {
        /// Activity name
        name: String,
        /// Category (free-form; presets: Exercise, Reading, Music, Art, Learning,
        /// Social, Meditation, Outdoors, Cooking, Other)
        #[arg(long)]
        category: Option<String>,
        /// Time of day it fits: morning, afternoon, evening, night, anytime (repeatable)
        #[arg(long = "time")]
        times: Vec<TimeOfDay>,
        /// Duration in minutes
        #[arg(long)]
        duration: Option<u32>,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a meaningful activity by id
    Remove {
        id: String,
    },
    /// List meaningful activities
    List {
        /// Only show this category
        #[arg(long)]
        category: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List preset categories and the ones already in use
    Categories,
    /// Record that you did an activity just now
    Complete {
        id: String,
    },
}

pub fn run(action: ActivityAction) -> CliResult {
    let store = open_store()?;

    match action {
        ActivityAction::Add {
            name,
            category,
            times,
            duration,
            description,
        } => {
            let config = Config::load_or_default();
            let draft = ActivityDraft {
                name,
                category,
                time_of_day: times,
                duration,
                description,
            };
            let activity = draft.build(
                &config.activities.default_category,
                config.activities.default_duration,
            )?;
            let id = edit_profile(&store, |user| {
                Ok(user.add_meaningful_activity(activity).id.clone())
            })?;
            println!("Activity added: {id}");
        }
        ActivityAction::Remove { id } => {
            let removed = edit_profile(&store, |user| Ok(user.remove_meaningful_activity(&id)))?;
            match removed {
                Some(a) => println!("Removed activity: {}", a.name),
                None => return Err(format!("no meaningful activity with id '{id}'").into()),
            }
        }
        ActivityAction::List { category, json } => {
            let user = store.load_user().ok_or("no profile yet")?;
            let events = store.load_completions();
            let filter = CategoryFilter::from_option(category.as_deref());
            let activities = filter_by_category(&user.meaningful_activities, &filter);
            if json {
                println!("{}", serde_json::to_string_pretty(&activities)?);
            } else if activities.is_empty() {
                println!("No activities found.");
            } else {
                for a in activities {
                    let times: Vec<_> = a.time_of_day.iter().map(|t| t.as_str()).collect();
                    println!(
                        "{}  {} ({}, {} min, {}) - done {} times",
                        a.id,
                        a.name,
                        a.category,
                        a.duration,
                        times.join("/"),
                        completion_count(&events, &a.id)
                    );
                }
            }
        }
        ActivityAction::Categories => {
            println!("Presets: {}", PRESET_CATEGORIES.join(", "));
            if let Some(user) = store.load_user() {
                let in_use = categories(&user.meaningful_activities);
                if !in_use.is_empty() {
                    println!("In use:  {}", in_use.join(", "));
                }
            }
        }
        ActivityAction::Complete { id } => {
            let name = store
                .load_user()
                .and_then(|u| u.meaningful_activity(&id).map(|a| a.name.clone()));
            if name.is_none() {
                tracing::warn!(activity_id = %id, "completing an activity that is not in the profile");
            }
            let event = store.append_completion(&id)?;
            println!(
                "Completed {} at {}",
                name.as_deref().unwrap_or(&id),
                event.timestamp.to_rfc3339()
            );
        }
    }
    Ok(())
}
