//! Profile commands.
//!
//! Every change goes through `ProfileStore::save_user`, so a profile without
//! a name or without meaningful activities is never written.

use clap::Subcommand;
use kairaku_core::{ActivityDraft, Config, ProfileScreen, User};

use super::{edit_profile, open_store, CliResult};
use crate::render;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the stored profile
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Create the profile in one go
    Create {
        /// Your name
        #[arg(long)]
        name: String,
        /// Habit you want to do less of (repeatable)
        #[arg(long = "escape")]
        escapes: Vec<String>,
        /// Something you aspire to (repeatable)
        #[arg(long = "aspiration")]
        aspirations: Vec<String>,
        /// Meaningful activity name, added with default settings (repeatable)
        #[arg(long = "activity", required = true)]
        activities: Vec<String>,
        /// Replace an existing profile
        #[arg(long)]
        force: bool,
    },
    /// Change the profile name
    Rename {
        name: String,
    },
    /// Add an escape activity
    AddEscape {
        name: String,
    },
    /// Remove an escape activity by id
    RemoveEscape {
        id: String,
    },
    /// Add an aspiration
    AddAspiration {
        text: String,
    },
    /// Remove an aspiration by its position (0-based)
    RemoveAspiration {
        index: usize,
    },
    /// Delete the profile, the activity list and all completions
    Reset {
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: ProfileAction) -> CliResult {
    let store = open_store()?;

    match action {
        ProfileAction::Show { json } => {
            let screen = ProfileScreen::build(store.load_user());
            if json {
                println!("{}", serde_json::to_string_pretty(&screen)?);
            } else {
                render::profile(&screen);
            }
        }
        ProfileAction::Create {
            name,
            escapes,
            aspirations,
            activities,
            force,
        } => {
            if store.try_load_user()?.is_some() && !force {
                return Err("a profile already exists; pass --force to replace it".into());
            }
            let config = Config::load_or_default();
            let mut user = User::new(name.trim());
            for escape in &escapes {
                user.add_escape_activity(escape)?;
            }
            for aspiration in &aspirations {
                user.add_aspiration(aspiration)?;
            }
            for activity in activities {
                user.add_meaningful_activity(ActivityDraft::named(activity).build(
                    &config.activities.default_category,
                    config.activities.default_duration,
                )?);
            }
            store.save_user(&user)?;
            println!("Profile created for {}", user.name);
        }
        ProfileAction::Rename { name } => {
            edit_profile(&store, |user| {
                user.name = name.trim().to_string();
                Ok(())
            })?;
            println!("Profile renamed");
        }
        ProfileAction::AddEscape { name } => {
            let id = edit_profile(&store, |user| {
                Ok(user.add_escape_activity(&name)?.id.clone())
            })?;
            println!("Escape activity added: {id}");
        }
        ProfileAction::RemoveEscape { id } => {
            let removed = edit_profile(&store, |user| Ok(user.remove_escape_activity(&id)))?;
            match removed {
                Some(a) => println!("Removed escape activity: {}", a.name),
                None => return Err(format!("no escape activity with id '{id}'").into()),
            }
        }
        ProfileAction::AddAspiration { text } => {
            edit_profile(&store, |user| Ok(user.add_aspiration(&text)?))?;
            println!("Aspiration added");
        }
        ProfileAction::RemoveAspiration { index } => {
            let removed = edit_profile(&store, |user| Ok(user.remove_aspiration(index)?))?;
            println!("Removed aspiration: {removed}");
        }
        ProfileAction::Reset { yes } => {
            if !yes {
                return Err("refusing to delete all data without --yes".into());
            }
            store.clear()?;
            println!("All data cleared");
        }
    }
    Ok(())
}
