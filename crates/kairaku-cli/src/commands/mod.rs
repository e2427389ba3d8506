pub mod activity;
pub mod config;
pub mod history;
pub mod profile;
pub mod suggest;
pub mod view;
pub mod watch;

use kairaku_core::{Database, ProfileStore, User};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

pub fn open_store() -> Result<ProfileStore<Database>, Box<dyn std::error::Error>> {
    Ok(ProfileStore::new(Database::open()?))
}

/// Load the profile, apply `edit`, and save it back through validation.
pub fn edit_profile<T>(
    store: &ProfileStore<Database>,
    edit: impl FnOnce(&mut User) -> Result<T, Box<dyn std::error::Error>>,
) -> Result<T, Box<dyn std::error::Error>> {
    let mut user = store
        .try_load_user()?
        .ok_or("no profile yet; run `kairaku profile create` first")?;
    let out = edit(&mut user)?;
    store.save_user(&user)?;
    Ok(out)
}
