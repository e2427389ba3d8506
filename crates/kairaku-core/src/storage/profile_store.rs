//! Profile, activity list and completion log persistence.
//!
//! Three independent JSON records under fixed keys. The `load_*` reads never
//! fail: a missing record is absent, a record that no longer parses is logged
//! and treated as absent too. Anything that writes on top of what it read
//! uses the `try_*` variants, which surface backend errors instead.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::kv::KeyValueStore;
use crate::error::Result;
use crate::model::{Activity, CompletionEvent, User};

pub const USER_KEY: &str = "mindful_app_user";
pub const ACTIVITIES_KEY: &str = "mindful_app_activities";
pub const COMPLETED_ACTIVITIES_KEY: &str = "mindful_app_completed";

/// Typed access to the persisted records of a [`KeyValueStore`].
pub struct ProfileStore<S> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn load_user(&self) -> Option<User> {
        self.read(USER_KEY)
    }

    /// Like [`load_user`](Self::load_user), but a backend failure is an
    /// error rather than "no profile".
    pub fn try_load_user(&self) -> Result<Option<User>> {
        self.try_read(USER_KEY)
    }

    /// Validate and persist the profile.
    ///
    /// # Errors
    /// A profile without a name or without meaningful activities is rejected
    /// and the stored record is left untouched.
    pub fn save_user(&self, user: &User) -> Result<()> {
        user.validate()?;
        self.write(USER_KEY, user)?;
        tracing::info!(
            meaningful = user.meaningful_activities.len(),
            escape = user.escape_activities.len(),
            aspirations = user.aspirations.len(),
            "saved profile"
        );
        Ok(())
    }

    pub fn load_activities(&self) -> Vec<Activity> {
        self.read(ACTIVITIES_KEY).unwrap_or_default()
    }

    pub fn save_activities(&self, activities: &[Activity]) -> Result<()> {
        self.write(ACTIVITIES_KEY, activities)
    }

    /// Completion log in the order entries were appended.
    pub fn load_completions(&self) -> Vec<CompletionEvent> {
        self.read(COMPLETED_ACTIVITIES_KEY).unwrap_or_default()
    }

    /// Append a completion stamped with the current time.
    ///
    /// The id is not checked against the profile. If the existing log cannot
    /// be read from the backend nothing is written.
    pub fn append_completion(&self, activity_id: &str) -> Result<CompletionEvent> {
        let event = CompletionEvent::now(activity_id);
        let mut completed: Vec<CompletionEvent> = self
            .try_read(COMPLETED_ACTIVITIES_KEY)?
            .unwrap_or_default();
        completed.push(event.clone());
        self.write(COMPLETED_ACTIVITIES_KEY, &completed)?;
        tracing::info!(activity_id, total = completed.len(), "recorded completion");
        Ok(event)
    }

    /// Drop every record this store owns.
    pub fn clear(&self) -> Result<()> {
        for key in [USER_KEY, ACTIVITIES_KEY, COMPLETED_ACTIVITIES_KEY] {
            self.store.remove(key)?;
        }
        tracing::info!("cleared all data");
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.try_read(key).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "failed to read record");
            None
        })
    }

    /// Backend errors propagate; a record that does not parse is absent.
    fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable record");
                Ok(None)
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, DatabaseError, ValidationError};
    use crate::model::{ActivityDraft, TimeOfDay, DEFAULT_CATEGORY};
    use crate::storage::MemoryStore;
    use chrono::Utc;
    use std::cell::Cell;

    /// Memory store whose reads can be switched to fail.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_reads: Cell<bool>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads.get() {
                return Err(DatabaseError::Locked.into());
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    fn valid_user() -> User {
        let mut user = User::new("Ana");
        user.add_escape_activity("Scrolling").unwrap();
        user.add_aspiration("write a novel").unwrap();
        user.add_meaningful_activity(
            ActivityDraft::named("Read")
                .category("Reading")
                .at(TimeOfDay::Evening)
                .duration(30)
                .description("Fiction before bed")
                .build(DEFAULT_CATEGORY, 30)
                .unwrap(),
        );
        user
    }

    #[test]
    fn missing_records_are_absent() {
        let store = ProfileStore::new(MemoryStore::new());
        assert!(store.load_user().is_none());
        assert!(store.load_completions().is_empty());
        assert!(store.load_activities().is_empty());
    }

    #[test]
    fn user_roundtrip() {
        let store = ProfileStore::new(MemoryStore::new());
        let user = valid_user();
        store.save_user(&user).unwrap();
        assert_eq!(store.load_user(), Some(user));
    }

    #[test]
    fn invalid_user_is_not_written() {
        let store = ProfileStore::new(MemoryStore::new());
        let user = valid_user();
        store.save_user(&user).unwrap();

        let mut broken = user.clone();
        broken.meaningful_activities.clear();
        let err = store.save_user(&broken).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyCollection(_))
        ));
        assert_eq!(store.load_user(), Some(user));
    }

    #[test]
    fn corrupted_record_reads_as_absent() {
        let store = ProfileStore::new(MemoryStore::new());
        store.inner().set(USER_KEY, "{not json").unwrap();
        store.inner().set(COMPLETED_ACTIVITIES_KEY, "42").unwrap();
        assert!(store.load_user().is_none());
        assert!(store.load_completions().is_empty());
    }

    #[test]
    fn append_completion_keeps_order_and_stamps_time() {
        let store = ProfileStore::new(MemoryStore::new());
        let before = Utc::now();
        store.append_completion("first").unwrap();
        let event = store.append_completion("act1").unwrap();

        let completions = store.load_completions();
        assert_eq!(completions.len(), 2);
        assert_eq!(completions[0].activity_id, "first");
        let last = completions.last().unwrap();
        assert_eq!(last, &event);
        assert_eq!(last.activity_id, "act1");
        assert!(last.timestamp >= before);
    }

    #[test]
    fn append_during_read_failure_keeps_log() {
        let store = ProfileStore::new(FlakyStore::default());
        for i in 0..5 {
            store.append_completion(&format!("a{i}")).unwrap();
        }

        store.inner().fail_reads.set(true);
        let err = store.append_completion("x").unwrap_err();
        assert!(matches!(err, CoreError::Database(DatabaseError::Locked)));
        assert!(store.load_completions().is_empty());

        store.inner().fail_reads.set(false);
        let completions = store.load_completions();
        assert_eq!(completions.len(), 5);
        assert!(completions.iter().all(|c| c.activity_id != "x"));
    }

    #[test]
    fn try_load_user_reports_backend_failure() {
        let store = ProfileStore::new(FlakyStore::default());
        assert_eq!(store.try_load_user().unwrap(), None);
        let user = valid_user();
        store.save_user(&user).unwrap();

        store.inner().fail_reads.set(true);
        assert!(store.load_user().is_none());
        assert!(store.try_load_user().is_err());

        store.inner().fail_reads.set(false);
        assert_eq!(store.try_load_user().unwrap(), Some(user));
    }

    #[test]
    fn reads_records_written_by_other_clients() {
        let store = ProfileStore::new(MemoryStore::new());
        store
            .inner()
            .set(
                COMPLETED_ACTIVITIES_KEY,
                r#"[{"activityId":"abc","timestamp":"2024-05-01T08:15:30.123Z"}]"#,
            )
            .unwrap();
        let completions = store.load_completions();
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].activity_id, "abc");
    }

    #[test]
    fn activities_roundtrip_and_clear() {
        let store = ProfileStore::new(MemoryStore::new());
        let user = valid_user();
        store.save_activities(&user.meaningful_activities).unwrap();
        store.save_user(&user).unwrap();
        store.append_completion("x").unwrap();
        assert_eq!(store.load_activities(), user.meaningful_activities);

        store.clear().unwrap();
        assert!(store.inner().is_empty());
        assert!(store.load_user().is_none());
    }
}
