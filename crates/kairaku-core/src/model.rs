//! Profile and activity types.
//!
//! A [`User`] owns two activity lists. Meaningful activities carry a
//! user-chosen category, time tags and duration and are the only ones the
//! suggestion engine looks at. Escape activities are tracked by name only:
//! their category is always [`ESCAPE_CATEGORY`], their duration zero.
//!
//! [`CompletionEvent`]s live outside the user record and refer to activities
//! by id without any integrity check.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Category literal stamped on every escape activity.
pub const ESCAPE_CATEGORY: &str = "Escape";

/// Category used when a meaningful activity is added without one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Duration used when a meaningful activity is added without one.
pub const DEFAULT_DURATION_MIN: u32 = 30;

/// Categories offered by the profile editor. Categories stay free-form.
pub const PRESET_CATEGORIES: &[&str] = &[
    "Exercise",
    "Reading",
    "Music",
    "Art",
    "Learning",
    "Social",
    "Meditation",
    "Outdoors",
    "Cooking",
    "Other",
];

/// Part of the day an activity fits into.
///
/// `Anytime` is only ever an eligibility wildcard on an activity; the time
/// resolver never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
    Anytime,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 5] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
        TimeOfDay::Anytime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
            TimeOfDay::Anytime => "anytime",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            "night" => Ok(TimeOfDay::Night),
            "anytime" => Ok(TimeOfDay::Anytime),
            other => Err(format!(
                "unknown time of day '{other}' (expected morning, afternoon, evening, night or anytime)"
            )),
        }
    }
}

/// A user-defined activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub category: String,
    pub time_of_day: BTreeSet<TimeOfDay>,
    /// Minutes.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Activity {
    /// Build an escape activity. Only the name is user-supplied.
    pub fn escape(name: &str) -> Result<Self, ValidationError> {
        let name = non_blank("name", name)?;
        Ok(Self {
            id: new_id(),
            name,
            category: ESCAPE_CATEGORY.to_string(),
            time_of_day: BTreeSet::from([TimeOfDay::Anytime]),
            duration: 0,
            description: None,
        })
    }

    /// True if this activity may be suggested while `time` is current.
    pub fn fits(&self, time: TimeOfDay) -> bool {
        self.time_of_day.contains(&time) || self.time_of_day.contains(&TimeOfDay::Anytime)
    }

    pub fn is_escape(&self) -> bool {
        self.category == ESCAPE_CATEGORY
    }
}

/// Input for a new meaningful activity; unset fields take defaults.
#[derive(Debug, Clone, Default)]
pub struct ActivityDraft {
    pub name: String,
    pub category: Option<String>,
    pub time_of_day: Vec<TimeOfDay>,
    pub duration: Option<u32>,
    pub description: Option<String>,
}

impl ActivityDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn at(mut self, time: TimeOfDay) -> Self {
        self.time_of_day.push(time);
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Turn the draft into an activity with a fresh id.
    ///
    /// `default_category` and `default_duration` fill the unset fields. An
    /// empty time set becomes `{anytime}`.
    pub fn build(
        self,
        default_category: &str,
        default_duration: u32,
    ) -> Result<Activity, ValidationError> {
        let name = non_blank("name", &self.name)?;
        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| default_category.to_string());
        let mut time_of_day: BTreeSet<TimeOfDay> = self.time_of_day.into_iter().collect();
        if time_of_day.is_empty() {
            time_of_day.insert(TimeOfDay::Anytime);
        }
        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Activity {
            id: new_id(),
            name,
            category,
            time_of_day,
            duration: self.duration.unwrap_or(default_duration),
            description,
        })
    }
}

/// The single user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub escape_activities: Vec<Activity>,
    #[serde(default)]
    pub meaningful_activities: Vec<Activity>,
    #[serde(default)]
    pub aspirations: Vec<String>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Checks applied before the profile is persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::blank("name"));
        }
        if self.meaningful_activities.is_empty() {
            return Err(ValidationError::EmptyCollection(
                "at least one meaningful activity is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn add_escape_activity(&mut self, name: &str) -> Result<&Activity, ValidationError> {
        let activity = Activity::escape(name)?;
        let index = self.escape_activities.len();
        self.escape_activities.push(activity);
        Ok(&self.escape_activities[index])
    }

    pub fn add_meaningful_activity(&mut self, activity: Activity) -> &Activity {
        let index = self.meaningful_activities.len();
        self.meaningful_activities.push(activity);
        &self.meaningful_activities[index]
    }

    pub fn add_aspiration(&mut self, text: &str) -> Result<(), ValidationError> {
        self.aspirations.push(non_blank("aspiration", text)?);
        Ok(())
    }

    pub fn remove_escape_activity(&mut self, id: &str) -> Option<Activity> {
        remove_by_id(&mut self.escape_activities, id)
    }

    pub fn remove_meaningful_activity(&mut self, id: &str) -> Option<Activity> {
        remove_by_id(&mut self.meaningful_activities, id)
    }

    pub fn remove_aspiration(&mut self, index: usize) -> Result<String, ValidationError> {
        if index >= self.aspirations.len() {
            return Err(ValidationError::OutOfBounds {
                collection: "aspirations".to_string(),
                index,
                len: self.aspirations.len(),
            });
        }
        Ok(self.aspirations.remove(index))
    }

    /// Look up a meaningful activity by id.
    pub fn meaningful_activity(&self, id: &str) -> Option<&Activity> {
        self.meaningful_activities.iter().find(|a| a.id == id)
    }
}

/// One entry of the append-only completion log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEvent {
    pub activity_id: String,
    pub timestamp: DateTime<Utc>,
}

impl CompletionEvent {
    pub fn now(activity_id: impl Into<String>) -> Self {
        Self {
            activity_id: activity_id.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A suggested activity with the sentence explaining why.
///
/// Derived on demand from a borrowed user; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySuggestion<'a> {
    pub activity: &'a Activity,
    pub reason: String,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn non_blank(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::blank(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn remove_by_id(list: &mut Vec<Activity>, id: &str) -> Option<Activity> {
    let pos = list.iter().position(|a| a.id == id)?;
    Some(list.remove(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read() -> Activity {
        ActivityDraft::named("Read")
            .category("Reading")
            .at(TimeOfDay::Evening)
            .duration(30)
            .build(DEFAULT_CATEGORY, DEFAULT_DURATION_MIN)
            .unwrap()
    }

    #[test]
    fn escape_activity_is_name_only() {
        let a = Activity::escape("  Scrolling  ").unwrap();
        assert_eq!(a.name, "Scrolling");
        assert_eq!(a.category, ESCAPE_CATEGORY);
        assert_eq!(a.duration, 0);
        assert_eq!(a.time_of_day, BTreeSet::from([TimeOfDay::Anytime]));
        assert!(a.is_escape());
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(Activity::escape("   ").is_err());
        assert!(ActivityDraft::named("")
            .build(DEFAULT_CATEGORY, DEFAULT_DURATION_MIN)
            .is_err());
        let mut user = User::new("Ana");
        assert!(user.add_aspiration(" ").is_err());
        assert!(user.aspirations.is_empty());
    }

    #[test]
    fn draft_defaults_fill_missing_fields() {
        let a = ActivityDraft::named("Walk").build("Outdoors", 45).unwrap();
        assert_eq!(a.category, "Outdoors");
        assert_eq!(a.duration, 45);
        assert_eq!(a.time_of_day, BTreeSet::from([TimeOfDay::Anytime]));
        assert!(a.description.is_none());
    }

    #[test]
    fn ids_are_unique() {
        let a = read();
        let b = read();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn fits_matches_tag_or_anytime() {
        let a = read();
        assert!(a.fits(TimeOfDay::Evening));
        assert!(!a.fits(TimeOfDay::Morning));

        let any = ActivityDraft::named("Stretch")
            .build(DEFAULT_CATEGORY, DEFAULT_DURATION_MIN)
            .unwrap();
        for t in TimeOfDay::ALL {
            assert!(any.fits(t));
        }
    }

    #[test]
    fn validate_requires_name_and_meaningful_activity() {
        let mut user = User::new("  ");
        assert!(matches!(
            user.validate(),
            Err(ValidationError::InvalidValue { .. })
        ));

        user.name = "Ana".into();
        assert!(matches!(
            user.validate(),
            Err(ValidationError::EmptyCollection(_))
        ));

        user.add_meaningful_activity(read());
        assert!(user.validate().is_ok());
    }

    #[test]
    fn remove_by_id_only_touches_owning_list() {
        let mut user = User::new("Ana");
        let escape_id = user.add_escape_activity("TV").unwrap().id.clone();
        let read_id = user.add_meaningful_activity(read()).id.clone();

        assert!(user.remove_meaningful_activity(&escape_id).is_none());
        assert_eq!(user.escape_activities.len(), 1);

        let removed = user.remove_meaningful_activity(&read_id).unwrap();
        assert_eq!(removed.name, "Read");
        assert!(user.meaningful_activities.is_empty());

        assert!(user.remove_escape_activity(&escape_id).is_some());
        assert!(user.escape_activities.is_empty());
    }

    #[test]
    fn remove_aspiration_checks_bounds() {
        let mut user = User::new("Ana");
        user.add_aspiration("learn piano").unwrap();
        assert_eq!(
            user.remove_aspiration(3),
            Err(ValidationError::OutOfBounds {
                collection: "aspirations".into(),
                index: 3,
                len: 1
            })
        );
        assert_eq!(user.remove_aspiration(0).unwrap(), "learn piano");
    }

    #[test]
    fn serializes_with_camel_case_and_lowercase_tags() {
        let mut user = User::new("Ana");
        user.add_meaningful_activity(read());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("meaningfulActivities").is_some());
        assert!(json.get("escapeActivities").is_some());
        assert_eq!(
            json["meaningfulActivities"][0]["timeOfDay"],
            serde_json::json!(["evening"])
        );
        assert!(json["meaningfulActivities"][0].get("description").is_none());
    }

    #[test]
    fn parses_time_of_day() {
        assert_eq!("Evening".parse::<TimeOfDay>(), Ok(TimeOfDay::Evening));
        assert!("noon".parse::<TimeOfDay>().is_err());
        for t in TimeOfDay::ALL {
            assert_eq!(t.to_string().parse::<TimeOfDay>(), Ok(t));
        }
    }
}
