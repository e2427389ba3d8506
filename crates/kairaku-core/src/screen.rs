//! Presentation models for the three views.
//!
//! The front end decides which [`View`] is current and passes that value in;
//! nothing here keeps navigation state. Each screen is computed from the
//! stored records and borrowed from them.

use std::fmt;
use std::str::FromStr;

use chrono::TimeZone;
use serde::Serialize;

use crate::history::{
    categories, completion_count, filter_by_category, history_by_date, ActivityTotals,
    CategoryFilter, HistoryDay,
};
use crate::model::{Activity, ActivitySuggestion, CompletionEvent, TimeOfDay, User};
use crate::suggest::SuggestionEngine;

/// How many aspirations the home view keeps in front of the user.
pub const HOME_ASPIRATIONS: usize = 3;

/// Which view is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Profile,
    Activities,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            View::Home => "home",
            View::Profile => "profile",
            View::Activities => "activities",
        })
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(View::Home),
            "profile" => Ok(View::Profile),
            "activities" => Ok(View::Activities),
            other => Err(format!(
                "unknown view '{other}' (expected home, profile or activities)"
            )),
        }
    }
}

/// Home view: greeting, suggestions for now, and a few aspirations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum HomeScreen<'a> {
    /// No profile yet.
    Welcome,
    #[serde(rename_all = "camelCase")]
    Ready {
        name: &'a str,
        time_of_day: TimeOfDay,
        suggestions: Vec<ActivitySuggestion<'a>>,
        aspirations: &'a [String],
    },
}

impl<'a> HomeScreen<'a> {
    pub fn build(
        user: Option<&'a User>,
        time_of_day: TimeOfDay,
        engine: &mut SuggestionEngine,
    ) -> Self {
        let Some(user) = user else {
            return HomeScreen::Welcome;
        };
        let shown = user.aspirations.len().min(HOME_ASPIRATIONS);
        HomeScreen::Ready {
            name: &user.name,
            time_of_day,
            suggestions: engine.generate(Some(user), time_of_day),
            aspirations: &user.aspirations[..shown],
        }
    }
}

/// One row of the activities list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRow<'a> {
    pub activity: &'a Activity,
    pub completed_count: usize,
}

/// Activities view: totals, category filter, list, and dated history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ActivitiesScreen<'a> {
    NeedsProfile,
    #[serde(rename_all = "camelCase")]
    Ready {
        totals: ActivityTotals,
        categories: Vec<&'a str>,
        #[serde(skip)]
        filter: CategoryFilter,
        rows: Vec<ActivityRow<'a>>,
        history: Vec<HistoryDay<'a>>,
    },
}

impl<'a> ActivitiesScreen<'a> {
    /// `tz` decides which calendar day each completion belongs to.
    pub fn build<Tz: TimeZone>(
        user: Option<&'a User>,
        events: &[CompletionEvent],
        filter: CategoryFilter,
        tz: &Tz,
    ) -> Self {
        let Some(user) = user else {
            return ActivitiesScreen::NeedsProfile;
        };
        let activities = &user.meaningful_activities;
        let rows = filter_by_category(activities, &filter)
            .into_iter()
            .map(|activity| ActivityRow {
                activity,
                completed_count: completion_count(events, &activity.id),
            })
            .collect();

        ActivitiesScreen::Ready {
            totals: ActivityTotals::compute(activities, events),
            categories: categories(activities),
            filter,
            rows,
            history: history_by_date(events, activities, tz),
        }
    }
}

/// Profile view: the stored profile, or a blank one to fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileScreen {
    pub user: User,
    pub is_new: bool,
}

impl ProfileScreen {
    pub fn build(user: Option<User>) -> Self {
        match user {
            Some(user) => Self {
                user,
                is_new: false,
            },
            None => Self {
                user: User::default(),
                is_new: true,
            },
        }
    }
}
