//! Completion history and per-activity statistics.
//!
//! Completion events reference activities by id only, and an activity may
//! have been deleted since. Every lookup here goes through
//! [`find_activity`], and entries whose activity is gone are skipped.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Serialize;

use crate::model::{Activity, CompletionEvent};

/// Which categories to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// No category means no filtering. Any given name, "All" included, is
    /// matched exactly.
    pub fn from_option(category: Option<&str>) -> Self {
        match category {
            None => CategoryFilter::All,
            Some(c) => CategoryFilter::Category(c.to_string()),
        }
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => activity.category == *c,
        }
    }
}

/// Headline numbers for the activities view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTotals {
    pub total_activities: usize,
    /// Every logged completion, including ones whose activity was deleted.
    pub completed: usize,
    pub categories: usize,
}

impl ActivityTotals {
    pub fn compute(activities: &[Activity], events: &[CompletionEvent]) -> Self {
        Self {
            total_activities: activities.len(),
            completed: events.len(),
            categories: categories(activities).len(),
        }
    }
}

/// A resolved completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry<'a> {
    pub activity: &'a Activity,
    pub completed_at: DateTime<Utc>,
}

/// Completions that fall on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryDay<'a> {
    pub date: NaiveDate,
    pub entries: Vec<HistoryEntry<'a>>,
}

/// Distinct categories, in the order they first appear.
pub fn categories(activities: &[Activity]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for a in activities {
        if !seen.contains(&a.category.as_str()) {
            seen.push(&a.category);
        }
    }
    seen
}

pub fn filter_by_category<'a>(
    activities: &'a [Activity],
    filter: &CategoryFilter,
) -> Vec<&'a Activity> {
    activities.iter().filter(|a| filter.matches(a)).collect()
}

pub fn completion_count(events: &[CompletionEvent], activity_id: &str) -> usize {
    events.iter().filter(|e| e.activity_id == activity_id).count()
}

/// Resolve an activity id; `None` when it no longer exists.
pub fn find_activity<'a>(activities: &'a [Activity], id: &str) -> Option<&'a Activity> {
    activities.iter().find(|a| a.id == id)
}

/// Group completions by calendar date in `tz`, newest day first.
///
/// Entries keep log order within a day. Dangling references are dropped, and
/// a day left with nothing to show is omitted.
pub fn history_by_date<'a, Tz: TimeZone>(
    events: &[CompletionEvent],
    activities: &'a [Activity],
    tz: &Tz,
) -> Vec<HistoryDay<'a>> {
    let mut days: BTreeMap<NaiveDate, Vec<HistoryEntry<'a>>> = BTreeMap::new();
    let mut dangling = 0usize;

    for event in events {
        let Some(activity) = find_activity(activities, &event.activity_id) else {
            dangling += 1;
            continue;
        };
        let date = event.timestamp.with_timezone(tz).date_naive();
        days.entry(date).or_default().push(HistoryEntry {
            activity,
            completed_at: event.timestamp,
        });
    }

    if dangling > 0 {
        tracing::debug!(dangling, "skipped completions for deleted activities");
    }

    days.into_iter()
        .rev()
        .map(|(date, entries)| HistoryDay { date, entries })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActivityDraft, DEFAULT_CATEGORY};
    use chrono::FixedOffset;

    fn activity(name: &str, category: &str) -> Activity {
        ActivityDraft::named(name)
            .category(category)
            .build(DEFAULT_CATEGORY, 30)
            .unwrap()
    }

    fn event(id: &str, rfc3339: &str) -> CompletionEvent {
        CompletionEvent {
            activity_id: id.to_string(),
            timestamp: DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        let list = vec![
            activity("Run", "Exercise"),
            activity("Read", "Reading"),
            activity("Swim", "Exercise"),
        ];
        assert_eq!(categories(&list), ["Exercise", "Reading"]);
    }

    #[test]
    fn filter_by_category_and_all() {
        let list = vec![activity("Run", "Exercise"), activity("Read", "Reading")];
        assert_eq!(filter_by_category(&list, &CategoryFilter::All).len(), 2);
        let only = filter_by_category(&list, &CategoryFilter::from_option(Some("Reading")));
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].name, "Read");
        assert_eq!(CategoryFilter::from_option(None), CategoryFilter::All);
    }

    #[test]
    fn category_named_all_filters_on_its_own() {
        let list = vec![activity("Run", "Exercise"), activity("Misc", "All")];
        let filter = CategoryFilter::from_option(Some("All"));
        assert_eq!(filter, CategoryFilter::Category("All".to_string()));
        let only = filter_by_category(&list, &filter);
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].name, "Misc");
        assert!(filter_by_category(&list, &CategoryFilter::from_option(Some("all"))).is_empty());
    }

    #[test]
    fn totals_count_dangling_completions() {
        let list = vec![activity("Run", "Exercise")];
        let events = vec![
            event(&list[0].id, "2024-05-01T08:00:00Z"),
            event("deleted", "2024-05-01T09:00:00Z"),
        ];
        let totals = ActivityTotals::compute(&list, &events);
        assert_eq!(
            totals,
            ActivityTotals {
                total_activities: 1,
                completed: 2,
                categories: 1
            }
        );
        assert_eq!(completion_count(&events, &list[0].id), 1);
        assert_eq!(completion_count(&events, "nope"), 0);
    }

    #[test]
    fn find_activity_returns_none_for_dangling_id() {
        let list = vec![activity("Run", "Exercise")];
        assert!(find_activity(&list, &list[0].id).is_some());
        assert!(find_activity(&list, "gone").is_none());
    }

    #[test]
    fn history_groups_newest_day_first_and_skips_dangling() {
        let list = vec![activity("Run", "Exercise"), activity("Read", "Reading")];
        let run = list[0].id.clone();
        let read = list[1].id.clone();
        let events = vec![
            event(&run, "2024-05-01T08:00:00Z"),
            event(&read, "2024-05-02T20:00:00Z"),
            event("deleted", "2024-05-02T21:00:00Z"),
            event(&run, "2024-05-01T18:00:00Z"),
            event("deleted", "2024-04-30T10:00:00Z"),
        ];

        let days = history_by_date(&events, &list, &Utc);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(days[0].entries.len(), 1);
        assert_eq!(days[0].entries[0].activity.name, "Read");
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        let names: Vec<_> = days[1].entries.iter().map(|e| e.activity.name.as_str()).collect();
        assert_eq!(names, ["Run", "Run"]);
    }

    #[test]
    fn history_dates_follow_the_given_time_zone() {
        let list = vec![activity("Run", "Exercise")];
        let events = vec![event(&list[0].id, "2024-05-01T23:30:00Z")];
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let days = history_by_date(&events, &list, &tokyo);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
    }
}
