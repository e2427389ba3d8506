//! Plain-text rendering of the core screen models.

use chrono::Local;
use kairaku_core::{
    ActivitiesScreen, ActivitySuggestion, CategoryFilter, HomeScreen, ProfileScreen, TimeOfDay,
};

pub fn home(screen: &HomeScreen<'_>) {
    match screen {
        HomeScreen::Welcome => {
            println!("Welcome to Kairaku");
            println!("Create your profile to get suggestions: kairaku profile create --help");
        }
        HomeScreen::Ready {
            name,
            time_of_day,
            suggestions,
            aspirations,
        } => {
            println!("Hello, {name}");
            println!("Suggestions for the {time_of_day}");
            println!();
            suggestion_list(suggestions, *time_of_day);
            if !aspirations.is_empty() {
                println!();
                println!("Remember what you are working towards:");
                for a in aspirations.iter() {
                    println!("  - {a}");
                }
            }
        }
    }
}

pub fn suggestion_list(suggestions: &[ActivitySuggestion<'_>], time_of_day: TimeOfDay) {
    if suggestions.is_empty() {
        println!("No activities fit the {time_of_day}. Add some with `kairaku activity add`.");
        return;
    }
    for s in suggestions {
        println!("* {} ({} min) [{}]", s.activity.name, s.activity.duration, s.activity.id);
        if let Some(description) = &s.activity.description {
            println!("  {description}");
        }
        println!("  {}", s.reason);
    }
}

pub fn activities(screen: &ActivitiesScreen<'_>) {
    let ActivitiesScreen::Ready {
        totals,
        categories,
        filter,
        rows,
        history,
    } = screen
    else {
        println!("Create your profile first: kairaku profile create --help");
        return;
    };

    println!(
        "Activities: {}   Completed: {}   Categories: {}",
        totals.total_activities, totals.completed, totals.categories
    );
    if !categories.is_empty() {
        println!("Categories: {}", categories.join(", "));
    }
    println!();

    if rows.is_empty() {
        match filter {
            CategoryFilter::All => println!("You haven't added any activities yet."),
            CategoryFilter::Category(c) => println!("No activities found in the {c} category."),
        }
    } else {
        for row in rows {
            let a = row.activity;
            println!("{} - {} ({} min): {} times", a.name, a.category, a.duration, row.completed_count);
            if let Some(description) = &a.description {
                println!("  {description}");
            }
        }
    }

    if !history.is_empty() {
        println!();
        println!("Completion history");
        for day in history {
            println!("{}", day.date);
            for entry in &day.entries {
                println!(
                    "  {}  {}",
                    entry.completed_at.with_timezone(&Local).format("%H:%M"),
                    entry.activity.name
                );
            }
        }
    }
}

pub fn profile(screen: &ProfileScreen) {
    if screen.is_new {
        println!("No profile yet. Create one with `kairaku profile create`.");
        return;
    }
    let user = &screen.user;
    println!("Name: {}", user.name);
    println!();
    println!("Escape activities:");
    for a in &user.escape_activities {
        println!("  {}  {}", a.id, a.name);
    }
    println!();
    println!("Meaningful activities:");
    for a in &user.meaningful_activities {
        let times: Vec<_> = a.time_of_day.iter().map(|t| t.as_str()).collect();
        println!(
            "  {}  {} ({}, {} min, {})",
            a.id,
            a.name,
            a.category,
            a.duration,
            times.join("/")
        );
    }
    println!();
    println!("Aspirations:");
    for (i, a) in user.aspirations.iter().enumerate() {
        println!("  {i}. {a}");
    }
}
