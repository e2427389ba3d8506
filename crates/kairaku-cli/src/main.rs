use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "kairaku", version, about = "Kairaku CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile management
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Meaningful activities and completions
    Activity {
        #[command(subcommand)]
        action: commands::activity::ActivityAction,
    },
    /// Suggest activities for the current part of the day
    Suggest(commands::suggest::SuggestArgs),
    /// Render one of the views (home, profile, activities)
    View(commands::view::ViewArgs),
    /// Completion history grouped by day
    History(commands::history::HistoryArgs),
    /// Keep the home view up to date as the day goes on
    Watch(commands::watch::WatchArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Activity { action } => commands::activity::run(action),
        Commands::Suggest(args) => commands::suggest::run(args),
        Commands::View(args) => commands::view::run(args),
        Commands::History(args) => commands::history::run(args),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
