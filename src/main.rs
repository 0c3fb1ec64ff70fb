use anyhow::Result;
use clap::{Parser, Subcommand};
use skillpath::catalog::Catalog;
use skillpath::progress::Track;
use skillpath::{App, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "skillpath")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Preselect a learning track for this run (js, java or python)
    #[arg(long)]
    track: Option<Track>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the learning tracks
    Tracks,
    /// Print the five-level test ladder
    Levels,
    /// List the curriculum chapters
    Chapters,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skillpath=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Tracks) => print_tracks()?,
        Some(Commands::Levels) => print_levels()?,
        Some(Commands::Chapters) => print_chapters()?,
        None => {
            // Launch TUI
            let mut config = Config::load()?;
            if cli.track.is_some() {
                config.default_track = cli.track;
            }
            let mut app = App::new(config)?;
            app.run()?;
        }
    }

    Ok(())
}

fn print_tracks() -> Result<()> {
    let catalog = Catalog::load()?;
    for track in Track::all() {
        println!("{:<12} {} chapters", track.to_string(), catalog.chapters().len());
    }
    Ok(())
}

fn print_levels() -> Result<()> {
    let catalog = Catalog::load()?;
    for level in catalog.levels() {
        println!(
            "Level {} {} {:<12} {} ({} questions)",
            level.level,
            level.icon,
            level.name,
            level.description,
            level.questions.len()
        );
    }
    Ok(())
}

fn print_chapters() -> Result<()> {
    let catalog = Catalog::load()?;
    for chapter in catalog.chapters() {
        println!(
            "{:<36} {:>3} min {:>5} words  {}",
            chapter.id,
            chapter.estimated_minutes,
            chapter.word_count(),
            chapter.title
        );
    }
    Ok(())
}
