use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mma_library::config::Config;
use mma_library::fightfinder::FightFinder;
use mma_library::library::Library;
use mma_library::logging;
use mma_library::navigate::Navigator;
use mma_library::store::{JsonStore, MetadataStore};
use mma_library::Result;

#[derive(Parser)]
#[command(name = "mma_library")]
#[command(about = "MMA event library: local videos enriched with fight-finder metadata")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape one event page and save it to the metadata store
    ScrapeEvent {
        /// Numeric event id from the fight finder
        id: String,
    },
    /// Scrape one fighter page and save it to the metadata store
    ScrapeFighter {
        /// Numeric fighter id from the fight finder
        id: String,
    },
    /// List every event present in both the store and the library
    Events,
    /// List all promotions in the store
    Promotions,
    /// List all fighters with their fight counts
    Fighters,
    /// Search events and fighters
    Search {
        /// Case-insensitive term matched against titles, promotions and names
        term: String,
    },
    /// List the video files for one event
    Videos {
        /// Event id
        id: String,
    },
}

fn build_navigator(config: &Config) -> Result<Navigator> {
    let store = JsonStore::open(&config.metadata.store_file)?;
    let library = Library::load(&config.library.index_file, &config.library.root)?;
    Ok(Navigator::new(
        Box::new(store),
        library,
        config.metadata.clone(),
        config.display.clone(),
    ))
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::ScrapeEvent { id } => {
            println!("🔄 Scraping event {}...", id);

            let finder = FightFinder::new(&config.source)?;
            let event = finder.get_event(&id)?;
            let mut store = JsonStore::open(&config.metadata.store_file)?;
            store.save_event(&event)?;

            println!("✅ Saved event: {}", event.title);
            println!("   Promotion: {}", event.promotion);
            println!("   Date: {}", event.date);
            if !event.venue.is_empty() {
                println!("   Venue: {}", event.venue);
            }
            if !event.city.is_empty() {
                println!("   City: {}", event.city);
            }
            println!("   Fights: {}", event.fights.len());
        }
        Commands::ScrapeFighter { id } => {
            println!("🔄 Scraping fighter {}...", id);

            let finder = FightFinder::new(&config.source)?;
            let fighter = finder.get_fighter(&id)?;
            let mut store = JsonStore::open(&config.metadata.store_file)?;
            store.save_fighter(&fighter)?;

            let shown = if fighter.name.is_empty() {
                id.as_str()
            } else {
                fighter.name.as_str()
            };
            println!("✅ Saved fighter: {}", shown);
            if !fighter.nick_name.is_empty() {
                println!("   Nick name: {}", fighter.nick_name);
            }
            if !fighter.association.is_empty() {
                println!("   Association: {}", fighter.association);
            }
            if !fighter.country.is_empty() {
                println!("   Country: {}", fighter.country);
            }
        }
        Commands::Events => {
            let navigator = build_navigator(&config)?;
            let events = navigator.all_events()?;

            if events.is_empty() {
                println!("⚠️  No events in the library");
            }
            for event in events {
                println!("{}  {}  {} [{}]", event.id, event.date, event.title, event.promotion);
            }
        }
        Commands::Promotions => {
            let navigator = build_navigator(&config)?;
            for promotion in navigator.promotions()? {
                println!("{}", promotion);
            }
        }
        Commands::Fighters => {
            let navigator = build_navigator(&config)?;
            for listing in navigator.fighters()? {
                let fighter = &listing.fighter;
                if fighter.nick_name.is_empty() {
                    println!("{}  {} ({} fights)", fighter.id, fighter.name, listing.fight_count);
                } else {
                    println!(
                        "{}  {} \"{}\" ({} fights)",
                        fighter.id, fighter.name, fighter.nick_name, listing.fight_count
                    );
                }
            }
        }
        Commands::Search { term } => {
            let navigator = build_navigator(&config)?;
            let results = navigator.search(&term)?;

            println!(
                "🔍 {} events and {} fighters match '{}'",
                results.events.len(),
                results.fighters.len(),
                term
            );
            for event in &results.events {
                println!("   {}  {}  {} [{}]", event.id, event.date, event.title, event.promotion);
            }
            for listing in &results.fighters {
                println!(
                    "   {}  {} ({} fights)",
                    listing.fighter.id, listing.fighter.name, listing.fight_count
                );
            }
        }
        Commands::Videos { id } => {
            let navigator = build_navigator(&config)?;
            let listing = navigator.event_videos(&id)?;

            if let Some(only) = listing.single() {
                // Exactly one file: play it directly instead of listing
                println!("▶️  {}", only.path.display());
            } else if listing.videos.is_empty() {
                println!("⚠️  No video files found for {}", listing.event.title);
            } else {
                println!("🎬 {}", listing.event.title);
                println!("   {}", listing.description);
                println!("   Poster: {}", listing.artwork.poster.display());
                for video in &listing.videos {
                    println!("   {}  ({})", video.display_title, video.path.display());
                }
            }
        }
    }

    Ok(())
}
