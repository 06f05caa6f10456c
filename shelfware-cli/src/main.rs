//! shelfware CLI
//!
//! Fetches a game's metadata and media from the Steam storefront and adds it
//! to the local library file.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelfware_scraper::{AddOutcome, FetchConfig, add_game};

#[derive(Parser)]
#[command(name = "shelfware")]
#[command(about = "Fetch Steam store metadata and media for a game", long_about = None)]
struct Cli {
    /// Steam app id (prompted for when omitted)
    app_id: Option<String>,

    /// Path to the library JSON file
    #[arg(long, default_value = "games.json")]
    store: PathBuf,

    /// Base directory for downloaded assets
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let app_id = match cli.app_id {
        Some(id) => id.trim().to_string(),
        None => match prompt_app_id() {
            Ok(id) => id,
            Err(e) => {
                eprintln!("Error reading app id: {e}");
                std::process::exit(1);
            }
        },
    };

    let config = FetchConfig {
        store_path: cli.store,
        assets_dir: cli.assets_dir,
        ..FetchConfig::default()
    };

    match add_game(&config, &app_id) {
        Ok(AddOutcome::Added(record)) => {
            println!(
                "{} Added '{}' (id {}) to {}",
                "\u{2713}".if_supports_color(Stdout, |t| t.green()),
                record.name.if_supports_color(Stdout, |t| t.cyan()),
                record.id,
                config.store_path.display()
            );
        }
        Ok(AddOutcome::AlreadyPresent { id, name }) => {
            println!(
                "Game {id} ('{name}') already in the library. {}",
                "Skipping.".if_supports_color(Stdout, |t| t.dimmed())
            );
        }
        Err(e) => {
            eprintln!(
                "{} {e}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red())
            );
            std::process::exit(1);
        }
    }
}

fn prompt_app_id() -> std::io::Result<String> {
    print!("Enter the Steam App ID: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
