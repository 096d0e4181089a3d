//! `rumi-lodge` - terminal shell for the Rumi Lodge portal.
//!
//! Each invocation is one page load: load config, restore the session from
//! storage, apply one command, print the resulting screen.

use std::error::Error;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use rumi_lodge::adapters::{FileKeyValueStore, InMemoryKeyValueStore};
use rumi_lodge::config::{AppConfig, StorageBackend, StorageConfig};
use rumi_lodge::domain::membership::MembershipTier;
use rumi_lodge::domain::user::{ProfilePatch, UserProfile};
use rumi_lodge::ports::KeyValueStore;
use rumi_lodge::shell::{render_screen, render_tiers, Shell};
use rumi_lodge::telemetry;

#[derive(Parser)]
#[command(name = "rumi-lodge")]
#[command(about = "Rumi Lodge guidance portal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show who is signed in
    Whoami,
    /// Sign in (replaces any current session)
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "BASIC")]
        tier: MembershipTier,
    },
    /// Sign out and forget the session
    Logout,
    /// Change membership tier
    Upgrade { tier: MembershipTier },
    /// Edit profile fields (an empty value clears avatar/bio/location)
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Navigate to a path, e.g. `/membership` or `#/chat/42`
    Open { path: String },
    /// Compare membership tiers
    Tiers,
}

fn open_storage(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::File => Arc::new(FileKeyValueStore::new(&config.data_dir)),
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load_validated()?;
    telemetry::init_tracing(&config.runtime).map_err(|e| e as Box<dyn Error>)?;

    tracing::debug!(
        backend = ?config.storage.backend,
        data_dir = %config.storage.data_dir.display(),
        "Opening session storage"
    );
    let mut shell = Shell::boot(open_storage(&config.storage), &config.storage.session_key);

    let output = match cli.command {
        Commands::Whoami => shell.whoami(),
        Commands::Login { name, email, tier } => {
            let profile = UserProfile::new(name, email, tier)?;
            render_screen(&shell.login(profile)?)
        }
        Commands::Logout => render_screen(&shell.logout()?),
        Commands::Upgrade { tier } => {
            if !shell.session().is_logged_in() {
                tracing::warn!("Tier change requested without a session");
            }
            render_screen(&shell.upgrade(tier)?)
        }
        Commands::Edit {
            name,
            avatar,
            bio,
            location,
        } => {
            let patch = ProfilePatch {
                name,
                avatar,
                bio,
                location,
            };
            render_screen(&shell.edit_profile(&patch)?)
        }
        Commands::Open { path } => render_screen(&shell.open(&path)),
        Commands::Tiers => {
            let current = shell.session().current_profile().map(|p| p.tier());
            render_tiers(current)
        }
    };

    println!("{}", output);
    shell.teardown();
    Ok(())
}
