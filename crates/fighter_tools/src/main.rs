//! Fighter Builder - Command-line tools

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use fighter_core::builder::FighterBuilder;
use fighter_core::psychic::PsychicMode;
use fighter_tools::loader::load_catalog_from_file;
use fighter_tools::report::{list_catalog, Listing, PriceReport};
use fighter_tools::request::{BuildRequest, StatRequest, WeaponRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CATALOG: &str = "assets/data/catalog.ron";

#[derive(Parser)]
#[command(name = "fighter-tools")]
#[command(about = "Point-cost tools for custom skirmish fighters")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PsychicArg {
    None,
    Psyker,
    Master,
}

impl From<PsychicArg> for PsychicMode {
    fn from(arg: PsychicArg) -> Self {
        match arg {
            PsychicArg::None => Self::None,
            PsychicArg::Psyker => Self::Psyker,
            PsychicArg::Master => Self::MasterPsyker,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog file or a directory of catalogs
    Validate {
        /// Path to a catalog file or data directory
        #[arg(default_value = DEFAULT_CATALOG)]
        path: PathBuf,
    },

    /// List catalog entries with their costs for a baseline fighter
    List {
        /// Path to the catalog file
        #[arg(long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,

        /// Collection to list
        #[arg(value_enum)]
        listing: Listing,
    },

    /// Price a fighter build
    Price {
        /// Path to the catalog file
        #[arg(long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,

        /// Set a stat, e.g. `--stat HP=9`
        #[arg(long = "stat", value_name = "NAME=VALUE")]
        stats: Vec<StatRequest>,

        /// Psychic mode
        #[arg(long, value_enum)]
        psychic: Option<PsychicArg>,

        /// Choose a psychic power
        #[arg(long = "power", value_name = "NAME")]
        powers: Vec<String>,

        /// Select a weapon, optionally with a profile index or label
        #[arg(long = "weapon", value_name = "ID[@PROFILE]")]
        weapons: Vec<WeaponRequest>,

        /// Select an equipment item
        #[arg(long = "equipment", value_name = "ID")]
        equipment: Vec<String>,

        /// Select a fighter ability
        #[arg(long = "ability", value_name = "ID")]
        abilities: Vec<String>,

        /// Select a leader ability
        #[arg(long = "leader", value_name = "ID")]
        leaders: Vec<String>,

        /// Points cap
        #[arg(long)]
        cap: Option<i32>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Also print the loadout reference sheet
        #[arg(long)]
        sheet: bool,
    },
}

fn load_or_exit(path: &Path) -> fighter_core::catalog::Catalog {
    match load_catalog_from_file(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load catalog: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => {
            tracing::info!("Validating catalog data in: {}", path.display());
            match fighter_tools::validate::validate_data_path(&path) {
                Ok(results) => {
                    for counts in results {
                        println!(
                            "{}: {} stats, {} powers, {} weapons, {} equipment, {} abilities, {} leader abilities",
                            counts.path.display(),
                            counts.stats,
                            counts.powers,
                            counts.weapons,
                            counts.equipment,
                            counts.abilities,
                            counts.leader_abilities
                        );
                    }
                    tracing::info!("Validation passed");
                }
                Err(e) => {
                    tracing::error!("Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::List { catalog, listing } => {
            let catalog = load_or_exit(&catalog);
            print!("{}", list_catalog(&catalog, listing));
        }
        Commands::Price {
            catalog,
            stats,
            psychic,
            powers,
            weapons,
            equipment,
            abilities,
            leaders,
            cap,
            json,
            sheet,
        } => {
            let catalog = load_or_exit(&catalog);
            let request = BuildRequest {
                stats,
                psychic: psychic.map(PsychicMode::from),
                powers,
                weapons,
                equipment,
                abilities,
                leaders,
                cap,
            };

            let mut builder = FighterBuilder::new(&catalog);
            let rejected = request.apply(&mut builder);
            let report = PriceReport::new(&builder, rejected);

            if json {
                match report.to_json() {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        tracing::error!("Failed to serialize report: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print!("{}", report.to_text());
            }
            if sheet {
                println!();
                print!("{}", builder.sheet());
            }

            if report.summary.over_cap {
                std::process::exit(2);
            }
        }
    }
}
