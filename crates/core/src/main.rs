use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use search::SearchPolicy;
use std::path::PathBuf;
use store::GraphStore;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod render;
mod resolve;

use render::{render_json, render_trace};
use resolve::{prompt_for_person, resolve_person};

#[derive(Parser)]
#[command(name = "degrees")]
#[command(about = "Degrees of separation between people in a movie graph", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(long, global = true, default_value = "large")]
    data: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest chain of co-appearances between two people
    Path {
        source: String,
        target: String,

        /// Give up and report "not connected" after this many expansions
        #[arg(long)]
        max_expansions: Option<usize>,

        /// Emit the path as a JSON report instead of the trace
        #[arg(long)]
        json: bool,
    },

    /// List the people matching a name
    Lookup { name: String },

    /// Show relation counts for the loaded data
    Stats,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    info!("Loading data from {:?}", cli.data);
    let store = GraphStore::load(&cli.data)
        .with_context(|| format!("loading data from {}", cli.data.display()))?;

    match cli.command {
        Commands::Path {
            source,
            target,
            max_expansions,
            json,
        } => {
            let Some(source_id) = resolve_person(&store, &source, prompt_for_person)? else {
                bail!("person not found: {source}");
            };
            let Some(target_id) = resolve_person(&store, &target, prompt_for_person)? else {
                bail!("person not found: {target}");
            };

            let policy = SearchPolicy { max_expansions };
            let path = store.shortest_path_with(&source_id, &target_id, policy)?;

            match path {
                None => println!("Not connected."),
                Some(steps) => {
                    if json {
                        println!("{}", render_json(&store, &steps)?);
                    } else {
                        print!("{}", render_trace(&store, &source_id, &steps));
                    }
                }
            }
        }

        Commands::Lookup { name } => {
            let ids = store.lookup_person_by_name(&name);
            if ids.is_empty() {
                println!("No people found matching '{}'", name);
            } else {
                for id in ids {
                    if let Some(person) = store.person(&id) {
                        println!(
                            "ID: {}, Name: {}, Birth: {}",
                            person.id,
                            person.name,
                            person.birth.as_deref().unwrap_or("unknown")
                        );
                    }
                }
            }
        }

        Commands::Stats => {
            let stats = store.stats();
            println!("People: {}", stats.people);
            println!("Movies: {}", stats.movies);
            println!("Cast entries: {}", stats.cast_entries);
        }
    }

    Ok(())
}
