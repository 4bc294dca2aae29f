use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nearby_pairs::{export::MY_MAPS_HELP, pipeline, Brand, Config};

#[derive(Debug, Parser)]
#[command(about = "Find Tesla Superchargers within walking distance of In-N-Out Burger")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    config: Config,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Download one brand's California locations
    Fetch { brand: Brand },
    /// Pair stored locations within walking distance
    Match,
    /// Write CSV and KML for Google My Maps / Earth
    Export,
    /// Fetch, match and export in one go
    Run,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;
    config.validate()?;

    match cli.command {
        Command::Fetch { brand } => {
            let locations = pipeline::fetch(&config, brand)?;
            println!("Found {} {brand} locations in California", locations.len());
        }
        Command::Match => {
            let pairs = pipeline::find_nearby(&config)?;
            print!("{}", pipeline::report(&pairs)?);
        }
        Command::Export => {
            pipeline::export(&config)?;
            println!("{MY_MAPS_HELP}");
        }
        Command::Run => {
            let pairs = pipeline::run(&config)?;
            print!("{}", pipeline::report(&pairs)?);
            println!("{MY_MAPS_HELP}");
            println!("\nDone! Check {} for output files.", config.data_dir.display());
        }
    }

    Ok(())
}
