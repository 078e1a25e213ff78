//! Geometry wrapper generator CLI

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, info};

#[derive(Parser)]
#[command(name = "r3js-gen")]
#[command(about = "Stamp forwarding methods for geometry wrapper types", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one wrapper file
    Generate {
        /// Wrapper type name, e.g. RingGeometry
        #[arg(long)]
        geometry_type: String,

        /// Slugified name used for the output file, e.g. ring_geometry
        #[arg(long)]
        geometry_slug: String,

        /// Directory the file is written into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Stamp every registered geometry kind
    All {
        /// Directory the files are written into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Check that committed wrapper files match the template
    Check {
        /// Directory holding the committed files
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            geometry_type,
            geometry_slug,
            out_dir,
        } => {
            let path = r3js_gen::generate(&geometry_type, &geometry_slug, &out_dir)?;
            info!("Generated file: {}", path.display());
        }
        Commands::All { out_dir } => {
            for path in r3js_gen::generate_all(&out_dir)? {
                info!("Generated file: {}", path.display());
            }
        }
        Commands::Check { dir } => {
            let drifted = r3js_gen::check(&dir)?;
            if !drifted.is_empty() {
                for path in &drifted {
                    error!("Out of sync: {}", path.display());
                }
                anyhow::bail!("wrapper files are out of sync; run 'r3js-gen all' to regenerate");
            }
            info!("All wrapper files are in sync");
        }
    }

    Ok(())
}
