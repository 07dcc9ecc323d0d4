//! Vecgen CLI entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vecgen_common::TypeTable;
use vecgen_constructors::ConstructorGenerator;

#[derive(Parser)]
#[command(name = "vecgen")]
#[command(about = "Conformance test generator for short-vector types")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate vector constructor tests for one scalar type
    Constructors {
        /// Path to code template
        template: PathBuf,

        /// Type to generate the test for
        #[arg(short = 't', long = "type")]
        ty: String,

        /// Test output file (overwritten if it exists)
        #[arg(short, long)]
        out: PathBuf,

        /// Type table file (defaults to the built-in table)
        #[arg(long)]
        types: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vecgen=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Constructors {
            template,
            ty,
            out,
            types,
        } => {
            let table = match types {
                Some(ref path) => TypeTable::from_file(path)?,
                None => TypeTable::load_default()?,
            };

            if table.find(&ty).is_none() {
                return Err(format!(
                    "invalid type '{}' (choose from: {})",
                    ty,
                    table.type_names().join(", ")
                )
                .into());
            }

            info!("Generating constructor tests for {}", ty);

            let generator = ConstructorGenerator::new(table);
            generator.generate_constructor_tests(&ty, &template, &out)?;

            println!("{} -> {}", template.display(), out.display());
        }
    }

    Ok(())
}
