//! Catalog typegen CLI
//!
//! Drives the generation pipeline against a built catalog tree, copies
//! catalog files, and lists the known runtime catalog versions.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use catalog_typegen::{
    copy_catalog, resolve_registry, DeclarationCompiler, Generator, Runtime, TypegenConfig,
    KAMELETS_VERSION, TARGET_SCHEMAS,
};

#[derive(Parser)]
#[command(name = "typegen")]
#[command(about = "Generate typed declarations from the catalog schema set")]
#[command(version)]
struct Cli {
    /// Path to a config file (defaults to typegen.toml lookup)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate typed declarations for the allow-listed schemas
    Generate {
        /// Catalog directory holding the root index (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output directory for generated declarations (overrides config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Copy the built catalog tree into a destination directory
    CopyCatalog {
        /// Source directory
        #[arg(short, long)]
        source: PathBuf,

        /// Destination directory
        #[arg(short, long, default_value = "catalog")]
        dest: PathBuf,
    },
    /// List known runtime catalog versions
    Versions {
        /// Restrict to one runtime (main, quarkus, spring-boot, citrus)
        runtime: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = TypegenConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Commands::Generate { catalog, out } => {
            let catalog_dir = catalog.unwrap_or_else(|| config.catalog.dir.clone());
            let out_dir = out.unwrap_or_else(|| config.output.types_dir.clone());
            let index_path = catalog_dir.join(&config.catalog.index_file);

            println!("📦 Catalog type generation");
            println!("  Index: {}", index_path.display());

            let (registry, base_dir) = resolve_registry(&index_path)?;
            println!(
                "  Registry: {} schemas, {} allow-listed",
                registry.len(),
                TARGET_SCHEMAS.len()
            );

            let compiler = DeclarationCompiler;
            let generator = Generator::new(&compiler);
            let exported = generator.run(&registry, &base_dir, &out_dir)?;

            for name in &exported {
                println!("  ✅ {}", name);
            }
            println!(
                "✅ Wrote {} declaration files and index.ts to {}",
                exported.len(),
                out_dir.display()
            );
        }

        Commands::CopyCatalog { source, dest } => {
            println!(
                "📂 Copying catalog from {} to {}...",
                source.display(),
                dest.display()
            );
            let copied = copy_catalog(&source, &dest)?;
            println!("✅ Copied {} files", copied);
        }

        Commands::Versions { runtime } => {
            let runtimes: Vec<Runtime> = match runtime {
                Some(name) => {
                    let runtime: Runtime =
                        name.parse().map_err(|e: String| anyhow::anyhow!(e))?;
                    vec![runtime]
                }
                None => Runtime::ALL.to_vec(),
            };

            for runtime in runtimes {
                println!("{}:", runtime.label());
                for version in runtime.versions() {
                    println!("  - {}", version);
                }
            }
            println!("Kamelets: {}", KAMELETS_VERSION);
        }
    }

    Ok(())
}
