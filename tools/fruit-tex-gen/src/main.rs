//! fruit-tex-gen - procedural fruit texture generator
//!
//! Writes full square fruit textures (for UV mapping onto spheres) as PNG
//! files, either as a standard set, as per-size variant sets, or one at a time.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fruit_tex::batch::{BatchReport, OutputLayout, TextureSink};
use fruit_tex::prelude::*;
use std::path::{Path, PathBuf};

mod menu;

use menu::Choice;

#[derive(Parser, Debug)]
#[command(name = "fruit-tex-gen")]
#[command(about = "Generate procedural fruit textures")]
#[command(version)]
struct Cli {
    /// Path to a fruit-tex.toml configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output root directory (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fixed run seed (overrides config)
    #[arg(long, conflicts_with = "entropy")]
    seed: Option<u64>,

    /// Draw a fresh seed from OS entropy
    #[arg(long)]
    entropy: bool,

    /// Generate one texture at a time instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Standard set: one texture per fruit at the standard size
    Standard,

    /// Variant sets: one directory per size
    Variants,

    /// Standard and variant sets
    Both,

    /// Ask which sets to generate (default)
    Menu,

    /// Generate a single texture
    Single {
        /// Fruit name from the catalog
        #[arg(short, long)]
        fruit: String,

        /// Edge length in pixels
        #[arg(short, long)]
        size: u32,

        /// Gradient kind (radial, linear, diagonal); defaults to the fruit's recipe
        #[arg(short, long)]
        gradient: Option<GradientKind>,

        /// Output file (default: <root>/<fruit>.png)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl Cli {
    fn seed_policy(&self, config: &GeneratorConfig) -> SeedPolicy {
        match (self.seed, self.entropy) {
            (Some(seed), _) => SeedPolicy::Fixed(seed),
            (None, true) => SeedPolicy::Entropy,
            (None, false) => config.seed_policy(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let config = GeneratorConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let catalog = config.catalog()?;
    let root = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.root.clone());
    let policy = cli.seed_policy(&config);

    let choice = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Standard => Choice::Standard,
        Commands::Variants => Choice::Variants,
        Commands::Both => Choice::Both,
        Commands::Menu => {
            let stdin = std::io::stdin();
            menu::prompt(
                &mut stdin.lock(),
                &mut std::io::stdout(),
                config.generation.standard_size,
            )?
        }
        Commands::Single {
            fruit,
            size,
            gradient,
            out,
        } => {
            let spec = catalog.require(&fruit)?;
            let out = out.unwrap_or_else(|| OutputLayout::Flat.path_for(&root, &spec.name, size));
            return single(spec, size, gradient, policy, &out);
        }
    };

    let seed = policy.resolve();
    let generator = BatchGenerator::new(&root, seed)
        .parallel(config.generation.parallel && !cli.sequential);

    let mut report = BatchReport::default();
    if matches!(choice, Choice::Standard | Choice::Both) {
        println!("Generating full square fruit textures...");
        report.merge(generator.run(&catalog, &config.standard_plan(), &PngSink));
    }
    if matches!(choice, Choice::Variants | Choice::Both) {
        println!("Generating size variants...");
        report.merge(generator.run(&catalog, &config.variant_plan(), &PngSink));
    }

    summarize(&report, &root, seed);
    if !report.is_success() {
        anyhow::bail!(
            "{} of {} textures failed",
            report.failures.len(),
            report.total()
        );
    }
    Ok(())
}

fn single(
    spec: &FruitSpec,
    size: u32,
    gradient: Option<GradientKind>,
    policy: SeedPolicy,
    out: &Path,
) -> Result<()> {
    let mut rng = task_rng(policy.resolve(), &spec.name, size);
    let buffer = assemble_with(&GenerationRequest::new(spec, size), gradient, &mut rng)
        .with_context(|| format!("Failed to generate {}", spec.name))?;
    PngSink
        .persist(buffer, out)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    println!("Created {}", out.display());
    Ok(())
}

fn summarize(report: &BatchReport, root: &Path, seed: u64) {
    for path in &report.written {
        println!("Created {}", path.display());
    }
    for failure in &report.failures {
        println!(
            "Failed {} ({}x{}): {}",
            failure.fruit, failure.size, failure.size, failure.error
        );
    }
    println!();
    println!("Output directory: {}", root.display());
    println!("Seed: {seed}");
    println!(
        "Total files: {} written, {} failed",
        report.written.len(),
        report.failures.len()
    );
}
