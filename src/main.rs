use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use exo_disposition::catalog::{self, Dataset};
use exo_disposition::cli::{ClassifyArgs, Cli, Commands, PlanetsArgs};
use exo_disposition::ctx::Ctx;
use exo_disposition::io;
use exo_disposition::pipeline::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(args) => run_classify(args)?,
        Commands::Planets(args) => run_planets(args)?,
        Commands::Datasets => {
            for dataset in Dataset::all() {
                println!("{}", dataset);
            }
        }
    }

    Ok(())
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.input,
        args.out,
        args.json,
        args.tsv,
        env!("CARGO_PKG_VERSION"),
    );
    Pipeline::classification().run(&mut ctx)?;

    print!("{}", io::summary::format_summary(&ctx)?);
    if args.rows {
        print!("{}", io::summary::format_verdicts(&ctx.verdicts));
    }
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn run_planets(args: PlanetsArgs) -> Result<()> {
    let dataset = args.dataset;
    let planets = catalog::load_planets(&args.input, dataset, args.limit)?;
    print!("{}", io::cards::format_cards(&planets, dataset));
    Ok(())
}
