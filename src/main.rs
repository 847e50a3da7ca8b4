use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use doorman::{AnswerPipeline, ConfigLoader, OpenAiBackend};

#[derive(Parser)]
#[command(name = "doorman")]
#[command(
    version,
    about = "Illustrated answer pipeline for chat assistants"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, default_value = "doorman.toml")]
    config: PathBuf,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question and render the composite answer
    Ask {
        #[arg(help = "The question to answer")]
        question: String,
        #[arg(
            long,
            help = "Save the illustration to this path instead of printing its URL"
        )]
        image_file: Option<PathBuf>,
    },

    /// Show the effective configuration (merged from all sources)
    Config,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConfigLoader::load_from_file(&cli.config)?;

    match cli.command {
        Commands::Ask {
            question,
            image_file,
        } => {
            let backend = Arc::new(OpenAiBackend::new(&config.backend)?);
            let pipeline = AnswerPipeline::new(backend, &config);

            let rt = Runtime::new()?;
            let outcome = rt.block_on(pipeline.answer_question(&question));

            print_outcome(&outcome);

            if let Some(path) = image_file {
                if outcome.descriptor.is_empty() {
                    eprintln!("No descriptor available, skipping image download");
                } else {
                    let (_, bytes) =
                        rt.block_on(pipeline.illustration_bytes(&outcome.descriptor))?;
                    match bytes {
                        Some(bytes) => {
                            std::fs::write(&path, bytes)?;
                            println!("Saved illustration to {}", path.display());
                        }
                        None => eprintln!("Illustration could not be generated"),
                    }
                }
            }
        }
        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn print_outcome(outcome: &doorman::PipelineOutcome) {
    // First rendered message is the summary/descriptor header; style it for
    // the terminal instead of chat markdown.
    println!(
        "{}\n{}",
        style(&outcome.summary).bold(),
        style(&outcome.descriptor).italic()
    );

    for message in doorman::present::render(outcome).into_iter().skip(1) {
        println!("{message}");
    }

    println!(
        "{}",
        style(format!("estimated cost: ${:.4}", outcome.total_cost)).dim()
    );
}
