use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process;

use smartdoc::errors::SmartDocError;
use smartdoc::generation::{CannedGenerator, DocGenerator, OpenAiGenerator};
use smartdoc::smartdoc::SmartDoc;

/// Swagger documentation for Express routes, from call-site snippets.
#[derive(Parser)]
#[command(
    name = "smartdoc",
    about = "Generate Swagger docs for Express routes from call-site snippets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new smartdoc project
    Init {
        /// Project path (default: current directory)
        path: Option<String>,
    },
    /// Resolve the service method referenced by a snippet
    Resolve {
        /// File holding the selected snippet, or '-' for stdin
        snippet: String,
        /// Project path
        #[arg(short, long)]
        path: Option<String>,
        /// Output the full report as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Resolve a snippet and generate a documentation comment
    Generate {
        /// File holding the selected snippet, or '-' for stdin
        snippet: String,
        /// Project path
        #[arg(short, long)]
        path: Option<String>,
        /// API key for the completions endpoint (default: SMARTDOC_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
        /// Use the canned offline generator instead of the HTTP endpoint
        #[arg(long)]
        offline: bool,
        /// Output the result as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> smartdoc::errors::Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let project_path = resolve_path(path);
            SmartDoc::init(&project_path)?;
            println!("Initialized smartdoc at {}", project_path.display());
        }
        Commands::Resolve {
            snippet,
            path,
            json,
        } => {
            let project_path = resolve_path(path);
            let sd = SmartDoc::open(&project_path)?;
            let snippet = read_snippet(&snippet)?;
            let report = sd.resolve(&snippet)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.summary);
                println!();
                println!("{}", report.combined_text);
            }
        }
        Commands::Generate {
            snippet,
            path,
            api_key,
            offline,
            json,
        } => {
            let project_path = resolve_path(path);
            let sd = SmartDoc::open(&project_path)?;
            let snippet = read_snippet(&snippet)?;

            let generator: Box<dyn DocGenerator> = if offline {
                Box::new(CannedGenerator)
            } else {
                let key = api_key
                    .or_else(|| std::env::var("SMARTDOC_API_KEY").ok())
                    .ok_or_else(|| SmartDocError::Config {
                        message: "no API key was provided; pass --api-key or set SMARTDOC_API_KEY"
                            .to_string(),
                    })?;
                Box::new(OpenAiGenerator::new(sd.get_config(), key))
            };

            let result = sd.generate(&snippet, generator.as_ref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.report.summary);
                if let Some(comment) = &result.comment {
                    println!();
                    println!("{}", comment);
                }
            }
        }
    }
    Ok(())
}

/// Reads the snippet from a file, or from stdin when the argument is `-`.
fn read_snippet(arg: &str) -> smartdoc::errors::Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(arg)?)
    }
}

/// Resolves an optional path argument to an absolute `PathBuf`.
///
/// Defaults to the current working directory if no path is provided.
fn resolve_path(path: Option<String>) -> PathBuf {
    match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
