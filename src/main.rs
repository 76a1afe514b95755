//! Command-line presentation shell for chemfinder.

use std::process::ExitCode;

use clap::Parser;

use chemfinder::{endpoints, Lookup, NameResolver};

/// Resolve an IUPAC chemical name to a SMILES string and known synonyms.
#[derive(Parser)]
#[command(name = "chemfinder", version)]
struct Cli {
    /// Chemical name to look up; multiple words are joined with spaces
    #[arg(required = true)]
    name: Vec<String>,

    /// Base URL of the Chemical Identifier Resolver instance to query
    #[arg(long, default_value = endpoints::DEFAULT_ENDPOINT)]
    endpoint: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let name = cli.name.join(" ");

    let resolver = match NameResolver::with_endpoint(&cli.endpoint) {
        Ok(resolver) => resolver,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match resolver.resolve(&name).await {
        Lookup::Resolved { smiles, synonyms } => {
            println!("SMILES: {}", smiles);
            println!("Other Names: {}", synonyms.join(endpoints::SYNONYM_SEPARATOR));
            ExitCode::SUCCESS
        }
        Lookup::Failed(err) => {
            log::debug!("lookup for {:?} failed: {}", name, err);
            eprintln!("'{}' NOT FOUND", name);
            ExitCode::FAILURE
        }
    }
}
