//! Kiln CLI - Provision CloudFormation stacks from versioned templates

use clap::Parser;

use kiln_cli::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
