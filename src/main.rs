//! tfe-orgs CLI - manage Terraform Enterprise organizations

use clap::Parser;

mod cli;
mod models;
mod output;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, OrgCommands};
use tfe_orgs::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Initialise logging. `--debug` forces debug output for this crate,
/// otherwise `RUST_LOG` applies with a default of `warn`.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("tfe_orgs", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::List { pagination } => cli::org::list(&opts, &pagination).await,
            OrgCommands::Get { name } => cli::org::get(&opts, &name).await,
            OrgCommands::Create {
                name,
                email,
                dry_run,
            } => cli::org::create(&opts, &name, &email, dry_run).await,
            OrgCommands::Delete { name, dry_run } => cli::org::delete(&opts, &name, dry_run).await,
            OrgCommands::Modify {
                name,
                rename,
                email,
                dry_run,
            } => cli::org::modify(&opts, &name, rename, email, dry_run).await,
        },
        Commands::Version => {
            println!("tfe-orgs version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
