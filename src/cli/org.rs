//! Organization command implementations

use colored::Colorize;

use tfe_orgs::client::Organization;
use tfe_orgs::{
    CreateOrganizationInput, DeleteOrganizationInput, ModifyOrganizationInput, Result,
};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, PaginationArgs};
use crate::models::display::{OrgDisplay, org_details};
use crate::output::{json, table};

/// Print one organization in the requested format.
fn print_org(org: &Organization, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", table::format_details(&org_details(org)));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(org)?);
        }
    }
    Ok(())
}

fn dry_run_banner() {
    eprintln!("{}", "DRY RUN - no changes will be made".yellow());
    eprintln!();
}

/// Run the org list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let options = pagination.to_options(ctx.config.preferences.page_size);

    let orgs = ctx.organizations().list(&options).await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<OrgDisplay> = orgs.iter().map(OrgDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json_list(&orgs)?);
        }
    }

    Ok(())
}

/// Run the org get command
pub async fn get(opts: &GlobalOptions, name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.organizations().read(name).await?;
    print_org(&org, ctx.format)
}

/// Run the org create command
pub async fn create(opts: &GlobalOptions, name: &str, email: &str, dry_run: bool) -> Result<()> {
    let input = CreateOrganizationInput::new(name, email);
    input.valid()?;

    if dry_run {
        dry_run_banner();
        eprintln!("Would create organization: {}", name.bold());
        eprintln!("  Email: {}", email);
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    let org = ctx.organizations().create(input).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&org)?),
        OutputFormat::Table => {
            eprintln!("{} Organization \"{}\" created", "✓".green(), org.name);
        }
    }

    Ok(())
}

/// Run the org delete command
pub async fn delete(opts: &GlobalOptions, name: &str, dry_run: bool) -> Result<()> {
    let input = DeleteOrganizationInput::new(name);
    input.valid()?;

    if dry_run {
        dry_run_banner();
        eprintln!("Would delete organization: {}", name.bold());
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    ctx.organizations().delete(input).await?;

    eprintln!("{} Organization \"{}\" deleted", "✓".green(), name);
    Ok(())
}

/// Run the org modify command
pub async fn modify(
    opts: &GlobalOptions,
    name: &str,
    rename: Option<String>,
    email: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let input = ModifyOrganizationInput {
        name: name.to_string(),
        rename,
        email,
    };
    input.valid()?;

    if dry_run {
        dry_run_banner();
        eprintln!("Would modify organization: {}", name.bold());
        if let Some(ref new_name) = input.rename {
            eprintln!("  Name:  {} → {}", name, new_name);
        }
        if let Some(ref new_email) = input.email {
            eprintln!("  Email: {}", new_email);
        }
        if input.rename.is_none() && input.email.is_none() {
            eprintln!("  (no attribute changes)");
        }
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    let org = ctx.organizations().modify(input).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&org)?),
        OutputFormat::Table => {
            eprintln!("{} Organization \"{}\" updated", "✓".green(), org.name);
        }
    }

    Ok(())
}
