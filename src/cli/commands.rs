//! Command dispatch: translates CLI arguments into taxonomy service calls.

use std::io;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::instrument;

use crate::application::services::TaxonomyService;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{config_file_path, Settings};
use crate::domain::{CategoryId, DomainError};
use crate::infrastructure::TomlStoreRepository;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Add { name, parent }) => _add(&build_service(cli)?, name, parent.as_deref()),
        Some(Commands::List { parent }) => _list(&build_service(cli)?, parent.as_deref()),
        Some(Commands::Show { id }) => _show(&build_service(cli)?, id),
        Some(Commands::Tree) => _tree(&build_service(cli)?),
        Some(Commands::Remove { id }) => _remove(&build_service(cli)?, id),
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Wire the service against the configured (or overridden) snapshot path.
fn build_service(cli: &Cli) -> CliResult<TaxonomyService> {
    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => Settings::load()?.store_path,
    };
    let repo = Arc::new(TomlStoreRepository::new(store_path));
    Ok(TaxonomyService::new(repo))
}

fn parse_id(raw: &str) -> CliResult<CategoryId> {
    raw.parse()
        .map_err(|_| CliError::InvalidArgs(format!("not a valid category id: {raw}")))
}

#[instrument(skip(service))]
fn _add(service: &TaxonomyService, name: &str, parent: Option<&str>) -> CliResult<()> {
    let parent = parent.map(parse_id).transpose()?;
    let category = service.create(name, parent)?;
    output::success(&format!("created '{}'", category.name));
    output::info(&category.id);
    Ok(())
}

#[instrument(skip(service))]
fn _list(service: &TaxonomyService, parent: Option<&str>) -> CliResult<()> {
    let parent = parent.map(parse_id).transpose()?;
    let categories = service.list(parent)?;
    if categories.is_empty() {
        output::warning("no categories found");
        return Ok(());
    }
    for category in &categories {
        output::info(&output::category_row(category));
    }
    Ok(())
}

#[instrument(skip(service))]
fn _show(service: &TaxonomyService, id: &str) -> CliResult<()> {
    let id = parse_id(id)?;
    // absent id is the CLI's 404
    let category = service
        .find(&id)?
        .ok_or_else(|| CliError::from(ApplicationError::Domain(DomainError::NotFound(id))))?;
    output::header(&category.name);
    output::detail(&format!("id:         {}", category.id));
    match category.parent_id {
        Some(parent) => output::detail(&format!("parent:     {parent}")),
        None => output::detail("parent:     - (root)"),
    }
    output::detail(&format!("active:     {}", category.is_active));
    output::detail(&format!("created at: {}", category.created_at.to_rfc3339()));
    Ok(())
}

#[instrument(skip(service))]
fn _tree(service: &TaxonomyService) -> CliResult<()> {
    let store = service.load_store()?;
    if store.is_empty() {
        output::warning("no categories found");
        return Ok(());
    }
    for tree in output::hierarchy_trees(&store) {
        output::info(&tree);
    }
    Ok(())
}

#[instrument(skip(service))]
fn _remove(service: &TaxonomyService, id: &str) -> CliResult<()> {
    let id = parse_id(id)?;
    let removed = service.delete(&id)?;
    output::success(&format!("removed {removed} categories"));
    Ok(())
}

fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    let settings = match &cli.store {
        Some(path) => Settings {
            store_path: path.clone(),
        },
        None => Settings::load()?,
    };
    match command {
        ConfigCommands::Show => {
            // a failure here is ours, not the user's arguments
            let rendered = toml::to_string_pretty(&settings).map_err(|e| {
                CliError::from(ApplicationError::OperationFailed {
                    context: "render settings".to_string(),
                    source: Box::new(e),
                })
            })?;
            output::info(&rendered.trim_end());
        }
        ConfigCommands::Path => {
            match config_file_path() {
                Some(path) => output::info(&format!("config: {}", path.display())),
                None => output::info("config: <no home directory>"),
            }
            output::info(&format!("store:  {}", settings.store_path.display()));
        }
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
