//! Command dispatch: wires parsed arguments to services

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::services::MapService;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::view::NO_TITLE;
use crate::domain::{collect_descendants, DragState, MindMap, NodeId};
use crate::infrastructure::di::ServiceContainer;
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Check { file, no_fail }) => cmd_check(container, file, *no_fail),
        Some(Commands::Incomplete { file }) => cmd_incomplete(container, file),
        Some(Commands::Descendants { file, id }) => {
            cmd_descendants(container, file, (*id).map(NodeId))
        }
        Some(Commands::View {
            file,
            id,
            centered,
            dragging,
        }) => cmd_view(container, file, NodeId(*id), *centered, *dragging),
        Some(Commands::Config { command }) => cmd_config(container, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see `mapnode --help`".to_string(),
        )),
    }
}

#[instrument(skip(container))]
fn cmd_check(container: &ServiceContainer, file: &Path, no_fail: bool) -> CliResult<()> {
    let service = &container.map_service;
    let map = service.load(file)?;
    let report = service.report(&map);

    output::info(&map.to_tree_string());
    output::detail(&format!(
        "{} of {} nodes complete, depth {}",
        report.complete_count(),
        report.total(),
        map.root().height()
    ));

    let root = report
        .root()
        .ok_or_else(|| CliError::Output("empty report".to_string()))?;
    debug!("check: root glyph {}", root.glyph);
    if root.glyph.is_full() {
        output::success("map complete");
        Ok(())
    } else if no_fail {
        output::warning("map incomplete");
        Ok(())
    } else {
        Err(CliError::Incomplete {
            root: root.id,
            incomplete: report.incomplete().count(),
            total: report.total(),
        })
    }
}

#[instrument(skip(container))]
fn cmd_incomplete(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let service = &container.map_service;
    let map = service.load(file)?;
    let report = service.report(&map);

    let incomplete: Vec<_> = report.incomplete().collect();
    if incomplete.is_empty() {
        output::success("all nodes have title and content");
        return Ok(());
    }
    output::header(&format!("{} incomplete node(s)", incomplete.len()));
    for status in incomplete {
        let title = if status.title.is_empty() {
            NO_TITLE
        } else {
            status.title.as_str()
        };
        output::failure(&format!("[{}] {}", status.id, title));
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_descendants(
    container: &ServiceContainer,
    file: &Path,
    id: Option<NodeId>,
) -> CliResult<()> {
    let map = container.map_service.load(file)?;
    output::info(&descendant_ids(&map, id)?);
    Ok(())
}

/// Space separated pre-order ids below `id`, or below the root if `None`.
pub fn descendant_ids(map: &MindMap, id: Option<NodeId>) -> CliResult<String> {
    let node = match id {
        Some(id) => map.get(id).map_err(ApplicationError::from)?,
        None => map.root(),
    };
    Ok(collect_descendants(node).iter().map(|n| n.id).join(" "))
}

#[instrument(skip(container))]
fn cmd_view(
    container: &ServiceContainer,
    file: &Path,
    id: NodeId,
    centered: bool,
    dragging: bool,
) -> CliResult<()> {
    let service = &container.map_service;
    let map = service.load(file)?;
    output::info(&view_json(service, &map, id, centered, dragging)?);
    Ok(())
}

/// Pretty JSON of the view model of node `id`.
pub fn view_json(
    service: &MapService,
    map: &MindMap,
    id: NodeId,
    centered: bool,
    dragging: bool,
) -> CliResult<String> {
    let drag = if dragging {
        DragState::dragging(id)
    } else {
        DragState::new()
    };
    let view = service.view(map, id, &drag, centered)?;
    serde_json::to_string_pretty(&view).map_err(|e| CliError::Output(e.to_string()))
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Template => {
            output::info(&Settings::template());
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this platform"),
        },
    }
    Ok(())
}
