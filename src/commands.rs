use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use settings_kit::brush::{BrushState, TextureBrushTool};
use settings_kit::config::{load_config, load_config_from, Config};
use settings_kit::error::{ErrorSeverity, ResultExt, SettingsKitError};
use settings_kit::search::{rank_records, SearchableRecord};
use settings_kit::settings::defaults::builtin_defaults;
use settings_kit::settings::{
    apply_changes, ChangeSink, Changeset, MemorySettings, ResolutionList, SettingsStore,
};
use tracing::{error, info, warn};

use crate::cli::{
    BrushArgs, BrushCommand, Cli, Commands, ResolutionsArgs, SearchArgs, SettingsArgs,
    SettingsCommand,
};

pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    match cli.command {
        Commands::Search(args) => run_search(args),
        Commands::Brush(args) => run_brush(&config, args),
        Commands::Resolutions(args) => run_resolutions(args),
        Commands::Settings(args) => run_settings(&config, args),
    }
}

/// Text shown on stderr when a command fails.
///
/// Domain errors anywhere in the chain are shown by their user message, with
/// the full chain logged at a level matching their severity.
pub(crate) fn failure_message(err: &anyhow::Error) -> String {
    let Some(domain) = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<SettingsKitError>())
    else {
        error!(error = %format!("{:#}", err), "Command failed");
        return format!("error: {:#}", err);
    };

    match domain.severity() {
        ErrorSeverity::Info | ErrorSeverity::Warning => {
            warn!(error = %format!("{:#}", err), "Command failed")
        }
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            error!(error = %format!("{:#}", err), "Command failed")
        }
    }
    format!("error: {}", domain.user_message())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

fn run_search(args: SearchArgs) -> Result<()> {
    let mut pages: Vec<SearchableRecord> = read_json(&args.pages)?;
    for (index, page) in pages.iter_mut().enumerate() {
        page.index = index;
    }
    let ranked = rank_records(&args.query, &pages)?;
    print_json(&ranked)
}

fn run_brush(config: &Config, args: BrushArgs) -> Result<()> {
    let catalog: BTreeMap<String, String> = match &args.textures {
        Some(path) => read_json(path)?,
        None => BTreeMap::new(),
    };

    let state_path = config.get_brush_state_path();
    // An unreadable state file is logged and replaced on the next save
    let state = BrushState::load(&state_path)
        .log_err()
        .flatten()
        .unwrap_or_else(|| BrushState::from_config(&config.get_brush()));
    let mut tool = TextureBrushTool::from_state(state);

    let changed = match args.command {
        BrushCommand::Show => false,
        BrushCommand::Use { id } => {
            tool.drop_texture(id);
            true
        }
        BrushCommand::Pick { row } => {
            if tool.select_history_row(row).is_none() {
                bail!(
                    "history row {} is out of range (history has {} entries)",
                    row,
                    tool.history().len()
                );
            }
            true
        }
        BrushCommand::Shape { shape } => {
            tool.set_shape(shape);
            true
        }
        BrushCommand::Size { size } => {
            let applied = tool.set_size(size);
            if applied != size {
                println!("size clamped to {}", applied);
            }
            true
        }
    };

    if changed {
        tool.state()
            .save(&state_path)
            .with_context(|| format!("failed to save {}", state_path.display()))?;
    }

    println!("shape: {} ({})", tool.shape(), tool.shape().tooltip());
    println!("size: {}", tool.size());
    println!("{}", tool.selected_label(&catalog));
    println!("history:");
    for (row, entry) in tool.history_rows(&catalog).iter().enumerate() {
        println!("  {} {} {}", row, entry.id, entry.file);
    }
    Ok(())
}

fn run_resolutions(args: ResolutionsArgs) -> Result<()> {
    let mut list = ResolutionList::new(&args.modes);
    if let Some(current) = args.current {
        list.highlight(current);
    }
    for (index, item) in list.items().iter().enumerate() {
        let marker = if list.selected() == Some(index) { "*" } else { " " };
        println!("{} {}", marker, item);
    }
    Ok(())
}

/// Prints every applied changeset
struct PrintChanges;

impl ChangeSink for PrintChanges {
    fn process_changed_settings(&mut self, changes: &Changeset) {
        for (category, name) in changes {
            println!("changed: [{}] {}", category, name);
        }
    }
}

fn run_settings(config: &Config, args: SettingsArgs) -> Result<()> {
    let path = config.get_settings_path();
    let mut store = MemorySettings::with_builtin_defaults();
    store.load_user(&path)?;

    match args.command {
        SettingsCommand::Get { category, name } => {
            let value = store
                .get(&category, &name)
                .with_context(|| format!("no setting [{}] {}", category, name))?;
            println!("{}", value);
        }
        SettingsCommand::Set {
            category,
            name,
            value,
        } => {
            let current = store
                .get(&category, &name)
                .with_context(|| format!("no setting [{}] {}", category, name))?;
            let Some(parsed) = current.parse_same_type(&value) else {
                bail!(
                    "'{}' is not a valid {} value for [{}] {}",
                    value,
                    current.type_name(),
                    category,
                    name
                );
            };
            store.set(&category, &name, parsed);

            let mut sinks: Vec<Box<dyn ChangeSink>> = vec![Box::new(PrintChanges)];
            let changes = apply_changes(&mut store, &mut sinks);
            if changes.is_empty() {
                println!("unchanged");
            } else {
                store.save_user(&path)?;
                info!(changed = changes.len(), path = %path.display(), "Settings saved");
            }
        }
        SettingsCommand::List => {
            for (category, name, _) in builtin_defaults() {
                if let Some(value) = store.get(category, name) {
                    println!("[{}] {} = {}", category, name, value);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn failure_message_uses_domain_user_message() {
        let err = anyhow::Error::new(SettingsKitError::UnknownSetting {
            category: "Video".to_string(),
            name: "gamma".to_string(),
        });
        assert_eq!(failure_message(&err), "error: No setting named 'gamma' in [Video]");
    }

    #[test]
    fn failure_message_finds_domain_error_behind_context() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = anyhow::Error::new(SettingsKitError::Io {
            path: "/tmp/brush.json".to_string(),
            source,
        })
        .context("failed to save /tmp/brush.json");
        assert_eq!(failure_message(&err), "error: Could not access /tmp/brush.json");
    }

    #[test]
    fn failure_message_falls_back_to_error_chain() {
        let err = read_json::<Vec<SearchableRecord>>(&PathBuf::from("/nonexistent/pages.json"))
            .unwrap_err();
        assert!(failure_message(&err).starts_with("error: failed to read /nonexistent/pages.json"));
    }
}
