mod cli_messages;
mod config;
mod consts;
mod desktop;
mod events;
mod logging;
mod museum;
mod planner;
mod session;
mod ui;

use crate::config::{Config, get_config_path, get_storage_path};
use crate::logging::init_console_logger;
use crate::planner::{
    EditOutcome, FileStore, Field, Language, LoadSource, PlannerStore, StreamPrompt, edit_field,
};
use crate::session::{TourOptions, run_headless_mode, run_screen, run_tui_mode, setup_session};
use crate::ui::{Screen, UIConfig, planner::PlannerState};
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Portfolio museum tour and student planner
struct Args {
    /// Planner storage file. Defaults to ~/.museum/storage.json
    #[arg(long, global = true, value_name = "PATH")]
    storage: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk through the portfolio museum
    Tour {
        /// Read commands from stdin instead of taking over the terminal
        #[arg(long, action = ArgAction::SetTrue)]
        headless: bool,

        /// Turn audio cues off for this tour
        #[arg(long, action = ArgAction::SetTrue)]
        no_sound: bool,

        /// Disable the background color
        #[arg(long, action = ArgAction::SetTrue)]
        no_background: bool,

        /// Close the active modal before opening another one. Only headless
        /// tours can open a second modal; the TUI takes modal keys only.
        #[arg(long, action = ArgAction::SetTrue)]
        exclusive_modals: bool,
    },
    /// Read and edit the student planner dashboard
    Planner {
        #[command(subcommand)]
        action: PlannerAction,
    },
    /// Update the saved configuration and print it
    Configure {
        #[arg(long, value_name = "BOOL")]
        sound: Option<bool>,

        #[arg(long, value_name = "BOOL")]
        background: Option<bool>,

        /// Default for --exclusive-modals (applies to headless tours)
        #[arg(long, value_name = "BOOL")]
        exclusive_modals: Option<bool>,
    },
}

#[derive(Subcommand)]
enum PlannerAction {
    /// Print the dashboard
    Show,
    /// Set one field. An empty value leaves the dashboard unchanged.
    Set {
        #[arg(value_enum)]
        field: Field,
        value: String,
    },
    /// Prompt for a new value of one field
    Edit {
        #[arg(value_enum)]
        field: Field,
    },
    /// Forget the saved dashboard
    Reset,
    /// Open the dashboard in the terminal UI
    Open {
        /// Disable the background color
        #[arg(long, action = ArgAction::SetTrue)]
        no_background: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;
    let storage_path = match args.storage {
        Some(path) => path,
        None => get_storage_path()?,
    };

    match args.command {
        Command::Tour {
            headless,
            no_sound,
            no_background,
            exclusive_modals,
        } => {
            let options = TourOptions {
                no_sound,
                no_background,
                exclusive_modals,
            };
            // The TUI owns the terminal, so only headless tours log to it.
            if headless {
                init_console_logger();
            }
            let session = setup_session(&Config::load_or_default(&config_path), options);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Planner { action } => {
            let store = PlannerStore::new(FileStore::new(storage_path));
            match action {
                PlannerAction::Open { no_background } => {
                    let config = Config::load_or_default(&config_path);
                    let ui_config =
                        UIConfig::new(config.with_background_color && !no_background);
                    let state = PlannerState::new(store, ui_config);
                    run_screen(Screen::Planner(Box::new(state))).await
                }
                action => {
                    init_console_logger();
                    run_planner_action(store, action)
                }
            }
        }
        Command::Configure {
            sound,
            background,
            exclusive_modals,
        } => {
            init_console_logger();
            let mut config = Config::load_or_default(&config_path);
            if let Some(sound) = sound {
                config.sound_enabled = sound;
            }
            if let Some(background) = background {
                config.with_background_color = background;
            }
            if let Some(exclusive) = exclusive_modals {
                config.exclusive_modals = exclusive;
            }
            if sound.is_some() || background.is_some() || exclusive_modals.is_some() {
                config
                    .save(&config_path)
                    .map_err(|e| format!("Failed to save config: {}", e))?;
                print_cmd_success!("Configuration saved", "{}", config_path.display());
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn run_planner_action(
    mut store: PlannerStore<FileStore>,
    action: PlannerAction,
) -> Result<(), Box<dyn Error>> {
    match action {
        PlannerAction::Show => {
            let loaded = store.load_with_source();
            match &loaded.source {
                LoadSource::Corrupt(reason) => {
                    print_cmd_warn!("Stored planner data is unreadable", "{}", reason)
                }
                LoadSource::Unreadable(reason) => {
                    print_cmd_warn!("Could not read planner storage", "{}", reason)
                }
                LoadSource::Stored | LoadSource::Missing => {}
            }
            let language = Language::default();
            println!("{}", language.title());
            for field in Field::iter() {
                let label = format!("{}:", language.field_label(field));
                let value = loaded.record.get(field).unwrap_or(language.not_set());
                println!("  {:<13}{}", label, value);
            }
            if loaded.used_defaults() {
                println!("  (showing defaults)");
            }
            Ok(())
        }
        PlannerAction::Set { field, value } => {
            let value = value.trim();
            if value.is_empty() {
                print_cmd_info!("Nothing to save", "empty value for {}", field.key());
                return Ok(());
            }
            store.update(field, value)?;
            print_cmd_success!(
                "Saved",
                "{} = {} in {}",
                field.key(),
                value,
                store.storage().path().display()
            );
            Ok(())
        }
        PlannerAction::Edit { field } => {
            let mut prompt = StreamPrompt::stdio();
            match edit_field(&mut store, &mut prompt, field)? {
                EditOutcome::Updated(record) => {
                    let value = record.get(field).unwrap_or_default();
                    print_cmd_success!("Saved", "{} = {}", field.key(), value);
                }
                EditOutcome::Skipped => print_cmd_info!("Nothing to save", "{} unchanged", field.key()),
            }
            Ok(())
        }
        PlannerAction::Reset => {
            store.reset()?;
            print_cmd_success!(
                "Planner reset",
                "{} cleared, defaults will be shown next time",
                store.storage().path().display()
            );
            Ok(())
        }
        PlannerAction::Open { .. } => Ok(()),
    }
}
