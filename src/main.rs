//! Command-line entry point and interactive host loop.
//!
//! # Usage
//!
//! ```text
//! keyb                         open the interactive list
//! keyb -p                      print the aligned list to stdout
//! keyb -e keys.json            export to JSON, TOML or plain text
//! keyb -k work.toml -c my.toml use another keybindings or config file
//! keyb add "vim; save; :w"     append a keybinding
//! ```
//!
//! # Host Loop
//!
//! The loop is single-threaded and blocking: read one terminal event, map it
//! through the [`KeyMap`](keyb::KeyMap), hand it to
//! [`handle_event`](keyb::handle_event), draw a frame, repeat. Mouse and
//! resize events bypass the key map.
//!
//! ```text
//! crossterm event → KeyMap / resolve_mouse → Event → handle_event → render
//! ```

use clap::{Parser, Subcommand};
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use crossterm::terminal;
use keyb::app::keymap::resolve_mouse;
use keyb::domain::bindings::parse_entry;
use keyb::storage::{export, print, BindingStore, FileStore};
use keyb::{handle_event, initialize, Action, Config, Event, Viewer};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// A terminal cheatsheet for your keybindings.
#[derive(Debug, Parser)]
#[command(name = "keyb", version, about)]
struct Cli {
    /// Print the list to stdout and exit
    #[arg(short, long)]
    print: bool,

    /// Export to FILE (.json, .toml, anything else as plain text) and exit
    #[arg(short, long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Keybindings file
    #[arg(short, long, value_name = "FILE", env = "KEYB_PATH")]
    key: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "KEYB_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a keybinding, given as "<app>; <name>; <key>"
    Add {
        binding: String,

        /// Never show the application prefix for this keybinding
        #[arg(short = 'i', long)]
        ignore_prefix: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "keyb failed");
            eprintln!("keyb: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> keyb::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    keyb::observability::init_logging(config.log_level().as_deref(), None);

    let store = FileStore::new(config.keyb_path(cli.key.as_deref())?);
    if store.ensure_exists()? {
        eprintln!("keyb: created {}", store.path().display());
    }

    if let Some(Command::Add {
        binding,
        ignore_prefix,
    }) = cli.command
    {
        let entry = parse_entry(&binding)?;
        return store.add_entry(&entry.app, &entry.name, &entry.key, ignore_prefix);
    }

    let bindings = store.load()?;

    if cli.print || cli.export.is_some() {
        let table = bindings.to_table(config.settings.sort_keys, &config.row_format(), config.layout());
        if let Some(path) = &cli.export {
            export(&bindings, &table, path)?;
        }
        if cli.print {
            print(&table, &mut io::stdout().lock())?;
        }
        return Ok(());
    }

    let (cols, rows) = terminal::size()?;
    let mut viewer = initialize(&config, &bindings, usize::from(rows))?;
    run_interactive(&mut viewer, cols, rows)
}

/// Runs the list in a terminal of `cols` x `rows`; `viewer` must already be
/// sized for `rows`.
fn run_interactive(viewer: &mut Viewer, mut cols: u16, mut rows: u16) -> keyb::Result<()> {
    let _guard = keyb::infrastructure::terminal::enter(viewer.list.mouse_enabled())?;
    let mut stdout = io::stdout();

    let mut redraw = true;
    loop {
        if redraw {
            let frame = keyb::ui::render(
                &viewer.list,
                &viewer.chrome,
                &viewer.theme,
                usize::from(rows),
                usize::from(cols),
            );
            stdout.write_all(frame.as_bytes())?;
            stdout.flush()?;
        }

        let event = match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                viewer.keymap.resolve(&key, viewer.list.mode())
            }
            TermEvent::Mouse(mouse) => resolve_mouse(&mouse),
            TermEvent::Resize(c, r) => {
                cols = c;
                rows = r;
                Some(Event::Resize {
                    height: viewer.chrome.viewport_height(usize::from(r)),
                })
            }
            _ => None,
        };
        let Some(event) = event else {
            redraw = false;
            continue;
        };

        let (changed, actions) = handle_event(&mut viewer.list, &event);
        if actions.contains(&Action::Quit) {
            break;
        }
        redraw = changed || matches!(event, Event::Resize { .. });
    }

    Ok(())
}
