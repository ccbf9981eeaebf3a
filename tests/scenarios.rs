//! End-to-end scenarios: keybindings file → list → key presses → frame.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keyb::domain::{App, Bindings, KeyBind};
use keyb::storage::{print, BindingStore, FileStore};
use keyb::{handle_event, initialize, Action, Config, Viewer};

fn kb(name: &str, key: &str) -> KeyBind {
    KeyBind {
        name: name.to_string(),
        key: key.to_string(),
        ignore_prefix: false,
    }
}

fn bindings() -> Bindings {
    Bindings {
        apps: vec![
            App {
                name: "firefox".to_string(),
                prefix: String::new(),
                keybinds: vec![kb("new tab", "ctrl+t"), kb("close tab", "ctrl+w"), kb("reload", "f5")],
            },
            App {
                name: "tmux".to_string(),
                prefix: "ctrl+b".to_string(),
                keybinds: vec![kb("split vertical", "%")],
            },
            App {
                name: "vim".to_string(),
                prefix: String::new(),
                keybinds: vec![kb("save", ":w"), kb("quit", ":q")],
            },
        ],
    }
}

/// Resolves and applies one key press; returns the actions.
fn press(viewer: &mut Viewer, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
    let key = KeyEvent::new(code, modifiers);
    match viewer.keymap.resolve(&key, viewer.list.mode()) {
        Some(event) => handle_event(&mut viewer.list, &event).1,
        None => Vec::new(),
    }
}

fn type_text(viewer: &mut Viewer, text: &str) {
    for c in text.chars() {
        press(viewer, KeyCode::Char(c), KeyModifiers::NONE);
    }
}

fn selected_label(viewer: &Viewer) -> Option<String> {
    viewer.list.selected_row().map(|row| row.label.clone())
}

#[test]
fn browsing_wraps_around_both_ends() {
    let mut viewer = initialize(&Config::default(), &bindings(), 9).unwrap();
    assert_eq!(viewer.list.height(), 6);

    press(&mut viewer, KeyCode::Char('k'), KeyModifiers::NONE);
    assert_eq!(viewer.list.cursor(), 8);
    assert_eq!(viewer.list.offset(), 3);
    assert_eq!(selected_label(&viewer).as_deref(), Some("quit"));

    press(&mut viewer, KeyCode::Char('j'), KeyModifiers::NONE);
    assert_eq!(viewer.list.cursor(), 0);
    assert_eq!(viewer.list.offset(), 0);
}

#[test]
fn paging_clamps_at_the_ends() {
    let mut viewer = initialize(&Config::default(), &bindings(), 9).unwrap();

    press(&mut viewer, KeyCode::Char('f'), KeyModifiers::CONTROL);
    press(&mut viewer, KeyCode::Char('f'), KeyModifiers::CONTROL);
    assert_eq!(viewer.list.cursor(), 8);

    press(&mut viewer, KeyCode::Char('u'), KeyModifiers::CONTROL);
    assert_eq!(viewer.list.cursor(), 5);

    press(&mut viewer, KeyCode::Char('g'), KeyModifiers::NONE);
    assert_eq!(viewer.list.cursor(), 0);
    press(&mut viewer, KeyCode::Char('b'), KeyModifiers::CONTROL);
    assert_eq!(viewer.list.cursor(), 0);

    press(&mut viewer, KeyCode::Char('G'), KeyModifiers::SHIFT);
    assert_eq!(viewer.list.cursor(), 8);
}

#[test]
fn heading_search_then_escape() {
    let mut viewer = initialize(&Config::default(), &bindings(), 20).unwrap();

    press(&mut viewer, KeyCode::Char('/'), KeyModifiers::NONE);
    type_text(&mut viewer, "h:vim");
    assert_eq!(viewer.list.match_count(), 3);
    assert_eq!(selected_label(&viewer).as_deref(), Some("vim"));
    assert_eq!(viewer.list.current_heading(), "vim");

    press(&mut viewer, KeyCode::Enter, KeyModifiers::NONE);
    press(&mut viewer, KeyCode::Char('j'), KeyModifiers::NONE);
    assert_eq!(selected_label(&viewer).as_deref(), Some("save"));

    press(&mut viewer, KeyCode::Esc, KeyModifiers::NONE);
    assert!(!viewer.list.mode().is_filtering());
    assert_eq!(viewer.list.prompt().value(), "");
    assert_eq!(viewer.list.cursor(), 0);
    assert_eq!(viewer.list.max_rows(), 9);
}

#[test]
fn heading_search_from_the_middle_of_the_list() {
    let mut viewer = initialize(&Config::default(), &bindings(), 20).unwrap();
    press(&mut viewer, KeyCode::Char('j'), KeyModifiers::NONE);
    press(&mut viewer, KeyCode::Char('j'), KeyModifiers::NONE);
    assert_eq!(selected_label(&viewer).as_deref(), Some("close tab"));

    press(&mut viewer, KeyCode::Char('/'), KeyModifiers::NONE);
    type_text(&mut viewer, "h:vim");
    let labels: Vec<String> = viewer.list.visible().visible_rows().map(|row| row.label.clone()).collect();
    assert_eq!(labels, vec!["vim", "save", "quit"]);
    assert_eq!(viewer.list.cursor(), 0);
    assert_eq!(selected_label(&viewer).as_deref(), Some("vim"));
}

#[test]
fn typing_q_in_the_prompt_does_not_quit() {
    let mut viewer = initialize(&Config::default(), &bindings(), 20).unwrap();

    press(&mut viewer, KeyCode::Char('/'), KeyModifiers::NONE);
    let actions = press(&mut viewer, KeyCode::Char('q'), KeyModifiers::NONE);
    assert!(actions.is_empty());
    assert_eq!(viewer.list.prompt().value(), "q");

    let actions = press(&mut viewer, KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(actions, vec![Action::Quit]);
}

#[test]
fn entry_search_highlights_and_counts() {
    let mut viewer = initialize(&Config::default(), &bindings(), 20).unwrap();

    press(&mut viewer, KeyCode::Char('/'), KeyModifiers::NONE);
    type_text(&mut viewer, "split");
    assert_eq!(viewer.list.match_count(), 1);
    assert_eq!(viewer.list.current_heading(), "tmux");

    let frame = keyb::ui::render(&viewer.list, &viewer.chrome, &viewer.theme, 24, 60);
    assert!(frame.contains("1 matches"));
    assert!(frame.contains(&keyb::Theme::fg("#FFA066")));
}

#[test]
fn add_then_print_through_the_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("keyb.toml"));
    store.save(&Bindings::default()).unwrap();

    store.add_entry("vim", "save", ":w", false).unwrap();
    store.add_entry("tmux", "split", "%", true).unwrap();

    let bindings = store.load().unwrap();
    let config = Config::default();
    let table = bindings.to_table(config.settings.sort_keys, &config.row_format(), config.layout());

    let mut out = Vec::new();
    print(&table, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("vim\nsave            :w\n"));
    assert!(text.ends_with("tmux\nsplit           %"));
    assert_eq!(text, table.render_plain());
}

#[test]
fn missing_file_is_created_with_an_example() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested").join("keyb.toml"));

    assert!(store.ensure_exists().unwrap());
    assert!(!store.ensure_exists().unwrap());

    let bindings = store.load().unwrap();
    assert_eq!(bindings.apps[0].name, "example");
}
