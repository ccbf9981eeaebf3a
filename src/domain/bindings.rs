//! Source data for the list: applications and their keybindings.
//!
//! [`Bindings`] is what the keybindings file deserializes into. It converts
//! 1:1 into one [`Table`] per application, joined in the order selected by
//! [`GroupOrder`].
//!
//! # File format
//!
//! ```toml
//! [[apps]]
//! name = "tmux"
//! prefix = "ctrl+b"
//!
//! [[apps.keybinds]]
//! name = "split vertical"
//! key = "%"
//!
//! [[apps.keybinds]]
//! name = "next pane"
//! key = "alt+right"
//! ignore_prefix = true
//! ```

use super::error::{KeybError, Result};
use super::layout::Layout;
use super::row::{Row, RowFormat};
use super::table::Table;
use serde::{Deserialize, Serialize};

/// A single keybinding of an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBind {
    /// Description shown in the label column.
    pub name: String,
    /// Key expression shown in the key column.
    #[serde(default)]
    pub key: String,
    /// Do not print the application prefix for this binding.
    #[serde(default, skip_serializing_if = "is_false")]
    pub ignore_prefix: bool,
}

/// An application: one group of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// Group heading.
    pub name: String,
    /// Prefix key printed in front of every binding, e.g. `ctrl+b`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    #[serde(default)]
    pub keybinds: Vec<KeyBind>,
}

/// All applications, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bindings {
    #[serde(default)]
    pub apps: Vec<App>,
}

/// Order in which application groups are joined into the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupOrder {
    /// As written in the file.
    #[default]
    File,
    /// By name, case-sensitive.
    Sensitive,
    /// By name, ignoring case.
    Insensitive,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// A keybinding parsed from the `"<app>; <name>; <key>"` command-line form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub app: String,
    pub name: String,
    pub key: String,
}

/// Parses `"<app>; <name>; <key>"`.
///
/// Fields are trimmed. Anything after the third separator belongs to the key,
/// so a key may itself contain `;`.
///
/// # Errors
///
/// Returns [`KeybError::Bindings`] when fewer than three fields are given or
/// the app or name is blank.
///
/// # Example
///
/// ```
/// use keyb::domain::bindings::parse_entry;
///
/// let entry = parse_entry("tmux; split vertical; %")?;
/// assert_eq!(entry.app, "tmux");
/// assert_eq!(entry.key, "%");
/// # Ok::<(), keyb::KeybError>(())
/// ```
pub fn parse_entry(binding: &str) -> Result<Entry> {
    let invalid = || KeybError::Bindings("binding must be given in format [app; name; keybind]".to_string());

    let mut parts = binding.splitn(3, ';').map(str::trim);
    let (Some(app), Some(name), Some(key)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    if app.is_empty() || name.is_empty() {
        return Err(invalid());
    }

    Ok(Entry {
        app: app.to_string(),
        name: name.to_string(),
        key: key.to_string(),
    })
}

impl App {
    /// Converts the application into a table: its heading followed by one
    /// entry per keybinding.
    #[must_use]
    pub fn to_table(&self, format: &RowFormat, layout: Layout) -> Table {
        let mut rows = Vec::with_capacity(self.keybinds.len() + 1);
        rows.push(Row::heading(&self.name));
        rows.extend(self.keybinds.iter().map(|kb| {
            Row::entry(&kb.name, &kb.key, &self.prefix, &self.name, kb.ignore_prefix)
        }));
        Table::with_rows(rows, format.clone(), layout)
    }
}

impl Bindings {
    /// Builds the full list table.
    ///
    /// One table per application, joined in `order`. Sorting is stable, so
    /// applications with equal names keep their file order.
    ///
    /// # Example
    ///
    /// ```
    /// use keyb::domain::{Bindings, GroupOrder, Layout, RowFormat};
    ///
    /// let bindings: Bindings = toml::from_str(r#"
    ///     [[apps]]
    ///     name = "vim"
    ///     [[apps.keybinds]]
    ///     name = "save"
    ///     key = ":w"
    /// "#).unwrap();
    ///
    /// let table = bindings.to_table(GroupOrder::File, &RowFormat::default(), Layout::default());
    /// assert_eq!(table.row_count(), 2);
    /// ```
    #[must_use]
    pub fn to_table(&self, order: GroupOrder, format: &RowFormat, layout: Layout) -> Table {
        let mut apps: Vec<&App> = self.apps.iter().collect();
        match order {
            GroupOrder::File => {}
            GroupOrder::Sensitive => apps.sort_by(|a, b| a.name.cmp(&b.name)),
            GroupOrder::Insensitive => {
                apps.sort_by_key(|app| app.name.to_lowercase());
            }
        }

        let mut table = Table::new(format.clone(), layout);
        for app in apps {
            table.join(app.to_table(format, layout));
        }

        tracing::debug!(
            apps = self.apps.len(),
            rows = table.row_count(),
            order = ?order,
            "built list table"
        );
        table
    }

    /// Appends a keybinding to `app_name`, creating the application when it
    /// does not exist yet.
    pub fn add_entry(&mut self, app_name: &str, name: &str, key: &str, ignore_prefix: bool) {
        let keybind = KeyBind {
            name: name.to_string(),
            key: key.to_string(),
            ignore_prefix,
        };

        if let Some(app) = self.apps.iter_mut().find(|app| app.name == app_name) {
            app.keybinds.push(keybind);
        } else {
            self.apps.push(App {
                name: app_name.to_string(),
                prefix: String::new(),
                keybinds: vec![keybind],
            });
        }
    }

    /// Bindings written to a freshly created keybindings file.
    #[must_use]
    pub fn example(path: &str) -> Self {
        Self {
            apps: vec![App {
                name: "example".to_string(),
                prefix: String::new(),
                keybinds: vec![KeyBind {
                    name: "add your keys in".to_string(),
                    key: path.to_string(),
                    ignore_prefix: false,
                }],
            }],
        }
    }

    /// Total number of keybindings across applications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.apps.iter().map(|app| app.keybinds.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb(name: &str, key: &str) -> KeyBind {
        KeyBind {
            name: name.to_string(),
            key: key.to_string(),
            ignore_prefix: false,
        }
    }

    fn app(name: &str, prefix: &str, keybinds: Vec<KeyBind>) -> App {
        App {
            name: name.to_string(),
            prefix: prefix.to_string(),
            keybinds,
        }
    }

    fn scenario() -> Bindings {
        Bindings {
            apps: vec![
                app("firefox", "", vec![kb("new tab", "ctrl+t"), kb("close tab", "ctrl+w"), kb("reload", "f5")]),
                app("tmux", "ctrl+b", vec![kb("split vertical", "%")]),
                app("vim", "", vec![kb("save", ":w"), kb("quit", ":q")]),
            ],
        }
    }

    #[test]
    fn groups_join_in_file_order() {
        let table = scenario().to_table(GroupOrder::File, &RowFormat::default(), Layout::default());

        assert_eq!(table.row_count(), 9);
        let headings: Vec<usize> = table
            .visible_rows()
            .enumerate()
            .filter(|(_, row)| row.is_heading())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(headings, vec![0, 4, 6]);
    }

    #[test]
    fn prefix_is_rendered_before_key() {
        let table = scenario().to_table(GroupOrder::File, &RowFormat::default(), Layout::default());
        let tmux_entry = table.visible_row(5).map(|row| row.cells(table.format()).1);
        assert_eq!(tmux_entry.as_deref(), Some("ctrl+b ; %"));
    }

    #[test]
    fn entries_carry_their_group() {
        let table = scenario().to_table(GroupOrder::File, &RowFormat::default(), Layout::default());
        assert_eq!(table.visible_row(8).map(|r| r.parent_heading.as_str()), Some("vim"));
    }

    #[test]
    fn group_order_sorts_by_name() {
        let bindings = Bindings {
            apps: vec![app("b", "", vec![]), app("C", "", vec![]), app("a", "", vec![])],
        };
        let names = |order| {
            bindings
                .to_table(order, &RowFormat::default(), Layout::default())
                .visible_rows()
                .map(|row| row.label.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(names(GroupOrder::File), vec!["b", "C", "a"]);
        assert_eq!(names(GroupOrder::Sensitive), vec!["C", "a", "b"]);
        assert_eq!(names(GroupOrder::Insensitive), vec!["a", "b", "C"]);
    }

    #[test]
    fn add_entry_appends_or_creates() {
        let mut bindings = scenario();
        bindings.add_entry("vim", "write all", ":wa", false);
        bindings.add_entry("helix", "save", ":w", true);

        assert_eq!(bindings.apps[2].keybinds.len(), 3);
        assert_eq!(bindings.apps[3].name, "helix");
        assert!(bindings.apps[3].keybinds[0].ignore_prefix);
        assert_eq!(bindings.len(), 8);
    }

    #[test]
    fn parse_entry_trims_fields() {
        let entry = parse_entry("  vim ;  save file ; :w ").unwrap();
        assert_eq!(
            entry,
            Entry {
                app: "vim".to_string(),
                name: "save file".to_string(),
                key: ":w".to_string(),
            }
        );
    }

    #[test]
    fn parse_entry_keeps_separators_in_key() {
        let entry = parse_entry("tmux; last window; ctrl+b ; l").unwrap();
        assert_eq!(entry.key, "ctrl+b ; l");
    }

    #[test]
    fn parse_entry_rejects_short_input() {
        assert!(matches!(parse_entry(""), Err(KeybError::Bindings(_))));
        assert!(matches!(parse_entry("vim; save"), Err(KeybError::Bindings(_))));
        assert!(matches!(parse_entry(" ; save; :w"), Err(KeybError::Bindings(_))));
    }

    #[test]
    fn toml_round_trip_skips_defaults() {
        let mut bindings = Bindings::default();
        bindings.add_entry("vim", "save", ":w", false);
        let text = toml::to_string(&bindings).unwrap();
        assert!(!text.contains("ignore_prefix"));
        assert!(!text.contains("prefix"));
        let parsed: Bindings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, bindings);
    }
}
