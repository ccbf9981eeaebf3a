//! Key strings from the configuration resolved to list events.
//!
//! A key string names one key with optional modifiers joined by `+`, e.g.
//! `ctrl+u`, `alt+backspace`, `G` or `pgdown`. Config fields hold several key
//! strings separated by commas.
//!
//! Resolution depends on the input mode: while the search prompt has focus,
//! printable characters are typed into the query and only control keys
//! navigate; otherwise the normal key table applies.

use super::handler::Event;
use super::modes::InputMode;
use crate::config::KeysConfig;
use crate::domain::error::{KeybError, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// One key with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    /// Normalizes a terminal key event for comparison.
    ///
    /// Shift is folded into the character itself, so `G` matches whether or
    /// not the terminal reports the modifier.
    #[must_use]
    pub fn from_event(event: &KeyEvent) -> Self {
        let mut modifiers = event.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT);
        if matches!(event.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        Self {
            code: event.code,
            modifiers,
        }
    }
}

/// Parses a single key string such as `ctrl+u`.
///
/// # Errors
///
/// Returns [`KeybError::Keymap`] for unknown key names or modifiers.
///
/// # Example
///
/// ```
/// use crossterm::event::{KeyCode, KeyModifiers};
/// use keyb::app::keymap::parse_key;
///
/// let chord = parse_key("ctrl+u")?;
/// assert_eq!(chord.code, KeyCode::Char('u'));
/// assert_eq!(chord.modifiers, KeyModifiers::CONTROL);
/// # Ok::<(), keyb::KeybError>(())
/// ```
pub fn parse_key(key: &str) -> Result<KeyChord> {
    let invalid = |reason: &str| KeybError::Keymap(format!("invalid key \"{key}\": {reason}"));

    let key = key.trim();
    if key.is_empty() {
        return Err(invalid("empty key"));
    }

    // A lone "+" is the plus key, "ctrl++" is ctrl and plus.
    let (mods, name) = if key == "+" {
        ("", "+")
    } else if let Some(mods) = key.strip_suffix("++") {
        (mods, "+")
    } else {
        key.rsplit_once('+').unwrap_or(("", key))
    };

    let mut modifiers = KeyModifiers::NONE;
    for m in mods.split('+').filter(|m| !m.is_empty()) {
        modifiers |= match m.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "meta" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            _ => return Err(invalid(&format!("unknown modifier \"{m}\""))),
        };
    }

    let code = parse_code(name).ok_or_else(|| invalid(&format!("unknown key \"{name}\"")))?;

    if let KeyCode::Char(c) = code {
        if modifiers.contains(KeyModifiers::SHIFT) {
            modifiers.remove(KeyModifiers::SHIFT);
            return Ok(KeyChord {
                code: KeyCode::Char(c.to_ascii_uppercase()),
                modifiers,
            });
        }
    }

    Ok(KeyChord { code, modifiers })
}

fn parse_code(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let code = match name.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdown" | "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        lower => {
            let n: u8 = lower.strip_prefix('f')?.parse().ok()?;
            if (1..=12).contains(&n) {
                KeyCode::F(n)
            } else {
                return None;
            }
        }
    };
    Some(code)
}

/// Parses a comma-separated list of key strings. Blank entries are skipped.
///
/// # Errors
///
/// Returns [`KeybError::Keymap`] if any entry is invalid.
pub fn parse_keys(keys: &str) -> Result<Vec<KeyChord>> {
    keys.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(parse_key)
        .collect()
}

/// Resolved key tables.
#[derive(Debug, Clone)]
pub struct KeyMap {
    normal: Vec<(KeyChord, Event)>,
    prompt: Vec<(KeyChord, Event)>,
    exit_search: Vec<KeyChord>,
}

impl KeyMap {
    /// Builds the key tables from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KeybError::Keymap`] naming the first invalid key string.
    pub fn from_config(keys: &KeysConfig) -> Result<Self> {
        let bind = |table: &mut Vec<(KeyChord, Event)>, field: &str, event: Event| -> Result<()> {
            for chord in parse_keys(field)? {
                table.push((chord, event));
            }
            Ok(())
        };

        let mut normal = Vec::new();
        bind(&mut normal, &keys.quit, Event::Quit)?;
        bind(&mut normal, &keys.up, Event::StepUp)?;
        bind(&mut normal, &keys.down, Event::StepDown)?;
        bind(&mut normal, &keys.up_focus, Event::StepUp)?;
        bind(&mut normal, &keys.down_focus, Event::StepDown)?;
        bind(&mut normal, &keys.half_up, Event::HalfPageUp)?;
        bind(&mut normal, &keys.half_down, Event::HalfPageDown)?;
        bind(&mut normal, &keys.full_up, Event::FullPageUp)?;
        bind(&mut normal, &keys.full_down, Event::FullPageDown)?;
        bind(&mut normal, &keys.first_line, Event::FirstLine)?;
        bind(&mut normal, &keys.last_line, Event::LastLine)?;
        bind(&mut normal, &keys.top, Event::ViewTop)?;
        bind(&mut normal, &keys.middle, Event::ViewMiddle)?;
        bind(&mut normal, &keys.bottom, Event::ViewBottom)?;
        bind(&mut normal, &keys.search, Event::StartSearch)?;
        bind(&mut normal, &keys.clear_search, Event::ClearSearch)?;

        let mut prompt = Vec::new();
        prompt.push((
            KeyChord {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            },
            Event::Quit,
        ));
        bind(&mut prompt, &keys.clear_search, Event::ClearSearch)?;
        bind(&mut prompt, &keys.normal, Event::ExitSearch)?;
        bind(&mut prompt, &keys.focus_results, Event::FocusResults)?;
        bind(&mut prompt, &keys.up_focus, Event::StepUp)?;
        bind(&mut prompt, &keys.down_focus, Event::StepDown)?;
        bind(&mut prompt, &keys.cursor_word_forward, Event::WordForward)?;
        bind(&mut prompt, &keys.cursor_word_backward, Event::WordBackward)?;
        bind(&mut prompt, &keys.cursor_delete_word_backward, Event::DeleteWordBackward)?;
        bind(&mut prompt, &keys.cursor_delete_word_forward, Event::DeleteWordForward)?;
        bind(&mut prompt, &keys.cursor_delete_after_cursor, Event::DeleteAfterCaret)?;
        bind(&mut prompt, &keys.cursor_delete_before_cursor, Event::DeleteBeforeCaret)?;
        bind(&mut prompt, &keys.cursor_line_start, Event::LineStart)?;
        bind(&mut prompt, &keys.cursor_line_end, Event::LineEnd)?;
        for (code, event) in [
            (KeyCode::Backspace, Event::Backspace),
            (KeyCode::Delete, Event::Delete),
            (KeyCode::Left, Event::CaretLeft),
            (KeyCode::Right, Event::CaretRight),
            (KeyCode::Up, Event::StepUp),
            (KeyCode::Down, Event::StepDown),
        ] {
            prompt.push((
                KeyChord {
                    code,
                    modifiers: KeyModifiers::NONE,
                },
                event,
            ));
        }

        let exit_search = parse_keys(&keys.normal)?;

        tracing::debug!(
            normal_keys = normal.len(),
            prompt_keys = prompt.len(),
            "key map built"
        );

        Ok(Self {
            normal,
            prompt,
            exit_search,
        })
    }

    /// Resolves a key press in `mode`.
    ///
    /// Returns `None` for keys without a binding.
    #[must_use]
    pub fn resolve(&self, key: &KeyEvent, mode: InputMode) -> Option<Event> {
        let chord = KeyChord::from_event(key);
        let lookup = |table: &[(KeyChord, Event)]| {
            table
                .iter()
                .find(|(bound, _)| *bound == chord)
                .map(|(_, event)| *event)
        };

        if mode.is_typing() {
            if let Some(event) = lookup(&self.prompt) {
                return Some(event);
            }
            return match chord.code {
                KeyCode::Char(c) if !chord.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                    Some(Event::Char(c))
                }
                _ => None,
            };
        }

        if mode.is_filtering() && self.exit_search.contains(&chord) {
            return Some(Event::ExitSearch);
        }
        lookup(&self.normal)
    }
}

/// Maps a mouse event to a wheel event.
#[must_use]
pub const fn resolve_mouse(event: &MouseEvent) -> Option<Event> {
    match event.kind {
        MouseEventKind::ScrollUp => Some(Event::ScrollUp),
        MouseEventKind::ScrollDown => Some(Event::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::SearchFocus;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn keymap() -> KeyMap {
        KeyMap::from_config(&KeysConfig::default()).unwrap()
    }

    #[test]
    fn parses_modifiers_and_names() {
        assert_eq!(
            parse_key("alt+backspace").unwrap(),
            KeyChord {
                code: KeyCode::Backspace,
                modifiers: KeyModifiers::ALT,
            }
        );
        assert_eq!(parse_key("pgdown").unwrap().code, KeyCode::PageDown);
        assert_eq!(parse_key("f5").unwrap().code, KeyCode::F(5));
        assert_eq!(parse_key("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key("+").unwrap().code, KeyCode::Char('+'));
        assert_eq!(parse_key("ctrl++").unwrap().modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn shift_letter_is_uppercase() {
        assert_eq!(parse_key("shift+g").unwrap(), parse_key("G").unwrap());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(parse_key("hyper+x"), Err(KeybError::Keymap(_))));
        assert!(matches!(parse_key("f13"), Err(KeybError::Keymap(_))));
        assert!(matches!(parse_key("bogus"), Err(KeybError::Keymap(_))));
        assert!(matches!(parse_keys("j, ,bogus"), Err(KeybError::Keymap(_))));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let keys = KeysConfig {
            quit: "q, nope".to_string(),
            ..KeysConfig::default()
        };
        assert!(KeyMap::from_config(&keys).is_err());
    }

    #[test]
    fn normal_mode_bindings() {
        let map = keymap();
        let normal = InputMode::Normal;
        assert_eq!(map.resolve(&press(KeyCode::Char('j'), KeyModifiers::NONE), normal), Some(Event::StepDown));
        assert_eq!(map.resolve(&press(KeyCode::Up, KeyModifiers::NONE), normal), Some(Event::StepUp));
        assert_eq!(map.resolve(&press(KeyCode::Char('G'), KeyModifiers::SHIFT), normal), Some(Event::LastLine));
        assert_eq!(map.resolve(&press(KeyCode::Char('g'), KeyModifiers::NONE), normal), Some(Event::FirstLine));
        assert_eq!(map.resolve(&press(KeyCode::Char('d'), KeyModifiers::CONTROL), normal), Some(Event::HalfPageDown));
        assert_eq!(map.resolve(&press(KeyCode::Char('/'), KeyModifiers::NONE), normal), Some(Event::StartSearch));
        assert_eq!(map.resolve(&press(KeyCode::Char('d'), KeyModifiers::ALT), normal), Some(Event::ClearSearch));
        assert_eq!(map.resolve(&press(KeyCode::Esc, KeyModifiers::NONE), normal), None);
        assert_eq!(map.resolve(&press(KeyCode::Char('x'), KeyModifiers::NONE), normal), None);
    }

    #[test]
    fn prompt_types_characters() {
        let map = keymap();
        let typing = InputMode::Filtering(SearchFocus::Prompt);
        assert_eq!(map.resolve(&press(KeyCode::Char('j'), KeyModifiers::NONE), typing), Some(Event::Char('j')));
        assert_eq!(map.resolve(&press(KeyCode::Char('Q'), KeyModifiers::SHIFT), typing), Some(Event::Char('Q')));
        assert_eq!(map.resolve(&press(KeyCode::Char('j'), KeyModifiers::CONTROL), typing), Some(Event::StepDown));
        assert_eq!(map.resolve(&press(KeyCode::Enter, KeyModifiers::NONE), typing), Some(Event::FocusResults));
        assert_eq!(map.resolve(&press(KeyCode::Esc, KeyModifiers::NONE), typing), Some(Event::ExitSearch));
        assert_eq!(map.resolve(&press(KeyCode::Char('c'), KeyModifiers::CONTROL), typing), Some(Event::Quit));
        assert_eq!(map.resolve(&press(KeyCode::Backspace, KeyModifiers::ALT), typing), Some(Event::DeleteWordBackward));
        assert_eq!(map.resolve(&press(KeyCode::Home, KeyModifiers::NONE), typing), Some(Event::LineStart));
        assert_eq!(map.resolve(&press(KeyCode::Backspace, KeyModifiers::NONE), typing), Some(Event::Backspace));
        assert_eq!(map.resolve(&press(KeyCode::Char('z'), KeyModifiers::CONTROL), typing), None);
    }

    #[test]
    fn results_use_normal_keys_and_escape_exits() {
        let map = keymap();
        let results = InputMode::Filtering(SearchFocus::Results);
        assert_eq!(map.resolve(&press(KeyCode::Char('k'), KeyModifiers::NONE), results), Some(Event::StepUp));
        assert_eq!(map.resolve(&press(KeyCode::Esc, KeyModifiers::NONE), results), Some(Event::ExitSearch));
        assert_eq!(map.resolve(&press(KeyCode::Char('/'), KeyModifiers::NONE), results), Some(Event::StartSearch));
    }

    #[test]
    fn wheel_events() {
        let scroll = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(resolve_mouse(&scroll(MouseEventKind::ScrollDown)), Some(Event::ScrollDown));
        assert_eq!(resolve_mouse(&scroll(MouseEventKind::Moved)), None);
    }
}
