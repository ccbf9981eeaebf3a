//! Exporting the list outside the interactive view.
//!
//! `--print` writes the aligned plain list to stdout; `--export FILE` writes
//! the keybindings as JSON or TOML, or the aligned plain list for any other
//! extension.

use super::file::Format;
use crate::domain::error::{KeybError, Result};
use crate::domain::{Bindings, Table};
use std::io::Write;
use std::path::Path;

/// Output format of an export, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Toml,
    /// Aligned plain text, as printed by `--print`.
    Plain,
}

impl ExportFormat {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Plain,
        }
    }
}

/// Writes the plain projection of `table` to `out`: rows joined by `\n`,
/// nothing after the last one.
///
/// # Errors
///
/// Returns [`KeybError::Io`] if writing fails.
///
/// # Example
///
/// ```
/// use keyb::domain::{Layout, Row, RowFormat, Table};
/// use keyb::storage::export::print;
///
/// let table = Table::with_rows(vec![Row::heading("vim")], RowFormat::default(), Layout::default());
/// let mut out = Vec::new();
/// print(&table, &mut out)?;
/// assert_eq!(out, b"vim");
/// # Ok::<(), keyb::KeybError>(())
/// ```
pub fn print<W: Write>(table: &Table, out: &mut W) -> Result<()> {
    if table.is_empty() {
        return Ok(());
    }
    write!(out, "{}", table.render_plain())?;
    out.flush()?;
    Ok(())
}

/// Renders the export document for `format`.
///
/// # Errors
///
/// Returns [`KeybError::Export`] if serialization fails.
pub fn render(bindings: &Bindings, table: &Table, format: ExportFormat) -> Result<String> {
    let as_export_error = |e: KeybError| KeybError::Export(e.to_string());
    match format {
        ExportFormat::Json => Format::Json.serialize(bindings).map_err(as_export_error),
        ExportFormat::Toml => Format::Toml.serialize(bindings).map_err(as_export_error),
        ExportFormat::Plain => Ok(table.render_plain()),
    }
}

/// Writes an export of the list to `path`.
///
/// # Errors
///
/// Returns [`KeybError::Export`] if the file cannot be written.
pub fn export(bindings: &Bindings, table: &Table, path: &Path) -> Result<()> {
    let format = ExportFormat::from_path(path);
    let _span = tracing::debug_span!("export", path = ?path, format = ?format).entered();

    let text = render(bindings, table, format)?;
    std::fs::write(path, text)
        .map_err(|e| KeybError::Export(format!("failed to write \"{}\": {e}", path.display())))?;

    tracing::debug!("export written");
    Ok(())
}
