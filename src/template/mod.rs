//! Template entries and the placeholder renderer.
//!
//! Templates use `{field_name}` placeholders; `{{` and `}}` are escapes for
//! literal braces (the generated build script relies on this for shell
//! parameter expansions).

mod catalog;

pub use catalog::catalog;

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;
use crate::fields::Fields;

/// Where a rendered file lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Root of the generated project.
    ProjectRoot,
    /// Under `src/<adapted_package_name>/`.
    SourceRoot,
    /// An absolute path independent of the project location.
    External(PathBuf),
}

/// One file to be generated.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// Destination file name.
    pub name: &'static str,
    /// Fixed template body.
    pub template_str: &'static str,
    /// Computed once at catalog construction; a validation/fast-path signal,
    /// not a semantic switch. A body with no placeholders renders
    /// identically either way, but the verbatim path also permits unescaped
    /// braces.
    pub requires_fields: bool,
    pub placement: Placement,
    /// Grant execute permission after writing.
    pub executable: bool,
    /// Never overwrite an existing file at the destination; report it as
    /// skipped instead. Used for the credentials file.
    pub preserve_existing: bool,
}

impl TemplateEntry {
    pub(crate) fn new(
        name: &'static str,
        template_str: &'static str,
        placement: Placement,
    ) -> Self {
        Self {
            name,
            template_str,
            requires_fields: has_placeholders(template_str),
            placement,
            executable: false,
            preserve_existing: false,
        }
    }

    pub(crate) fn executable(mut self) -> Self {
        self.executable = true;
        self
    }

    pub(crate) fn preserve_existing(mut self) -> Self {
        self.preserve_existing = true;
        self
    }
}

/// Matches brace escapes and `{identifier}` placeholders. The escape
/// alternatives come first so `{{name}}` reads as a literal `{name}`.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// True if the body contains at least one unescaped `{field_name}`.
pub fn has_placeholders(template_str: &str) -> bool {
    PLACEHOLDER
        .captures_iter(template_str)
        .any(|caps| caps.get(1).is_some())
}

/// Substitute every placeholder in `template_str` from `fields`.
///
/// Pure: no I/O, no mutation. A placeholder naming a field absent from
/// [`Fields`] fails with [`Error::UnknownField`].
pub fn render(name: &str, template_str: &str, fields: &Fields) -> Result<String, Error> {
    let mut out = String::with_capacity(template_str.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template_str) {
        let m = caps.get(0).unwrap();
        out.push_str(&template_str[last..m.start()]);
        match m.as_str() {
            "{{" => out.push('{'),
            "}}" => out.push('}'),
            _ => {
                let field = caps.get(1).unwrap().as_str();
                let value = fields.lookup(field).ok_or_else(|| Error::UnknownField {
                    file: name.to_string(),
                    field: field.to_string(),
                })?;
                out.push_str(value);
            }
        }
        last = m.end();
    }

    out.push_str(&template_str[last..]);
    Ok(out)
}
