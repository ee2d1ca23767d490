//! Renders the catalog and writes it to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::Error;
use crate::fields::Fields;
use crate::template::{render, Placement, TemplateEntry};

/// What happened to a single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written,
    /// The destination existed and the entry is preserve-exempt
    /// (credentials file). Nothing was touched.
    SkippedExisting,
}

/// Per-entry result of a run, in catalog order.
#[derive(Debug)]
pub struct Materialized {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Render every catalog entry and write it to its destination.
///
/// A pre-existing file fails the whole run with [`Error::FileExists`] unless
/// `force` is set or the entry is preserve-exempt. Files written before the
/// conflict are left in place; re-running with `force` completes the tree.
pub fn materialize(
    catalog: &[TemplateEntry],
    project_path: &Path,
    source_path: &Path,
    fields: &Fields,
    force: bool,
) -> Result<Vec<Materialized>> {
    fs::create_dir_all(source_path).with_context(|| {
        format!(
            "Failed to create source directory: {}",
            source_path.display()
        )
    })?;

    let mut report = Vec::with_capacity(catalog.len());

    for entry in catalog {
        let destination = match &entry.placement {
            Placement::SourceRoot => source_path,
            Placement::ProjectRoot => project_path,
            Placement::External(path) => path.as_path(),
        };
        let full_path = destination.join(entry.name);

        if full_path.exists() {
            if entry.preserve_existing {
                report.push(Materialized {
                    path: full_path,
                    outcome: Outcome::SkippedExisting,
                });
                continue;
            }
            if !force {
                return Err(Error::FileExists { path: full_path }.into());
            }
        }

        let contents = if entry.requires_fields {
            render(entry.name, entry.template_str, fields)?
        } else {
            entry.template_str.to_string()
        };

        fs::write(&full_path, contents)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;

        if entry.executable {
            set_executable(&full_path)?;
        }

        report.push(Materialized {
            path: full_path,
            outcome: Outcome::Written,
        });
    }

    Ok(report)
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to mark {} executable", path.display()))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
