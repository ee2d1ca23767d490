//! Field resolution: defaults, CLI overlay, normalization, the interactive
//! wizard, and the two derived names.

use std::process::Command;

use anyhow::Result;

use crate::cli::{wizard, Args};

/// Floor used when no usable `python3` is found on PATH.
const FALLBACK_PYTHON_REQUIRES: &str = ">=3.8";

/// The resolved set of values templates may reference.
///
/// Built once per run; after [`resolve`] returns it is handed to the
/// materializer unmodified.
#[derive(Debug, Clone)]
pub struct Fields {
    /// Normalized: lower-case, underscores and spaces replaced with dashes.
    pub package_name: String,
    /// `package_name` with dashes replaced by the `--replace-char` value,
    /// safe for use as a Python module name. Always recomputed from the
    /// final `package_name`.
    pub adapted_package_name: String,
    pub author: String,
    pub author_email: String,
    pub description: String,
    pub home_page_url: String,
    pub bug_tracker_url: String,
    pub keywords: String,
    pub python_requires: String,
    pub pypi_token: String,
    pub testpypi_token: String,
}

/// Build the field set for one run: defaults overlaid with CLI values,
/// optionally edited through the wizard, then re-normalized and completed
/// with the derived module name.
pub fn resolve(args: &Args) -> Result<Fields> {
    let mut fields = Fields::from_args(args);

    if args.interactive {
        wizard::run(&mut fields)?;
    }

    // Re-apply normalization in case the wizard changed the name, then
    // derive the module-safe identifier from the final result.
    fields.finalize(&args.replace_char);

    Ok(fields)
}

impl Fields {
    fn from_args(args: &Args) -> Self {
        let author = args.author.clone().unwrap_or_else(default_author);
        let author_email = args
            .author_email
            .clone()
            .unwrap_or_else(|| format!("{author}@example.com"));
        let python_requires = args
            .python_version_required
            .clone()
            .unwrap_or_else(default_python_requires);

        Self {
            package_name: normalize_package_name(&args.package_name),
            adapted_package_name: String::new(),
            author,
            author_email,
            description: args.description.clone(),
            home_page_url: args.home_page_url.clone(),
            bug_tracker_url: args.bug_tracker_url.clone(),
            keywords: args.keywords.clone(),
            python_requires,
            pypi_token: args.pypi_token.clone(),
            testpypi_token: args.testpypi_token.clone(),
        }
    }

    fn finalize(&mut self, replace_char: &str) {
        self.package_name = normalize_package_name(&self.package_name);
        self.adapted_package_name = self.package_name.replace('-', replace_char);
    }

    /// Look up a field by its template name. `python_version_required` is an
    /// alias of `python_requires`.
    pub fn lookup(&self, field: &str) -> Option<&str> {
        let value = match field {
            "package_name" => &self.package_name,
            "adapted_package_name" => &self.adapted_package_name,
            "author" => &self.author,
            "author_email" => &self.author_email,
            "description" => &self.description,
            "home_page_url" => &self.home_page_url,
            "bug_tracker_url" => &self.bug_tracker_url,
            "keywords" => &self.keywords,
            "python_requires" | "python_version_required" => &self.python_requires,
            "pypi_token" => &self.pypi_token,
            "testpypi_token" => &self.testpypi_token,
            _ => return None,
        };
        Some(value)
    }
}

/// Lower-case the name and replace underscores and spaces with dashes.
/// Idempotent: re-applying it never changes the result.
pub fn normalize_package_name(name: &str) -> String {
    name.replace(['_', ' '], "-").to_lowercase()
}

fn default_author() -> String {
    whoami::fallible::username().unwrap_or_else(|_| String::from("unknown"))
}

/// `>=MAJOR.MINOR` of the system `python3`, falling back to a fixed floor
/// when no interpreter answers.
fn default_python_requires() -> String {
    if let Ok(output) = Command::new("python3").arg("--version").output() {
        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let text = if stdout.trim().is_empty() {
                // Older interpreters report the version on stderr.
                String::from_utf8_lossy(&output.stderr).into_owned()
            } else {
                stdout.into_owned()
            };
            if let Some(version) = parse_python_version(text.trim()) {
                return format!(">={version}");
            }
        }
    }
    FALLBACK_PYTHON_REQUIRES.to_string()
}

/// "Python 3.11.4" -> "3.11"
fn parse_python_version(text: &str) -> Option<String> {
    let version = text.strip_prefix("Python ")?;
    let mut parts = version.split('.');
    let major = parts.next()?;
    let minor = parts.next()?;
    if major.is_empty() || minor.is_empty() {
        return None;
    }
    Some(format!("{major}.{minor}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["pypiforge"];
        full.extend_from_slice(argv);
        Args::parse_from(full)
    }

    #[test]
    fn normalization_lowercases_and_dashes() {
        assert_eq!(normalize_package_name("My_Cool-Pkg"), "my-cool-pkg");
        assert_eq!(normalize_package_name("two words here"), "two-words-here");
    }

    #[test]
    fn normalization_is_idempotent() {
        for name in ["My_Cool-Pkg", "already-normal", "MiXeD case_name"] {
            let once = normalize_package_name(name);
            assert_eq!(normalize_package_name(&once), once);
        }
    }

    #[test]
    fn adapted_name_drops_dashes_by_default() {
        let fields = resolve(&args(&["My_Cool-Pkg"])).unwrap();
        assert_eq!(fields.package_name, "my-cool-pkg");
        assert_eq!(fields.adapted_package_name, "mycoolpkg");
    }

    #[test]
    fn adapted_name_uses_the_replace_char() {
        let fields = resolve(&args(&["--replace-char", "_", "my-cool-pkg"])).unwrap();
        assert_eq!(fields.adapted_package_name, "my_cool_pkg");
    }

    #[test]
    fn author_email_defaults_from_author() {
        let fields = resolve(&args(&["-a", "alice", "pkg"])).unwrap();
        assert_eq!(fields.author_email, "alice@example.com");

        let fields = resolve(&args(&["-a", "alice", "-m", "a@b.dev", "pkg"])).unwrap();
        assert_eq!(fields.author_email, "a@b.dev");
    }

    #[test]
    fn explicit_python_version_wins_over_probing() {
        let fields = resolve(&args(&["-V", ">=3.10", "pkg"])).unwrap();
        assert_eq!(fields.python_requires, ">=3.10");
    }

    #[test]
    fn python_version_parsing() {
        assert_eq!(parse_python_version("Python 3.11.4").as_deref(), Some("3.11"));
        assert_eq!(parse_python_version("Python 3.8").as_deref(), Some("3.8"));
        assert_eq!(parse_python_version("not a version"), None);
    }

    #[test]
    fn lookup_covers_every_template_field() {
        let fields = resolve(&args(&["-a", "alice", "pkg"])).unwrap();
        for name in [
            "package_name",
            "adapted_package_name",
            "author",
            "author_email",
            "description",
            "home_page_url",
            "bug_tracker_url",
            "keywords",
            "python_requires",
            "python_version_required",
            "pypi_token",
            "testpypi_token",
        ] {
            assert!(fields.lookup(name).is_some(), "missing field {name}");
        }
        assert!(fields.lookup("force").is_none());
    }
}
