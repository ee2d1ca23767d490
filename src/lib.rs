//! Scaffolds publish-ready PyPI packaging projects.
//!
//! Given a package name and metadata, renders a fixed catalog of templates
//! (packaging manifests, an executable build script, a minimal source
//! skeleton) into a new project tree, refusing to clobber existing files
//! unless forced. A `~/.pypirc` credentials file is written only when none
//! exists.

pub mod cli;
pub mod error;
pub mod fields;
pub mod materialize;
pub mod template;

pub use error::Error;
pub use fields::{normalize_package_name, Fields};
pub use materialize::{materialize, Materialized, Outcome};
pub use template::{catalog, has_placeholders, render, Placement, TemplateEntry};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
