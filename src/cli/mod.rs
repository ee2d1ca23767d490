mod args;
mod theme;
pub(crate) mod wizard;

pub use args::Args;
pub use theme::{print_banner, print_error, print_hint, print_success, print_warning};

use anyhow::Result;

use crate::fields;
use crate::materialize::{materialize, Outcome};
use crate::template;

/// Resolve fields, derive the project paths, and materialize the catalog.
pub fn run(args: &Args) -> Result<()> {
    let fields = fields::resolve(args)?;

    let project_path = args.dir.join(&fields.package_name);
    let source_path = project_path
        .join("src")
        .join(&fields.adapted_package_name);

    let catalog = template::catalog();
    let report = materialize(&catalog, &project_path, &source_path, &fields, args.force)?;

    for file in &report {
        if file.outcome == Outcome::SkippedExisting {
            theme::print_warning(&format!(
                "File exists [{}]. We don't overwrite it",
                file.path.display()
            ));
        }
    }

    theme::print_success(&format!(
        "Package '{}' created at {}",
        fields.package_name,
        project_path.display()
    ));
    theme::print_hint(&format!(
        "Now '{}/build --push' to build and push to PyPI",
        fields.package_name
    ));
    theme::print_hint("If necessary to change package version use 'VERSION' file");
    theme::print_hint(
        "If token is valid but 403 error appears maybe package name conflicts with an existing one in PyPI",
    );

    Ok(())
}
