//! Sequential interactive prompt flow. Ten fields, fixed order; an empty
//! answer keeps the value shown as the default.

use anyhow::Result;
use console::Term;
use inquire::Text;

use crate::cli::theme;
use crate::fields::Fields;

pub fn run(fields: &mut Fields) -> Result<()> {
    let _ = Term::stdout().clear_screen();
    theme::print_banner();

    fields.package_name = prompt("Package name", &fields.package_name)?;
    fields.home_page_url = prompt("Home page url", &fields.home_page_url)?;
    fields.bug_tracker_url = prompt("Bug tracker url", &fields.bug_tracker_url)?;
    fields.pypi_token = prompt("Pypi token", &fields.pypi_token)?;
    fields.testpypi_token = prompt("Testpypi token", &fields.testpypi_token)?;
    fields.author = prompt("Author", &fields.author)?;
    fields.author_email = prompt("Author email", &fields.author_email)?;
    fields.keywords = prompt("Keywords", &fields.keywords)?;
    fields.description = prompt("Description", &fields.description)?;
    fields.python_requires = prompt("Python requires", &fields.python_requires)?;

    Ok(())
}

fn prompt(label: &str, current: &str) -> Result<String> {
    let answer = Text::new(label)
        .with_default(current)
        .with_render_config(theme::wizard_theme())
        .prompt()?;
    Ok(answer)
}
