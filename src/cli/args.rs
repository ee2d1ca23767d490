use std::path::PathBuf;

use clap::Parser;

/// Simple and easy to use tool for creating and publishing python packages.
#[derive(Debug, Parser)]
#[command(name = "pypiforge", version, disable_version_flag = true)]
pub struct Args {
    /// Package name as it should appear on PyPI. Preferably use dashes to
    /// separate words like "my-package"; underscores are replaced with
    /// dashes
    #[arg(value_name = "PACKAGE_NAME")]
    pub package_name: String,

    /// Directory to create the package in
    #[arg(short = 'd', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Make the source module name from PACKAGE_NAME by replacing dashes
    /// with this value (default: dashes are removed)
    #[arg(long = "replace-char", default_value = "")]
    pub replace_char: String,

    /// Author (default: current OS user)
    #[arg(short = 'a', long)]
    pub author: Option<String>,

    /// Author e-mail (default: AUTHOR@example.com)
    #[arg(short = 'm', long = "author-email")]
    pub author_email: Option<String>,

    /// Package short description
    #[arg(short = 'D', long, default_value = "")]
    pub description: String,

    /// Package home page url, e.g. your project's GitHub page
    #[arg(
        short = 'u',
        long = "home-page-url",
        default_value = "https://example.com"
    )]
    pub home_page_url: String,

    /// Package bug tracker url, e.g. your project's GitHub issues page
    #[arg(
        short = 'U',
        long = "bug-tracker-url",
        default_value = "https://example.com"
    )]
    pub bug_tracker_url: String,

    /// Package keywords
    #[arg(short = 'k', long, default_value = "")]
    pub keywords: String,

    /// Required python version (default: detected from `python3 --version`)
    #[arg(short = 'V', long = "python-version-required")]
    pub python_version_required: Option<String>,

    /// PyPI token
    #[arg(short = 't', long = "pypi-token", default_value = "")]
    pub pypi_token: String,

    /// Test PyPI token
    #[arg(short = 'T', long = "testpypi-token", default_value = "")]
    pub testpypi_token: String,

    /// Overwrite existing files. By default the run exits with an error
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Use wizard-like interactive mode to fill in fields
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),
}
