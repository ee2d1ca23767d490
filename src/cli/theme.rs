use console::style;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

pub fn wizard_theme() -> RenderConfig<'static> {
    RenderConfig {
        prompt_prefix: Styled::new(">").with_fg(Color::LightCyan),
        answer: StyleSheet::new().with_fg(Color::LightCyan),
        default_value: StyleSheet::new().with_fg(Color::DarkGrey),
        help_message: StyleSheet::new()
            .with_fg(Color::DarkGrey)
            .with_attr(Attributes::ITALIC),
        ..Default::default()
    }
}

pub fn print_banner() {
    println!();
    println!("  {}", style("pypiforge").cyan().bold());
    println!("  {}", style("Interactive Setup").dim());
    println!();
    println!(
        "  {}",
        style("Default values are shown in parentheses and used when the answer is empty.").dim()
    );
    println!(
        "  {}",
        style("Tokens are needed to successfully push to PyPI.").dim()
    );
    println!();
}

pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn print_hint(message: &str) {
    println!("{} {}", style("Hint:").blue(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", style("Warning:").yellow(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red(), message);
}
