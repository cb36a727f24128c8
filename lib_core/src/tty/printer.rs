use colored::Colorize as _;

#[derive(Debug, Clone, Copy, Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Printer
    }

    pub fn section_open(&self, title: &str) {
        println!("{}", title.bold());
    }

    pub fn section_close(&self) {
        println!("↳ {}\n", "Complete".bold());
    }

    pub fn section_error(&self) {
        println!("{}\n", "↳ Error".bold().red());
    }

    /// Prints an indented `label: value` line inside an open section.
    pub fn detail(&self, label: &str, value: impl std::fmt::Display) {
        println!("  {} {}", format!("{label}:").dimmed(), value.to_string().bold());
    }
}
