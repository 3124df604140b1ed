//! Output styling.

use owo_colors::OwoColorize;
use reckon_kernel::Output;

/// Renders session outputs, optionally in colour.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    color: bool,
}

impl Styler {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Render one output as display text.
    pub fn paint(&self, output: &Output) -> String {
        let text = output.to_string();
        if !self.color {
            return text;
        }
        match output {
            Output::Calculation(_) => text.green().to_string(),
            Output::Diagnostic(_) => text.yellow().to_string(),
            Output::DomainError(_) => text.red().bold().to_string(),
            Output::Menu => text.cyan().to_string(),
            Output::Farewell => text,
        }
    }
}
