use inksac::prelude::*;

/// Styles diagnostics for the terminal, falling back to plain text when the
/// terminal does not support color.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticStyle {
    color_support: ColorSupport,
}

impl DiagnosticStyle {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        message.style(error_style).to_string()
    }

    pub fn warning(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let warning_style = Style::builder().foreground(Color::Yellow).build();

        message.style(warning_style).to_string()
    }
}

impl Default for DiagnosticStyle {
    fn default() -> Self {
        Self::new()
    }
}
