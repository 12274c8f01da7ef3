//! Color-aware styling for status output
//!
//! Semantic styles and symbols built on `console`, with ASCII fallbacks when
//! color is disabled.

use console::Style;

/// Symbol set used in status lines
#[derive(Debug, Clone, Copy)]
struct Symbols {
    checkmark: &'static str,
    cross: &'static str,
    warning: &'static str,
    info: &'static str,
    arrow: &'static str,
    bullet: &'static str,
}

const UNICODE_SYMBOLS: Symbols = Symbols {
    checkmark: "✓",
    cross: "✗",
    warning: "!",
    info: "·",
    arrow: "→",
    bullet: "•",
};

const ASCII_SYMBOLS: Symbols = Symbols {
    checkmark: "+",
    cross: "x",
    warning: "!",
    info: "-",
    arrow: ">",
    bullet: "*",
};

/// Style manager for semantic status formatting
#[derive(Debug, Clone)]
pub struct StyleManager {
    color: bool,
    symbols: Symbols,
}

impl StyleManager {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            symbols: if color { UNICODE_SYMBOLS } else { ASCII_SYMBOLS },
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    fn paint(&self, style: Style, text: &str) -> String {
        style.force_styling(self.color).apply_to(text).to_string()
    }

    pub fn style_success(&self, text: &str) -> String {
        self.paint(Style::new().green(), text)
    }

    pub fn style_error(&self, text: &str) -> String {
        self.paint(Style::new().red(), text)
    }

    pub fn style_warning(&self, text: &str) -> String {
        self.paint(Style::new().yellow(), text)
    }

    pub fn style_info(&self, text: &str) -> String {
        self.paint(Style::new().cyan(), text)
    }

    pub fn style_emphasis(&self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    pub fn style_subtle(&self, text: &str) -> String {
        self.paint(Style::new().dim(), text)
    }

    /// Format success message with symbol and styling
    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_success(self.symbols.checkmark), message)
    }

    /// Format error message with symbol and styling
    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_error(self.symbols.cross), message)
    }

    /// Format warning message with symbol and styling
    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_warning(self.symbols.warning), message)
    }

    /// Format info message with symbol and styling
    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.style_info(self.symbols.info), message)
    }

    /// Format working/progress message (info color with arrow)
    pub fn format_working(&self, message: &str) -> String {
        format!("{} {}", self.style_info(self.symbols.arrow), message)
    }

    pub fn bullet(&self) -> &'static str {
        self.symbols.bullet
    }
}

#[cfg(test)]
mod tests {
    include!("styling.test.rs");
}
