//! Live display provider implementation
//!
//! Production implementation of display providers: styled status lines on
//! stdout and dialoguer text prompts. Active span spinners are suspended
//! around every write and prompt so output does not interleave.

use super::providers::*;
use super::styling::StyleManager;
use dialoguer::Input;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use tracing_indicatif::suspend_tracing_indicatif;

/// Live implementation of DisplayProvider
pub struct LiveDisplayProvider {
    styling: StyleManager,
}

impl LiveDisplayProvider {
    pub fn new(color: bool) -> Self {
        Self {
            styling: StyleManager::new(color),
        }
    }

    pub fn styling(&self) -> &StyleManager {
        &self.styling
    }
}

impl DisplayProvider for LiveDisplayProvider {
    fn status(&self) -> Box<dyn StatusProvider + '_> {
        Box::new(LiveStatusProvider {
            styling: &self.styling,
        })
    }

    fn prompt(&self) -> Box<dyn PromptProvider + '_> {
        Box::new(LivePromptProvider {
            color: self.styling.color_enabled(),
        })
    }
}

fn emit(line: String) {
    suspend_tracing_indicatif(|| println!("{}", line));
}

/// Live implementation of StatusProvider
struct LiveStatusProvider<'a> {
    styling: &'a StyleManager,
}

impl StatusProvider for LiveStatusProvider<'_> {
    fn checking(&self, task: &str) {
        emit(self.styling.format_working(task));
    }

    fn success(&self, item: &str, details: &str) {
        let message = if details.is_empty() {
            item.to_string()
        } else {
            format!("{}: {}", item, details)
        };
        emit(self.styling.format_success(&message));
    }

    fn error(&self, item: &str, details: &str) {
        let message = if details.is_empty() {
            item.to_string()
        } else {
            format!("{}: {}", item, details)
        };
        emit(self.styling.format_error(&message));
    }

    fn warning(&self, message: &str) {
        emit(self.styling.format_warning(message));
    }

    fn info(&self, message: &str) {
        emit(self.styling.format_info(message));
    }

    fn message(&self, text: &str) {
        emit(text.to_string());
    }

    fn subtle(&self, text: &str) {
        emit(self.styling.style_subtle(text));
    }

    fn list(&self, items: &[&str]) {
        for item in items {
            emit(format!("  {} {}", self.styling.bullet(), item));
        }
    }

    fn complete(&self, task: &str) {
        emit(self.styling.format_success(task));
    }

    fn section(&self, title: &str) {
        emit(String::new());
        emit(self.styling.style_emphasis(title));
    }
}

/// Live implementation of PromptProvider
struct LivePromptProvider {
    color: bool,
}

impl PromptProvider for LivePromptProvider {
    fn input(&self, message: &str) -> Option<String> {
        let theme: Box<dyn Theme> = if self.color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };

        suspend_tracing_indicatif(|| {
            Input::<String>::with_theme(theme.as_ref())
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()
                .ok()
        })
    }
}
