//! Display provider traits for dependency injection
//!
//! Abstracts all user communication behind testable traits so the resolve
//! pipeline can be exercised without a console.

use std::fmt;

/// Provider trait for all user-facing communication
pub trait DisplayProvider {
    /// Display status messages with semantic meaning
    fn status(&self) -> Box<dyn StatusProvider + '_>;

    /// Display interactive prompts
    fn prompt(&self) -> Box<dyn PromptProvider + '_>;
}

/// Provider trait for status updates and user feedback
pub trait StatusProvider {
    /// Display a working/checking status
    fn checking(&self, task: &str);

    /// Display a success status with optional details
    fn success(&self, item: &str, details: &str);

    /// Display an error status with details
    fn error(&self, item: &str, details: &str);

    /// Display a warning status
    fn warning(&self, message: &str);

    /// Display an info status
    fn info(&self, message: &str);

    /// Display a simple message without status symbols
    fn message(&self, text: &str);

    /// Display a subtle/secondary message
    fn subtle(&self, text: &str);

    /// Display a list of items with bullets
    fn list(&self, items: &[&str]);

    /// Display a completion message
    fn complete(&self, task: &str);

    /// Display a header for a section of work
    fn section(&self, title: &str);
}

/// Provider trait for interactive prompts
pub trait PromptProvider {
    /// Read one line of free text; `None` when input is unavailable
    fn input(&self, message: &str) -> Option<String>;
}

/// Summary information for batch operations
#[derive(Debug, Clone, PartialEq)]
pub struct OperationSummary {
    pub successful: usize,
    pub failed: usize,
    pub total: usize,
}

impl OperationSummary {
    pub fn new(successful: usize, failed: usize) -> Self {
        Self {
            successful,
            failed,
            total: successful + failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.successful > 0
    }

    pub fn is_partial_success(&self) -> bool {
        self.successful > 0 && self.failed > 0
    }

    pub fn is_failure(&self) -> bool {
        self.failed > 0 && self.successful == 0
    }
}

impl fmt::Display for OperationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} resolved, {} unresolved", self.successful, self.failed)
    }
}

/// Extension trait for common display patterns used in commands
pub trait DisplayProviderExt: DisplayProvider {
    /// Display an operation summary with appropriate status
    fn display_summary(&self, operation: &str, summary: &OperationSummary) {
        let status = self.status();

        if summary.is_success() {
            status.complete(&format!("{} completed successfully", operation));
            status.subtle(&format!(
                "   {} mod{} resolved",
                summary.successful,
                if summary.successful == 1 { "" } else { "s" }
            ));
        } else if summary.is_partial_success() {
            status.warning(&format!("{} completed with unresolved entries", operation));
            status.subtle(&format!("   {}", summary));
        } else if summary.is_failure() {
            status.error(operation, "nothing resolved");
            status.subtle(&format!(
                "   {} mod{} unresolved",
                summary.failed,
                if summary.failed == 1 { "" } else { "s" }
            ));
        } else {
            status.info(&format!("{} - no mods requested", operation));
        }
    }
}

impl<T: DisplayProvider + ?Sized> DisplayProviderExt for T {}

#[cfg(test)]
mod tests {
    include!("providers.test.rs");
}
