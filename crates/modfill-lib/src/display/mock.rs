//! Mock display provider implementation for testing
//!
//! Records all display calls for assertion in tests and replays scripted
//! answers to prompts in order.

use super::providers::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock implementation of DisplayProvider that records all calls
#[derive(Clone, Default)]
pub struct MockDisplayProvider {
    calls: Arc<Mutex<Vec<DisplayCall>>>,
    responses: Arc<Mutex<VecDeque<Option<String>>>>,
}

impl MockDisplayProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for upcoming prompts; `None` simulates closed input
    pub fn with_responses<I, S>(self, responses: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        {
            let mut queue = self.responses.lock().unwrap();
            queue.extend(responses.into_iter().map(|r| r.map(Into::into)));
        }
        self
    }

    /// Get all recorded display calls for testing assertions
    pub fn get_calls(&self) -> Vec<DisplayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Check if a specific call was made
    pub fn has_call(&self, expected: &DisplayCall) -> bool {
        self.get_calls().contains(expected)
    }

    /// Get count of calls of a specific type
    pub fn count_calls(&self, call_type: &str) -> usize {
        self.get_calls()
            .iter()
            .filter(|call| call.call_type() == call_type)
            .count()
    }

    /// Prompt messages shown so far
    pub fn prompts(&self) -> Vec<String> {
        self.get_calls()
            .into_iter()
            .filter_map(|call| match call {
                DisplayCall::Prompt { message } => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Scripted answers not yet consumed
    pub fn pending_responses(&self) -> usize {
        self.responses.lock().unwrap().len()
    }

    fn record(&self, call: DisplayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DisplayProvider for MockDisplayProvider {
    fn status(&self) -> Box<dyn StatusProvider + '_> {
        Box::new(MockStatusProvider { parent: self })
    }

    fn prompt(&self) -> Box<dyn PromptProvider + '_> {
        Box::new(MockPromptProvider { parent: self })
    }
}

/// Recorded display call for testing
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Checking { task: String },
    Success { item: String, details: String },
    Error { item: String, details: String },
    Warning { message: String },
    Info { message: String },
    Message { text: String },
    Subtle { text: String },
    List { items: Vec<String> },
    Complete { task: String },
    Section { title: String },
    Prompt { message: String },
}

impl DisplayCall {
    pub fn call_type(&self) -> &'static str {
        match self {
            DisplayCall::Checking { .. } => "checking",
            DisplayCall::Success { .. } => "success",
            DisplayCall::Error { .. } => "error",
            DisplayCall::Warning { .. } => "warning",
            DisplayCall::Info { .. } => "info",
            DisplayCall::Message { .. } => "message",
            DisplayCall::Subtle { .. } => "subtle",
            DisplayCall::List { .. } => "list",
            DisplayCall::Complete { .. } => "complete",
            DisplayCall::Section { .. } => "section",
            DisplayCall::Prompt { .. } => "prompt",
        }
    }
}

struct MockStatusProvider<'a> {
    parent: &'a MockDisplayProvider,
}

impl StatusProvider for MockStatusProvider<'_> {
    fn checking(&self, task: &str) {
        self.parent.record(DisplayCall::Checking {
            task: task.to_string(),
        });
    }

    fn success(&self, item: &str, details: &str) {
        self.parent.record(DisplayCall::Success {
            item: item.to_string(),
            details: details.to_string(),
        });
    }

    fn error(&self, item: &str, details: &str) {
        self.parent.record(DisplayCall::Error {
            item: item.to_string(),
            details: details.to_string(),
        });
    }

    fn warning(&self, message: &str) {
        self.parent.record(DisplayCall::Warning {
            message: message.to_string(),
        });
    }

    fn info(&self, message: &str) {
        self.parent.record(DisplayCall::Info {
            message: message.to_string(),
        });
    }

    fn message(&self, text: &str) {
        self.parent.record(DisplayCall::Message {
            text: text.to_string(),
        });
    }

    fn subtle(&self, text: &str) {
        self.parent.record(DisplayCall::Subtle {
            text: text.to_string(),
        });
    }

    fn list(&self, items: &[&str]) {
        self.parent.record(DisplayCall::List {
            items: items.iter().map(|s| s.to_string()).collect(),
        });
    }

    fn complete(&self, task: &str) {
        self.parent.record(DisplayCall::Complete {
            task: task.to_string(),
        });
    }

    fn section(&self, title: &str) {
        self.parent.record(DisplayCall::Section {
            title: title.to_string(),
        });
    }
}

struct MockPromptProvider<'a> {
    parent: &'a MockDisplayProvider,
}

impl PromptProvider for MockPromptProvider<'_> {
    fn input(&self, message: &str) -> Option<String> {
        self.parent.record(DisplayCall::Prompt {
            message: message.to_string(),
        });
        // An exhausted script behaves like closed stdin
        self.parent.responses.lock().unwrap().pop_front().flatten()
    }
}
