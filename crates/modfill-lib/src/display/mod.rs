//! Terminal display system
//!
//! Semantic APIs for user-facing communication. Separates concerns between
//! logging (tracing) and user interaction (status lines, prompts).

pub mod live;
pub mod mock;
pub mod providers;
pub mod styling;

pub use live::LiveDisplayProvider;
pub use mock::{DisplayCall, MockDisplayProvider};
pub use providers::{
    DisplayProvider, DisplayProviderExt, OperationSummary, PromptProvider, StatusProvider,
};
