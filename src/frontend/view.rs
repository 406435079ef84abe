//! What the page shows in its "Response:" field.

use serde::Serialize;

use crate::error::FetchError;

/// Text shown when the backend cannot be reached or answers badly.
pub const ERROR_TEXT: &str = "Error connecting to backend.";

/// Placeholder shown while a fetch is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// Outcome of the most recent click, as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageView {
    /// Page loaded, nothing fetched yet
    Initial,
    /// The backend answered with this message
    Resolved(String),
    /// The fetch failed
    Failed,
}

impl MessageView {
    pub fn from_fetch(result: &Result<String, FetchError>) -> Self {
        match result {
            Ok(message) => MessageView::Resolved(message.clone()),
            Err(_) => MessageView::Failed,
        }
    }

    pub fn display_text(&self) -> &str {
        match self {
            MessageView::Initial => "",
            MessageView::Resolved(message) => message.as_str(),
            MessageView::Failed => ERROR_TEXT,
        }
    }

    fn state_name(&self) -> &'static str {
        match self {
            MessageView::Initial => "initial",
            MessageView::Resolved(_) => "resolved",
            MessageView::Failed => "failed",
        }
    }

    /// Template context for `index.html`.
    pub fn context(&self) -> ViewContext<'_> {
        ViewContext {
            state: self.state_name(),
            response: self.display_text(),
            loading_text: LOADING_TEXT,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ViewContext<'a> {
    pub state: &'static str,
    pub response: &'a str,
    pub loading_text: &'static str,
}
