//! Two-tab side panel state: controls and chat transcript.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ViewerSession;

/// Which panel tab is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PanelTab {
    /// Viewer controls.
    #[default]
    Controls,
    /// Chat transcript.
    Chat,
}

/// Severity/style of a chat message, by wire token.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Neutral information.
    Info,
    /// Completed action.
    Success,
    /// Recoverable problem.
    Warning,
    /// Failed action.
    Error,
}

/// One chat transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message severity.
    pub kind: MessageKind,
    /// Message text.
    pub text: String,
}

/// Side-panel state: active tab plus the accumulated chat transcript.
#[derive(Debug, Default)]
pub struct PanelState {
    active_tab: PanelTab,
    transcript: Vec<ChatMessage>,
}

impl PanelState {
    /// Currently active tab.
    #[must_use]
    pub fn active_tab(&self) -> PanelTab {
        self.active_tab
    }

    /// Chat messages in arrival order.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }
}

impl ViewerSession {
    /// Switch the active panel tab. Idempotent.
    pub fn set_active_tab(&mut self, tab: PanelTab) {
        self.panel.active_tab = tab;
    }

    /// Append a message to the chat transcript.
    pub fn display_message(&mut self, kind: MessageKind, text: &str) {
        self.panel.transcript.push(ChatMessage {
            kind,
            text: text.to_owned(),
        });
    }
}
