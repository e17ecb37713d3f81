//! Conversational panel
//!
//! Holds the visible transcript. Each non-blank user input produces exactly
//! one agent call and exactly one assistant reply, successful or not.

use shared::models::{
    AgentMessage, AgentResponse, RecommendRequest, StructuredPayload, VenueSuggestion,
};
use uuid::Uuid;

use crate::gateway::Gateway;
use crate::session::SessionId;

pub const GREETING: &str =
    "Hi — I'm GoodFoods. Tell me what kind of table you want or try: 'Table for 2 tonight at 8pm'.";
pub const FAILURE_REPLY: &str = "Sorry, something went wrong. Please try again.";
pub const INITIAL_REPLIES: [&str; 3] = [
    "Table for 2 tonight",
    "Find a nice place for 4",
    "Show me Indian restaurants",
];

/// Suggested replies shown under the last assistant message
pub const MAX_SUGGESTED_REPLIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
    pub structured: Option<StructuredPayload>,
}

impl ChatMessage {
    fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            text: text.into(),
            structured: None,
        }
    }

    fn assistant(text: impl Into<String>, structured: Option<StructuredPayload>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            text: text.into(),
            structured,
        }
    }

    pub fn venues(&self) -> &[VenueSuggestion] {
        self.structured
            .as_ref()
            .map(StructuredPayload::venues)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct ChatPanel {
    session: SessionId,
    messages: Vec<ChatMessage>,
    suggested_replies: Vec<String>,
    suggestions: Vec<VenueSuggestion>,
}

impl ChatPanel {
    pub fn new(session: SessionId) -> Self {
        Self {
            session,
            messages: vec![ChatMessage::assistant(GREETING, None)],
            suggested_replies: INITIAL_REPLIES.iter().map(|r| r.to_string()).collect(),
            suggestions: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn suggested_replies(&self) -> &[String] {
        &self.suggested_replies
    }

    /// Venues from the most recent reply that carried any
    pub fn suggestions(&self) -> &[VenueSuggestion] {
        &self.suggestions
    }

    /// Send user input. Returns `false` when the input was blank and nothing was sent.
    pub async fn send<G>(&mut self, gateway: &G, input: &str) -> bool
    where
        G: Gateway + ?Sized,
    {
        let text = input.trim();
        if text.is_empty() {
            return false;
        }

        self.messages.push(ChatMessage::user(text));
        self.suggested_replies.clear();

        let request = AgentMessage::new(self.session.as_str(), text);
        match gateway.post_message(&request).await {
            Ok(response) => self.push_reply(response),
            Err(e) => {
                tracing::warn!(session_id = %self.session, error = %e, "Agent message failed");
                self.messages.push(ChatMessage::assistant(FAILURE_REPLY, None));
            }
        }
        true
    }

    /// Ask for recommendations directly. The reply is appended like any other.
    pub async fn recommend<G>(&mut self, gateway: &G, request: &RecommendRequest)
    where
        G: Gateway + ?Sized,
    {
        self.suggested_replies.clear();
        match gateway.recommend(request).await {
            Ok(response) => self.push_reply(response),
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation request failed");
                self.messages.push(ChatMessage::assistant(FAILURE_REPLY, None));
            }
        }
    }

    /// Append an agent reply, replacing the reply chips and any venue suggestions it carries
    fn push_reply(&mut self, response: AgentResponse) {
        if !response.venues().is_empty() {
            self.suggestions = response.venues().to_vec();
        }
        self.suggested_replies = response
            .suggested_replies
            .unwrap_or_default()
            .into_iter()
            .take(MAX_SUGGESTED_REPLIES)
            .collect();
        self.messages
            .push(ChatMessage::assistant(response.text, response.structured));
    }
}
