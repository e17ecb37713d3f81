//! Conversational agent models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Chat message sent to the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentMessage {
    pub session_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
}

impl AgentMessage {
    pub fn new(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            message: message.into(),
            context: None,
        }
    }
}

/// Recommendation query, every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefs: Option<Map<String, Value>>,
}

/// Origin of an agent reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentResponseType {
    /// Plain model text
    LlmResponse,
    /// Result of a tool call (search, booking)
    ToolResult,
}

/// Venue as suggested by the agent. Only `id` and `name` are guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueSuggestion {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Relevance score in `0.0..=1.0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_tier: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl VenueSuggestion {
    /// Score as a whole percentage (`0.87` -> `87`)
    pub fn match_percent(&self) -> Option<u32> {
        self.score.map(|s| (s * 100.0).round().max(0.0) as u32)
    }
}

/// Machine-readable part of an agent reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venues: Option<Vec<VenueSuggestion>>,
}

impl StructuredPayload {
    pub fn venues(&self) -> &[VenueSuggestion] {
        self.venues.as_deref().unwrap_or_default()
    }
}

/// Agent reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    #[serde(rename = "type")]
    pub kind: AgentResponseType,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_replies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured: Option<StructuredPayload>,
}

impl AgentResponse {
    /// Venues carried by the structured payload (empty if none)
    pub fn venues(&self) -> &[VenueSuggestion] {
        self.structured
            .as_ref()
            .map(StructuredPayload::venues)
            .unwrap_or_default()
    }
}
