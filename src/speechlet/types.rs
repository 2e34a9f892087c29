use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// First request of a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStartedRequest {
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// The user opened the skill without asking for anything specific
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// The user said something the platform resolved to an intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
}

/// The conversation is over; no response will be spoken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<SessionEndedReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEndedReason {
    UserInitiated,
    Error,
    ExceededMaxReprompts,
}

/// A pre-parsed user request with its named parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub slots: BTreeMap<String, Slot>,
}

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: BTreeMap::new(),
        }
    }

    /// Add a filled slot
    pub fn with_slot(mut self, name: &str, value: impl Into<String>) -> Self {
        self.slots.insert(
            name.to_string(),
            Slot {
                name: name.to_string(),
                value: Some(value.into()),
            },
        );
        self
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    /// Value of a slot, only when the slot exists and is filled with a non-empty string
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slot(name)
            .and_then(|slot| slot.value.as_deref())
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Spoken output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
}

impl OutputSpeech {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text } => text,
        }
    }
}

/// Visual card shown in the companion app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

/// Speech replayed when the user stays silent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// What the skill answers to one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default)]
    pub should_end_session: bool,
}

impl SpeechletResponse {
    /// A response that says nothing
    pub fn empty(should_end_session: bool) -> Self {
        Self {
            output_speech: None,
            card: None,
            reprompt: None,
            should_end_session,
        }
    }

    pub fn speech_text(&self) -> Option<&str> {
        self.output_speech.as_ref().map(OutputSpeech::text)
    }

    pub fn reprompt_text(&self) -> Option<&str> {
        self.reprompt.as_ref().map(|r| r.output_speech.text())
    }

    pub fn card_title(&self) -> Option<&str> {
        match &self.card {
            Some(Card::Simple { title, .. }) => Some(title),
            None => None,
        }
    }

    pub fn card_content(&self) -> Option<&str> {
        match &self.card {
            Some(Card::Simple { content, .. }) => Some(content),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_slot_value_filters_unfilled_slots() {
        let mut intent = Intent::new("MyColorIsIntent").with_slot("Color", "red");
        assert_eq!(intent.slot_value("Color"), Some("red"));
        assert_eq!(intent.slot_value("Size"), None);

        intent.slots.insert(
            "Color".to_string(),
            Slot {
                name: "Color".to_string(),
                value: None,
            },
        );
        assert!(intent.slot("Color").is_some());
        assert_eq!(intent.slot_value("Color"), None);

        let intent = Intent::new("MyColorIsIntent").with_slot("Color", "");
        assert_eq!(intent.slot_value("Color"), None);
    }

    #[test]
    fn test_intent_request_parses_slots() {
        let raw = json!({
            "requestId": "EdwRequestId.1",
            "timestamp": "2016-03-15T20:31:39Z",
            "locale": "en-US",
            "intent": {
                "name": "MyColorIsIntent",
                "slots": { "Color": { "name": "Color", "value": "blue" } }
            }
        });
        let request: IntentRequest = serde_json::from_value(raw).unwrap();
        assert_eq!(request.request_id, "EdwRequestId.1");
        assert!(request.timestamp.is_some());
        let intent = request.intent.unwrap();
        assert_eq!(intent.name, "MyColorIsIntent");
        assert_eq!(intent.slot_value("Color"), Some("blue"));
    }

    #[test]
    fn test_session_ended_reason_wire_names() {
        let request: SessionEndedRequest = serde_json::from_value(json!({
            "requestId": "r",
            "reason": "EXCEEDED_MAX_REPROMPTS"
        }))
        .unwrap();
        assert_eq!(request.reason, Some(SessionEndedReason::ExceededMaxReprompts));
    }

    #[test]
    fn test_response_serializes_in_platform_shape() {
        let response = SpeechletResponse {
            output_speech: Some(OutputSpeech::plain_text("hi")),
            card: Some(Card::Simple {
                title: "T".to_string(),
                content: "C".to_string(),
            }),
            reprompt: Some(Reprompt {
                output_speech: OutputSpeech::plain_text("again"),
            }),
            should_end_session: false,
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "outputSpeech": { "type": "PlainText", "text": "hi" },
                "card": { "type": "Simple", "title": "T", "content": "C" },
                "reprompt": { "outputSpeech": { "type": "PlainText", "text": "again" } },
                "shouldEndSession": false
            })
        );
    }

    #[test]
    fn test_empty_response_has_no_output() {
        let response = SpeechletResponse::empty(true);
        assert_eq!(response.speech_text(), None);
        assert_eq!(response.card_title(), None);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "shouldEndSession": true })
        );
    }
}
