use serde::{Deserialize, Serialize};

use crate::constants::PROTOCOL_VERSION;
use crate::session::Session;
use crate::speechlet::{IntentRequest, LaunchRequest, SessionEndedRequest, SessionStartedRequest};
use crate::utils::SkillError;

/// The four request shapes the platform sends, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpeechletRequest {
    SessionStartedRequest(SessionStartedRequest),
    LaunchRequest(LaunchRequest),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEndedRequest),
}

impl SpeechletRequest {
    pub fn request_id(&self) -> &str {
        match self {
            Self::SessionStartedRequest(r) => &r.request_id,
            Self::LaunchRequest(r) => &r.request_id,
            Self::IntentRequest(r) => &r.request_id,
            Self::SessionEndedRequest(r) => &r.request_id,
        }
    }

    /// Wire name of the request type
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SessionStartedRequest(_) => "SessionStartedRequest",
            Self::LaunchRequest(_) => "LaunchRequest",
            Self::IntentRequest(_) => "IntentRequest",
            Self::SessionEndedRequest(_) => "SessionEndedRequest",
        }
    }

    /// Session-started notification carrying this request's id, time and locale
    pub(crate) fn as_session_started(&self) -> SessionStartedRequest {
        let (request_id, timestamp, locale) = match self {
            Self::SessionStartedRequest(r) => return r.clone(),
            Self::LaunchRequest(r) => (&r.request_id, r.timestamp, &r.locale),
            Self::IntentRequest(r) => (&r.request_id, r.timestamp, &r.locale),
            Self::SessionEndedRequest(r) => (&r.request_id, r.timestamp, &r.locale),
        };
        SessionStartedRequest {
            request_id: request_id.clone(),
            timestamp,
            locale: locale.clone(),
        }
    }
}

/// Everything the host sends for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default = "default_version")]
    pub version: String,
    pub session: Session,
    pub request: SpeechletRequest,
}

fn default_version() -> String {
    PROTOCOL_VERSION.to_string()
}

impl RequestEnvelope {
    pub fn new(session: Session, request: SpeechletRequest) -> Self {
        Self {
            version: default_version(),
            session,
            request,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SkillError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTENT_ENVELOPE: &str = r#"{
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "SessionId.e3a",
            "application": { "applicationId": "amzn1.echo-sdk-ams.app.123" },
            "attributes": { "COLOR": "red" },
            "user": { "userId": "amzn1.account.ABC" }
        },
        "request": {
            "type": "IntentRequest",
            "requestId": "EdwRequestId.42",
            "timestamp": "2016-03-15T20:31:39Z",
            "intent": {
                "name": "WhatsMyColorIntent",
                "slots": {}
            }
        }
    }"#;

    #[test]
    fn test_parse_intent_envelope() {
        let envelope = RequestEnvelope::from_json(INTENT_ENVELOPE).unwrap();
        assert_eq!(envelope.version, "1.0");
        assert_eq!(envelope.session.session_id, "SessionId.e3a");
        assert_eq!(envelope.request.kind(), "IntentRequest");
        assert_eq!(envelope.request.request_id(), "EdwRequestId.42");
        match envelope.request {
            SpeechletRequest::IntentRequest(r) => {
                assert_eq!(r.intent.unwrap().name, "WhatsMyColorIntent");
            }
            other => panic!("Expected IntentRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_launch_and_ended() {
        let launch = r#"{"session": {"sessionId": "s", "new": true},
            "request": {"type": "LaunchRequest", "requestId": "r1"}}"#;
        let envelope = RequestEnvelope::from_json(launch).unwrap();
        assert_eq!(envelope.version, "1.0");
        assert!(matches!(envelope.request, SpeechletRequest::LaunchRequest(_)));

        let ended = r#"{"session": {"sessionId": "s"},
            "request": {"type": "SessionEndedRequest", "requestId": "r2", "reason": "USER_INITIATED"}}"#;
        let envelope = RequestEnvelope::from_json(ended).unwrap();
        assert_eq!(envelope.request.kind(), "SessionEndedRequest");
    }

    #[test]
    fn test_unknown_request_type_is_an_envelope_error() {
        let raw = r#"{"session": {"sessionId": "s"},
            "request": {"type": "AudioPlayer.PlaybackStarted", "requestId": "r"}}"#;
        let err = RequestEnvelope::from_json(raw).unwrap_err();
        assert!(matches!(err, SkillError::Envelope(_)));
    }

    #[test]
    fn test_session_started_copies_request_fields() {
        let envelope = RequestEnvelope::from_json(INTENT_ENVELOPE).unwrap();
        let started = envelope.request.as_session_started();
        assert_eq!(started.request_id, "EdwRequestId.42");
        assert!(started.timestamp.is_some());
    }
}
