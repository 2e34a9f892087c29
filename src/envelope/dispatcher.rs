use tracing::{debug, warn};

use crate::speechlet::{Speechlet, SpeechletResponse};
use crate::utils::SkillError;

use super::request::{RequestEnvelope, SpeechletRequest};
use super::response::ResponseEnvelope;

/// Turns request envelopes into lifecycle calls on a speechlet
pub struct SpeechletDispatcher<S> {
    speechlet: S,
    supported_application_ids: Vec<String>,
}

impl<S: Speechlet> SpeechletDispatcher<S> {
    pub fn new(speechlet: S) -> Self {
        Self {
            speechlet,
            supported_application_ids: Vec::new(),
        }
    }

    /// Only accept requests for these applications. An empty list accepts all.
    pub fn with_supported_application_ids(mut self, ids: Vec<String>) -> Self {
        self.supported_application_ids = ids;
        self
    }

    pub fn speechlet(&self) -> &S {
        &self.speechlet
    }

    /// Handle one request envelope and build the reply
    ///
    /// A new session is announced through `on_session_started` before the
    /// request itself is routed. The reply carries the session's attributes
    /// as they stand after the speechlet ran.
    pub fn dispatch(&self, envelope: RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        let RequestEnvelope {
            session: mut session,
            request,
            ..
        } = envelope;

        debug!(
            request_type = request.kind(),
            request_id = %request.request_id(),
            session_id = %session.session_id,
            new_session = session.new,
            "dispatching request"
        );

        self.verify_application_id(session.application_id())?;

        let explicit_start = matches!(request, SpeechletRequest::SessionStartedRequest(_));
        if session.new && !explicit_start {
            self.speechlet
                .on_session_started(&request.as_session_started(), &session)?;
        }

        let response = match &request {
            SpeechletRequest::SessionStartedRequest(r) => {
                self.speechlet.on_session_started(r, &session)?;
                SpeechletResponse::empty(false)
            }
            SpeechletRequest::LaunchRequest(r) => self.speechlet.on_launch(r, &session)?,
            SpeechletRequest::IntentRequest(r) => self.speechlet.on_intent(r, &mut session)?,
            SpeechletRequest::SessionEndedRequest(r) => {
                self.speechlet.on_session_ended(r, &session)?;
                SpeechletResponse::empty(true)
            }
        };

        Ok(ResponseEnvelope::new(response, session.attributes))
    }

    /// Parse, dispatch and serialize in one go
    pub fn dispatch_json(&self, json: &str, pretty: bool) -> Result<String, SkillError> {
        let envelope = RequestEnvelope::from_json(json)?;
        let reply = self.dispatch(envelope)?;
        Ok(reply.to_json(pretty)?)
    }

    fn verify_application_id(&self, application_id: Option<&str>) -> Result<(), SkillError> {
        if self.supported_application_ids.is_empty() {
            return Ok(());
        }
        match application_id {
            Some(id) if self.supported_application_ids.iter().any(|s| s == id) => Ok(()),
            other => {
                warn!(application_id = ?other, "rejecting request for unsupported application");
                Err(SkillError::UnsupportedApplication(other.map(str::to_string)))
            }
        }
    }
}
