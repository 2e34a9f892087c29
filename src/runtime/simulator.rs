use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::DEFAULT_LOCALE;
use crate::envelope::{RequestEnvelope, SpeechletDispatcher, SpeechletRequest};
use crate::session::Session;
use crate::speechlet::{
    IntentRequest, LaunchRequest, SessionEndedRequest, Speechlet, SpeechletResponse,
};

use super::script::Turn;

/// What happened on one turn of a simulated conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// 1-based position in the script
    pub turn: usize,
    pub request_type: String,
    pub request_id: String,
    pub session_id: String,
    pub response: Option<SpeechletResponse>,
    pub error: Option<String>,
}

impl TurnOutcome {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Plays the host side of a conversation against a dispatcher
///
/// Opens sessions, carries attributes from each response into the next
/// request, and closes the session when the skill or the user ends it.
pub struct Simulator<S> {
    dispatcher: SpeechletDispatcher<S>,
    application_id: String,
    session: Option<Session>,
    sessions_opened: usize,
    requests_sent: usize,
}

impl<S: Speechlet> Simulator<S> {
    pub fn new(dispatcher: SpeechletDispatcher<S>, application_id: impl Into<String>) -> Self {
        Self {
            dispatcher,
            application_id: application_id.into(),
            session: None,
            sessions_opened: 0,
            requests_sent: 0,
        }
    }

    /// The currently open session, if any
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Run every turn in order; failures are recorded, not fatal
    pub fn run(&mut self, turns: &[Turn]) -> Vec<TurnOutcome> {
        turns
            .iter()
            .enumerate()
            .map(|(index, turn)| self.step(index + 1, turn))
            .collect()
    }

    pub fn step(&mut self, turn_no: usize, turn: &Turn) -> TurnOutcome {
        let session = match self.session.take() {
            Some(session) => session,
            None => self.open_session(),
        };
        let request = self.next_request(turn);
        let mut outcome = TurnOutcome {
            turn: turn_no,
            request_type: request.kind().to_string(),
            request_id: request.request_id().to_string(),
            session_id: session.session_id.clone(),
            response: None,
            error: None,
        };

        let envelope = RequestEnvelope::new(session.clone(), request);
        let ending = matches!(turn, Turn::End(_));

        match self.dispatcher.dispatch(envelope) {
            Ok(reply) => {
                if ending || reply.response.should_end_session {
                    debug!(session_id = %session.session_id, "session closed");
                } else {
                    self.session = Some(Session {
                        new: false,
                        attributes: reply.session_attributes,
                        ..session
                    });
                }
                outcome.response = Some(reply.response);
            }
            Err(e) => {
                warn!(turn = turn_no, error = %e, "request failed");
                if !ending {
                    self.session = Some(Session { new: false, ..session });
                }
                outcome.error = Some(e.to_string());
            }
        }

        outcome
    }

    fn open_session(&mut self) -> Session {
        self.sessions_opened += 1;
        let session_id = format!(
            "SessionId.{}-{}",
            Utc::now().format("%Y%m%d%H%M%S"),
            self.sessions_opened
        );
        debug!(session_id = %session_id, "session opened");
        Session::new(session_id)
            .started()
            .with_application_id(self.application_id.clone())
    }

    fn next_request(&mut self, turn: &Turn) -> SpeechletRequest {
        self.requests_sent += 1;
        let request_id = format!("EdwRequestId.{}", self.requests_sent);
        let timestamp = Some(Utc::now());
        let locale = Some(DEFAULT_LOCALE.to_string());

        match turn {
            Turn::Launch => SpeechletRequest::LaunchRequest(LaunchRequest {
                request_id,
                timestamp,
                locale,
            }),
            Turn::Intent(intent) => SpeechletRequest::IntentRequest(IntentRequest {
                request_id,
                timestamp,
                locale,
                intent: Some(intent.clone()),
            }),
            Turn::End(reason) => SpeechletRequest::SessionEndedRequest(SessionEndedRequest {
                request_id,
                timestamp,
                locale,
                reason: *reason,
            }),
        }
    }
}
