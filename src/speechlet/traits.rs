use crate::session::SessionStore;
use crate::utils::SpeechletError;

use super::types::{
    IntentRequest, LaunchRequest, SessionEndedRequest, SessionStartedRequest, SpeechletResponse,
};

/// Lifecycle contract every skill implements
///
/// The host calls exactly one of these per request. Only `on_intent` may
/// change session attributes.
pub trait Speechlet {
    /// A new conversation began; called before the request that opened it
    fn on_session_started(
        &self,
        request: &SessionStartedRequest,
        session: &dyn SessionStore,
    ) -> Result<(), SpeechletError>;

    /// The user opened the skill without an intent
    fn on_launch(
        &self,
        request: &LaunchRequest,
        session: &dyn SessionStore,
    ) -> Result<SpeechletResponse, SpeechletError>;

    /// The user asked for something
    fn on_intent(
        &self,
        request: &IntentRequest,
        session: &mut dyn SessionStore,
    ) -> Result<SpeechletResponse, SpeechletError>;

    /// The conversation is over; nothing more will be spoken
    fn on_session_ended(
        &self,
        request: &SessionEndedRequest,
        session: &dyn SessionStore,
    ) -> Result<(), SpeechletError>;
}
