use serde_json::Value;
use tracing::info;

use crate::constants::{
    COLOR_KEY, COLOR_SLOT, MY_COLOR_IS_INTENT, WELCOME_TITLE, WHATS_MY_COLOR_INTENT,
};
use crate::session::SessionStore;
use crate::utils::SpeechletError;

use super::response::ResponseBuilder;
use super::traits::Speechlet;
use super::types::{
    Intent, IntentRequest, LaunchRequest, SessionEndedRequest, SessionStartedRequest,
    SpeechletResponse,
};

const WELCOME_SPEECH: &str = "Welcome to the Alexa AppKit session sample app, \
    Please tell me your favorite color by saying, my favorite color is red";
const WELCOME_REPROMPT: &str =
    "Please tell me your favorite color by saying, my favorite color is red";
const HOW_TO_ASK: &str = "You can ask me your favorite color by saying, what's my favorite color?";
const COLOR_NOT_HEARD: &str = "I'm not sure what your favorite color is, please try again";
const COLOR_NOT_HEARD_REPROMPT: &str = "I'm not sure what your favorite color is, \
    you can tell me your favorite color by saying, my favorite color is red";
// Must not name a color
const COLOR_UNKNOWN: &str = "I'm not sure what your favorite color is, \
    you can tell me by saying, my favorite color is, followed by your color";

/// Skill that remembers the user's favorite color for one session
#[derive(Debug, Clone, Default)]
pub struct SessionSpeechlet {
    responses: ResponseBuilder,
}

impl SessionSpeechlet {
    pub fn new(responses: ResponseBuilder) -> Self {
        Self { responses }
    }

    fn welcome_response(&self) -> SpeechletResponse {
        self.responses
            .build(WELCOME_TITLE, WELCOME_SPEECH, Some(WELCOME_REPROMPT), false)
    }

    /// Store the color slot in the session, or ask again when it's missing
    fn set_color_in_session(
        &self,
        intent: &Intent,
        session: &mut dyn SessionStore,
    ) -> SpeechletResponse {
        match intent.slot_value(COLOR_SLOT) {
            Some(color) => {
                session.set_attribute(COLOR_KEY, Value::String(color.to_string()));
                let speech = format!("I now know that your favorite color is {color}. {HOW_TO_ASK}");
                self.responses
                    .build(&intent.name, &speech, Some(HOW_TO_ASK), false)
            }
            None => self.responses.build(
                &intent.name,
                COLOR_NOT_HEARD,
                Some(COLOR_NOT_HEARD_REPROMPT),
                false,
            ),
        }
    }

    /// Say the stored color and end, or admit not knowing it and stay open
    fn get_color_from_session(
        &self,
        intent: &Intent,
        session: &dyn SessionStore,
    ) -> SpeechletResponse {
        match session.attribute_str(COLOR_KEY).filter(|c| !c.is_empty()) {
            Some(color) => {
                let speech = format!("Your favorite color is {color}, goodbye");
                self.responses.build(&intent.name, &speech, None, true)
            }
            None => self.responses.build(&intent.name, COLOR_UNKNOWN, None, false),
        }
    }
}

impl Speechlet for SessionSpeechlet {
    fn on_session_started(
        &self,
        request: &SessionStartedRequest,
        session: &dyn SessionStore,
    ) -> Result<(), SpeechletError> {
        info!(
            request_id = %request.request_id,
            session_id = %session.session_id(),
            "on_session_started"
        );
        Ok(())
    }

    fn on_launch(
        &self,
        request: &LaunchRequest,
        session: &dyn SessionStore,
    ) -> Result<SpeechletResponse, SpeechletError> {
        info!(
            request_id = %request.request_id,
            session_id = %session.session_id(),
            "on_launch"
        );
        Ok(self.welcome_response())
    }

    fn on_intent(
        &self,
        request: &IntentRequest,
        session: &mut dyn SessionStore,
    ) -> Result<SpeechletResponse, SpeechletError> {
        let intent_name = request.intent.as_ref().map(|i| i.name.as_str());
        info!(
            request_id = %request.request_id,
            session_id = %session.session_id(),
            intent = intent_name.unwrap_or("<none>"),
            "on_intent"
        );

        // A session opened with an intent gets no welcome, only the intent's answer
        match (&request.intent, intent_name) {
            (Some(intent), Some(MY_COLOR_IS_INTENT)) => {
                Ok(self.set_color_in_session(intent, session))
            }
            (Some(intent), Some(WHATS_MY_COLOR_INTENT)) => {
                Ok(self.get_color_from_session(intent, session))
            }
            _ => Err(SpeechletError::UnrecognizedIntent {
                name: intent_name.map(str::to_string),
            }),
        }
    }

    fn on_session_ended(
        &self,
        request: &SessionEndedRequest,
        session: &dyn SessionStore,
    ) -> Result<(), SpeechletError> {
        info!(
            request_id = %request.request_id,
            session_id = %session.session_id(),
            reason = ?request.reason,
            "on_session_ended"
        );
        Ok(())
    }
}
