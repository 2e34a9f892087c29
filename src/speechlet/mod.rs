// Gateway module for speechlet - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod response;
mod session_speechlet;
mod traits;
mod types;

// Public re-exports - the ONLY way to access speechlet functionality
pub use response::ResponseBuilder;
pub use session_speechlet::SessionSpeechlet;
pub use traits::Speechlet;
pub use types::{
    Card, Intent, IntentRequest, LaunchRequest, OutputSpeech, Reprompt, SessionEndedReason,
    SessionEndedRequest, SessionStartedRequest, Slot, SpeechletResponse,
};
