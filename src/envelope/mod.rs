/// Request/response envelopes and dispatch - Gateway

mod dispatcher;
mod request;
mod response;

pub use dispatcher::SpeechletDispatcher;
pub use request::{RequestEnvelope, SpeechletRequest};
pub use response::ResponseEnvelope;
