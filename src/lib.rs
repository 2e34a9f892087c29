pub mod app;
pub mod cli;
pub mod constants;
pub mod envelope;
pub mod runtime;
pub mod session;
pub mod speechlet;
pub mod utils;

pub use app::{load_config, Config};
pub use envelope::{RequestEnvelope, ResponseEnvelope, SpeechletDispatcher};
pub use session::{Session, SessionStore};
pub use speechlet::{SessionSpeechlet, Speechlet, SpeechletResponse};
pub use utils::{SkillError, SpeechletError};
