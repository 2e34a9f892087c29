/// Conversation runtime module - Gateway

mod report;
mod script;
mod simulator;

pub use report::{describe_response, format_outcomes, to_json};
pub use script::{parse_script, Turn};
pub use simulator::{Simulator, TurnOutcome};
