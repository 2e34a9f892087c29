use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::PROTOCOL_VERSION;
use crate::speechlet::SpeechletResponse;

/// Everything the skill sends back for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    /// Attributes the host must send back with the next request of this session
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub session_attributes: Map<String, Value>,
    pub response: SpeechletResponse,
}

impl ResponseEnvelope {
    pub fn new(response: SpeechletResponse, session_attributes: Map<String, Value>) -> Self {
        Self {
            version: PROTOCOL_VERSION.to_string(),
            session_attributes,
            response,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
