use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The skill application a session belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// The user on the other end of the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Host-owned conversation scope
///
/// The host creates the session, sends its attributes along with every
/// request, and takes them back from every response. Attributes live for
/// the length of one conversation and no longer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True only on the first request of a conversation
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Session {
    /// Create an empty, not-new session with the given id
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            ..Self::default()
        }
    }

    /// Mark this session as the start of a conversation
    pub fn started(mut self) -> Self {
        self.new = true;
        self
    }

    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application = Some(Application {
            application_id: application_id.into(),
        });
        self
    }

    pub fn with_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Application id, if the host supplied one
    pub fn application_id(&self) -> Option<&str> {
        self.application.as_ref().map(|a| a.application_id.as_str())
    }
}

/// Key-value capability over a session's attributes
///
/// Speechlets receive this per call instead of the whole `Session`, so
/// they can neither keep it nor touch anything but the attribute map.
pub trait SessionStore {
    /// Opaque id of the conversation, used for observability only
    fn session_id(&self) -> &str;

    fn attribute(&self, key: &str) -> Option<&Value>;

    fn set_attribute(&mut self, key: &str, value: Value);

    fn remove_attribute(&mut self, key: &str) -> Option<Value>;

    /// Attribute as a string; `None` when absent or not a JSON string
    fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(Value::as_str)
    }
}

impl SessionStore for Session {
    fn session_id(&self) -> &str {
        &self.session_id
    }

    fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    fn set_attribute(&mut self, key: &str, value: Value) {
        self.attributes.insert(key.to_string(), value);
    }

    fn remove_attribute(&mut self, key: &str) -> Option<Value> {
        self.attributes.remove(key)
    }
}
