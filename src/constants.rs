/// Constants module to avoid magic strings in the codebase

// Wire protocol
pub const PROTOCOL_VERSION: &str = "1.0";

// Session attributes
pub const COLOR_KEY: &str = "COLOR";

// Intents and slots
pub const MY_COLOR_IS_INTENT: &str = "MyColorIsIntent";
pub const WHATS_MY_COLOR_INTENT: &str = "WhatsMyColorIntent";
pub const COLOR_SLOT: &str = "Color";

// Cards
pub const DEFAULT_CARD_TITLE_PREFIX: &str = "SessionSpeechlet";
pub const WELCOME_TITLE: &str = "Welcome";

// Configuration
pub const CONFIG_ENV_PREFIX: &str = "SPEECHLET_";
pub const LOCAL_CONFIG_PATH: &str = ".speechlet/config.toml";

// Simulator
pub const DEFAULT_APPLICATION_ID: &str = "amzn1.echo-sdk-ams.app.session-speechlet";
pub const DEFAULT_LOCALE: &str = "en-US";
