use crate::constants::DEFAULT_CARD_TITLE_PREFIX;

use super::types::{Card, OutputSpeech, Reprompt, SpeechletResponse};

/// Formats spoken and visual output with a fixed card label
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    card_title_prefix: String,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CARD_TITLE_PREFIX)
    }
}

impl ResponseBuilder {
    pub fn new(card_title_prefix: impl Into<String>) -> Self {
        Self {
            card_title_prefix: card_title_prefix.into(),
        }
    }

    pub fn card_title_prefix(&self) -> &str {
        &self.card_title_prefix
    }

    /// Build a response whose card title and body carry the prefix.
    ///
    /// Speech is `output` verbatim. A reprompt is attached only when
    /// `reprompt` is given.
    pub fn build(
        &self,
        title: &str,
        output: &str,
        reprompt: Option<&str>,
        should_end_session: bool,
    ) -> SpeechletResponse {
        let card = Card::Simple {
            title: format!("{} - {}", self.card_title_prefix, title),
            content: format!("{} - {}", self.card_title_prefix, output),
        };

        SpeechletResponse {
            output_speech: Some(OutputSpeech::plain_text(output)),
            card: Some(card),
            reprompt: reprompt.map(|text| Reprompt {
                output_speech: OutputSpeech::plain_text(text),
            }),
            should_end_session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_reprompt() {
        let response = ResponseBuilder::default().build("Welcome", "Hello", Some("Still there?"), false);

        assert_eq!(response.card_title(), Some("SessionSpeechlet - Welcome"));
        assert_eq!(response.card_content(), Some("SessionSpeechlet - Hello"));
        assert_eq!(response.speech_text(), Some("Hello"));
        assert_eq!(response.reprompt_text(), Some("Still there?"));
        assert!(!response.should_end_session);
    }

    #[test]
    fn test_build_without_reprompt() {
        let response = ResponseBuilder::default().build("Bye", "Goodbye", None, true);
        assert!(response.reprompt.is_none());
        assert!(response.should_end_session);
    }

    #[test]
    fn test_custom_prefix() {
        let builder = ResponseBuilder::new("ColorSkill");
        let response = builder.build("X", "y", None, false);
        assert_eq!(builder.card_title_prefix(), "ColorSkill");
        assert_eq!(response.card_title(), Some("ColorSkill - X"));
        assert_eq!(response.card_content(), Some("ColorSkill - y"));
    }
}
