use serde::Serialize;

use crate::cli::OutputFormat;
use crate::speechlet::SpeechletResponse;

use super::simulator::TurnOutcome;

/// Render a response as indented `label: value` lines
pub fn describe_response(response: &SpeechletResponse) -> String {
    let mut output = String::new();

    if let Some(title) = response.card_title() {
        output.push_str(&format!("  card:     {}\n", title));
    }
    if let Some(text) = response.speech_text() {
        output.push_str(&format!("  speech:   {}\n", text));
    }
    if let Some(text) = response.reprompt_text() {
        output.push_str(&format!("  reprompt: {}\n", text));
    }
    output.push_str(&format!(
        "  session:  {}\n",
        if response.should_end_session { "ends" } else { "continues" }
    ));

    output
}

/// Format simulator outcomes for the terminal or for machines
pub fn format_outcomes(outcomes: &[TurnOutcome], format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Json => to_json(outcomes, pretty),
        OutputFormat::Text => {
            let mut output = String::new();

            for outcome in outcomes {
                output.push_str(&format!(
                    "#{} {} {} [{}]\n",
                    outcome.turn, outcome.request_type, outcome.request_id, outcome.session_id
                ));
                if let Some(ref response) = outcome.response {
                    output.push_str(&describe_response(response));
                }
                if let Some(ref error) = outcome.error {
                    output.push_str(&format!("  error:    {}\n", error));
                }
            }

            let failed = outcomes.iter().filter(|o| o.is_error()).count();
            if failed > 0 {
                output.push_str(&format!("\n--- {} of {} turns failed ---\n", failed, outcomes.len()));
            }

            output
        }
    }
}

/// Serialize to JSON, falling back to an error object
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize result: {}\"}}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speechlet::ResponseBuilder;

    fn outcomes() -> Vec<TurnOutcome> {
        vec![
            TurnOutcome {
                turn: 1,
                request_type: "LaunchRequest".to_string(),
                request_id: "EdwRequestId.1".to_string(),
                session_id: "SessionId.1".to_string(),
                response: Some(ResponseBuilder::default().build("Welcome", "Hello", Some("Hi?"), false)),
                error: None,
            },
            TurnOutcome {
                turn: 2,
                request_type: "IntentRequest".to_string(),
                request_id: "EdwRequestId.2".to_string(),
                session_id: "SessionId.1".to_string(),
                response: None,
                error: Some("Speechlet error: Invalid Intent: Foo".to_string()),
            },
        ]
    }

    #[test]
    fn test_text_format() {
        let text = format_outcomes(&outcomes(), OutputFormat::Text, false);

        assert!(text.contains("#1 LaunchRequest EdwRequestId.1 [SessionId.1]"));
        assert!(text.contains("  card:     SessionSpeechlet - Welcome\n"));
        assert!(text.contains("  speech:   Hello\n"));
        assert!(text.contains("  reprompt: Hi?\n"));
        assert!(text.contains("  session:  continues\n"));
        assert!(text.contains("  error:    Speechlet error: Invalid Intent: Foo"));
        assert!(text.contains("1 of 2 turns failed"));
    }

    #[test]
    fn test_json_format() {
        let json = format_outcomes(&outcomes(), OutputFormat::Json, true);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["response"]["outputSpeech"]["text"], "Hello");
        assert!(value[1]["response"].is_null());
        assert_eq!(value[1]["turn"], 2);
    }

    #[test]
    fn test_describe_closing_response() {
        let response = ResponseBuilder::default().build("Bye", "Goodbye", None, true);
        let text = describe_response(&response);
        assert!(!text.contains("reprompt"));
        assert!(text.ends_with("  session:  ends\n"));
    }
}
