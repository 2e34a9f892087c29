use crate::speechlet::{Intent, SessionEndedReason};
use crate::utils::SkillError;

/// One thing the simulated user does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Open the skill without an intent
    Launch,
    /// Say something that resolves to this intent
    Intent(Intent),
    /// Walk away from the device
    End(Option<SessionEndedReason>),
}

/// Parse a conversation script, one turn per line.
///
/// ```text
/// # comments and blank lines are skipped
/// launch
/// intent MyColorIsIntent Color="light blue"
/// intent WhatsMyColorIntent
/// end user_initiated
/// ```
pub fn parse_script(source: &str) -> Result<Vec<Turn>, SkillError> {
    let mut turns = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = index + 1;
        let err = |message: String| SkillError::Script {
            line: line_no,
            message,
        };

        let words = split_words(line).map_err(err)?;
        let (command, args) = words
            .split_first()
            .ok_or_else(|| err("empty command".to_string()))?;

        let turn = match command.to_ascii_lowercase().as_str() {
            "launch" => {
                if !args.is_empty() {
                    return Err(err("launch takes no arguments".to_string()));
                }
                Turn::Launch
            }
            "intent" => {
                let (name, slots) = args
                    .split_first()
                    .ok_or_else(|| err("intent needs a name".to_string()))?;
                let mut intent = Intent::new(name.as_str());
                for slot in slots {
                    let (slot_name, value) = slot
                        .split_once('=')
                        .ok_or_else(|| err(format!("expected Slot=value, got '{slot}'")))?;
                    if slot_name.is_empty() {
                        return Err(err(format!("slot without a name in '{slot}'")));
                    }
                    intent = intent.with_slot(slot_name, value);
                }
                Turn::Intent(intent)
            }
            "end" => match args {
                [] => Turn::End(None),
                [reason] => Turn::End(Some(parse_reason(reason).map_err(err)?)),
                _ => return Err(err("end takes at most one reason".to_string())),
            },
            other => return Err(err(format!("unknown command '{other}'"))),
        };
        turns.push(turn);
    }

    Ok(turns)
}

fn parse_reason(reason: &str) -> Result<SessionEndedReason, String> {
    match reason.to_ascii_lowercase().as_str() {
        "user_initiated" => Ok(SessionEndedReason::UserInitiated),
        "error" => Ok(SessionEndedReason::Error),
        "exceeded_max_reprompts" => Ok(SessionEndedReason::ExceededMaxReprompts),
        other => Err(format!("unknown end reason '{other}'")),
    }
}

/// Split on whitespace; double quotes group words and are dropped
fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }

    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if has_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_script() {
        let script = r#"
            # favorite color walkthrough
            launch
            intent MyColorIsIntent Color="light blue"

            intent WhatsMyColorIntent
            end user_initiated
        "#;

        let turns = parse_script(script).unwrap();

        assert_eq!(
            turns,
            vec![
                Turn::Launch,
                Turn::Intent(Intent::new("MyColorIsIntent").with_slot("Color", "light blue")),
                Turn::Intent(Intent::new("WhatsMyColorIntent")),
                Turn::End(Some(SessionEndedReason::UserInitiated)),
            ]
        );
    }

    #[test]
    fn test_empty_slot_value_is_kept() {
        let turns = parse_script("intent MyColorIsIntent Color=").unwrap();
        let Turn::Intent(intent) = &turns[0] else {
            panic!("Expected intent turn");
        };
        assert!(intent.slot("Color").is_some());
        assert_eq!(intent.slot_value("Color"), None);
    }

    #[test]
    fn test_errors_report_line_numbers() {
        let err = parse_script("launch\n\ndance").unwrap_err();
        match err {
            SkillError::Script { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("dance"));
            }
            other => panic!("Expected script error, got {other:?}"),
        }

        assert!(matches!(
            parse_script("intent").unwrap_err(),
            SkillError::Script { line: 1, .. }
        ));
        assert!(matches!(
            parse_script("intent MyColorIsIntent red").unwrap_err(),
            SkillError::Script { line: 1, .. }
        ));
        assert!(matches!(
            parse_script("end sleepy").unwrap_err(),
            SkillError::Script { line: 1, .. }
        ));
        assert!(matches!(
            parse_script(r#"intent X Color="red"#).unwrap_err(),
            SkillError::Script { line: 1, .. }
        ));
    }

    #[test]
    fn test_split_words_quotes() {
        assert_eq!(
            split_words(r#"a "b c" d="e f""#).unwrap(),
            vec!["a", "b c", "d=e f"]
        );
        assert_eq!(split_words(r#"x Color="""#).unwrap(), vec!["x", "Color="]);
    }
}
