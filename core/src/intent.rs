//! Intents the skill answers, and a regex matcher that turns typed or
//! transcribed utterances into them.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A parsed user request with its slot values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// "list the national parks in utah"
    ListParks { location: String },
    /// "describe yellowstone national park"
    DescribePark { park: String },
    /// "where is yellowstone national park"
    WhereIsPark { park: String },
    /// "quiz me on national parks"
    StartQuiz,
    /// Free utterance routed while a quiz question is pending
    AnswerQuiz { utterance: String },
    /// "repeat the quiz question"
    RepeatQuiz,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::ListParks { .. } => "ParkListIntent",
            Intent::DescribePark { .. } => "ParkDescriptionIntent",
            Intent::WhereIsPark { .. } => "ParkLocationIntent",
            Intent::StartQuiz => "QuizIntent",
            Intent::AnswerQuiz { .. } => "QuizAnswerIntent",
            Intent::RepeatQuiz => "QuizRepeatIntent",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    List,
    Describe,
    WhereIs,
    Quiz,
    Repeat,
}

/// Ordered regex patterns; the first match wins
pub struct IntentParser {
    patterns: Vec<(Regex, Kind)>,
}

impl Default for IntentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentParser {
    pub fn new() -> Self {
        let raw: [(&str, Kind); 7] = [
            (
                r"^(?:please\s+)?repeat\b.*\b(?:quiz|question)\b",
                Kind::Repeat,
            ),
            (
                r"^(?:please\s+)?(?:quiz|test)\s+me\b",
                Kind::Quiz,
            ),
            (
                r"^(?:please\s+)?(?:list|name|tell me)\s+(?:all\s+)?(?:of\s+)?(?:the\s+)?national\s+parks\s+(?:in\s+)?(?P<slot>.+)$",
                Kind::List,
            ),
            (
                r"^what\s+(?:are\s+the\s+)?national\s+parks\s+(?:are\s+)?in\s+(?P<slot>.+)$",
                Kind::List,
            ),
            (
                r"^(?:please\s+)?describe\s+(?:the\s+)?(?P<slot>.+)$",
                Kind::Describe,
            ),
            (
                r"^(?:tell me about|what is)\s+(?P<slot>.+?\s+national\s+park)$",
                Kind::Describe,
            ),
            (
                r"^where\s+(?:is|are)\s+(?:the\s+)?(?P<slot>.+)$",
                Kind::WhereIs,
            ),
        ];

        let patterns = raw
            .into_iter()
            .map(|(pat, kind)| (Regex::new(pat).expect("Invalid intent regex"), kind))
            .collect();

        Self { patterns }
    }

    /// Match an utterance against the known phrasings
    pub fn parse(&self, utterance: &str) -> Option<Intent> {
        let text = normalize(utterance);
        if text.is_empty() {
            return None;
        }

        for (regex, kind) in &self.patterns {
            let Some(caps) = regex.captures(&text) else {
                continue;
            };
            let slot = caps
                .name("slot")
                .map(|m| strip_park_suffix(m.as_str()))
                .unwrap_or_default();

            let intent = match kind {
                Kind::Quiz => Intent::StartQuiz,
                Kind::Repeat => Intent::RepeatQuiz,
                Kind::List if !slot.is_empty() => Intent::ListParks { location: slot },
                Kind::Describe if !slot.is_empty() => Intent::DescribePark { park: slot },
                Kind::WhereIs if !slot.is_empty() => Intent::WhereIsPark { park: slot },
                _ => continue,
            };
            return Some(intent);
        }
        None
    }
}

/// Lowercase, trim, drop trailing punctuation and collapse whitespace.
pub fn normalize(utterance: &str) -> String {
    utterance
        .trim()
        .trim_end_matches(['?', '.', '!', ','])
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn strip_park_suffix(slot: &str) -> String {
    let slot = slot.trim();
    for suffix in [" national parks", " national park"] {
        if let Some(stripped) = slot.strip_suffix(suffix) {
            if !stripped.trim().is_empty() {
                return stripped.trim().to_string();
            }
        }
    }
    slot.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Option<Intent> {
        IntentParser::new().parse(s)
    }

    #[test]
    fn test_list_parks() {
        assert_eq!(
            parse("List the national parks in Utah"),
            Some(Intent::ListParks {
                location: "utah".into()
            })
        );
        assert_eq!(
            parse("what national parks are in new mexico?"),
            Some(Intent::ListParks {
                location: "new mexico".into()
            })
        );
    }

    #[test]
    fn test_describe_park() {
        assert_eq!(
            parse("Describe Yellowstone National Park"),
            Some(Intent::DescribePark {
                park: "yellowstone".into()
            })
        );
        assert_eq!(
            parse("tell me about glacier national park"),
            Some(Intent::DescribePark {
                park: "glacier".into()
            })
        );
    }

    #[test]
    fn test_where_is_park() {
        assert_eq!(
            parse("Where is Death Valley National Park?"),
            Some(Intent::WhereIsPark {
                park: "death valley".into()
            })
        );
    }

    #[test]
    fn test_quiz_and_repeat() {
        assert_eq!(parse("quiz me on national parks"), Some(Intent::StartQuiz));
        assert_eq!(parse("Repeat the quiz question"), Some(Intent::RepeatQuiz));
        assert_eq!(parse("please repeat the question"), Some(Intent::RepeatQuiz));
    }

    #[test]
    fn test_unmatched() {
        assert_eq!(parse("what time is it"), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("where is"), None);
    }

    #[test]
    fn test_suffix_alone_is_kept() {
        assert_eq!(strip_park_suffix("national park"), "national park");
        assert_eq!(strip_park_suffix("acadia national park"), "acadia");
    }

    #[test]
    fn test_intent_names() {
        assert_eq!(Intent::StartQuiz.name(), "QuizIntent");
        assert_eq!(
            Intent::AnswerQuiz {
                utterance: "utah".into()
            }
            .name(),
            "QuizAnswerIntent"
        );
    }
}
