//! Named dialogs the skill speaks, and their English wording.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Dialog names, as the speech host knows them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogId {
    ParkList,
    ParkLocation,
    NoParksFound,
    NoParksFoundState,
    ErrorCallingServer,
    AskQuizQuestion,
    QuizQuestionCorrect,
    QuizQuestionWrong,
    QuizQuestionNone,
}

impl DialogId {
    pub const ALL: [DialogId; 9] = [
        DialogId::ParkList,
        DialogId::ParkLocation,
        DialogId::NoParksFound,
        DialogId::NoParksFoundState,
        DialogId::ErrorCallingServer,
        DialogId::AskQuizQuestion,
        DialogId::QuizQuestionCorrect,
        DialogId::QuizQuestionWrong,
        DialogId::QuizQuestionNone,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DialogId::ParkList => "Park.List",
            DialogId::ParkLocation => "Park.Location",
            DialogId::NoParksFound => "No.Parks.Found",
            DialogId::NoParksFoundState => "No.Parks.Found.State",
            DialogId::ErrorCallingServer => "Error.calling.server",
            DialogId::AskQuizQuestion => "Ask.Quiz.Question",
            DialogId::QuizQuestionCorrect => "Quiz.Question.Correct",
            DialogId::QuizQuestionWrong => "Quiz.Question.Wrong",
            DialogId::QuizQuestionNone => "Quiz.Question.None",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    fn default_template(self) -> &'static str {
        match self {
            DialogId::ParkList => "The national parks in {{location}} are {{parks}}",
            DialogId::ParkLocation => "{{park}} is in {{location}}",
            DialogId::NoParksFound => "I could not find a national park called {{park}}",
            DialogId::NoParksFoundState => "I could not find any national parks in {{location}}",
            DialogId::ErrorCallingServer => {
                "Sorry, I had a problem getting information from the park service"
            }
            DialogId::AskQuizQuestion => "What state is {{park}} in?",
            DialogId::QuizQuestionCorrect => "That's right!",
            DialogId::QuizQuestionWrong => "Sorry, {{park}} is in {{location}}",
            DialogId::QuizQuestionNone => "There is no quiz question to repeat",
        }
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values substituted into a dialog template
pub type DialogData = HashMap<String, String>;

/// What the skill wants spoken in answer to one intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A named dialog filled from `data`
    Dialog {
        id: DialogId,
        data: DialogData,
        /// Keep listening after speaking
        expect_response: bool,
    },
    /// Text spoken as-is
    Speak(String),
}

impl Reply {
    pub fn dialog(id: DialogId) -> Self {
        Reply::Dialog {
            id,
            data: DialogData::new(),
            expect_response: false,
        }
    }

    pub fn dialog_with<'a>(id: DialogId, pairs: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        Reply::Dialog {
            id,
            data: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            expect_response: false,
        }
    }

    pub fn expecting_response(self) -> Self {
        match self {
            Reply::Dialog { id, data, .. } => Reply::Dialog {
                id,
                data,
                expect_response: true,
            },
            other => other,
        }
    }

    pub fn dialog_id(&self) -> Option<DialogId> {
        match self {
            Reply::Dialog { id, .. } => Some(*id),
            Reply::Speak(_) => None,
        }
    }

    pub fn expects_response(&self) -> bool {
        matches!(
            self,
            Reply::Dialog {
                expect_response: true,
                ..
            }
        )
    }
}

/// Dialog wording, one template per dialog, with `{{name}}` placeholders
#[derive(Debug, Clone)]
pub struct DialogCatalog {
    templates: HashMap<DialogId, String>,
}

impl Default for DialogCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogCatalog {
    /// Catalog with the built-in English wording
    pub fn new() -> Self {
        Self {
            templates: DialogId::ALL
                .into_iter()
                .map(|id| (id, id.default_template().to_string()))
                .collect(),
        }
    }

    /// Replace wording by dialog name; returns the names that matched no dialog
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> (Self, Vec<String>) {
        let mut unknown = Vec::new();
        for (name, template) in overrides {
            match DialogId::from_name(name) {
                Some(id) => {
                    self.templates.insert(id, template.clone());
                }
                None => unknown.push(name.clone()),
            }
        }
        unknown.sort();
        (self, unknown)
    }

    pub fn template(&self, id: DialogId) -> &str {
        self.templates
            .get(&id)
            .map(String::as_str)
            .unwrap_or_else(|| id.default_template())
    }

    /// Text to speak for a reply; placeholders without data render empty
    pub fn render(&self, reply: &Reply) -> String {
        match reply {
            Reply::Speak(text) => text.clone(),
            Reply::Dialog { id, data, .. } => fill(self.template(*id), data),
        }
    }
}

fn fill(template: &str, data: &DialogData) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                if let Some(value) = data.get(key) {
                    out.push_str(value);
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for id in DialogId::ALL {
            assert_eq!(DialogId::from_name(id.name()), Some(id));
        }
        assert_eq!(DialogId::from_name("Nope"), None);
    }

    #[test]
    fn test_render_fills_placeholders() {
        let catalog = DialogCatalog::new();
        let reply = Reply::dialog_with(
            DialogId::ParkLocation,
            [
                ("park", "Zion National Park".to_string()),
                ("location", "utah".to_string()),
            ],
        );
        assert_eq!(catalog.render(&reply), "Zion National Park is in utah");
    }

    #[test]
    fn test_missing_data_renders_empty() {
        let catalog = DialogCatalog::new();
        let reply = Reply::dialog(DialogId::NoParksFound);
        assert_eq!(
            catalog.render(&reply),
            "I could not find a national park called "
        );
    }

    #[test]
    fn test_speak_renders_verbatim() {
        let catalog = DialogCatalog::new();
        assert_eq!(catalog.render(&Reply::Speak("Hello {{x}}".into())), "Hello {{x}}");
    }

    #[test]
    fn test_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert("Quiz.Question.Correct".to_string(), "Yes! {{ park }}".to_string());
        overrides.insert("Bogus.Dialog".to_string(), "ignored".to_string());

        let (catalog, unknown) = DialogCatalog::new().with_overrides(&overrides);
        assert_eq!(unknown, vec!["Bogus.Dialog"]);

        let reply = Reply::dialog_with(DialogId::QuizQuestionCorrect, [("park", "Acadia".into())]);
        assert_eq!(catalog.render(&reply), "Yes! Acadia");
    }

    #[test]
    fn test_unterminated_placeholder_kept() {
        assert_eq!(fill("Hi {{name", &DialogData::new()), "Hi {{name");
    }

    #[test]
    fn test_expecting_response() {
        let reply = Reply::dialog(DialogId::AskQuizQuestion).expecting_response();
        assert!(reply.expects_response());
        assert!(!Reply::Speak("x".into()).expecting_response().expects_response());
    }
}
