//! Intent dispatcher: one client call per intent, one reply per call.

pub mod quiz;

pub use quiz::{QuizEvent, QuizOutcome, QuizState};

use crate::dialog::{DialogId, Reply};
use crate::intent::Intent;
use crate::nps::{self, NpsClient, QuizQuestion};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// National parks skill
pub struct ParkSkill {
    nps: Arc<NpsClient>,
    quiz: QuizState,
}

impl ParkSkill {
    pub fn new(nps: Arc<NpsClient>) -> Self {
        Self {
            nps,
            quiz: QuizState::default(),
        }
    }

    pub fn client(&self) -> &Arc<NpsClient> {
        &self.nps
    }

    /// Settings changed: use a new API key from the next request on
    pub async fn set_api_key(&self, key: impl Into<String>) {
        self.nps.set_api_key(key).await;
    }

    /// Quiz context: when true the host routes the next free utterance to
    /// [`Intent::AnswerQuiz`] instead of matching it against other intents.
    pub fn awaiting_answer(&self) -> bool {
        self.quiz.awaiting_answer()
    }

    pub fn quiz_state(&self) -> &QuizState {
        &self.quiz
    }

    pub async fn handle(&mut self, intent: Intent) -> Reply {
        debug!(target: "park_skill", intent = intent.name(), "Handling intent");

        match intent {
            Intent::ListParks { location } => self.list_parks(location).await,
            Intent::DescribePark { park } => self.describe_park(park).await,
            Intent::WhereIsPark { park } => self.where_is_park(park).await,
            Intent::StartQuiz => self.start_quiz().await,
            Intent::AnswerQuiz { utterance } => self.step_quiz(QuizEvent::Answer(utterance)),
            Intent::RepeatQuiz => self.step_quiz(QuizEvent::Repeat),
        }
    }

    async fn list_parks(&self, location: String) -> Reply {
        match self.nps.get_parks_by_state(&location).await {
            Ok(Some(parks)) => Reply::dialog_with(
                DialogId::ParkList,
                [("location", location), ("parks", parks.join(" "))],
            ),
            Ok(None) => Reply::dialog_with(DialogId::NoParksFoundState, [("location", location)]),
            Err(e) => server_error("ParkListIntent", &e),
        }
    }

    async fn describe_park(&self, park: String) -> Reply {
        match self.nps.get_description(&park).await {
            Ok(Some(description)) => Reply::Speak(description),
            Ok(None) => Reply::dialog_with(DialogId::NoParksFound, [("park", park)]),
            Err(e) => server_error("ParkDescriptionIntent", &e),
        }
    }

    async fn where_is_park(&self, park: String) -> Reply {
        match self.nps.get_location(&park).await {
            Ok(Some(found)) => Reply::dialog_with(
                DialogId::ParkLocation,
                [("location", found.location), ("park", found.park)],
            ),
            Ok(None) => Reply::dialog_with(DialogId::NoParksFound, [("park", park)]),
            Err(e) => server_error("ParkLocationIntent", &e),
        }
    }

    async fn start_quiz(&mut self) -> Reply {
        let event = match self.nps.get_quiz_question().await {
            Ok(Some(question)) => {
                info!(target: "park_skill", park = %question.park, "Quiz question generated");
                QuizEvent::Generated(question)
            }
            Ok(None) => {
                warn!(target: "park_skill", "Quiz state had no parks to ask about");
                QuizEvent::GenerationFailed
            }
            Err(e) => {
                warn!(target: "park_skill", error = %e, "Quiz question generation failed");
                QuizEvent::GenerationFailed
            }
        };
        self.step_quiz(event)
    }

    fn step_quiz(&mut self, event: QuizEvent) -> Reply {
        let state = std::mem::take(&mut self.quiz);
        let (next, outcome) = state.step(event);
        self.quiz = next;

        match outcome {
            QuizOutcome::Ask(q) => question_reply(DialogId::AskQuizQuestion, q).expecting_response(),
            QuizOutcome::Correct(_) => Reply::dialog(DialogId::QuizQuestionCorrect),
            QuizOutcome::Wrong(q) => question_reply(DialogId::QuizQuestionWrong, q),
            QuizOutcome::NoQuestion => Reply::dialog(DialogId::QuizQuestionNone),
            QuizOutcome::ServerError => Reply::dialog(DialogId::ErrorCallingServer),
        }
    }
}

fn question_reply(id: DialogId, q: QuizQuestion) -> Reply {
    Reply::dialog_with(id, [("location", q.location), ("park", q.park)])
}

fn server_error(intent: &str, e: &nps::NpsError) -> Reply {
    warn!(target: "park_skill", intent = intent, error = %e, "Park service call failed");
    Reply::dialog(DialogId::ErrorCallingServer)
}
