use crate::nps::QuizQuestion;

/// Where the quiz conversation stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    /// No answer expected. `last` is the question most recently asked, kept
    /// so it can be repeated after it was answered.
    Idle { last: Option<QuizQuestion> },
    /// A question was asked; the next free utterance is its answer.
    AwaitingAnswer(QuizQuestion),
}

impl Default for QuizState {
    fn default() -> Self {
        QuizState::Idle { last: None }
    }
}

/// Inputs to the quiz machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// A new question was generated
    Generated(QuizQuestion),
    /// Generating a question failed or produced nothing
    GenerationFailed,
    Answer(String),
    Repeat,
}

/// What the skill should say after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Ask(QuizQuestion),
    Correct(QuizQuestion),
    Wrong(QuizQuestion),
    NoQuestion,
    ServerError,
}

impl QuizState {
    pub fn awaiting_answer(&self) -> bool {
        matches!(self, QuizState::AwaitingAnswer(_))
    }

    /// The pending or retained question, if any
    pub fn question(&self) -> Option<&QuizQuestion> {
        match self {
            QuizState::Idle { last } => last.as_ref(),
            QuizState::AwaitingAnswer(q) => Some(q),
        }
    }

    pub fn step(self, event: QuizEvent) -> (QuizState, QuizOutcome) {
        match (self, event) {
            (_, QuizEvent::Generated(q)) => {
                (QuizState::AwaitingAnswer(q.clone()), QuizOutcome::Ask(q))
            }
            (_, QuizEvent::GenerationFailed) => {
                (QuizState::Idle { last: None }, QuizOutcome::ServerError)
            }
            (QuizState::AwaitingAnswer(q), QuizEvent::Answer(utterance)) => {
                let outcome = if is_correct(&q, &utterance) {
                    QuizOutcome::Correct(q.clone())
                } else {
                    QuizOutcome::Wrong(q.clone())
                };
                (QuizState::Idle { last: Some(q) }, outcome)
            }
            (idle @ QuizState::Idle { .. }, QuizEvent::Answer(_)) => {
                (idle, QuizOutcome::NoQuestion)
            }
            (QuizState::AwaitingAnswer(q), QuizEvent::Repeat)
            | (QuizState::Idle { last: Some(q) }, QuizEvent::Repeat) => {
                (QuizState::AwaitingAnswer(q.clone()), QuizOutcome::Ask(q))
            }
            (idle @ QuizState::Idle { last: None }, QuizEvent::Repeat) => {
                (idle, QuizOutcome::NoQuestion)
            }
        }
    }
}

/// Raw, case-sensitive containment of the utterance in the spoken location.
///
/// "nevada" answers "california and nevada"; so does "and".
pub fn is_correct(question: &QuizQuestion, utterance: &str) -> bool {
    question.location.contains(utterance)
}
