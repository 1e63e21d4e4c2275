pub mod arithmetic;
pub mod encouragement;
pub mod engine;

use serde::{Deserialize, Deserializer, Serialize};

/// Number of questions in one playthrough unless configured otherwise.
pub const MAX_QUESTIONS: u32 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Invalid intent: {0}")]
    UnrecognizedIntent(String),
}

/// The attribute bag the voice platform stores between turns.
///
/// Nothing else survives from one turn to the next, so the quiz position is
/// carried entirely by these four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAttributes {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<u32>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub correct: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total: u32,
}

impl SessionAttributes {
    pub fn new(question: Question, correct: u32, total: u32) -> Self {
        Self {
            question: Some(question.text),
            answer: Some(question.answer),
            correct,
            total,
        }
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub answer: u32,
}

impl Question {
    pub fn new(text: String, answer: u32) -> Self {
        Self { text, answer }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTitle {
    Welcome,
    SessionEnded,
    Question,
    ThankYou,
}

impl CardTitle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardTitle::Welcome => "Welcome",
            CardTitle::SessionEnded => "Session Ended",
            CardTitle::Question => "Question",
            CardTitle::ThankYou => "Thank you",
        }
    }
}

/// What one turn produces: the text to speak and the state to hand back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub attributes: SessionAttributes,
    pub title: CardTitle,
    pub speech: String,
    pub reprompt: Option<String>,
    pub should_end_session: bool,
}
