use log::debug;

use crate::quiz::arithmetic::{self, NumberPicker};
use crate::quiz::encouragement::PhrasePool;
use crate::quiz::{CardTitle, Reply, SessionAttributes, MAX_QUESTIONS};

const GREETING_TEXT: &str = "Welcome to Maths Quiz.";
const HELP_TEXT: &str = "Welcome to the Alexa Maths Quiz";
const HELP_REPROMPT_TEXT: &str = "Please tell me your answer";
const FAREWELL_TEXT: &str = "Thank you for trying the Alexa Maths Quiz. Have a nice day!";

/// Drives one quiz turn at a time.
///
/// The engine keeps no per-session state of its own: every operation takes
/// the attributes handed back by the platform and returns the next ones.
pub struct QuizEngine<P: NumberPicker> {
    picker: P,
    correct_phrases: PhrasePool,
    wrong_phrases: PhrasePool,
    max_questions: u32,
}

impl<P: NumberPicker> QuizEngine<P> {
    pub fn new(picker: P) -> Self {
        Self::with_phrases(picker, PhrasePool::correct(), PhrasePool::wrong())
    }

    pub fn with_phrases(picker: P, correct_phrases: PhrasePool, wrong_phrases: PhrasePool) -> Self {
        Self {
            picker,
            correct_phrases,
            wrong_phrases,
            max_questions: MAX_QUESTIONS,
        }
    }

    /// Zero is ignored, a quiz always has at least one question.
    pub fn max_questions(mut self, max_questions: u32) -> Self {
        self.max_questions = max_questions.max(1);
        self
    }

    pub fn start_quiz(&mut self, _prior: &SessionAttributes) -> Reply {
        self.generate_question(GREETING_TEXT, &SessionAttributes::default())
    }

    pub fn generate_question(&mut self, prefix: &str, prior: &SessionAttributes) -> Reply {
        let question = arithmetic::generate_addition(&mut self.picker);
        let total = prior.total.saturating_add(1);
        debug!("Question {} of {}: {}", total, self.max_questions, question.text);

        let speech = format!("{}. What is {}?", prefix, question.text);
        Reply {
            attributes: SessionAttributes::new(question, prior.correct, total),
            title: CardTitle::Question,
            reprompt: Some(speech.clone()),
            speech,
            should_end_session: false,
        }
    }

    pub fn check_answer(&mut self, submitted: Option<&str>, prior: &SessionAttributes) -> Reply {
        let given = submitted.and_then(|text| text.trim().parse::<u32>().ok());
        // Sums start at 2, a stored zero means no question is pending.
        let expected = prior.answer.filter(|answer| *answer != 0);
        let is_correct = matches!((given, expected), (Some(given), Some(answer)) if given == answer);
        debug!(
            "Checking answer {:?} against {:?}: {}",
            submitted,
            expected,
            if is_correct { "correct" } else { "wrong" }
        );

        if prior.total >= self.max_questions {
            // The final answer ends the quiz without touching the score.
            return self.end_quiz(prior);
        }

        if is_correct {
            let mut next = prior.clone();
            next.correct = next.correct.saturating_add(1);
            let prefix = format!(
                "{}. You got {} right.",
                self.correct_phrases.pick(&mut self.picker),
                next.correct
            );
            return self.generate_question(&prefix, &next);
        }

        let interjection = self.wrong_phrases.pick(&mut self.picker);
        let prefix = match expected {
            Some(answer) => format!("{}. It is {}", interjection, answer),
            None => interjection,
        };
        self.generate_question(&prefix, prior)
    }

    pub fn end_quiz(&mut self, attributes: &SessionAttributes) -> Reply {
        let speech = format!(
            "{}. You got {} out of {} questions right. Thank you for playing.",
            self.correct_phrases.pick(&mut self.picker),
            attributes.correct,
            attributes.total
        );
        Reply {
            attributes: attributes.clone(),
            title: CardTitle::ThankYou,
            reprompt: Some(speech.clone()),
            speech,
            should_end_session: true,
        }
    }

    pub fn handle_stop(&self) -> Reply {
        Reply {
            attributes: SessionAttributes::default(),
            title: CardTitle::SessionEnded,
            speech: FAREWELL_TEXT.to_string(),
            reprompt: None,
            should_end_session: true,
        }
    }

    /// Does not restate the pending question; the quiz resumes on the next answer.
    pub fn handle_help(&self, attributes: &SessionAttributes) -> Reply {
        Reply {
            attributes: attributes.clone(),
            title: CardTitle::Welcome,
            speech: HELP_TEXT.to_string(),
            reprompt: Some(HELP_REPROMPT_TEXT.to_string()),
            should_end_session: false,
        }
    }
}
