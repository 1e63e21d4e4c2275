pub mod envelope;

use log::{debug, error, info, warn};

use crate::config::Config;
use crate::quiz::arithmetic::NumberPicker;
use crate::quiz::engine::QuizEngine;
use crate::quiz::{QuizError, Reply};
use envelope::{Intent, Request, RequestEnvelope, ResponseEnvelope, Session};

pub const START_QUIZ_INTENT: &str = "StartMathsQuizIntent";
pub const ANSWER_INTENT: &str = "MyAnswerIsIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const ANSWER_SLOT: &str = "Answer";

#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("Invalid Application ID: {0}")]
    InvalidApplicationId(String),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Routes each platform request to the quiz engine.
pub struct MathsQuizSkill<P: NumberPicker> {
    engine: QuizEngine<P>,
    application_id: Option<String>,
}

impl<P: NumberPicker> MathsQuizSkill<P> {
    pub fn new(config: &Config, picker: P) -> Self {
        Self {
            engine: QuizEngine::new(picker).max_questions(config.max_questions),
            application_id: config.application_id.clone(),
        }
    }

    /// Handles one turn. `Ok(None)` means the platform expects no speech back.
    pub fn handle(&mut self, event: RequestEnvelope) -> Result<Option<ResponseEnvelope>, SkillError> {
        let session = &event.session;
        debug!(
            "event.session.application.applicationId={}",
            session.application.application_id
        );

        if let Some(expected) = &self.application_id {
            if &session.application.application_id != expected {
                return Err(SkillError::InvalidApplicationId(
                    session.application.application_id.clone(),
                ));
            }
        }

        if session.new {
            info!(
                "Session started requestId={}, sessionId={}",
                event.request.request_id().unwrap_or("-"),
                session.session_id
            );
        }

        let reply = match &event.request {
            Request::LaunchRequest { request_id } => {
                info!("Launch requestId={}, sessionId={}", request_id, session.session_id);
                self.engine.start_quiz(&session.attributes.clone().unwrap_or_default())
            }
            Request::IntentRequest { request_id, intent } => {
                info!(
                    "Intent {} requestId={}, sessionId={}",
                    intent.name, request_id, session.session_id
                );
                self.on_intent(intent, session)?
            }
            Request::SessionEndedRequest { request_id, reason } => {
                info!(
                    "Session ended requestId={}, sessionId={}, reason={}",
                    request_id,
                    session.session_id,
                    reason.as_deref().unwrap_or("unknown")
                );
                return Ok(None);
            }
            Request::Unsupported => {
                warn!("Ignoring unsupported request for sessionId={}", session.session_id);
                return Ok(None);
            }
        };

        Ok(Some(ResponseEnvelope::from(reply)))
    }

    /// One request envelope in, one JSON line out: the response, `null`, or an error object.
    pub fn handle_line(&mut self, line: &str) -> String {
        debug!("Request: {}", line);

        let event: RequestEnvelope = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(err) => {
                error!("Malformed request: {}", err);
                return error_line(&format!("Malformed request: {}", err));
            }
        };

        match self.handle(event) {
            Ok(response) => match serde_json::to_string(&response) {
                Ok(json) => json,
                Err(err) => {
                    error!("Failed to encode response: {}", err);
                    error_line(&err.to_string())
                }
            },
            Err(err) => {
                error!("Turn failed: {}", err);
                error_line(&err.to_string())
            }
        }
    }

    fn on_intent(&mut self, intent: &Intent, session: &Session) -> Result<Reply, QuizError> {
        let attributes = session.attributes.clone().unwrap_or_default();

        match intent.name.as_str() {
            START_QUIZ_INTENT => Ok(self.engine.start_quiz(&attributes)),
            ANSWER_INTENT => Ok(self
                .engine
                .check_answer(intent.slot_value(ANSWER_SLOT), &attributes)),
            HELP_INTENT => Ok(self.engine.handle_help(&attributes)),
            STOP_INTENT | CANCEL_INTENT => Ok(self.engine.handle_stop()),
            other => Err(QuizError::UnrecognizedIntent(other.to_string())),
        }
    }
}

fn error_line(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
