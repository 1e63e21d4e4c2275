//! Wire format of the voice platform's skill requests and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::quiz::{Reply, SessionAttributes};

pub const RESPONSE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    pub session: Session,
    pub request: Request,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    pub application: Application,
    /// Absent on the first turn of a session.
    #[serde(default)]
    pub attributes: Option<SessionAttributes>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename_all = "camelCase")]
    LaunchRequest { request_id: String },
    #[serde(rename_all = "camelCase")]
    IntentRequest { request_id: String, intent: Intent },
    #[serde(rename_all = "camelCase")]
    SessionEndedRequest {
        request_id: String,
        #[serde(default)]
        reason: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

impl Request {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Request::LaunchRequest { request_id }
            | Request::IntentRequest { request_id, .. }
            | Request::SessionEndedRequest { request_id, .. } => Some(request_id.as_str()),
            Request::Unsupported => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|slot| slot.value.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub session_attributes: SessionAttributes,
    pub response: SpeechletResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    pub output_speech: OutputSpeech,
    pub card: Card,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    pub fn ssml(text: &str) -> Self {
        OutputSpeech::Ssml {
            ssml: format!("<speak>{}</speak>", text),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl From<Reply> for ResponseEnvelope {
    fn from(reply: Reply) -> Self {
        let card = Card::Simple {
            title: format!("SessionSpeechlet - {}", reply.title.as_str()),
            content: format!("SessionSpeechlet - {}", reply.speech),
        };
        let reprompt = reply.reprompt.as_deref().map(|text| Reprompt {
            output_speech: OutputSpeech::ssml(text),
        });

        Self {
            version: RESPONSE_VERSION,
            session_attributes: reply.attributes,
            response: SpeechletResponse {
                output_speech: OutputSpeech::ssml(&reply.speech),
                card,
                reprompt,
                should_end_session: reply.should_end_session,
            },
        }
    }
}
