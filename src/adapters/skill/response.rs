//! Voice platform response envelope.

use serde::Serialize;

use crate::config::DisplayConfig;
use crate::domain::dialog::TurnResponse;
use crate::domain::measurement::SessionAttributes;

use super::request::DeviceKind;

const ENVELOPE_VERSION: &str = "1.0";
const TEMPLATE_TOKEN: &str = "metabolic-calculator";

/// Top-level response body returned to the voice platform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<SessionAttributes>,
    pub response: SpeechletResponse,
}

impl ResponseEnvelope {
    /// Wraps a turn reply for the requesting device.
    pub fn for_turn(
        attributes: SessionAttributes,
        turn: &TurnResponse,
        device: DeviceKind,
        display: &DisplayConfig,
    ) -> Self {
        let directives = match device {
            DeviceKind::Display => vec![Directive::render(turn, display)],
            DeviceKind::Legacy => Vec::new(),
        };

        Self {
            version: ENVELOPE_VERSION,
            session_attributes: Some(attributes),
            response: SpeechletResponse {
                output_speech: Some(Text::plain(&turn.speech)),
                card: Some(Card::Simple {
                    title: turn.card_title.clone(),
                    content: turn.card_body.clone(),
                }),
                reprompt: turn.reprompt.as_deref().map(|text| Reprompt {
                    output_speech: Text::plain(text),
                }),
                directives,
                should_end_session: Some(turn.end_session),
            },
        }
    }

    /// Acknowledges a request that produces no speech.
    pub fn empty() -> Self {
        Self {
            version: ENVELOPE_VERSION,
            session_attributes: None,
            response: SpeechletResponse::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

/// Typed text, used for speech and template content alike.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Text {
    PlainText { text: String },
}

impl Text {
    fn plain(text: &str) -> Self {
        Self::PlainText {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Directive {
    #[serde(rename = "Display.RenderTemplate")]
    RenderTemplate { template: BodyTemplate },
}

impl Directive {
    fn render(turn: &TurnResponse, display: &DisplayConfig) -> Self {
        Self::RenderTemplate {
            template: BodyTemplate {
                kind: "BodyTemplate2",
                token: TEMPLATE_TOKEN,
                back_button: "HIDDEN",
                image: Image::single("Metabolic Calculator logo", display.logo_url()),
                background_image: Image::single("Background", display.background_url()),
                title: display.title.clone(),
                text_content: TextContent {
                    primary_text: Text::plain(&turn.card_body),
                },
            },
        }
    }
}

/// Screen layout with an image beside the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyTemplate {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub token: &'static str,
    pub back_button: &'static str,
    pub image: Image,
    pub background_image: Image,
    pub title: String,
    pub text_content: TextContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub content_description: String,
    pub sources: Vec<ImageSource>,
}

impl Image {
    fn single(description: &str, url: String) -> Self {
        Self {
            content_description: description.to_string(),
            sources: vec![ImageSource { url }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageSource {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub primary_text: Text,
}
