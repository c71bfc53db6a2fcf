//! Request shaping for `/api/ai`
//!
//! A non-empty `customPrompt` makes the request a question about the video;
//! anything else is a summary of `description`. `title` and `analysisType`
//! are carried along but never change the kind.

use super::prompt::{PromptData, RequestKind};
use super::validation::{InputText, InputValidator, ValidationFailure};
use serde_json::{Map, Value};

/// A request that passed validation and is ready for the prompt builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedRequest {
    pub kind: RequestKind,
    pub data: PromptData,
    /// The validated (trimmed) text; its length is reported as `inputLength`
    pub validated: String,
}

impl ShapedRequest {
    pub fn input_length(&self) -> usize {
        self.validated.chars().count()
    }
}

/// Decide the request kind from the body
pub fn detect_kind(body: &Map<String, Value>) -> RequestKind {
    match body.get("customPrompt") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => RequestKind::Summary,
        Some(Value::String(s)) if s.is_empty() => RequestKind::Summary,
        Some(_) => RequestKind::Question,
    }
}

/// Text of an optional string field; absent or `null` reads as empty
fn optional_text(body: &Map<String, Value>, field: &str) -> Result<String, ValidationFailure> {
    match InputText::from_json(body.get(field)) {
        InputText::Missing => Ok(String::new()),
        InputText::Text(text) => Ok(text.to_string()),
        InputText::NotText => Err(ValidationFailure::WrongType),
    }
}

/// Shape and validate a JSON body
pub fn shape_request(
    body: &Map<String, Value>,
    validator: &InputValidator,
) -> Result<ShapedRequest, ValidationFailure> {
    match detect_kind(body) {
        RequestKind::Question => {
            let title = optional_text(body, "title")?;
            let description = optional_text(body, "description")?;
            let question = match body.get("customPrompt") {
                Some(Value::String(s)) => s.clone(),
                _ => return Err(ValidationFailure::WrongType),
            };

            let composed = format!(
                "Title: {}\nTranscript: {}\nUser Question: {}",
                title, description, question
            );
            let validated = validator.validate(InputText::Text(&composed)).into_result()?;

            Ok(ShapedRequest {
                kind: RequestKind::Question,
                data: PromptData {
                    title,
                    description,
                    custom_prompt: Some(question),
                },
                validated,
            })
        }
        _ => {
            let validated = validator
                .validate(InputText::from_json(body.get("description")))
                .into_result()?;
            let title = optional_text(body, "title").unwrap_or_default();

            Ok(ShapedRequest {
                kind: RequestKind::Summary,
                data: PromptData {
                    title,
                    description: validated.clone(),
                    custom_prompt: None,
                },
                validated,
            })
        }
    }
}
