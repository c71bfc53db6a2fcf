//! Prompt construction for upstream generation calls

use serde::{Deserialize, Serialize};

/// What the caller wants from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// Summarize the description
    Summary,
    /// Answer a question about the video
    Question,
    /// Send the description as-is
    Passthrough,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Summary => "summary",
            RequestKind::Question => "question",
            RequestKind::Passthrough => "passthrough",
        }
    }

    /// Kind-specific response field, in addition to `response`
    pub fn response_field(&self) -> Option<&'static str> {
        match self {
            RequestKind::Summary => Some("summary"),
            RequestKind::Question => Some("analysis"),
            RequestKind::Passthrough => None,
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields a prompt can draw on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptData {
    pub title: String,
    /// Video description or transcript
    pub description: String,
    pub custom_prompt: Option<String>,
}

/// Build the prompt text for one generation call
pub fn build_prompt(kind: RequestKind, data: &PromptData) -> String {
    match kind {
        RequestKind::Summary => format!(
            "You are an AI that summarizes YouTube video transcripts.\n\
             Summarize the following transcript clearly in under 200 words:\n\
             \n\
             {description}\n",
            description = data.description
        ),
        RequestKind::Question => format!(
            "You are an AI assistant analyzing a YouTube video transcript.\n\
             \n\
             VIDEO TITLE: {title}\n\
             CONTEXT:\n\
             {description}\n\
             \n\
             USER QUESTION: {question}\n\
             \n\
             Answer using only the context above. If the answer is not in the context, say so.\n\
             If needed, give a short answer AND a detailed explanation separately.\n\
             Example format:\n\
             \n\
             Short Answer: ...\n\
             Detailed Explanation: ...\n",
            title = data.title,
            description = data.description,
            question = data.custom_prompt.as_deref().unwrap_or_default()
        ),
        RequestKind::Passthrough => data.description.clone(),
    }
}
