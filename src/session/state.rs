//! Chat session transitions

use serde::{Deserialize, Serialize};

use super::history::{ChatHistory, ChatMessage};
use crate::utils::truncate_chars;
use crate::youtube::VideoDetails;
use crate::youtube::insights::format_duration;

/// Characters of the video description sent with a summary request
pub const SUMMARY_DESCRIPTION_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    #[default]
    Hidden,
    Embedded,
    Fullscreen,
}

/// Input to [`SessionState::apply`]
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// Chat button or Ctrl+K
    OpenChat,
    Expand,
    Minimize,
    Close,
    Escape,
    /// F11
    ToggleFullscreen,
    NewVideoRequested,
    VideoLoaded(Box<VideoDetails>),
    MessageSubmitted(String),
    AnswerReceived(String),
    AnswerFailed(String),
}

/// `/api/ai` request body the UI sends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRequestBody {
    pub title: String,
    pub description: String,
    pub video_id: String,
    pub analysis_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    AskQuestion(AiRequestBody),
    RequestSummary(AiRequestBody),
}

/// Client-side view state; the gateway never stores it
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub video: Option<VideoDetails>,
    pub history: ChatHistory,
    pub ai_typing: bool,
    pub mode: ChatMode,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, event: ChatEvent) -> (SessionState, Option<Effect>) {
        let effect = match event {
            ChatEvent::OpenChat => {
                if self.video.is_some() && self.mode == ChatMode::Hidden {
                    self.mode = ChatMode::Embedded;
                    if self.history.is_empty() {
                        self.push_welcome();
                    }
                }
                None
            }
            ChatEvent::Expand => {
                if self.mode == ChatMode::Embedded {
                    self.mode = ChatMode::Fullscreen;
                }
                None
            }
            ChatEvent::Minimize => {
                if self.mode == ChatMode::Fullscreen {
                    self.mode = ChatMode::Embedded;
                }
                None
            }
            ChatEvent::Close | ChatEvent::Escape => {
                self.mode = ChatMode::Hidden;
                None
            }
            ChatEvent::ToggleFullscreen => {
                self.mode = match self.mode {
                    ChatMode::Hidden => ChatMode::Hidden,
                    ChatMode::Embedded => ChatMode::Fullscreen,
                    ChatMode::Fullscreen => ChatMode::Embedded,
                };
                None
            }
            ChatEvent::NewVideoRequested => {
                self.video = None;
                self.history.clear();
                self.ai_typing = false;
                self.mode = ChatMode::Hidden;
                None
            }
            ChatEvent::VideoLoaded(details) => {
                let request = summary_request(&details);
                self.video = Some(*details);
                Some(Effect::RequestSummary(request))
            }
            ChatEvent::MessageSubmitted(text) => {
                let text = text.trim();
                if text.is_empty() || self.ai_typing {
                    None
                } else {
                    self.history.push(ChatMessage::user(text));
                    self.ai_typing = true;
                    Some(Effect::AskQuestion(self.question_request(text)))
                }
            }
            ChatEvent::AnswerReceived(text) => {
                self.ai_typing = false;
                self.history.push(ChatMessage::ai(text));
                None
            }
            ChatEvent::AnswerFailed(reason) => {
                self.ai_typing = false;
                self.history.push(ChatMessage::ai(format!(
                    "Sorry, I encountered an error: {}",
                    reason
                )));
                None
            }
        };

        (self, effect)
    }

    fn push_welcome(&mut self) {
        if let Some(details) = &self.video {
            self.history.push(ChatMessage::ai(format!(
                "Hi! I'm your AI video assistant. I've analyzed **\"{}\"** and I'm ready to \
                 answer any questions you have about this video. You can ask me to summarize \
                 it, explain specific topics, or anything else!",
                details.video.snippet.title
            )));
        }
    }

    fn question_request(&self, question: &str) -> AiRequestBody {
        let (title, description, video_id) = match &self.video {
            Some(details) => (
                details.video.snippet.title.clone(),
                details.video.snippet.description.clone(),
                details.video.id.clone(),
            ),
            None => Default::default(),
        };

        AiRequestBody {
            title,
            description,
            video_id,
            analysis_type: "chat".to_string(),
            custom_prompt: Some(question.to_string()),
        }
    }
}

/// Summary request composed from the video metadata
pub fn summary_request(details: &VideoDetails) -> AiRequestBody {
    let video = &details.video;
    let snippet = &video.snippet;

    let description = if snippet.description.is_empty() {
        "No description available"
    } else {
        truncate_chars(&snippet.description, SUMMARY_DESCRIPTION_CHARS)
    };
    let duration = video
        .content_details
        .as_ref()
        .and_then(|details| details.duration.as_deref())
        .map(format_duration)
        .unwrap_or_else(|| "N/A".to_string());

    AiRequestBody {
        title: snippet.title.clone(),
        description: format!(
            "Title: {}\nChannel: {}\nDescription: {}\nDuration: {}",
            snippet.title, snippet.channel_title, description, duration
        ),
        video_id: video.id.clone(),
        analysis_type: "summary".to_string(),
        custom_prompt: None,
    }
}
