//! # Prompt
//!
//! Chat message model and the fixed chef instructions sent to the LLM.
//!
//! ## Request shapes
//!
//! - **Text**: `[System(chef instruction), User(prompt)]`
//! - **Image**: `[System(chef image instruction), User([Text(question), ImageUrl(url)])]`
//!
//! The system instructions carry a formatting contract (Discord markdown with
//! headings) that the reply path trusts without validation.
//!
//! ## External interactions
//!
//! - **AI models**: Output is converted to OpenAI Chat Completions messages by `llm-client`.

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
}

/// One element of a multi-part user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    ImageUrl(String),
}

/// Message body: plain text, or a list of parts (vision requests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Concatenated text of the content, ignoring image parts.
    pub fn text(&self) -> String {
        match self {
            MessageContent::Text(t) => t.clone(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|p| match p {
                    ContentPart::Text(t) => Some(t.as_str()),
                    ContentPart::ImageUrl(_) => None,
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: MessageContent::Text(content.into()),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Text(content.into()),
        }
    }

    /// User message with a text part followed by an image part.
    pub fn user_with_image(text: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Parts(vec![
                ContentPart::Text(text.into()),
                ContentPart::ImageUrl(image_url.into()),
            ]),
        }
    }
}

/// Chef instruction for plain text questions.
pub const CHEF_TEXT_SYSTEM_PROMPT: &str = "You are a master chef that knows every recipe. \
Reply with formatted discord markdown, use headings and sub headings. \
Make sure to only respond to messages about food and nothing else. \
Also do not mention you are using markdown";

/// Chef instruction for image questions.
pub const CHEF_IMAGE_SYSTEM_PROMPT: &str = "You are a master chef that knows every recipe. \
Reply with formatted discord markdown, use headings and sub headings. \
If the image does not look like a food, tell the user that they can't eat that. \
Do not mention markdown";

/// Question sent alongside an uploaded image.
pub const IMAGE_QUESTION: &str = "How do I make this/these dish(es)?";

/// Builds the text request: system instruction, then the user's prompt.
///
/// `system_prompt` falls back to [`CHEF_TEXT_SYSTEM_PROMPT`] when `None`.
pub fn text_request(system_prompt: Option<&str>, prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt.unwrap_or(CHEF_TEXT_SYSTEM_PROMPT)),
        ChatMessage::user(prompt),
    ]
}

/// Builds the image request: system instruction, then [`IMAGE_QUESTION`] with the image.
///
/// `system_prompt` falls back to [`CHEF_IMAGE_SYSTEM_PROMPT`] when `None`.
pub fn image_request(system_prompt: Option<&str>, image_url: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt.unwrap_or(CHEF_IMAGE_SYSTEM_PROMPT)),
        ChatMessage::user_with_image(IMAGE_QUESTION, image_url),
    ]
}
