//! Core types and traits: Bot, Responder, attachments, errors, logger.
//! Transport-agnostic.

pub mod attachment;
pub mod bot;
pub mod error;
pub mod logger;

pub use attachment::ImageAttachment;
pub use bot::{Bot, Responder, REPLY_EMBED_COLOR};
pub use error::{BotError, CommandError, Result};
pub use logger::init_tracing;
