//! Append-only conversation log behind the guru chat panel.
//!
//! Messages are never edited or removed once appended. While a reply is
//! outstanding the log refuses further sends; a failed send is represented
//! in-band by a synthetic guru apology rather than a separate error state.

use chrono::Utc;
use shared::GamePickDto;
use std::rc::Rc;
use yew::prelude::*;

pub const WELCOME_MESSAGE: &str = "👋 Hey! I'm your AI Sports Guru. Ask me about upcoming games, and I'll suggest the best bets with predictions!";

pub const CONNECTIVITY_APOLOGY: &str =
    "Oops! I'm having trouble connecting right now. Make sure the backend is running!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuthor {
    Guru,
    User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub author: ChatAuthor,
    pub text: String,
    pub sent_at: String,
    pub picks: Vec<GamePickDto>,
}

impl ChatMessage {
    fn new(author: ChatAuthor, text: String, sent_at: String, picks: Vec<GamePickDto>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            author,
            text,
            sent_at,
            picks,
        }
    }

    fn guru_now(text: &str) -> Self {
        Self::new(
            ChatAuthor::Guru,
            text.to_string(),
            Utc::now().to_rfc3339(),
            Vec::new(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatLog {
    pub messages: Vec<ChatMessage>,
    pub awaiting_reply: bool,
}

impl ChatLog {
    /// A fresh log opens with the guru's welcome, not empty.
    pub fn seeded() -> Self {
        Self {
            messages: vec![ChatMessage::guru_now(WELCOME_MESSAGE)],
            awaiting_reply: false,
        }
    }
}

pub enum ChatAction {
    /// User submitted the input. Ignored while a reply is outstanding or when
    /// the trimmed text is empty.
    Send { text: String },
    /// The backend answered the outstanding send.
    ReplyArrived {
        text: String,
        sent_at: String,
        picks: Vec<GamePickDto>,
    },
    /// The outstanding send failed; the guru apologizes in-band.
    ReplyFailed,
}

impl Reducible for ChatLog {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ChatAction::Send { text } => {
                let trimmed = text.trim();
                if trimmed.is_empty() || self.awaiting_reply {
                    return self;
                }
                let mut next = (*self).clone();
                next.messages.push(ChatMessage::new(
                    ChatAuthor::User,
                    trimmed.to_string(),
                    Utc::now().to_rfc3339(),
                    Vec::new(),
                ));
                next.awaiting_reply = true;
                Rc::new(next)
            }
            ChatAction::ReplyArrived {
                text,
                sent_at,
                picks,
            } => {
                if !self.awaiting_reply {
                    return self;
                }
                let mut next = (*self).clone();
                next.messages
                    .push(ChatMessage::new(ChatAuthor::Guru, text, sent_at, picks));
                next.awaiting_reply = false;
                Rc::new(next)
            }
            ChatAction::ReplyFailed => {
                if !self.awaiting_reply {
                    return self;
                }
                let mut next = (*self).clone();
                next.messages.push(ChatMessage::guru_now(CONNECTIVITY_APOLOGY));
                next.awaiting_reply = false;
                Rc::new(next)
            }
        }
    }
}
