//! Chat panel toggled by the floating button, with its append-only
//! transcript and a canned assistant.

use floatchat_core::{TimerRegistration, Timers};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

pub const PANEL_TITLE: &str = "Assistant 🤖";
pub const BOT_REPLY: &str = "Hey! Take it easy, I'm only just learning!";
pub const EMPTY_HINT: &str = "Type a message to get started…";

pub fn greeting(email: &str) -> String {
    format!("Hi {email}! I'm your assistant 🤖. Ask me anything!")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Append-only message log. Clones share the same log, so delayed replies
/// can append after the submitting call has returned.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    messages: Rc<RefCell<Vec<ChatMessage>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, message: ChatMessage) {
        self.messages.borrow_mut().push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    pub fn last(&self) -> Option<ChatMessage> {
        self.messages.borrow().last().cloned()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.borrow().clone()
    }
}

pub struct ChatPanel {
    timers: Timers,
    reply_delay_ms: u64,
    user_email: String,
    open: bool,
    greeted: bool,
    transcript: Transcript,
    // Dropping the panel cancels replies that have not arrived yet.
    pending_replies: SmallVec<[TimerRegistration; 2]>,
}

impl ChatPanel {
    pub fn new(timers: Timers, user_email: impl Into<String>, reply_delay_ms: u64) -> Self {
        Self {
            timers,
            reply_delay_ms,
            user_email: user_email.into(),
            open: false,
            greeted: false,
            transcript: Transcript::new(),
            pending_replies: SmallVec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Header text of the open panel.
    pub fn title(&self) -> &'static str {
        PANEL_TITLE
    }

    /// Hint shown in place of an empty transcript.
    pub fn hint(&self) -> Option<&'static str> {
        self.transcript.is_empty().then_some(EMPTY_HINT)
    }

    /// Flips the open state and returns the new one.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open();
        }
        self.open
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        if !self.greeted {
            self.greeted = true;
            self.transcript.push(ChatMessage::bot(greeting(&self.user_email)));
        }
        log::debug!("chat panel opened");
    }

    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            log::debug!("chat panel closed");
        }
    }

    /// Appends `text` as a user message and schedules the canned reply.
    ///
    /// Returns false, appending nothing, when the panel is closed or the
    /// trimmed text is empty.
    pub fn submit(&mut self, text: &str) -> bool {
        let text = text.trim();
        if !self.open || text.is_empty() {
            return false;
        }
        self.transcript.push(ChatMessage::user(text));

        self.pending_replies.retain(|reply| reply.is_active());
        let transcript = self.transcript.clone();
        let reply = self.timers.post_delayed(self.reply_delay_ms, move || {
            transcript.push(ChatMessage::bot(BOT_REPLY));
        });
        self.pending_replies.push(reply);
        true
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
            .iter()
            .filter(|reply| reply.is_active())
            .count()
    }
}

impl std::fmt::Debug for ChatPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatPanel")
            .field("open", &self.open)
            .field("greeted", &self.greeted)
            .field("messages", &self.transcript.len())
            .field("pending_replies", &self.pending_replies())
            .finish()
    }
}
