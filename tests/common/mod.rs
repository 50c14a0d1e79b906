#![allow(dead_code)]

use async_trait::async_trait;
use paydesk::endpoint::{ChatEndpoint, ChatError, ChatResult, EndpointReply};
use paydesk::panel::ConversationSurface;
use paydesk::theme::{ThemeChangeEvent, ThemeSurface};
use paydesk::types::ChatMessage;
use std::sync::{Arc, Mutex};

/// Ordered record of everything the panel and endpoint did.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

pub struct RecordingSurface {
    pub input: String,
    pub busy: bool,
    pub messages: Vec<ChatMessage>,
    journal: Journal,
}

impl RecordingSurface {
    pub fn new(input: &str, journal: Journal) -> Self {
        Self {
            input: input.to_string(),
            busy: false,
            messages: Vec::new(),
            journal,
        }
    }

    fn log(&self, entry: impl Into<String>) {
        self.journal.lock().unwrap().push(entry.into());
    }
}

impl ConversationSurface for RecordingSurface {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.log("clear");
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.log(format!("busy:{busy}"));
    }

    fn focus_input(&mut self) {
        self.log("focus");
    }

    fn append_message(&mut self, message: ChatMessage) {
        self.log(format!("append:{}", message.role.label()));
        self.messages.push(message);
    }

    fn scroll_to_bottom(&mut self) {
        self.log("scroll");
    }
}

#[derive(Clone)]
pub enum Script {
    Respond(String),
    Reject(String),
    Offline,
}

pub struct ScriptedEndpoint {
    script: Script,
    journal: Journal,
}

impl ScriptedEndpoint {
    pub fn new(script: Script, journal: Journal) -> Self {
        Self { script, journal }
    }
}

#[async_trait]
impl ChatEndpoint for ScriptedEndpoint {
    async fn send(&self, message: &str) -> ChatResult<EndpointReply> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("request:{message}"));
        match &self.script {
            Script::Respond(text) => Ok(EndpointReply::Response(text.clone())),
            Script::Reject(error) => Ok(EndpointReply::Error(error.clone())),
            Script::Offline => Err(ChatError::new("connection refused")),
        }
    }
}

/// In-memory document for the theme controller.
#[derive(Debug, Default)]
pub struct FakeDocument {
    pub attribute: Option<String>,
    pub has_button: bool,
    /// `None` means the icon element is missing.
    pub icon: Option<String>,
    pub events: Vec<ThemeChangeEvent>,
}

impl FakeDocument {
    pub fn with_toggle() -> Self {
        Self {
            has_button: true,
            icon: Some(String::new()),
            ..Self::default()
        }
    }

    pub fn without_toggle() -> Self {
        Self::default()
    }
}

impl ThemeSurface for FakeDocument {
    fn theme_attribute(&self) -> Option<String> {
        self.attribute.clone()
    }

    fn set_theme_attribute(&mut self, value: Option<&str>) {
        self.attribute = value.map(str::to_string);
    }

    fn has_toggle_button(&self) -> bool {
        self.has_button
    }

    fn has_toggle_icon(&self) -> bool {
        self.icon.is_some()
    }

    fn set_toggle_icon(&mut self, glyph: &str) {
        if let Some(icon) = self.icon.as_mut() {
            *icon = glyph.to_string();
        }
    }

    fn dispatch_theme_change(&mut self, event: ThemeChangeEvent) {
        self.events.push(event);
    }
}
