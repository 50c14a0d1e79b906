use crate::endpoint::HttpChatEndpoint;
use crate::panel::{ConversationPanel, ConversationSurface};
use crate::types::ChatMessage;
use dioxus::events::Key;
use dioxus::prelude::*;
use std::rc::Rc;
use std::sync::Arc;

/// Panel surface over the view's signals. Message text reaches the page
/// only as text nodes, so it is escaped by the renderer.
#[derive(Clone, Copy)]
struct SignalChatSurface {
    input: Signal<String>,
    messages: Signal<Vec<ChatMessage>>,
    sending: Signal<bool>,
    input_el: Signal<Option<Rc<MountedData>>>,
    end_anchor: Signal<Option<Rc<MountedData>>>,
}

impl ConversationSurface for SignalChatSurface {
    fn input_text(&self) -> String {
        (*self.input.peek()).clone()
    }

    fn clear_input(&mut self) {
        self.input.set(String::new());
    }

    fn set_busy(&mut self, busy: bool) {
        self.sending.set(busy);
    }

    fn focus_input(&mut self) {
        if let Some(el) = (*self.input_el.peek()).clone() {
            spawn(async move {
                let _ = el.set_focus(true).await;
            });
        }
    }

    fn append_message(&mut self, message: ChatMessage) {
        self.messages.with_mut(|msgs| msgs.push(message));
    }

    fn scroll_to_bottom(&mut self) {
        if let Some(el) = (*self.end_anchor.peek()).clone() {
            spawn(async move {
                let _ = el.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    }
}

#[component]
pub fn ChatView(endpoint_url: String) -> Element {
    let messages = use_signal(Vec::<ChatMessage>::new);
    let mut input = use_signal(String::new);
    let sending = use_signal(|| false);
    let mut input_el = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut end_anchor = use_signal(|| Option::<Rc<MountedData>>::None);
    let endpoint = use_signal(move || Arc::new(HttpChatEndpoint::new(endpoint_url)));

    let surface = SignalChatSurface {
        input,
        messages,
        sending,
        input_el,
        end_anchor,
    };

    let send_message = move || {
        if *sending.peek() {
            return;
        }
        let mut panel = ConversationPanel::new(surface, (*endpoint.peek()).clone());
        spawn(async move {
            panel.send_message().await;
        });
    };

    rsx! {
        div { class: "main-container",
            div { id: "chat-container", class: "chat-container",
                for msg in messages.read().iter() {
                    ChatBubble { message: msg.clone() }
                }
                div { onmounted: move |ev| end_anchor.set(Some(ev.data())) }
            }
            div { class: "composer",
                input {
                    id: "user-input",
                    r#type: "text",
                    placeholder: "Ask about payroll, PF/ESI, Form 16…",
                    value: "{input}",
                    disabled: sending(),
                    autofocus: true,
                    oninput: move |ev| input.set(ev.value()),
                    onmounted: move |ev| input_el.set(Some(ev.data())),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            send_message();
                        }
                    },
                }
                button {
                    id: "send-btn",
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: sending(),
                    onclick: move |_| send_message(),
                    "Send"
                }
            }
        }
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> Element {
    let style = message.style();
    rsx! {
        div { class: "{style.row_class}",
            div { class: "{style.bubble_class}",
                strong { "{message.role.label()}:" }
                " {message.text}"
            }
        }
    }
}
