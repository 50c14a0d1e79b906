/// Both palettes; the dark one applies when the app root carries
/// `data-theme="dark"`, so switching never swaps stylesheets.
pub const APP_CSS: &str = r#"
.app-root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f5f5f5;
    --color-text-primary: #000000;
    --color-text-muted: #4a4a4a;
    --color-border: #c2c2c2;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #0d6efd;
    --color-chat-user-text: #ffffff;
    --color-chat-ai-bg: #f1f3f5;
    --color-chat-ai-text: #212529;
    --color-chat-system-bg: #f8d7da;
    --color-chat-system-text: #842029;
}
.app-root[data-theme="dark"] {
    --color-bg-primary: #121212;
    --color-bg-secondary: #1e1e1e;
    --color-text-primary: #f5f5f5;
    --color-text-muted: #b0b0b0;
    --color-border: #2a2a2a;
    --color-input-bg: #1a1a1a;
    --color-chat-user-bg: #3d8bfd;
    --color-chat-user-text: #ffffff;
    --color-chat-ai-bg: #2b2b2b;
    --color-chat-ai-text: #e9ecef;
    --color-chat-system-bg: #58151c;
    --color-chat-system-text: #f1aeb5;
}
.app-root { min-height: 100vh; background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1rem; background: var(--color-bg-secondary); }
.theme-toggle-btn { background: none; border: 1px solid var(--color-border); border-radius: 999px; cursor: pointer; font-size: 1.1rem; }
.chat-container { height: 60vh; overflow-y: auto; padding: 1rem; }
.chat-message { display: flex; margin-bottom: 0.75rem; }
.chat-message.user-message { justify-content: flex-end; }
.chat-message.ai-message { justify-content: flex-start; }
.chat-message-bubble { max-width: 70%; padding: 0.5rem 0.75rem; border-radius: 0.75rem; white-space: pre-wrap; }
.chat-message-bubble.user { background: var(--color-chat-user-bg); color: var(--color-chat-user-text); }
.chat-message-bubble.ai { background: var(--color-chat-ai-bg); color: var(--color-chat-ai-text); }
.chat-message-bubble.system { background: var(--color-chat-system-bg); color: var(--color-chat-system-text); }
.composer { display: flex; gap: 0.5rem; padding: 1rem; border-top: 1px solid var(--color-border); }
.composer input { flex: 1; background: var(--color-input-bg); color: var(--color-text-primary); border: 1px solid var(--color-border); padding: 0.5rem; }
"#;
