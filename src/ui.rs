use crate::config::AppConfig;
use crate::preferences::{FixedOsTheme, PlatformPreferenceStore, platform_store};
use crate::styles::APP_CSS;
use crate::theme::{
    LIGHT_ICON, ThemeChangeEvent, ThemeController, ThemeSurface, follow_system_theme,
};
use crate::types::ThemeMode;
use crate::views::ChatView;
use dioxus::prelude::*;
use futures::stream;

type AppThemeController =
    ThemeController<SignalThemeSurface, PlatformPreferenceStore, FixedOsTheme>;

/// Reports the current `prefers-color-scheme` and every later change.
const PREFERS_DARK_WATCH: &str = r#"
const query = window.matchMedia('(prefers-color-scheme: dark)');
dioxus.send(query.matches);
query.addEventListener('change', (event) => dioxus.send(event.matches));
await new Promise(() => {});
"#;

/// The last `themechange` notification, provided as context for any
/// component that follows the applied theme.
#[derive(Clone, Copy)]
pub struct AppliedTheme(pub Signal<ThemeMode>);

/// Theme surface backed by the app root's `data-theme` attribute and the
/// header toggle icon.
#[derive(Clone, Copy)]
struct SignalThemeSurface {
    attribute: Signal<Option<String>>,
    icon: Signal<String>,
    applied: Signal<ThemeMode>,
}

impl ThemeSurface for SignalThemeSurface {
    fn theme_attribute(&self) -> Option<String> {
        (*self.attribute.peek()).clone()
    }

    fn set_theme_attribute(&mut self, value: Option<&str>) {
        self.attribute.set(value.map(str::to_string));
    }

    // The header always renders the toggle.
    fn has_toggle_button(&self) -> bool {
        true
    }

    fn has_toggle_icon(&self) -> bool {
        true
    }

    fn set_toggle_icon(&mut self, glyph: &str) {
        self.icon.set(glyph.to_string());
    }

    fn dispatch_theme_change(&mut self, event: ThemeChangeEvent) {
        tracing::debug!(event = event.name, theme = %event.detail.theme, "theme changed");
        self.applied.set(event.detail.theme);
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let attribute = use_signal(|| Option::<String>::None);
    let icon = use_signal(|| LIGHT_ICON.to_string());
    let applied = use_signal(ThemeMode::default);
    use_context_provider(|| AppliedTheme(applied));

    let mut controller = use_signal(|| {
        ThemeController::new(
            SignalThemeSurface {
                attribute,
                icon,
                applied,
            },
            platform_store(&config.data_dir),
            FixedOsTheme::new(config.prefers_dark),
        )
        .with_storage_key(config.theme_storage_key.clone())
    });

    // Runs after the first render, so the controller's writes never land
    // mid-render.
    use_future(move || async move {
        if !controller.with_mut(|c| c.init()) {
            return;
        }

        let media = document::eval(PREFERS_DARK_WATCH);
        let changes = stream::unfold(media, |mut media| async move {
            match media.recv::<bool>().await {
                Ok(prefers_dark) => Some((prefers_dark, media)),
                Err(err) => {
                    tracing::debug!(?err, "system theme query unavailable");
                    None
                }
            }
        });
        follow_system_theme(changes, move |prefers_dark| {
            controller.with_mut(|c| c.handle_system_theme_change(prefers_dark));
        })
        .await;
    });

    rsx! {
        ThemeStyles {}
        div { class: "app-root", "data-theme": attribute(),
            AppHeader { controller, icon: icon() }
            ChatView { endpoint_url: config.chat_endpoint.clone() }
        }
    }
}

#[component]
fn ThemeStyles() -> Element {
    let AppliedTheme(applied) = use_context::<AppliedTheme>();
    let scheme = format!(".app-root {{ color-scheme: {}; }}", applied());
    rsx! {
        style { dangerous_inner_html: "{APP_CSS}" }
        style { dangerous_inner_html: "{scheme}" }
    }
}

#[component]
fn AppHeader(controller: Signal<AppThemeController>, icon: String) -> Element {
    let mut controller = controller;
    rsx! {
        div { class: "header",
            h1 { class: "header-title", "Payroll Assistant" }
            button {
                id: "darkModeToggle",
                class: "theme-toggle-btn",
                r#type: "button",
                title: "Toggle dark mode",
                onclick: move |_| controller.with_mut(|c| c.handle_toggle_click()),
                span { id: "darkModeIcon", "{icon}" }
            }
        }
    }
}
