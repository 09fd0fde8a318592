use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::{
    notify::Severity,
    theme::{PreferenceStore, Theme, ThemeState},
};

use super::toast::use_notifier;

/// The persisted flag as the signal pair `use_local_storage` hands out. A
/// missing or unparseable entry reads as the default theme.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub struct LocalStore {
    stored: Signal<Theme>,
    set_stored: WriteSignal<Theme>,
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<Theme> {
        Some(self.stored.get_untracked())
    }

    fn save(&mut self, theme: Theme) {
        self.set_stored.set(theme);
    }
}

/// Reactive view of the theme plus the persisted state behind it. The state
/// only exists in the browser; server renders always use the default.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    state: StoredValue<Option<ThemeState<LocalStore>>>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn set(&self, theme: Theme) {
        self.state.update_value(|state| {
            if let Some(state) = state {
                state.set(theme);
            }
        });
        self.theme.set(theme);
    }

    pub fn toggle(&self) -> Theme {
        let next = self.theme.get_untracked().toggled();
        self.set(next);
        next
    }
}

pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext {
        theme: RwSignal::new(Theme::default()),
        state: StoredValue::new(None),
    };

    #[cfg(feature = "hydrate")]
    {
        use crate::theme::STORAGE_KEY;

        let (stored, set_stored, _) = use_local_storage::<Theme, FromToStringCodec>(STORAGE_KEY);
        // read once, after hydration
        Effect::watch(
            || (),
            move |_, _, _| {
                let state = ThemeState::new(LocalStore { stored, set_stored });
                log::debug!("theme initialized: {}", state.get());
                ctx.theme.set(state.get());
                ctx.state.set_value(Some(state));
            },
            true,
        );
    }
    Effect::new(move |_| apply_theme(ctx.theme.get()));

    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn apply_theme(theme: Theme) {
    let Some(body) = document().body() else {
        log::warn!("no document body to apply theme to");
        return;
    };
    if let Err(e) = body.set_attribute("data-theme", theme.as_str()) {
        log::warn!("could not apply theme: {e:?}");
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let notifier = use_notifier();

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                let next = theme.toggle();
                log::debug!("theme changed to {next}");
                notifier.notify(format!("Switched to {next} theme"), Severity::Info);
            }
        >
            <span class="theme-icon">{move || theme.get().icon()}</span>
        </button>
    }
}
