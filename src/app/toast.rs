use leptos::prelude::*;

use crate::notify::{
    Notification, Severity, Toaster, DISPLAY_DURATION, SLIDE_IN_DELAY, SLIDE_OUT_DURATION,
};

/// Shared handle for showing toasts; provided once by the app.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    toaster: RwSignal<Toaster>,
}

impl Notifier {
    /// Replaces whatever toast is up with a new one and schedules its
    /// slide-in, slide-out and removal.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let toaster = self.toaster;
        let Some(id) = toaster.try_update(|t| t.show(message, severity)) else {
            return;
        };

        set_timeout(move || toaster.maybe_update(|t| t.reveal(id)), SLIDE_IN_DELAY);
        set_timeout(
            move || {
                if toaster.try_update(|t| t.begin_dismiss(id)) == Some(true) {
                    set_timeout(
                        move || toaster.maybe_update(|t| t.remove(id)),
                        SLIDE_OUT_DURATION,
                    );
                }
            },
            DISPLAY_DURATION,
        );
    }

    fn current(&self) -> Option<Notification> {
        self.toaster.with(|t| t.current().cloned())
    }
}

pub fn provide_notifier() -> Notifier {
    let notifier = Notifier {
        toaster: RwSignal::new(Toaster::new()),
    };
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[component]
pub fn Toast() -> impl IntoView {
    let notifier = use_notifier();
    let current_id = Memo::new(move |_| notifier.toaster.with(Toaster::current_id));
    // keyed on id: a replacement gets a fresh element that slides in from off-screen
    view! { {move || current_id.get().map(|id| view! { <ToastCard notifier=notifier id=id /> })} }
}

#[component]
fn ToastCard(notifier: Notifier, id: u64) -> impl IntoView {
    let current = Memo::new(move |_| notifier.current().filter(|n| n.id == id));
    view! {
        <div
            class=move || {
                current
                    .with(|n| {
                        n.as_ref()
                            .map(|n| {
                                let shown = if n.on_screen() { " notification-shown" } else { "" };
                                format!("notification {}{shown}", n.severity.class())
                            })
                    })
                    .unwrap_or_default()
            }
            role="status"
            aria-live="polite"
        >
            {move || current.with(|n| n.as_ref().map(|n| n.message.clone()))}
        </div>
    }
}
