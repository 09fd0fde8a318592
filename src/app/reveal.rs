use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{
    stagger_delay, Percent, RevealState, CARD_ROOT_MARGIN, CARD_THRESHOLD, PROGRESS_DELAY,
    PROGRESS_THRESHOLD,
};

/// Wraps a card that fades and slides into place the first time it scrolls
/// into view. `index` is the card's position within its group.
#[component]
pub fn Reveal(
    #[prop(into)] class: String,
    #[prop(optional)] index: usize,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let state = RwSignal::new(RevealState::Hidden);
    let triggered = StoredValue::new(RevealState::Hidden);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        el,
        move |entries, _| {
            if !entries.iter().any(|e| e.is_intersecting()) {
                return;
            }
            let mut t = triggered.get_value();
            if t.reveal() {
                triggered.set_value(t);
                set_timeout(move || state.set(RevealState::Revealed), stagger_delay(index));
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(CARD_ROOT_MARGIN.to_string())
            .thresholds(vec![CARD_THRESHOLD]),
    );

    Effect::new(move |_| {
        if state.get() == RevealState::Revealed {
            stop();
        }
    });

    view! {
        <div node_ref=el class=move || format!("{class} {}", state.get().card_class())>
            {children()}
        </div>
    }
}

#[component]
pub fn ProgressBar(percent: Percent) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let state = RwSignal::new(RevealState::Hidden);
    let triggered = StoredValue::new(RevealState::Hidden);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        el,
        move |entries, _| {
            if !entries.iter().any(|e| e.is_intersecting()) {
                return;
            }
            let mut t = triggered.get_value();
            if t.reveal() {
                triggered.set_value(t);
                set_timeout(move || state.set(RevealState::Revealed), PROGRESS_DELAY);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![PROGRESS_THRESHOLD]),
    );

    Effect::new(move |_| {
        if state.get() == RevealState::Revealed {
            stop();
        }
    });

    view! {
        <div class="progress-bar" role="progressbar" aria-valuenow=percent.get().to_string() aria-valuemin="0" aria-valuemax="100">
            <div node_ref=el class="progress-fill" style:width=move || percent.width(state.get())></div>
        </div>
    }
}
