use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{
    on_click_outside, use_intersection_observer_with_options, UseIntersectionObserverOptions,
};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::{
    nav::{anchor_target, scroll_target, Navigator, SECTIONS, SECTION_ROOT_MARGIN},
    notify::Severity,
    profile::profile,
};

use super::{now_ms, theme::ThemeToggle, toast::use_notifier};

pub fn provide_navigator() -> RwSignal<Navigator> {
    let nav = RwSignal::new(Navigator::default());
    provide_context(nav);
    nav
}

pub fn use_navigator() -> RwSignal<Navigator> {
    expect_context::<RwSignal<Navigator>>()
}

fn scroll_to_section(id: &str) -> bool {
    let Some(target) = document().get_element_by_id(id) else {
        log::warn!("target section not found: {id}");
        return false;
    };
    let win = window();
    let top = scroll_target(
        target.get_bounding_client_rect().top(),
        win.scroll_y().unwrap_or_default(),
    );
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
    true
}

/// An in-page link: scrolls smoothly to its section instead of jumping.
/// Nav links additionally reflect the current section.
#[component]
pub fn AnchorLink(
    #[prop(into)] href: String,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] nav_link: bool,
    children: Children,
) -> impl IntoView {
    let nav = use_navigator();
    let notifier = use_notifier();
    let target = anchor_target(&href).map(str::to_string);

    let on_click = {
        let target = target.clone();
        move |ev: MouseEvent| {
            ev.prevent_default();
            let Some(id) = target.as_deref() else {
                return;
            };
            log::debug!("navigation link clicked: #{id}");
            if scroll_to_section(id) {
                nav.update(|n| {
                    n.select(id, now_ms());
                    n.close_menu();
                });
                notifier.notify(format!("Navigated to {id} section"), Severity::Info);
            }
        }
    };

    let link_class = move || {
        let active = nav_link
            && target
                .as_deref()
                .is_some_and(|id| nav.with(|n| n.is_active(id)));
        match (nav_link, active) {
            (true, true) => format!("nav-link active {class}"),
            (true, false) => format!("nav-link {class}"),
            _ => class.to_string(),
        }
    };

    view! {
        <a href=href class=link_class on:click=on_click>
            {children()}
        </a>
    }
}

/// A page section whose visibility drives the highlighted nav link.
#[component]
pub fn PageSection(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let nav = use_navigator();
    let el = NodeRef::<html::Section>::new();

    use_intersection_observer_with_options(
        el,
        move |entries, _| {
            if entries.iter().any(|e| e.is_intersecting()) {
                nav.update(|n| {
                    n.observe(id, now_ms());
                });
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(SECTION_ROOT_MARGIN.to_string())
            .thresholds(vec![0.0]),
    );

    view! {
        <section id=id class=format!("section {class}") node_ref=el>
            {children()}
        </section>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let nav = use_navigator();
    let nav_ref = NodeRef::<html::Nav>::new();

    let _ = on_click_outside(nav_ref, move |_| {
        if nav.with_untracked(Navigator::menu_open) {
            nav.update(Navigator::close_menu);
        }
    });

    let menu_class = move || {
        if nav.with(Navigator::menu_open) {
            "active"
        } else {
            ""
        }
    };

    view! {
        <header class="header">
            <nav class="nav" node_ref=nav_ref>
                <AnchorLink href="#home" class="nav-logo">
                    {profile().first_name().to_string()}
                </AnchorLink>
                <ul id="navMenu" class=move || format!("nav-menu {}", menu_class())>
                    {SECTIONS
                        .iter()
                        .map(|s| {
                            view! {
                                <li>
                                    <AnchorLink href=format!("#{}", s.id) nav_link=true>
                                        {s.label}
                                    </AnchorLink>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-actions">
                    <ThemeToggle />
                    <button
                        id="mobileMenuToggle"
                        class=move || format!("mobile-menu-toggle {}", menu_class())
                        aria-label="Toggle navigation menu"
                        on:click=move |ev| {
                            ev.prevent_default();
                            ev.stop_propagation();
                            nav.update(Navigator::toggle_menu);
                        }
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}
