use std::{cell::Cell, rc::Rc};

use leptos::{ev::MouseEvent, prelude::*};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Url};

use crate::{
    error::SiteError,
    notify::Severity,
    profile::profile,
    resume::{render_document, PREPARE_DELAY, PRINT_DELAY, PRINT_FALLBACK, WINDOW_FEATURES},
};

use super::toast::use_notifier;

const LABEL: &str = "📄 Download Resume";
const BUSY_LABEL: &str = "Generating PDF...";

/// Opens the résumé in a new window and prints it once the window reports it
/// has loaded. A fallback timer covers browsers that never fire `load`; either
/// way the print dialog opens at most once.
fn open_print_window(html: &str) -> Result<(), SiteError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(html));
    let opts = BlobPropertyBag::new();
    opts.set_type("text/html");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let print_window = match window().open_with_url_and_target_and_features(
        &url,
        "_blank",
        WINDOW_FEATURES,
    ) {
        Ok(Some(w)) => w,
        Ok(None) => {
            let _ = Url::revoke_object_url(&url);
            return Err(SiteError::PopupBlocked);
        }
        Err(e) => {
            let _ = Url::revoke_object_url(&url);
            return Err(e.into());
        }
    };

    let printed = Rc::new(Cell::new(false));
    let print = {
        let print_window = print_window.clone();
        move || {
            if printed.replace(true) {
                return;
            }
            let _ = print_window.focus();
            if let Err(e) = print_window.print() {
                log::error!("print dialog failed: {e:?}");
            }
            let _ = Url::revoke_object_url(&url);
        }
    };

    let on_load = {
        let print = print.clone();
        Closure::once_into_js(move || set_timeout(print, PRINT_DELAY))
    };
    print_window.set_onload(Some(on_load.unchecked_ref()));
    set_timeout(print, PRINT_FALLBACK);
    Ok(())
}

#[component]
pub fn DownloadResume() -> impl IntoView {
    let notifier = use_notifier();
    let (busy, set_busy) = signal(false);

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if busy.get_untracked() {
            return;
        }
        log::debug!("download resume clicked");
        set_busy.set(true);
        let html = render_document(profile());
        set_timeout(
            move || {
                match open_print_window(&html) {
                    Ok(()) => notifier.notify(
                        "Resume opened in new window for printing/download!",
                        Severity::Success,
                    ),
                    Err(e) => {
                        log::error!("error generating resume: {e}");
                        notifier.notify(
                            "Could not open resume window. Please allow popups and try again.",
                            Severity::Error,
                        );
                    }
                }
                set_busy.set(false);
            },
            PREPARE_DELAY,
        );
    };

    view! {
        <button
            id="downloadResume"
            class="btn btn-secondary"
            disabled=move || busy.get()
            on:click=on_click
        >
            {move || if busy.get() { BUSY_LABEL } else { LABEL }}
        </button>
    }
}
