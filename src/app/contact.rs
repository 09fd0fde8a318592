use leptos::{ev::SubmitEvent, prelude::*};

use crate::{
    contact::{begin_submit, finish_submit, ContactForm, Field, SUBMIT_DELAY},
    error::SiteError,
    profile::profile,
};

use super::{
    header::PageSection,
    toast::{use_notifier, Notifier},
};

fn open_mail_client(url: &str) -> Result<(), SiteError> {
    window()
        .location()
        .set_href(url)
        .map_err(|e| SiteError::Navigation(format!("{e:?}")))
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.key()>{label}</label>
            <input
                id=field.key()
                name=field.key()
                type=input_type
                required
                placeholder=placeholder
                class=move || format!("form-control {}", form.with(|f| f.validity(field).class()))
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| {
                    f.blur(field);
                })
            />
        </div>
    }
}

#[component]
fn MessageField(form: RwSignal<ContactForm>) -> impl IntoView {
    let field = Field::Message;
    view! {
        <div class="form-group">
            <label for=field.key()>"Message"</label>
            <textarea
                id=field.key()
                name=field.key()
                rows="5"
                required
                placeholder="Tell me about your opportunity or question..."
                class=move || format!("form-control {}", form.with(|f| f.validity(field).class()))
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| {
                    f.blur(field);
                })
            ></textarea>
        </div>
    }
}

fn submit(form: RwSignal<ContactForm>, set_sending: WriteSignal<bool>, notifier: Notifier) {
    let p = profile();
    let url = match form.with_untracked(|f| begin_submit(f, &p.email, p.first_name())) {
        Ok(url) => url,
        Err(notice) => {
            log::debug!("contact form rejected: {}", notice.message);
            notifier.notify(notice.message, notice.severity);
            return;
        }
    };

    set_sending.set(true);
    set_timeout(
        move || {
            let opened = open_mail_client(&url);
            match &opened {
                Ok(()) => log::info!("contact form handed off to mail client"),
                Err(e) => log::error!("error opening mail client: {e}"),
            }
            if let Some(notice) = form.try_update(|f| finish_submit(f, opened)) {
                notifier.notify(notice.message, notice.severity);
            }
            set_sending.set(false);
        },
        SUBMIT_DELAY,
    );
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let p = profile();
    let notifier = use_notifier();
    let form = RwSignal::new(ContactForm::default());
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if sending.get_untracked() {
            return;
        }
        submit(form, set_sending, notifier);
    };

    view! {
        <PageSection id="contact" class="contact">
            <h2 class="section-title">"Get In Touch"</h2>
            <div class="contact-grid">
                <div class="contact-info">
                    <p>
                        "Interested in working together, or have a question? Send a message and it will open in your email client, ready to send."
                    </p>
                    <ul class="contact-details">
                        <li>"📍 " {p.location.clone()}</li>
                        <li>
                            "✉️ " <a href=format!("mailto:{}", p.email)>{p.email.clone()}</a>
                        </li>
                        <li>
                            "💼 "
                            <a
                                href=format!("https://{}", p.linkedin)
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {p.linkedin.clone()}
                            </a>
                        </li>
                    </ul>
                </div>
                <form id="contactForm" class="contact-form" novalidate on:submit=on_submit>
                    <TextField form=form field=Field::Name label="Name" placeholder="Your name" />
                    <TextField
                        form=form
                        field=Field::Email
                        label="Email"
                        placeholder="you@example.com"
                        input_type="email"
                    />
                    <TextField
                        form=form
                        field=Field::Subject
                        label="Subject"
                        placeholder="What is this about?"
                    />
                    <MessageField form=form />
                    <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </PageSection>
    }
}
