use super::api;
use super::state::{ContactFormState, ContactStatus};
use crate::shared::components::{TextAreaField, TextField};
use crate::shared::config::AppConfig;
use contracts::system::contact::ContactMessage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let state = RwSignal::new(ContactFormState::default());

    spawn_local(async move {
        match api::fetch_emailjs_config(&config).await {
            Ok(emailjs) => {
                log::info!("u501: EmailJS configuration loaded");
                state.update(|s| s.config_loaded(emailjs));
            }
            Err(e) => {
                log::error!("u501: {}", e);
                state.update(|s| s.config_failed());
            }
        }
    });

    let is_sending = Signal::derive(move || state.with(|s| s.is_sending()));
    let field = move |getter: fn(&ContactMessage) -> &String| {
        Signal::derive(move || state.with(|s| getter(&s.message).clone()))
    };
    let edit = move |setter: fn(&mut ContactMessage, String)| {
        Callback::new(move |value: String| state.update(|s| setter(&mut s.message, value)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = state.try_update(|s| s.begin_send()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = api::send_message(&request).await;
            if let Err(e) = &result {
                log::error!("u501: send failed: {}", e);
            } else {
                log::info!("u501: message sent");
            }
            state.update(|s| s.finish_send(result.is_ok()));
        });
    };

    let status = move || {
        let status = state.with(|s| s.status().clone());
        status.text().map(|text| {
            let class = match status {
                ContactStatus::Sent => "notice notice--success",
                _ => "notice notice--error",
            };
            view! { <div class=class>{text}</div> }
        })
    };

    view! {
        <section class="contact" id="contact">
            <div class="contact__header">
                <h2>"Get In Touch"</h2>
                <p>"Fill out the form below and we will get back to you as soon as possible."</p>
            </div>

            <form class="contact__form" on:submit=on_submit>
                <div class="contact__row">
                    <TextField
                        label="Name"
                        value=field(|m| &m.name)
                        on_input=edit(|m, v| m.name = v)
                        disabled=is_sending
                    />
                    <TextField
                        label="Email"
                        input_type="email"
                        value=field(|m| &m.email)
                        on_input=edit(|m, v| m.email = v)
                        disabled=is_sending
                    />
                </div>
                <TextAreaField
                    label="Message"
                    rows=5
                    value=field(|m| &m.message)
                    on_input=edit(|m, v| m.message = v)
                    disabled=is_sending
                />

                {status}

                <Button
                    appearance=ButtonAppearance::Primary
                    button_type=ButtonType::Submit
                    loading=is_sending
                    disabled=is_sending
                >
                    {move || if is_sending.get() { "Sending..." } else { "Send Message" }}
                </Button>
            </form>
        </section>
    }
}
