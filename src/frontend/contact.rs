use super::{tasks::sleep, PageContext};
use crate::contact::{
    ButtonPhase, ContactError, ContactMessage, ContactSubmission, ContactTransport, RESTORE_DELAY,
};
use gloo_net::http::Request;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const SEND_LABEL: &str = "Send Message";

async fn deliver(transport: &ContactTransport, message: &ContactMessage) -> Result<(), ContactError> {
    match transport {
        ContactTransport::Simulated { delay } => {
            sleep(*delay).await;
            Ok(())
        }
        ContactTransport::Endpoint(url) => {
            let response = Request::post(url.as_str())
                .json(message)
                .map_err(|error| ContactError::Transport(error.to_string()))?
                .send()
                .await
                .map_err(|error| ContactError::Transport(error.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                Err(ContactError::Transport(format!("status {}", response.status())))
            }
        }
    }
}

fn bind_input(field: &UseStateHandle<String>) -> Callback<InputEvent> {
    let field = field.clone();
    Callback::from(move |event: InputEvent| {
        field.set(event.target_unchecked_into::<HtmlInputElement>().value());
    })
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let page = use_context::<PageContext>().unwrap_or_default();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let submission = use_mut_ref(ContactSubmission::default);
    let phase = use_state_eq(ButtonPhase::default);

    let on_message = {
        let message = message.clone();
        Callback::from(move |event: InputEvent| {
            message.set(event.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let submission = submission.clone();
        let phase = phase.clone();
        let transport = page.config.contact.clone();
        let logger = page.logger;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let (started, generation) = {
                let mut current = submission.borrow_mut();
                let started = current.begin(&name, &email, &message);
                phase.set(current.phase());
                (started, current.generation())
            };

            let restore_later = {
                let submission = submission.clone();
                let phase = phase.clone();
                move || async move {
                    sleep(RESTORE_DELAY).await;
                    let mut current = submission.borrow_mut();
                    current.restore(generation);
                    phase.set(current.phase());
                }
            };

            let outgoing = match started {
                Ok(outgoing) => outgoing,
                Err(ContactError::Busy) => return,
                Err(error) => {
                    logger.info("contact_rejected", json!({ "reason": error.to_string() }));
                    spawn_local(restore_later());
                    return;
                }
            };

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let submission = submission.clone();
            let phase = phase.clone();
            let transport = transport.clone();
            spawn_local(async move {
                let outcome = deliver(&transport, &outgoing).await;
                let cleared = {
                    let mut current = submission.borrow_mut();
                    let cleared = current.finish(generation, &outcome);
                    phase.set(current.phase());
                    cleared
                };

                let simulated = matches!(transport, ContactTransport::Simulated { .. });
                match &outcome {
                    Ok(()) => logger.info("contact_sent", json!({ "simulated": simulated })),
                    Err(error) => logger.warn("contact_failed", json!({ "error": error.to_string() })),
                }
                if cleared {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }

                restore_later().await;
            });
        })
    };

    html! {
        <section id="contact" class="section-block contact-form">
            <h2 class="animate-on-scroll">{"Contact"}</h2>
            <form onsubmit={onsubmit} novalidate={true}>
                <input type="text" name="name" placeholder="Name" value={(*name).clone()} oninput={bind_input(&name)} />
                <input type="email" name="email" placeholder="Email" value={(*email).clone()} oninput={bind_input(&email)} />
                <textarea name="message" placeholder="Message" rows="5" value={(*message).clone()} oninput={on_message} />
                <button type="submit" class={classes!("btn-contact", phase.tone())} disabled={phase.disabled()}>
                    {phase.label(SEND_LABEL)}
                </button>
            </form>
        </section>
    }
}
