use chrono::{Local, NaiveDate};
use shared::models::DATE_FORMAT;
use shared::NewSponsor;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;

pub const ADD_FAILED_MESSAGE: &str = "Failed to add sponsor.";

#[function_component(AddSponsor)]
pub fn add_sponsor() -> Html {
    let context = use_app_context();
    let navigator = use_navigator();

    let name = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let date = use_state(|| Local::now().date_naive().format(DATE_FORMAT).to_string());
    let errors = use_state(Vec::<String>::new);
    let submitting = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let phone = phone.clone();
        let email = email.clone();
        let date = date.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let api = context.api.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Ok(parsed_date) = NaiveDate::parse_from_str(&date, DATE_FORMAT) else {
                errors.set(vec!["Date must be in YYYY-MM-DD format".to_string()]);
                return;
            };
            let sponsor = NewSponsor {
                name: name.trim().to_string(),
                phone: phone.trim().to_string(),
                email: email.trim().to_string(),
                date: parsed_date,
            };

            let messages = sponsor.validation_messages();
            if !messages.is_empty() {
                errors.set(messages);
                return;
            }

            errors.set(Vec::new());
            submitting.set(true);

            let api = api.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.add_sponsor(&sponsor).await {
                    Ok(()) => {
                        tracing::info!(name = %sponsor.name, date = %sponsor.date, "Sponsor added");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to add sponsor: {}", e);
                        if !e.requires_login() {
                            errors.set(vec![ADD_FAILED_MESSAGE.to_string()]);
                        }
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <h2>{ "Add Sponsor" }</h2>
            if !errors.is_empty() {
                <ul class="error">
                    { for errors.iter().map(|message| html! { <li>{ message }</li> }) }
                </ul>
            }
            <form class="sponsor-form" onsubmit={on_submit}>
                { text_field("Name", "name", "text", &name) }
                { text_field("Phone", "phone", "tel", &phone) }
                { text_field("Email", "email", "email", &email) }
                { text_field("Date", "date", "date", &date) }
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    { "Add Sponsor" }
                </button>
            </form>
        </div>
    }
}

fn text_field(label: &str, name: &'static str, input_type: &'static str, state: &UseStateHandle<String>) -> Html {
    let on_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    html! {
        <label class="form-field">
            { label }
            <input type={input_type} name={name} value={(**state).clone()} oninput={on_input} />
        </label>
    }
}
