//! Add Pokemon View - create form
//!
//! Flavor text is validated before anything is sent. On success the list
//! view is shown; on failure the form stays filled in.

use dioxus::prelude::*;

use crate::application::dto::PokemonForm;
use crate::application::notifications::{self, Notification};
use crate::application::SubmitError;
use crate::ui::presentation::components::pokemon::PokemonFormFields;
use crate::ui::presentation::services::use_pokemon_service;
use crate::ui::presentation::state::use_notification_state;
use crate::ui::Route;

#[component]
pub fn AddPokemonView() -> Element {
    let pokemon_service = use_pokemon_service();
    let mut notifications = use_notification_state();
    let navigator = use_navigator();

    let form = use_signal(PokemonForm::default);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);
    let mut is_submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *is_submitting.peek() {
            return;
        }

        let values = form.read().clone();
        let svc = pokemon_service.clone();
        is_submitting.set(true);

        spawn(async move {
            match svc.submit_new(&values).await {
                Ok(()) => {
                    error_message.set(None);
                    notifications.show(Notification::success(notifications::ADD_SUCCESS));
                    navigator.push(Route::PokemonListRoute {});
                }
                Err(SubmitError::Invalid(e)) => {
                    error_message.set(Some(e.to_string()));
                }
                Err(SubmitError::Service(e)) => {
                    tracing::error!("Failed to add pokemon: {}", e);
                    error_message.set(Some(notifications::ADD_FAILED.to_string()));
                }
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "container mx-auto p-6",

            div {
                class: "flex items-center mb-6",
                button {
                    class: "text-blue-500 hover:text-blue-700 icon-button",
                    aria_label: "Back",
                    onclick: move |_| navigator.go_back(),
                    "←"
                }
                h1 { class: "text-4xl font-extrabold text-center flex-grow", "Add Pokemon" }
            }

            if let Some(err) = error_message.read().as_ref() {
                div { class: "text-red-500 text-center mb-4", "{err}" }
            }

            form {
                class: "max-w-4xl mx-auto bg-white p-8 rounded-lg shadow-lg",
                onsubmit: submit,

                PokemonFormFields { form }

                button {
                    r#type: "submit",
                    class: "bg-blue-500 text-white px-8 py-4 rounded-lg shadow-lg hover:bg-blue-600",
                    disabled: *is_submitting.read(),
                    if *is_submitting.read() { "Submitting..." } else { "Submit" }
                }
            }
        }
    }
}
