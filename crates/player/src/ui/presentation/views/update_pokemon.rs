//! Update Pokemon View - edit form
//!
//! Loads the record for `id`, shows its list fields in their text form and
//! sends the whole record back on submit. Incomplete flavor-text entries and
//! empty egg groups are dropped rather than rejected.

use dioxus::prelude::*;

use pokedex_domain::PokemonId;

use crate::application::dto::PokemonForm;
use crate::application::notifications::{self, Notification};
use crate::ui::presentation::components::pokemon::PokemonFormFields;
use crate::ui::presentation::services::use_pokemon_service;
use crate::ui::presentation::state::use_notification_state;
use crate::ui::Route;

#[derive(Props, Clone, PartialEq)]
pub struct UpdatePokemonViewProps {
    pub id: String,
}

#[component]
pub fn UpdatePokemonView(props: UpdatePokemonViewProps) -> Element {
    let pokemon_service = use_pokemon_service();
    let mut notifications = use_notification_state();
    let navigator = use_navigator();

    let mut form = use_signal(PokemonForm::default);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);
    let mut is_submitting = use_signal(|| false);

    // Refetch whenever the route id changes
    {
        let svc = pokemon_service.clone();
        use_effect(use_reactive((&props.id,), move |(raw_id,)| {
            let svc = svc.clone();
            error_message.set(None);
            spawn(async move {
                let loaded = match PokemonId::new(raw_id) {
                    Ok(id) => svc.get_pokemon(&id).await.map_err(|e| e.to_string()),
                    Err(e) => Err(e.to_string()),
                };
                match loaded {
                    Ok(pokemon) => form.set(PokemonForm::from_pokemon(&pokemon)),
                    Err(e) => {
                        tracing::error!("Failed to fetch pokemon: {}", e);
                        form.set(PokemonForm::default());
                        error_message.set(Some(notifications::FETCH_FAILED.to_string()));
                    }
                }
            });
        }));
    }

    let raw_id = props.id.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *is_submitting.peek() {
            return;
        }

        let id = match PokemonId::new(raw_id.clone()) {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Cannot update pokemon: {}", e);
                error_message.set(Some(notifications::UPDATE_FAILED.to_string()));
                return;
            }
        };
        let values = form.read().clone();
        let svc = pokemon_service.clone();
        is_submitting.set(true);

        spawn(async move {
            match svc.submit_update(&id, &values).await {
                Ok(()) => {
                    error_message.set(None);
                    notifications.show(Notification::success(notifications::UPDATE_SUCCESS));
                    navigator.push(Route::PokemonListRoute {});
                }
                Err(e) => {
                    tracing::error!("Failed to update pokemon {}: {}", id, e);
                    error_message.set(Some(notifications::UPDATE_FAILED.to_string()));
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
                h1 { class: "text-4xl font-extrabold text-center flex-grow", "Update Pokemon" }
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
                    if *is_submitting.read() { "Updating..." } else { "Update" }
                }
            }
        }
    }
}
