//! Pokemon List View - browse, navigate to create/edit, delete
//!
//! The list is fetched once on mount. Deletes go through a confirmation
//! dialog and only remove the record locally after the backend confirmed.
//! While a delete is outstanding the delete buttons are disabled.

use dioxus::prelude::*;

use pokedex_domain::PokemonId;

use crate::application::catalog::PokemonCatalog;
use crate::ui::presentation::components::common::{ConfirmDialog, Loader};
use crate::ui::presentation::components::pokemon::PokemonCard;
use crate::ui::presentation::services::use_pokemon_service;
use crate::ui::presentation::state::use_notification_state;
use crate::ui::Route;

#[component]
pub fn PokemonListView() -> Element {
    let pokemon_service = use_pokemon_service();
    let mut notifications = use_notification_state();
    let navigator = use_navigator();

    let mut catalog = use_signal(PokemonCatalog::default);
    let mut loading = use_signal(|| true);
    let mut pending_delete: Signal<Option<PokemonId>> = use_signal(|| None);

    // Load the collection on mount
    {
        let svc = pokemon_service.clone();
        use_effect(move || {
            let svc = svc.clone();
            spawn(async move {
                match svc.list_pokemons().await {
                    Ok(pokemons) => catalog.set(PokemonCatalog::new(pokemons)),
                    Err(e) => tracing::error!("There was an error fetching the pokemons: {}", e),
                }
                loading.set(false);
            });
        });
    }

    // One delete at a time: the catalog holds the in-flight slot
    let confirm_delete = move |_| {
        let Some(id) = pending_delete.take() else {
            return;
        };
        if !catalog.write().begin_delete(&id) {
            return;
        }
        let svc = pokemon_service.clone();
        spawn(async move {
            let outcome = svc.delete_pokemon(&id).await;
            let notification = catalog.write().apply_delete(&id, outcome);
            notifications.show(notification);
        });
    };

    let deleting = catalog.read().is_deleting();

    rsx! {
        div {
            class: "container mx-auto p-4",

            div {
                class: "flex justify-between items-center mb-6",
                h1 {
                    class: "text-4xl font-extrabold text-gradient py-2",
                    "Pokemon List"
                }
                button {
                    class: "bg-gradient-button text-white px-6 py-3 rounded-lg shadow-lg",
                    onclick: move |_| {
                        navigator.push(Route::AddPokemonRoute {});
                    },
                    "Add Pokemon"
                }
            }

            if *loading.read() {
                Loader {}
            } else if catalog.read().is_empty() {
                div {
                    class: "flex justify-center items-center h-64",
                    p { class: "text-xl text-gray-700", "No data found" }
                }
            } else {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for pokemon in catalog.read().pokemons().iter().cloned() {
                        PokemonCard {
                            key: "{pokemon.id}",
                            pokemon,
                            on_edit: move |id: PokemonId| {
                                navigator.push(Route::UpdatePokemonRoute { id: id.to_string() });
                            },
                            delete_disabled: deleting,
                            on_delete: move |id: PokemonId| {
                                if !catalog.peek().is_deleting() {
                                    pending_delete.set(Some(id));
                                }
                            },
                        }
                    }
                }
            }

            if pending_delete.read().is_some() {
                ConfirmDialog {
                    title: "Are you sure you want to delete this Pokémon?",
                    content: "This action cannot be undone.",
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
