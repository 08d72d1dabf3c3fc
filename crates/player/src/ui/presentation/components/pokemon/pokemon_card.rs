//! Pokemon Card - one record in the list grid

use dioxus::prelude::*;

use pokedex_domain::{encode_egg_groups, Pokemon, PokemonId};

#[derive(Props, Clone, PartialEq)]
pub struct PokemonCardProps {
    pub pokemon: Pokemon,
    pub on_edit: EventHandler<PokemonId>,
    pub on_delete: EventHandler<PokemonId>,
    /// Set while another delete is in flight
    #[props(default)]
    pub delete_disabled: bool,
}

#[component]
pub fn PokemonCard(props: PokemonCardProps) -> Element {
    let pokemon = &props.pokemon;
    let base_happiness = optional_number(pokemon.base_happiness);
    let capture_rate = optional_number(pokemon.capture_rate);
    let egg_groups = encode_egg_groups(&pokemon.egg_groups);
    let edit_id = pokemon.id.clone();
    let delete_id = pokemon.id.clone();

    rsx! {
        div {
            class: "p-6 bg-white shadow-xl rounded-lg relative card",

            h2 { class: "text-2xl font-semibold mb-3 text-gray-900", "{pokemon.name}" }
            p { class: "text-gray-700",
                strong { "Base Happiness:" }
                " {base_happiness}"
            }
            p { class: "text-gray-700",
                strong { "Capture Rate:" }
                " {capture_rate}"
            }
            p { class: "text-gray-700",
                strong { "Color:" }
                " {pokemon.color}"
            }
            p { class: "text-gray-700",
                strong { "Egg Groups:" }
                " {egg_groups}"
            }
            p { class: "text-gray-700",
                strong { "Evolution Chain:" }
                " "
                a {
                    class: "text-blue-500 underline hover:text-blue-600",
                    href: "{pokemon.evolution_chain}",
                    "Link"
                }
            }

            div {
                class: "mt-4",
                h3 { class: "font-semibold text-gray-800", "Flavor Text Entries:" }
                for (index, entry) in pokemon.flavor_text_entries.iter().enumerate() {
                    p {
                        key: "{index}",
                        class: "text-gray-600",
                        strong { "{entry.version}:" }
                        " {entry.text} "
                        em { "({entry.language})" }
                    }
                }
            }

            div {
                class: "absolute top-4 right-4 flex gap-2",
                button {
                    class: "text-yellow-500 hover:text-yellow-600 icon-button",
                    aria_label: "Edit Pokémon",
                    title: "Edit",
                    onclick: move |_| props.on_edit.call(edit_id.clone()),
                    "✎"
                }
                button {
                    class: "text-red-500 hover:text-red-600 icon-button",
                    aria_label: "Delete Pokémon",
                    title: "Delete",
                    disabled: props.delete_disabled,
                    onclick: move |_| props.on_delete.call(delete_id.clone()),
                    "🗑"
                }
            }
        }
    }
}

fn optional_number(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}
