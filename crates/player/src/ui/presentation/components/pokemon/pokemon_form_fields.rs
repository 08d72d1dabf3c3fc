//! Input fields shared by the create and edit forms

use dioxus::prelude::*;

use crate::application::dto::PokemonForm;

const INPUT_CLASS: &str =
    "w-full p-3 border border-gray-300 rounded-lg shadow-sm focus:ring-2 focus:ring-blue-500";
const LABEL_CLASS: &str = "block text-gray-700 font-semibold mb-2";

/// Every input is `required`; the browser blocks submit while one is empty.
#[component]
pub fn PokemonFormFields(form: Signal<PokemonForm>) -> Element {
    let mut form = form;

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-6 mb-6",
            div {
                class: "mb-4",
                label { class: LABEL_CLASS, "Name" }
                input {
                    r#type: "text",
                    class: INPUT_CLASS,
                    required: true,
                    value: "{form.read().name}",
                    oninput: move |e| form.write().name = e.value(),
                }
            }
            div {
                class: "mb-4",
                label { class: LABEL_CLASS, "Base Happiness" }
                input {
                    r#type: "number",
                    class: INPUT_CLASS,
                    required: true,
                    value: "{form.read().base_happiness}",
                    oninput: move |e| form.write().base_happiness = e.value(),
                }
            }
        }

        div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-6 mb-6",
            div {
                class: "mb-4",
                label { class: LABEL_CLASS, "Capture Rate" }
                input {
                    r#type: "number",
                    class: INPUT_CLASS,
                    required: true,
                    value: "{form.read().capture_rate}",
                    oninput: move |e| form.write().capture_rate = e.value(),
                }
            }
            div {
                class: "mb-4",
                label { class: LABEL_CLASS, "Color" }
                input {
                    r#type: "text",
                    class: INPUT_CLASS,
                    required: true,
                    value: "{form.read().color}",
                    oninput: move |e| form.write().color = e.value(),
                }
            }
        }

        div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-6 mb-6",
            div {
                class: "mb-4",
                label { class: LABEL_CLASS, "Egg Groups (comma-separated)" }
                input {
                    r#type: "text",
                    class: INPUT_CLASS,
                    required: true,
                    placeholder: "xyz,xyz,....",
                    value: "{form.read().egg_groups}",
                    oninput: move |e| form.write().egg_groups = e.value(),
                }
            }
            div {
                class: "mb-4",
                label { class: LABEL_CLASS, "Evolution Chain URL" }
                input {
                    r#type: "url",
                    class: INPUT_CLASS,
                    required: true,
                    value: "{form.read().evolution_chain}",
                    oninput: move |e| form.write().evolution_chain = e.value(),
                }
            }
        }

        div {
            class: "mb-6",
            label {
                class: LABEL_CLASS,
                "Flavor Text Entries (text, language, version separated by comma; multiple entries separated by semicolon)"
            }
            textarea {
                class: INPUT_CLASS,
                rows: 6,
                required: true,
                placeholder: "enter all required field with comma (flavor_text, language, version)",
                value: "{form.read().flavor_text_entries}",
                oninput: move |e| form.write().flavor_text_entries = e.value(),
            }
        }
    }
}
