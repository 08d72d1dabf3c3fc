use dioxus::prelude::*;

#[component]
pub fn Loader() -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center h-64",
            div { class: "loader" }
        }
    }
}
