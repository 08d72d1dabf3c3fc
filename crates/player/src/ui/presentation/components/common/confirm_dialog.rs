//! Modal yes/no confirmation

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub content: String,
    #[props(default = "Yes".to_string())]
    pub ok_text: String,
    #[props(default = "No".to_string())]
    pub cancel_text: String,
    pub on_confirm: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

/// Confirmation modal. Clicking the backdrop cancels.
#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            onclick: move |_| props.on_cancel.call(()),
            div {
                class: "bg-white rounded-lg shadow-xl p-6 w-[90%] max-w-md",
                role: "dialog",
                onclick: |e| e.stop_propagation(),

                h2 {
                    class: "text-lg font-semibold text-gray-900 mb-2",
                    "{props.title}"
                }
                p {
                    class: "text-gray-700 mb-6",
                    "{props.content}"
                }

                div {
                    class: "flex justify-end gap-3",
                    button {
                        class: "px-4 py-2 bg-gray-200 text-gray-800 rounded-lg hover:bg-gray-300",
                        onclick: move |_| props.on_cancel.call(()),
                        "{props.cancel_text}"
                    }
                    button {
                        class: "px-4 py-2 bg-red-500 text-white rounded-lg hover:bg-red-600",
                        onclick: move |_| props.on_confirm.call(()),
                        "{props.ok_text}"
                    }
                }
            }
        }
    }
}
