use dioxus::prelude::*;

use crate::registration::{ActiveDialog, DialogBody};

#[derive(Props, PartialEq, Clone)]
pub struct AlertDialogProps {
    pub dialog: ActiveDialog,
    pub on_dismiss: EventHandler<()>,
}

/// Blocking dialog rendered from a declarative description
#[component]
pub fn AlertDialog(props: AlertDialogProps) -> Element {
    let config = props.dialog.config;
    let allow_outside_click = config.allow_outside_click;
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| {
                if allow_outside_click {
                    on_dismiss.call(());
                }
            },

            div {
                class: "dialog-panel",
                role: "alertdialog",
                "aria-modal": "true",
                onclick: move |event| event.stop_propagation(),

                div {
                    class: config.icon.class(),
                    "{config.icon.glyph()}"
                }
                h2 {
                    class: "dialog-title",
                    "{config.title}"
                }

                match config.body.clone() {
                    DialogBody::Text(text) => rsx! {
                        p { class: "dialog-text", "{text}" }
                    },
                    DialogBody::Registered { photo, message } => rsx! {
                        div {
                            class: "text-center",
                            if let Some(src) = photo {
                                img {
                                    class: "detail-photo mb-3",
                                    src: "{src}",
                                    alt: "Employee Photo"
                                }
                            }
                            p { "{message}" }
                        }
                    },
                }

                button {
                    class: "dialog-confirm",
                    r#type: "button",
                    style: "background-color: {config.confirm_color};",
                    onclick: move |_| on_dismiss.call(()),
                    "{config.confirm_text}"
                }
            }
        }
    }
}
