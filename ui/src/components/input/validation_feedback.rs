use dioxus::prelude::*;

use crate::registration::ErrorDisplayId;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    /// The field's error display, `None` when the page has no element for it
    pub display: Option<ErrorDisplayId>,
    pub message: String,
}

/// The `<id>-error` element under a field. Renders nothing for fields without one.
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.display {
        Some(display) => rsx! {
            div {
                id: display.as_str(),
                class: "error-message",
                "{props.message}"
            }
        },
        None => rsx! {},
    }
}
