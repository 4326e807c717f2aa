use std::rc::Rc;

use dioxus::prelude::*;

use crate::registration::{
    close_review, run_submission, teardown_review, RegistrationState, ReviewModal,
};
use crate::services::submission::RegistrationSink;

#[derive(Props, PartialEq, Clone)]
pub struct DetailsModalProps {
    pub state: Signal<RegistrationState>,
}

/// Review overlay listing a snapshot of the entered data
#[component]
pub fn DetailsModal(props: DetailsModalProps) -> Element {
    let mut state = props.state;
    let sink = use_context::<Rc<dyn RegistrationSink>>();

    let review = state().review().clone();
    let (snapshot, closing) = match review {
        ReviewModal::Open(snapshot) => (snapshot, false),
        ReviewModal::Closing(snapshot) => (snapshot, true),
        ReviewModal::Closed => return rsx! {},
    };

    let close = move |_: MouseEvent| {
        spawn(close_review(state));
    };

    rsx! {
        div {
            class: if closing { "details-modal closing" } else { "details-modal" },
            onclick: close,

            div {
                class: "details-modal-content",
                onclick: move |event| event.stop_propagation(),

                div {
                    class: "details-modal-header",
                    h3 { class: "details-modal-title", "Registration Details Preview" }
                    button {
                        class: "details-modal-close",
                        r#type: "button",
                        onclick: close,
                        "×"
                    }
                }

                div {
                    class: "text-center mb-4",
                    if let Some(src) = snapshot.photo.clone() {
                        img {
                            class: "detail-photo",
                            src: "{src}",
                            alt: "Employee Photo"
                        }
                    } else {
                        div { class: "photo-placeholder mx-auto", "👤" }
                        div { "No Photo Uploaded" }
                    }
                }

                for section in snapshot.sections.clone() {
                    div {
                        key: "{section.title}",
                        class: "details-section",
                        h4 { class: "details-section-title", "{section.title}" }
                        div {
                            class: "details-grid",
                            for item in section.items {
                                div {
                                    key: "{item.label}",
                                    class: "detail-item",
                                    div { class: "detail-label", "{item.label}" }
                                    div { class: "detail-value", "{item.value}" }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "details-modal-footer",
                    button {
                        id: "closeDetailsBtn",
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: close,
                        "Close"
                    }
                    button {
                        id: "confirmDetailsBtn",
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: closing,
                        onclick: move |_| {
                            let (teardown, submission) = state.with_mut(|s| s.confirm_review());
                            if let Some(token) = teardown {
                                spawn(teardown_review(state, token));
                            }
                            if let Some((token, record)) = submission {
                                spawn(run_submission(state, sink.clone(), token, record));
                            }
                        },
                        "Confirm and Submit"
                    }
                }
            }
        }
    }
}
