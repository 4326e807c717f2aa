use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{
    display::{LoadingIndicator, PhotoPreview},
    input::{FieldError, ValidatedInput, ValidatedSelect},
};
use crate::registration::{
    intake_photo, submit_registration, FieldId, FieldKind, GateEntry, GateOutcome,
    RegistrationAction, RegistrationState, REVIEW_LAYOUT,
};
use crate::services::submission::RegistrationSink;
use crate::utils::{scroll_into_view_centered, validation::validation_message};

#[derive(Props, PartialEq, Clone)]
pub struct RegistrationFormProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
}

/// Run the gate for `entry` and scroll to the first invalid field if it blocks.
///
/// Returns whether the gate passed.
fn run_gate_and_scroll(mut state: Signal<RegistrationState>, entry: GateEntry) -> bool {
    match state.with_mut(|s| s.run_gate(entry)) {
        GateOutcome::Passed => true,
        GateOutcome::Blocked { first_invalid, .. } => {
            if let Some(field) = first_invalid {
                scroll_into_view_centered(field.id());
            }
            false
        }
    }
}

/// Render one field with its label and error display
fn render_field(
    state: Signal<RegistrationState>,
    dispatch: EventHandler<RegistrationAction>,
    field: FieldId,
) -> Element {
    let current = state.read();
    let value = current.value(field).to_string();
    let validation = current.validation(field).clone();
    let display = current.error_displays().get(field).cloned();
    let message = validation_message(&validation).to_string();
    let required = field.spec().is_required();
    drop(current);

    let on_input = move |value: String| dispatch.call(RegistrationAction::SetFieldValue(field, value));
    let on_blur = move |_: ()| dispatch.call(RegistrationAction::BlurField(field));

    rsx! {
        div {
            class: "form-group",
            label {
                r#for: field.id(),
                class: "form-label",
                "{field.label()}"
                if required {
                    span { class: "required-mark", " *" }
                }
            }
            match field.spec().kind {
                FieldKind::Text { .. } => rsx! {
                    ValidatedInput {
                        field: field,
                        value: value,
                        validation: validation,
                        disabled: false,
                        on_input: on_input,
                        on_blur: on_blur
                    }
                },
                FieldKind::Select { .. } => rsx! {
                    ValidatedSelect {
                        field: field,
                        value: value,
                        validation: validation,
                        disabled: false,
                        on_input: on_input,
                        on_blur: on_blur
                    }
                },
            }
            FieldError {
                display: display,
                message: message
            }
        }
    }
}

#[component]
pub fn RegistrationForm(props: RegistrationFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let sink = use_context::<Rc<dyn RegistrationSink>>();

    let submit = state().submit_control();
    let epoch = state().file_input_epoch();
    let accept = state().config().photo.allowed_types.join(",");

    rsx! {
        form {
            id: "registerForm",
            class: "registration-form",
            novalidate: true,
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                if run_gate_and_scroll(state, GateEntry::Submit) {
                    spawn(submit_registration(state, sink.clone()));
                }
            },
            onreset: move |_| dispatch.call(RegistrationAction::ResetForm),

            div {
                class: "form-section photo-section",
                h3 { class: "form-section-title", "Employee Photo" }
                PhotoPreview {
                    preview: state().preview(),
                    on_remove: move |_| dispatch.call(RegistrationAction::RemovePhoto)
                }
                // Keyed on the epoch so clearing the selection re-creates the input
                for epoch in std::iter::once(epoch) {
                    input {
                        key: "{epoch}",
                        id: "employeePhoto",
                        name: "employeePhoto",
                        class: "form-control",
                        r#type: "file",
                        accept: "{accept}",
                        onchange: move |event: FormEvent| {
                            if let Some(files) = event.files() {
                                spawn(intake_photo(state, files));
                            }
                        }
                    }
                }
            }

            for (title, fields) in REVIEW_LAYOUT.iter().copied() {
                div {
                    key: "{title}",
                    class: "form-section",
                    h3 { class: "form-section-title", "{title}" }
                    div {
                        class: "form-grid",
                        for field in fields.iter().copied() {
                            {render_field(state, dispatch, field)}
                        }
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    id: "viewDetailsBtn",
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        run_gate_and_scroll(state, GateEntry::ViewDetails);
                    },
                    "View Details"
                }
                button {
                    class: "btn btn-outline",
                    r#type: "reset",
                    disabled: submit.busy,
                    "Clear Form"
                }
                button {
                    id: "submitBtn",
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submit.busy,
                    if submit.busy {
                        LoadingIndicator { message: submit.label().to_string() }
                    } else {
                        "{submit.label()}"
                    }
                }
            }
        }
    }
}
