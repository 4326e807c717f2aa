use dioxus::prelude::*;

use crate::registration::{FieldId, FieldKind, FieldValidation};
use crate::utils::validation::validation_class;

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub field: FieldId,
    pub value: String,
    pub validation: FieldValidation,
    pub disabled: bool,
    pub on_input: EventHandler<String>,
    pub on_blur: EventHandler<()>,
}

/// Text input bound to one registration field
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let spec = props.field.spec();
    let placeholder = match spec.kind {
        FieldKind::Text { placeholder } => placeholder,
        FieldKind::Select { .. } => "",
    };

    rsx! {
        input {
            id: props.field.id(),
            name: props.field.id(),
            class: validation_class(&props.validation),
            r#type: spec.constraints.input_type.as_str(),
            value: "{props.value}",
            placeholder: placeholder,
            required: spec.is_required(),
            disabled: props.disabled,
            oninput: move |event| props.on_input.call(event.value()),
            onblur: move |_| props.on_blur.call(())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedSelectProps {
    pub field: FieldId,
    pub value: String,
    pub validation: FieldValidation,
    pub disabled: bool,
    pub on_input: EventHandler<String>,
    pub on_blur: EventHandler<()>,
}

/// Select bound to one registration field; the empty option acts as the prompt
#[component]
pub fn ValidatedSelect(props: ValidatedSelectProps) -> Element {
    let spec = props.field.spec();
    let options: &'static [&'static str] = match spec.kind {
        FieldKind::Select { options } => options,
        FieldKind::Text { .. } => &[],
    };
    let selected = props.value.clone();
    let prompt = if spec.is_required() {
        format!("Select {}", props.field.label())
    } else {
        "None".to_string()
    };

    rsx! {
        select {
            id: props.field.id(),
            name: props.field.id(),
            class: validation_class(&props.validation),
            value: "{selected}",
            required: spec.is_required(),
            disabled: props.disabled,
            onchange: move |event| props.on_input.call(event.value()),
            onblur: move |_| props.on_blur.call(()),
            for choice in options.iter().copied() {
                option {
                    key: "{choice}",
                    value: "{choice}",
                    selected: choice == selected,
                    if choice.is_empty() { "{prompt}" } else { "{choice}" }
                }
            }
        }
    }
}
