use dioxus::prelude::*;

use crate::components::display::AlertDialog;
use crate::components::forms::{DetailsModal, RegistrationForm};
use crate::components::layout::{Footer, Navbar};
use crate::registration::{RegistrationAction, RegistrationState, ReviewModal, FIELD_SPECS};
use crate::services::config::RegistrationConfig;
use crate::services::submission::SimulatedSink;
use crate::{console_error, console_info, console_warn};

const REGISTRATION_CSS: Asset = asset!("/assets/styling/registration.css");

/// Load the build-time configuration override, falling back to the defaults.
fn load_config() -> RegistrationConfig {
    match option_env!("REGISTRATION_CONFIG_JSON") {
        Some(json) => RegistrationConfig::from_json(json).unwrap_or_else(|error| {
            console_warn!("[Registration] Using default configuration: {}", error);
            RegistrationConfig::default()
        }),
        None => RegistrationConfig::default(),
    }
}

#[component]
pub fn EmployeeRegistration() -> Element {
    let mut state = use_signal(|| RegistrationState::new(load_config()));

    let submit_delay = state.peek().config().timing.submit_delay_ms;
    use_context_provider(|| SimulatedSink::shared(submit_delay));

    // Check the error display mapping once on startup
    use_hook(|| {
        match state.peek().error_displays().validate(&FIELD_SPECS) {
            Ok(()) => console_info!("[Registration] Form ready"),
            Err(error) => console_error!("[Registration] {}", error),
        }
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let dialog = state().dialog().cloned();
    let review_visible = !matches!(state().review(), ReviewModal::Closed);

    rsx! {
        document::Link { rel: "stylesheet", href: REGISTRATION_CSS }

        Navbar {}

        main {
            class: "registration-container",

            div {
                class: "title-container",
                h1 { class: "registration-title", "Employee Registration" }
                p {
                    class: "registration-subtitle",
                    "Fields marked with * are required."
                }
            }

            RegistrationForm {
                state: state,
                dispatch: dispatch
            }
        }

        Footer {}

        if review_visible {
            DetailsModal { state: state }
        }

        if let Some(dialog) = dialog {
            AlertDialog {
                dialog: dialog,
                on_dismiss: move |_| dispatch.call(RegistrationAction::DismissDialog)
            }
        }
    }
}
