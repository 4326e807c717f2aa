use dioxus::prelude::*;

fn current_year() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        1970
    }
}

#[component]
pub fn Footer() -> Element {
    let year = use_hook(current_year);

    rsx! {
        footer {
            class: "footer",
            p {
                "© "
                span { id: "currentYear", "{year}" }
                " Employee Registration. All rights reserved."
            }
        }
    }
}
