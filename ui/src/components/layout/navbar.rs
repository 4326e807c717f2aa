use dioxus::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#"),
    ("Register", "#registerForm"),
    ("Employees", "#"),
];

/// Top navigation with a collapsible menu on narrow screens
#[component]
pub fn Navbar() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            class: "navbar",
            div { class: "navbar-brand", "Employee Registration" }
            button {
                class: if menu_open() { "mobile-menu-button active" } else { "mobile-menu-button" },
                r#type: "button",
                "aria-expanded": "{menu_open()}",
                onclick: move |_| menu_open.set(!menu_open()),
                span {}
                span {}
                span {}
            }
            ul {
                class: if menu_open() { "navlist active" } else { "navlist" },
                for (label, href) in NAV_LINKS.iter().copied() {
                    li {
                        key: "{label}",
                        a { href: "{href}", "{label}" }
                    }
                }
            }
        }
    }
}
