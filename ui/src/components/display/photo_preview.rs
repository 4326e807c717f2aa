use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::registration::PreviewRegion;

#[derive(Props, PartialEq, Clone)]
pub struct PhotoPreviewProps {
    pub preview: PreviewRegion,
    pub on_remove: EventHandler<()>,
}

#[component]
pub fn PhotoPreview(props: PhotoPreviewProps) -> Element {
    rsx! {
        div {
            class: "photo-preview-container",
            match props.preview {
                PreviewRegion::Image { src } => rsx! {
                    img {
                        class: "photo-preview",
                        src: "{src}",
                        alt: "Preview"
                    }
                    button {
                        id: "removePhotoBtn",
                        class: "btn btn-sm btn-danger mt-2",
                        r#type: "button",
                        onclick: move |_| props.on_remove.call(()),
                        "Remove Photo"
                    }
                },
                PreviewRegion::Decoding => rsx! {
                    div { class: "photo-placeholder", "👤" }
                    LoadingIndicator { message: "Loading photo...".to_string() }
                },
                PreviewRegion::Placeholder => rsx! {
                    div { class: "photo-placeholder", "👤" }
                    div { "No Photo Selected" }
                },
            }
        }
    }
}
