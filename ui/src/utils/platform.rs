//! Browser Platform Helpers
//!
//! Thin wrappers over the handful of browser APIs the registration page needs
//! outside of Dioxus' own rendering:
//!
//! - smooth scrolling to a field by element id
//! - timer-based suspension for simulated latency and closing animations
//! - MIME type lookup on the native `File` behind a Dioxus file engine

use std::any::Any;

use crate::console_debug;

/// Smoothly scroll the element with `element_id` into the vertical center of the viewport.
///
/// Missing window, document or element is not an error here; the scroll is simply skipped.
pub fn scroll_into_view_centered(element_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
        else {
            console_debug!("[Platform] No element with id '{}' to scroll to", element_id);
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(not(target_arch = "wasm32"))]
    console_debug!("[Platform] Scroll to '{}' skipped outside the browser", element_id);
}

/// Suspend the current task for `ms` milliseconds.
pub async fn sleep_ms(ms: u64) {
    if ms == 0 {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Extract the MIME type from the native file object a Dioxus file engine hands out.
///
/// On the web renderer this is a `web_sys::File`; anything else yields `None` and the
/// caller falls back to the file extension.
pub fn native_file_mime(native: Box<dyn Any>) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        native
            .downcast::<web_sys::File>()
            .ok()
            .map(|file| file.type_())
            .filter(|mime| !mime.is_empty())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = native;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_file_mime_unknown_object() {
        assert_eq!(native_file_mime(Box::new(42u8)), None);
    }

    #[tokio::test]
    async fn test_sleep_zero_returns_immediately() {
        sleep_ms(0).await;
    }
}
