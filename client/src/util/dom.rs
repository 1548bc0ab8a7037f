//! Browser DOM and timer helpers used by components.

use crate::state::bom::UploadFile;

/// Run `f` once after `ms` milliseconds.
///
/// Only meaningful in the browser; server rendering never fires events, so
/// the callback is dropped there.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
            f();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, f);
    }
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
            log::warn!("scroll target #{id} not found");
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Vertical scroll offset of the window, zero outside the browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// First file picked in the `<input type="file">` that raised `ev`.
pub fn picked_file(ev: &leptos::ev::Event) -> Option<UploadFile> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
        let file = input.files()?.get(0)?;
        // Allow picking the same file again.
        input.set_value("");
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size_bytes = file.size().max(0.0) as u64;
        Some(UploadFile { name: file.name(), size_bytes })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}
