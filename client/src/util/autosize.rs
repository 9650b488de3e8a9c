//! Textarea grow-to-fit behavior.
//!
//! Setting the height to `auto` and then to the scroll height lets a
//! textarea track its content without internal scrolling; recomputing from
//! `auto` on every change is sufficient. Requires a browser environment.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Fit `el` to its content height.
#[cfg(feature = "hydrate")]
pub fn fit(el: &web_sys::HtmlElement) {
    let style = el.style();
    let _ = style.set_property("height", "auto");
    let height = el.scroll_height();
    let _ = style.set_property("height", &format!("{height}px"));
}

/// Fit the element that fired `ev`, if it is an HTML element.
#[cfg(feature = "hydrate")]
pub fn fit_target(ev: &web_sys::Event) {
    if let Some(el) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
    {
        fit(&el);
    }
}
