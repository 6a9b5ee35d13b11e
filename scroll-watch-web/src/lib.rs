//! # Web
//!
//! The browser backend of `scroll-watch`, built on [`wasm-bindgen`][wasm_bindgen] and
//! [`web-sys`][web_sys].
//!
//! [`WebHost`] reads the viewport and the document through the global `window`, and
//! [`AnimationFrameScheduler`] defers handler calls to the next `requestAnimationFrame`, so
//! handlers that touch styles or classes do not run inside the scroll event itself.
//!
//! ```no_run
//! use scroll_watch_web::{watch, WatchOptions};
//!
//! let watch = watch(".card", WatchOptions::default().with_visible_by("25%")).unwrap();
//! // The scroll listener lives as long as the watcher does.
//! std::mem::forget(watch);
//! ```
//!
//! From JavaScript, the same watcher is available as the `ScrollWatch` class:
//!
//! ```js
//! new ScrollWatch('.card', {
//!     visibleBy: 40,
//!     handler: (el) => { el.classList.add('seen'); return true },
//! }).start()
//! ```
//!
//! [wasm_bindgen]: https://docs.rs/wasm-bindgen
//! [web_sys]: https://docs.rs/web-sys

mod js;
mod web_sys;

use std::rc::Rc;

pub use scroll_watch_core::*;

pub use self::js::JsScrollWatch;
pub use self::web_sys::{AnimationFrameScheduler, DeferredThrow, EventListenerHandle, WebHost};

/// A watcher over the browser page, deferring handlers to animation frames.
pub type WebScrollWatch = ScrollWatch<WebHost, AnimationFrameScheduler>;

/// Watch the elements matching `selector` on the current page and start listening for scroll
/// events.
///
/// Positions are evaluated once right away, so elements already in view do not wait for the
/// first scroll.
pub fn watch(
    selector: &str,
    options: WatchOptions<::web_sys::Element>,
) -> Result<Rc<WebScrollWatch>, WatchError> {
    let host = Rc::new(WebHost::new()?);
    let scheduler = AnimationFrameScheduler::new(host.window().clone());
    let watch = Rc::new(WebScrollWatch::new(host, scheduler, selector, options));
    watch.start()?;
    watch.evaluate_positions()?;
    Ok(watch)
}
