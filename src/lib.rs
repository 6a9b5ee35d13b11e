//! Run code once when elements scroll into view.
//!
//! A [`ScrollWatch`] owns a CSS selector and a handler. Every time the page scrolls down it
//! queries the selector again, and each matching element whose top edge has come far enough into
//! the viewport is handed to the handler on the next animation frame. Once the handler returns
//! `true` the element gets a [`DONE_ATTRIBUTE`] attribute and is skipped from then on.
//!
//! The default handler adds the [`VISIBLE_CLASS`] class, so fading cards in as they appear only
//! needs a stylesheet and:
//!
//! ```no_run
//! # #[cfg(web_platform)]
//! # fn main() -> Result<(), scroll_watch::WatchError> {
//! use scroll_watch::{web, WatchOptions};
//!
//! let watch = web::watch(".card", WatchOptions::default().with_visible_by("20%"))?;
//! std::mem::forget(watch);
//! # Ok(())
//! # }
//! # #[cfg(not(web_platform))]
//! # fn main() {}
//! ```
//!
//! How deep an element has to reach into the viewport is set with [`VisibleBy`], either in pixels
//! or as a percentage of the viewport height. Only the element's top edge is considered; its
//! height does not matter.
//!
//! Outside the browser the watcher works against any [`Host`], which is how it is tested.
//!
//! ## Cargo Features
//!
//! * `serde`: Enables serialization/deserialization of [`WatchConfig`] and [`VisibleBy`] with
//!   [Serde](https://crates.io/crates/serde).

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use scroll_watch_core::*;
#[cfg(web_platform)]
pub use scroll_watch_web as web;
