//! Platform independent core of `scroll-watch`.
//!
//! A [`ScrollWatch`] looks at the elements matching a selector whenever the page scrolls and
//! calls a handler, on the next frame, for each one that has come into view. By default the
//! handler adds the [`VISIBLE_CLASS`] class and the element is never looked at again.
//!
//! The page is reached through the [`Host`] trait and deferred work goes through a
//! [`Scheduler`], so the watcher runs the same against a browser (see `scroll-watch-web`) and
//! against a fake page in tests.
//!
//! ```
//! # use std::rc::Rc;
//! # use scroll_watch_core::{Host, ScrollWatch, WatchOptions, scheduler::Immediate};
//! fn watch_cards<H: Host + 'static>(host: Rc<H>) -> Rc<ScrollWatch<H, Immediate>> {
//!     let options = WatchOptions::default().with_visible_by("25%");
//!     Rc::new(ScrollWatch::new(host, Immediate, ".card", options))
//! }
//! ```

pub mod coords;
pub mod error;
pub mod host;
pub mod options;
pub mod scheduler;
pub mod visible_by;
mod watch;

pub use dpi;

pub use crate::error::{OsError, WatchError};
pub use crate::host::Host;
pub use crate::options::{Handler, WatchConfig, WatchOptions};
pub use crate::scheduler::Scheduler;
pub use crate::visible_by::VisibleBy;
pub use crate::watch::{
    default_handler, Pass, ScrollWatch, DONE_ATTRIBUTE, DONE_VALUE, VISIBLE_CLASS,
};
