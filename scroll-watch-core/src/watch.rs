use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use smol_str::SmolStr;
use tracing::{debug, error, trace, warn};

use crate::coords::document_coords;
use crate::error::WatchError;
use crate::host::Host;
use crate::options::{Handler, WatchConfig, WatchOptions};
use crate::scheduler::Scheduler;
use crate::visible_by::VisibleBy;

/// Attribute set on an element once its handler asked not to be called again.
pub const DONE_ATTRIBUTE: &str = "watcher-done";

/// Value of [`DONE_ATTRIBUTE`] on finished elements.
pub const DONE_VALUE: &str = "invoked";

/// Class the default handler adds to elements that scrolled into view.
pub const VISIBLE_CLASS: &str = "visible";

/// Outcome of [`ScrollWatch::evaluate_positions()`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pass {
    /// The page scrolled up since the last pass, so nothing was looked at.
    Skipped { last: f64, current: f64 },
    /// `matched` unfinished elements were looked at and `scheduled` of them qualified.
    Evaluated { matched: usize, scheduled: usize },
}

/// Watches the elements matching a selector and hands each one to a handler once it scrolled
/// into view.
///
/// An element qualifies once the bottom of the viewport is further down the document than the
/// element's top edge plus the configured [`VisibleBy`] depth. The element's height plays no
/// part, so a tall element whose top is still below the fold does not qualify even if its
/// bottom is on screen.
///
/// Positions are only looked at while the page scrolls down or stays put. Scrolling up skips the
/// pass entirely.
pub struct ScrollWatch<H: Host, S> {
    selector: SmolStr,
    config: WatchConfig,
    handler: Rc<RefCell<Handler<H::Element>>>,
    last_window_position: Cell<f64>,
    host: Rc<H>,
    scheduler: S,
    listener: RefCell<Option<H::ScrollListener>>,
}

impl<H, S> ScrollWatch<H, S>
where
    H: Host + 'static,
    S: Scheduler,
{
    /// Create a watcher for the elements matching `selector` on `host`.
    ///
    /// Handlers run through `scheduler`. Without a handler in `options` the watcher uses
    /// [`default_handler()`]. Nothing is evaluated and no listener is registered until
    /// [`ScrollWatch::start()`] or [`ScrollWatch::evaluate_positions()`] is called.
    pub fn new(
        host: Rc<H>,
        scheduler: S,
        selector: impl Into<SmolStr>,
        options: WatchOptions<H::Element>,
    ) -> Self {
        let WatchOptions { config, handler } = options;
        let handler = handler.unwrap_or_else(|| default_handler(Rc::clone(&host)));

        Self {
            selector: selector.into(),
            config,
            handler: Rc::new(RefCell::new(handler)),
            last_window_position: Cell::new(0.0),
            host,
            scheduler,
            listener: RefCell::new(None),
        }
    }

    /// Run [`ScrollWatch::evaluate_positions()`] on every scroll of the page.
    ///
    /// The listener stays registered for as long as the watcher is alive. Starting again
    /// replaces the previous listener.
    pub fn start(self: &Rc<Self>) -> Result<(), WatchError>
    where
        S: 'static,
    {
        let watch = Rc::downgrade(self);
        let listener = self.host.add_scroll_listener(Box::new(move || {
            let Some(watch) = watch.upgrade() else {
                return;
            };
            if let Err(err) = watch.evaluate_positions() {
                error!(selector = %watch.selector, "failed to evaluate positions: {err}");
            }
        }))?;

        debug!(selector = %self.selector, "listening for scroll events");
        self.listener.replace(Some(listener));
        Ok(())
    }

    /// Look at every unfinished element and schedule the handler for the ones in view.
    pub fn evaluate_positions(&self) -> Result<Pass, WatchError> {
        let viewport = self.host.viewport()?;
        let window_position = viewport.scroll_y;
        let window_bottom = viewport.bottom();

        let last = self.last_window_position.get();
        if last > window_position {
            trace!(selector = %self.selector, last, current = window_position, "scrolled up");
            return Ok(Pass::Skipped { last, current: window_position });
        }

        let elements = self.host.query_selector_all(&self.selector)?;
        let metrics = self.host.scroll_metrics()?;
        let depth = self.config.visible_by.depth(viewport.inner_height);

        let mut matched = 0;
        let mut scheduled = 0;
        for element in elements.into_iter().filter(|element| !self.is_done(element)) {
            matched += 1;

            let rect = self.host.bounding_client_rect(&element);
            let top = document_coords(&rect, &metrics).y;

            // An unparsable depth never qualifies.
            let qualifies = depth.is_some_and(|depth| window_bottom > f64::from(top) + depth);
            trace!(selector = %self.selector, top, ?depth, window_bottom, qualifies);

            if qualifies {
                self.schedule_handler(element);
                scheduled += 1;
            }
        }

        self.last_window_position.set(window_position);
        debug!(selector = %self.selector, window_position, matched, scheduled, "evaluated");

        Ok(Pass::Evaluated { matched, scheduled })
    }

    fn is_done(&self, element: &H::Element) -> bool {
        self.host.attribute(element, DONE_ATTRIBUTE).is_some_and(|value| !value.is_empty())
    }

    fn schedule_handler(&self, element: H::Element) {
        let handler = Rc::clone(&self.handler);
        let host = Rc::clone(&self.host);
        let selector = self.selector.clone();

        self.scheduler.schedule(Box::new(move || {
            let done = {
                let mut handler = handler.borrow_mut();
                (*handler)(&element)
            };
            if !done {
                return;
            }

            if let Err(err) = host.set_attribute(&element, DONE_ATTRIBUTE, DONE_VALUE) {
                error!(%selector, "failed to mark element as done: {err}");
            }
        }));
    }
}

impl<H: Host, S> ScrollWatch<H, S> {
    /// The selector queried on every pass.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The depth an element needs before it qualifies.
    pub fn visible_by(&self) -> &VisibleBy {
        &self.config.visible_by
    }

    /// Stored for compatibility, the watcher itself never reads it.
    pub fn show_on_visible(&self) -> bool {
        self.config.show_on_visible
    }

    /// The serializable options this watcher was created with.
    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Scroll position seen by the last pass that was not skipped.
    pub fn last_window_position(&self) -> f64 {
        self.last_window_position.get()
    }

    /// Whether [`ScrollWatch::start()`] registered a scroll listener that is still held.
    pub fn is_started(&self) -> bool {
        self.listener.borrow().is_some()
    }

    /// The page this watcher reads from.
    pub fn host(&self) -> &Rc<H> {
        &self.host
    }
}

impl<H: Host, S: fmt::Debug> fmt::Debug for ScrollWatch<H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollWatch")
            .field("selector", &self.selector)
            .field("config", &self.config)
            .field("last_window_position", &self.last_window_position.get())
            .field("scheduler", &self.scheduler)
            .field("started", &self.is_started())
            .finish_non_exhaustive()
    }
}

/// Adds [`VISIBLE_CLASS`] to the element and reports it as done.
pub fn default_handler<H: Host + 'static>(host: Rc<H>) -> Handler<H::Element> {
    Box::new(move |element: &H::Element| {
        if let Err(err) = host.add_class(element, VISIBLE_CLASS) {
            warn!("failed to add `{VISIBLE_CLASS}` class: {err}");
        }
        true
    })
}
