//! The viewport and document a watcher reads from and writes to.

use dpi::{LogicalPosition, LogicalSize};

use crate::error::WatchError;

/// Vertical scroll position and size of the viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// `window.scrollY`.
    pub scroll_y: f64,
    /// `window.innerHeight`.
    pub inner_height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, inner_height: f64) -> Self {
        Self { scroll_y, inner_height }
    }

    /// Document offset of the bottom edge of the viewport.
    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.inner_height
    }
}

/// Scroll offset and border width of a box, as `scrollTop`/`scrollLeft` and
/// `clientTop`/`clientLeft` report them.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BoxOffsets {
    pub scroll: LogicalPosition<f64>,
    pub client: LogicalPosition<f64>,
}

/// Everything needed to turn a viewport-relative rectangle into document coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// `window.pageXOffset` and `window.pageYOffset`.
    pub page_offset: LogicalPosition<f64>,
    /// `document.documentElement`.
    pub root: BoxOffsets,
    /// `document.body`, which may be missing.
    pub body: Option<BoxOffsets>,
}

/// Viewport-relative rectangle, as `getBoundingClientRect()` reports it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub origin: LogicalPosition<f64>,
    pub size: LogicalSize<f64>,
}

/// Read and write access to a page.
///
/// The browser implementation lives in `scroll-watch-web`; tests use a fake page.
pub trait Host {
    /// A handle to an element. Cloning must not copy the element itself.
    type Element: Clone + 'static;

    /// Keeps a scroll listener registered until dropped.
    type ScrollListener;

    fn viewport(&self) -> Result<Viewport, WatchError>;

    fn scroll_metrics(&self) -> Result<ScrollMetrics, WatchError>;

    /// All elements currently matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Element>, WatchError>;

    fn bounding_client_rect(&self, element: &Self::Element) -> ClientRect;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(
        &self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), WatchError>;

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), WatchError>;

    /// Call `listener` on every scroll of the page.
    fn add_scroll_listener(
        &self,
        listener: Box<dyn FnMut()>,
    ) -> Result<Self::ScrollListener, WatchError>;
}
