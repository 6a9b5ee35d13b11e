#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use scroll_watch_core::dpi::{LogicalPosition, LogicalSize};
use scroll_watch_core::host::{BoxOffsets, ClientRect, ScrollMetrics, Viewport};
use scroll_watch_core::{Host, WatchError};

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// An element on a [`FakePage`], laid out at a fixed document offset.
#[derive(Debug)]
pub struct Node {
    pub id: usize,
    pub top: f64,
    pub height: f64,
    classes: RefCell<Vec<String>>,
    attributes: RefCell<HashMap<String, String>>,
}

pub type FakeElement = Rc<Node>;

impl Node {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
    }
}

type Listeners = RefCell<Vec<(usize, Box<dyn FnMut()>)>>;

/// A page with vertically stacked elements that only understands `.class` selectors.
pub struct FakePage {
    scroll_y: Cell<f64>,
    inner_height: Cell<f64>,
    border_top: Cell<f64>,
    nodes: RefCell<Vec<FakeElement>>,
    listeners: Rc<Listeners>,
    next_id: Cell<usize>,
    pub fail_viewport: Cell<bool>,
}

impl FakePage {
    pub fn new(inner_height: f64) -> Rc<Self> {
        Rc::new(Self {
            scroll_y: Cell::new(0.0),
            inner_height: Cell::new(inner_height),
            border_top: Cell::new(0.0),
            nodes: RefCell::new(Vec::new()),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
            fail_viewport: Cell::new(false),
        })
    }

    pub fn add(&self, class: &str, top: f64) -> FakeElement {
        self.add_sized(class, top, 100.0)
    }

    pub fn add_sized(&self, class: &str, top: f64, height: f64) -> FakeElement {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let node = Rc::new(Node {
            id,
            top,
            height,
            classes: RefCell::new(vec![class.to_owned()]),
            attributes: RefCell::new(HashMap::new()),
        });
        self.nodes.borrow_mut().push(node.clone());
        node
    }

    pub fn remove(&self, element: &FakeElement) {
        self.nodes.borrow_mut().retain(|node| node.id != element.id);
    }

    pub fn set_border_top(&self, border: f64) {
        self.border_top.set(border);
    }

    /// Set the scroll position without notifying listeners.
    pub fn set_scroll(&self, y: f64) {
        self.scroll_y.set(y);
    }

    /// Scroll to `y` and notify every scroll listener, like the browser does.
    pub fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Unregisters its listener when dropped.
pub struct FakeListener {
    id: usize,
    listeners: Weak<Listeners>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl Host for FakePage {
    type Element = FakeElement;
    type ScrollListener = FakeListener;

    fn viewport(&self) -> Result<Viewport, WatchError> {
        if self.fail_viewport.get() {
            return Err(WatchError::Unavailable("window"));
        }
        Ok(Viewport::new(self.scroll_y.get(), self.inner_height.get()))
    }

    fn scroll_metrics(&self) -> Result<ScrollMetrics, WatchError> {
        let scroll = LogicalPosition::new(0.0, self.scroll_y.get());
        Ok(ScrollMetrics {
            page_offset: scroll,
            root: BoxOffsets { scroll, client: LogicalPosition::new(0.0, self.border_top.get()) },
            body: Some(BoxOffsets::default()),
        })
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<FakeElement>, WatchError> {
        let class = selector.strip_prefix('.').filter(|class| !class.is_empty()).ok_or_else(|| {
            WatchError::InvalidSelector {
                selector: selector.into(),
                reason: "only class selectors are supported".into(),
            }
        })?;

        Ok(self.nodes.borrow().iter().filter(|node| node.has_class(class)).cloned().collect())
    }

    fn bounding_client_rect(&self, element: &FakeElement) -> ClientRect {
        // Borders push the content down, scrolling moves it up.
        let top = element.top - self.scroll_y.get() + self.border_top.get();
        ClientRect {
            origin: LogicalPosition::new(0.0, top),
            size: LogicalSize::new(100.0, element.height),
        }
    }

    fn attribute(&self, element: &FakeElement, name: &str) -> Option<String> {
        element.attribute(name)
    }

    fn set_attribute(
        &self,
        element: &FakeElement,
        name: &str,
        value: &str,
    ) -> Result<(), WatchError> {
        element.set_attribute(name, value);
        Ok(())
    }

    fn add_class(&self, element: &FakeElement, class: &str) -> Result<(), WatchError> {
        if !element.has_class(class) {
            element.classes.borrow_mut().push(class.to_owned());
        }
        Ok(())
    }

    fn add_scroll_listener(
        &self,
        listener: Box<dyn FnMut()>,
    ) -> Result<FakeListener, WatchError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, listener));
        Ok(FakeListener { id, listeners: Rc::downgrade(&self.listeners) })
    }
}
