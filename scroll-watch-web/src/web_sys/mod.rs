mod animation_frame;
mod event_handle;

use scroll_watch_core::dpi::{LogicalPosition, LogicalSize};
use scroll_watch_core::host::{BoxOffsets, ClientRect, ScrollMetrics, Viewport};
use scroll_watch_core::{os_error, Host, OsError, WatchError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

pub use self::animation_frame::{AnimationFrameScheduler, DeferredThrow};
pub use self::event_handle::EventListenerHandle;

/// The browser page, reached through `window` and `document`.
#[derive(Debug, Clone)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// The page of the global `window`.
    pub fn new() -> Result<Self, WatchError> {
        let window = web_sys::window().ok_or(WatchError::Unavailable("window"))?;
        Self::from_window(window)
    }

    pub fn from_window(window: Window) -> Result<Self, WatchError> {
        let document = window.document().ok_or(WatchError::Unavailable("document"))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Host for WebHost {
    type Element = Element;
    type ScrollListener = EventListenerHandle<dyn FnMut()>;

    fn viewport(&self) -> Result<Viewport, WatchError> {
        let scroll_y = self.window.scroll_y().map_err(js_error)?;
        let inner_height = self
            .window
            .inner_height()
            .map_err(js_error)?
            .as_f64()
            .ok_or_else(|| os_error!("`innerHeight` is not a number"))?;

        Ok(Viewport { scroll_y, inner_height })
    }

    fn scroll_metrics(&self) -> Result<ScrollMetrics, WatchError> {
        let page_offset = LogicalPosition::new(
            self.window.page_x_offset().map_err(js_error)?,
            self.window.page_y_offset().map_err(js_error)?,
        );
        let root =
            self.document.document_element().ok_or(WatchError::Unavailable("documentElement"))?;
        let body = self.document.body();

        Ok(ScrollMetrics {
            page_offset,
            root: box_offsets(&root),
            body: body.as_deref().map(box_offsets),
        })
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>, WatchError> {
        let nodes = self.document.query_selector_all(selector).map_err(|e| {
            WatchError::InvalidSelector { selector: selector.into(), reason: js_message(&e) }
        })?;

        Ok((0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn bounding_client_rect(&self, element: &Element) -> ClientRect {
        let rect = element.get_bounding_client_rect();
        ClientRect {
            origin: LogicalPosition::new(rect.left(), rect.top()),
            size: LogicalSize::new(rect.width(), rect.height()),
        }
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<(), WatchError> {
        element.set_attribute(name, value).map_err(js_error)?;
        Ok(())
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<(), WatchError> {
        element.class_list().add_1(class).map_err(js_error)?;
        Ok(())
    }

    fn add_scroll_listener(
        &self,
        listener: Box<dyn FnMut()>,
    ) -> Result<Self::ScrollListener, WatchError> {
        EventListenerHandle::new(self.window.clone(), "scroll", Closure::wrap(listener))
    }
}

fn box_offsets(element: &Element) -> BoxOffsets {
    BoxOffsets {
        scroll: LogicalPosition::new(element.scroll_left().into(), element.scroll_top().into()),
        client: LogicalPosition::new(element.client_left().into(), element.client_top().into()),
    }
}

pub(crate) fn js_message(value: &JsValue) -> String {
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => {
            format!("{}: {}", String::from(error.name()), String::from(error.message()))
        },
        None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
    }
}

pub(crate) fn js_error(value: JsValue) -> OsError {
    os_error!(js_message(&value))
}
