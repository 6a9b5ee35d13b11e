//! `ScrollWatch` as a JavaScript class.

use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use scroll_watch_core::{VisibleBy, WatchOptions};
use tracing::warn;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsError, JsValue};
use web_sys::Element;

use crate::web_sys::js_message;
use crate::{AnimationFrameScheduler, DeferredThrow, WebHost, WebScrollWatch};

/// ```js
/// const watch = new ScrollWatch('.card', { visibleBy: '25%' });
/// watch.start();
/// ```
#[wasm_bindgen(js_name = ScrollWatch)]
pub struct JsScrollWatch {
    inner: Rc<WebScrollWatch>,
}

#[wasm_bindgen(js_class = ScrollWatch)]
impl JsScrollWatch {
    /// Recognizes `visibleBy`, `handler` and `showOnVisible` in `options`.
    ///
    /// `handler` is called with the element as its only argument and `this` set to `undefined`.
    /// An exception it throws is rethrown at the end of the animation frame it ran in.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: String, options: Option<Object>) -> Result<JsScrollWatch, JsError> {
        let host = Rc::new(WebHost::new()?);
        let scheduler = AnimationFrameScheduler::new(host.window().clone());
        let options = match options {
            Some(options) => parse_options(&options, &scheduler.deferred_throw())?,
            None => WatchOptions::default(),
        };

        let inner = WebScrollWatch::new(host, scheduler, selector, options);
        Ok(JsScrollWatch { inner: Rc::new(inner) })
    }

    pub fn start(&self) -> Result<(), JsError> {
        self.inner.start()?;
        Ok(())
    }

    #[wasm_bindgen(js_name = evalPositions)]
    pub fn eval_positions(&self) -> Result<(), JsError> {
        self.inner.evaluate_positions()?;
        Ok(())
    }

    #[wasm_bindgen(js_name = evaluatePositions)]
    pub fn evaluate_positions(&self) -> Result<(), JsError> {
        self.eval_positions()
    }

    #[wasm_bindgen(getter)]
    pub fn selector(&self) -> String {
        self.inner.selector().to_owned()
    }

    #[wasm_bindgen(getter, js_name = visibleBy)]
    pub fn visible_by(&self) -> JsValue {
        match self.inner.visible_by() {
            VisibleBy::Pixels(pixels) => JsValue::from_f64(*pixels as f64),
            other => JsValue::from_str(&other.to_string()),
        }
    }

    #[wasm_bindgen(getter, js_name = showOnVisible)]
    pub fn show_on_visible(&self) -> bool {
        self.inner.show_on_visible()
    }

    #[wasm_bindgen(getter, js_name = lastWindowPosition)]
    pub fn last_window_position(&self) -> f64 {
        self.inner.last_window_position()
    }
}

fn parse_options(
    options: &Object,
    deferred: &DeferredThrow,
) -> Result<WatchOptions<Element>, JsError> {
    let mut parsed = WatchOptions::default();

    let visible_by = get(options, "visibleBy")?;
    if !visible_by.is_undefined() {
        parsed = parsed.with_visible_by(visible_by_from_js(&visible_by));
    }

    let show_on_visible = get(options, "showOnVisible")?;
    if !show_on_visible.is_undefined() {
        parsed = parsed.with_show_on_visible(show_on_visible.is_truthy());
    }

    let handler = get(options, "handler")?;
    if let Some(handler) = handler.dyn_ref::<Function>() {
        parsed = parsed.with_handler(js_handler(handler.clone(), deferred.clone()));
    } else if !handler.is_undefined() {
        return Err(JsError::new("`handler` must be a function"));
    }

    Ok(parsed)
}

fn get(options: &Object, key: &str) -> Result<JsValue, JsError> {
    Reflect::get(options, &JsValue::from_str(key))
        .map_err(|e| JsError::new(&format!("failed to read `{key}`: {}", js_message(&e))))
}

fn visible_by_from_js(value: &JsValue) -> VisibleBy {
    if let Some(number) = value.as_f64() {
        number.into()
    } else if let Some(text) = value.as_string() {
        text.as_str().into()
    } else {
        VisibleBy::Unparsable(format!("{value:?}").into())
    }
}

/// Calls `handler` with the element and tests the result for truthiness.
///
/// `this` is `undefined` inside the handler, there is no JS object for the watcher to pass when
/// options are read. An exception thrown by the handler leaves the element unmarked and goes to
/// `deferred`, so the rest of the frame still runs before it is thrown.
fn js_handler(handler: Function, deferred: DeferredThrow) -> impl FnMut(&Element) -> bool {
    move |element: &Element| match handler.call1(&JsValue::UNDEFINED, element) {
        Ok(result) => result.is_truthy(),
        Err(e) => {
            warn!("scroll handler threw: {}", js_message(&e));
            deferred.raise(e);
            false
        },
    }
}
