use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use scroll_watch_core::scheduler::{Scheduler, Task};
use tracing::{error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Runs scheduled tasks on the next animation frame.
///
/// Tasks scheduled before the frame fires share one `requestAnimationFrame` call and run in the
/// order they were scheduled. Dropping the scheduler cancels the pending frame.
///
/// An exception handed to [`DeferredThrow::raise()`] during a frame is thrown from the frame
/// callback after the remaining tasks of that frame ran.
pub struct AnimationFrameScheduler {
    window: web_sys::Window,
    closure: Closure<dyn FnMut()>,
    tasks: Rc<RefCell<VecDeque<Task>>>,
    handle: Rc<Cell<Option<i32>>>,
    deferred: DeferredThrow,
}

impl AnimationFrameScheduler {
    pub fn new(window: web_sys::Window) -> Self {
        let tasks: Rc<RefCell<VecDeque<Task>>> = Rc::default();
        let handle = Rc::new(Cell::new(None));
        let deferred = DeferredThrow::default();
        let closure = Closure::new({
            let tasks = tasks.clone();
            let handle = handle.clone();
            let deferred = deferred.clone();
            move || {
                handle.set(None);
                let tasks = tasks.take();
                for task in tasks {
                    task();
                }

                if let Some(exception) = deferred.take() {
                    wasm_bindgen::throw_val(exception);
                }
            }
        });

        Self { window, closure, tasks, handle, deferred }
    }

    /// Where tasks of this scheduler put exceptions that should reach the browser.
    pub fn deferred_throw(&self) -> DeferredThrow {
        self.deferred.clone()
    }

    fn request(&self) {
        if self.handle.get().is_some() {
            return;
        }

        match self.window.request_animation_frame(self.closure.as_ref().unchecked_ref()) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(e) => error!("Failed to request animation frame: {e:?}"),
        }
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl Scheduler for AnimationFrameScheduler {
    fn schedule(&self, task: Task) {
        self.tasks.borrow_mut().push_back(task);
        self.request();
    }
}

impl Drop for AnimationFrameScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.window.cancel_animation_frame(handle) {
                error!("Failed to cancel animation frame: {e:?}");
            }
        }
    }
}

/// An exception waiting to be thrown at the end of the current animation frame.
///
/// Only the first exception of a frame is thrown, later ones are logged.
#[derive(Clone, Default)]
pub struct DeferredThrow(Rc<RefCell<Option<JsValue>>>);

impl DeferredThrow {
    pub fn raise(&self, exception: JsValue) {
        let mut slot = self.0.borrow_mut();
        if slot.is_some() {
            warn!("dropping exception, another one is already waiting: {exception:?}");
        } else {
            *slot = Some(exception);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.0.borrow().is_some()
    }

    fn take(&self) -> Option<JsValue> {
        self.0.borrow_mut().take()
    }
}

impl fmt::Debug for DeferredThrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DeferredThrow").field(&self.is_pending()).finish()
    }
}

impl fmt::Debug for AnimationFrameScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationFrameScheduler")
            .field("pending", &self.pending())
            .field("handle", &self.handle.get())
            .finish_non_exhaustive()
    }
}
