//! Deferred execution of handler calls.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;

/// A task the scheduler runs later.
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks at a later point, in the browser on the next animation frame.
pub trait Scheduler {
    fn schedule(&self, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn schedule(&self, task: Task) {
        (**self).schedule(task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for std::rc::Rc<S> {
    fn schedule(&self, task: Task) {
        (**self).schedule(task)
    }
}

/// Runs every task right away.
#[derive(Debug, Default, Clone, Copy)]
pub struct Immediate;

impl Scheduler for Immediate {
    fn schedule(&self, task: Task) {
        task()
    }
}

/// Holds tasks until [`FrameQueue::run_frame()`] is called.
#[derive(Default)]
pub struct FrameQueue {
    tasks: RefCell<VecDeque<Task>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Run the tasks queued so far and return how many ran.
    ///
    /// Tasks queued while the frame runs wait for the next frame.
    pub fn run_frame(&self) -> usize {
        let tasks = self.tasks.take();
        let count = tasks.len();
        for task in tasks {
            task();
        }
        count
    }
}

impl Scheduler for FrameQueue {
    fn schedule(&self, task: Task) {
        self.tasks.borrow_mut().push_back(task);
    }
}

impl fmt::Debug for FrameQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameQueue").field("pending", &self.pending()).finish()
    }
}
