use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::visible_by::VisibleBy;

/// Called on the next frame for every element that qualified during a pass.
///
/// Returning `true` marks the element as done so it is never handed out again.
pub type Handler<E> = Box<dyn FnMut(&E) -> bool>;

/// The serializable part of a watcher's options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct WatchConfig {
    /// Extra depth into the viewport an element needs before it qualifies.
    ///
    /// The default is `0`.
    pub visible_by: VisibleBy,

    /// Accepted for compatibility with existing option objects. Nothing reads it.
    ///
    /// The default is `true`.
    pub show_on_visible: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { visible_by: VisibleBy::default(), show_on_visible: true }
    }
}

/// Options for creating a [`ScrollWatch`].
///
/// Leaving the handler unset installs the default one, which adds the
/// [`VISIBLE_CLASS`] class to the element and marks it as done.
///
/// [`ScrollWatch`]: crate::ScrollWatch
/// [`VISIBLE_CLASS`]: crate::VISIBLE_CLASS
pub struct WatchOptions<E> {
    pub config: WatchConfig,
    pub handler: Option<Handler<E>>,
}

impl<E> WatchOptions<E> {
    #[inline]
    pub fn with_visible_by(mut self, visible_by: impl Into<VisibleBy>) -> Self {
        self.config.visible_by = visible_by.into();
        self
    }

    #[inline]
    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&E) -> bool + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    #[inline]
    pub fn with_show_on_visible(mut self, show_on_visible: bool) -> Self {
        self.config.show_on_visible = show_on_visible;
        self
    }

    #[inline]
    pub fn with_config(mut self, config: WatchConfig) -> Self {
        self.config = config;
        self
    }
}

impl<E> Default for WatchOptions<E> {
    fn default() -> Self {
        Self { config: WatchConfig::default(), handler: None }
    }
}

impl<E> From<WatchConfig> for WatchOptions<E> {
    fn from(config: WatchConfig) -> Self {
        Self { config, handler: None }
    }
}

impl<E> fmt::Debug for WatchOptions<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchOptions")
            .field("config", &self.config)
            .field("handler", &self.handler.as_ref().map(|_| ".."))
            .finish()
    }
}
