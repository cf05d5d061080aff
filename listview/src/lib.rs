//! Virtualized list engine: storage, selection, display-object recycling and
//! smooth scrolling for list-like widgets.
//!
//! The engine never draws anything. Hosts supply a [`StyleContext`] that
//! creates [`DisplayObject`]s, a [`FrameTicker`] that delivers frame
//! callbacks, and optionally a [`ScrollSink`] mirroring the scroll state.

pub mod config;
pub mod decoration;
pub mod error;
pub mod frame;
pub mod host;
pub mod input;
pub mod list;
pub mod observer;
mod recycler;
mod scroll;
pub mod selection;
pub mod storage;

pub use config::ListConfig;
pub use error::{ListError, Result};
pub use frame::{FrameClock, FrameTicker, ListId};
pub use host::{DisplayObject, ScrollSink, StyleContext, StyleMetrics, Tag, VisualTemplate};
pub use list::{Dimension, List};
pub use recycler::{Viewport, VisibleSlot};

pub mod prelude {
    pub use crate::config::ListConfig;
    pub use crate::decoration::{ItemDecorations, PlainDecorations, TypeStrategy};
    pub use crate::error::{ListError, Result};
    pub use crate::frame::{FrameClock, FrameTicker, ListId};
    pub use crate::host::{
        DisplayObject, ItemPosition, Parity, ScrollSink, StyleContext, StyleMetrics, Tag,
        VisualTemplate,
    };
    pub use crate::input::{EventResult, Key, Modifiers};
    pub use crate::list::{Dimension, List};
    pub use crate::observer::ObserverId;
    pub use crate::recycler::{Viewport, VisibleSlot};
    pub use crate::selection::{EventMethod, SelectionEvent, SelectionMethod};
    pub use crate::storage::{StorageStrategy, VecStorage};
}
