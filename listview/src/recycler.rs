//! Display-object recycling: turns a fractional scroll window into a
//! concrete, decorated slice of pooled display objects.
//!
//! Pools are keyed by tag and only ever grow. Every refresh walks logical
//! indices from the top of the window, hands each visible item the next
//! unused object of its tag, and detaches whatever the previous pass used
//! beyond that. An object is therefore bound to at most one index per pass.

use std::collections::HashMap;

use log::{trace, warn};

use crate::decoration::TypeStrategy;
use crate::host::{DisplayObject, StyleContext, Tag, VisualTemplate};
use crate::selection::SelectionStrategy;
use crate::storage::StorageStrategy;

/// Consecutive rows without height after which a pass stops.
const MAX_FLAT_ROWS: usize = 32;

/// Size of the area the list displays into, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One row of the current refresh pass.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleSlot {
    /// Logical index shown by the row.
    pub index: usize,
    /// Tag whose pool the object came from.
    pub tag: Tag,
    /// Position of the object inside its pool.
    pub slot: usize,
    /// Top of the row relative to the viewport. Negative for a partially
    /// scrolled-out first row.
    pub y: f32,
    /// Measured height of the row.
    pub height: f32,
}

/// Measurements of a refresh pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct PassMetrics {
    /// Estimated number of rows the viewport holds.
    pub max_display: f32,
    /// Average row pitch (height plus spacing), if any row was measured.
    pub average_pitch: Option<f32>,
    /// Rows placed in this pass.
    pub rows: usize,
}

/// Everything a refresh pass reads from (or prepares through) the list.
pub(crate) struct RefreshInput<'a, T> {
    pub storage: &'a dyn StorageStrategy<T>,
    pub decorations: &'a mut dyn TypeStrategy<T>,
    pub selection: &'a dyn SelectionStrategy,
    pub style: &'a mut dyn StyleContext<T>,
    pub viewport: Viewport,
    pub offset: f32,
}

/// Pooled display objects of one list.
pub(crate) struct Recycler<T> {
    pools: HashMap<Tag, Vec<Box<dyn DisplayObject<T>>>>,
    /// Objects used per tag by the previous pass.
    used: HashMap<Tag, usize>,
    visible: Vec<VisibleSlot>,
}

impl<T> Default for Recycler<T> {
    fn default() -> Self {
        Self {
            pools: HashMap::new(),
            used: HashMap::new(),
            visible: Vec::new(),
        }
    }
}

impl<T> Recycler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of the last pass, top to bottom.
    pub fn visible(&self) -> &[VisibleSlot] {
        &self.visible
    }

    /// Number of objects ever created for a tag.
    pub fn pool_len(&self, tag: &Tag) -> usize {
        self.pools.get(tag).map(Vec::len).unwrap_or(0)
    }

    /// The object currently showing `index`, if the index is on screen.
    pub fn representation(&self, index: usize) -> Option<&dyn DisplayObject<T>> {
        let slot = self.visible.iter().find(|slot| slot.index == index)?;
        self.pools
            .get(&slot.tag)
            .and_then(|pool| pool.get(slot.slot))
            .map(|object| object.as_ref())
    }

    /// Logical index of the row covering viewport coordinate `y`.
    pub fn index_at(&self, y: f32) -> Option<usize> {
        self.visible
            .iter()
            .find(|slot| y >= slot.y && y < slot.y + slot.height)
            .map(|slot| slot.index)
    }

    /// Rebuild the visible slice for the given window.
    pub fn refresh(&mut self, input: RefreshInput<'_, T>) -> PassMetrics {
        let RefreshInput {
            storage,
            decorations,
            selection,
            style,
            viewport,
            offset,
        } = input;

        self.visible.clear();
        let mut used: HashMap<Tag, usize> = HashMap::new();

        let count = storage.len();
        let spacing = style.metrics().spacing;
        let offset = offset.max(0.0);
        let first = offset.floor() as usize;
        let frac = offset - first as f32;

        let mut y = 0.0;
        let mut total_pitch = 0.0;
        let mut index = first;
        let mut flat = 0;

        while index < count && y < viewport.height {
            let Some(item) = storage.get(index) else { break };

            if !decorations.is_visible(index, item) {
                index += 1;
                continue;
            }

            let Some((tag, template)) = resolve_template(&*style, decorations.tag(index, item))
            else {
                warn!("style has no template for the item tag, nothing to display");
                break;
            };

            let slot = used.get(&tag).copied().unwrap_or(0);
            let pool = self.pools.entry(tag.clone()).or_default();
            if slot == pool.len() {
                trace!("creating display object {} for tag {}", slot, tag);
                let mut object = style.create(&template);
                decorations.prepare(object.as_mut());
                pool.push(object);
            }
            let object = pool[slot].as_mut();

            object.bind(item);
            object.set_index(index);
            object.set_width(viewport.width);
            decorations.apply(object, index, count, item);

            let marks = selection.marks(index);
            object.set_selected(marks.selected);
            if marks.focused {
                object.focus();
            } else {
                object.defocus();
            }

            let height = object.height().max(0.0);
            let pitch = height + spacing;
            if self.visible.is_empty() {
                y = -frac * pitch;
            }

            object.set_position(y);
            object.attach();

            self.visible.push(VisibleSlot {
                index,
                tag: tag.clone(),
                slot,
                y,
                height,
            });
            used.insert(tag, slot + 1);

            y += pitch;
            total_pitch += pitch;
            index += 1;

            if pitch > 0.0 {
                flat = 0;
            } else {
                flat += 1;
                if flat >= MAX_FLAT_ROWS {
                    trace!("{} rows without height, stopping at {}", flat, index);
                    break;
                }
            }
        }

        self.detach_unused(&used);
        self.used = used;

        let rows = self.visible.len();
        if rows == 0 || total_pitch <= 0.0 {
            trace!("degenerate refresh pass (rows: {}, count: {})", rows, count);
            return PassMetrics {
                max_display: 0.0,
                average_pitch: None,
                rows,
            };
        }

        let average = total_pitch / rows as f32;
        PassMetrics {
            max_display: ((viewport.height + spacing) / average).max(0.0),
            average_pitch: Some(average),
            rows,
        }
    }

    /// Detach objects the previous pass used but this one did not.
    fn detach_unused(&mut self, used: &HashMap<Tag, usize>) {
        for (tag, pool) in self.pools.iter_mut() {
            let now = used.get(tag).copied().unwrap_or(0);
            let before = self.used.get(tag).copied().unwrap_or(0).min(pool.len());
            for object in pool.iter_mut().take(before).skip(now) {
                object.detach();
            }
        }
    }
}

/// Template for the requested tag, falling back to the item tag.
fn resolve_template<T>(style: &dyn StyleContext<T>, requested: Tag) -> Option<(Tag, VisualTemplate)> {
    if let Some(template) = style.template(&requested) {
        return Some((requested, template));
    }
    style.template(&Tag::Item).map(|template| (Tag::Item, template))
}
