//! The list façade.
//!
//! [`List`] composes a storage strategy, a type strategy and a selection
//! strategy with the display-object recycler and the scroll controller.
//! Every mutation updates storage, shifts the index-based state of the
//! strategies, re-clips the scroll position and refreshes synchronously
//! before returning. Selection events are delivered to observers last.

mod fit;
mod navigation;

pub use fit::Dimension;

use log::{debug, trace};

use crate::config::ListConfig;
use crate::decoration::{ItemDecorations, TypeStrategy};
use crate::error::{ListError, Result};
use crate::frame::{FrameTicker, ListId};
use crate::host::{DisplayObject, ScrollSink, StyleContext, Tag};
use crate::input::Modifiers;
use crate::observer::{ObserverId, Observers};
use crate::recycler::{Recycler, RefreshInput, Viewport, VisibleSlot};
use crate::scroll::{ScrollController, ScrollOutcome};
use crate::selection::{
    EventMethod, MultiSelection, SelectionEvent, SelectionMethod, SelectionStrategy,
    SingleSelection,
};
use crate::storage::{StorageStrategy, VecStorage, move_target};

const SINGLE: &str = "single";
const MULTI: &str = "multi";

/// A virtualized list of `T`.
///
/// # Example
///
/// ```ignore
/// let clock = FrameClock::new();
/// let mut list = List::single(style, clock.clone()).with_items(["a", "b", "c"]);
/// list.resize(200.0, 120.0);
///
/// list.set_selected_index(Some(1))?;
/// list.insert(0, "z")?;
/// assert_eq!(list.selected_index(), Some(2));
/// ```
pub struct List<T> {
    id: ListId,
    storage: Box<dyn StorageStrategy<T>>,
    decorations: Box<dyn TypeStrategy<T>>,
    selection: Box<dyn SelectionStrategy>,
    style: Box<dyn StyleContext<T>>,
    recycler: Recycler<T>,
    scroll: ScrollController,
    ticker: Box<dyn FrameTicker>,
    scrollbar: Option<Box<dyn ScrollSink>>,
    scrollbar_visible: bool,
    viewport: Viewport,
    /// Average row pitch of the last pass that measured anything.
    average_pitch: Option<f32>,
    observers: Observers<SelectionEvent>,
}

impl<T: 'static> List<T> {
    fn with_selection(
        style: impl StyleContext<T> + 'static,
        ticker: impl FrameTicker + 'static,
        selection: Box<dyn SelectionStrategy>,
    ) -> Self {
        let id = ListId::new();
        debug!("Creating list {}", id);
        Self {
            id,
            storage: Box::new(VecStorage::new()),
            decorations: Box::new(ItemDecorations::new()),
            selection,
            style: Box::new(style),
            recycler: Recycler::new(),
            scroll: ScrollController::default(),
            ticker: Box::new(ticker),
            scrollbar: None,
            scrollbar_visible: false,
            viewport: Viewport::default(),
            average_pitch: None,
            observers: Observers::default(),
        }
    }

    /// A list with single selection that follows focus.
    pub fn single(style: impl StyleContext<T> + 'static, ticker: impl FrameTicker + 'static) -> Self {
        Self::with_selection(style, ticker, Box::new(SingleSelection::new()))
    }

    /// A list with multi selection.
    pub fn multi(
        style: impl StyleContext<T> + 'static,
        ticker: impl FrameTicker + 'static,
        method: SelectionMethod,
        events: EventMethod,
    ) -> Self {
        Self::with_selection(style, ticker, Box::new(MultiSelection::new(method, events)))
    }

    /// Replace the storage strategy. Any previous items and selection are
    /// discarded.
    pub fn with_storage(mut self, storage: impl StorageStrategy<T> + 'static) -> Self {
        let count = self.storage.len();
        self.decorations.remove(0, count);
        self.selection.remove(0, count);
        self.storage = Box::new(storage);
        self.refresh();
        self
    }

    /// Replace the type strategy.
    pub fn with_decorations(mut self, decorations: impl TypeStrategy<T> + 'static) -> Self {
        self.decorations = Box::new(decorations);
        self.refresh();
        self
    }

    /// Apply a validated config.
    pub fn with_config(mut self, config: &ListConfig) -> Result<Self> {
        config.validate()?;

        self.scroll.set_speed(config.smooth_scroll_speed);
        self.scroll.set_max_duration(config.max_scroll_duration_ms);
        self.scroll.set_scroll_distance(config.scroll_distance);
        let extent = self.extent();
        self.scroll.set_overscroll(config.overscroll, extent);

        if let Some(single) = self.selection.as_single_mut() {
            single.set_follows_focus(config.selection_follows_focus);
        }
        if let Some(multi) = self.selection.as_multi_mut() {
            multi.set_selection_method(config.selection_method);
            multi.set_event_method(config.event_method);
        }

        self.refresh();
        Ok(self)
    }

    /// Append items.
    pub fn with_items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        for item in items {
            self.storage.push(item);
        }
        self.refresh();
        self
    }
}

impl<T> List<T> {
    pub fn id(&self) -> ListId {
        self.id
    }

    // =========================================================================
    // Items
    // =========================================================================

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.storage
            .get(index)
            .ok_or_else(|| ListError::out_of_range(index, self.len()))
    }

    /// Mutable item at `index`. Call [`refresh`](Self::refresh) afterwards
    /// if the change affects how the item is displayed.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.storage
            .get_mut(index)
            .ok_or_else(|| ListError::out_of_range(index, len))
    }

    /// Index of the first item equal to `item`.
    pub fn find(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.storage.find_by(&|candidate| candidate == item)
    }

    /// Append an item.
    pub fn add(&mut self, item: T) {
        let index = self.storage.len();
        self.storage.push(item);
        self.decorations.insert(index, 1);
        self.selection.insert(index, 1);
        self.after_mutation(Vec::new());
    }

    /// Insert an item before `index`. `index == len()` appends.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.storage.insert(index, item)?;
        self.decorations.insert(index, 1);
        self.selection.insert(index, 1);
        debug!("{}: inserted item at {}", self.id, index);
        self.after_mutation(Vec::new());
        Ok(())
    }

    /// Remove and return the item at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let item = self.storage.remove(index)?;
        self.decorations.remove(index, 1);
        let events = self.selection.remove(index, 1);
        debug!("{}: removed item at {}", self.id, index);
        self.after_mutation(events);
        Ok(item)
    }

    /// Move the item at `index` before the item currently at `before`.
    /// `before == len()` moves it to the end.
    pub fn move_before(&mut self, index: usize, before: usize) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(ListError::out_of_range(index, len));
        }
        if before > len {
            return Err(ListError::out_of_range(before, len));
        }

        let target = move_target(index, before);
        if target == index {
            return Ok(());
        }

        self.storage.relocate(index, target)?;
        self.decorations.relocate(index, target);
        self.selection.relocate(index, target);
        debug!("{}: moved item {} to {}", self.id, index, target);
        self.after_mutation(Vec::new());
        Ok(())
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        let count = self.storage.len();
        self.storage.clear();
        self.decorations.remove(0, count);
        let events = self.selection.remove(0, count);
        debug!("{}: cleared {} items", self.id, count);
        self.after_mutation(events);
    }

    fn after_mutation(&mut self, events: Vec<SelectionEvent>) {
        let outcome = self.scroll.reclip(self.extent());
        self.handle_scroll(outcome);
        self.refresh();
        self.emit(events);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Register an observer for selection changes.
    pub fn on_selection_changed(&mut self, callback: impl FnMut(&SelectionEvent) + 'static) -> ObserverId {
        self.observers.register(callback)
    }

    /// Remove a selection observer. Returns false if it was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    /// Whether this list uses multi selection.
    pub fn is_multi(&self) -> bool {
        self.selection.as_multi().is_some()
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.selection.focus_index()
    }

    /// Move focus to `index` and scroll it into view.
    pub fn set_focus(&mut self, index: usize) -> Result<()> {
        let count = self.len();
        if index >= count {
            return Err(ListError::out_of_range(index, count));
        }
        let events = self.selection.focus(Some(index), count);
        self.ensure_visible(index);
        self.refresh();
        self.emit(events);
        Ok(())
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    pub fn has_selection(&self) -> bool {
        self.selection.selection_count() > 0
    }

    pub fn selection_count(&self) -> usize {
        self.selection.selection_count()
    }

    /// Selected index of a single selection list. Always `None` for multi
    /// selection lists.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.as_single().and_then(SingleSelection::selected_index)
    }

    /// Selected item of a single selection list.
    pub fn selected_item(&self) -> Result<&T> {
        let single = self.single_ref()?;
        let index = single.selected_index().ok_or(ListError::NoSelection)?;
        self.get(index)
    }

    /// Selected indices, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        match (self.selection.as_single(), self.selection.as_multi()) {
            (Some(single), _) => single.selected_index().into_iter().collect(),
            (_, Some(multi)) => multi.selected().to_vec(),
            _ => Vec::new(),
        }
    }

    /// Selected items, in index order.
    pub fn selected_items(&self) -> Vec<&T> {
        self.selected_indices()
            .into_iter()
            .filter_map(|index| self.storage.get(index))
            .collect()
    }

    /// Select `index` in a single selection list, or clear with `None`.
    pub fn set_selected_index(&mut self, index: Option<usize>) -> Result<()> {
        let count = self.len();
        let events = self.single_mut()?.set_selected_index(index, count)?;
        if let Some(index) = index {
            self.ensure_visible(index);
        }
        self.refresh();
        self.emit(events);
        Ok(())
    }

    /// Select the first item equal to `item`; clears the selection if there
    /// is none.
    pub fn set_selection(&mut self, item: &T) -> Result<()>
    where
        T: PartialEq,
    {
        let index = self.find(item);
        self.set_selected_index(index)
    }

    /// Clear a single selection.
    pub fn remove_selection(&mut self) -> Result<()> {
        self.set_selected_index(None)
    }

    pub fn selection_follows_focus(&self) -> bool {
        self.selection
            .as_single()
            .map(SingleSelection::follows_focus)
            .unwrap_or(false)
    }

    pub fn set_selection_follows_focus(&mut self, value: bool) -> Result<()> {
        let events = self.single_mut()?.set_follows_focus(value);
        self.refresh();
        self.emit(events);
        Ok(())
    }

    pub fn select_all(&mut self) -> Result<()> {
        let count = self.len();
        let events = self.multi_mut()?.select_all(count);
        self.refresh();
        self.emit(events);
        Ok(())
    }

    /// Deselect everything. Works for both selection variants.
    pub fn clear_selection(&mut self) {
        let events = match self.selection.as_multi_mut() {
            Some(multi) => multi.clear(),
            None => {
                let count = self.storage.len();
                self.selection
                    .as_single_mut()
                    .and_then(|single| single.set_selected_index(None, count).ok())
                    .unwrap_or_default()
            }
        };
        self.refresh();
        self.emit(events);
    }

    pub fn invert_selection(&mut self) -> Result<()> {
        let count = self.len();
        let events = self.multi_mut()?.invert(count);
        self.refresh();
        self.emit(events);
        Ok(())
    }

    /// Replace a multi selection. Input order and duplicates do not matter.
    pub fn set_selected_indices(&mut self, indices: &[usize]) -> Result<()> {
        let count = self.len();
        let events = self.multi_mut()?.set(indices, count)?;
        self.refresh();
        self.emit(events);
        Ok(())
    }

    pub fn add_to_selection(&mut self, indices: &[usize]) -> Result<()> {
        let count = self.len();
        let events = self.multi_mut()?.add(indices, count)?;
        self.refresh();
        self.emit(events);
        Ok(())
    }

    pub fn remove_from_selection(&mut self, indices: &[usize]) -> Result<()> {
        let events = self.multi_mut()?.remove_from(indices);
        self.refresh();
        self.emit(events);
        Ok(())
    }

    pub fn set_selection_method(&mut self, method: SelectionMethod) -> Result<()> {
        self.multi_mut()?.set_selection_method(method);
        Ok(())
    }

    pub fn set_event_method(&mut self, method: EventMethod) -> Result<()> {
        self.multi_mut()?.set_event_method(method);
        Ok(())
    }

    /// The item at `index` was clicked.
    pub fn click(&mut self, index: usize, modifiers: Modifiers) -> Result<()> {
        let count = self.len();
        if index >= count {
            return Err(ListError::out_of_range(index, count));
        }
        let events = self.selection.click(index, modifiers);
        self.ensure_visible(index);
        self.refresh();
        self.emit(events);
        Ok(())
    }

    /// A click at viewport coordinate `y`. Returns true if it hit a row.
    pub fn click_at(&mut self, y: f32, modifiers: Modifiers) -> bool {
        match self.recycler.index_at(y) {
            Some(index) => self.click(index, modifiers).is_ok(),
            None => false,
        }
    }

    /// Activate the focused item. Returns false if activation has no
    /// meaning for the current selection policy or nothing is focused.
    pub fn activate(&mut self) -> bool {
        let Some(events) = self.selection.activate() else {
            return false;
        };
        self.refresh();
        self.emit(events);
        true
    }

    fn single_ref(&self) -> Result<&SingleSelection> {
        self.selection
            .as_single()
            .ok_or(ListError::SelectionMode { expected: SINGLE })
    }

    fn single_mut(&mut self) -> Result<&mut SingleSelection> {
        self.selection
            .as_single_mut()
            .ok_or(ListError::SelectionMode { expected: SINGLE })
    }

    fn multi_mut(&mut self) -> Result<&mut MultiSelection> {
        self.selection
            .as_multi_mut()
            .ok_or(ListError::SelectionMode { expected: MULTI })
    }

    fn emit(&mut self, events: Vec<SelectionEvent>) {
        for event in &events {
            self.observers.notify(event);
        }
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Current (possibly animating) scroll offset, in items.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    /// Offset the list is scrolling towards.
    pub fn scroll_target(&self) -> f32 {
        self.scroll.target()
    }

    pub fn max_scroll_offset(&self) -> f32 {
        self.scroll.max_offset(self.extent())
    }

    /// Estimated number of rows the viewport holds.
    pub fn max_display(&self) -> f32 {
        self.scroll.max_display()
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_armed()
    }

    /// Scroll to `offset`, optionally clamped to the valid range.
    pub fn scroll_to(&mut self, offset: f32, clip: bool) {
        let outcome = self.scroll.scroll_to(offset, clip, self.extent());
        self.handle_scroll(outcome);
    }

    /// Scroll relative to the current target.
    pub fn scroll_by(&mut self, delta: f32, clip: bool) {
        self.scroll_to(self.scroll.target() + delta, clip);
    }

    /// Bring `index` into view. Out of range indices are ignored.
    pub fn ensure_visible(&mut self, index: usize) {
        if index >= self.len() {
            return;
        }
        // capacity may change after the first scroll, so look twice
        for _ in 0..2 {
            match self.scroll.reveal(index) {
                Some(target) => self.scroll_to(target, true),
                None => return,
            }
        }
    }

    pub fn smooth_scroll_speed(&self) -> f32 {
        self.scroll.speed()
    }

    /// Set the smooth scroll speed in items per second. 0 disables smooth
    /// scrolling and finishes a running animation immediately.
    pub fn set_smooth_scroll_speed(&mut self, speed: f32) {
        let snapped = self.scroll.set_speed(speed);
        if snapped {
            debug!("{}: smooth scrolling disabled mid-animation", self.id);
            self.ticker.unregister(self.id);
            self.refresh();
        }
        if let Some(sink) = self.scrollbar.as_mut() {
            sink.set_smooth_speed(self.scroll.speed());
        }
    }

    pub fn maximum_scroll_duration(&self) -> u32 {
        self.scroll.max_duration_ms()
    }

    /// Upper bound for one scroll traversal in milliseconds. 0 removes the
    /// bound.
    pub fn set_maximum_scroll_duration(&mut self, ms: u32) {
        self.scroll.set_max_duration(ms);
    }

    pub fn overscroll(&self) -> f32 {
        self.scroll.overscroll()
    }

    /// Extra scrollable distance after the last item, in items.
    pub fn set_overscroll(&mut self, rows: f32) {
        let outcome = self.scroll.set_overscroll(rows, self.extent());
        self.handle_scroll(outcome);
        self.refresh();
    }

    pub fn scroll_distance(&self) -> f32 {
        self.scroll.scroll_distance()
    }

    /// Items scrolled per mouse wheel notch.
    pub fn set_scroll_distance(&mut self, rows: f32) {
        self.scroll.set_scroll_distance(rows);
    }

    /// Mouse wheel input. Positive amounts scroll towards the start. Returns
    /// false if the list is already at that end.
    pub fn mouse_scroll(&mut self, amount: f32) -> bool {
        match self.scroll.wheel_target(amount, self.extent()) {
            Some(target) => {
                self.scroll_to(target, true);
                true
            }
            None => false,
        }
    }

    /// The attached scrollbar was dragged to `value`.
    pub fn scrollbar_moved(&mut self, value: f32) {
        self.scroll_to(value, true);
    }

    /// Advance the smooth scroll animation. Returns true while the
    /// animation is still running.
    pub fn tick(&mut self, delta_ms: f32) -> bool {
        let outcome = self.scroll.tick(delta_ms);

        if let Some(speed) = outcome.speed
            && let Some(sink) = self.scrollbar.as_mut()
        {
            sink.set_smooth_speed(speed);
        }
        if outcome.moved {
            self.refresh();
        }
        if outcome.finished {
            debug!("{}: scroll finished at {}", self.id, self.scroll.offset());
            self.ticker.unregister(self.id);
        }

        self.scroll.is_armed()
    }

    /// Attach a scrollbar that mirrors the scroll state.
    pub fn attach_scrollbar(&mut self, sink: impl ScrollSink + 'static) {
        self.scrollbar = Some(Box::new(sink));
        if let Some(sink) = self.scrollbar.as_mut() {
            sink.set_smooth_speed(self.scroll.traversal_speed());
        }
        self.sync_scrollbar();
    }

    pub fn detach_scrollbar(&mut self) -> Option<Box<dyn ScrollSink>> {
        self.scrollbar.take()
    }

    /// Whether the content exceeds the viewport.
    pub fn scrollbar_visible(&self) -> bool {
        self.scrollbar_visible
    }

    fn handle_scroll(&mut self, outcome: ScrollOutcome) {
        match outcome {
            ScrollOutcome::Unchanged => return,
            ScrollOutcome::Snapped => self.refresh(),
            ScrollOutcome::Armed { newly } => {
                if newly {
                    debug!("{}: scroll armed towards {}", self.id, self.scroll.target());
                    self.ticker.register(self.id);
                }
            }
        }
        self.sync_scrollbar();
    }

    fn sync_scrollbar(&mut self) {
        let maximum = self.extent() as f32 + self.scroll.overscroll();
        let page = self.scroll.max_display();
        let value = self.scroll.target();
        let visible = self.scrollbar_visible;

        if let Some(sink) = self.scrollbar.as_mut() {
            sink.set_range(maximum, page);
            sink.set_value(value);
            sink.set_visible(visible);
        }
    }

    // =========================================================================
    // Display
    // =========================================================================

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Change the viewport size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width.max(0.0), height.max(0.0));
        self.refresh();
        let outcome = self.scroll.reclip(self.extent());
        self.handle_scroll(outcome);
    }

    /// Rebuild the visible rows from the current state.
    pub fn refresh(&mut self) {
        let metrics = self.recycler.refresh(RefreshInput {
            storage: self.storage.as_ref(),
            decorations: self.decorations.as_mut(),
            selection: self.selection.as_ref(),
            style: self.style.as_mut(),
            viewport: self.viewport,
            offset: self.scroll.offset(),
        });

        trace!(
            "{}: refreshed {} rows, capacity {}",
            self.id, metrics.rows, metrics.max_display
        );
        self.scroll.set_max_display(metrics.max_display);
        if metrics.average_pitch.is_some() {
            self.average_pitch = metrics.average_pitch;
        }
        self.scrollbar_visible =
            metrics.max_display < self.extent() as f32 + self.scroll.overscroll();
        self.sync_scrollbar();
    }

    /// Rows placed by the last refresh, top to bottom.
    pub fn visible_rows(&self) -> &[VisibleSlot] {
        self.recycler.visible()
    }

    /// Index of the row at viewport coordinate `y`.
    pub fn index_at(&self, y: f32) -> Option<usize> {
        self.recycler.index_at(y)
    }

    /// The display object currently showing `index`.
    pub fn representation(&self, index: usize) -> Option<&dyn DisplayObject<T>> {
        self.recycler.representation(index)
    }

    /// Number of display objects created for `tag` so far.
    pub fn pool_size(&self, tag: &Tag) -> usize {
        self.recycler.pool_len(tag)
    }

    /// Hide or show the item at `index`. Hidden items keep their index and
    /// selection state but are skipped when rows are placed.
    pub fn set_hidden(&mut self, index: usize, hidden: bool) -> Result<()> {
        let count = self.len();
        if index >= count {
            return Err(ListError::out_of_range(index, count));
        }
        self.decorations.set_hidden(index, hidden);
        let outcome = self.scroll.reclip(self.extent());
        self.handle_scroll(outcome);
        self.refresh();
        Ok(())
    }

    /// One past the last displayed item. Scroll range and clipping are based
    /// on this, so trailing hidden items never scroll the view empty.
    fn extent(&self) -> usize {
        let mut end = self.storage.len();
        while end > 0 && !self.is_displayed(end - 1) {
            end -= 1;
        }
        end
    }

    /// Whether the item at `index` takes part in display.
    pub fn is_displayed(&self, index: usize) -> bool {
        self.storage
            .get(index)
            .is_some_and(|item| self.decorations.is_visible(index, item))
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        if self.scroll.is_armed() {
            debug!("{}: dropped while scrolling", self.id);
            self.ticker.unregister(self.id);
        }
    }
}
