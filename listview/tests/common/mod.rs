//! Recording doubles for the host collaborators.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use listview::prelude::*;

/// Everything a display object was told, shared with the test.
#[derive(Debug, Clone, Default)]
pub struct ObjectState {
    pub template: String,
    pub item: Option<String>,
    pub index: Option<usize>,
    pub width: f32,
    pub y: f32,
    pub selected: bool,
    pub focused: bool,
    pub parity: Parity,
    pub position: ItemPosition,
    pub attached: bool,
    pub prepared: bool,
    pub binds: usize,
}

pub type Shared<T> = Rc<RefCell<T>>;

pub struct TestObject {
    state: Shared<ObjectState>,
    height: f32,
}

impl<T: ToString> DisplayObject<T> for TestObject {
    fn bind(&mut self, item: &T) {
        let mut state = self.state.borrow_mut();
        state.item = Some(item.to_string());
        state.binds += 1;
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_width(&mut self, width: f32) {
        self.state.borrow_mut().width = width;
    }

    fn set_position(&mut self, y: f32) {
        self.state.borrow_mut().y = y;
    }

    fn set_index(&mut self, index: usize) {
        self.state.borrow_mut().index = Some(index);
    }

    fn set_selected(&mut self, selected: bool) {
        self.state.borrow_mut().selected = selected;
    }

    fn set_parity(&mut self, parity: Parity) {
        self.state.borrow_mut().parity = parity;
    }

    fn set_item_position(&mut self, position: ItemPosition) {
        self.state.borrow_mut().position = position;
    }

    fn focus(&mut self) {
        self.state.borrow_mut().focused = true;
    }

    fn defocus(&mut self) {
        self.state.borrow_mut().focused = false;
    }

    fn attach(&mut self) {
        self.state.borrow_mut().attached = true;
    }

    fn detach(&mut self) {
        self.state.borrow_mut().attached = false;
    }
}

/// Style with fixed row heights per tag. Clones share the created objects.
#[derive(Clone)]
pub struct TestStyle {
    templates: Vec<(Tag, f32)>,
    metrics: StyleMetrics,
    objects: Shared<Vec<Shared<ObjectState>>>,
}

impl TestStyle {
    /// Item rows of `height` pixels, no spacing.
    pub fn new(height: f32) -> Self {
        Self::with_spacing(height, 0.0)
    }

    pub fn with_spacing(height: f32, spacing: f32) -> Self {
        Self {
            templates: vec![(Tag::Item, height)],
            metrics: StyleMetrics {
                default_row_height: 20.0,
                spacing,
            },
            objects: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A style that knows no templates at all.
    pub fn empty() -> Self {
        Self {
            templates: Vec::new(),
            ..Self::new(0.0)
        }
    }

    pub fn with_template(mut self, tag: Tag, height: f32) -> Self {
        self.templates.push((tag, height));
        self
    }

    /// States of every object created so far, in creation order.
    pub fn objects(&self) -> Vec<ObjectState> {
        self.objects
            .borrow()
            .iter()
            .map(|state| state.borrow().clone())
            .collect()
    }

    pub fn created(&self) -> usize {
        self.objects.borrow().len()
    }

    /// Total number of `bind` calls over all objects.
    pub fn binds(&self) -> usize {
        self.objects.borrow().iter().map(|state| state.borrow().binds).sum()
    }
}

impl<T: ToString> StyleContext<T> for TestStyle {
    fn template(&self, tag: &Tag) -> Option<VisualTemplate> {
        self.templates
            .iter()
            .find(|(candidate, _)| candidate == tag)
            .map(|(tag, _)| VisualTemplate::new(tag.clone(), tag.to_string()))
    }

    fn create(&mut self, template: &VisualTemplate) -> Box<dyn DisplayObject<T>> {
        let height = self
            .templates
            .iter()
            .find(|(tag, _)| *tag == template.tag)
            .map(|(_, height)| *height)
            .unwrap_or(0.0);

        let state = Rc::new(RefCell::new(ObjectState {
            template: template.name.clone(),
            ..Default::default()
        }));
        self.objects.borrow_mut().push(state.clone());
        Box::new(TestObject { state, height })
    }

    fn metrics(&self) -> StyleMetrics {
        self.metrics
    }
}

/// Everything a scrollbar was told.
#[derive(Debug, Clone, Default)]
pub struct ScrollbarState {
    pub maximum: f32,
    pub page: f32,
    pub value: f32,
    pub visible: bool,
    pub speeds: Vec<f32>,
}

#[derive(Clone, Default)]
pub struct TestScrollbar {
    pub state: Shared<ScrollbarState>,
}

impl ScrollSink for TestScrollbar {
    fn set_range(&mut self, maximum: f32, page: f32) {
        let mut state = self.state.borrow_mut();
        state.maximum = maximum;
        state.page = page;
    }

    fn set_value(&mut self, value: f32) {
        self.state.borrow_mut().value = value;
    }

    fn set_smooth_speed(&mut self, speed: f32) {
        self.state.borrow_mut().speeds.push(speed);
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }
}

pub fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item {}", i)).collect()
}

/// Single selection list of `count` rows of 40px in a 160px viewport
/// (four rows), with smooth scrolling off.
pub fn single_list(count: usize) -> (List<String>, TestStyle, FrameClock) {
    let style = TestStyle::new(40.0);
    let clock = FrameClock::new();
    let mut list = List::single(style.clone(), clock.clone()).with_items(names(count));
    list.set_smooth_scroll_speed(0.0);
    list.resize(100.0, 160.0);
    (list, style, clock)
}

/// Multi selection counterpart of [`single_list`].
pub fn multi_list(count: usize, method: SelectionMethod, events: EventMethod) -> (List<String>, TestStyle, FrameClock) {
    let style = TestStyle::new(40.0);
    let clock = FrameClock::new();
    let mut list = List::multi(style.clone(), clock.clone(), method, events).with_items(names(count));
    list.set_smooth_scroll_speed(0.0);
    list.resize(100.0, 160.0);
    (list, style, clock)
}

/// Collect every selection event the list emits.
pub fn record<T>(list: &mut List<T>) -> Shared<Vec<SelectionEvent>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    list.on_selection_changed(move |event| sink.borrow_mut().push(*event));
    events
}

/// Tick the list while it is registered with the clock. Returns the elapsed
/// milliseconds.
pub fn run_animation<T>(list: &mut List<T>, clock: &FrameClock, frame_ms: f32) -> f32 {
    let mut elapsed = 0.0;
    while clock.is_registered(list.id()) && elapsed < 60_000.0 {
        list.tick(frame_ms);
        elapsed += frame_ms;
    }
    elapsed
}

/// Logical indices of the rows placed by the last refresh.
pub fn visible_indices<T>(list: &List<T>) -> Vec<usize> {
    list.visible_rows().iter().map(|row| row.index).collect()
}
