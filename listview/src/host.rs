//! Interfaces the list consumes from its rendering host.
//!
//! The list never draws anything itself. A [`StyleContext`] hands out visual
//! templates per [`Tag`] and instantiates [`DisplayObject`]s from them; the
//! list binds items into those objects, decorates and positions them. The
//! host measures and renders. A [`ScrollSink`] is the optional scrollbar the
//! list keeps in sync.

use std::fmt;

// =============================================================================
// Tags and templates
// =============================================================================

/// Semantic label used to pick a visual template and a recycling pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    /// Regular list row. Every style is expected to provide this one.
    #[default]
    Item,
    /// Section header row.
    Header,
    /// Host-defined tag.
    Named(String),
}

impl Tag {
    pub fn named(name: impl Into<String>) -> Self {
        Tag::Named(name.into())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Item => write!(f, "item"),
            Tag::Header => write!(f, "header"),
            Tag::Named(name) => write!(f, "{}", name),
        }
    }
}

/// A visual template the style context resolved for a tag.
///
/// The list only carries it from [`StyleContext::template`] back to
/// [`StyleContext::create`]; its contents are the host's business.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualTemplate {
    /// Tag this template was registered for.
    pub tag: Tag,
    /// Host-side template name.
    pub name: String,
}

impl VisualTemplate {
    pub fn new(tag: Tag, name: impl Into<String>) -> Self {
        Self {
            tag,
            name: name.into(),
        }
    }
}

/// Geometry defaults a style provides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleMetrics {
    /// Height of a row before anything has been measured.
    pub default_row_height: f32,
    /// Vertical gap between two rows.
    pub spacing: f32,
}

impl StyleMetrics {
    /// Distance from the top of one default row to the top of the next.
    pub fn default_pitch(&self) -> f32 {
        self.default_row_height + self.spacing
    }
}

impl Default for StyleMetrics {
    fn default() -> Self {
        Self {
            default_row_height: 20.0,
            spacing: 0.0,
        }
    }
}

// =============================================================================
// Decorations
// =============================================================================

/// Odd/even parity of a row, for striped styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parity {
    /// No parity information.
    #[default]
    None,
    Even,
    Odd,
}

/// Position of a row relative to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemPosition {
    /// Not positioned.
    #[default]
    Nowhere,
    /// The only row.
    Alone,
    First,
    Middle,
    Last,
}

// =============================================================================
// Collaborator traits
// =============================================================================

/// A pooled visual representation of one list row.
///
/// Display objects are created lazily, reused across refreshes and only
/// dropped together with the list.
pub trait DisplayObject<T> {
    /// Show the given item.
    fn bind(&mut self, item: &T);

    /// Measured height after `bind` and layout.
    fn height(&self) -> f32;

    /// Set the width the row may use.
    fn set_width(&mut self, width: f32);

    /// Set the vertical position inside the viewport.
    fn set_position(&mut self, y: f32);

    /// Logical index the row currently represents.
    fn set_index(&mut self, _index: usize) {}

    fn set_selected(&mut self, selected: bool);

    fn set_parity(&mut self, parity: Parity);

    fn set_item_position(&mut self, _position: ItemPosition) {}

    fn focus(&mut self);

    fn defocus(&mut self);

    /// Make the row part of the visible view.
    fn attach(&mut self);

    /// Take the row out of the visible view without destroying it.
    fn detach(&mut self);
}

/// Styling context a list is constructed with.
///
/// Replaces any process-wide template registry: every list receives its own
/// context, so several lists with different styles can coexist.
pub trait StyleContext<T> {
    /// Look up the template for a tag.
    fn template(&self, tag: &Tag) -> Option<VisualTemplate>;

    /// Instantiate a display object from a template.
    fn create(&mut self, template: &VisualTemplate) -> Box<dyn DisplayObject<T>>;

    /// Default geometry of this style.
    fn metrics(&self) -> StyleMetrics {
        StyleMetrics::default()
    }
}

/// Receiver for scroll position updates, typically a scrollbar.
pub trait ScrollSink {
    /// Total scrollable extent and the size of one page, in items.
    fn set_range(&mut self, maximum: f32, page: f32);

    /// Current scroll target, in items.
    fn set_value(&mut self, value: f32);

    /// Speed used by the sink's own smoothing, in items per second.
    fn set_smooth_speed(&mut self, speed: f32);

    /// Whether the scrollbar should be shown.
    fn set_visible(&mut self, visible: bool);
}
