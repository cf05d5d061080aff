//! Terminal style: every display object is one text line.

use std::cell::RefCell;
use std::rc::Rc;

use listview::host::Parity;
use listview::{DisplayObject, StyleContext, StyleMetrics, Tag, VisualTemplate};

/// What a row was last told by the list.
#[derive(Debug, Clone, Default)]
pub struct RowCell {
    pub text: String,
    pub header: bool,
    pub y: f32,
    pub width: f32,
    pub selected: bool,
    pub focused: bool,
    pub parity: Parity,
    pub attached: bool,
}

type RowHandle = Rc<RefCell<RowCell>>;

pub struct TerminalRow {
    cell: RowHandle,
}

impl DisplayObject<String> for TerminalRow {
    fn bind(&mut self, item: &String) {
        let mut cell = self.cell.borrow_mut();
        cell.text = if cell.header {
            item.trim_start_matches('#').trim().to_uppercase()
        } else {
            item.clone()
        };
    }

    fn height(&self) -> f32 {
        1.0
    }

    fn set_width(&mut self, width: f32) {
        self.cell.borrow_mut().width = width;
    }

    fn set_position(&mut self, y: f32) {
        self.cell.borrow_mut().y = y;
    }

    fn set_selected(&mut self, selected: bool) {
        self.cell.borrow_mut().selected = selected;
    }

    fn set_parity(&mut self, parity: Parity) {
        self.cell.borrow_mut().parity = parity;
    }

    fn focus(&mut self) {
        self.cell.borrow_mut().focused = true;
    }

    fn defocus(&mut self) {
        self.cell.borrow_mut().focused = false;
    }

    fn attach(&mut self) {
        self.cell.borrow_mut().attached = true;
    }

    fn detach(&mut self) {
        self.cell.borrow_mut().attached = false;
    }
}

/// Style context handing out [`TerminalRow`]s. Clones share the rows, so the
/// renderer keeps a clone to read them back.
#[derive(Clone, Default)]
pub struct TerminalStyle {
    rows: Rc<RefCell<Vec<RowHandle>>>,
    spacing: f32,
}

impl TerminalStyle {
    pub fn new(spacing: f32) -> Self {
        Self {
            spacing,
            ..Default::default()
        }
    }

    /// Attached rows, top to bottom.
    pub fn attached(&self) -> Vec<RowCell> {
        let mut rows: Vec<RowCell> = self
            .rows
            .borrow()
            .iter()
            .map(|row| row.borrow().clone())
            .filter(|row| row.attached)
            .collect();
        rows.sort_by(|a, b| a.y.total_cmp(&b.y));
        rows
    }

    pub fn created(&self) -> usize {
        self.rows.borrow().len()
    }
}

impl StyleContext<String> for TerminalStyle {
    fn template(&self, tag: &Tag) -> Option<VisualTemplate> {
        match tag {
            Tag::Item => Some(VisualTemplate::new(Tag::Item, "row")),
            Tag::Header => Some(VisualTemplate::new(Tag::Header, "header")),
            Tag::Named(_) => None,
        }
    }

    fn create(&mut self, template: &VisualTemplate) -> Box<dyn DisplayObject<String>> {
        let cell = Rc::new(RefCell::new(RowCell {
            header: template.tag == Tag::Header,
            ..Default::default()
        }));
        self.rows.borrow_mut().push(cell.clone());
        Box::new(TerminalRow { cell })
    }

    fn metrics(&self) -> StyleMetrics {
        StyleMetrics {
            default_row_height: 1.0,
            spacing: self.spacing,
        }
    }
}
