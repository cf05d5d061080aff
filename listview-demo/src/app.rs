//! Event loop and drawing.

use std::cell::RefCell;
use std::io::{self, Stdout, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use listview::decoration::ItemDecorations;
use listview::host::Parity;
use listview::input::{EventResult, Key, Modifiers};
use listview::selection::{EventMethod, SelectionEvent};
use listview::{FrameClock, List, Tag};
use log::{debug, info};

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::scrollbar::TerminalScrollbar;
use crate::style::{RowCell, TerminalStyle};

/// How long to wait for input while nothing animates.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Raw mode and alternate screen, restored on drop.
pub struct Screen {
    stdout: Stdout,
}

impl Screen {
    pub fn enter() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

pub struct App {
    list: List<String>,
    style: TerminalStyle,
    scrollbar: TerminalScrollbar,
    clock: FrameClock,
    frame: Duration,
    added: usize,
    last_event: Option<SelectionEvent>,
    events: Rc<RefCell<Option<SelectionEvent>>>,
}

impl App {
    pub fn new(items: usize, multi: bool, config: &DemoConfig) -> Result<Self, DemoError> {
        let style = TerminalStyle::new(config.spacing);
        let clock = FrameClock::new();
        let scrollbar = TerminalScrollbar::default();

        let list = if multi {
            List::multi(
                style.clone(),
                clock.clone(),
                config.list.selection_method,
                EventMethod::ForEachItem,
            )
        } else {
            List::single(style.clone(), clock.clone())
        };

        let group_size = config.group_size;
        let mut list = list
            .with_decorations(ItemDecorations::new().with_tagger(|item: &String| {
                if item.starts_with('#') { Tag::Header } else { Tag::Item }
            }))
            .with_items((0..items).map(|i| match group_size {
                n if n > 0 && i % n == 0 => format!("# Group {}", i / n + 1),
                _ => format!("Item {}", i),
            }))
            .with_config(&config.list)?;

        list.attach_scrollbar(scrollbar.clone());

        let events = Rc::new(RefCell::new(None));
        let sink = events.clone();
        list.on_selection_changed(move |event| *sink.borrow_mut() = Some(*event));

        info!("Demo list {} with {} items (multi: {})", list.id(), items, multi);

        Ok(Self {
            list,
            style,
            scrollbar,
            clock,
            frame: Duration::from_millis(config.frame_ms.max(1)),
            added: 0,
            last_event: None,
            events,
        })
    }

    pub fn run(&mut self, screen: &mut Screen) -> Result<(), DemoError> {
        let (width, height) = terminal::size()?;
        self.resize(width, height);

        let mut last = Instant::now();
        loop {
            self.draw(&mut screen.stdout)?;

            let animating = !self.clock.is_idle();
            let timeout = if animating { self.frame } else { IDLE_POLL };

            if event::poll(timeout)? {
                let mut pending = vec![event::read()?];
                while event::poll(Duration::ZERO)? {
                    pending.push(event::read()?);
                }
                for event in pending {
                    if !self.handle(event) {
                        return Ok(());
                    }
                }
            }

            let now = Instant::now();
            if animating && self.clock.is_registered(self.list.id()) {
                self.list.tick((now - last).as_secs_f32() * 1000.0);
            }
            last = now;

            if let Some(event) = self.events.borrow_mut().take() {
                self.last_event = Some(event);
            }
        }
    }

    /// Returns false when the demo should quit.
    fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => return self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
        true
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
            KeyCode::Char('a') => {
                self.added += 1;
                let item = format!("Added {}", self.added);
                match self.list.focus_index() {
                    Some(index) => {
                        let _ = self.list.insert(index, item);
                    }
                    None => self.list.add(item),
                }
            }
            KeyCode::Char('d') => {
                if let Some(index) = self.list.focus_index()
                    && let Ok(item) = self.list.remove(index)
                {
                    debug!("Removed {:?}", item);
                }
            }
            KeyCode::Char('m') => {
                if let Some(index) = self.list.focus_index() {
                    let _ = self.list.move_before(index, 0);
                }
            }
            KeyCode::Char('i') => {
                let _ = self.list.invert_selection();
            }
            KeyCode::Char('x') => self.list.clear_selection(),
            KeyCode::Char('s') => {
                let speed = if self.list.smooth_scroll_speed() > 0.0 { 0.0 } else { 20.0 };
                self.list.set_smooth_scroll_speed(speed);
            }
            code => {
                if let Some(key) = map_key(code)
                    && self.list.handle_key(key) == EventResult::Ignored
                {
                    debug!("Key {:?} ignored by the list", key);
                }
            }
        }
        true
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let track = self.list.viewport().height as u16;
        let bar_column = self.list.viewport().width as u16;
        let modifiers = map_modifiers(mouse.modifiers);

        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.list.mouse_scroll(1.0);
            }
            MouseEventKind::ScrollDown => {
                self.list.mouse_scroll(-1.0);
            }
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
                if mouse.column >= bar_column =>
            {
                let value = self.scrollbar.value_at(mouse.row, track);
                self.list.scrollbar_moved(value);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.list.click_at(mouse.row as f32, modifiers);
            }
            _ => {}
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        // last column holds the scrollbar, last line the status
        let width = width.saturating_sub(1) as f32;
        let height = height.saturating_sub(1) as f32;
        self.list.resize(width, height);
        debug!("Resized to {}x{}, capacity {}", width, height, self.list.max_display());
    }

    fn draw(&self, out: &mut Stdout) -> io::Result<()> {
        let width = self.list.viewport().width as usize;
        let track = self.list.viewport().height as u16;

        queue!(out, terminal::Clear(terminal::ClearType::All))?;

        for row in self.style.attached() {
            let y = row.y.round();
            if y < 0.0 || y >= track as f32 {
                continue;
            }
            queue!(out, cursor::MoveTo(0, y as u16))?;
            self.draw_row(out, &row)?;
        }

        if let Some((start, length)) = self.scrollbar.thumb(track) {
            for y in 0..track {
                let glyph = if y >= start && y < start + length { "█" } else { "│" };
                queue!(out, cursor::MoveTo(width as u16, y), Print(glyph))?;
            }
        }

        let status = format!(
            " {} items | offset {:.2} -> {:.2} at {:.0}/s | selected {:?} | pool {} | {}",
            self.list.len(),
            self.list.scroll_offset(),
            self.list.scroll_target(),
            self.scrollbar.state().speed,
            self.list.selected_indices(),
            self.style.created(),
            self.last_event
                .map(|event| format!("{:?}", event))
                .unwrap_or_default(),
        );
        queue!(
            out,
            cursor::MoveTo(0, track),
            SetAttribute(Attribute::Dim),
            Print(truncate(&status, width + 1)),
            SetAttribute(Attribute::Reset)
        )?;

        out.flush()
    }

    fn draw_row(&self, out: &mut Stdout, row: &RowCell) -> io::Result<()> {
        let width = row.width as usize;
        let marker = match (row.header, self.list.is_multi(), row.selected) {
            (true, _, _) => "",
            (false, true, true) => "[x] ",
            (false, true, false) => "[ ] ",
            (false, false, _) => "",
        };
        let pointer = if row.focused { "> " } else { "  " };
        let text = truncate(&format!("{}{}{}", pointer, marker, row.text), width);

        if row.header {
            queue!(out, SetForegroundColor(Color::Cyan), SetAttribute(Attribute::Bold))?;
        } else if row.selected {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        } else if row.parity == Parity::Odd {
            queue!(out, SetBackgroundColor(Color::AnsiValue(236)))?;
        }

        queue!(
            out,
            Print(format!("{:<width$}", text, width = width)),
            SetAttribute(Attribute::Reset)
        )
    }
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn map_key(code: KeyCode) -> Option<Key> {
    Some(match code {
        KeyCode::Up | KeyCode::Char('k') => Key::Up,
        KeyCode::Down | KeyCode::Char('j') => Key::Down,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Home | KeyCode::Char('g') => Key::Home,
        KeyCode::End | KeyCode::Char('G') => Key::End,
        KeyCode::Enter => Key::Enter,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    })
}

fn map_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        shift: mods.contains(KeyModifiers::SHIFT),
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
    }
}
