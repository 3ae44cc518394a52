//! Terminal setup and teardown with panic safety, and painting of the view.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    queue,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use typeahead::View;

use crate::text::{clip_row, display_width, tail_to_width};

const PROMPT: &str = "> ";
const BULLET: &str = "  • ";

/// Row of the first result; one blank line separates it from the input.
const LIST_TOP: u16 = 2;

/// A wrapper around stdout that restores the terminal on drop.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the panic message is printed
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        queue!(stdout, EnterAlternateScreen)?;
        stdout.flush()?;

        Ok(Self { stdout })
    }

    /// Repaint the whole screen from `view`.
    pub fn draw(&mut self, view: &View) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let width = width as usize;

        queue!(
            self.stdout,
            cursor::Hide,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            Print(PROMPT)
        )?;

        let input_width = width.saturating_sub(display_width(PROMPT) + 1);
        let cursor_x = if view.input.shows_placeholder() {
            let placeholder = tail_to_width(&view.input.placeholder, input_width);
            queue!(
                self.stdout,
                SetAttribute(Attribute::Dim),
                Print(placeholder),
                SetAttribute(Attribute::Reset)
            )?;
            display_width(PROMPT)
        } else {
            let value = tail_to_width(&view.input.value, input_width);
            queue!(self.stdout, Print(value))?;
            display_width(PROMPT) + display_width(value)
        };

        if let Some(rows) = &view.list {
            let row_width = width.saturating_sub(display_width(BULLET));
            let visible = height.saturating_sub(LIST_TOP) as usize;

            for (i, row) in rows.iter().take(visible).enumerate() {
                queue!(
                    self.stdout,
                    cursor::MoveTo(0, LIST_TOP + i as u16),
                    Print(BULLET)
                )?;
                for (text, emphasis) in clip_row(row, row_width) {
                    if emphasis {
                        queue!(
                            self.stdout,
                            SetAttribute(Attribute::Bold),
                            Print(text),
                            SetAttribute(Attribute::NormalIntensity)
                        )?;
                    } else {
                        queue!(self.stdout, Print(text))?;
                    }
                }
            }
        }

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(cursor_x as u16, 0),
            cursor::Show
        )?;
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    let mut stdout = io::stdout();
    queue!(stdout, cursor::Show, LeaveAlternateScreen)?;
    stdout.flush()
}
