//! Terminal setup and teardown with panic safety.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, ContentStyle, PrintStyledContent},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::ui::{Line, Tone};

/// A wrapper around stdout that restores the terminal on drop.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    /// Initialize the terminal for full-screen rendering.
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the default panic message is printed
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;

        Ok(Self { stdout })
    }

    /// Get the terminal size as `(width, height)`.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Redraw the whole screen from `lines`, clipped to the terminal height.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        let (_, height) = self.size()?;
        queue!(self.stdout, Clear(ClearType::All))?;

        for (y, line) in lines.iter().take(height as usize).enumerate() {
            queue!(self.stdout, MoveTo(0, y as u16))?;
            for span in &line.spans {
                queue!(
                    self.stdout,
                    PrintStyledContent(style_for(span.tone).apply(span.text.as_str()))
                )?;
            }
        }

        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn style_for(tone: Tone) -> ContentStyle {
    let (fg, bg, bold) = match tone {
        Tone::Normal => (None, None, false),
        Tone::Title => (Some(Color::Cyan), None, true),
        Tone::Header => (None, None, true),
        Tone::Muted => (Some(Color::DarkGrey), None, false),
        Tone::Accent => (Some(Color::Blue), None, true),
        Tone::Selected => (None, Some(Color::DarkBlue), false),
        Tone::Cursor => (Some(Color::Black), Some(Color::Grey), false),
        Tone::CursorSelected => (Some(Color::White), Some(Color::Blue), true),
    };

    let mut style = ContentStyle::new();
    style.foreground_color = fg;
    style.background_color = bg;
    if bold {
        style.attributes.set(Attribute::Bold);
    }
    style
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    Ok(())
}
