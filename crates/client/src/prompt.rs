//! Line-oriented terminal prompts.
//!
//! The selection menu is a raw-mode arrow-key list redrawn in place:
//! Up/Down (or k/j) move the cursor, Enter confirms, Esc or q abandons the
//! game. Name entry is a plain buffered read.

use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::{cursor, queue, terminal};

/// Present `items` under `title` and return the index of the confirmed one.
pub fn select(title: &str, items: &[String]) -> io::Result<usize> {
    let mut out = io::stdout();
    queue!(out, Print(format!("{title}\r\n")))?;
    out.flush()?;

    terminal::enable_raw_mode()?;
    let result = run_menu(&mut out, items);
    terminal::disable_raw_mode()?;

    writeln!(out)?;
    out.flush()?;
    result
}

fn run_menu(out: &mut io::Stdout, items: &[String]) -> io::Result<usize> {
    let mut selected = 0usize;

    loop {
        for (index, item) in items.iter().enumerate() {
            let marker = if index == selected { '>' } else { ' ' };
            queue!(out, Print(format!(" {marker} {item}\r\n")))?;
        }
        out.flush()?;

        let code = loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Err(abandoned());
                }
                break key.code;
            }
        };

        match code {
            KeyCode::Up | KeyCode::Char('k') => selected = selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                selected = (selected + 1).min(items.len().saturating_sub(1));
            }
            KeyCode::Enter => return Ok(selected),
            KeyCode::Esc | KeyCode::Char('q') => return Err(abandoned()),
            _ => {}
        }

        queue!(
            out,
            cursor::MoveUp(items.len() as u16),
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )?;
    }
}

/// Prompt for one line of input, trimmed. Re-asks until non-empty.
pub fn read_line(prompt: &str) -> io::Result<String> {
    let mut out = io::stdout();
    let stdin = io::stdin();

    loop {
        writeln!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(abandoned());
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
}

fn abandoned() -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, "game abandoned at prompt")
}
