//! Terminal output: the `log!` macro and in-place progress bars.
//!
//! ```ignore
//! log!("build"; "{} pages", pages.len());
//!
//! let progress = ProgressBars::new(&[("write", pages.len())]);
//! progress.inc(0);
//! progress.finish();
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stdout},
    sync::{
        Mutex, OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

// Bar line layout: "[module] [████░░░░] 42/100"
const BRACKETS: usize = 2;
const PREFIX_GAP: usize = 1;
const BAR_FRAME: usize = 3;
const COUNT_GAP: usize = 1;
const MIN_BAR: usize = 10;
const MAX_BAR: usize = 40;

/// Display width of `"[module] "`.
#[inline]
const fn prefix_width(module_len: usize) -> usize {
    module_len + BRACKETS + PREFIX_GAP
}

/// Terminal columns, detected once. 120 when there is no terminal.
fn terminal_width() -> usize {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120)) as usize
}

// ============================================================================
// Log Macro
// ============================================================================

/// Print a message behind a colored `[module]` prefix.
///
/// ```ignore
/// log!("sitemap"; "wrote {}", path.display());
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

/// Backing function of [`log!`]. Long messages are cut at the terminal edge.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let room = terminal_width().saturating_sub(prefix_width(module.len()));
    let message = truncate_str(message, room);

    let mut out = stdout().lock();
    execute!(out, Clear(ClearType::UntilNewLine)).ok();
    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "error" => prefix.bright_red().bold(),
        "warn" => prefix.bright_magenta().bold(),
        "sitemap" | "init" => prefix.bright_green().bold(),
        "check" => prefix.bright_blue().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Cut `s` to at most `max_len` bytes on a char boundary.
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

// ============================================================================
// Progress Bars
// ============================================================================

/// One progress line per module, redrawn in place.
///
/// Counters are atomic so rayon workers can bump them directly; the mutex
/// only serializes the cursor movement.
pub struct ProgressBars {
    bars: Vec<Bar>,
    lock: Mutex<()>,
}

struct Bar {
    prefix: ColoredString,
    prefix_width: usize,
    total: usize,
    done: AtomicUsize,
    row: usize,
}

impl ProgressBars {
    /// Reserve one terminal line for each `(module, total)` pair.
    pub fn new(modules: &[(&'static str, usize)]) -> Self {
        let mut out = stdout().lock();
        for _ in modules {
            writeln!(out).ok();
        }
        out.flush().ok();

        let bars = modules
            .iter()
            .enumerate()
            .map(|(row, &(module, total))| Bar {
                prefix: colorize_prefix(module),
                prefix_width: prefix_width(module.len()),
                total,
                done: AtomicUsize::new(0),
                row,
            })
            .collect();

        Self {
            bars,
            lock: Mutex::new(()),
        }
    }

    /// Advance bar `index` by one. Safe to call from any thread.
    pub fn inc(&self, index: usize) {
        if let Some(bar) = self.bars.get(index) {
            let done = bar.done.fetch_add(1, Ordering::Relaxed) + 1;
            self.draw(bar, done);
        }
    }

    fn draw(&self, bar: &Bar, done: usize) {
        let _guard = self.lock.lock().ok();

        let count = format!("{done}/{}", bar.total);
        let line = render_bar(
            terminal_width(),
            bar.prefix_width + BAR_FRAME + COUNT_GAP + count.len(),
            done,
            bar.total,
        );

        let up = (self.bars.len() - bar.row) as u16;
        let mut out = stdout().lock();
        execute!(out, cursor::MoveUp(up), Clear(ClearType::CurrentLine)).ok();
        write!(out, "{} [{line}] {count}", bar.prefix).ok();
        execute!(out, cursor::MoveDown(up)).ok();
        write!(out, "\r").ok();
        out.flush().ok();
    }

    /// Erase every bar line.
    pub fn finish(&self) {
        let _guard = self.lock.lock().ok();
        let rows = self.bars.len() as u16;

        let mut out = stdout().lock();
        execute!(out, cursor::MoveUp(rows)).ok();
        for _ in &self.bars {
            execute!(out, Clear(ClearType::CurrentLine), cursor::MoveDown(1)).ok();
        }
        execute!(out, cursor::MoveUp(rows)).ok();
        out.flush().ok();
    }
}

/// Filled/empty cells for `done` of `total`, sized to the space left over.
fn render_bar(width: usize, overhead: usize, done: usize, total: usize) -> String {
    let cells = width.saturating_sub(overhead).clamp(MIN_BAR, MAX_BAR);
    let filled = if total == 0 {
        0
    } else {
        (done.min(total) * cells) / total
    };
    "█".repeat(filled) + &"░".repeat(cells - filled)
}

// ============================================================================
// Tests
// ============================================================================
