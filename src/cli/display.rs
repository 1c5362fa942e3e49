// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal table output for `sift search --format table`.
//!
//! OneDark for dark terminals, One Light for light ones. `SIFT_THEME` picks
//! explicitly, `COLORFGBG` is the fallback hint, dark is the default. Colors
//! only go to a TTY and never when `NO_COLOR` is set.

use std::fmt::Write as _;
use std::sync::OnceLock;

use sift::ScoredItem;

/// Width of the title column before truncation.
pub const TITLE_WIDTH: usize = 48;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Semantic colors used by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Strong,
    Good,
    Fair,
    Muted,
    Accent,
}

fn palette(theme: Theme, tone: Tone) -> (u8, u8, u8) {
    match (theme, tone) {
        (Theme::Dark, Tone::Strong) => (166, 226, 46),
        (Theme::Dark, Tone::Good) => (152, 195, 121),  // #98c379
        (Theme::Dark, Tone::Fair) => (229, 192, 123),  // #e5c07b
        (Theme::Dark, Tone::Muted) => (92, 99, 112),   // #5c6370
        (Theme::Dark, Tone::Accent) => (86, 182, 194), // #56b6c2
        (Theme::Light, Tone::Strong) => (68, 140, 39),
        (Theme::Light, Tone::Good) => (80, 161, 79),    // #50a14f
        (Theme::Light, Tone::Fair) => (193, 132, 1),    // #c18401
        (Theme::Light, Tone::Muted) => (160, 161, 167), // #a0a1a7
        (Theme::Light, Tone::Accent) => (1, 132, 188),  // #0184bc
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Paint `text` in a tone when `colored`, otherwise return it unchanged.
pub fn paint(colored: bool, tone: Tone, modifiers: &[&str], text: &str) -> String {
    if colored {
        format!(
            "{}{}{}{}",
            modifiers.join(""),
            rgb(palette(theme(), tone)),
            text,
            RESET
        )
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut `text` to `max` characters, ending in "…" when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Relevance tone: an exact title match alone is 30, so 30+ reads as strong.
pub fn relevance_tone(relevance: u64) -> Tone {
    if relevance >= 60 {
        Tone::Strong
    } else if relevance >= 30 {
        Tone::Good
    } else if relevance >= 10 {
        Tone::Fair
    } else {
        Tone::Muted
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TABLE
// ═══════════════════════════════════════════════════════════════════════════

/// Render ranked results as an aligned table, one row per item.
pub fn render_table(results: &[ScoredItem<'_>], colored: bool) -> String {
    let mut out = String::new();

    if results.is_empty() {
        let _ = writeln!(out, "{}", paint(colored, Tone::Muted, &[], "no matches"));
        return out;
    }

    let id_width = results
        .iter()
        .map(|r| r.item.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(2);

    let header = format!(
        "{}  {}  {}  {}",
        pad_left("#", 4),
        pad_left("score", 5),
        pad_right("id", id_width),
        "title"
    );
    let _ = writeln!(out, "{}", paint(colored, Tone::Accent, &[BOLD], &header));

    for (rank, result) in results.iter().enumerate() {
        let score = paint(
            colored,
            relevance_tone(result.relevance),
            &[],
            &result.relevance.to_string(),
        );
        let _ = writeln!(
            out,
            "{}  {}  {}  {}",
            pad_left(&(rank + 1).to_string(), 4),
            pad_left(&score, 5),
            pad_right(&result.item.id, id_width),
            truncate(&result.item.title, TITLE_WIDTH)
        );
    }

    out
}
