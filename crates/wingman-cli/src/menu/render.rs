//! Bordered menu panels.
//!
//! Layout works on plain text only: every row is a list of [`Segment`]s whose
//! widths are measured before any escape codes exist. Styling is applied
//! per segment when the row is painted, so padding never has to look past
//! escape sequences.

use super::wrap::{truncate_to_width, wrap};
use owo_colors::{OwoColorize, Style};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Header,
    Accent,
    Muted,
}

impl Tone {
    fn style(self) -> Option<Style> {
        match self {
            Tone::Plain => None,
            Tone::Header => Some(Style::new().bold()),
            Tone::Accent => Some(Style::new().red()),
            Tone::Muted => Some(Style::new().dimmed()),
        }
    }

    fn paint(self, text: &str) -> String {
        match self.style() {
            Some(style) if !text.is_empty() => text.style(style).to_string(),
            _ => text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

impl Segment {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

// ─── Panel inputs ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MenuOption {
    pub label: String,
    pub enabled: bool,
    pub emphasized: bool,
}

impl MenuOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            emphasized: false,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }

    /// Disabled wins over emphasized.
    fn tone(&self) -> Tone {
        if !self.enabled {
            Tone::Muted
        } else if self.emphasized {
            Tone::Accent
        } else {
            Tone::Plain
        }
    }
}

#[derive(Debug, Clone)]
pub enum Middle {
    /// Whole paragraph in the header style.
    Paragraph(String),
    /// `label` emphasized, `body` plain, wrapped together as one paragraph.
    Labeled { label: String, body: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MiddlePosition {
    /// Between the title and the options.
    #[default]
    Top,
    /// After the options, behind its own separator.
    Bottom,
}

#[derive(Debug, Clone)]
pub struct Panel<'a> {
    pub title: &'a str,
    pub options: &'a [MenuOption],
    /// Interior width; every line is `width + 2` columns with the borders.
    pub width: usize,
    pub middle: &'a [Middle],
    pub position: MiddlePosition,
}

// ─── Rendering ───────────────────────────────────────────────────────────────

const OPTION_INDENT: &str = "  ";
const MIDDLE_INDENT: usize = 2;

pub fn render(panel: &Panel<'_>) -> String {
    let width = panel.width.max(1);
    let border = format!("╔{}╗", "═".repeat(width));
    let separator = format!("╠{}╣", "═".repeat(width));
    let bottom = format!("╚{}╝", "═".repeat(width));

    let title = paint_row(&[Segment::new(centered(panel.title, width), Tone::Header)], width);
    let options: Vec<String> = panel
        .options
        .iter()
        .map(|o| paint_row(&[Segment::new(format!("{OPTION_INDENT}{}", o.label), o.tone())], width))
        .collect();
    let middle: Vec<String> = panel
        .middle
        .iter()
        .flat_map(|m| middle_rows(m, width))
        .map(|row| paint_row(&row, width))
        .collect();

    let mut lines = vec![border, title, separator.clone()];
    match panel.position {
        MiddlePosition::Bottom if !middle.is_empty() => {
            lines.extend(options);
            lines.push(separator);
            lines.extend(middle);
        }
        _ => {
            lines.extend(middle);
            lines.extend(options);
        }
    }
    lines.push(bottom);
    lines.join("\n")
}

fn centered(title: &str, width: usize) -> String {
    let title = truncate_to_width(title.trim(), width);
    let left = (width - title.width()) / 2;
    format!("{}{title}", " ".repeat(left))
}

fn middle_rows(entry: &Middle, width: usize) -> Vec<Vec<Segment>> {
    match entry {
        Middle::Paragraph(text) => wrap(text, width)
            .into_iter()
            .map(|line| vec![Segment::new(line, Tone::Header)])
            .collect(),
        Middle::Labeled { label, body } => {
            let inner = width.saturating_sub(2 * MIDDLE_INDENT).max(1);
            let indent = " ".repeat(MIDDLE_INDENT.min(width.saturating_sub(1)));
            // Wrapping collapses whitespace, so measure the label the same way.
            let label_chars = label.split_whitespace().collect::<Vec<_>>().join(" ").chars().count();
            wrap(&format!("{label} {body}"), inner)
                .into_iter()
                .enumerate()
                .map(|(i, line)| {
                    if i > 0 {
                        return vec![Segment::new(format!("{indent}{line}"), Tone::Plain)];
                    }
                    let split = line
                        .char_indices()
                        .nth(label_chars)
                        .map_or(line.len(), |(idx, _)| idx);
                    let (head, tail) = line.split_at(split);
                    vec![
                        Segment::new(indent.clone(), Tone::Plain),
                        Segment::new(head, Tone::Header),
                        Segment::new(tail, Tone::Plain),
                    ]
                })
                .collect()
        }
    }
}

/// `║` + painted segments + padding to `width` visible columns + `║`.
fn paint_row(segments: &[Segment], width: usize) -> String {
    let mut out = String::from("║");
    let mut used = 0;
    for segment in segments {
        let text = truncate_to_width(&segment.text, width - used);
        used += text.width();
        out.push_str(&segment.tone.paint(text));
    }
    out.push_str(&" ".repeat(width - used));
    out.push('║');
    out
}

#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
