//! Text shaping for terminal cells.
//!
//! Terminals lay cells out left to right and most of them do not run the
//! Unicode bidirectional algorithm, so Hebrew would come out mirrored.
//! Text is wrapped in logical order first and each resulting line is then
//! reordered into visual order with `unicode-bidi`.

use unicode_bidi::{BidiInfo, Level};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::direction::FlowDirection;

/// Reorders one line (no newlines) from logical to visual order.
pub fn visual_line(text: &str, direction: FlowDirection) -> String {
    if text.is_empty() {
        return String::new();
    }
    let level = match direction {
        FlowDirection::Ltr => Level::ltr(),
        FlowDirection::Rtl => Level::rtl(),
    };
    let info = BidiInfo::new(text, Some(level));
    if !info.has_rtl() {
        return text.to_string();
    }
    info.paragraphs
        .iter()
        .map(|para| info.reorder_line(para, para.range.clone()).into_owned())
        .collect::<Vec<_>>()
        .concat()
}

/// Greedy word wrap on display width. Words wider than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;
        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            let gap = usize::from(!current.is_empty());
            if current_width + gap + word_width <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_width;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }
            for ch in word.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width + ch_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }
        lines.push(current);
    }
    lines
}

/// Wraps `text` to `width` columns and returns the lines in visual order.
pub fn shape(text: &str, width: usize, direction: FlowDirection) -> Vec<String> {
    wrap(text, width)
        .iter()
        .map(|line| visual_line(line, direction))
        .collect()
}

/// Truncates to `width` display columns, appending an ellipsis when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width + 1 > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}
