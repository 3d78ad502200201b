#![forbid(unsafe_code)]

//! Cell-width helpers for laying out text columns.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of a string in terminal cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        return text.len();
    }
    text.graphemes(true).map(UnicodeWidthStr::width).sum()
}

/// Cut `text` to at most `width` cells without splitting a grapheme.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0usize;
    for (offset, g) in text.grapheme_indices(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > width {
            return &text[..offset];
        }
        used += w;
    }
    text
}

/// Left-align `text` in a field of `width` cells, truncating if needed.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let cut = truncate_to_width(text, width);
    let fill = width.saturating_sub(display_width(cut));
    let mut out = String::with_capacity(cut.len() + fill);
    out.push_str(cut);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}

/// Remove the last grapheme cluster. Returns it, if there was one.
pub fn pop_grapheme(text: &mut String) -> Option<String> {
    let (offset, _) = text.grapheme_indices(true).next_back()?;
    Some(text.split_off(offset))
}
