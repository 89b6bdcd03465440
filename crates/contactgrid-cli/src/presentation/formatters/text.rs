use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width in terminal cells (CJK and most emoji take two).
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Longest prefix of `text` that fits in `max_width` cells.
fn take_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (i, ch) in text.char_indices() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > max_width {
            return &text[..i];
        }
        used += cw;
    }
    text
}

/// Cut `text` to at most `max_width` cells, ending in "..." when there is room for it.
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        text.to_string()
    } else if max_width <= 3 {
        take_width(text, max_width).to_string()
    } else {
        format!("{}...", take_width(text, max_width - 3))
    }
}

/// Truncate or right-pad to exactly `width` cells.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let fitted = take_width(text, width);
    let pad = width - display_width(fitted);
    format!("{}{}", fitted, " ".repeat(pad))
}

/// Up to two uppercase initials: first letter of the first and last word.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.next_back().and_then(|w| w.chars().next());

    match (first, last) {
        (Some(a), Some(b)) => a.to_uppercase().chain(b.to_uppercase()).collect(),
        (Some(a), None) => a.to_uppercase().collect(),
        _ => "?".to_string(),
    }
}
