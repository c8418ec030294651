//! Noise filtering for raw OCR text.
//!
//! Tesseract output for a scoreboard capture is full of stray glyphs from
//! icons, borders and item slots. Only characters that can appear in a stat
//! label or value are kept.

const HANGUL_SYLLABLES: std::ops::RangeInclusive<char> = '\u{AC00}'..='\u{D7A3}';

/// Whether `c` survives noise filtering.
pub fn is_kept_char(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_ascii_alphabetic()
        || c == '/'
        || c.is_whitespace()
        || HANGUL_SYLLABLES.contains(&c)
}

/// Collapse blank-line pairs left by OCR line breaking.
///
/// One left-to-right pass over non-overlapping "\n\n" pairs, so "\n\n\n"
/// becomes "\n\n".
pub fn collapse_blank_lines(text: &str) -> String {
    text.replace("\n\n", "\n")
}

/// Remove every character that cannot belong to a label or value.
pub fn strip_noise(text: &str) -> String {
    text.chars().filter(|&c| is_kept_char(c)).collect()
}

/// Clean raw OCR text and split it into candidate lines.
///
/// A trailing '\r' is part of the line ending and is dropped.
pub fn clean_lines(raw_text: &str) -> Vec<String> {
    strip_noise(&collapse_blank_lines(raw_text))
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
