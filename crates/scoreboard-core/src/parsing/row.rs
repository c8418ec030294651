use crate::model::SkipReason;
use crate::profile::schema::{ExcessTokens, ParserOptions};

/// Split a cleaned line into its category label and data fields.
///
/// The split point is the first run of `gap` spaces. Both halves are trimmed.
/// Returns None when the line has no such run.
pub fn split_label(line: &str, gap: usize) -> Option<(&str, &str)> {
    let needle = " ".repeat(gap);
    let at = line.find(&needle)?;
    Some((line[..at].trim(), line[at..].trim()))
}

/// Split data fields on single spaces, dropping the empty pieces that
/// runs of spaces leave behind.
pub fn tokenize(fields: &str) -> Vec<&str> {
    fields
        .split(' ')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// What a single cleaned line turned into.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineOutcome<'a> {
    Row { label: &'a str, values: Vec<&'a str> },
    Skip(SkipReason),
    /// More values than player columns under `ExcessTokens::Fail`.
    Excess { label: &'a str, found: usize },
}

pub(crate) fn classify_line<'a>(line: &'a str, options: &ParserOptions) -> LineOutcome<'a> {
    let chars = line.chars().count();
    if chars < options.min_line_chars {
        return LineOutcome::Skip(SkipReason::TooShort { chars });
    }

    let Some((label, fields)) = split_label(line, options.label_gap) else {
        return LineOutcome::Skip(SkipReason::NoLabelGap);
    };

    let mut values = tokenize(fields);
    let found = values.len();
    let expected = options.player_count;

    if found < expected {
        return LineOutcome::Skip(SkipReason::TooFewTokens { found });
    }

    if found > expected {
        match options.excess_tokens {
            ExcessTokens::Skip => return LineOutcome::Skip(SkipReason::TooManyTokens { found }),
            ExcessTokens::Fail => return LineOutcome::Excess { label, found },
            ExcessTokens::Truncate => values.truncate(expected),
        }
    }

    LineOutcome::Row { label, values }
}
