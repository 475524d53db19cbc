//! Regex search over transactions with match highlighting.
//!
//! The user's search string is compiled into a [`Regex`]; anything that
//! fails to compile degrades to "no filter" instead of surfacing an
//! error, so a half-typed pattern never breaks the view.

use regex::{Regex, RegexBuilder};

use crate::models::Transaction;

/// Compiles a user search string into a matcher.
///
/// Blank input means "no pattern" and yields `None`. Malformed pattern
/// syntax (e.g. an unclosed group) also yields `None`; downstream,
/// `None` always behaves as "no filter".
#[must_use]
pub fn compile_pattern(input: &str, case_sensitive: bool) -> Option<Regex> {
    if input.trim().is_empty() {
        return None;
    }
    match RegexBuilder::new(input)
        .case_insensitive(!case_sensitive)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            tracing::debug!(%err, input, "search pattern failed to compile, treating as no filter");
            None
        }
    }
}

/// Keeps the transactions whose description or category matches the
/// pattern anywhere (substring search); input order is preserved.
///
/// A `None` pattern keeps everything.
#[must_use]
pub fn filter(transactions: &[Transaction], pattern: Option<&Regex>) -> Vec<Transaction> {
    match pattern {
        Some(matcher) => transactions
            .iter()
            .filter(|tx| matcher.is_match(&tx.description) || matcher.is_match(&tx.category))
            .cloned()
            .collect(),
        None => transactions.to_vec(),
    }
}

/// Wraps every non-overlapping match in `<mark>…</mark>` for the
/// presentation layer to render.
///
/// With no pattern or no text, the input comes back unchanged.
#[must_use]
pub fn highlight(text: &str, pattern: Option<&Regex>) -> String {
    match pattern {
        Some(matcher) if !text.is_empty() => {
            matcher.replace_all(text, "<mark>${0}</mark>").into_owned()
        }
        Some(_) | None => text.to_owned(),
    }
}
