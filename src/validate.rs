//! Field validation for user-entered transaction data.
//!
//! All validators are pure and total: they report a verdict as data and
//! never panic. [`validate_form`] runs every field check regardless of
//! earlier failures so that multiple rejections can surface at once.

use core::fmt;

use chrono::NaiveDate;

use crate::models::TransactionDraft;

/// Reason a single field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field was empty or whitespace-only.
    #[error("a value is required")]
    Empty,

    /// The text starts or ends with whitespace.
    #[error("must not start or end with a space")]
    EdgeWhitespace,

    /// The text contains a run of two or more whitespace characters.
    #[error("words must be separated by single spaces")]
    DoubledWhitespace,

    /// The same word appears twice in a row.
    #[error("the word {0:?} appears twice in a row")]
    DuplicateWord(String),

    /// Not a plain non-negative numeral with at most two decimal places.
    #[error("must be a plain non-negative number with at most two decimal places (e.g. 5000 or 5000.50)")]
    MalformedAmount,

    /// Not in `YYYY-MM-DD` form.
    #[error("dates use the YYYY-MM-DD format (e.g. 2025-01-15)")]
    MalformedDate,

    /// Well-formed but impossible calendar date.
    #[error("that day does not exist on the calendar")]
    ImpossibleDate,

    /// Characters beyond letters, single spaces, and single hyphens.
    #[error("only letters, single spaces, and single hyphens are allowed")]
    MalformedCategory,

    /// Negative, NaN, or infinite budget cap.
    #[error("must be a finite, non-negative amount")]
    MalformedCap,
}

/// Validation outcome for a whole [`TransactionDraft`].
///
/// Present entries are rejections; a value with every entry absent never
/// escapes [`validate_form`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    /// Rejection for the description field, if any.
    pub description: Option<FieldError>,
    /// Rejection for the amount field, if any.
    pub amount: Option<FieldError>,
    /// Rejection for the date field, if any.
    pub date: Option<FieldError>,
    /// Rejection for the category field, if any.
    pub category: Option<FieldError>,
}

impl FormErrors {
    /// Returns `true` when no field was rejected.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.category.is_none()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, rejection) in [
            ("description", &self.description),
            ("amount", &self.amount),
            ("date", &self.date),
            ("category", &self.category),
        ] {
            if let Some(reason) = rejection {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{name}: {reason}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Checks a transaction description.
///
/// Rejects empty input, leading/trailing whitespace, doubled interior
/// whitespace, and an immediately repeated word.
///
/// # Errors
///
/// Returns the first matching [`FieldError`], in the order listed above.
pub fn validate_description(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Empty);
    }
    if value.starts_with(char::is_whitespace) || value.ends_with(char::is_whitespace) {
        return Err(FieldError::EdgeWhitespace);
    }
    if has_doubled_whitespace(value) {
        return Err(FieldError::DoubledWhitespace);
    }
    if let Some(word) = adjacent_duplicate_word(value) {
        return Err(FieldError::DuplicateWord(word));
    }
    Ok(())
}

/// Checks an amount as entered: a plain non-negative numeral, optionally
/// with one or two decimal digits, no sign, no thousands separators, and
/// no leading zeros except `0` itself.
///
/// # Errors
///
/// Returns [`FieldError::Empty`] or [`FieldError::MalformedAmount`].
pub fn validate_amount(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Empty);
    }
    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (value, None),
    };
    if !is_plain_integer(integer) {
        return Err(FieldError::MalformedAmount);
    }
    if let Some(digits) = fraction {
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::MalformedAmount);
        }
    }
    Ok(())
}

/// Checks a date as entered: the literal `YYYY-MM-DD` shape first, then a
/// calendar check so that e.g. `2025-02-30` is rejected even though it
/// matches the digit pattern.
///
/// # Errors
///
/// Returns [`FieldError::Empty`], [`FieldError::MalformedDate`], or
/// [`FieldError::ImpossibleDate`].
pub fn validate_date(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Empty);
    }
    let Some((year, month, day)) = date_parts(value) else {
        return Err(FieldError::MalformedDate);
    };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(FieldError::MalformedDate);
    }
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(FieldError::ImpossibleDate);
    }
    Ok(())
}

/// Checks a category label: one or more letter runs joined by single
/// spaces or single hyphens, with every separator flanked by letters.
///
/// # Errors
///
/// Returns [`FieldError::Empty`] or [`FieldError::MalformedCategory`].
pub fn validate_category(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Empty);
    }
    let mut after_letter = false;
    for ch in value.chars() {
        if ch.is_ascii_alphabetic() {
            after_letter = true;
        } else if ch == ' ' || ch == '-' {
            if !after_letter {
                return Err(FieldError::MalformedCategory);
            }
            after_letter = false;
        } else {
            return Err(FieldError::MalformedCategory);
        }
    }
    if after_letter { Ok(()) } else { Err(FieldError::MalformedCategory) }
}

/// Checks a budget cap candidate: finite and non-negative (zero allowed).
///
/// # Errors
///
/// Returns [`FieldError::MalformedCap`] otherwise.
pub fn validate_budget_cap(value: f64) -> Result<(), FieldError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FieldError::MalformedCap)
    }
}

/// Normalizes user-entered text: trims it and collapses interior
/// whitespace runs to single spaces.
///
/// Applied before validation as a normalization step, not as a silent
/// validity override: a normalized value can still be rejected (e.g.
/// for a duplicated word).
#[must_use]
pub fn clean_description(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Validates a whole draft.
///
/// Every field check runs regardless of earlier failures, so the result
/// carries all rejections at once.
///
/// # Errors
///
/// Returns the per-field rejections when any field is invalid.
pub fn validate_form(draft: &TransactionDraft) -> Result<(), FormErrors> {
    let errors = FormErrors {
        description: validate_description(&draft.description).err(),
        amount: validate_amount(&draft.amount).err(),
        date: validate_date(&draft.date).err(),
        category: validate_category(&draft.category).err(),
    };
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// ── Private helpers ─────────────────────────────────────────────────────

/// Returns `true` if the text contains two or more consecutive whitespace
/// characters.
fn has_doubled_whitespace(value: &str) -> bool {
    let mut previous_was_whitespace = false;
    for ch in value.chars() {
        let is_whitespace = ch.is_whitespace();
        if is_whitespace && previous_was_whitespace {
            return true;
        }
        previous_was_whitespace = is_whitespace;
    }
    false
}

/// Finds a word immediately repeated (case-insensitively) with only
/// whitespace in between, returning it as typed the second time.
///
/// Words are maximal runs of ASCII alphanumeric characters or `_` (the
/// ASCII `\w` class; a non-ASCII letter ends the word). This is the
/// tokenize-and-compare rendition of a back-reference pattern like
/// `\b(\w+)\s+\1\b`, which the `regex` crate does not support.
fn adjacent_duplicate_word(value: &str) -> Option<String> {
    let mut previous: Option<String> = None;
    let mut current = String::new();
    let mut gap_is_whitespace = false;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            current.push(ch);
        } else {
            if !current.is_empty() {
                let lowered = current.to_lowercase();
                if gap_is_whitespace && previous.as_deref() == Some(lowered.as_str()) {
                    return Some(current);
                }
                previous = Some(lowered);
                current = String::new();
                gap_is_whitespace = true;
            }
            if !ch.is_whitespace() {
                gap_is_whitespace = false;
            }
        }
    }
    if !current.is_empty() {
        let lowered = current.to_lowercase();
        if gap_is_whitespace && previous.as_deref() == Some(lowered.as_str()) {
            return Some(current);
        }
    }
    None
}

/// Returns `true` for a digit string without a superfluous leading zero.
fn is_plain_integer(value: &str) -> bool {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    value == "0" || !value.starts_with('0')
}

/// Splits `YYYY-MM-DD` into numeric components; `None` when the shape is
/// off (wrong part count, widths, or non-digits).
fn date_parts(value: &str) -> Option<(i32, u32, u32)> {
    let mut parts = value.split('-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    if ![year, month, day]
        .into_iter()
        .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
}
