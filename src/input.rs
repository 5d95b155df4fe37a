//! Parameter input modalities.
//!
//! DESIGN
//! ======
//! Every numeric field can be set two ways: a slider (a number, clamped into a
//! narrow range) or a precise text entry (parsed leniently, wider range). A
//! precise entry never fails: text that does not start with an integer, or
//! that parses to zero, is replaced by the field's fallback value. Colors are
//! free-form strings and are passed through untouched.
//!
//! A [`ParameterUpdate`] carries any subset of fields. Applying it yields a
//! new [`RenderParameters`]; the caller decides when to re-render.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::params::RenderParameters;

/// Precise-entry fallback for size, matching the default radius.
const DEFAULT_SIZE_PX: i64 = 100;

// =============================================================================
// FIELDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Sides,
    Repetitions,
    Rotation,
    Size,
}

impl NumericField {
    /// Range accepted from the slider.
    #[must_use]
    pub fn slider_range(self) -> RangeInclusive<i64> {
        match self {
            Self::Sides => 3..=20,
            Self::Repetitions => 1..=20,
            Self::Rotation => 0..=360,
            Self::Size => 10..=250,
        }
    }

    /// Range accepted from precise text entry.
    #[must_use]
    pub fn precise_range(self) -> RangeInclusive<i64> {
        match self {
            Self::Sides => 3..=100,
            Self::Repetitions => 1..=50,
            Self::Rotation => 0..=360,
            Self::Size => self.slider_range(),
        }
    }

    /// Value substituted when precise text does not parse.
    #[must_use]
    pub fn fallback(self) -> i64 {
        match self {
            Self::Sides => 3,
            Self::Repetitions => 1,
            Self::Rotation => 0,
            Self::Size => DEFAULT_SIZE_PX,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sides => "sides",
            Self::Repetitions => "repetitions",
            Self::Rotation => "rotation",
            Self::Size => "size",
        }
    }
}

// =============================================================================
// INPUT VALUES
// =============================================================================

/// One numeric input. JSON numbers are slider input, JSON strings are precise
/// text entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldInput {
    Slider(f64),
    Precise(String),
}

impl FieldInput {
    /// Resolve to an integer value for `field`. Never fails.
    #[must_use]
    pub fn resolve(&self, field: NumericField) -> i64 {
        match self {
            Self::Slider(value) => slider_value(field, *value),
            Self::Precise(raw) => precise_value(field, raw),
        }
    }
}

/// Slider values move in whole steps and stay inside the slider range.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn slider_value(field: NumericField, value: f64) -> i64 {
    let range = field.slider_range();
    if !value.is_finite() {
        return *range.start();
    }
    value.round().clamp(*range.start() as f64, *range.end() as f64) as i64
}

/// Parse precise text entry, substituting the field fallback for text that
/// yields no integer (or zero), then clamp into the precise range.
#[must_use]
pub fn precise_value(field: NumericField, raw: &str) -> i64 {
    let parsed = match parse_leading_int(raw) {
        Some(0) | None => {
            tracing::debug!(field = field.as_str(), raw, "precise entry unparsed, using fallback");
            field.fallback()
        }
        Some(value) => value,
    };
    let range = field.precise_range();
    parsed.clamp(*range.start(), *range.end())
}

/// Leading-integer parse: optional whitespace, optional sign, then digits.
/// Anything after the digits is ignored (`"12.7"` is 12, `"8px"` is 8).
/// Returns `None` when no digit follows the optional sign.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

// =============================================================================
// PARAMETER UPDATE
// =============================================================================

/// Partial update to a parameter set. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParameterUpdate {
    pub sides: Option<FieldInput>,
    pub repetitions: Option<FieldInput>,
    pub rotation: Option<FieldInput>,
    pub size: Option<FieldInput>,
    pub color: Option<String>,
    pub background_color: Option<String>,
}

impl ParameterUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sides.is_none()
            && self.repetitions.is_none()
            && self.rotation.is_none()
            && self.size.is_none()
            && self.color.is_none()
            && self.background_color.is_none()
    }

    /// Produce the parameter set that results from applying this update.
    #[must_use]
    pub fn apply(&self, current: &RenderParameters) -> RenderParameters {
        let mut next = current.clone();

        if let Some(input) = &self.sides {
            next.sides = to_count(input.resolve(NumericField::Sides));
        }
        if let Some(input) = &self.repetitions {
            next.repetitions = to_count(input.resolve(NumericField::Repetitions));
        }
        if let Some(input) = &self.rotation {
            next.rotation = to_float(input.resolve(NumericField::Rotation));
        }
        if let Some(input) = &self.size {
            next.size = to_float(input.resolve(NumericField::Size));
        }
        if let Some(color) = &self.color {
            next.color.clone_from(color);
        }
        if let Some(color) = &self.background_color {
            next.background_color.clone_from(color);
        }

        next
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_float(value: i64) -> f64 {
    value as f64
}

/// Resolved counts are already clamped to positive ranges.
fn to_count(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
