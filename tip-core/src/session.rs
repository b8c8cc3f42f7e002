//! Calculator session state.
//!
//! One [`CalculatorSession`] owns everything the window displays: the raw
//! (sanitized) field strings, the tip-source state machine, and the people
//! error flag. The presentation layer mutates it only through the handlers
//! below and reads derived values back; tip and total are recomputed on
//! every read and never stored.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::split::{tip_per_person, total_per_person};
use crate::input::{self, sanitize};

/// The discrete tip percentages offered as buttons, in display order.
pub const PRESET_TIP_PERCENTS: [u8; 5] = [5, 10, 15, 25, 50];

/// Which tip source, if any, is active.
///
/// Selecting a preset discards any custom entry and typing a custom value
/// discards the preset, so at most one source exists at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipSelection {
    /// No tip chosen yet; the bill still splits at 0%.
    #[default]
    None,
    /// One of [`PRESET_TIP_PERCENTS`], chosen by button.
    Preset(u8),
    /// A sanitized, non-empty custom percent string.
    Custom(String),
}

/// True iff a cleaned people-count string is present but equal to zero.
///
/// The empty string means "unset" and is not an error; `"0"` and `"000"` are.
pub fn people_count_is_zero(cleaned: &str) -> bool {
    matches!(cleaned.parse::<u64>(), Ok(0))
}

/// All mutable state behind the calculator window.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorSession {
    bill: String,
    tip: TipSelection,
    people: String,
    people_error: bool,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ── event handlers ──────────────────────────────────────────────

    /// Stores the bill field text after sanitizing it.
    pub fn set_bill(
        &mut self,
        raw: &str,
    ) {
        self.bill = sanitize(raw, &input::BILL);
    }

    /// Activates a preset tip percentage, discarding any custom entry.
    pub fn select_preset(
        &mut self,
        percent: u8,
    ) {
        debug!(percent, "tip preset selected");
        self.tip = TipSelection::Preset(percent);
    }

    /// Stores custom tip text after sanitizing it. A non-empty value
    /// overrides any preset; clearing the field returns the selection to
    /// [`TipSelection::None`].
    pub fn set_custom_tip(
        &mut self,
        raw: &str,
    ) {
        let cleaned = sanitize(raw, &input::CUSTOM_TIP);
        self.tip = if cleaned.is_empty() {
            TipSelection::None
        } else {
            TipSelection::Custom(cleaned)
        };
    }

    /// Stores the people field text after sanitizing it and synchronously
    /// recomputes the error flag.
    pub fn set_people(
        &mut self,
        raw: &str,
    ) {
        self.people = sanitize(raw, &input::PEOPLE);
        self.people_error = people_count_is_zero(&self.people);
    }

    /// Restores the initial state: all fields empty, no tip source, no error.
    pub fn reset(&mut self) {
        debug!("session reset");
        *self = Self::default();
    }

    // ── field accessors ─────────────────────────────────────────────

    pub fn bill(&self) -> &str {
        &self.bill
    }

    pub fn people(&self) -> &str {
        &self.people
    }

    /// The custom tip text, empty unless a custom value is active.
    pub fn custom_tip(&self) -> &str {
        match &self.tip {
            TipSelection::Custom(value) => value,
            _ => "",
        }
    }

    /// The active preset percent, if the preset source is active.
    pub fn preset_percent(&self) -> Option<u8> {
        match self.tip {
            TipSelection::Preset(percent) => Some(percent),
            _ => None,
        }
    }

    pub fn is_preset_selected(
        &self,
        percent: u8,
    ) -> bool {
        self.preset_percent() == Some(percent)
    }

    pub fn tip_selection(&self) -> &TipSelection {
        &self.tip
    }

    pub fn people_error(&self) -> bool {
        self.people_error
    }

    /// True while every field still holds its initial value.
    pub fn is_pristine(&self) -> bool {
        self.bill.is_empty() && self.people.is_empty() && self.tip == TipSelection::None
    }

    // ── derived values ──────────────────────────────────────────────

    /// The percent used in calculations: the custom value when present,
    /// else the preset, else 0. `None` only when a custom value fails to
    /// parse, which the zero-display fallback absorbs.
    pub fn effective_percent(&self) -> Option<Decimal> {
        match &self.tip {
            TipSelection::None => Some(Decimal::ZERO),
            TipSelection::Preset(percent) => Some(Decimal::from(*percent)),
            TipSelection::Custom(value) => value.parse().ok(),
        }
    }

    pub fn tip_per_person(&self) -> String {
        tip_per_person(&self.bill, &self.people, self.effective_percent())
    }

    pub fn total_per_person(&self) -> String {
        total_per_person(&self.bill, &self.people, self.effective_percent())
    }

    /// Snapshot of both readouts, mainly for logging.
    pub fn summary(&self) -> SplitSummary {
        SplitSummary {
            tip_per_person: self.tip_per_person(),
            total_per_person: self.total_per_person(),
        }
    }
}

/// The two displayed readouts at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSummary {
    pub tip_per_person: String,
    pub total_per_person: String,
}

impl fmt::Display for SplitSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "tip {}/person, total {}/person",
            self.tip_per_person, self.total_per_person
        )
    }
}
