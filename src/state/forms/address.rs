//! Postal-code driven address auto-fill
//!
//! Lookups run asynchronously and may complete out of order, so every
//! request is tagged with the postal-code digits it was issued for and a
//! response is only applied while those digits are still in the field.

use crate::state::format::{digits_only, POSTAL_CODE_DIGITS};

/// Address returned by the postal-code lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub region: String,
}

/// Result of a lookup as delivered back to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Address),
    NotFound,
    Failed(String),
}

/// What to do with the address fields after a code edit or lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutofillAction {
    /// Nothing changes
    Keep,
    /// Unlock the address fields, values untouched
    Unlock,
    /// Write the address, locking the fields that received a value
    Fill(Address),
    /// Unlock and clear fields still holding a looked-up value
    ClearAndUnlock,
}

/// Resolved-address bookkeeping for the sign-up form
#[derive(Debug, Clone, Default)]
pub struct AddressAutofill {
    /// Digits of the code whose address is currently locked in
    resolved_code: Option<String>,
}

impl AddressAutofill {
    /// Whether the address fields are locked to a looked-up address
    pub fn is_resolved(&self) -> bool {
        self.resolved_code.is_some()
    }

    /// React to an edit of the postal-code field.
    ///
    /// Returns the field action plus the digits to look up, if the code is
    /// complete and not already resolved. Invalidation happens here, before
    /// any new lookup completes.
    pub fn code_edited(&mut self, code: &str) -> (AutofillAction, Option<String>) {
        let digits = digits_only(code);
        let mut action = AutofillAction::Keep;

        if self.resolved_code.as_deref() != Some(digits.as_str()) && self.resolved_code.is_some()
        {
            self.resolved_code = None;
            action = AutofillAction::Unlock;
        }

        let lookup = (digits.len() == POSTAL_CODE_DIGITS && self.resolved_code.is_none())
            .then_some(digits);
        (action, lookup)
    }

    /// Apply a lookup response issued for `tag`, given the code currently in the field
    pub fn apply(&mut self, tag: &str, current_code: &str, outcome: LookupOutcome) -> AutofillAction {
        if digits_only(current_code) != tag {
            tracing::debug!(tag, "discarding stale postal code lookup");
            return AutofillAction::Keep;
        }

        match outcome {
            LookupOutcome::Found(address) => {
                self.resolved_code = Some(tag.to_string());
                AutofillAction::Fill(address)
            }
            LookupOutcome::NotFound | LookupOutcome::Failed(_) => {
                self.resolved_code = None;
                AutofillAction::ClearAndUnlock
            }
        }
    }
}
