//! Form field value objects

use super::validation::{first_violation, Rule};
use crate::state::format::Mask;

/// An option of a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value sent to the API (catalog id, region code)
    pub value: String,
    /// Text shown to the user
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// How a field accepts input
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Digits re-masked after every edit
    Masked(Mask),
    /// Digits only, bounded length
    Numeric { max_len: usize },
    /// One of a fixed set of options, cycled with arrow keys
    Select(Vec<SelectOption>),
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Choice(Option<usize>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub kind: FieldKind,
    pub value: FieldValue,
    pub rules: Vec<Rule>,
    /// Read-only while true (address auto-filled from the postal code)
    pub locked: bool,
    /// Value was written by a lookup and not edited since
    pub autofilled: bool,
    /// Message of the last failed validation
    pub error: Option<String>,
}

impl FormField {
    fn new(name: &str, label: &str, placeholder: &str, kind: FieldKind) -> Self {
        let value = match kind {
            FieldKind::Select(_) => FieldValue::Choice(None),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind,
            value,
            rules: Vec::new(),
            locked: false,
            autofilled: false,
            error: None,
        }
    }

    /// Create a new free text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self::new(name, label, placeholder, FieldKind::Text)
    }

    /// Create a new masked field
    pub fn masked(name: &str, label: &str, placeholder: &str, mask: Mask) -> Self {
        Self::new(name, label, placeholder, FieldKind::Masked(mask))
    }

    /// Create a new digits-only field
    pub fn numeric(name: &str, label: &str, placeholder: &str, max_len: usize) -> Self {
        Self::new(name, label, placeholder, FieldKind::Numeric { max_len })
    }

    /// Create a new select field with no option chosen
    pub fn select(name: &str, label: &str, placeholder: &str, options: Vec<SelectOption>) -> Self {
        Self::new(name, label, placeholder, FieldKind::Select(options))
    }

    /// Attach validation rules
    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(Rule::is_required)
    }

    pub fn is_select(&self) -> bool {
        matches!(self.kind, FieldKind::Select(_))
    }

    fn options(&self) -> &[SelectOption] {
        match &self.kind {
            FieldKind::Select(options) => options,
            _ => &[],
        }
    }

    /// Get the text value (returns empty string for select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) => "",
        }
    }

    /// The chosen option of a select field
    pub fn selected(&self) -> Option<&SelectOption> {
        match self.value {
            FieldValue::Choice(Some(index)) => self.options().get(index),
            _ => None,
        }
    }

    /// Value submitted to the API: the text, or the chosen option's value
    pub fn submitted_value(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) => self.selected().map(|o| o.value.as_str()).unwrap_or(""),
        }
    }

    /// Set the text value, applying the field's mask. Ignores the lock so
    /// auto-fill can write into locked fields.
    pub fn set_text(&mut self, value: &str) {
        self.value = match &self.kind {
            FieldKind::Select(options) => {
                FieldValue::Choice(options.iter().position(|o| o.value == value))
            }
            FieldKind::Masked(mask) => FieldValue::Text(mask.apply(value)),
            _ => FieldValue::Text(value.to_string()),
        };
    }

    /// Write a looked-up value. The field locks only when the value took,
    /// so an empty or unknown value stays editable. Returns true if locked.
    pub fn fill(&mut self, value: &str) -> bool {
        self.set_text(value);
        self.error = None;
        self.autofilled = !self.submitted_value().is_empty();
        self.locked = self.autofilled;
        self.locked
    }

    /// A hand edit changed the value: stale error and lookup origin go away
    fn touched(&mut self) {
        self.error = None;
        self.autofilled = false;
    }

    /// Push a character to the field value. Returns true if the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.locked {
            return false;
        }
        let changed = self.apply_char(c);
        if changed {
            self.touched();
        }
        changed
    }

    fn apply_char(&mut self, c: char) -> bool {
        let before = self.as_text().to_string();
        match (&self.kind, &mut self.value) {
            (FieldKind::Text, FieldValue::Text(s)) => s.push(c),
            (FieldKind::Masked(mask), FieldValue::Text(s)) => {
                let mut raw = s.clone();
                raw.push(c);
                *s = mask.apply(&raw);
            }
            (FieldKind::Numeric { max_len }, FieldValue::Text(s)) => {
                if c.is_ascii_digit() && s.len() < *max_len {
                    s.push(c);
                }
            }
            _ => return false,
        }
        self.as_text() != before
    }

    /// Remove the last character from the field value. Returns true if the value changed.
    pub fn pop_char(&mut self) -> bool {
        if self.locked {
            return false;
        }
        let changed = match (&self.kind, &mut self.value) {
            (FieldKind::Masked(mask), FieldValue::Text(s)) => {
                // Drop the last digit rather than a separator so the mask never sticks
                let mut digits = crate::state::format::digits_only(s);
                if digits.pop().is_some() {
                    *s = mask.apply(&digits);
                    true
                } else {
                    false
                }
            }
            (_, FieldValue::Text(s)) => s.pop().is_some(),
            (_, FieldValue::Choice(choice)) => choice.take().is_some(),
        };
        if changed {
            self.touched();
        }
        changed
    }

    /// Select the next option, wrapping around
    pub fn select_next(&mut self) {
        if self.locked {
            return;
        }
        let count = self.options().len();
        if let FieldValue::Choice(choice) = &mut self.value {
            if count > 0 {
                *choice = Some(match *choice {
                    Some(i) => (i + 1) % count,
                    None => 0,
                });
                self.touched();
            }
        }
    }

    /// Select the previous option, wrapping around
    pub fn select_prev(&mut self) {
        if self.locked {
            return;
        }
        let count = self.options().len();
        if let FieldValue::Choice(choice) = &mut self.value {
            if count > 0 {
                *choice = Some(match *choice {
                    Some(0) | None => count - 1,
                    Some(i) => i - 1,
                });
                self.touched();
            }
        }
    }

    /// Clear the field value and any error
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(choice) => *choice = None,
        }
        self.error = None;
        self.autofilled = false;
    }

    /// Run the field's rules, storing the first failure. Returns true if valid.
    pub fn validate(&mut self) -> bool {
        self.error = first_violation(&self.rules, self.submitted_value()).map(str::to_string);
        self.error.is_none()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(_) => self
                .selected()
                .map(|o| format!("◀ {} ▶", o.label))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uf_field() -> FormField {
        FormField::select(
            "uf",
            "UF",
            "Selecione",
            vec![
                SelectOption::new("PB", "PB"),
                SelectOption::new("PE", "PE"),
                SelectOption::new("RN", "RN"),
            ],
        )
        .with_rules(vec![Rule::Required("UF é obrigatório")])
    }

    #[test]
    fn test_text_push_and_pop() {
        let mut field = FormField::text("nome", "Nome", "");
        assert!(field.push_char('A'));
        assert!(field.push_char('n'));
        assert_eq!(field.as_text(), "An");
        assert!(field.pop_char());
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_masked_field_formats_while_typing() {
        let mut field = FormField::masked("telefone", "Telefone", "", Mask::Phone);
        for c in "83999991234".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "(83) 99999-1234");
    }

    #[test]
    fn test_masked_field_ignores_extra_digits() {
        let mut field = FormField::masked("cep", "CEP", "", Mask::PostalCode);
        field.set_text("58000123");
        assert!(!field.push_char('9'));
        assert_eq!(field.as_text(), "58000-123");
    }

    #[test]
    fn test_masked_field_ignores_letters() {
        let mut field = FormField::masked("cep", "CEP", "", Mask::PostalCode);
        assert!(!field.push_char('x'));
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_masked_backspace_removes_digit_not_separator() {
        let mut field = FormField::masked("cep", "CEP", "", Mask::PostalCode);
        field.set_text("580001");
        assert_eq!(field.as_text(), "58000-1");
        assert!(field.pop_char());
        assert_eq!(field.as_text(), "58000");
    }

    #[test]
    fn test_numeric_field_accepts_bounded_digits() {
        let mut field = FormField::numeric("idade", "Idade", "", 3);
        assert!(!field.push_char('-'));
        for c in "1234".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "123");
    }

    #[test]
    fn test_locked_field_ignores_input() {
        let mut field = FormField::text("rua", "Rua", "");
        field.set_text("Rua A");
        field.locked = true;
        assert!(!field.push_char('x'));
        assert!(!field.pop_char());
        assert_eq!(field.as_text(), "Rua A");
    }

    #[test]
    fn test_select_cycles() {
        let mut field = uf_field();
        assert!(field.selected().is_none());
        field.select_next();
        assert_eq!(field.submitted_value(), "PB");
        field.select_prev();
        assert_eq!(field.submitted_value(), "RN");
        field.select_next();
        assert_eq!(field.submitted_value(), "PB");
        assert_eq!(field.display_value(), "◀ PB ▶");
    }

    #[test]
    fn test_select_set_text_matches_value() {
        let mut field = uf_field();
        field.set_text("PE");
        assert_eq!(field.submitted_value(), "PE");
        field.set_text("SP");
        assert!(field.selected().is_none());
    }

    #[test]
    fn test_validate_sets_and_clears_error() {
        let mut field = uf_field();
        assert!(!field.validate());
        assert_eq!(field.error.as_deref(), Some("UF é obrigatório"));
        field.select_next();
        assert!(field.validate());
        assert!(field.error.is_none());
    }

    #[test]
    fn test_is_required() {
        assert!(uf_field().is_required());
        assert!(!FormField::text("numero", "Número", "").is_required());
    }

    #[test]
    fn test_edit_clears_stale_error() {
        let mut field = FormField::text("rua", "Rua", "")
            .with_rules(vec![Rule::Required("Rua é obrigatória")]);
        assert!(!field.validate());
        assert!(field.push_char('R'));
        assert!(field.error.is_none());

        let mut uf = uf_field();
        uf.validate();
        uf.select_next();
        assert!(uf.error.is_none());
    }

    #[test]
    fn test_rejected_keystroke_keeps_error() {
        let mut field = FormField::masked("cep", "CEP", "", Mask::PostalCode);
        field.error = Some("CEP deve ter o formato 00000-000".to_string());
        assert!(!field.push_char('x'));
        assert!(field.error.is_some());
    }

    #[test]
    fn test_fill_locks_only_real_values() {
        let mut street = FormField::text("rua", "Rua", "");
        assert!(street.fill("Rua A"));
        assert!(street.locked && street.autofilled);

        let mut blank = FormField::text("bairro", "Bairro", "");
        assert!(!blank.fill(""));
        assert!(!blank.locked && !blank.autofilled);

        let mut uf = uf_field();
        assert!(!uf.fill("SP"));
        assert!(!uf.locked);
    }

    #[test]
    fn test_hand_edit_drops_lookup_origin() {
        let mut field = FormField::text("rua", "Rua", "");
        field.fill("Rua A");
        field.locked = false;
        field.push_char('!');
        assert!(!field.autofilled);
    }

    #[test]
    fn test_clear_resets_value_and_error() {
        let mut field = uf_field();
        field.validate();
        field.select_next();
        field.clear();
        assert!(field.selected().is_none());
        assert!(field.error.is_none());
    }
}
