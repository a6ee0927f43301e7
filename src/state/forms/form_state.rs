//! Form state management and form structs

use super::address::{AddressAutofill, AutofillAction, LookupOutcome};
use super::field::{FormField, SelectOption};
use super::validation::{parse_input_date, Rule, PHONE_PATTERN, POSTAL_CODE_PATTERN};
use crate::state::catalog::{self, Print, Size, PRINTS, REGIONS, SIZES};
use crate::state::format::Mask;
use crate::state::pricing::{price_for_age, DerivedPricing, MAX_AGE};
use serde::Serialize;

const NAME_RULES: [Rule; 2] = [
    Rule::Required("Nome é obrigatório"),
    Rule::MinLength(2, "Nome deve ter pelo menos 2 caracteres"),
];

/// Side effect a field edit asks the application to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// Look up the address for these postal-code digits
    LookupAddress(String),
}

/// Trait for common form operations
///
/// The last focus position of every form is its submit button, so
/// `field_count` is one more than the number of fields.
pub trait Form {
    fn fields(&self) -> Vec<&FormField>;
    fn fields_mut(&mut self) -> Vec<&mut FormField>;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);

    fn field_count(&self) -> usize {
        self.fields().len() + 1
    }
    fn is_submit_row_active(&self) -> bool {
        self.active_field() == self.field_count() - 1
    }
    /// Move focus forward, skipping locked fields
    fn next_field(&mut self) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = (index + 1) % count;
            if !self.get_field(index).is_some_and(|f| f.locked) {
                break;
            }
        }
        self.set_active_field(index);
    }
    /// Move focus backward, skipping locked fields
    fn prev_field(&mut self) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = if index == 0 { count - 1 } else { index - 1 };
            if !self.get_field(index).is_some_and(|f| f.locked) {
                break;
            }
        }
        self.set_active_field(index);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields().into_iter().nth(index)
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.fields_mut().into_iter().nth(index)
    }
    /// Called after the field at `index` changed value
    fn on_field_edited(&mut self, _index: usize) -> Option<FormEffect> {
        None
    }
    fn input_char(&mut self, c: char) -> Option<FormEffect> {
        let index = self.active_field();
        let changed = self.get_active_field_mut().is_some_and(|f| f.push_char(c));
        if changed {
            self.on_field_edited(index)
        } else {
            None
        }
    }
    fn backspace(&mut self) -> Option<FormEffect> {
        let index = self.active_field();
        let changed = self.get_active_field_mut().is_some_and(|f| f.pop_char());
        if changed {
            self.on_field_edited(index)
        } else {
            None
        }
    }
    /// Cycle the active select field. `forward` picks the direction.
    fn cycle_option(&mut self, forward: bool) -> Option<FormEffect> {
        let index = self.active_field();
        let changed = match self.get_active_field_mut() {
            Some(field) if field.is_select() && !field.locked => {
                if forward {
                    field.select_next();
                } else {
                    field.select_prev();
                }
                true
            }
            _ => false,
        };
        if changed {
            self.on_field_edited(index)
        } else {
            None
        }
    }
    /// Validate every field so all messages surface at once. Returns true if the form is valid.
    fn validate(&mut self) -> bool {
        self.fields_mut()
            .into_iter()
            .fold(true, |valid, field| field.validate() && valid)
    }
}

/// First word of a full name, used in greetings
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or("")
}

// Sign-up Form

/// Row sent for a sign-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRow {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    /// ISO `yyyy-mm-dd`
    #[serde(rename = "dataNascimento")]
    pub birth_date: String,
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "rua")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "complemento")]
    pub complement: String,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "uf")]
    pub region: String,
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    pub name: FormField,
    pub phone: FormField,
    pub birth_date: FormField,
    pub postal_code: FormField,
    pub street: FormField,
    pub number: FormField,
    pub complement: FormField,
    pub neighborhood: FormField,
    pub city: FormField,
    pub region: FormField,
    pub active_field_index: usize,
    pub autofill: AddressAutofill,
}

impl SignupForm {
    pub const POSTAL_CODE: usize = 3;

    pub fn new() -> Self {
        Self {
            name: FormField::text("nome", "Nome Completo", "Digite seu nome completo")
                .with_rules(NAME_RULES.to_vec()),
            phone: FormField::masked("telefone", "Telefone", "(83) 99999-9999", Mask::Phone)
                .with_rules(vec![
                    Rule::Required("Telefone é obrigatório"),
                    Rule::Pattern(&PHONE_PATTERN, "Formato: (xx) xxxxx-xxxx"),
                ]),
            birth_date: FormField::masked(
                "dataNascimento",
                "Data de Nascimento",
                "DD/MM/AAAA",
                Mask::Date,
            )
            .with_rules(vec![
                Rule::Required("Data de nascimento é obrigatória"),
                Rule::PastDate("Data de nascimento inválida"),
            ]),
            postal_code: FormField::masked("cep", "CEP", "00000-000 (opcional)", Mask::PostalCode)
                .with_rules(vec![Rule::Pattern(
                    &POSTAL_CODE_PATTERN,
                    "CEP deve ter o formato 00000-000",
                )]),
            street: FormField::text("rua", "Rua", "Nome da rua")
                .with_rules(vec![Rule::Required("Rua é obrigatória")]),
            number: FormField::text("numero", "Número", "123 (opcional)"),
            complement: FormField::text(
                "complemento",
                "Complemento",
                "Apartamento, casa, etc. (opcional)",
            ),
            neighborhood: FormField::text("bairro", "Bairro", "Nome do bairro")
                .with_rules(vec![Rule::Required("Bairro é obrigatório")]),
            city: FormField::text("cidade", "Cidade", "Nome da cidade")
                .with_rules(vec![Rule::Required("Cidade é obrigatória")]),
            region: FormField::select(
                "uf",
                "UF",
                "Selecione",
                REGIONS.iter().map(|uf| SelectOption::new(*uf, *uf)).collect(),
            )
            .with_rules(vec![Rule::Required("UF é obrigatório")]),
            active_field_index: 0,
            autofill: AddressAutofill::default(),
        }
    }

    fn address_fields_mut(&mut self) -> [&mut FormField; 4] {
        [
            &mut self.street,
            &mut self.neighborhood,
            &mut self.city,
            &mut self.region,
        ]
    }

    fn apply_autofill(&mut self, action: AutofillAction) {
        match action {
            AutofillAction::Keep => {}
            AutofillAction::Unlock => {
                for field in self.address_fields_mut() {
                    field.locked = false;
                }
            }
            AutofillAction::ClearAndUnlock => {
                for field in self.address_fields_mut() {
                    if field.autofilled {
                        field.clear();
                    }
                    field.locked = false;
                }
            }
            AutofillAction::Fill(address) => {
                let values = [
                    address.street,
                    address.neighborhood,
                    address.city,
                    address.region,
                ];
                for (field, value) in self.address_fields_mut().into_iter().zip(values) {
                    field.fill(&value);
                }
            }
        }

        // Focus must not rest on a field that just became read-only
        if self.get_field(self.active_field_index).is_some_and(|f| f.locked) {
            self.next_field();
        }
    }

    /// Apply a lookup response issued for the `tag` digits
    pub fn apply_lookup(&mut self, tag: &str, outcome: LookupOutcome) {
        let action = self
            .autofill
            .apply(tag, self.postal_code.as_text(), outcome);
        self.apply_autofill(action);
    }

    /// Whether the address fields are locked to a looked-up address
    pub fn is_address_resolved(&self) -> bool {
        self.autofill.is_resolved()
    }

    /// Build the row for submission
    pub fn row(&self) -> SignupRow {
        let birth_date = parse_input_date(self.birth_date.as_text())
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        SignupRow {
            name: self.name.as_text().trim().to_string(),
            phone: self.phone.as_text().to_string(),
            birth_date,
            postal_code: self.postal_code.as_text().to_string(),
            street: self.street.as_text().to_string(),
            number: self.number.as_text().to_string(),
            complement: self.complement.as_text().to_string(),
            neighborhood: self.neighborhood.as_text().to_string(),
            city: self.city.as_text().to_string(),
            region: self.region.submitted_value().to_string(),
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![
            &self.name,
            &self.phone,
            &self.birth_date,
            &self.postal_code,
            &self.street,
            &self.number,
            &self.complement,
            &self.neighborhood,
            &self.city,
            &self.region,
        ]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![
            &mut self.name,
            &mut self.phone,
            &mut self.birth_date,
            &mut self.postal_code,
            &mut self.street,
            &mut self.number,
            &mut self.complement,
            &mut self.neighborhood,
            &mut self.city,
            &mut self.region,
        ]
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(10);
    }
    fn on_field_edited(&mut self, index: usize) -> Option<FormEffect> {
        if index == Self::POSTAL_CODE {
            let (action, lookup) = self.autofill.code_edited(self.postal_code.as_text());
            self.apply_autofill(action);
            return lookup.map(FormEffect::LookupAddress);
        }
        None
    }
}

// Merchandise Form

/// Row sent for a shirt order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MerchandiseRow {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    /// Size catalog id
    #[serde(rename = "tamanho")]
    pub size: u32,
    /// Print catalog id
    #[serde(rename = "estampa")]
    pub print: u32,
}

/// Submitted shirt order with its catalog entries resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchandiseOrder {
    pub row: MerchandiseRow,
    pub size: Option<&'static Size>,
    pub print: Option<&'static Print>,
}

impl MerchandiseOrder {
    pub fn price_label(&self) -> String {
        catalog::merchandise_price_label()
    }

    pub fn payment_link(&self) -> &'static str {
        catalog::MERCHANDISE_PAYMENT_LINK
    }
}

#[derive(Debug, Clone)]
pub struct MerchandiseForm {
    pub name: FormField,
    pub phone: FormField,
    pub size: FormField,
    pub print: FormField,
    pub active_field_index: usize,
}

impl MerchandiseForm {
    pub const PRINT: usize = 3;

    pub fn new() -> Self {
        Self {
            name: FormField::text("nome", "Nome Completo", "Digite seu nome completo")
                .with_rules(NAME_RULES.to_vec()),
            phone: FormField::masked("telefone", "Telefone", "(83) 99999-9999", Mask::Phone)
                .with_rules(vec![
                    Rule::Required("Telefone é obrigatório"),
                    Rule::Pattern(&PHONE_PATTERN, "Formato: (xx) xxxxx-xxxx"),
                ]),
            size: FormField::select(
                "tamanho",
                "Tamanho",
                "Selecione o tamanho",
                SIZES
                    .iter()
                    .map(|s| SelectOption::new(s.id.to_string(), s.name))
                    .collect(),
            )
            .with_rules(vec![Rule::Required("Tamanho é obrigatório")]),
            print: FormField::select(
                "estampa",
                "Escolha sua Estampa",
                "Selecione uma estampa",
                PRINTS
                    .iter()
                    .map(|p| SelectOption::new(p.id.to_string(), p.name))
                    .collect(),
            )
            .with_rules(vec![Rule::Required("Selecione uma estampa")]),
            active_field_index: 0,
        }
    }

    pub fn selected_size(&self) -> Option<&'static Size> {
        self.size
            .submitted_value()
            .parse()
            .ok()
            .and_then(catalog::size_by_id)
    }

    pub fn selected_print(&self) -> Option<&'static Print> {
        self.print
            .submitted_value()
            .parse()
            .ok()
            .and_then(catalog::print_by_id)
    }

    /// Whether the live order summary has anything to show
    pub fn has_selection(&self) -> bool {
        self.selected_size().is_some() || self.selected_print().is_some()
    }

    /// Build the order snapshot for submission
    pub fn order(&self) -> MerchandiseOrder {
        let size = self.selected_size();
        let print = self.selected_print();
        MerchandiseOrder {
            row: MerchandiseRow {
                name: self.name.as_text().trim().to_string(),
                phone: self.phone.as_text().to_string(),
                size: size.map_or(0, |s| s.id),
                print: print.map_or(0, |p| p.id),
            },
            size,
            print,
        }
    }
}

impl Default for MerchandiseForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for MerchandiseForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![&self.name, &self.phone, &self.size, &self.print]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![&mut self.name, &mut self.phone, &mut self.size, &mut self.print]
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
}

// Event Registration Form

/// Row sent for an event registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "idade")]
    pub age: u32,
}

/// Submitted registration with its derived price tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRegistration {
    pub row: EventRow,
    pub pricing: DerivedPricing,
}

#[derive(Debug, Clone)]
pub struct EventForm {
    pub name: FormField,
    pub phone: FormField,
    pub age: FormField,
    pub active_field_index: usize,
}

impl EventForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("nome", "Nome Completo", "Digite seu nome completo")
                .with_rules(NAME_RULES.to_vec()),
            phone: FormField::masked("telefone", "Telefone", "(83) 99999-9999", Mask::Phone)
                .with_rules(vec![
                    Rule::Required("Telefone é obrigatório"),
                    Rule::Pattern(&PHONE_PATTERN, "Formato: (xx) xxxxx-xxxx"),
                ]),
            age: FormField::numeric("idade", "Idade", "Digite sua idade", 3).with_rules(vec![
                Rule::Required("Idade é obrigatória"),
                Rule::Integer("Idade deve ser um número"),
                Rule::Min(0, "Idade deve ser maior que 0"),
                Rule::Max(MAX_AGE.into(), "Idade deve ser menor que 120"),
            ]),
            active_field_index: 0,
        }
    }

    /// Age as typed, if it parses
    pub fn age(&self) -> Option<u32> {
        self.age.as_text().trim().parse().ok()
    }

    /// Live price preview, recomputed from the current age
    pub fn preview_pricing(&self) -> Option<DerivedPricing> {
        self.age().map(price_for_age)
    }

    /// Build the registration snapshot for submission
    pub fn registration(&self) -> EventRegistration {
        let age = self.age().unwrap_or(0);
        EventRegistration {
            row: EventRow {
                name: self.name.as_text().trim().to_string(),
                phone: self.phone.as_text().to_string(),
                age,
            },
            pricing: price_for_age(age),
        }
    }
}

impl Default for EventForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for EventForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![&self.name, &self.phone, &self.age]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![&mut self.name, &mut self.phone, &mut self.age]
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::address::Address;
    use crate::state::pricing::{PriceTier, ADULT_PAYMENT_LINK};

    fn type_text(form: &mut impl Form, text: &str) -> Option<FormEffect> {
        let mut effect = None;
        for c in text.chars() {
            if let Some(e) = form.input_char(c) {
                effect = Some(e);
            }
        }
        effect
    }

    fn found() -> LookupOutcome {
        LookupOutcome::Found(Address {
            street: "Rua das Trincheiras".to_string(),
            neighborhood: "Centro".to_string(),
            city: "João Pessoa".to_string(),
            region: "PB".to_string(),
        })
    }

    fn filled_signup() -> SignupForm {
        let mut form = SignupForm::new();
        form.name.set_text("Maria da Silva");
        form.phone.set_text("83999991234");
        form.birth_date.set_text("15031990");
        form.street.set_text("Rua A");
        form.neighborhood.set_text("Centro");
        form.city.set_text("João Pessoa");
        form.region.set_text("PB");
        form
    }

    mod form_trait {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count_includes_submit_row() {
            assert_eq!(SignupForm::new().field_count(), 11);
            assert_eq!(MerchandiseForm::new().field_count(), 5);
            assert_eq!(EventForm::new().field_count(), 4);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = EventForm::new();
            for _ in 0..4 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = EventForm::new();
            form.prev_field();
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = MerchandiseForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 4);
        }

        #[test]
        fn test_next_field_skips_locked() {
            let mut form = SignupForm::new();
            form.postal_code.set_text("58000123");
            form.apply_lookup("58000123", found());
            form.set_active_field(SignupForm::POSTAL_CODE);
            form.next_field();
            assert_eq!(form.active_field_index, 5); // number
        }

        #[test]
        fn test_validate_reports_all_errors() {
            let mut form = EventForm::new();
            assert!(!form.validate());
            assert_eq!(form.name.error.as_deref(), Some("Nome é obrigatório"));
            assert_eq!(form.phone.error.as_deref(), Some("Telefone é obrigatório"));
            assert_eq!(form.age.error.as_deref(), Some("Idade é obrigatória"));
            assert!(form.fields().iter().all(|f| f.error.is_some()));
        }

        #[test]
        fn test_input_on_submit_row_is_ignored() {
            let mut form = EventForm::new();
            form.set_active_field(3);
            assert!(form.input_char('a').is_none());
            assert_eq!(form.name.as_text(), "");
        }

        #[test]
        fn test_first_name() {
            assert_eq!(first_name("Maria da Silva"), "Maria");
            assert_eq!(first_name("  Ana "), "Ana");
            assert_eq!(first_name(""), "");
        }
    }

    mod signup_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_passes() {
            let mut form = filled_signup();
            assert!(form.validate());
        }

        #[test]
        fn test_postal_code_is_optional_but_patterned() {
            let mut form = filled_signup();
            form.postal_code.set_text("5800");
            assert!(!form.validate());
            assert_eq!(
                form.postal_code.error.as_deref(),
                Some("CEP deve ter o formato 00000-000")
            );
        }

        #[test]
        fn test_typing_complete_code_requests_lookup() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::POSTAL_CODE);
            let effect = type_text(&mut form, "58000123");
            assert_eq!(effect, Some(FormEffect::LookupAddress("58000123".to_string())));
            assert_eq!(form.postal_code.as_text(), "58000-123");
        }

        #[test]
        fn test_resolved_lookup_fills_and_locks() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::POSTAL_CODE);
            type_text(&mut form, "58000123");
            form.apply_lookup("58000123", found());

            assert!(form.is_address_resolved());
            assert_eq!(form.street.as_text(), "Rua das Trincheiras");
            assert_eq!(form.region.submitted_value(), "PB");
            assert!(form.street.locked && form.neighborhood.locked);
            assert!(form.city.locked && form.region.locked);
            assert!(!form.number.locked);
        }

        #[test]
        fn test_unresolvable_code_leaves_fields_empty_and_editable() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::POSTAL_CODE);
            type_text(&mut form, "00000000");
            form.apply_lookup("00000000", LookupOutcome::NotFound);

            assert!(!form.is_address_resolved());
            assert_eq!(form.street.as_text(), "");
            assert!(!form.street.locked);
        }

        #[test]
        fn test_editing_code_unlocks_before_new_lookup() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::POSTAL_CODE);
            type_text(&mut form, "58000123");
            form.apply_lookup("58000123", found());

            form.set_active_field(SignupForm::POSTAL_CODE);
            assert!(form.backspace().is_none());

            assert!(!form.is_address_resolved());
            assert!(!form.street.locked);
            // Values stay until a failed lookup clears them
            assert_eq!(form.street.as_text(), "Rua das Trincheiras");
        }

        #[test]
        fn test_stale_lookup_is_ignored() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::POSTAL_CODE);
            type_text(&mut form, "58000123");
            form.backspace();
            type_text(&mut form, "9");

            form.apply_lookup("58000123", found());
            assert!(!form.is_address_resolved());
            assert_eq!(form.street.as_text(), "");
        }

        #[test]
        fn test_failed_lookup_after_resolution_clears_autofill() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::POSTAL_CODE);
            type_text(&mut form, "58000123");
            form.apply_lookup("58000123", found());

            form.set_active_field(SignupForm::POSTAL_CODE);
            form.backspace();
            let effect = type_text(&mut form, "9");
            assert_eq!(effect, Some(FormEffect::LookupAddress("58000129".to_string())));
            form.apply_lookup("58000129", LookupOutcome::Failed("offline".to_string()));

            assert_eq!(form.street.as_text(), "");
            assert!(form.region.selected().is_none());
            assert!(!form.street.locked);
        }

        #[test]
        fn test_failed_lookup_clears_only_untouched_autofill() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::POSTAL_CODE);
            type_text(&mut form, "58000123");
            form.apply_lookup("58000123", found());

            form.set_active_field(SignupForm::POSTAL_CODE);
            form.backspace();
            type_text(&mut form, "9");
            form.set_active_field(4);
            type_text(&mut form, "!");
            form.apply_lookup("58000129", LookupOutcome::NotFound);

            assert_eq!(form.street.as_text(), "Rua das Trincheiras!");
            assert_eq!(form.neighborhood.as_text(), "");
            assert_eq!(form.city.as_text(), "");
            assert!(form.region.selected().is_none());
            assert!(form.fields().iter().all(|f| !f.locked));
        }

        #[test]
        fn test_blank_lookup_fields_stay_editable() {
            let mut form = filled_signup();
            form.set_active_field(SignupForm::POSTAL_CODE);
            type_text(&mut form, "58000000");
            form.apply_lookup(
                "58000000",
                LookupOutcome::Found(Address {
                    street: String::new(),
                    neighborhood: String::new(),
                    city: "João Pessoa".to_string(),
                    region: "XX".to_string(),
                }),
            );

            assert!(form.city.locked);
            assert!(!form.street.locked && !form.neighborhood.locked);
            assert!(!form.region.locked);
            assert!(!form.validate());

            form.set_active_field(4);
            type_text(&mut form, "Rua B");
            form.set_active_field(7);
            type_text(&mut form, "Centro");
            form.set_active_field(9);
            form.cycle_option(true);

            assert!(form.validate());
            assert_eq!(form.row().street, "Rua B");
        }

        #[test]
        fn test_locked_fields_reject_typing() {
            let mut form = SignupForm::new();
            form.postal_code.set_text("58000123");
            form.apply_lookup("58000123", found());
            form.set_active_field(4);
            assert!(form.input_char('x').is_none());
            assert_eq!(form.street.as_text(), "Rua das Trincheiras");
        }

        #[test]
        fn test_row_serializes_with_api_names() {
            let mut form = filled_signup();
            form.postal_code.set_text("58000123");
            form.number.set_text("10");
            let json = serde_json::to_value(form.row()).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "nome": "Maria da Silva",
                    "telefone": "(83) 99999-1234",
                    "dataNascimento": "1990-03-15",
                    "cep": "58000-123",
                    "rua": "Rua A",
                    "numero": "10",
                    "complemento": "",
                    "bairro": "Centro",
                    "cidade": "João Pessoa",
                    "uf": "PB",
                })
            );
        }
    }

    mod merchandise_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_requires_size_and_print() {
            let mut form = MerchandiseForm::new();
            form.name.set_text("João");
            form.phone.set_text("83999991234");
            assert!(!form.validate());
            assert_eq!(form.size.error.as_deref(), Some("Tamanho é obrigatório"));
            assert_eq!(form.print.error.as_deref(), Some("Selecione uma estampa"));
        }

        #[test]
        fn test_cycle_selects_catalog_entries() {
            let mut form = MerchandiseForm::new();
            assert!(!form.has_selection());
            form.set_active_field(2);
            form.cycle_option(true);
            form.cycle_option(true);
            form.set_active_field(MerchandiseForm::PRINT);
            form.cycle_option(false);

            assert_eq!(form.selected_size().map(|s| s.name), Some("M"));
            assert_eq!(form.selected_print().map(|p| p.id), Some(23));
            assert!(form.has_selection());
        }

        #[test]
        fn test_order_row_uses_catalog_ids() {
            let mut form = MerchandiseForm::new();
            form.name.set_text("João Pedro");
            form.phone.set_text("83999991234");
            form.size.set_text("20");
            form.print.set_text("21");

            let order = form.order();
            assert_eq!(
                order.row,
                MerchandiseRow {
                    name: "João Pedro".to_string(),
                    phone: "(83) 99999-1234".to_string(),
                    size: 20,
                    print: 21,
                }
            );
            assert_eq!(order.print.map(|p| p.name), Some("Ano de Frutificar"));
            assert_eq!(order.price_label(), "R$ 60,00");
        }
    }

    mod event_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_preview_follows_age() {
            let mut form = EventForm::new();
            assert!(form.preview_pricing().is_none());
            form.set_active_field(2);
            type_text(&mut form, "7");
            assert_eq!(form.preview_pricing().map(|p| p.price), Some(30));
            type_text(&mut form, "0");
            assert_eq!(form.preview_pricing().map(|p| p.price), Some(60));
        }

        #[test]
        fn test_age_out_of_range_fails() {
            let mut form = EventForm::new();
            form.name.set_text("Ana");
            form.phone.set_text("83999991234");
            form.age.set_text("121");
            assert!(!form.validate());
            assert_eq!(
                form.age.error.as_deref(),
                Some("Idade deve ser menor que 120")
            );
        }

        #[test]
        fn test_registration_derives_pricing() {
            let mut form = EventForm::new();
            form.name.set_text("Ana");
            form.phone.set_text("83999991234");
            form.age.set_text("70");

            let registration = form.registration();
            assert_eq!(registration.row.age, 70);
            assert_eq!(registration.pricing.tier, PriceTier::Adult);
            assert_eq!(registration.pricing.payment_link, Some(ADULT_PAYMENT_LINK));
            assert_eq!(
                serde_json::to_value(&registration.row).unwrap(),
                serde_json::json!({"nome": "Ana", "telefone": "(83) 99999-1234", "idade": 70})
            );
        }
    }
}
