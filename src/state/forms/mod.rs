//! Form domain layer
//!
//! Field values, declarative validation, the three page forms and the
//! postal-code auto-fill that feeds the sign-up address.

mod address;
mod field;
mod form_state;
mod validation;

pub use address::{Address, LookupOutcome};
pub use field::FormField;
pub use form_state::{
    first_name, EventForm, EventRegistration, Form, FormEffect, MerchandiseForm,
    MerchandiseOrder, SignupForm, SignupRow,
};
