//! Field validation rules

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::value_objects::{Field, FieldErrors, FormValues};

/// Compiled field rules.
///
/// Each field is checked on its own; one failing field never hides another.
#[derive(Clone, Debug)]
pub struct Validator {
    cedula: Regex,
    telefono: Regex,
    email: Regex,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            cedula: Regex::new(r"^[0-9]{8,10}$").expect("cedula pattern"),
            telefono: Regex::new(r"^[0-9]{10}$").expect("telefono pattern"),
            email: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"),
        }
    }

    /// Process-wide instance, compiled on first use.
    pub fn shared() -> &'static Validator {
        static SHARED: OnceLock<Validator> = OnceLock::new();
        SHARED.get_or_init(Validator::new)
    }

    /// Check every field and collect the failures.
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                self.check(field, values.get(field))
                    .map(|message| (field, message.to_string()))
            })
            .collect()
    }

    /// Message for a single field, or `None` when it passes.
    pub fn check(&self, field: Field, value: &str) -> Option<&'static str> {
        let blank = value.trim().is_empty();
        match field {
            Field::Nombre if blank => Some("El nombre es requerido"),
            Field::Nombre => None,
            Field::Cedula if blank => Some("La cédula es requerida"),
            Field::Cedula if !self.cedula.is_match(value) => {
                Some("La cédula debe tener entre 8 y 10 dígitos")
            }
            Field::Cedula => None,
            Field::Telefono if blank => Some("El teléfono es requerido"),
            Field::Telefono if !self.telefono.is_match(value) => {
                Some("El teléfono debe tener 10 dígitos")
            }
            Field::Telefono => None,
            Field::Email if blank => Some("El email es requerido"),
            Field::Email if !self.email.is_match(value) => Some("El email no es válido"),
            Field::Email => None,
            // The selection control only offers valid amounts.
            Field::Monto if blank => Some("Debes seleccionar un monto"),
            Field::Monto => None,
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate with the shared rule set.
pub fn validate(values: &FormValues) -> FieldErrors {
    Validator::shared().validate(values)
}
