//! Lead form value objects
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::FormsError;

/// The five form fields, named as they travel on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Nombre,
    Cedula,
    Telefono,
    Email,
    Monto,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 5] = [
        Field::Nombre,
        Field::Cedula,
        Field::Telefono,
        Field::Email,
        Field::Monto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Nombre => "nombre",
            Field::Cedula => "cedula",
            Field::Telefono => "telefono",
            Field::Email => "email",
            Field::Monto => "monto",
        }
    }

    /// Label rendered next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Nombre => "Nombre completo",
            Field::Cedula => "Cédula",
            Field::Telefono => "Teléfono",
            Field::Email => "Email",
            Field::Monto => "Monto",
        }
    }

    /// ID and phone only ever hold digits.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Cedula | Field::Telefono)
    }

    /// Apply input normalization for this field.
    pub fn normalize(&self, raw: &str) -> String {
        if self.is_numeric() {
            raw.chars().filter(|c| c.is_ascii_digit()).collect()
        } else {
            raw.to_string()
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormsError::UnknownField(s.to_string()))
    }
}

/// Amount choices offered by the selection control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Amount {
    Basic,
    Plus,
}

impl Amount {
    pub const ALL: [Amount; 2] = [Amount::Basic, Amount::Plus];

    /// Value submitted in the `monto` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Amount::Basic => "50000",
            Amount::Plus => "97000",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Amount::Basic => "$50,000",
            Amount::Plus => "$97,000",
        }
    }
}

impl FromStr for Amount {
    type Err = FormsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::ALL
            .into_iter()
            .find(|amount| amount.as_str() == s)
            .ok_or_else(|| FormsError::UnknownAmount(s.to_string()))
    }
}

/// Form values as entered by the user and as posted to the intake endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FormValues {
    pub nombre: String,
    pub cedula: String,
    pub telefono: String,
    pub email: String,
    pub monto: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Nombre => &self.nombre,
            Field::Cedula => &self.cedula,
            Field::Telefono => &self.telefono,
            Field::Email => &self.email,
            Field::Monto => &self.monto,
        }
    }

    /// Store `raw` after normalization for `field`.
    pub fn set(&mut self, field: Field, raw: &str) {
        let value = field.normalize(raw);
        let slot = match field {
            Field::Nombre => &mut self.nombre,
            Field::Cedula => &mut self.cedula,
            Field::Telefono => &mut self.telefono,
            Field::Email => &mut self.email,
            Field::Monto => &mut self.monto,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Messages for the fields currently failing validation.
///
/// A passing field has no entry at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the error for one field, leaving the others untouched.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<(Field, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
