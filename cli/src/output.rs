//! Output formatting

use clap::ValueEnum;
use colored::Colorize;
use lead_forms::{Field, FieldErrors, FormValues};
use serde::Serialize;
use serde_json::Value;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name stored in the config file
    pub fn from_config(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }

    /// Print any serializable value. Tables show one row per top-level key;
    /// values that are not objects are printed as JSON.
    pub fn print<T: Serialize>(&self, data: &T) {
        match self {
            OutputFormat::Table => {
                let value = serde_json::to_value(data).unwrap_or_default();
                let rendered = entry_table(&value)
                    .unwrap_or_else(|| serde_json::to_string_pretty(&value).unwrap_or_default());
                println!("{}", rendered);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(data).unwrap_or_default());
            }
        }
    }

    /// Print the form with each field's validation result
    pub fn print_form(&self, values: &FormValues, errors: &FieldErrors) {
        match self {
            OutputFormat::Table => println!("{}", form_table(values, errors)),
            _ => self.print(&serde_json::json!({ "values": values, "errors": errors })),
        }
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Campo")]
    label: &'static str,
    #[tabled(rename = "Valor")]
    value: String,
    #[tabled(rename = "Estado")]
    status: String,
}

fn form_table(values: &FormValues, errors: &FieldErrors) -> String {
    let rows = Field::ALL.into_iter().map(|field| FieldRow {
        label: field.label(),
        value: values.get(field).to_string(),
        status: errors.get(field).unwrap_or("ok").to_string(),
    });
    Table::new(rows).to_string()
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Clave")]
    key: String,
    #[tabled(rename = "Valor")]
    value: String,
}

fn entry_table(value: &Value) -> Option<String> {
    let rows = value.as_object()?.iter().map(|(key, value)| EntryRow {
        key: key.clone(),
        value: match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        },
    });
    Some(Table::new(rows).to_string())
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn failure(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}
