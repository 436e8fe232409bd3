//! Lead commands: validate offline or submit through the form controller

use anyhow::bail;
use clap::Args;
use lead_client::{http_controller, ClientConfig, FormController, SubmitOutcome};
use lead_forms::{validate, Amount, Field, FormValues, FormsError};

use crate::output::{self, OutputFormat};

/// Form fields, entered the way a user would type them
#[derive(Args, Debug, Clone, Default)]
pub struct LeadArgs {
    /// Full name
    #[arg(long, default_value = "")]
    pub nombre: String,
    /// National ID number (non-digits are dropped)
    #[arg(long, default_value = "")]
    pub cedula: String,
    /// Phone number (non-digits are dropped)
    #[arg(long, default_value = "")]
    pub telefono: String,
    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,
    /// Amount: 50000 or 97000
    #[arg(long, value_parser = parse_amount)]
    pub monto: Option<Amount>,
}

impl LeadArgs {
    fn entries(&self) -> [(Field, &str); 4] {
        [
            (Field::Nombre, self.nombre.as_str()),
            (Field::Cedula, self.cedula.as_str()),
            (Field::Telefono, self.telefono.as_str()),
            (Field::Email, self.email.as_str()),
        ]
    }

    /// Values as the form would hold them after typing
    pub fn to_values(&self) -> FormValues {
        let mut values = FormValues::default();
        for (field, raw) in self.entries() {
            values.set(field, raw);
        }
        if let Some(amount) = self.monto {
            values.set(Field::Monto, amount.as_str());
        }
        values
    }

    fn fill(&self, form: &FormController) {
        for (field, raw) in self.entries() {
            form.change(field, raw);
        }
        if let Some(amount) = self.monto {
            form.select_amount(amount);
        }
    }
}

fn parse_amount(s: &str) -> Result<Amount, String> {
    s.parse().map_err(|e: FormsError| e.to_string())
}

pub fn validate_cmd(args: &LeadArgs, format: OutputFormat) -> anyhow::Result<()> {
    let values = args.to_values();
    let errors = validate(&values);
    format.print_form(&values, &errors);
    if !errors.is_empty() {
        bail!("{} field(s) failed validation", errors.len());
    }
    Ok(())
}

pub async fn submit_cmd(
    args: &LeadArgs,
    endpoint: String,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let form = http_controller(ClientConfig::with_endpoint(endpoint))?;
    args.fill(&form);

    match form.submit().await {
        SubmitOutcome::Accepted => {
            output::success(lead_forms::SUCCESS_TITLE);
            println!("  {}", lead_forms::SUCCESS_DETAIL);
            Ok(())
        }
        SubmitOutcome::Invalid(errors) => {
            format.print_form(&form.snapshot().values, &errors);
            bail!("{} field(s) failed validation", errors.len())
        }
        SubmitOutcome::Failed(err) => {
            output::failure(lead_forms::FAILURE_MESSAGE);
            Err(err.into())
        }
        SubmitOutcome::Busy => bail!("a submission is already in progress"),
    }
}
