use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use regform::{FieldName, FormConfig, FormValidator, ManualScheduler, MemoryDocument, SubmitOutcome};

/// Raw values as typed, before trimming
pub struct Values {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

pub fn execute(values: &Values, config: FormConfig) -> Result<ExitCode> {
    let doc = MemoryDocument::with_values(
        &values.first_name,
        &values.last_name,
        &values.email,
        &values.password,
    );
    let mut form = FormValidator::new(doc.clone(), ManualScheduler::new(), config);

    let outcome = form.handle_submit();

    for field in FieldName::ALL {
        let message = doc.error_text(field);
        if message.is_empty() {
            println!("{:<10} {}", field.as_str(), "ok".green());
        } else {
            println!("{:<10} {}", field.as_str(), message.red());
        }
    }

    match outcome {
        SubmitOutcome::Accepted(submission) => {
            println!();
            println!("{} {:?}", "Registration accepted:".green().bold(), submission);
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Rejected { invalid } => {
            println!();
            println!(
                "{} {} invalid field(s)",
                "Registration rejected:".red().bold(),
                invalid.len()
            );
            Ok(ExitCode::from(1))
        }
    }
}
