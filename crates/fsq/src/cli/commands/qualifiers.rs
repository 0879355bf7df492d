//! Implementation of `fsq qualifiers`.

use std::process::ExitCode;

use fsq_query::{QualifierField, Qualifiers, field_by_key};

use crate::cli::{args::QualifiersCommand, output::qualifier_table};

/// Prints qualifier fields with their key, flag and value shape.
///
/// With no keys every field is listed; otherwise only the named ones, in the order given.
pub fn run(cmd: &QualifiersCommand) -> ExitCode {
    match select_fields(&cmd.keys) {
        Ok(fields) => {
            println!("{}", qualifier_table(fields));
            ExitCode::SUCCESS
        }
        Err(key) => {
            eprintln!("error: unknown qualifier '{key}' (run `fsq qualifiers` for the full list)");
            ExitCode::FAILURE
        }
    }
}

/// Resolves query keys to table entries, returning the first key that matches nothing.
fn select_fields(keys: &[String]) -> Result<Vec<&'static QualifierField>, &str> {
    if keys.is_empty() {
        return Ok(Qualifiers::fields().iter().collect());
    }
    keys.iter()
        .map(|key| field_by_key(key).ok_or(key.as_str()))
        .collect()
}
