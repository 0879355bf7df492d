//! Rendering and JSON serialization for CLI output.

use std::{collections::BTreeMap, process::ExitCode};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use fsq_query::{Kind, Query, QualifierField};
use serde::Serialize;

/// JSON description of a search request.
#[derive(Serialize)]
struct JsonRequest<'a> {
    /// Search endpoint kind.
    kind: Kind,
    /// API path.
    path: &'a str,
    /// The serialized `q` parameter.
    query: &'a str,
    /// Every request parameter, including `q`.
    params: BTreeMap<&'static str, &'a str>,
    /// Keywords in caller order.
    keywords: &'a [String],
    /// Set qualifiers and their values.
    qualifiers: BTreeMap<&'static str, Vec<String>>,
}

/// Prints a query as its `q` string, or as a JSON request description.
pub fn print_query(query: &Query, json: bool) -> ExitCode {
    let request = query.request();
    let q = request.param("q").unwrap_or_default();

    if !json {
        println!("{q}");
        return ExitCode::SUCCESS;
    }

    let output = JsonRequest {
        kind: query.kind,
        path: &request.path,
        query: q,
        params: request
            .params
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect(),
        keywords: &query.keywords,
        qualifiers: query.qualifiers.to_map(),
    };
    match serde_json::to_string_pretty(&output) {
        Ok(json_str) => println!("{json_str}"),
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

/// Builds a table of qualifier flags, keys and shapes.
pub fn qualifier_table<'a>(fields: impl IntoIterator<Item = &'a QualifierField>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Field", "Key", "Flag", "Values"]);
    for field in fields {
        table.add_row(vec![
            Cell::new(field.name),
            Cell::new(field.key),
            Cell::new(format!("--{}", field.key)),
            Cell::new(field.shape.to_string()),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use fsq_query::QUALIFIER_FIELDS;

    use super::*;

    #[test]
    fn table_lists_every_field() {
        let table = qualifier_table(QUALIFIER_FIELDS);
        assert_eq!(table.row_iter().count(), QUALIFIER_FIELDS.len());
        let rendered = table.to_string();
        assert!(rendered.contains("review-requested"));
        assert!(rendered.contains("--help-wanted-issues"));
        assert!(rendered.contains("multi"));
    }
}
