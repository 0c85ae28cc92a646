/// Remote table rows and shared view fragments
///
/// Every struct here mirrors a table in the hosted store. Rows are
/// deserialized from PostgREST responses; optional columns stay `Option`
/// because pages select different column subsets.
pub mod book;
pub mod evaluation;
pub mod event;
pub mod inbox;
pub mod live;
pub mod profile;
pub mod project;
pub mod status;

/// Render a loosely-typed column (PostgREST numerics arrive as JSON
/// numbers, grades sometimes as text) for display.
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_value_keeps_strings_unquoted() {
        assert_eq!(display_value(&serde_json::json!("8.5")), "8.5");
        assert_eq!(display_value(&serde_json::json!(8.5)), "8.5");
        assert_eq!(display_value(&serde_json::json!(10)), "10");
    }
}
