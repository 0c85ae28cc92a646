/// Per-user evaluation records (`ntas` table)
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::display_value;

/// Columns the notes page reads, in display order, with their fixed
/// Spanish labels.
pub const EVALUATION_LABELS: &[(&str, &str)] = &[
    ("evau1", "Atención al Cliente"),
    ("evau2", "Comportamiento"),
    ("evau3", "Organización"),
    ("evau4", "Trabajo en Equipo"),
    ("evau5", "Experiencia"),
    ("evau6", "Actividad"),
    ("evau7", "Tiempo conectado"),
    ("evau8", "Cosas hechas"),
    ("nm", "Nota Media"),
    ("urod", "Resultado Final (Ascender o Descender)"),
];

/// Row in the `ntas` table. Grade columns are loosely typed upstream
/// (numbers or text), so they are kept as raw JSON values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EvaluationRow {
    pub evau1: Option<serde_json::Value>,
    pub evau2: Option<serde_json::Value>,
    pub evau3: Option<serde_json::Value>,
    pub evau4: Option<serde_json::Value>,
    pub evau5: Option<serde_json::Value>,
    pub evau6: Option<serde_json::Value>,
    pub evau7: Option<serde_json::Value>,
    pub evau8: Option<serde_json::Value>,
    pub nm: Option<serde_json::Value>,
    pub urod: Option<serde_json::Value>,
    pub evaucat: Option<String>,
    pub mensaje: Option<String>,
}

/// One labeled grade line in the notes view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EvaluationEntry {
    pub field: String,
    pub label: String,
    pub value: String,
}

impl EvaluationRow {
    fn column(&self, field: &str) -> Option<&serde_json::Value> {
        match field {
            "evau1" => self.evau1.as_ref(),
            "evau2" => self.evau2.as_ref(),
            "evau3" => self.evau3.as_ref(),
            "evau4" => self.evau4.as_ref(),
            "evau5" => self.evau5.as_ref(),
            "evau6" => self.evau6.as_ref(),
            "evau7" => self.evau7.as_ref(),
            "evau8" => self.evau8.as_ref(),
            "nm" => self.nm.as_ref(),
            "urod" => self.urod.as_ref(),
            _ => None,
        }
    }

    /// Labeled entries in display order; unset columns are skipped.
    pub fn entries(&self) -> Vec<EvaluationEntry> {
        EVALUATION_LABELS
            .iter()
            .filter_map(|(field, label)| {
                let value = self.column(field)?;
                if value.is_null() {
                    return None;
                }
                Some(EvaluationEntry {
                    field: (*field).to_string(),
                    label: (*label).to_string(),
                    value: display_value(value),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_label_order_and_skip_unset() {
        let row = EvaluationRow {
            evau2: Some(serde_json::json!(7)),
            evau1: Some(serde_json::json!("9.5")),
            urod: Some(serde_json::json!("Ascender")),
            nm: None,
            ..Default::default()
        };

        let entries = row.entries();
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Atención al Cliente",
                "Comportamiento",
                "Resultado Final (Ascender o Descender)"
            ]
        );
        assert_eq!(entries[0].value, "9.5");
        assert_eq!(entries[1].value, "7");
    }
}
