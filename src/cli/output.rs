//! Output formatting for check results

use clap::ValueEnum;
use serde::Serialize;

use mask_integrity::models::Relationship;
use mask_integrity::validation::integrity::CheckOutcome;

/// Output format for the check report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable text
    Text,
    /// Machine-readable JSON document
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    relationship: &'a Relationship,
    #[serde(flatten)]
    outcome: &'a CheckOutcome,
}

/// Render a check outcome in the requested format.
pub fn render(
    outcome: &CheckOutcome,
    relationship: &Relationship,
    format: Format,
) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(render_text(outcome, relationship)),
        Format::Json => serde_json::to_string_pretty(&Report {
            relationship,
            outcome,
        }),
    }
}

fn render_text(outcome: &CheckOutcome, relationship: &Relationship) -> String {
    match outcome {
        CheckOutcome::Passed => format!(
            "✅ Referential integrity check passed: every {}.{} resolves to {}.{}",
            relationship.child_table,
            relationship.foreign_key_column,
            relationship.parent_table,
            relationship.parent_key_column,
        ),
        CheckOutcome::Failed {
            orphan_count,
            samples,
        } => {
            let mut output = String::new();
            output.push_str(&format!(
                "⚠️  Referential integrity check failed for {}\n",
                relationship
            ));
            output.push_str(&format!("  Orphaned foreign keys: {}\n", orphan_count));
            if samples.is_empty() {
                output.push_str("  (no examples available)");
            } else {
                let rendered: Vec<String> = samples.iter().map(|s| s.to_string()).collect();
                output.push_str(&format!("  Examples: {}", rendered.join(", ")));
            }
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mask_integrity::models::KeyValue;

    #[test]
    fn test_text_passed_mentions_relationship() {
        let text = render_text(&CheckOutcome::Passed, &Relationship::demo());
        assert!(text.contains("passed"));
        assert!(text.contains("orders.customer_id"));
    }

    #[test]
    fn test_text_failed_lists_count_and_examples() {
        let outcome = CheckOutcome::Failed {
            orphan_count: 2,
            samples: vec![KeyValue::Integer(3), KeyValue::Integer(7)],
        };
        let text = render_text(&outcome, &Relationship::demo());
        assert!(text.contains("Orphaned foreign keys: 2"));
        assert!(text.contains("Examples: 3, 7"));
    }

    #[test]
    fn test_json_failed_carries_status_and_samples() {
        let outcome = CheckOutcome::Failed {
            orphan_count: 1,
            samples: vec![KeyValue::Integer(3)],
        };
        let json = render(&outcome, &Relationship::demo(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["orphan_count"], 1);
        assert_eq!(value["samples"][0], 3);
        assert_eq!(value["relationship"]["child_table"], "orders");
    }
}
