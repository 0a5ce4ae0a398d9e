//! Maintenance Reports
//!
//! Markdown renderings of service manuals, equipment parts lists and
//! the fleet catalog.

use millwright_models::{EquipmentPart, EquipmentSummary, ServiceManual};

/// Render a service manual with its required-parts table.
pub fn render_service_manual(manual: &ServiceManual, parts: &[EquipmentPart]) -> String {
    let mut out = format!(
        "## Service Manual for Equipment {}\n\n**Service Description:**\n{}\n\n",
        manual.equipment_id, manual.service_description
    );
    out.push_str(&parts_table(parts, "service"));
    out
}

/// Render the parts list for one equipment unit.
pub fn render_equipment_parts(manual: &ServiceManual, parts: &[EquipmentPart]) -> String {
    let mut out = format!(
        "## Parts List for Equipment {}\n\n**Service Description:** {}\n\n",
        manual.equipment_id, manual.service_description
    );
    out.push_str(&parts_table(parts, "equipment"));
    out
}

fn parts_table(parts: &[EquipmentPart], subject: &str) -> String {
    if parts.is_empty() {
        return format!("**Required Parts:** No parts specified for this {subject}.\n");
    }

    let mut out = format!("**Required Parts ({} total):**\n\n", parts.len());
    out.push_str("| Part Number | Quantity |\n");
    out.push_str("|-------------|----------|\n");

    let mut total_quantity: i64 = 0;
    for part in parts {
        out.push_str(&format!("| {} | {} |\n", part.part, part.quantity));
        total_quantity += part.quantity as i64;
    }

    out.push_str(&format!("\n**Total Parts Needed:** {total_quantity}\n"));
    out
}

/// Render the fleet catalog table.
pub fn render_equipment_list(summaries: &[EquipmentSummary]) -> String {
    if summaries.is_empty() {
        return "No equipment found in the database.".to_string();
    }

    let mut out = format!("## Available Equipment ({} total)\n\n", summaries.len());
    out.push_str("| ID | Parts Count | Total Quantity | Service Description |\n");
    out.push_str("|----|-------------|----------------|---------------------|\n");

    for summary in summaries {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            summary.equipment_id,
            summary.parts_count,
            summary.total_quantity,
            cell_description(&summary.service_description, 60),
        ));
    }

    out
}

/// Flatten a multi-line description into a single table cell, truncated
/// with an ellipsis.
fn cell_description(description: &str, max: usize) -> String {
    let flat = description.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > max {
        let cut: String = flat.chars().take(max).collect();
        format!("{cut}...")
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual() -> ServiceManual {
        ServiceManual {
            equipment_id: 7,
            service_description: "# Service Manual - Equipment ID: 7\n\n## Equipment Overview"
                .to_string(),
        }
    }

    fn parts() -> Vec<EquipmentPart> {
        vec![
            EquipmentPart {
                part: "GEAR-007-01".to_string(),
                quantity: 1,
            },
            EquipmentPart {
                part: "PINION-007-02".to_string(),
                quantity: 2,
            },
        ]
    }

    #[test]
    fn test_manual_report_totals_the_parts() {
        let report = render_service_manual(&manual(), &parts());

        assert!(report.starts_with("## Service Manual for Equipment 7\n\n**Service Description:**\n# Service Manual"));
        assert!(report.contains("**Required Parts (2 total):**"));
        assert!(report.contains("| GEAR-007-01 | 1 |"));
        assert!(report.contains("| PINION-007-02 | 2 |"));
        assert!(report.ends_with("\n**Total Parts Needed:** 3\n"));
    }

    #[test]
    fn test_manual_report_without_parts() {
        let report = render_service_manual(&manual(), &[]);
        assert!(report.ends_with("**Required Parts:** No parts specified for this service.\n"));
    }

    #[test]
    fn test_parts_report_inlines_the_description() {
        let report = render_equipment_parts(&manual(), &parts());

        assert!(report.starts_with("## Parts List for Equipment 7\n\n**Service Description:** # Service Manual"));
        assert!(report.contains("**Total Parts Needed:** 3"));
    }

    #[test]
    fn test_parts_report_without_parts() {
        let report = render_equipment_parts(&manual(), &[]);
        assert!(report.ends_with("**Required Parts:** No parts specified for this equipment.\n"));
    }

    #[test]
    fn test_equipment_list_flattens_descriptions() {
        let summaries = vec![EquipmentSummary {
            equipment_id: 7,
            service_description: manual().service_description,
            parts_count: 8,
            total_quantity: 13,
        }];

        let report = render_equipment_list(&summaries);

        assert!(report.starts_with("## Available Equipment (1 total)\n"));
        assert!(report.contains(
            "| 7 | 8 | 13 | # Service Manual - Equipment ID: 7 ## Equipment Overview |"
        ));
    }

    #[test]
    fn test_equipment_list_truncates_long_descriptions() {
        let summaries = vec![EquipmentSummary {
            equipment_id: 8,
            service_description: "word ".repeat(30),
            parts_count: 0,
            total_quantity: 0,
        }];

        let report = render_equipment_list(&summaries);

        let row = report.lines().last().unwrap();
        assert!(row.ends_with("... |"));
    }

    #[test]
    fn test_empty_fleet_notice() {
        assert_eq!(render_equipment_list(&[]), "No equipment found in the database.");
    }
}
