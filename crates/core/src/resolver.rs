//! Keyword-driven lookup of hospital facts
//!
//! A query is lower-cased and tested against an ordered rule table. Every
//! rule whose trigger occurs as a substring contributes its lines, in table
//! order. Matching is plain substring containment: "servicesXYZ" still
//! matches "service".

use std::collections::HashSet;

use crate::knowledge::{HospitalRecord, Scalar};

/// Returned when no rule matched the query
pub const NO_MATCH_REPLY: &str = "I'm sorry, I couldn't find that information.";

const NOT_AVAILABLE: &str = "Not available";
const NO_DESCRIPTION: &str = "No description available";
const NO_SERVICES: &str = "No services listed";

/// What part of the knowledge base a keyword rule renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Services,
    Contact,
    Location,
    Values,
    Insurance,
    Payment,
    Facilities,
    VisitingHours,
}

/// A lookup rule
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Render the topic when any keyword occurs in the lower-cased query
    Keywords(&'static [&'static str], Topic),
    /// Render each department whose name occurs in the lower-cased query
    DepartmentName,
}

/// Evaluation order is part of the output contract.
const RULES: &[Rule] = &[
    Rule::Keywords(&["service"], Topic::Services),
    Rule::DepartmentName,
    Rule::Keywords(&["phone", "contact"], Topic::Contact),
    Rule::Keywords(&["location"], Topic::Location),
    Rule::Keywords(&["values", "mission"], Topic::Values),
    Rule::Keywords(&["insurance", "nhif"], Topic::Insurance),
    Rule::Keywords(&["payment"], Topic::Payment),
    Rule::Keywords(&["facility", "facilities"], Topic::Facilities),
    Rule::Keywords(&["visiting", "visiting hours"], Topic::VisitingHours),
];

/// Resolve a query into newline-joined facts, or [`NO_MATCH_REPLY`]
pub fn resolve(record: &HospitalRecord, query: &str) -> String {
    let lines = resolve_lines(record, query);
    if lines.is_empty() {
        NO_MATCH_REPLY.to_string()
    } else {
        lines.join("\n")
    }
}

/// Resolve a query into the individual fact lines, in rule order
pub fn resolve_lines(record: &HospitalRecord, query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    let mut lines = Vec::new();

    for rule in RULES {
        match *rule {
            Rule::Keywords(keywords, topic) => {
                if keywords.iter().any(|k| query.contains(k)) {
                    render(topic, record, &mut lines);
                }
            }
            Rule::DepartmentName => render_departments(record, &query, &mut lines),
        }
    }

    lines
}

fn render(topic: Topic, record: &HospitalRecord, lines: &mut Vec<String>) {
    match topic {
        Topic::Services => {
            let mut seen = HashSet::new();
            let services: Vec<&str> = record
                .departments
                .values()
                .flat_map(|d| d.services.iter())
                .map(String::as_str)
                .filter(|s| seen.insert(*s))
                .collect();
            if !services.is_empty() {
                lines.push(format!(
                    "We offer a range of medical services including: {}.",
                    services.join(", ")
                ));
            }
        }
        Topic::Contact => {
            let contact = &record.hospital_info.contact;
            lines.push(format!("📞 General Contact: {}", or_na(&contact.general)));
            lines.push(format!("🚑 Emergency: {}", or_na(&contact.emergency)));
            lines.push(format!("🚗 Ambulance: {}", or_na(&contact.ambulance)));
        }
        Topic::Location => {
            lines.push(format!(
                "📍 Hospital Location: {}",
                or_na(&record.hospital_info.location)
            ));
        }
        Topic::Values => {
            lines.push(format!(
                "🏥 Core Values: {}",
                join_or(&record.hospital_info.values, NOT_AVAILABLE)
            ));
        }
        Topic::Insurance => {
            lines.push(format!(
                "✅ Accepted Insurance: {}",
                join_or(&record.insurance_partners, NOT_AVAILABLE)
            ));
        }
        Topic::Payment => {
            lines.push(format!(
                "💳 Payment Methods: {}",
                join_or(&record.payment_methods, NOT_AVAILABLE)
            ));
        }
        Topic::Facilities => {
            let facilities = &record.facilities;
            let scalar = |v: &Option<Scalar>| {
                v.as_ref()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
            };
            lines.push(format!("🛏 Beds: {}", scalar(&facilities.beds)));
            lines.push(format!("🚑 Ambulances: {}", scalar(&facilities.ambulances)));
            lines.push(format!("💊 Pharmacy: {}", or_na(&facilities.pharmacy)));
            lines.push(format!("📡 Radiology: {}", facilities.radiology.join(", ")));
        }
        Topic::VisitingHours => {
            let visiting = &record.visiting_hours;
            lines.push(format!(
                "⏰ Visiting Hours: Morning - {}, Evening - {}.",
                or_na(&visiting.morning),
                or_na(&visiting.evening)
            ));
            lines.push(format!("📝 Rules: {}", visiting.rules.join(", ")));
        }
    }
}

fn render_departments(record: &HospitalRecord, query: &str, lines: &mut Vec<String>) {
    for (name, department) in &record.departments {
        if !query.contains(&name.to_lowercase()) {
            continue;
        }
        lines.push(format!(
            "Department of {}: {}.",
            capitalize(name),
            department.description.as_deref().unwrap_or(NO_DESCRIPTION)
        ));
        lines.push(format!(
            "Services offered: {}.",
            join_or(&department.services, NO_SERVICES)
        ));
    }
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn join_or(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join(", ")
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Department;

    fn sample() -> HospitalRecord {
        HospitalRecord::from_json_str(
            r#"{
                "departments": {
                    "Cardiology": {"description": "Heart care", "services": ["ECG", "Bypass Surgery"]},
                    "Pediatrics": {"description": "Child care", "services": ["Immunization", "ECG"]},
                    "Radiology": {"description": "Imaging"}
                },
                "hospital_info": {
                    "contact": {"general": "+254 700 000000", "emergency": "999"},
                    "location": "Nakuru Town, Kenya",
                    "values": ["Integrity", "Compassion"]
                },
                "insurance_partners": ["NHIF", "AAR"],
                "payment_methods": ["Cash", "M-Pesa"],
                "facilities": {"beds": 500, "ambulances": "12", "radiology": ["X-Ray", "CT Scan"]},
                "visiting_hours": {"morning": "10am-12pm", "evening": "4pm-6pm", "rules": ["Max 2 visitors"]}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn cardiology_services_query() {
        let out = resolve(&sample(), "Tell me about cardiology services");
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("We offer a range of medical services including: "));
        assert_eq!(lines[1], "Department of Cardiology: Heart care.");
        assert_eq!(lines[2], "Services offered: ECG, Bypass Surgery.");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn service_summary_is_deduplicated_union() {
        let lines = resolve_lines(&sample(), "what SERVICES do you have");
        assert_eq!(lines.len(), 1);

        let listed = lines[0]
            .strip_prefix("We offer a range of medical services including: ")
            .and_then(|s| s.strip_suffix('.'))
            .unwrap();
        let mut got: Vec<&str> = listed.split(", ").collect();
        got.sort_unstable();
        assert_eq!(got, vec!["Bypass Surgery", "ECG", "Immunization"]);
    }

    #[test]
    fn service_matches_as_substring() {
        let lines = resolve_lines(&sample(), "servicesXYZ");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn department_match_is_case_insensitive() {
        let lines = resolve_lines(&sample(), "PEDIATRICS please");
        assert_eq!(
            lines,
            vec![
                "Department of Pediatrics: Child care.",
                "Services offered: Immunization, ECG.",
            ]
        );
    }

    #[test]
    fn department_without_services_uses_placeholder() {
        let lines = resolve_lines(&sample(), "radiology");
        assert_eq!(
            lines,
            vec!["Department of Radiology: Imaging.", "Services offered: No services listed."]
        );
    }

    #[test]
    fn department_name_is_capitalized() {
        let mut record = HospitalRecord::default();
        record.departments.insert(
            "general SURGERY".to_string(),
            Department {
                description: None,
                services: vec![],
            },
        );
        let lines = resolve_lines(&record, "general surgery");
        assert_eq!(
            lines[0],
            "Department of General surgery: No description available."
        );
    }

    #[test]
    fn departments_follow_store_order() {
        let lines = resolve_lines(&sample(), "pediatrics or cardiology");
        assert_eq!(lines[0], "Department of Cardiology: Heart care.");
        assert_eq!(lines[2], "Department of Pediatrics: Child care.");
    }

    #[test]
    fn no_match_returns_fallback() {
        assert_eq!(resolve(&sample(), "hello there"), NO_MATCH_REPLY);
        assert_eq!(resolve(&sample(), ""), NO_MATCH_REPLY);
    }

    #[test]
    fn multiple_groups_follow_rule_order() {
        let out = resolve(&sample(), "location and contact");
        assert_eq!(
            out,
            "📞 General Contact: +254 700 000000\n\
             🚑 Emergency: 999\n\
             🚗 Ambulance: Not available\n\
             📍 Hospital Location: Nakuru Town, Kenya"
        );
    }

    #[test]
    fn visiting_hours_scenario() {
        let lines = resolve_lines(&sample(), "What is the visiting hours");
        assert_eq!(
            lines,
            vec![
                "⏰ Visiting Hours: Morning - 10am-12pm, Evening - 4pm-6pm.",
                "📝 Rules: Max 2 visitors",
            ]
        );
    }

    #[test]
    fn insurance_matches_nhif_in_any_case() {
        let expected = vec!["✅ Accepted Insurance: NHIF, AAR"];
        assert_eq!(resolve_lines(&sample(), "Do you take NHIF?"), expected);
        assert_eq!(resolve_lines(&sample(), "insurance"), expected);
    }

    #[test]
    fn values_payment_and_facilities() {
        let lines = resolve_lines(&sample(), "mission, payment, facilities");
        assert_eq!(
            lines,
            vec![
                "🏥 Core Values: Integrity, Compassion",
                "💳 Payment Methods: Cash, M-Pesa",
                "🛏 Beds: 500",
                "🚑 Ambulances: 12",
                "💊 Pharmacy: Not available",
                "📡 Radiology: X-Ray, CT Scan",
            ]
        );
    }

    #[test]
    fn empty_store_degrades_to_defaults() {
        let record = HospitalRecord::default();
        let lines = resolve_lines(
            &record,
            "service contact location values insurance payment facility visiting",
        );
        assert_eq!(
            lines,
            vec![
                "📞 General Contact: Not available",
                "🚑 Emergency: Not available",
                "🚗 Ambulance: Not available",
                "📍 Hospital Location: Not available",
                "🏥 Core Values: Not available",
                "✅ Accepted Insurance: Not available",
                "💳 Payment Methods: Not available",
                "🛏 Beds: Not available",
                "🚑 Ambulances: Not available",
                "💊 Pharmacy: Not available",
                "📡 Radiology: ",
                "⏰ Visiting Hours: Morning - Not available, Evening - Not available.",
                "📝 Rules: ",
            ]
        );
    }

    #[test]
    fn empty_lists_render_not_available() {
        let record = HospitalRecord::from_json_str(
            r#"{"hospital_info": {"values": []}, "insurance_partners": [], "payment_methods": []}"#,
        )
        .unwrap();
        let lines = resolve_lines(&record, "values insurance payment");
        assert_eq!(
            lines,
            vec![
                "🏥 Core Values: Not available",
                "✅ Accepted Insurance: Not available",
                "💳 Payment Methods: Not available",
            ]
        );
    }

    #[test]
    fn fractional_bed_count_renders_as_written() {
        let mut record = HospitalRecord::default();
        record.facilities.beds = Some(Scalar::Number(serde_json::Number::from_f64(12.5).unwrap()));
        let lines = resolve_lines(&record, "facility");
        assert_eq!(lines[0], "🛏 Beds: 12.5");
    }
}
