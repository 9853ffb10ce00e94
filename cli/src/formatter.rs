use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use roster::{EnumerationType, MemberTable, Value};
use serde::Serialize;

#[derive(Serialize)]
struct EnumerationReport<'a> {
    enumeration: &'a str,
    source: Option<&'a str>,
    members: &'a MemberTable,
}

#[derive(Serialize)]
struct MemberReport<'a> {
    enumeration: &'a str,
    member: &'a str,
    value: &'a Value,
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Members in declaration order, one row each
    pub fn format_enumeration(&self, enumeration: &EnumerationType) -> String {
        let mut output = String::new();
        output.push_str(&format!("enum {}", enumeration.type_name()));
        if let Some(source) = enumeration.source() {
            output.push_str(&format!(" ({})", source));
        }
        output.push('\n');

        if enumeration.is_empty() {
            output.push_str("  (no members)\n");
            return output;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Member").set_alignment(CellAlignment::Left),
            Cell::new("Value").set_alignment(CellAlignment::Left),
            Cell::new("Kind").set_alignment(CellAlignment::Left),
        ]));

        for (ordinal, member) in enumeration.members().iter().enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(ordinal).set_alignment(CellAlignment::Right),
                Cell::new(member.name()),
                Cell::new(member.value().to_literal()),
                Cell::new(member.value().kind()),
            ]));
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    pub fn format_workspace_summary(
        &self,
        file_count: usize,
        stats: &[(String, usize, String)],
    ) -> String {
        let mut output = format!(
            "Found {} enumeration(s) in {} file(s)\n",
            stats.len(),
            file_count
        );

        if stats.is_empty() {
            return output;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Enumeration").set_alignment(CellAlignment::Left),
            Cell::new("Members").set_alignment(CellAlignment::Right),
            Cell::new("Source").set_alignment(CellAlignment::Left),
        ]));

        for (name, members, source) in stats {
            table.add_row(Row::from(vec![
                Cell::new(name),
                Cell::new(members).set_alignment(CellAlignment::Right),
                Cell::new(source),
            ]));
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    pub fn enumeration_json(&self, enumeration: &EnumerationType) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&EnumerationReport {
            enumeration: enumeration.type_name(),
            source: enumeration.source(),
            members: enumeration.members(),
        })
    }

    pub fn member_json(
        &self,
        enumeration: &str,
        member: &str,
        value: &Value,
    ) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&MemberReport {
            enumeration,
            member,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::{EnumerationType, Member};

    fn animal() -> EnumerationType {
        EnumerationType::declare("Animal", vec![Member::new("Horse", 0), Member::new("Dog", "d")])
            .unwrap()
    }

    #[test]
    fn test_format_enumeration_lists_members_in_order() {
        let output = Formatter::default().format_enumeration(&animal());
        assert!(output.starts_with("enum Animal\n"));
        let horse = output.find("Horse").unwrap();
        let dog = output.find("Dog").unwrap();
        assert!(horse < dog);
        assert!(output.contains("\"d\""));
        assert!(output.contains("integer"));
        assert!(output.contains("text"));
    }

    #[test]
    fn test_format_empty_enumeration() {
        let empty = EnumerationType::declare("Nothing", vec![]).unwrap();
        let output = Formatter::default().format_enumeration(&empty);
        assert!(output.contains("(no members)"));
    }

    #[test]
    fn test_member_json() {
        let json = Formatter::default()
            .member_json("Animal", "Horse", &Value::Integer(0))
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["member"], "Horse");
        assert_eq!(parsed["value"]["kind"], "integer");
        assert_eq!(parsed["value"]["value"], 0);
    }

    #[test]
    fn test_enumeration_json_keeps_order() {
        let json = Formatter::default().enumeration_json(&animal()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["enumeration"], "Animal");
        assert_eq!(parsed["members"][0]["name"], "Horse");
        assert_eq!(parsed["members"][1]["name"], "Dog");
        assert_eq!(parsed["members"][1]["value"]["value"], "d");
    }
}
