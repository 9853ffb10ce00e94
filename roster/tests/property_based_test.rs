use proptest::prelude::*;
use roster::{Catalog, EnumerationType, Member, Registry, Value};
use std::sync::Arc;

fn scalar() -> impl Strategy<Value = roster::Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        (-1.0e6..1.0e6f64).prop_map(Value::Float),
        "[a-z0-9 ]{0,8}".prop_map(Value::from),
        any::<bool>().prop_map(Value::Boolean),
        // Small pool so repeated values are common
        (0i64..3).prop_map(Value::Integer),
    ]
}

fn members() -> impl Strategy<Value = Vec<(String, roster::Value)>> {
    prop::collection::btree_set("[A-Z][a-z]{0,6}", 0..12).prop_flat_map(|names| {
        let count = names.len();
        (
            Just(names.into_iter().collect::<Vec<_>>()),
            prop::collection::vec(scalar(), count),
        )
            .prop_map(|(names, values)| names.into_iter().zip(values).collect())
    })
}

fn declare(entries: &[(String, roster::Value)]) -> EnumerationType {
    let members = entries
        .iter()
        .map(|(name, value)| Member::new(name.clone(), value.clone()))
        .collect();
    EnumerationType::declare("Generated", members).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 100,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_names_keep_declaration_order(entries in members()) {
        let enumeration = declare(&entries);
        let expected: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
        prop_assert_eq!(enumeration.names(), expected);
    }

    #[test]
    fn prop_value_of_returns_declared_value(entries in members()) {
        let enumeration = declare(&entries);
        for (name, value) in &entries {
            prop_assert_eq!(enumeration.value_of(name).unwrap(), value);
            prop_assert!(enumeration.is_defined(name));
        }
    }

    #[test]
    fn prop_name_of_returns_first_strict_match(entries in members()) {
        let enumeration = declare(&entries);
        for (_, value) in &entries {
            let first = entries
                .iter()
                .find(|(_, candidate)| candidate.strictly_equals(value))
                .map(|(name, _)| name.as_str());
            prop_assert_eq!(enumeration.name_of(value).ok(), first);
        }
    }

    #[test]
    fn prop_undeclared_names_are_undefined(entries in members(), probe in "[a-z][a-z0-9_]{0,6}") {
        // Generated member names start with an uppercase letter
        let enumeration = declare(&entries);
        prop_assert!(!enumeration.is_defined(&probe));
        prop_assert!(enumeration.value_of(&probe).is_err());
    }

    #[test]
    fn prop_text_declarations_match_code_declarations(entries in members()) {
        let body = entries
            .iter()
            .map(|(name, value)| format!("    {} = {},\n", name, value.to_literal()))
            .collect::<String>();
        let code = format!("enum Generated {{\n{}}}\n", body);

        let mut catalog = Catalog::new();
        catalog.add_source(&code, "generated.roster").unwrap();
        let parsed = catalog.enumeration("Generated").unwrap();

        let declared = declare(&entries);
        prop_assert_eq!(parsed.entries(), declared.entries());
    }

    #[test]
    fn prop_instances_are_singletons(entries in members()) {
        let enumeration = declare(&entries);
        let registry = Registry::new();
        for (name, _) in &entries {
            let first = registry.instance_of(&enumeration, name).unwrap();
            let second = registry.instance_of(&enumeration, name).unwrap();
            prop_assert!(Arc::ptr_eq(&first, &second));
            prop_assert_eq!(first.name(), name.as_str());
        }
        prop_assert_eq!(registry.cached_count(&enumeration), entries.len());
    }
}
