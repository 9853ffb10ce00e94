#![no_main]

use libfuzzer_sys::fuzz_target;
use roster::{Catalog, Registry};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut catalog = Catalog::new();
        if catalog.add_source(s, "fuzz.roster").is_err() {
            return;
        }

        let registry = Registry::new();
        for enumeration in catalog.iter() {
            for member in enumeration.members() {
                let value = enumeration.value_of(member.name()).unwrap();
                let first = enumeration.name_of(value).unwrap();
                assert_eq!(enumeration.value_of(first).unwrap(), value);

                let a = registry.instance_of(enumeration, member.name()).unwrap();
                let b = registry.instance_of(enumeration, member.name()).unwrap();
                assert!(std::sync::Arc::ptr_eq(&a, &b));
            }
        }
    }
});
