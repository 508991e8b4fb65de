//! Property tests for type path parsing and artifact naming.

use proptest::prelude::*;

use persistgen::config::Config;
use persistgen::domain::value_objects::TypePath;

fn module_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("m_[a-z0-9]{0,6}").unwrap()
}

fn type_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("T[A-Za-z0-9]{0,8}").unwrap()
}

fn valid_path() -> impl Strategy<Value = String> {
    (proptest::collection::vec(module_segment(), 0..=3), type_name()).prop_map(
        |(modules, name)| {
            let mut segments = vec!["crate".to_string(), "domain".to_string()];
            segments.extend(modules);
            segments.push(name);
            segments.join("::")
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,128}") {
        let _ = TypePath::parse(&s);
    }

    /// PROPERTY: Display of a parsed path parses back to the same path.
    #[test]
    fn property_display_reparses(s in valid_path()) {
        let path = TypePath::parse(&s).unwrap();
        prop_assert_eq!(path.to_string(), s.clone());
        prop_assert_eq!(TypePath::parse(&path.to_string()).unwrap(), path);
    }

    /// PROPERTY: Artifact files always live under the output root, end in `.rs`
    /// and never contain the domain segment.
    #[test]
    fn property_artifacts_stay_under_output_root(s in valid_path()) {
        let naming = Config::default().naming();
        let path = TypePath::parse(&s).unwrap();

        for file in [naming.persistence_file(&path), naming.mapper_file(&path)] {
            prop_assert!(file.starts_with("src/infrastructure"));
            prop_assert_eq!(file.extension().and_then(|e| e.to_str()), Some("rs"));
            prop_assert!(!file.components().any(|c| c.as_os_str() == "domain"));
        }
        prop_assert_ne!(naming.persistence_file(&path), naming.mapper_file(&path));
    }

    /// PROPERTY: Collection name is always the lower-cased short name plus `s`.
    #[test]
    fn property_collection_name_is_naive_plural(s in valid_path()) {
        let naming = Config::default().naming();
        let path = TypePath::parse(&s).unwrap();
        let collection = naming.collection_name(&path);

        prop_assert_eq!(collection, format!("{}s", path.short_name().to_lowercase()));
    }
}
