//! Property tests over randomly shaped scalar-only domain types.

use proptest::prelude::*;

use crate::common::*;
use persistgen::domain::value_objects::{TypePath, PRIMITIVE_SCALARS};

const TYPE: &str = "crate::domain::random::Thing";

fn field() -> impl Strategy<Value = (String, String)> {
    let name = proptest::string::string_regex("f_[a-z0-9]{0,8}").unwrap();
    let scalar = proptest::sample::select(PRIMITIVE_SCALARS.to_vec());
    (name, scalar, any::<bool>()).prop_map(|(name, ty, optional)| {
        let ty = if optional {
            format!("Option<{}>", ty)
        } else {
            ty.to_string()
        };
        (name, ty)
    })
}

fn fields() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec(field(), 1..8).prop_map(|mut fields| {
        let mut seen = std::collections::BTreeSet::new();
        fields.retain(|(name, _)| seen.insert(name.clone()));
        fields
    })
}

fn thing(fields: &[(String, String)]) -> String {
    let mut ty = SchemaType::new(TYPE);
    for (name, declared) in fields {
        ty = ty.field(name, declared);
    }
    schema(&[ty.ctor_from_fields()])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Scalar fields map one-to-one onto columns, in order, with
    /// nullability following `Option`.
    #[test]
    fn property_scalar_fields_are_columns(fields in fields()) {
        let analysis = analyze(&thing(&fields), TYPE).unwrap();

        prop_assert_eq!(analysis.model.columns.len(), fields.len());
        for ((name, declared), column) in fields.iter().zip(&analysis.model.columns) {
            prop_assert_eq!(&column.name, name);
            prop_assert_eq!(column.nullable, declared.starts_with("Option<"));
            prop_assert!(!column.primary_key);
        }
    }

    /// PROPERTY: Rendering is deterministic and always yields parseable Rust.
    #[test]
    fn property_rendered_artifacts_parse(fields in fields()) {
        let use_case = schema_use_case(&thing(&fields));
        let path = TypePath::parse(TYPE).unwrap();

        let first = use_case.render(&use_case.analyze(&path).unwrap());
        let second = use_case.render(&use_case.analyze(&path).unwrap());
        prop_assert_eq!(&first, &second);

        for file in &first {
            prop_assert!(syn::parse_file(file.content()).is_ok(), "{}", file.content());
        }
    }
}
