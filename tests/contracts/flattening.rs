//! Flattening contracts (FLAT-001 through FLAT-005)
//!
//! Every domain field ends up as columns on exactly one path: scalars map
//! to one column, wrappers collapse into one column, composites spread into
//! `field_member` columns. Anything deeper is rejected before a byte is written.

use crate::common::*;

const P: &str = "crate::domain::shop";

fn path(name: &str) -> String {
    format!("{}::{}", P, name)
}

fn column_names(schema_text: &str, root: &str) -> Vec<String> {
    analyze(schema_text, &path(root))
        .expect("analysis succeeds")
        .model
        .columns
        .iter()
        .map(|c| c.name.clone())
        .collect()
}

/// CONTRACT FLAT-001: One scalar field, one column, same name and order
mod scalars {
    use super::*;

    #[test]
    fn contract_scalar_fields_keep_order() {
        let text = schema(&[SchemaType::new(&path("Order"))
            .field("id", "i64")
            .field("note", "String")
            .field("quantity", "u32")
            .field("shipped", "bool")
            .ctor_from_fields()]);

        assert_eq!(column_names(&text, "Order"), ["id", "note", "quantity", "shipped"]);
    }

    #[test]
    fn contract_optional_scalar_is_nullable() {
        let text = schema(&[SchemaType::new(&path("Order"))
            .field("id", "i64")
            .field("note", "Option<String>")
            .ctor_from_fields()]);

        let analysis = analyze(&text, &path("Order")).unwrap();
        let note = analysis.model.column("note").unwrap();
        assert!(note.nullable);
        assert_eq!(note.field_type(), "Option<String>");
    }
}

/// CONTRACT FLAT-002: A single-value wrapper becomes one column named after the field
mod wrappers {
    use super::*;

    #[test]
    fn contract_wrapper_collapses_to_field_name() {
        let text = schema(&[
            SchemaType::new(&path("Order"))
                .field("id", "i64")
                .field("sku", "Sku")
                .ctor_from_fields(),
            SchemaType::new(&path("Sku"))
                .field("code", "String")
                .ctor_from_fields(),
        ]);

        assert_eq!(column_names(&text, "Order"), ["id", "sku"]);
    }

    #[test]
    fn contract_optional_wrapper_is_nullable_column() {
        let text = schema(&[
            SchemaType::new(&path("Order"))
                .field("id", "i64")
                .field("sku", "Option<Sku>")
                .ctor_from_fields(),
            SchemaType::new(&path("Sku"))
                .field("code", "String")
                .ctor_from_fields(),
        ]);

        let analysis = analyze(&text, &path("Order")).unwrap();
        assert!(analysis.model.column("sku").unwrap().nullable);
    }
}

/// CONTRACT FLAT-003: A composite spreads into `field_member` columns
mod composites {
    use super::*;

    #[test]
    fn contract_composite_members_are_prefixed() {
        let text = schema(&[
            SchemaType::new(&path("Order"))
                .field("id", "i64")
                .field("price", "Money")
                .ctor_from_fields(),
            SchemaType::new(&path("Money"))
                .field("amount", "i64")
                .field("currency", "String")
                .ctor_from_fields(),
        ]);

        assert_eq!(
            column_names(&text, "Order"),
            ["id", "price_amount", "price_currency"]
        );
    }

    #[test]
    fn contract_optional_composite_is_rejected() {
        let text = schema(&[
            SchemaType::new(&path("Order"))
                .field("id", "i64")
                .field("price", "Option<Money>")
                .ctor_from_fields(),
            SchemaType::new(&path("Money"))
                .field("amount", "i64")
                .field("currency", "String")
                .ctor_from_fields(),
        ]);

        let err = analyze(&text, &path("Order")).unwrap_err();
        assert_eq!(err.kind(), "nullable_composite");
    }
}

/// CONTRACT FLAT-004: Compounds inside compounds are rejected
mod nesting {
    use super::*;

    #[test]
    fn contract_nested_compound_is_rejected() {
        let text = schema(&[
            SchemaType::new(&path("Order"))
                .field("id", "i64")
                .field("shipping", "Shipping")
                .ctor_from_fields(),
            SchemaType::new(&path("Shipping"))
                .field("carrier", "String")
                .field("price", "Money")
                .ctor_from_fields(),
            SchemaType::new(&path("Money"))
                .field("amount", "i64")
                .field("currency", "String")
                .ctor_from_fields(),
        ]);

        let err = analyze(&text, &path("Order")).unwrap_err();
        assert_eq!(err.kind(), "unsupported_nesting");
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn contract_empty_compound_is_rejected() {
        let text = schema(&[
            SchemaType::new(&path("Order"))
                .field("id", "i64")
                .field("marker", "Marker")
                .ctor_from_fields(),
            SchemaType::new(&path("Marker")).ctor_from_fields(),
        ]);

        let err = analyze(&text, &path("Order")).unwrap_err();
        assert_eq!(err.kind(), "empty_compound");
    }

    #[test]
    fn contract_shared_compound_type_is_rejected() {
        let text = schema(&[
            SchemaType::new(&path("Order"))
                .field("id", "i64")
                .field("net", "Money")
                .field("gross", "Money")
                .ctor_from_fields(),
            SchemaType::new(&path("Money"))
                .field("amount", "i64")
                .field("currency", "String")
                .ctor_from_fields(),
        ]);

        let err = analyze(&text, &path("Order")).unwrap_err();
        assert_eq!(err.kind(), "ambiguous_compound");
    }
}

/// CONTRACT FLAT-005: Only the column named `id` is the primary key
mod primary_key {
    use super::*;

    #[test]
    fn contract_id_column_is_primary_key() {
        let text = schema(&[SchemaType::new(&path("Order"))
            .field("order_id", "i64")
            .field("id", "i64")
            .ctor_from_fields()]);

        let analysis = analyze(&text, &path("Order")).unwrap();
        let keys: Vec<&str> = analysis
            .model
            .columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(keys, ["id"]);
    }

    #[test]
    fn contract_no_id_means_no_primary_key() {
        let text = schema(&[SchemaType::new(&path("Order"))
            .field("code", "String")
            .ctor_from_fields()]);

        let analysis = analyze(&text, &path("Order")).unwrap();
        assert!(analysis.model.primary_key().is_none());
    }
}
