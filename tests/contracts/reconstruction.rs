//! Reconstruction contracts (REC-001 through REC-004)
//!
//! `to_domain` must be able to rebuild the domain value from the columns
//! `from_domain` wrote, through constructors only.

use crate::common::*;
use persistgen::domain::entities::{ConstructorArg, DomainReturn};

const ORDER: &str = "crate::domain::shop::Order";
const MONEY: &str = "crate::domain::shop::Money";

fn money() -> SchemaType {
    SchemaType::new(MONEY)
        .field("amount", "i64")
        .field("currency", "String")
        .ctor_from_fields()
}

/// CONTRACT REC-001: Every column written by from_domain is read back
mod coverage {
    use super::*;

    #[test]
    fn contract_every_column_is_assigned_and_consumed() {
        let text = schema(&[
            SchemaType::new(ORDER)
                .field("id", "i64")
                .field("price", "Money")
                .field("note", "String")
                .ctor_from_fields(),
            money(),
        ]);

        let analysis = analyze(&text, ORDER).unwrap();
        let assigned: Vec<&str> = analysis
            .plan
            .assignments
            .iter()
            .map(|a| a.column.as_str())
            .collect();
        let columns: Vec<&str> = analysis.model.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(assigned, columns);

        let mut consumed = Vec::new();
        for arg in &analysis.plan.call.args {
            match arg {
                ConstructorArg::Column { column } => consumed.push(column.clone()),
                ConstructorArg::Compound { call, .. } => {
                    for inner in &call.args {
                        if let ConstructorArg::Column { column } = inner {
                            consumed.push(column.clone());
                        }
                    }
                }
            }
        }
        consumed.sort();
        let mut expected: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        expected.sort();
        assert_eq!(consumed, expected);
    }

    #[test]
    fn contract_compound_args_follow_recorded_order() {
        let text = schema(&[
            SchemaType::new(ORDER)
                .field("id", "i64")
                .field("price", "Money")
                .ctor_from_fields(),
            money(),
        ]);

        let analysis = analyze(&text, ORDER).unwrap();
        let recorded = analysis
            .context
            .mapping
            .iter()
            .next()
            .map(|(_, columns)| columns.to_vec())
            .unwrap();
        assert_eq!(recorded, ["price_amount", "price_currency"]);
    }
}

/// CONTRACT REC-002: to_domain is fallible exactly when a constructor is
mod fallibility {
    use super::*;

    #[test]
    fn contract_infallible_constructors_return_value() {
        let text = schema(&[
            SchemaType::new(ORDER)
                .field("id", "i64")
                .field("price", "Money")
                .ctor_from_fields(),
            money(),
        ]);

        let analysis = analyze(&text, ORDER).unwrap();
        assert_eq!(analysis.plan.returns, DomainReturn::Value);
    }

    #[test]
    fn contract_fallible_domain_constructor_is_propagated() {
        let text = schema(&[SchemaType::new(ORDER)
            .field("id", "i64")
            .ctor(&[("id", "i64")], Some("Result<Self, OrderError>"))]);

        let analysis = analyze(&text, ORDER).unwrap();
        assert!(matches!(analysis.plan.returns, DomainReturn::Constructor(_)));
        let ret = analysis.plan.returns.fallible_return().unwrap();
        assert_eq!(ret.render("Order"), "Result<Order, OrderError>");
    }

    #[test]
    fn contract_fallible_compound_wraps_domain_value() {
        let text = schema(&[
            SchemaType::new(ORDER)
                .field("id", "i64")
                .field("price", "Money")
                .ctor_from_fields(),
            SchemaType::new(MONEY)
                .field("amount", "i64")
                .field("currency", "String")
                .ctor(
                    &[("amount", "i64"), ("currency", "String")],
                    Some("Result<Self, MoneyError>"),
                ),
        ]);

        let analysis = analyze(&text, ORDER).unwrap();
        assert!(matches!(analysis.plan.returns, DomainReturn::Wrapped(_)));
    }
}

/// CONTRACT REC-003: Constructor parameters must be satisfiable
mod constructor_binding {
    use super::*;

    #[test]
    fn contract_missing_domain_constructor() {
        let text = schema(&[SchemaType::new(ORDER).field("id", "i64")]);

        let err = analyze(&text, ORDER).unwrap_err();
        assert_eq!(err.kind(), "missing_constructor");
    }

    #[test]
    fn contract_unknown_parameter_is_unmapped() {
        let text = schema(&[SchemaType::new(ORDER)
            .field("id", "i64")
            .ctor(&[("id", "i64"), ("created_at", "i64")], None)]);

        let err = analyze(&text, ORDER).unwrap_err();
        assert_eq!(err.kind(), "unmapped_parameter");
        assert!(err.to_string().contains("created_at"));
    }

    #[test]
    fn contract_compound_arity_must_match_columns() {
        let text = schema(&[
            SchemaType::new(ORDER)
                .field("id", "i64")
                .field("price", "Money")
                .ctor_from_fields(),
            SchemaType::new(MONEY)
                .field("amount", "i64")
                .field("currency", "String")
                .ctor(&[("amount", "i64")], None),
        ]);

        let err = analyze(&text, ORDER).unwrap_err();
        assert_eq!(err.kind(), "constructor_arity");
    }
}

/// CONTRACT REC-004: Accessors win over direct field reads when they match
mod accessors {
    use super::*;
    use persistgen::domain::entities::Access;

    #[test]
    fn contract_matching_accessor_is_used() {
        let text = schema(&[SchemaType::new(ORDER)
            .field("id", "i64")
            .field("paid", "bool")
            .method("is_paid", "bool")
            .ctor_from_fields()]);

        let analysis = analyze(&text, ORDER).unwrap();
        let paid = &analysis.plan.assignments[1];
        assert_eq!(paid.outer, Access::Method("is_paid".to_string()));
        let id = &analysis.plan.assignments[0];
        assert_eq!(id.outer, Access::Field("id".to_string()));
    }
}
