//! Naming contracts (NAME-001 through NAME-003)
//!
//! Artifact names and locations are a pure function of the domain path and
//! the naming config, so regenerating never moves or renames files.

use persistgen::config::Config;
use persistgen::domain::value_objects::TypePath;
use std::path::PathBuf;

fn domain(path: &str) -> TypePath {
    TypePath::parse(path).unwrap()
}

/// CONTRACT NAME-001: Artifacts mirror the domain module under infrastructure
mod placement {
    use super::*;

    #[test]
    fn contract_files_land_under_infrastructure_persistence() {
        let naming = Config::default().naming();
        let invoice = domain("crate::domain::billing::Invoice");

        assert_eq!(
            naming.persistence_file(&invoice),
            PathBuf::from("src/infrastructure/billing/persistence/db_invoice.rs")
        );
        assert_eq!(
            naming.mapper_file(&invoice),
            PathBuf::from("src/infrastructure/billing/persistence/db_invoice_mapper.rs")
        );
    }

    #[test]
    fn contract_configured_segments_are_respected() {
        let config: Config = toml::from_str(
            "[paths]\noutput_root = \"gen\"\ndomain_segment = \"core\"\ninfrastructure_segment = \"adapters\"\npersistence_segment = \"\"\n",
        )
        .unwrap();
        let naming = config.naming();
        let user = domain("crate::core::accounts::User");

        assert_eq!(
            naming.persistence_file(&user),
            PathBuf::from("gen/adapters/accounts/db_user.rs")
        );
    }
}

/// CONTRACT NAME-002: Type names are prefix + short name (+ suffix)
mod type_names {
    use super::*;

    #[test]
    fn contract_default_prefix_and_suffix() {
        let naming = Config::default().naming();
        let line = domain("crate::domain::orders::OrderLine");

        assert_eq!(naming.persistence_type(&line), "DbOrderLine");
        assert_eq!(naming.mapper_type(&line), "DbOrderLineMapper");
        assert_eq!(naming.file_stem("DbOrderLineMapper"), "db_order_line_mapper");
    }
}

/// CONTRACT NAME-003: Collection names are the lower-cased name plus `s`, nothing more
mod collections {
    use super::*;

    #[test]
    fn contract_pluralisation_is_naive() {
        let naming = Config::default().naming();

        assert_eq!(naming.collection_name(&domain("crate::domain::User")), "users");
        assert_eq!(naming.collection_name(&domain("crate::domain::Category")), "categorys");
        assert_eq!(naming.collection_name(&domain("crate::domain::Address")), "addresss");
        assert_eq!(naming.collection_name(&domain("crate::domain::OrderLine")), "orderlines");
    }
}
