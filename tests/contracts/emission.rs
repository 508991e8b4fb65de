//! Emission contracts (EMIT-001 through EMIT-003)
//!
//! Writes happen only when content changed, and never in dry-run or check mode.

use crate::common::*;

/// CONTRACT EMIT-001: A second run over unchanged input writes nothing
mod idempotence {
    use super::*;

    #[test]
    fn contract_rerun_writes_nothing() {
        let env = TestEnv::builder().with_billing_domain().build();

        let first = env.run(&["generate", INVOICE, "--json"]);
        assert!(first.success, "{}", first.combined_output());
        assert_eq!(first.events().last().unwrap()["written"], 2);

        let second = env.run(&["generate", INVOICE, "--json"]);
        assert!(second.success);
        let events = second.events();
        assert_eq!(events.last().unwrap()["written"], 0);
        assert!(events[..2].iter().all(|e| e["action"] == "unchanged"));
    }

    #[test]
    fn contract_hash_is_stable_across_runs() {
        let env = TestEnv::builder().with_billing_domain().build();

        let first = env.run(&["generate", INVOICE, "--dry-run", "--json"]).events();
        let second = env.run(&["generate", INVOICE, "--dry-run", "--json"]).events();

        assert_eq!(first[0]["hash"], second[0]["hash"]);
        assert_eq!(first[1]["hash"], second[1]["hash"]);
    }
}

/// CONTRACT EMIT-002: Only changed artifacts are rewritten
mod partial_updates {
    use super::*;

    #[test]
    fn contract_only_the_edited_file_is_updated() {
        let env = TestEnv::builder().with_billing_domain().build();
        assert!(env.run(&["generate", INVOICE]).success);

        env.write(MAPPER_FILE, "// stale\n");

        let result = env.run(&["generate", INVOICE, "--json"]);
        let events = result.events();
        assert_eq!(events[0]["action"], "unchanged");
        assert_eq!(events[0]["written"], false);
        assert_eq!(events[1]["action"], "update");
        assert_eq!(events[1]["written"], true);
        assert!(env.read(MAPPER_FILE).contains("pub struct DbInvoiceMapper;"));
    }
}

/// CONTRACT EMIT-003: Dry run and check never touch the output tree
mod read_only_modes {
    use super::*;

    #[test]
    fn contract_dry_run_and_check_leave_stale_file_alone() {
        let env = TestEnv::builder().with_billing_domain().build();
        env.write(PERSISTENCE_FILE, "// hand edited\n");

        let dry = env.run(&["generate", INVOICE, "--dry-run", "--json"]);
        assert!(dry.success);
        assert_eq!(dry.events()[0]["action"], "update");

        let check = env.run(&["generate", INVOICE, "--check", "--json"]);
        assert!(!check.success);
        assert_eq!(check.events().last().unwrap()["success"], false);

        assert_eq!(env.read(PERSISTENCE_FILE), "// hand edited\n");
        crate::assert_not_generated!(env, MAPPER_FILE);
    }
}
