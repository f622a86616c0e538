//! Architecture contract tests.

mod support;

use support::architecture::{
    find_lines_containing, find_lines_containing_except_files, find_non_export_lines_in_mod_files,
    path_exists, read_relative,
};

#[test]
fn cli_has_no_direct_infrastructure_imports() {
    let hits = find_lines_containing(
        "src/adapter/inbound/cli",
        &["use crate::infrastructure", "crate::infrastructure::"],
    );

    assert!(
        hits.is_empty(),
        "found direct infrastructure imports in inbound CLI adapters: {hits:#?}"
    );
}

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "tokio::",
            "reqwest::",
            "diesel::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn ports_do_not_leak_transport_or_storage_types() {
    let hits = find_lines_containing("src/port", &["reqwest::", "diesel::", "crate::adapter"]);
    assert!(
        hits.is_empty(),
        "ports should only speak domain types: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}

#[test]
fn cli_operator_bridge_uses_operator_name() {
    let source = read_relative("src/adapter/inbound/cli/operator.rs");
    assert!(
        source.contains("pub fn operator() -> &'static dyn OperatorPort"),
        "operator bridge should expose `operator()` capability accessor"
    );
}

#[test]
fn operator_ports_are_transport_agnostic() {
    let hits = find_lines_containing("src/port/inbound/operator", &["std::path::Path", "PathBuf"]);
    assert!(
        hits.is_empty(),
        "operator inbound ports should not expose filesystem path types: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing("src/application", &["crate::adapter::", "crate::infrastructure::"]);
    assert!(
        hits.is_empty(),
        "application layer should not import adapters directly: {hits:#?}"
    );
}

#[test]
fn adapter_wiring_lives_in_bootstrap() {
    let hits = find_lines_containing_except_files(
        "src/infrastructure",
        &["crate::adapter::outbound::"],
        &[
            "src/infrastructure/bootstrap.rs",
            "src/infrastructure/config/settings.rs",
        ],
    );
    assert!(
        hits.is_empty(),
        "outbound adapters should only be constructed in bootstrap: {hits:#?}"
    );
}

#[test]
fn watch_pipeline_is_srp_split() {
    for file in [
        "src/application/watch/cache.rs",
        "src/application/watch/cycle.rs",
        "src/application/watch/enrich.rs",
        "src/application/watch/pacer.rs",
        "src/application/watch/service.rs",
    ] {
        assert!(path_exists(file), "expected watch module `{file}`");
    }

    let cycle = read_relative("src/application/watch/cycle.rs");
    assert!(
        !cycle.contains("fn analyze("),
        "cycle should delegate side analysis to the domain"
    );
    assert!(
        cycle.contains("side::analyze"),
        "cycle should call the domain side analysis"
    );
}

#[test]
fn side_analysis_is_pure_domain_code() {
    let source = read_relative("src/domain/side.rs");
    assert!(
        !source.contains("async fn"),
        "side analysis should be synchronous and I/O free"
    );
}
