//! Phase 4 tests: Snapshot files, configuration, and CLI commands.

use std::io::Write;

use lexigraph::cli::commands;
use lexigraph::config::{load_engine_config, EngineConfig, RootMultiplicity, TraversalConfig};
use lexigraph::engine::QueryEngine;
use lexigraph::format::{SnapshotReader, SnapshotWriter};
use lexigraph::graph::{GraphBuilder, LexicalGraph, Uniqueness};
use lexigraph::types::{ErrorKind, LexError, MeaningType, Relation};

// ==================== Helpers ====================

fn sample_graph() -> LexicalGraph {
    let mut b = GraphBuilder::new();
    let bank = b.add_lexeme("bank");
    let banks = b.add_lexeme("banks");
    let root = b.add_root(MeaningType::Category);
    b.attach_root(bank, root);
    b.attach_root(banks, root);
    let sense = b.add_node(MeaningType::Sense, "financial institution");
    let definition = b.add_node(MeaningType::Definition, "a place that keeps money");
    b.link_meaning(root, sense).link_meaning(sense, definition);
    b.build().unwrap()
}

fn write_sample(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("graph.json");
    SnapshotWriter::new()
        .write_to_file(&sample_graph(), &path)
        .unwrap();
    path
}

// ==================== Snapshot File Tests ====================

#[test]
fn test_snapshot_file_round_trip_preserves_queries() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(&dir);

    let original = sample_graph();
    let loaded = SnapshotReader::read_from_file(&path).unwrap();
    assert_eq!(loaded.lexeme_count(), original.lexeme_count());
    assert_eq!(loaded.meaning_count(), original.meaning_count());
    assert_eq!(loaded.edges(), original.edges());

    let engine = QueryEngine::new();
    for word in ["bank", "bank%", "nothing"] {
        assert_eq!(
            engine
                .resolve_meanings(&loaded, word, MeaningType::Sense)
                .unwrap(),
            engine
                .resolve_meanings(&original, word, MeaningType::Sense)
                .unwrap()
        );
    }
}

#[test]
fn test_pretty_writer_is_readable() {
    let mut buf = Vec::new();
    SnapshotWriter::pretty()
        .write_to(&sample_graph(), &mut buf)
        .unwrap();
    let text = String::from_utf8(buf.clone()).unwrap();
    assert!(text.contains('\n'));
    let graph = SnapshotReader::read_from(&mut buf.as_slice()).unwrap();
    assert_eq!(graph.lexeme_count(), 2);
}

#[test]
fn test_read_handwritten_snapshot() {
    let json = r#"{
        "lexemes": [{"id": 1, "form": "spring"}, {"id": 2, "form": "spring"}],
        "meanings": [
            {"id": 10, "type": "category", "parent_id": 0},
            {"id": 11, "type": "category"},
            {"id": 12, "type": "category"},
            {"id": 13, "type": "category"},
            {"id": 14, "type": "category"},
            {"id": 20, "type": "sense", "internal_rep": "season"}
        ],
        "edges": [
            {"source": 10, "target": 11, "relation": "meaning_root"},
            {"source": 11, "target": 12, "relation": "meaning_root"},
            {"source": 12, "target": 1, "relation": "meaning_root"},
            {"source": 10, "target": 13, "relation": "meaning_root"},
            {"source": 13, "target": 14, "relation": "meaning_root"},
            {"source": 14, "target": 2, "relation": "meaning_root"},
            {"source": 10, "target": 20, "relation": "meaning_graph"}
        ]
    }"#;
    let graph = SnapshotReader::read_from(&mut json.as_bytes()).unwrap();
    assert_eq!(graph.relation_count(Relation::MeaningRoot), 6);
    assert!(graph.meaning(10).unwrap().is_root());
    assert!(!graph.meaning(11).unwrap().is_root());

    let result = QueryEngine::new()
        .resolve_meanings(&graph, "spring", MeaningType::Sense)
        .unwrap();
    assert_eq!(result, vec!["season".to_string(), "season".to_string()]);
}

#[test]
fn test_missing_sections_default_to_empty() {
    let graph = SnapshotReader::read_from(&mut r#"{"lexemes": []}"#.as_bytes()).unwrap();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_invalid_json_is_data_error() {
    let err = SnapshotReader::read_from(&mut "{not json".as_bytes())
        .err()
        .unwrap();
    assert!(matches!(err, LexError::Json(_)));
    assert_eq!(err.kind(), ErrorKind::Data);
}

#[test]
fn test_unknown_meaning_type_is_rejected() {
    let json = r#"{"meanings": [{"id": 1, "type": "etymology"}]}"#;
    let err = SnapshotReader::read_from(&mut json.as_bytes()).err().unwrap();
    assert!(matches!(err, LexError::Json(_)));
}

#[test]
fn test_dangling_edge_is_rejected() {
    let json = r#"{
        "lexemes": [{"id": 1, "form": "a"}],
        "edges": [{"source": 9, "target": 1, "relation": "meaning_root"}]
    }"#;
    let err = SnapshotReader::read_from(&mut json.as_bytes()).err().unwrap();
    assert!(matches!(err, LexError::VertexNotFound(9)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SnapshotReader::read_from_file(&dir.path().join("absent.json"))
        .err()
        .unwrap();
    assert!(matches!(err, LexError::Io(_)));
}

// ==================== Config Tests ====================

#[test]
fn test_default_config_matches_constants() {
    let config = EngineConfig::default();
    assert_eq!(config.traversal.root_hops, 3);
    assert_eq!(config.traversal.max_meaning_depth, 10);
    assert_eq!(config.traversal.root_sentinel, 0);
    assert_eq!(config.traversal.root_uniqueness, Uniqueness::PathEdges);
    assert_eq!(config.traversal.uniqueness, Uniqueness::PathVertices);
    assert_eq!(config.traversal.root_multiplicity, RootMultiplicity::PerPath);
    assert!(config.fuzzy.use_metric_index);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config = EngineConfig::from_toml(
        r#"
[traversal]
uniqueness = "path_edges"
root_multiplicity = "distinct"

[fuzzy]
use_metric_index = false
"#,
    )
    .unwrap();
    assert_eq!(config.traversal.uniqueness, Uniqueness::PathEdges);
    assert_eq!(config.traversal.root_multiplicity, RootMultiplicity::Distinct);
    assert_eq!(config.traversal.root_hops, 3);
    assert_eq!(config.traversal.max_meaning_depth, 10);
    assert!(!config.fuzzy.use_metric_index);

    assert_eq!(EngineConfig::from_toml("").unwrap(), EngineConfig::default());
}

#[test]
fn test_config_validation() {
    for bad in [
        "[traversal]\nroot_hops = 0",
        "[traversal]\nmax_meaning_depth = 65",
        "[traversal]\nuniqueness = \"sometimes\"",
        "[traversal]\nroot_hops = 65",
        "[traversal]\nuniqueness = \"none\"\nmax_meaning_depth = 17",
        "[traversal]\nroot_uniqueness = \"none\"\nroot_hops = 17",
        "not = [valid",
    ] {
        let err = EngineConfig::from_toml(bad).unwrap_err();
        assert!(matches!(err, LexError::Config(_)), "accepted {:?}", bad);
    }
    assert!(EngineConfig::from_toml("[traversal]\nmax_meaning_depth = 64").is_ok());
    assert!(
        EngineConfig::from_toml("[traversal]\nuniqueness = \"none\"\nmax_meaning_depth = 16")
            .is_ok()
    );
    // The cap follows the phase's own uniqueness rule.
    assert!(
        EngineConfig::from_toml("[traversal]\nroot_uniqueness = \"none\"\nmax_meaning_depth = 40")
            .is_ok()
    );
}

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.toml");
    let config = EngineConfig {
        traversal: TraversalConfig {
            max_meaning_depth: 4,
            uniqueness: Uniqueness::None,
            ..TraversalConfig::default()
        },
        ..EngineConfig::default()
    };
    config.save(&path).unwrap();
    assert_eq!(EngineConfig::load(&path).unwrap(), config);
    assert_eq!(load_engine_config(Some(path.as_path())).unwrap(), config);
}

#[test]
fn test_explicit_missing_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_engine_config(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(matches!(err, LexError::Config(_)));
}

// ==================== CLI Command Tests ====================

#[test]
fn test_cli_commands_run_against_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(&dir);
    let engine = QueryEngine::new();

    for json in [false, true] {
        commands::cmd_info(&path, json).unwrap();
        commands::cmd_get(&path, 1, json).unwrap();
        commands::cmd_fuzzy(&path, &engine, "bank", 1, json).unwrap();
        commands::cmd_pattern(&path, &engine, "ban%", json).unwrap();
        commands::cmd_roots(&path, &engine, "bank", json).unwrap();
        commands::cmd_resolve(&path, &engine, "bank", MeaningType::Sense, json).unwrap();
        commands::cmd_stats(&path, &engine, json).unwrap();
    }
}

#[test]
fn test_stats_counts_roots_with_configured_sentinel() {
    let mut b = GraphBuilder::new();
    let word = b.add_lexeme("word");
    let root = b.add_meaning(
        lexigraph::types::MeaningNodeBuilder::new(MeaningType::Category).parent_id(-1),
    );
    b.attach_root(word, root);
    b.add_root(MeaningType::Category);
    let graph = b.build().unwrap();

    assert_eq!(graph.roots_with(0).count(), 1);
    let custom: Vec<u64> = graph.roots_with(-1).map(|m| m.id).collect();
    assert_eq!(custom, vec![root]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.json");
    SnapshotWriter::new().write_to_file(&graph, &path).unwrap();
    let engine = QueryEngine::with_config(EngineConfig {
        traversal: TraversalConfig {
            root_sentinel: -1,
            ..TraversalConfig::default()
        },
        ..EngineConfig::default()
    });
    assert_eq!(engine.find_meaning_roots(&graph, "word").unwrap().len(), 1);
    commands::cmd_stats(&path, &engine, true).unwrap();
}

#[test]
fn test_log_filter_defaults() {
    assert_eq!(lexigraph::cli::default_log_filter(false), "warn");
    assert_eq!(lexigraph::cli::default_log_filter(true), "debug");
}

#[test]
fn test_cli_errors_propagate() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(&dir);
    let engine = QueryEngine::new();

    let err = commands::cmd_fuzzy(&path, &engine, "bank", -1, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = commands::cmd_pattern(&path, &engine, "bad\\", false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = commands::cmd_get(&path, 9999, false).unwrap_err();
    assert!(matches!(err, LexError::VertexNotFound(9999)));

    let mut broken = tempfile::NamedTempFile::new().unwrap();
    broken.write_all(b"[1, 2").unwrap();
    let err = commands::cmd_info(broken.path(), false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Data);
}

#[test]
fn test_open_snapshot_publishes_version_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(&dir);
    let snapshot = commands::open_snapshot(&path).unwrap();
    assert_eq!(snapshot.version(), 1);
    assert_eq!(snapshot.lexeme_count(), 2);
}
