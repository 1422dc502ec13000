//! Phase 1 tests: Data model + graph store + snapshots.

use std::sync::Arc;
use std::thread;

use lexigraph::engine::QueryEngine;
use lexigraph::graph::{GraphBuilder, LexicalGraph, SnapshotStore};
use lexigraph::types::{
    Edge, ErrorKind, LexError, Lexeme, MeaningNodeBuilder, MeaningType, Relation, Vertex,
    ROOT_SENTINEL,
};

// ==================== Data Model Tests ====================

#[test]
fn test_meaning_type_roundtrip() {
    for val in 0u8..=4 {
        let mt = MeaningType::from_u8(val).unwrap();
        assert_eq!(mt as u8, val);
        assert_eq!(MeaningType::from_name(mt.name()), Some(mt));
    }
    assert_eq!(MeaningType::ALL.len(), 5);
}

#[test]
fn test_meaning_type_invalid() {
    assert!(MeaningType::from_u8(5).is_none());
    assert!(MeaningType::from_u8(255).is_none());
    assert!(matches!(
        MeaningType::from_code(-1),
        Err(LexError::InvalidArgument(_))
    ));
    assert!(matches!(
        MeaningType::from_code(300),
        Err(LexError::InvalidArgument(_))
    ));
}

#[test]
fn test_meaning_type_parse() {
    assert_eq!(MeaningType::parse("sense").unwrap(), MeaningType::Sense);
    assert_eq!(MeaningType::parse(" Category ").unwrap(), MeaningType::Category);
    assert_eq!(MeaningType::parse("2").unwrap(), MeaningType::Definition);
    let err = MeaningType::parse("adjective").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_relation_names() {
    for val in 0u8..=1 {
        let rel = Relation::from_u8(val).unwrap();
        assert_eq!(Relation::from_name(rel.name()), Some(rel));
    }
    assert!(Relation::from_u8(2).is_none());
}

#[test]
fn test_root_marker() {
    let root = MeaningNodeBuilder::new(MeaningType::Category).root().build(1);
    assert!(root.is_root());
    assert_eq!(root.parent_id, Some(ROOT_SENTINEL));

    let child = MeaningNodeBuilder::new(MeaningType::Sense)
        .parent_id(1)
        .build(2);
    assert!(!child.is_root());
    assert!(child.is_root_with(1));

    let unmarked = MeaningNodeBuilder::new(MeaningType::Sense).build(3);
    assert!(!unmarked.is_root());
}

// ==================== Graph Store Tests ====================

fn small_graph() -> (LexicalGraph, u64, u64, u64) {
    let mut b = GraphBuilder::new();
    let bank = b.add_lexeme("bank");
    let root = b.add_root(MeaningType::Category);
    let sense = b.add_node(MeaningType::Sense, "financial institution");
    b.link_root(root, bank).link_meaning(root, sense);
    (b.build().unwrap(), bank, root, sense)
}

#[test]
fn test_vertex_by_id() {
    let (graph, bank, root, sense) = small_graph();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.lexeme_count(), 1);
    assert_eq!(graph.meaning_count(), 2);

    match graph.vertex(bank).unwrap() {
        Vertex::Lexeme(l) => assert_eq!(l.form, "bank"),
        other => panic!("expected lexeme, got {:?}", other),
    }
    assert_eq!(graph.vertex(root).unwrap().kind(), "meaning");
    assert_eq!(
        graph.meaning(sense).unwrap().internal_rep.as_deref(),
        Some("financial institution")
    );
    assert!(graph.lexeme(sense).is_none());
    assert!(graph.vertex(999).is_none());
}

#[test]
fn test_adjacency_per_relation_and_direction() {
    let (graph, bank, root, sense) = small_graph();

    let out_root: Vec<u64> = graph
        .outbound_edges(root, Relation::MeaningRoot)
        .map(|e| e.target)
        .collect();
    assert_eq!(out_root, vec![bank]);

    let out_graph: Vec<u64> = graph
        .outbound_edges(root, Relation::MeaningGraph)
        .map(|e| e.target)
        .collect();
    assert_eq!(out_graph, vec![sense]);

    let in_bank: Vec<u64> = graph
        .inbound_edges(bank, Relation::MeaningRoot)
        .map(|e| e.source)
        .collect();
    assert_eq!(in_bank, vec![root]);

    assert_eq!(graph.inbound_edges(bank, Relation::MeaningGraph).count(), 0);
    assert_eq!(graph.outbound_edges(999, Relation::MeaningGraph).count(), 0);
    assert_eq!(graph.relation_count(Relation::MeaningRoot), 1);
    assert_eq!(graph.relation_count(Relation::MeaningGraph), 1);
}

#[test]
fn test_parallel_edges_are_kept() {
    let mut b = GraphBuilder::new();
    let a = b.add_bare_node(MeaningType::Category);
    let c = b.add_bare_node(MeaningType::Sense);
    b.link_meaning(a, c).link_meaning(a, c);
    let graph = b.build().unwrap();
    assert_eq!(graph.outbound_edges(a, Relation::MeaningGraph).count(), 2);
    assert_eq!(graph.outbound_edge_ids(a, Relation::MeaningGraph), &[0, 1]);
}

#[test]
fn test_self_edge_allowed() {
    let mut b = GraphBuilder::new();
    let a = b.add_root(MeaningType::Category);
    b.link_meaning(a, a);
    let graph = b.build().unwrap();
    assert_eq!(graph.inbound_edges(a, Relation::MeaningGraph).count(), 1);
}

#[test]
fn test_duplicate_vertex_rejected() {
    let lexemes = vec![Lexeme::new(1, "a")];
    let meanings = vec![MeaningNodeBuilder::new(MeaningType::Sense).build(1)];
    let err = LexicalGraph::from_parts(lexemes, meanings, vec![])
        .err()
        .unwrap();
    assert!(matches!(err, LexError::DuplicateVertex(1)));
}

#[test]
fn test_dangling_edge_rejected() {
    let lexemes = vec![Lexeme::new(1, "a")];
    let err = LexicalGraph::from_parts(lexemes, vec![], vec![Edge::meaning_root(7, 1)])
        .err()
        .unwrap();
    assert!(matches!(err, LexError::VertexNotFound(7)));
    assert_eq!(err.kind(), ErrorKind::Data);
}

#[test]
fn test_empty_graph() {
    let graph = LexicalGraph::new();
    assert_eq!(graph.vertex_count(), 0);
    assert!(graph.form_index().is_empty());
    assert!(graph.form_tree().is_empty());
}

// ==================== Index Tests ====================

#[test]
fn test_form_index_groups_homographs() {
    let mut b = GraphBuilder::new();
    let s1 = b.add_lexeme("spring");
    let s2 = b.add_lexeme("spring");
    b.add_lexeme("sprint");
    b.add_lexeme("string");
    let graph = b.build().unwrap();

    let index = graph.form_index();
    assert_eq!(index.len(), 3);
    assert_eq!(index.lexeme_count(), 4);
    assert_eq!(index.get("spring"), &[s1, s2]);
    assert!(index.get("autumn").is_empty());
    assert!(index.contains("sprint"));

    let forms: Vec<&str> = index.forms().collect();
    assert_eq!(forms, vec!["spring", "sprint", "string"]);

    let spr: Vec<&str> = index.with_prefix("spr").map(|(f, _)| f).collect();
    assert_eq!(spr, vec!["spring", "sprint"]);
    assert_eq!(index.with_prefix("x").count(), 0);
    assert_eq!(index.with_prefix("").count(), 3);

    assert_eq!(graph.form_tree().len(), 3);
}

#[test]
fn test_type_index_counts() {
    let mut b = GraphBuilder::new();
    b.add_root(MeaningType::Category);
    b.add_node(MeaningType::Sense, "a");
    b.add_node(MeaningType::Sense, "b");
    b.add_bare_node(MeaningType::Definition);
    let graph = b.build().unwrap();

    let index = graph.type_index();
    assert_eq!(index.count(MeaningType::Sense), 2);
    assert_eq!(index.count(MeaningType::Category), 1);
    assert_eq!(index.count(MeaningType::Example), 0);
    assert_eq!(index.len(), 4);
    assert_eq!(index.get(MeaningType::Definition).len(), 1);
}

// ==================== Snapshot Tests ====================

#[test]
fn test_unpublished_store_is_unavailable() {
    let store = SnapshotStore::new();
    let err = store.snapshot().err().unwrap();
    assert!(matches!(err, LexError::Unavailable(_)));
    assert_eq!(err.kind(), ErrorKind::Unavailable);
    assert_eq!(store.version(), None);
}

#[test]
fn test_publish_increments_version() {
    let store = SnapshotStore::new();
    assert_eq!(store.publish(LexicalGraph::new()).unwrap(), 1);
    assert_eq!(store.publish(LexicalGraph::new()).unwrap(), 2);
    assert_eq!(store.version(), Some(2));
    assert_eq!(store.snapshot().unwrap().version(), 2);
}

#[test]
fn test_old_snapshot_survives_publish() {
    let (graph, _, _, _) = small_graph();
    let store = SnapshotStore::with_graph(graph);
    let before = store.snapshot().unwrap();

    store.publish(LexicalGraph::new()).unwrap();
    let after = store.snapshot().unwrap();

    assert_eq!(before.version(), 1);
    assert_eq!(before.lexeme_count(), 1);
    assert_eq!(after.version(), 2);
    assert_eq!(after.lexeme_count(), 0);
}

fn numbered_graph(count: usize) -> LexicalGraph {
    let mut b = GraphBuilder::new();
    for i in 0..count {
        b.add_lexeme(&format!("w{}", i));
    }
    b.build().unwrap()
}

#[test]
fn test_concurrent_readers_see_consistent_snapshots() {
    let store = Arc::new(SnapshotStore::with_graph(numbered_graph(1)));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let engine = QueryEngine::new();
                for _ in 0..200 {
                    let snapshot = store.snapshot().unwrap();
                    let forms = engine.pattern_match(&snapshot, "w%").unwrap();
                    assert_eq!(forms.len(), snapshot.lexeme_count());
                }
            })
        })
        .collect();

    for n in 2..50 {
        store.publish(numbered_graph(n)).unwrap();
    }

    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(store.version(), Some(49));
}
