//! CLI command implementations.

use std::path::Path;

use crate::engine::QueryEngine;
use crate::format::SnapshotReader;
use crate::graph::{Snapshot, SnapshotStore};
use crate::types::{LexError, LexResult, MeaningType, Relation, Vertex};

/// Load a snapshot file and publish it into a fresh store.
pub fn open_snapshot(path: &Path) -> LexResult<Snapshot> {
    let graph = SnapshotReader::read_from_file(path)?;
    let store = SnapshotStore::with_graph(graph);
    store.snapshot()
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

/// Display information about a snapshot file.
pub fn cmd_info(path: &Path, json: bool) -> LexResult<()> {
    let snapshot = open_snapshot(path)?;
    let file_size = std::fs::metadata(path)?.len();

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "file_size": file_size,
            "loaded_at": format_timestamp(snapshot.published_at()),
            "lexemes": snapshot.lexeme_count(),
            "distinct_forms": snapshot.form_index().len(),
            "meanings": snapshot.meaning_count(),
            "edges": snapshot.edge_count(),
        }));
    } else {
        println!("File: {}", path.display());
        println!("File size: {}", format_size(file_size));
        println!("Loaded: {}", format_timestamp(snapshot.published_at()));
        println!("Lexemes: {}", snapshot.lexeme_count());
        println!("Distinct forms: {}", snapshot.form_index().len());
        println!("Meaning nodes: {}", snapshot.meaning_count());
        println!("Edges: {}", snapshot.edge_count());
    }
    Ok(())
}

/// Show one vertex and its adjacency.
pub fn cmd_get(path: &Path, vertex_id: u64, json: bool) -> LexResult<()> {
    let snapshot = open_snapshot(path)?;
    let vertex = snapshot
        .vertex(vertex_id)
        .ok_or(LexError::VertexNotFound(vertex_id))?;

    let mut edges = Vec::new();
    for relation in [Relation::MeaningRoot, Relation::MeaningGraph] {
        for edge in snapshot.outbound_edges(vertex_id, relation) {
            edges.push(("out", relation, edge.target));
        }
        for edge in snapshot.inbound_edges(vertex_id, relation) {
            edges.push(("in", relation, edge.source));
        }
    }

    if json {
        let mut info = match vertex {
            Vertex::Lexeme(l) => serde_json::json!({
                "id": l.id,
                "kind": vertex.kind(),
                "form": l.form,
            }),
            Vertex::Meaning(m) => serde_json::json!({
                "id": m.id,
                "kind": vertex.kind(),
                "type": m.meaning_type.name(),
                "internal_rep": m.internal_rep,
                "parent_id": m.parent_id,
            }),
        };
        info["edges"] = edges
            .iter()
            .map(|(dir, rel, other)| {
                serde_json::json!({"direction": dir, "relation": rel.name(), "vertex": other})
            })
            .collect();
        print_json(&info);
    } else {
        match vertex {
            Vertex::Lexeme(l) => {
                println!("Lexeme {}", l.id);
                println!("  Form: {:?}", l.form);
            }
            Vertex::Meaning(m) => {
                println!("Meaning node {}", m.id);
                println!("  Type: {}", m.meaning_type);
                match &m.internal_rep {
                    Some(rep) => println!("  Representation: {:?}", rep),
                    None => println!("  Representation: (none)"),
                }
                if let Some(parent) = m.parent_id {
                    println!("  Parent marker: {}", parent);
                }
            }
        }
        for (dir, rel, other) in &edges {
            let arrow = if *dir == "out" { "-->" } else { "<--" };
            println!("  {} {} {}", arrow, rel, other);
        }
    }
    Ok(())
}

/// Fuzzy lookup.
pub fn cmd_fuzzy(
    path: &Path,
    engine: &QueryEngine,
    word: &str,
    max_distance: i64,
    json: bool,
) -> LexResult<()> {
    let snapshot = open_snapshot(path)?;
    let forms = engine.fuzzy_match(&snapshot, word, max_distance)?;

    if json {
        print_json(&serde_json::json!(forms));
    } else {
        for form in &forms {
            println!("{}", form);
        }
        println!("\n{} forms within {} of {:?}", forms.len(), max_distance, word);
    }
    Ok(())
}

/// Wildcard lookup.
pub fn cmd_pattern(path: &Path, engine: &QueryEngine, pattern: &str, json: bool) -> LexResult<()> {
    let snapshot = open_snapshot(path)?;
    let forms = engine.pattern_match(&snapshot, pattern)?;

    if json {
        print_json(&serde_json::json!(forms));
    } else {
        for form in &forms {
            println!("{}", form);
        }
        println!("\n{} forms match {:?}", forms.len(), pattern);
    }
    Ok(())
}

/// Root discovery only.
pub fn cmd_roots(path: &Path, engine: &QueryEngine, word: &str, json: bool) -> LexResult<()> {
    let snapshot = open_snapshot(path)?;
    let paths = engine.find_meaning_roots(&snapshot, word)?;

    if json {
        let info: Vec<serde_json::Value> = paths
            .iter()
            .map(|p| {
                serde_json::json!({
                    "lexeme": p.lexeme_id,
                    "root": p.root_id,
                    "path": p.vertices,
                })
            })
            .collect();
        print_json(&serde_json::json!(info));
    } else {
        for p in &paths {
            let form = snapshot
                .lexeme(p.lexeme_id)
                .map(|l| l.form.as_str())
                .unwrap_or("?");
            let chain: Vec<String> = p.vertices.iter().map(|id| id.to_string()).collect();
            println!("{:?} [{}] => root {}", form, chain.join(" <- "), p.root_id);
        }
        println!("\n{} root paths", paths.len());
    }
    Ok(())
}

/// Meaning resolution.
pub fn cmd_resolve(
    path: &Path,
    engine: &QueryEngine,
    word: &str,
    meaning_type: MeaningType,
    json: bool,
) -> LexResult<()> {
    let snapshot = open_snapshot(path)?;
    let matches = engine.resolve_detailed(&snapshot, word, meaning_type)?;

    if json {
        let info: Vec<serde_json::Value> = matches
            .iter()
            .map(|m| {
                serde_json::json!({
                    "internal_rep": m.internal_rep,
                    "node": m.node_id,
                    "root": m.root_id,
                    "depth": m.depth,
                    "path": m.path,
                })
            })
            .collect();
        print_json(&serde_json::json!(info));
    } else {
        for m in &matches {
            println!(
                "{:?} (node {}, root {}, depth {})",
                m.internal_rep, m.node_id, m.root_id, m.depth
            );
        }
        println!("\n{} {} meanings", matches.len(), meaning_type);
    }
    Ok(())
}

/// Detailed statistics about the graph.
pub fn cmd_stats(path: &Path, engine: &QueryEngine, json: bool) -> LexResult<()> {
    let snapshot = open_snapshot(path)?;
    let forms = snapshot.form_index();

    let homographs = forms.entries().filter(|(_, ids)| ids.len() > 1).count();
    let roots = snapshot
        .roots_with(engine.config().traversal.root_sentinel)
        .count();
    let with_rep = snapshot
        .meanings()
        .iter()
        .filter(|m| m.internal_rep.is_some())
        .count();
    let max_out = snapshot
        .meanings()
        .iter()
        .map(|m| {
            snapshot
                .outbound_edge_ids(m.id, Relation::MeaningGraph)
                .len()
        })
        .max()
        .unwrap_or(0);

    if json {
        let types: serde_json::Map<String, serde_json::Value> = MeaningType::ALL
            .iter()
            .map(|t| {
                (
                    t.name().to_string(),
                    serde_json::json!(snapshot.type_index().count(*t)),
                )
            })
            .collect();
        print_json(&serde_json::json!({
            "lexemes": snapshot.lexeme_count(),
            "distinct_forms": forms.len(),
            "homograph_forms": homographs,
            "meanings": snapshot.meaning_count(),
            "meaning_roots": roots,
            "meanings_with_rep": with_rep,
            "meaning_types": types,
            "meaning_root_edges": snapshot.relation_count(Relation::MeaningRoot),
            "meaning_graph_edges": snapshot.relation_count(Relation::MeaningGraph),
            "max_meaning_out_degree": max_out,
        }));
    } else {
        println!("Lexemes: {}", snapshot.lexeme_count());
        println!("  Distinct forms: {}", forms.len());
        println!("  Homograph forms: {}", homographs);
        println!("Meaning nodes: {}", snapshot.meaning_count());
        println!("  Roots: {}", roots);
        println!("  With representation: {}", with_rep);
        for t in MeaningType::ALL {
            println!("  {}: {}", t, snapshot.type_index().count(t));
        }
        println!("Edges:");
        println!(
            "  meaning_root: {}",
            snapshot.relation_count(Relation::MeaningRoot)
        );
        println!(
            "  meaning_graph: {}",
            snapshot.relation_count(Relation::MeaningGraph)
        );
        println!("  Max meaning out-degree: {}", max_out);
    }
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

fn format_timestamp(micros: u64) -> String {
    let secs = (micros / 1_000_000) as i64;
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| micros.to_string())
}
