use super::*;
use crate::error::ParetoError;
use tempfile::tempdir;

fn cost(components: &[f64]) -> CostVector {
    CostVector::new(components.to_vec()).unwrap()
}

fn sample_edges() -> Vec<(&'static str, &'static str, [f64; 3])> {
    vec![
        ("A", "B", [1.0, 2.0, 3.0]),
        ("A", "C", [2.0, 1.0, 4.0]),
        ("B", "D", [0.5, 0.5, 0.5]),
        ("A", "B", [3.0, 0.0, 1.0]),
    ]
}

fn populate(graph: &mut dyn GraphMut) {
    for (from, to, c) in sample_edges() {
        graph.add_edge(from, to, cost(&c)).unwrap();
    }
}

#[test]
fn test_memory_graph_neighbors_in_insertion_order() {
    let mut graph = MemoryGraph::new(3).unwrap();
    populate(&mut graph);

    let neighbors = graph.neighbors("A").unwrap();
    let targets: Vec<&str> = neighbors.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(targets, vec!["B", "C", "B"]);
    assert_eq!(graph.nodes().unwrap(), vec!["A", "B", "C", "D"]);
    assert_eq!(graph.edge_count().unwrap(), 4);
    assert!(graph.neighbors("D").unwrap().is_empty());
}

#[test]
fn test_memory_graph_unknown_node() {
    let graph = MemoryGraph::new(3).unwrap();
    assert!(!graph.contains("X").unwrap());
    assert!(matches!(
        graph.neighbors("X"),
        Err(ParetoError::UnknownNode { id }) if id == "X"
    ));
}

#[test]
fn test_add_edge_rejects_wrong_dimensions() {
    let mut graph = MemoryGraph::new(3).unwrap();
    let result = graph.add_edge("A", "B", cost(&[1.0, 1.0]));
    assert!(matches!(result, Err(ParetoError::InvalidCost { .. })));
    assert!(!graph.contains("A").unwrap());

    let mut sqlite = SqliteGraph::open_in_memory(3).unwrap();
    let result = sqlite.add_edge("A", "B", cost(&[1.0, 1.0]));
    assert!(matches!(result, Err(ParetoError::InvalidCost { .. })));
    assert!(!sqlite.contains("A").unwrap());
}

#[test]
fn test_graph_rejects_single_dimension() {
    assert!(matches!(
        MemoryGraph::new(1),
        Err(ParetoError::InvalidValue { .. })
    ));
    assert!(SqliteGraph::open_in_memory(1).is_err());
}

#[test]
fn test_remove_edge_invalid() {
    for graph in [
        &mut MemoryGraph::new(3).unwrap() as &mut dyn GraphMut,
        &mut SqliteGraph::open_in_memory(3).unwrap() as &mut dyn GraphMut,
    ] {
        graph.add_node("X").unwrap();
        assert!(matches!(
            graph.remove_edge("X", "Y"),
            Err(ParetoError::UnknownNode { .. })
        ));
        assert!(matches!(
            graph.remove_edge("Y", "Z"),
            Err(ParetoError::UnknownNode { .. })
        ));
        graph.add_node("Y").unwrap();
        assert!(matches!(
            graph.remove_edge("X", "Y"),
            Err(ParetoError::EdgeNotFound { .. })
        ));
    }
}

#[test]
fn test_remove_edge_removes_parallel_edges() {
    for graph in [
        &mut MemoryGraph::new(3).unwrap() as &mut dyn GraphMut,
        &mut SqliteGraph::open_in_memory(3).unwrap() as &mut dyn GraphMut,
    ] {
        populate(graph);
        assert_eq!(graph.remove_edge("A", "B").unwrap(), 2);
        let targets: Vec<NodeId> = graph
            .neighbors("A")
            .unwrap()
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(targets, vec!["C"]);
        assert!(graph.contains("B").unwrap());
    }
}

#[test]
fn test_add_node_reports_new_nodes() {
    let mut graph = MemoryGraph::new(2).unwrap();
    assert!(graph.add_node("A").unwrap());
    assert!(!graph.add_node("A").unwrap());

    let mut sqlite = SqliteGraph::open_in_memory(2).unwrap();
    assert!(sqlite.add_node("A").unwrap());
    assert!(!sqlite.add_node("A").unwrap());
}

#[test]
fn test_sqlite_vs_memory_neighbors() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("graph.db");

    let mut sqlite = SqliteGraph::open(&db_path, Some(3)).unwrap();
    populate(&mut sqlite);
    drop(sqlite);

    let sqlite = SqliteGraph::open(&db_path, None).unwrap();
    let mut memory = MemoryGraph::new(3).unwrap();
    populate(&mut memory);

    assert_eq!(sqlite.dimensions(), 3);
    assert_eq!(sqlite.nodes().unwrap(), memory.nodes().unwrap());
    for node in ["A", "B", "C", "D"] {
        assert_eq!(
            sqlite.neighbors(node).unwrap(),
            memory.neighbors(node).unwrap(),
            "neighbors of {}",
            node
        );
    }
    assert_eq!(sqlite.edge_count().unwrap(), memory.edge_count().unwrap());
}

#[test]
fn test_sqlite_dimension_mismatch_on_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("graph.db");
    SqliteGraph::open(&db_path, Some(2)).unwrap();

    let result = SqliteGraph::open(&db_path, Some(3));
    assert!(matches!(
        result,
        Err(ParetoError::DimensionMismatch {
            expected: 2,
            found: 3
        })
    ));
}

#[test]
fn test_sqlite_defaults_to_three_dimensions() {
    let dir = tempdir().unwrap();
    let graph = SqliteGraph::open(&dir.path().join("fresh.db"), None).unwrap();
    assert_eq!(graph.dimensions(), 3);
}

#[test]
fn test_edge_list_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.json");

    let mut memory = MemoryGraph::new(3).unwrap();
    memory.add_node("lonely").unwrap();
    populate(&mut memory);

    let list = EdgeList::from_graph(&memory).unwrap();
    list.save(&path).unwrap();
    let loaded = EdgeList::load(&path).unwrap();
    assert_eq!(loaded, list);

    let rebuilt = loaded.into_graph().unwrap();
    assert!(rebuilt.contains("lonely").unwrap());
    assert_eq!(rebuilt.neighbors("A").unwrap(), memory.neighbors("A").unwrap());
}

#[test]
fn test_edge_list_rejects_negative_cost() {
    let json = r#"{"dimensions": 2, "edges": [{"from": "A", "to": "B", "cost": [1.0, -1.0]}]}"#;
    let list: EdgeList = serde_json::from_str(json).unwrap();

    assert!(matches!(
        list.clone().into_graph(),
        Err(ParetoError::InvalidCost { .. })
    ));

    let mut sqlite = SqliteGraph::open_in_memory(2).unwrap();
    assert!(matches!(
        sqlite.import(&list),
        Err(ParetoError::InvalidCost { .. })
    ));
    // The failed import leaves nothing behind
    assert_eq!(sqlite.edge_count().unwrap(), 0);
}

#[test]
fn test_edge_list_rejects_wrong_arity() {
    let json = r#"{"dimensions": 3, "edges": [{"from": "A", "to": "B", "cost": [1.0, 2.0]}]}"#;
    let list: EdgeList = serde_json::from_str(json).unwrap();
    assert!(matches!(
        list.into_graph(),
        Err(ParetoError::InvalidCost { .. })
    ));
}

#[test]
fn test_sqlite_import_edge_list() {
    let mut memory = MemoryGraph::new(3).unwrap();
    populate(&mut memory);
    let list = EdgeList::from_graph(&memory).unwrap();

    let mut sqlite = SqliteGraph::open_in_memory(3).unwrap();
    sqlite.import(&list).unwrap();
    assert_eq!(EdgeList::from_graph(&sqlite).unwrap(), list);

    let mut two_d = SqliteGraph::open_in_memory(2).unwrap();
    assert!(matches!(
        two_d.import(&list),
        Err(ParetoError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_sqlite_open_failure_is_db_operation_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("graph.db");
    assert!(matches!(
        SqliteGraph::open(&path, None),
        Err(ParetoError::FailedOperation { .. })
    ));
}
