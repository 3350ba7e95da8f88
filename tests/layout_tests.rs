//! Integration tests for layout documents and floor snapshots
//!
//! Covers loading layouts from disk, the built-in sample layout, and the
//! renderer-facing snapshot contract.

use floorgraph::model::{LayoutDoc, LayoutError};
use floorgraph::render::FloorGraph;
use floorgraph::types::OutputFormat;
use std::io::Write;

/// The sample layout reproduces the reference route
#[test]
fn test_sample_layout_routes_office1_to_office4() {
    let (building, names) = LayoutDoc::sample().build().unwrap();

    let path = building.find_path(names["Office1"], names["Office4"]).unwrap();
    let labels: Vec<&str> =
        path.iter().map(|&id| building.room(id).unwrap().name.as_str()).collect();
    assert_eq!(labels, vec!["Office1", "Corridor", "Office3", "Office4"]);
}

/// A room added to the layout without doors stays unreachable
#[test]
fn test_layout_with_isolated_room() {
    let mut doc = LayoutDoc::sample();
    doc.rooms.push(floorgraph::model::RoomEntry {
        name: "Storage".to_string(),
        windows: 0,
        lights: 1,
    });

    let (building, names) = doc.build().unwrap();
    assert!(building.find_path(names["Office1"], names["Storage"]).is_none());
}

/// Layout files round-trip through disk
#[test]
fn test_layout_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");

    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", LayoutDoc::sample().to_json_pretty().unwrap()).unwrap();
    drop(file);

    let doc = LayoutDoc::from_file(&path).unwrap();
    let (building, names) = doc.build().unwrap();
    assert_eq!(building.room_count(), 7);
    assert!(building.find_path(names["Kitchen"], names["Office3"]).is_some());
}

/// Unparseable layout files surface as parse errors, not panics
#[test]
fn test_malformed_layout_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(LayoutDoc::from_file(&path), Err(LayoutError::Json(_))));
}

/// A missing layout file surfaces as an IO error
#[test]
fn test_missing_layout_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    assert!(matches!(LayoutDoc::from_file(&path), Err(LayoutError::Io(_))));
}

/// Snapshots expose every room and each door pair exactly once
#[test]
fn test_snapshot_covers_the_sample_floor() {
    let (building, _) = LayoutDoc::sample().build().unwrap();
    let floor = building.floor(0).unwrap();

    let graph = FloorGraph::capture(floor);
    assert_eq!(graph.nodes.len(), 7);
    // Six symmetric doors yield six edges
    assert_eq!(graph.edges.len(), 6);
    assert!(graph.edges.iter().all(|e| e.door_a.is_some() && e.door_b.is_some()));
    assert!(graph.path.is_empty());
}

/// The path variant carries the queried route for highlighting
#[test]
fn test_snapshot_with_highlighted_path() {
    let (building, names) = LayoutDoc::sample().build().unwrap();
    let floor = building.floor(0).unwrap();
    let path = building.find_path(names["Office1"], names["Office4"]).unwrap();

    let graph = FloorGraph::capture_with_path(floor, &path);
    assert_eq!(graph.path, path);

    // And the snapshot serializes in both encodings
    let json = graph.to_json(OutputFormat::Json).unwrap();
    let pretty = graph.to_json(OutputFormat::Pretty).unwrap();
    assert!(json.contains("ROOM_"));
    assert!(pretty.contains("generated_at"));
}

/// Node labels carry the renderer's display fields
#[test]
fn test_snapshot_labels_match_room_attributes() {
    let (building, names) = LayoutDoc::sample().build().unwrap();
    let graph = FloorGraph::capture(building.floor(0).unwrap());

    let kitchen = graph.nodes.iter().find(|n| n.id == names["Kitchen"]).unwrap();
    assert_eq!(kitchen.name, "Kitchen");
    assert_eq!(kitchen.windows, 1);
    assert_eq!(kitchen.lights, 3);
    assert_eq!(kitchen.doors, 1);
    assert!(kitchen.label().contains("windows: 1"));
}
