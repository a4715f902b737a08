//! Route graph export through the store.

use lif_editor::LayoutStore;
use lif_model::{Layout, Node, Position};

#[test]
fn geo_json_of_active_layout() {
    let mut store = LayoutStore::default();
    store.save_layout(&Layout::new("hall", "Hall"));
    store.create_node(Node::new("A", 1.0, 1.0)).unwrap();
    store.create_node(Node::new("B", 2.0, 0.0)).unwrap();
    store.move_node("B", Position::new(2.0, -3.0)).unwrap();
    store.create_edge("A", "B");
    store.create_edge("B", "missing");

    insta::assert_snapshot!(store.to_geo_json().unwrap(), @r#"
    {
      "crs": {
        "type": "name",
        "properties": {
          "name": "urn:ogc:def:crs:EPSG::3857"
        }
      },
      "type": "FeatureCollection",
      "name": "graph",
      "features": [
        {
          "type": "Feature",
          "properties": {
            "id": 0,
            "frame": "Hall"
          },
          "geometry": {
            "type": "Point",
            "coordinates": [
              1.0,
              -1.0
            ]
          }
        },
        {
          "type": "Feature",
          "properties": {
            "id": 1,
            "frame": "Hall"
          },
          "geometry": {
            "type": "Point",
            "coordinates": [
              2.0,
              3.0
            ]
          }
        },
        {
          "type": "Feature",
          "properties": {
            "id": 2,
            "startid": 0,
            "endid": 1,
            "cost": 0.0,
            "overridable": true
          },
          "geometry": {
            "type": "MultiLineString",
            "coordinates": [
              [
                [
                  1.0,
                  -1.0
                ],
                [
                  2.0,
                  3.0
                ]
              ]
            ]
          }
        }
      ]
    }
    "#);
}

#[test]
fn geo_export_uses_active_layout() {
    let mut store = LayoutStore::default();
    store.create_node(Node::new("A", 0.0, 0.0)).unwrap();
    store.save_layout(&Layout::new("second", "Second"));
    store.create_node(Node::new("X", 0.0, 0.0)).unwrap();
    store.create_node(Node::new("Y", 0.0, 0.0)).unwrap();

    let geo = store.to_geo_export();
    assert_eq!(geo.node_features().count(), 2);
    assert!(geo.node_features().all(|(props, _)| props.frame == "Second"));
}
