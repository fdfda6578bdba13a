// crates/mh_param/tests/group_based_parameter.rs

//! 分组参数行为测试
//!
//! 覆盖求值链路 网格实体 → 分组编号 → 数值行 的全部约定：
//! 分量数、单元/节点两种实体、空分组报错、时间无关性、索引表共享与并行只读。

use std::sync::Arc;

use glam::DVec3;
use mh_mesh::{Mesh, MeshItemType};
use mh_param::{
    evaluate_all, evaluate_all_serial, CellGroupParameter, NodeGroupParameter, Parameter,
    ParameterError, SpatialPosition,
};

fn line_mesh(n_cells: usize) -> Mesh {
    let nodes = (0..=n_cells)
        .map(|i| DVec3::new(i as f64, 0.0, 0.0))
        .collect();
    let cells: Vec<Vec<usize>> = (0..n_cells).map(|i| vec![i, i + 1]).collect();
    Mesh::new("line", nodes, &cells).unwrap()
}

#[test]
fn test_number_of_components_matches_row_width() {
    for width in 1..=4 {
        let mut mesh = line_mesh(3);
        let ids = mesh
            .add_property("MaterialIDs", MeshItemType::Cell, 1, vec![0, 1, 2])
            .unwrap();
        let rows = (0..3).map(|g| vec![g as f64; width]).collect();
        let p = CellGroupParameter::new("K", Arc::new(mesh), ids, rows);
        assert_eq!(p.number_of_components(), width);
    }

    let mut mesh = line_mesh(1);
    let ids = mesh
        .add_property("MaterialIDs", MeshItemType::Cell, 1, vec![0])
        .unwrap();
    let p = CellGroupParameter::new("K", Arc::new(mesh), ids, Vec::new());
    assert_eq!(p.number_of_components(), 0);
}

#[test]
fn test_single_cell_lookup() {
    let mut mesh = line_mesh(1);
    let ids = mesh
        .add_property("MaterialIDs", MeshItemType::Cell, 1, vec![0])
        .unwrap();
    let p = CellGroupParameter::new("K", Arc::new(mesh), ids, vec![vec![3.5]]);

    let mut pos = SpatialPosition::new();
    pos.set_element_id(0);
    assert_eq!(p.evaluate(0.0, &pos).unwrap(), vec![3.5]);
}

#[test]
fn test_node_lookup() {
    let mut mesh = line_mesh(1);
    let ids = mesh
        .add_property("NodeGroups", MeshItemType::Node, 1, vec![0, 1])
        .unwrap();
    let p = NodeGroupParameter::new(
        "v",
        Arc::new(mesh),
        ids,
        vec![vec![1.0, 2.0], vec![3.0, 4.0]],
    );

    assert_eq!(p.evaluate(0.0, &SpatialPosition::at_node(1)).unwrap(), vec![3.0, 4.0]);
    assert_eq!(p.evaluate(0.0, &SpatialPosition::at_node(0)).unwrap(), vec![1.0, 2.0]);
}

#[test]
fn test_empty_group_never_returns_value() {
    let mut mesh = line_mesh(3);
    let ids = mesh
        .add_property("MaterialIDs", MeshItemType::Cell, 1, vec![0, 2, 1])
        .unwrap();
    let p = CellGroupParameter::new("K", Arc::new(mesh), ids, vec![vec![1.0], vec![2.0], vec![]]);

    match p.evaluate(0.0, &SpatialPosition::at_element(1)) {
        Err(ParameterError::NoDataForGroup { parameter, group }) => {
            assert_eq!(parameter, "K");
            assert_eq!(group, 2);
        }
        other => panic!("expected NoDataForGroup, got {:?}", other),
    }
    assert_eq!(p.evaluate(0.0, &SpatialPosition::at_element(2)).unwrap(), vec![2.0]);
}

#[test]
fn test_time_independent() {
    let mut mesh = line_mesh(2);
    let ids = mesh
        .add_property("MaterialIDs", MeshItemType::Cell, 1, vec![1, 0])
        .unwrap();
    let p = CellGroupParameter::new("K", Arc::new(mesh), ids, vec![vec![1.0], vec![5.0]]);

    assert!(!p.is_time_dependent());
    let pos = SpatialPosition::at_element(0);
    let reference = p.evaluate(0.0, &pos).unwrap();
    for t in [-1.0, 0.5, 1.0e3, f64::MAX] {
        assert_eq!(p.evaluate(t, &pos).unwrap(), reference);
    }
    assert!(!p.is_time_dependent());
}

#[test]
fn test_index_table_is_shared_not_copied() {
    let mut mesh = line_mesh(2);
    let ids = mesh
        .add_property("MaterialIDs", MeshItemType::Cell, 1, vec![0, 0])
        .unwrap();
    let p = CellGroupParameter::new(
        "K",
        Arc::new(mesh),
        Arc::clone(&ids),
        vec![vec![10.0], vec![20.0]],
    );
    assert!(Arc::ptr_eq(p.index_table(), &ids));

    let pos = SpatialPosition::at_element(1);
    assert_eq!(p.evaluate(0.0, &pos).unwrap(), vec![10.0]);

    // 外部持有方改写分组编号，下一次求值即可见
    ids.set(1, 1).unwrap();
    assert_eq!(p.evaluate(0.0, &pos).unwrap(), vec![20.0]);

    // 通过网格上的句柄修改同样可见
    let from_mesh = p.mesh().unwrap().property::<i32>("MaterialIDs").unwrap();
    from_mesh.set(1, 0).unwrap();
    assert_eq!(p.evaluate(0.0, &pos).unwrap(), vec![10.0]);
}

#[test]
fn test_repeated_queries_are_identical() {
    let mut mesh = line_mesh(4);
    let ids = mesh
        .add_property("MaterialIDs", MeshItemType::Cell, 1, vec![0, 1, 0, 1])
        .unwrap();
    let p = CellGroupParameter::new("K", Arc::new(mesh), ids, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

    for cell in 0..4 {
        let pos = SpatialPosition::at_element(cell);
        let first = p.evaluate(0.0, &pos).unwrap();
        let second = p.evaluate(0.0, &pos).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_returned_row_is_a_copy() {
    let mut mesh = line_mesh(1);
    let ids = mesh
        .add_property("MaterialIDs", MeshItemType::Cell, 1, vec![0])
        .unwrap();
    let p = CellGroupParameter::new("K", Arc::new(mesh), ids, vec![vec![1.0]]);

    let pos = SpatialPosition::at_element(0);
    let mut v = p.evaluate(0.0, &pos).unwrap();
    v[0] = 99.0;
    assert_eq!(p.evaluate(0.0, &pos).unwrap(), vec![1.0]);
}

#[test]
fn test_concurrent_evaluation() {
    let n_cells = 10_000;
    let mut mesh = line_mesh(n_cells);
    let ids: Vec<i32> = (0..n_cells).map(|i| (i % 3) as i32).collect();
    let ids = mesh
        .add_property("MaterialIDs", MeshItemType::Cell, 1, ids)
        .unwrap();
    let p = CellGroupParameter::new(
        "K",
        Arc::new(mesh),
        ids,
        vec![vec![0.0], vec![1.0], vec![2.0]],
    );

    let parallel = evaluate_all(&p, 0.0, MeshItemType::Cell, n_cells).unwrap();
    let serial = evaluate_all_serial(&p, 0.0, MeshItemType::Cell, n_cells).unwrap();
    assert_eq!(parallel, serial);
    assert_eq!(parallel[4], vec![1.0]);

    let shared: Arc<dyn Parameter> = Arc::new(p);
    let handles: Vec<_> = (0..4)
        .map(|k| {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                let mut pos = SpatialPosition::new();
                for cell in (k..n_cells).step_by(4) {
                    pos.set_element_id(cell);
                    let v = shared.evaluate(0.0, &pos).unwrap();
                    assert_eq!(v, vec![(cell % 3) as f64]);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
