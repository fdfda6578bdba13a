// crates/mh_param/src/batch.rs

//! 批量求值
//!
//! 在网格的全部单元或节点上并行求值，每个工作线程使用独立的 `SpatialPosition`。

use rayon::prelude::*;

use mh_mesh::MeshItemType;

use crate::error::ParamResult;
use crate::parameter::Parameter;
use crate::position::SpatialPosition;

/// 在 `0..n_items` 的全部实体上求值（并行）
///
/// 任一实体求值失败即返回该错误。
pub fn evaluate_all(
    parameter: &dyn Parameter,
    t: f64,
    item_type: MeshItemType,
    n_items: usize,
) -> ParamResult<Vec<Vec<f64>>> {
    (0..n_items)
        .into_par_iter()
        .map(|id| parameter.evaluate(t, &SpatialPosition::at_item(item_type, id)))
        .collect()
}

/// 串行版本，用于小规模数据或结果比对
pub fn evaluate_all_serial(
    parameter: &dyn Parameter,
    t: f64,
    item_type: MeshItemType,
    n_items: usize,
) -> ParamResult<Vec<Vec<f64>>> {
    let mut pos = SpatialPosition::new();
    (0..n_items)
        .map(|id| {
            pos.clear();
            match item_type {
                MeshItemType::Node => pos.set_node_id(id),
                MeshItemType::Cell => pos.set_element_id(id),
            }
            parameter.evaluate(t, &pos)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::ConstantParameter;

    #[test]
    fn test_parallel_matches_serial() {
        let p = ConstantParameter::new("c", vec![1.0, 2.0]);
        let par = evaluate_all(&p, 0.0, MeshItemType::Node, 100).unwrap();
        let ser = evaluate_all_serial(&p, 0.0, MeshItemType::Node, 100).unwrap();
        assert_eq!(par, ser);
        assert_eq!(par.len(), 100);
    }
}
