// crates/mh_param/src/selector.rs

//! 网格实体选择器
//!
//! 使用零大小标记类型在编译期区分单元/节点，
//! 泛型参数在单态化后没有运行期分支。

use std::fmt;

use mh_mesh::MeshItemType;

use crate::position::SpatialPosition;

/// 从空间位置中取出对应实体编号
pub trait MeshItemSelector: fmt::Debug + Send + Sync + 'static {
    /// 对应的实体类型
    const ITEM_TYPE: MeshItemType;

    /// 取出实体编号，未设置时为 `None`
    fn mesh_item_id(pos: &SpatialPosition) -> Option<usize>;
}

/// 单元标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellTag;

/// 节点标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeTag;

impl MeshItemSelector for CellTag {
    const ITEM_TYPE: MeshItemType = MeshItemType::Cell;

    #[inline]
    fn mesh_item_id(pos: &SpatialPosition) -> Option<usize> {
        pos.element_id()
    }
}

impl MeshItemSelector for NodeTag {
    const ITEM_TYPE: MeshItemType = MeshItemType::Node;

    #[inline]
    fn mesh_item_id(pos: &SpatialPosition) -> Option<usize> {
        pos.node_id()
    }
}
