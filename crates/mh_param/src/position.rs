// crates/mh_param/src/position.rs

//! 空间位置
//!
//! 描述一次参数求值发生在"哪里"：节点编号、单元编号、积分点编号和坐标均为可选。
//! 组装循环为每个线程持有自己的 `SpatialPosition`，不跨线程共享可变状态。

use glam::DVec3;
use mh_mesh::MeshItemType;

/// 参数求值的空间上下文
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpatialPosition {
    node_id: Option<usize>,
    element_id: Option<usize>,
    integration_point: Option<u32>,
    coordinates: Option<DVec3>,
}

impl SpatialPosition {
    /// 创建空位置
    pub fn new() -> Self {
        Self::default()
    }

    /// 位于指定节点
    pub fn at_node(node_id: usize) -> Self {
        Self {
            node_id: Some(node_id),
            ..Self::default()
        }
    }

    /// 位于指定单元
    pub fn at_element(element_id: usize) -> Self {
        Self {
            element_id: Some(element_id),
            ..Self::default()
        }
    }

    /// 位于指定类型的网格实体
    pub fn at_item(item_type: MeshItemType, id: usize) -> Self {
        match item_type {
            MeshItemType::Node => Self::at_node(id),
            MeshItemType::Cell => Self::at_element(id),
        }
    }

    /// 附加积分点编号
    pub fn with_integration_point(mut self, ip: u32) -> Self {
        self.integration_point = Some(ip);
        self
    }

    /// 附加坐标
    pub fn with_coordinates(mut self, coordinates: DVec3) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    #[inline]
    pub fn node_id(&self) -> Option<usize> {
        self.node_id
    }

    #[inline]
    pub fn element_id(&self) -> Option<usize> {
        self.element_id
    }

    #[inline]
    pub fn integration_point(&self) -> Option<u32> {
        self.integration_point
    }

    #[inline]
    pub fn coordinates(&self) -> Option<DVec3> {
        self.coordinates
    }

    pub fn set_node_id(&mut self, node_id: usize) {
        self.node_id = Some(node_id);
    }

    pub fn set_element_id(&mut self, element_id: usize) {
        self.element_id = Some(element_id);
    }

    pub fn set_integration_point(&mut self, ip: u32) {
        self.integration_point = Some(ip);
    }

    pub fn set_coordinates(&mut self, coordinates: DVec3) {
        self.coordinates = Some(coordinates);
    }

    /// 一次性设置全部字段（组装循环中复用同一实例）
    pub fn set_all(
        &mut self,
        node_id: Option<usize>,
        element_id: Option<usize>,
        integration_point: Option<u32>,
        coordinates: Option<DVec3>,
    ) {
        self.node_id = node_id;
        self.element_id = element_id;
        self.integration_point = integration_point;
        self.coordinates = coordinates;
    }

    /// 清空所有字段
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let p = SpatialPosition::at_node(3);
        assert_eq!(p.node_id(), Some(3));
        assert_eq!(p.element_id(), None);

        let p = SpatialPosition::at_item(MeshItemType::Cell, 5).with_integration_point(2);
        assert_eq!(p.element_id(), Some(5));
        assert_eq!(p.integration_point(), Some(2));
    }

    #[test]
    fn test_set_and_clear() {
        let mut p = SpatialPosition::new();
        p.set_element_id(1);
        p.set_node_id(4);
        p.set_coordinates(DVec3::new(1.0, 2.0, 0.0));
        assert_eq!(p.node_id(), Some(4));
        assert_eq!(p.coordinates(), Some(DVec3::new(1.0, 2.0, 0.0)));

        p.clear();
        assert_eq!(p, SpatialPosition::default());

        p.set_all(None, Some(9), Some(0), None);
        assert_eq!(p.element_id(), Some(9));
        assert_eq!(p.node_id(), None);
    }
}
