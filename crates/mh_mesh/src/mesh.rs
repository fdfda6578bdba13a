// crates/mh_mesh/src/mesh.rs

//! 计算网格
//!
//! 只读 SoA 布局的非结构网格，加上附着在单元/节点上的属性集合。
//! 单元连接关系采用压缩格式（offsets + indices）存储。

use std::sync::Arc;

use glam::DVec3;
use mh_foundation::{ensure, MhError};

use crate::error::{MeshError, MeshResult};
use crate::property::{MeshItemType, Properties, PropertyValue, PropertyVector};

/// 网格
#[derive(Debug, Clone)]
pub struct Mesh {
    name: String,
    /// 节点坐标
    node_coords: Vec<DVec3>,
    /// 单元节点偏移，长度 n_cells + 1
    cell_node_offsets: Vec<usize>,
    /// 单元节点索引列表
    cell_node_indices: Vec<u32>,
    properties: Properties,
}

impl Mesh {
    /// 由节点坐标和单元连接关系创建网格
    ///
    /// # 错误
    /// 单元为空或引用了不存在的节点时返回 `MhError::InvalidMesh`
    pub fn new(
        name: impl Into<String>,
        node_coords: Vec<DVec3>,
        cells: &[Vec<usize>],
    ) -> MeshResult<Self> {
        let n_nodes = node_coords.len();
        let mut cell_node_offsets = Vec::with_capacity(cells.len() + 1);
        let mut cell_node_indices = Vec::new();
        cell_node_offsets.push(0);

        for (cell_id, nodes) in cells.iter().enumerate() {
            ensure!(
                !nodes.is_empty(),
                MhError::invalid_mesh(format!("单元 {} 没有节点", cell_id))
            );
            for &node in nodes {
                ensure!(
                    node < n_nodes,
                    MhError::invalid_mesh(format!(
                        "单元 {} 引用了不存在的节点 {} (节点数 {})",
                        cell_id, node, n_nodes
                    ))
                );
                cell_node_indices.push(node as u32);
            }
            cell_node_offsets.push(cell_node_indices.len());
        }

        Ok(Self {
            name: name.into(),
            node_coords,
            cell_node_offsets,
            cell_node_indices,
            properties: Properties::new(),
        })
    }

    /// 网格名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 节点数量
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.node_coords.len()
    }

    /// 单元数量
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.cell_node_offsets.len() - 1
    }

    /// 指定实体类型的数量
    #[inline]
    pub fn n_items(&self, item_type: MeshItemType) -> usize {
        match item_type {
            MeshItemType::Node => self.n_nodes(),
            MeshItemType::Cell => self.n_cells(),
        }
    }

    /// 节点坐标
    pub fn node(&self, node: usize) -> Option<DVec3> {
        self.node_coords.get(node).copied()
    }

    /// 单元节点索引
    pub fn cell_nodes(&self, cell: usize) -> Option<&[u32]> {
        let start = *self.cell_node_offsets.get(cell)?;
        let end = *self.cell_node_offsets.get(cell + 1)?;
        Some(&self.cell_node_indices[start..end])
    }

    /// 单元中心（节点坐标平均）
    pub fn cell_center(&self, cell: usize) -> Option<DVec3> {
        let nodes = self.cell_nodes(cell)?;
        let sum: DVec3 = nodes
            .iter()
            .map(|&n| self.node_coords[n as usize])
            .sum();
        Some(sum / nodes.len() as f64)
    }

    /// 属性集合
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// 添加属性
    ///
    /// 数据元组数必须与 `item_type` 对应的实体数量一致。
    pub fn add_property<T: PropertyValue>(
        &mut self,
        name: impl Into<String>,
        item_type: MeshItemType,
        n_components: usize,
        data: Vec<T>,
    ) -> MeshResult<Arc<PropertyVector<T>>> {
        let vector = PropertyVector::new(name, item_type, n_components, data)?;
        let expected = self.n_items(item_type);
        if vector.n_tuples() != expected {
            return Err(MeshError::PropertySizeMismatch {
                name: vector.name().to_string(),
                item_type,
                expected,
                actual: vector.n_tuples(),
            });
        }
        tracing::debug!(
            mesh = %self.name,
            property = vector.name(),
            %item_type,
            n_components,
            "添加网格属性"
        );
        self.properties.insert(vector)
    }

    /// 按名称和类型获取属性
    ///
    /// # 错误
    /// - 属性不存在: [`MeshError::PropertyNotFound`]
    /// - 类型不符: [`MeshError::PropertyTypeMismatch`]
    pub fn property<T: PropertyValue>(&self, name: &str) -> MeshResult<Arc<PropertyVector<T>>> {
        let entry = self
            .properties
            .entry(name)
            .ok_or_else(|| MeshError::PropertyNotFound {
                mesh: self.name.clone(),
                name: name.to_string(),
            })?;
        T::unwrap(entry)
            .cloned()
            .ok_or_else(|| MeshError::PropertyTypeMismatch {
                name: name.to_string(),
                expected: T::TYPE_NAME,
                actual: entry.type_name(),
            })
    }
}
