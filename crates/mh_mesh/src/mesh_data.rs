// crates/mh_mesh/src/mesh_data.rs

//! 可序列化的网格描述
//!
//! 用于从 JSON 等配置中构建 [`Mesh`]。

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::property::MeshItemType;

/// 网格描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshData {
    /// 网格名称
    pub name: String,
    /// 节点坐标 [x, y, z]
    pub nodes: Vec<[f64; 3]>,
    /// 单元节点索引
    pub cells: Vec<Vec<usize>>,
    /// 属性列表
    #[serde(default)]
    pub properties: Vec<PropertyData>,
}

/// 属性描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyData {
    /// 属性名称
    pub name: String,
    /// 依附的实体类型
    pub item_type: MeshItemType,
    /// 分量数
    #[serde(default = "default_components")]
    pub n_components: usize,
    /// 数据
    pub data: PropertyValues,
}

fn default_components() -> usize {
    1
}

/// 属性数据（按类型区分）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValues {
    /// 整数数据
    Int(Vec<i32>),
    /// 浮点数据
    Double(Vec<f64>),
}

impl MeshData {
    /// 构建网格及其全部属性
    pub fn build(&self) -> MeshResult<Mesh> {
        let nodes = self.nodes.iter().map(|p| DVec3::from_array(*p)).collect();
        let mut mesh = Mesh::new(self.name.clone(), nodes, &self.cells)?;
        for prop in &self.properties {
            match &prop.data {
                PropertyValues::Int(values) => {
                    mesh.add_property(&prop.name, prop.item_type, prop.n_components, values.clone())?;
                }
                PropertyValues::Double(values) => {
                    mesh.add_property(&prop.name, prop.item_type, prop.n_components, values.clone())?;
                }
            }
        }
        tracing::info!(
            mesh = %mesh.name(),
            n_nodes = mesh.n_nodes(),
            n_cells = mesh.n_cells(),
            n_properties = mesh.properties().len(),
            "网格构建完成"
        );
        Ok(mesh)
    }
}
