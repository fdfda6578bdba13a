// crates/mh_param/src/group_based.rs

//! 基于分组的参数
//!
//! 求值链路：网格实体 → 分组编号 → 数值行。
//! 常用于按材料 ID 赋值的材料参数。
//!
//! # 数据所有权
//!
//! - 分组索引表 (`PropertyVector<i32>`) 与网格共享，参数只持有 `Arc` 句柄，
//!   外部对索引表的更新在下一次求值时可见
//! - 数值表由参数独占，构建后不可修改
//!
//! # 示例
//!
//! ```
//! use std::sync::Arc;
//! use glam::DVec3;
//! use mh_mesh::{Mesh, MeshItemType};
//! use mh_param::{CellTag, GroupBasedParameter, Parameter, SpatialPosition};
//!
//! let mut mesh = Mesh::new("m", vec![DVec3::ZERO, DVec3::X], &[vec![0, 1]]).unwrap();
//! let ids = mesh.add_property("MaterialIDs", MeshItemType::Cell, 1, vec![0i32]).unwrap();
//!
//! let k = GroupBasedParameter::<CellTag>::new("K", Arc::new(mesh), ids, vec![vec![3.5]]);
//! assert_eq!(k.evaluate(0.0, &SpatialPosition::at_element(0)).unwrap(), vec![3.5]);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use mh_mesh::{Mesh, MeshItemType, PropertyVector};

use crate::error::{ParamResult, ParameterError};
use crate::parameter::Parameter;
use crate::position::SpatialPosition;
use crate::selector::{CellTag, MeshItemSelector, NodeTag};

/// 按单元分组的参数
pub type CellGroupParameter = GroupBasedParameter<CellTag>;

/// 按节点分组的参数
pub type NodeGroupParameter = GroupBasedParameter<NodeTag>;

/// 基于分组的参数
#[derive(Debug)]
pub struct GroupBasedParameter<K: MeshItemSelector> {
    name: String,
    mesh: Arc<Mesh>,
    /// 每个网格实体的分组编号（共享）
    property_index: Arc<PropertyVector<i32>>,
    /// 每个分组的数值行；空行表示该分组未赋值
    values: Vec<Vec<f64>>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: MeshItemSelector> GroupBasedParameter<K> {
    /// 由分组索引表和各分组数值创建
    ///
    /// 不做尺寸校验：索引表与数值表的不一致在求值时报告。
    pub fn new(
        name: impl Into<String>,
        mesh: Arc<Mesh>,
        property_index: Arc<PropertyVector<i32>>,
        values: Vec<Vec<f64>>,
    ) -> Self {
        let name = name.into();
        tracing::debug!(
            parameter = %name,
            item_type = %K::ITEM_TYPE,
            index_property = property_index.name(),
            n_groups = values.len(),
            "创建分组参数"
        );
        Self {
            name,
            mesh,
            property_index,
            values,
            _kind: PhantomData,
        }
    }

    /// 参数定义所在的实体类型
    pub fn item_type(&self) -> MeshItemType {
        K::ITEM_TYPE
    }

    /// 数值表行数
    pub fn n_groups(&self) -> usize {
        self.values.len()
    }

    /// 分组索引表句柄
    pub fn index_table(&self) -> &Arc<PropertyVector<i32>> {
        &self.property_index
    }

    /// 指定分组的数值行
    pub fn group(&self, group: usize) -> Option<&[f64]> {
        self.values.get(group).map(Vec::as_slice)
    }

    /// 解析出当前位置所属分组的数值行（不分配内存）
    #[inline]
    pub fn group_values(&self, pos: &SpatialPosition) -> ParamResult<&[f64]> {
        let item_id = K::mesh_item_id(pos).ok_or_else(|| ParameterError::MissingMeshItemId {
            parameter: self.name.clone(),
            item_type: K::ITEM_TYPE,
        })?;

        let group = self.property_index.component(item_id, 0).ok_or_else(|| {
            ParameterError::MeshItemOutOfRange {
                parameter: self.name.clone(),
                item_type: K::ITEM_TYPE,
                id: item_id,
                len: self.property_index.n_tuples(),
            }
        })?;

        let row = usize::try_from(group)
            .ok()
            .and_then(|g| self.values.get(g))
            .ok_or_else(|| ParameterError::GroupOutOfRange {
                parameter: self.name.clone(),
                group,
                n_groups: self.values.len(),
            })?;

        if row.is_empty() {
            return Err(ParameterError::NoDataForGroup {
                parameter: self.name.clone(),
                group: group as usize,
            });
        }
        Ok(row)
    }
}

impl<K: MeshItemSelector> Parameter for GroupBasedParameter<K> {
    fn name(&self) -> &str {
        &self.name
    }

    fn mesh(&self) -> Option<&Mesh> {
        Some(&self.mesh)
    }

    fn mesh_item_type(&self) -> Option<MeshItemType> {
        Some(K::ITEM_TYPE)
    }

    fn is_time_dependent(&self) -> bool {
        false
    }

    fn number_of_components(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    fn evaluate(&self, _t: f64, pos: &SpatialPosition) -> ParamResult<Vec<f64>> {
        self.group_values(pos).map(<[f64]>::to_vec)
    }
}
