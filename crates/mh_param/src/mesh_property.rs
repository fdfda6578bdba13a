// crates/mh_param/src/mesh_property.rs

//! 网格属性参数
//!
//! 直接读取网格上的浮点属性向量：每个单元（或节点）一行，多分量交错存储。

use std::marker::PhantomData;
use std::sync::Arc;

use mh_mesh::{Mesh, MeshItemType, PropertyVector};

use crate::error::{ParamResult, ParameterError};
use crate::parameter::Parameter;
use crate::position::SpatialPosition;
use crate::selector::{CellTag, MeshItemSelector, NodeTag};

/// 单元属性参数
pub type MeshElementParameter = MeshPropertyParameter<CellTag>;

/// 节点属性参数
pub type MeshNodeParameter = MeshPropertyParameter<NodeTag>;

/// 网格属性参数
#[derive(Debug)]
pub struct MeshPropertyParameter<K: MeshItemSelector> {
    name: String,
    mesh: Arc<Mesh>,
    property: Arc<PropertyVector<f64>>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: MeshItemSelector> MeshPropertyParameter<K> {
    pub fn new(name: impl Into<String>, mesh: Arc<Mesh>, property: Arc<PropertyVector<f64>>) -> Self {
        Self {
            name: name.into(),
            mesh,
            property,
            _kind: PhantomData,
        }
    }

    /// 属性向量句柄
    pub fn property(&self) -> &Arc<PropertyVector<f64>> {
        &self.property
    }
}

impl<K: MeshItemSelector> Parameter for MeshPropertyParameter<K> {
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
        self.property.n_components()
    }

    fn evaluate(&self, _t: f64, pos: &SpatialPosition) -> ParamResult<Vec<f64>> {
        let item_id = K::mesh_item_id(pos).ok_or_else(|| ParameterError::MissingMeshItemId {
            parameter: self.name.clone(),
            item_type: K::ITEM_TYPE,
        })?;
        self.property
            .tuple(item_id)
            .ok_or_else(|| ParameterError::MeshItemOutOfRange {
                parameter: self.name.clone(),
                item_type: K::ITEM_TYPE,
                id: item_id,
                len: self.property.n_tuples(),
            })
    }
}
