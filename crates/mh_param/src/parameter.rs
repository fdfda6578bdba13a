// crates/mh_param/src/parameter.rs

//! 参数抽象
//!
//! 所有物理系数（材料属性、边界值、源项）都通过 [`Parameter`] 在任意时刻、
//! 任意空间位置求值，具体的存储策略（常数、分组、网格属性、曲线缩放）由实现决定。
//!
//! 实现必须是 `Send + Sync`：构建完成后可在并行组装循环中只读共享。

use std::fmt;

use mh_mesh::{Mesh, MeshItemType};

use crate::error::ParamResult;
use crate::position::SpatialPosition;

/// 时空参数
pub trait Parameter: fmt::Debug + Send + Sync {
    /// 参数名称
    fn name(&self) -> &str;

    /// 定义域网格；与网格无关的参数返回 `None`
    fn mesh(&self) -> Option<&Mesh> {
        None
    }

    /// 参数值按哪类网格实体定义；与实体无关时返回 `None`
    fn mesh_item_type(&self) -> Option<MeshItemType> {
        None
    }

    /// 参数值是否随时间变化
    fn is_time_dependent(&self) -> bool;

    /// 分量数
    fn number_of_components(&self) -> usize;

    /// 在时刻 `t`、位置 `pos` 处求值
    fn evaluate(&self, t: f64, pos: &SpatialPosition) -> ParamResult<Vec<f64>>;
}
