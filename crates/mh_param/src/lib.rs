// crates/mh_param/src/lib.rs

//! MariHydro 参数层
//!
//! 为每个物理系数（材料属性、边界值、源项）提供统一的时空求值接口。
//!
//! # 参数类型
//!
//! - [`ConstantParameter`]: 常数
//! - [`GroupBasedParameter`]: 网格实体 → 分组编号 → 数值行（按材料 ID 赋值）
//! - [`MeshPropertyParameter`]: 直接读取网格浮点属性
//! - [`CurveScaledParameter`]: 另一个参数乘以时间曲线
//!
//! # 模块结构
//!
//! - [`position`]: 求值的空间上下文
//! - [`selector`]: 单元/节点的编译期选择
//! - [`config`] / [`factory`]: 由 JSON 配置构建参数
//! - [`set`]: 参数集合与按名查找
//! - [`batch`]: 基于 rayon 的批量求值
//!
//! # 线程安全
//!
//! 所有参数都是 `Send + Sync`，构建完成后可在并行组装循环中只读共享，
//! 求值路径上没有内部缓存，也不需要加锁（分组索引表的读锁除外）。

pub mod batch;
pub mod config;
pub mod constant;
pub mod curve;
pub mod curve_scaled;
pub mod error;
pub mod factory;
pub mod group_based;
pub mod mesh_property;
pub mod parameter;
pub mod position;
pub mod selector;
pub mod set;

pub use batch::{evaluate_all, evaluate_all_serial};
pub use config::{IndexValueConfig, ParameterConfig, ProjectConfig};
pub use constant::ConstantParameter;
pub use curve::{CurveConfig, ExtrapolationMode, PiecewiseLinearCurve};
pub use curve_scaled::CurveScaledParameter;
pub use error::{ConfigError, ConfigResult, ParamResult, ParameterError};
pub use factory::{create_group_based_parameter, create_parameter, create_parameters, Curves, Project};
pub use group_based::{CellGroupParameter, GroupBasedParameter, NodeGroupParameter};
pub use mesh_property::{MeshElementParameter, MeshNodeParameter, MeshPropertyParameter};
pub use parameter::Parameter;
pub use position::SpatialPosition;
pub use selector::{CellTag, MeshItemSelector, NodeTag};
pub use set::ParameterSet;
