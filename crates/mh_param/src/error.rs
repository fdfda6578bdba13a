// crates/mh_param/src/error.rs

//! 参数层错误类型
//!
//! - [`ParameterError`]: 求值路径上的错误（调用方契约违背、分组无数据）
//! - [`ConfigError`]: 由配置构建参数时的错误
//!
//! 两类错误都是 fail-fast：不在本层重试，携带参数名与分组编号供用户修正配置。

use mh_mesh::{MeshError, MeshItemType};
use thiserror::Error;

/// 求值结果类型
pub type ParamResult<T> = Result<T, ParameterError>;

/// 配置结果类型
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 参数求值错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// 空间位置上缺少所需的网格实体编号
    #[error("参数 '{parameter}': 空间位置未设置 {item_type} 编号")]
    MissingMeshItemId {
        /// 参数名
        parameter: String,
        /// 所需的实体类型
        item_type: MeshItemType,
    },

    /// 网格实体编号超出索引表范围
    #[error("参数 '{parameter}': {item_type} 编号 {id} 超出范围 0..{len}")]
    MeshItemOutOfRange {
        /// 参数名
        parameter: String,
        /// 实体类型
        item_type: MeshItemType,
        /// 实体编号
        id: usize,
        /// 索引表长度
        len: usize,
    },

    /// 分组编号为负或超出数值表范围
    #[error("参数 '{parameter}': 分组编号 {group} 超出范围 0..{n_groups}")]
    GroupOutOfRange {
        /// 参数名
        parameter: String,
        /// 分组编号
        group: i32,
        /// 数值表行数
        n_groups: usize,
    },

    /// 分组被网格引用但没有赋值
    #[error("参数 '{parameter}': No data found for the group index {group}")]
    NoDataForGroup {
        /// 参数名
        parameter: String,
        /// 分组编号
        group: usize,
    },

    /// 参数不存在
    #[error("参数 '{0}' 不存在")]
    NotFound(String),

    /// 参数名重复
    #[error("参数 '{0}' 重复定义")]
    DuplicateName(String),

    /// 分量数不符合使用方要求
    #[error("参数 '{name}' 分量数为 {actual}, 期望 {expected}")]
    ComponentMismatch {
        /// 参数名
        name: String,
        /// 期望分量数
        expected: usize,
        /// 实际分量数
        actual: usize,
    },
}

/// 参数配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] serde_json::Error),

    /// 无效值
    #[error("参数 '{parameter}' 配置项 '{key}' 无效: {reason}")]
    InvalidValue {
        /// 参数名
        parameter: String,
        /// 配置键
        key: String,
        /// 原因
        reason: String,
    },

    /// 同一分组编号出现多次
    #[error("参数 '{parameter}': 分组编号 {index} 重复赋值")]
    DuplicateIndex {
        /// 参数名
        parameter: String,
        /// 分组编号
        index: i64,
    },

    /// 各分组的分量数不一致
    #[error("参数 '{parameter}': 分组 {index} 有 {actual} 个分量, 其他分组为 {expected} 个")]
    InconsistentComponents {
        /// 参数名
        parameter: String,
        /// 分组编号
        index: i64,
        /// 期望分量数
        expected: usize,
        /// 实际分量数
        actual: usize,
    },

    /// 曲线不存在
    #[error("参数 '{parameter}' 引用的曲线 '{curve}' 不存在")]
    CurveNotFound {
        /// 参数名
        parameter: String,
        /// 曲线名
        curve: String,
    },

    /// 曲线数据无效
    #[error("曲线 '{curve}' 无效: {reason}")]
    InvalidCurve {
        /// 曲线名
        curve: String,
        /// 原因
        reason: String,
    },

    /// 引用的参数无法解析（不存在或循环引用）
    #[error("参数 '{parameter}' 引用的参数 '{reference}' 无法解析")]
    UnresolvedReference {
        /// 参数名
        parameter: String,
        /// 被引用的参数名
        reference: String,
    },

    /// 网格/属性错误
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// 参数集合错误
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

impl ConfigError {
    /// 构造无效值错误
    pub fn invalid_value(
        parameter: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            parameter: parameter.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }
}
