// crates/mh_mesh/src/error.rs
//! 网格处理错误类型
//!
//! 包含网格连接关系与属性向量相关的错误定义。
//! 基础层的 `MhError`（连接关系校验、索引越界）通过 `From` 汇入 `MeshError`。

use mh_foundation::MhError;
use thiserror::Error;

use crate::property::MeshItemType;

/// 网格模块结果类型
pub type MeshResult<T> = Result<T, MeshError>;

/// 网格错误枚举
#[derive(Error, Debug)]
pub enum MeshError {
    /// 属性不存在
    #[error("网格 '{mesh}' 上不存在属性 '{name}'")]
    PropertyNotFound { mesh: String, name: String },

    /// 属性数据类型不匹配
    #[error("属性 '{name}' 的数据类型为 {actual}, 期望 {expected}")]
    PropertyTypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// 属性长度与网格实体数量不一致
    #[error("属性 '{name}' 定义在 {item_type} 上, 期望 {expected} 组数据, 实际 {actual}")]
    PropertySizeMismatch {
        name: String,
        item_type: MeshItemType,
        expected: usize,
        actual: usize,
    },

    /// 分量数无效
    #[error("属性 '{name}' 分量数无效: 数据长度 {len} 不能按 {n_components} 个分量划分")]
    InvalidComponents {
        name: String,
        n_components: usize,
        len: usize,
    },

    /// 属性已存在
    #[error("属性 '{0}' 已存在")]
    DuplicateProperty(String),

    /// 聚合基础层错误
    #[error(transparent)]
    Foundation(#[from] MhError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::PropertySizeMismatch {
            name: "MaterialIDs".into(),
            item_type: MeshItemType::Cell,
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("MaterialIDs"));
        assert!(msg.contains("Cell"));
    }

    #[test]
    fn test_foundation_error_is_transparent() {
        let err: MeshError = MhError::invalid_mesh("单元 0 没有节点").into();
        assert!(matches!(err, MeshError::Foundation(MhError::InvalidMesh { .. })));
        assert!(err.to_string().contains("单元 0 没有节点"));
    }
}
