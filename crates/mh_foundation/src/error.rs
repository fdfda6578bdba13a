// crates/mh_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `MhError` 枚举和 `MhResult` 类型别名，作为各层错误的公共基础。
//!
//! # 设计原则
//!
//! 1. **层次化**: 基础层只定义核心错误，网格/参数相关错误在各自 crate 中定义
//! 2. **易用性**: 提供便捷的构造方法和 [`ensure!`](crate::ensure) 宏
//!
//! # 示例
//!
//! ```
//! use mh_foundation::error::{MhError, MhResult};
//!
//! fn cell_node(nodes: &[usize], i: usize) -> MhResult<usize> {
//!     MhError::check_index("Node", i, nodes.len())?;
//!     Ok(nodes[i])
//! }
//! assert!(cell_node(&[0, 1], 2).is_err());
//! ```

use thiserror::Error;

/// 统一结果类型
pub type MhResult<T> = Result<T, MhError>;

/// MariHydro 错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MhError {
    /// 索引越界
    #[error("索引越界: {index_type} 索引 {index} 超出范围 0..{len}")]
    IndexOutOfBounds {
        /// 索引类别描述
        index_type: &'static str,
        /// 访问的索引
        index: usize,
        /// 上界（长度）
        len: usize,
    },

    /// 无效网格拓扑
    #[error("无效的网格拓扑: {message}")]
    InvalidMesh {
        /// 具体错误信息
        message: String,
    },
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl MhError {
    /// 索引越界
    pub fn index_out_of_bounds(index_type: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            index_type,
            index,
            len,
        }
    }

    /// 无效网格
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }

    /// 检查索引是否在范围内
    #[inline]
    pub fn check_index(index_type: &'static str, index: usize, len: usize) -> MhResult<()> {
        if index >= len {
            Err(Self::index_out_of_bounds(index_type, index, len))
        } else {
            Ok(())
        }
    }
}

// ========================================================================
// 宏
// ========================================================================

/// 条件不满足时提前返回错误
///
/// ```
/// use mh_foundation::{ensure, MhError, MhResult};
///
/// fn non_empty(nodes: &[usize]) -> MhResult<()> {
///     ensure!(!nodes.is_empty(), MhError::invalid_mesh("单元没有节点"));
///     Ok(())
/// }
/// assert!(non_empty(&[]).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err.into());
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds() {
        let err = MhError::index_out_of_bounds("Cell", 10, 5);
        assert!(err.to_string().contains("Cell"));
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("5"));
    }

    #[test]
    fn test_check_index() {
        assert!(MhError::check_index("Cell", 5, 10).is_ok());
        assert_eq!(
            MhError::check_index("Cell", 10, 10),
            Err(MhError::index_out_of_bounds("Cell", 10, 10))
        );
    }

    #[test]
    fn test_ensure_macro() {
        fn check(n_nodes: usize) -> MhResult<()> {
            ensure!(n_nodes > 0, MhError::invalid_mesh("单元没有节点"));
            Ok(())
        }

        assert!(check(3).is_ok());
        assert!(matches!(check(0), Err(MhError::InvalidMesh { .. })));
    }
}
