// crates/mh_foundation/src/lib.rs

//! MariHydro Foundation Layer
//!
//! 基础层，提供整个项目共享的错误类型和验证宏。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型 `MhError` 与 `ensure!` 宏
//!
//! # 示例
//!
//! ```
//! use mh_foundation::{MhError, MhResult};
//!
//! fn lookup(values: &[f64], i: usize) -> MhResult<f64> {
//!     MhError::check_index("Cell", i, values.len())?;
//!     Ok(values[i])
//! }
//! assert!(lookup(&[1.0], 3).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{MhError, MhResult};

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{MhError, MhResult};
    pub use crate::ensure;
}
