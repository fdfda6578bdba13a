// crates/mh_mesh/src/lib.rs

//! MariHydro 网格模块
//!
//! 提供参数层所需的网格句柄与属性向量。
//!
//! # 核心类型
//!
//! - [`Mesh`]: 只读网格（节点坐标、单元连接、属性集合）
//! - [`PropertyVector`]: 依附于单元或节点的多分量数据，通过 `Arc` 共享
//! - [`MeshData`]: 可序列化的网格描述
//!
//! # 示例
//!
//! ```rust
//! use glam::DVec3;
//! use mh_mesh::{Mesh, MeshItemType};
//!
//! let nodes = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
//! let mut mesh = Mesh::new("tri", nodes, &[vec![0, 1, 2]]).unwrap();
//! mesh.add_property("MaterialIDs", MeshItemType::Cell, 1, vec![0i32]).unwrap();
//!
//! let ids = mesh.property::<i32>("MaterialIDs").unwrap();
//! assert_eq!(ids.get(0), Some(0));
//! ```

pub mod error;
pub mod mesh;
pub mod mesh_data;
pub mod property;

pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use mesh_data::{MeshData, PropertyData, PropertyValues};
pub use property::{MeshItemType, Properties, PropertyEntry, PropertyValue, PropertyVector};
