// crates/mh_mesh/src/property.rs

//! 网格属性向量
//!
//! 为网格实体(单元、节点)附加带名称、带类型的多分量数据。
//!
//! # 设计原则
//! - 共享而非拷贝：属性向量通过 `Arc` 在网格与参数之间共享，
//!   参数持有的是同一份数据的句柄
//! - 可观察更新：数据由 `RwLock` 保护，持有方写入后所有读者立即可见
//! - 类型区分：整数属性(如材料分组 ID)与浮点属性分开存储
//!
//! # 示例
//! ```
//! use mh_mesh::property::{MeshItemType, PropertyVector};
//!
//! let ids = PropertyVector::new("MaterialIDs", MeshItemType::Cell, 1, vec![0, 1, 1]).unwrap();
//! assert_eq!(ids.n_tuples(), 3);
//! assert_eq!(ids.get(2), Some(1));
//!
//! ids.set(2, 0).unwrap();
//! assert_eq!(ids.get(2), Some(0));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use mh_foundation::MhError;

/// 网格实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshItemType {
    /// 节点
    Node,
    /// 单元
    Cell,
}

impl MeshItemType {
    /// 获取类型名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::Cell => "Cell",
        }
    }
}

impl fmt::Display for MeshItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 带名称的多分量属性向量
///
/// 数据按实体交错存储：第 `i` 个实体的第 `c` 个分量位于 `i * n_components + c`。
#[derive(Debug)]
pub struct PropertyVector<T> {
    name: String,
    item_type: MeshItemType,
    n_components: usize,
    data: RwLock<Vec<T>>,
}

impl<T: Copy> PropertyVector<T> {
    /// 创建属性向量
    ///
    /// # 错误
    /// `n_components == 0` 或数据长度不能被分量数整除时返回 [`MeshError::InvalidComponents`]
    pub fn new(
        name: impl Into<String>,
        item_type: MeshItemType,
        n_components: usize,
        data: Vec<T>,
    ) -> MeshResult<Self> {
        let name = name.into();
        if n_components == 0 || data.len() % n_components != 0 {
            return Err(MeshError::InvalidComponents {
                name,
                n_components,
                len: data.len(),
            });
        }
        Ok(Self {
            name,
            item_type,
            n_components,
            data: RwLock::new(data),
        })
    }

    /// 属性名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 所依附的网格实体类型
    pub fn item_type(&self) -> MeshItemType {
        self.item_type
    }

    /// 每个实体的分量数
    pub fn n_components(&self) -> usize {
        self.n_components
    }

    /// 实体数量（元组数）
    pub fn n_tuples(&self) -> usize {
        self.data.read().len() / self.n_components
    }

    /// 数据总长度
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// 按扁平索引读取
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.read().get(index).copied()
    }

    /// 读取第 `tuple` 个实体的第 `component` 个分量
    #[inline]
    pub fn component(&self, tuple: usize, component: usize) -> Option<T> {
        if component >= self.n_components {
            return None;
        }
        let index = tuple
            .checked_mul(self.n_components)?
            .checked_add(component)?;
        self.get(index)
    }

    /// 拷贝出第 `tuple` 个实体的全部分量
    pub fn tuple(&self, tuple: usize) -> Option<Vec<T>> {
        let start = tuple.checked_mul(self.n_components)?;
        let end = start.checked_add(self.n_components)?;
        self.data.read().get(start..end).map(<[T]>::to_vec)
    }

    /// 按扁平索引写入
    pub fn set(&self, index: usize, value: T) -> MeshResult<()> {
        let mut data = self.data.write();
        MhError::check_index("property", index, data.len())?;
        data[index] = value;
        Ok(())
    }

    /// 获取读守卫，用于批量访问时只加一次锁
    pub fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.data.read()
    }

    /// 拷贝全部数据
    pub fn to_vec(&self) -> Vec<T> {
        self.data.read().clone()
    }
}

// ============================================================================
// 属性存储
// ============================================================================

/// 属性值类型
///
/// 为 [`Properties`] 提供按类型存取的静态分派。
pub trait PropertyValue: Copy + Send + Sync + fmt::Debug + 'static {
    /// 类型名称（用于错误信息）
    const TYPE_NAME: &'static str;

    /// 包装为存储条目
    fn wrap(vector: Arc<PropertyVector<Self>>) -> PropertyEntry;

    /// 从存储条目中取出同类型向量
    fn unwrap(entry: &PropertyEntry) -> Option<&Arc<PropertyVector<Self>>>;
}

/// 属性存储条目
#[derive(Debug, Clone)]
pub enum PropertyEntry {
    /// 整数属性（分组 ID 等）
    Int(Arc<PropertyVector<i32>>),
    /// 浮点属性
    Double(Arc<PropertyVector<f64>>),
}

impl PropertyEntry {
    /// 数据类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => i32::TYPE_NAME,
            Self::Double(_) => f64::TYPE_NAME,
        }
    }

    /// 所依附的网格实体类型
    pub fn item_type(&self) -> MeshItemType {
        match self {
            Self::Int(v) => v.item_type(),
            Self::Double(v) => v.item_type(),
        }
    }

    /// 分量数
    pub fn n_components(&self) -> usize {
        match self {
            Self::Int(v) => v.n_components(),
            Self::Double(v) => v.n_components(),
        }
    }
}

impl PropertyValue for i32 {
    const TYPE_NAME: &'static str = "int";

    fn wrap(vector: Arc<PropertyVector<Self>>) -> PropertyEntry {
        PropertyEntry::Int(vector)
    }

    fn unwrap(entry: &PropertyEntry) -> Option<&Arc<PropertyVector<Self>>> {
        match entry {
            PropertyEntry::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl PropertyValue for f64 {
    const TYPE_NAME: &'static str = "double";

    fn wrap(vector: Arc<PropertyVector<Self>>) -> PropertyEntry {
        PropertyEntry::Double(vector)
    }

    fn unwrap(entry: &PropertyEntry) -> Option<&Arc<PropertyVector<Self>>> {
        match entry {
            PropertyEntry::Double(v) => Some(v),
            _ => None,
        }
    }
}

/// 按名称索引的属性集合
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: BTreeMap<String, PropertyEntry>,
}

impl Properties {
    /// 创建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入属性向量，同名属性已存在时报错
    pub fn insert<T: PropertyValue>(
        &mut self,
        vector: PropertyVector<T>,
    ) -> MeshResult<Arc<PropertyVector<T>>> {
        if self.entries.contains_key(vector.name()) {
            return Err(MeshError::DuplicateProperty(vector.name().to_string()));
        }
        let name = vector.name().to_string();
        let shared = Arc::new(vector);
        self.entries.insert(name, T::wrap(Arc::clone(&shared)));
        Ok(shared)
    }

    /// 按名称和类型获取共享句柄
    ///
    /// 返回的 `Arc` 与存储内部指向同一份数据。
    pub fn get<T: PropertyValue>(&self, name: &str) -> Option<Arc<PropertyVector<T>>> {
        self.entries.get(name).and_then(T::unwrap).cloned()
    }

    /// 获取未区分类型的条目
    pub fn entry(&self, name: &str) -> Option<&PropertyEntry> {
        self.entries.get(name)
    }

    /// 是否存在同名属性
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// 属性数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按名称顺序列出所有属性
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
