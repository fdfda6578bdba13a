// crates/mh_param/src/config.rs

//! 参数配置
//!
//! 参数以 `type` 字段区分存储策略：
//!
//! ```json
//! { "name": "K", "type": "Group", "group_id_property": "MaterialIDs",
//!   "index_values": [ {"index": 0, "value": 1e-5}, {"index": 1, "values": [1e-4]} ] }
//! { "name": "rho", "type": "Constant", "value": 1000.0 }
//! { "name": "n", "type": "MeshElement", "field_name": "porosity" }
//! { "name": "p0", "type": "MeshNode", "field_name": "pressure" }
//! { "name": "q", "type": "CurveScaled", "curve": "ramp", "parameter": "q0" }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use mh_mesh::MeshData;
use serde::{Deserialize, Serialize};

use crate::curve::CurveConfig;
use crate::error::{ConfigError, ConfigResult};

/// 单个参数的配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParameterConfig {
    /// 常数
    Constant {
        /// 参数名
        name: String,
        /// 标量值
        #[serde(default)]
        value: Option<f64>,
        /// 多分量值
        #[serde(default)]
        values: Option<Vec<f64>>,
    },
    /// 按分组赋值
    Group {
        /// 参数名
        name: String,
        /// 分组编号属性名（整数属性）
        group_id_property: String,
        /// 各分组的值
        index_values: Vec<IndexValueConfig>,
    },
    /// 单元属性
    MeshElement {
        /// 参数名
        name: String,
        /// 浮点属性名
        field_name: String,
    },
    /// 节点属性
    MeshNode {
        /// 参数名
        name: String,
        /// 浮点属性名
        field_name: String,
    },
    /// 曲线缩放
    CurveScaled {
        /// 参数名
        name: String,
        /// 曲线名
        curve: String,
        /// 被缩放的参数名
        parameter: String,
    },
}

impl ParameterConfig {
    /// 参数名
    pub fn name(&self) -> &str {
        match self {
            Self::Constant { name, .. }
            | Self::Group { name, .. }
            | Self::MeshElement { name, .. }
            | Self::MeshNode { name, .. }
            | Self::CurveScaled { name, .. } => name,
        }
    }

    /// 类型名
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "Constant",
            Self::Group { .. } => "Group",
            Self::MeshElement { .. } => "MeshElement",
            Self::MeshNode { .. } => "MeshNode",
            Self::CurveScaled { .. } => "CurveScaled",
        }
    }
}

/// 分组赋值项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexValueConfig {
    /// 分组编号
    pub index: i64,
    /// 标量值
    #[serde(default)]
    pub value: Option<f64>,
    /// 多分量值
    #[serde(default)]
    pub values: Option<Vec<f64>>,
}

/// 解析 `value` / `values` 二选一
///
/// 恰好给出其中一个且结果非空时返回分量数组。
pub(crate) fn value_or_values(
    parameter: &str,
    value: Option<f64>,
    values: Option<&Vec<f64>>,
) -> ConfigResult<Vec<f64>> {
    match (value, values) {
        (Some(v), None) => Ok(vec![v]),
        (None, Some(vs)) if !vs.is_empty() => Ok(vs.clone()),
        (None, Some(_)) => Err(ConfigError::invalid_value(parameter, "values", "不能为空")),
        (Some(_), Some(_)) => Err(ConfigError::invalid_value(
            parameter,
            "value",
            "'value' 与 'values' 只能给出一个",
        )),
        (None, None) => Err(ConfigError::invalid_value(
            parameter,
            "value",
            "缺少 'value' 或 'values'",
        )),
    }
}

/// 工程配置：网格、曲线与参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// 网格
    pub mesh: MeshData,
    /// 命名曲线
    #[serde(default)]
    pub curves: BTreeMap<String, CurveConfig>,
    /// 参数列表
    #[serde(default)]
    pub parameters: Vec<ParameterConfig>,
}

impl ProjectConfig {
    /// 从 JSON 字符串解析
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 序列化为格式化 JSON
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
