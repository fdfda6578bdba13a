// crates/mh_param/src/factory.rs

//! 参数工厂
//!
//! 由 [`ParameterConfig`] 与网格构建参数实例。所有配置错误在进入计算循环之前报告，
//! 不会用零值替代缺失数据。

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use mh_mesh::{Mesh, MeshItemType};
use tracing::{debug, info, warn};

use crate::config::{value_or_values, IndexValueConfig, ParameterConfig, ProjectConfig};
use crate::constant::ConstantParameter;
use crate::curve::PiecewiseLinearCurve;
use crate::curve_scaled::CurveScaledParameter;
use crate::error::{ConfigError, ConfigResult};
use crate::group_based::{CellGroupParameter, NodeGroupParameter};
use crate::mesh_property::{MeshElementParameter, MeshNodeParameter};
use crate::parameter::Parameter;
use crate::set::ParameterSet;

/// 命名曲线表
pub type Curves = BTreeMap<String, Arc<PiecewiseLinearCurve>>;

/// 构建分组参数
///
/// 1. 在网格上查找整数属性 `group_id_property`，其实体类型决定单元/节点特化
/// 2. 校验各分组编号非负且不重复、不超过属性中的最大编号、各分组分量数一致
/// 3. 数值表行数为属性中最大编号加一，未配置的分组保留为空行，在求值时报告
pub fn create_group_based_parameter(
    name: &str,
    group_id_property: &str,
    index_values: &[IndexValueConfig],
    mesh: &Arc<Mesh>,
) -> ConfigResult<Arc<dyn Parameter>> {
    let property = mesh.property::<i32>(group_id_property)?;
    if property.n_components() != 1 {
        return Err(ConfigError::invalid_value(
            name,
            "group_id_property",
            format!(
                "分组属性 '{}' 必须为单分量, 实际 {} 个分量",
                group_id_property,
                property.n_components()
            ),
        ));
    }

    // 同一快照上完成范围校验与未赋值分组统计
    let (max_id, referenced) = {
        let ids = property.read();
        if let Some(&min_id) = ids.iter().min().filter(|&&m| m < 0) {
            return Err(ConfigError::invalid_value(
                name,
                "group_id_property",
                format!("分组属性 '{}' 含负编号 {}", group_id_property, min_id),
            ));
        }
        let referenced: BTreeSet<usize> = ids.iter().map(|&g| g as usize).collect();
        (referenced.last().copied(), referenced)
    };

    let mut rows: BTreeMap<usize, Vec<f64>> = BTreeMap::new();
    let mut n_components: Option<usize> = None;
    for entry in index_values {
        let index = usize::try_from(entry.index).map_err(|_| {
            ConfigError::invalid_value(name, "index", format!("分组编号 {} 必须为非负整数", entry.index))
        })?;
        if max_id.map_or(true, |m| index > m) {
            return Err(ConfigError::invalid_value(
                name,
                "index",
                format!(
                    "分组编号 {} 超出分组属性 '{}' 的最大编号 {}",
                    entry.index,
                    group_id_property,
                    max_id.map_or_else(|| "-".to_string(), |m| m.to_string())
                ),
            ));
        }
        let values = value_or_values(name, entry.value, entry.values.as_ref())?;

        match n_components {
            None => n_components = Some(values.len()),
            Some(expected) if expected != values.len() => {
                return Err(ConfigError::InconsistentComponents {
                    parameter: name.to_string(),
                    index: entry.index,
                    expected,
                    actual: values.len(),
                });
            }
            Some(_) => {}
        }

        if rows.insert(index, values).is_some() {
            return Err(ConfigError::DuplicateIndex {
                parameter: name.to_string(),
                index: entry.index,
            });
        }
    }

    let n_groups = max_id.map_or(0, |m| m + 1);
    let mut values = vec![Vec::new(); n_groups];
    for (index, row) in rows {
        values[index] = row;
    }

    let missing: Vec<usize> = referenced
        .into_iter()
        .filter(|&g| values[g].is_empty())
        .collect();
    if !missing.is_empty() {
        warn!(
            parameter = name,
            groups = ?missing,
            "网格引用的分组未赋值, 求值到这些分组时将报错"
        );
    }

    let parameter: Arc<dyn Parameter> = match property.item_type() {
        MeshItemType::Cell => Arc::new(CellGroupParameter::new(
            name,
            Arc::clone(mesh),
            property,
            values,
        )),
        MeshItemType::Node => Arc::new(NodeGroupParameter::new(
            name,
            Arc::clone(mesh),
            property,
            values,
        )),
    };
    Ok(parameter)
}

/// 构建网格属性参数，属性实体类型必须与参数类型一致
fn create_mesh_property_parameter(
    name: &str,
    field_name: &str,
    expected: MeshItemType,
    mesh: &Arc<Mesh>,
) -> ConfigResult<Arc<dyn Parameter>> {
    let property = mesh.property::<f64>(field_name)?;
    if property.item_type() != expected {
        return Err(ConfigError::invalid_value(
            name,
            "field_name",
            format!(
                "属性 '{}' 定义在 {} 上, 需要 {}",
                field_name,
                property.item_type(),
                expected
            ),
        ));
    }
    let parameter: Arc<dyn Parameter> = match expected {
        MeshItemType::Cell => Arc::new(MeshElementParameter::new(name, Arc::clone(mesh), property)),
        MeshItemType::Node => Arc::new(MeshNodeParameter::new(name, Arc::clone(mesh), property)),
    };
    Ok(parameter)
}

/// 构建单个参数
///
/// `existing` 用于解析曲线缩放参数所引用的参数。
pub fn create_parameter(
    config: &ParameterConfig,
    mesh: &Arc<Mesh>,
    curves: &Curves,
    existing: &ParameterSet,
) -> ConfigResult<Arc<dyn Parameter>> {
    debug!(parameter = config.name(), kind = config.type_name(), "构建参数");
    match config {
        ParameterConfig::Constant {
            name,
            value,
            values,
        } => {
            let values = value_or_values(name, *value, values.as_ref())?;
            Ok(Arc::new(ConstantParameter::new(name.as_str(), values)))
        }
        ParameterConfig::Group {
            name,
            group_id_property,
            index_values,
        } => create_group_based_parameter(name, group_id_property, index_values, mesh),
        ParameterConfig::MeshElement { name, field_name } => {
            create_mesh_property_parameter(name, field_name, MeshItemType::Cell, mesh)
        }
        ParameterConfig::MeshNode { name, field_name } => {
            create_mesh_property_parameter(name, field_name, MeshItemType::Node, mesh)
        }
        ParameterConfig::CurveScaled {
            name,
            curve,
            parameter,
        } => {
            let curve = curves
                .get(curve)
                .cloned()
                .ok_or_else(|| ConfigError::CurveNotFound {
                    parameter: name.clone(),
                    curve: curve.clone(),
                })?;
            let base = existing
                .get(parameter)
                .cloned()
                .ok_or_else(|| ConfigError::UnresolvedReference {
                    parameter: name.clone(),
                    reference: parameter.clone(),
                })?;
            Ok(Arc::new(CurveScaledParameter::new(name.as_str(), curve, base)))
        }
    }
}

/// 构建全部参数
///
/// 曲线缩放参数可以引用列表中任意位置的参数：先构建不含引用的参数，
/// 再反复解析引用，直到全部完成或不再有进展（引用缺失或循环）。
pub fn create_parameters(
    configs: &[ParameterConfig],
    mesh: &Arc<Mesh>,
    curves: &Curves,
) -> ConfigResult<ParameterSet> {
    let mut set = ParameterSet::new();
    let mut pending: Vec<&ParameterConfig> = Vec::new();

    for config in configs {
        if matches!(config, ParameterConfig::CurveScaled { .. }) {
            pending.push(config);
        } else {
            set.insert(create_parameter(config, mesh, curves, &set)?)?;
        }
    }

    while !pending.is_empty() {
        let before = pending.len();
        let mut still_pending = Vec::new();
        for config in pending {
            let resolvable = match config {
                ParameterConfig::CurveScaled { parameter, .. } => set.get(parameter).is_some(),
                _ => true,
            };
            if resolvable {
                set.insert(create_parameter(config, mesh, curves, &set)?)?;
            } else {
                still_pending.push(config);
            }
        }
        if still_pending.len() == before {
            // 无进展：报告第一个无法解析的引用
            return match still_pending[0] {
                ParameterConfig::CurveScaled {
                    name, parameter, ..
                } => Err(ConfigError::UnresolvedReference {
                    parameter: name.clone(),
                    reference: parameter.clone(),
                }),
                other => Err(ConfigError::invalid_value(other.name(), "type", "无法解析")),
            };
        }
        pending = still_pending;
    }

    info!(n_parameters = set.len(), "参数构建完成");
    Ok(set)
}

/// 已构建的工程：网格与参数集合
#[derive(Debug, Clone)]
pub struct Project {
    /// 网格
    pub mesh: Arc<Mesh>,
    /// 曲线
    pub curves: Curves,
    /// 参数
    pub parameters: ParameterSet,
}

impl ProjectConfig {
    /// 构建网格、曲线与全部参数
    pub fn build(&self) -> ConfigResult<Project> {
        let mesh = Arc::new(self.mesh.build()?);
        let curves = self
            .curves
            .iter()
            .map(|(name, config)| {
                PiecewiseLinearCurve::from_config(name.as_str(), config)
                    .map(|curve| (name.clone(), Arc::new(curve)))
            })
            .collect::<ConfigResult<Curves>>()?;
        let parameters = create_parameters(&self.parameters, &mesh, &curves)?;
        Ok(Project {
            mesh,
            curves,
            parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::SpatialPosition;
    use glam::DVec3;

    fn mesh() -> Arc<Mesh> {
        let nodes = vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)];
        let mut mesh = Mesh::new("line", nodes, &[vec![0, 1], vec![1, 2]]).unwrap();
        mesh.add_property("MaterialIDs", MeshItemType::Cell, 1, vec![0, 2])
            .unwrap();
        Arc::new(mesh)
    }

    fn iv(index: i64, values: &[f64]) -> IndexValueConfig {
        IndexValueConfig {
            index,
            value: None,
            values: Some(values.to_vec()),
        }
    }

    #[test]
    fn test_group_table_layout() {
        let p = create_group_based_parameter(
            "K",
            "MaterialIDs",
            &[iv(0, &[1.0]), iv(2, &[3.0])],
            &mesh(),
        )
        .unwrap();
        assert_eq!(p.number_of_components(), 1);
        assert_eq!(p.evaluate(0.0, &SpatialPosition::at_element(1)).unwrap(), vec![3.0]);
    }

    #[test]
    fn test_group_missing_data_is_lazy() {
        // 分组 2 被网格引用但未赋值：构建成功，求值时报错
        let p = create_group_based_parameter("K", "MaterialIDs", &[iv(0, &[1.0])], &mesh())
            .unwrap();
        assert!(p.evaluate(0.0, &SpatialPosition::at_element(0)).is_ok());
        assert!(p.evaluate(0.0, &SpatialPosition::at_element(1)).is_err());
    }

    #[test]
    fn test_group_rejects_bad_index_values() {
        let m = mesh();
        assert!(matches!(
            create_group_based_parameter("K", "MaterialIDs", &[iv(-1, &[1.0])], &m),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            create_group_based_parameter("K", "MaterialIDs", &[iv(0, &[1.0]), iv(0, &[2.0])], &m),
            Err(ConfigError::DuplicateIndex { index: 0, .. })
        ));
        assert!(matches!(
            create_group_based_parameter("K", "MaterialIDs", &[iv(0, &[1.0]), iv(2, &[1.0, 2.0])], &m),
            Err(ConfigError::InconsistentComponents { index: 2, expected: 1, actual: 2, .. })
        ));
    }

    #[test]
    fn test_group_index_beyond_mesh_ids() {
        let m = mesh();
        for index in [3, 10_000_000_000, i64::MAX] {
            let err = create_group_based_parameter("K", "MaterialIDs", &[iv(index, &[1.0])], &m)
                .unwrap_err();
            assert!(
                matches!(&err, ConfigError::InvalidValue { key, .. } if key == "index"),
                "{err}"
            );
        }
    }

    #[test]
    fn test_group_property_must_be_single_component() {
        let nodes = vec![DVec3::ZERO, DVec3::X];
        let mut mesh = Mesh::new("line", nodes, &[vec![0, 1]]).unwrap();
        mesh.add_property("Pairs", MeshItemType::Cell, 2, vec![0, 1])
            .unwrap();

        let err = create_group_based_parameter("K", "Pairs", &[iv(0, &[1.0])], &Arc::new(mesh))
            .unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::InvalidValue { key, .. } if key == "group_id_property"
        ));
        assert!(err.to_string().contains("Pairs"));
    }

    #[test]
    fn test_negative_group_id_on_mesh() {
        let nodes = vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)];
        let mut mesh = Mesh::new("line", nodes, &[vec![0, 1], vec![1, 2]]).unwrap();
        mesh.add_property("MaterialIDs", MeshItemType::Cell, 1, vec![-1, 0])
            .unwrap();

        let err = create_group_based_parameter("K", "MaterialIDs", &[iv(0, &[1.0])], &Arc::new(mesh))
            .unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::InvalidValue { key, .. } if key == "group_id_property"
        ));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_curve_scaled_reference_order() {
        let configs: Vec<ParameterConfig> = serde_json::from_str(
            r#"[
                {"name": "q", "type": "CurveScaled", "curve": "ramp", "parameter": "q0"},
                {"name": "q0", "type": "Constant", "value": 2.0}
            ]"#,
        )
        .unwrap();
        let mut curves = Curves::new();
        curves.insert(
            "ramp".into(),
            Arc::new(PiecewiseLinearCurve::new("ramp", vec![0.0, 1.0], vec![0.0, 1.0]).unwrap()),
        );

        let set = create_parameters(&configs, &mesh(), &curves).unwrap();
        let q = set.find_parameter("q", Some(1)).unwrap();
        assert_eq!(q.evaluate(0.5, &SpatialPosition::new()).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_curve_scaled_cycle_rejected() {
        let configs: Vec<ParameterConfig> = serde_json::from_str(
            r#"[
                {"name": "a", "type": "CurveScaled", "curve": "ramp", "parameter": "b"},
                {"name": "b", "type": "CurveScaled", "curve": "ramp", "parameter": "a"}
            ]"#,
        )
        .unwrap();
        let mut curves = Curves::new();
        curves.insert(
            "ramp".into(),
            Arc::new(PiecewiseLinearCurve::new("ramp", vec![0.0], vec![1.0]).unwrap()),
        );
        assert!(matches!(
            create_parameters(&configs, &mesh(), &curves),
            Err(ConfigError::UnresolvedReference { .. })
        ));
    }
}
