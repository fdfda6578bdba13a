// crates/mh_param/src/constant.rs

//! 常数参数：在所有位置、所有时刻取同一值。

use crate::error::ParamResult;
use crate::parameter::Parameter;
use crate::position::SpatialPosition;

/// 常数参数
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantParameter {
    name: String,
    values: Vec<f64>,
}

impl ConstantParameter {
    /// 多分量常数
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// 标量常数
    pub fn scalar(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, vec![value])
    }

    /// 常数值
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Parameter for ConstantParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_time_dependent(&self) -> bool {
        false
    }

    fn number_of_components(&self) -> usize {
        self.values.len()
    }

    fn evaluate(&self, _t: f64, _pos: &SpatialPosition) -> ParamResult<Vec<f64>> {
        Ok(self.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_everywhere() {
        let p = ConstantParameter::new("E", vec![1.0, 2.0]);
        assert_eq!(p.number_of_components(), 2);
        assert!(!p.is_time_dependent());
        assert!(p.mesh().is_none());

        let empty = SpatialPosition::new();
        assert_eq!(p.evaluate(0.0, &empty).unwrap(), vec![1.0, 2.0]);
        assert_eq!(
            p.evaluate(100.0, &SpatialPosition::at_node(42)).unwrap(),
            vec![1.0, 2.0]
        );
    }

    #[test]
    fn test_scalar() {
        let p = ConstantParameter::scalar("rho", 1000.0);
        assert_eq!(p.values(), &[1000.0]);
    }
}
