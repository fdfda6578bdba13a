// crates/mh_param/src/curve_scaled.rs

//! 曲线缩放参数
//!
//! 以另一个参数为空间分布，乘以随时间变化的曲线值：
//! `value(t, x) = curve(t) * base(t, x)`。

use std::sync::Arc;

use mh_mesh::{Mesh, MeshItemType};

use crate::curve::PiecewiseLinearCurve;
use crate::error::ParamResult;
use crate::parameter::Parameter;
use crate::position::SpatialPosition;

/// 曲线缩放参数
#[derive(Debug)]
pub struct CurveScaledParameter {
    name: String,
    curve: Arc<PiecewiseLinearCurve>,
    base: Arc<dyn Parameter>,
}

impl CurveScaledParameter {
    pub fn new(
        name: impl Into<String>,
        curve: Arc<PiecewiseLinearCurve>,
        base: Arc<dyn Parameter>,
    ) -> Self {
        Self {
            name: name.into(),
            curve,
            base,
        }
    }

    /// 被缩放的参数
    pub fn base(&self) -> &Arc<dyn Parameter> {
        &self.base
    }

    /// 缩放曲线
    pub fn curve(&self) -> &PiecewiseLinearCurve {
        &self.curve
    }
}

impl Parameter for CurveScaledParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn mesh(&self) -> Option<&Mesh> {
        self.base.mesh()
    }

    fn mesh_item_type(&self) -> Option<MeshItemType> {
        self.base.mesh_item_type()
    }

    fn is_time_dependent(&self) -> bool {
        true
    }

    fn number_of_components(&self) -> usize {
        self.base.number_of_components()
    }

    fn evaluate(&self, t: f64, pos: &SpatialPosition) -> ParamResult<Vec<f64>> {
        let scale = self.curve.value_at(t);
        let mut values = self.base.evaluate(t, pos)?;
        values.iter_mut().for_each(|v| *v *= scale);
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::ConstantParameter;

    #[test]
    fn test_scales_with_time() {
        let ramp = PiecewiseLinearCurve::new("ramp", vec![0.0, 10.0], vec![0.0, 2.0]).unwrap();
        let base: Arc<dyn Parameter> = Arc::new(ConstantParameter::new("q0", vec![1.0, 3.0]));
        let p = CurveScaledParameter::new("q", Arc::new(ramp), base);

        assert!(p.is_time_dependent());
        assert_eq!(p.number_of_components(), 2);

        let pos = SpatialPosition::new();
        assert_eq!(p.evaluate(0.0, &pos).unwrap(), vec![0.0, 0.0]);
        let v = p.evaluate(5.0, &pos).unwrap();
        assert!((v[0] - 1.0).abs() < 1e-12);
        assert!((v[1] - 3.0).abs() < 1e-12);
        assert_eq!(p.base().name(), "q0");
    }
}
