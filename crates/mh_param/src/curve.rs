// crates/mh_param/src/curve.rs

//! 分段线性曲线
//!
//! 用于对参数做时间缩放。支持三种外推模式：
//! - `Clamp`: 超出范围时返回边界值（默认）
//! - `Linear`: 使用边界斜率延伸
//! - `Cyclic`: 周期性重复
//!
//! ```
//! use mh_param::curve::PiecewiseLinearCurve;
//!
//! let ramp = PiecewiseLinearCurve::new("ramp", vec![0.0, 10.0], vec![0.0, 1.0]).unwrap();
//! assert!((ramp.value_at(5.0) - 0.5).abs() < 1e-12);
//! assert!((ramp.value_at(20.0) - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// 外推模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrapolationMode {
    /// t < t_start -> values[0], t > t_end -> values[n-1]
    #[default]
    Clamp,
    /// 使用首/末两个点的斜率线性外推
    Linear,
    /// t -> t_start + (t - t_start) mod (t_end - t_start)
    Cyclic,
}

/// 曲线配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveConfig {
    /// 横坐标（严格单调递增）
    pub coords: Vec<f64>,
    /// 对应的值
    pub values: Vec<f64>,
    /// 外推模式
    #[serde(default)]
    pub extrapolation: ExtrapolationMode,
}

/// 分段线性曲线
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinearCurve {
    name: String,
    coords: Vec<f64>,
    values: Vec<f64>,
    extrapolation: ExtrapolationMode,
}

impl PiecewiseLinearCurve {
    /// 创建曲线
    ///
    /// # 错误
    /// - 横坐标与值长度不同或为空
    /// - 横坐标不是严格单调递增
    pub fn new(name: impl Into<String>, coords: Vec<f64>, values: Vec<f64>) -> ConfigResult<Self> {
        let name = name.into();
        let invalid = |reason: String| ConfigError::InvalidCurve {
            curve: name.clone(),
            reason,
        };

        if coords.len() != values.len() {
            return Err(invalid(format!(
                "横坐标 {} 个, 值 {} 个",
                coords.len(),
                values.len()
            )));
        }
        if coords.is_empty() {
            return Err(invalid("曲线为空".into()));
        }
        if let Some(i) = (1..coords.len()).find(|&i| coords[i] <= coords[i - 1]) {
            return Err(invalid(format!(
                "横坐标必须严格递增: coords[{}]={} <= coords[{}]={}",
                i,
                coords[i],
                i - 1,
                coords[i - 1]
            )));
        }

        Ok(Self {
            name,
            coords,
            values,
            extrapolation: ExtrapolationMode::Clamp,
        })
    }

    /// 由配置创建
    pub fn from_config(name: impl Into<String>, config: &CurveConfig) -> ConfigResult<Self> {
        Ok(Self::new(name, config.coords.clone(), config.values.clone())?
            .with_extrapolation(config.extrapolation))
    }

    /// 设置外推模式
    pub fn with_extrapolation(mut self, mode: ExtrapolationMode) -> Self {
        self.extrapolation = mode;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 横坐标范围
    pub fn range(&self) -> (f64, f64) {
        (self.coords[0], self.coords[self.coords.len() - 1])
    }

    /// 求 `t` 处的值
    pub fn value_at(&self, t: f64) -> f64 {
        let (t_start, t_end) = self.range();
        if t >= t_start && t <= t_end {
            return self.interpolate(t);
        }

        let n = self.coords.len();
        match self.extrapolation {
            ExtrapolationMode::Clamp => {
                if t < t_start {
                    self.values[0]
                } else {
                    self.values[n - 1]
                }
            }
            ExtrapolationMode::Cyclic => {
                let duration = t_end - t_start;
                if duration < 1e-12 {
                    return self.values[0];
                }
                self.interpolate(t_start + (t - t_start).rem_euclid(duration))
            }
            ExtrapolationMode::Linear => {
                if n < 2 {
                    return self.values[0];
                }
                if t < t_start {
                    let slope = (self.values[1] - self.values[0]) / (self.coords[1] - t_start);
                    self.values[0] + slope * (t - t_start)
                } else {
                    let slope = (self.values[n - 1] - self.values[n - 2])
                        / (t_end - self.coords[n - 2]);
                    self.values[n - 1] + slope * (t - t_end)
                }
            }
        }
    }

    /// 区间内插值（假设 t 在范围内）
    fn interpolate(&self, t: f64) -> f64 {
        let n = self.coords.len();
        // 第一个大于 t 的横坐标位置
        let upper = self.coords.partition_point(|&c| c <= t);
        if upper >= n {
            return self.values[n - 1];
        }
        let idx = upper.saturating_sub(1);

        let (t0, t1) = (self.coords[idx], self.coords[idx + 1]);
        let (v0, v1) = (self.values[idx], self.values[idx + 1]);
        v0 + (t - t0) / (t1 - t0) * (v1 - v0)
    }
}
