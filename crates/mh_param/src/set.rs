// crates/mh_param/src/set.rs

//! 参数集合
//!
//! 持有全部已构建的参数，按名称查找，并在使用方声明分量数时进行核对。

use std::sync::Arc;

use crate::error::{ParamResult, ParameterError};
use crate::parameter::Parameter;

/// 参数集合
#[derive(Debug, Default, Clone)]
pub struct ParameterSet {
    parameters: Vec<Arc<dyn Parameter>>,
}

impl ParameterSet {
    /// 创建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入参数，名称重复时报错
    pub fn insert(&mut self, parameter: Arc<dyn Parameter>) -> ParamResult<()> {
        if self.get(parameter.name()).is_some() {
            return Err(ParameterError::DuplicateName(parameter.name().to_string()));
        }
        self.parameters.push(parameter);
        Ok(())
    }

    /// 按名称获取
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Parameter>> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// 查找参数，并可选地检查分量数
    ///
    /// # 错误
    /// - 不存在: [`ParameterError::NotFound`]
    /// - 分量数不符: [`ParameterError::ComponentMismatch`]
    pub fn find_parameter(
        &self,
        name: &str,
        expected_components: Option<usize>,
    ) -> ParamResult<Arc<dyn Parameter>> {
        let parameter = self
            .get(name)
            .ok_or_else(|| ParameterError::NotFound(name.to_string()))?;

        if let Some(expected) = expected_components {
            let actual = parameter.number_of_components();
            if actual != expected {
                return Err(ParameterError::ComponentMismatch {
                    name: name.to_string(),
                    expected,
                    actual,
                });
            }
        }
        Ok(Arc::clone(parameter))
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Parameter>> {
        self.parameters.iter()
    }

    /// 参数名列表
    pub fn names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name()).collect()
    }
}
