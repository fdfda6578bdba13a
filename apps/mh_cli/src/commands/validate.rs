// apps/mh_cli/src/commands/validate.rs

//! 配置验证命令
//!
//! 构建工程后在每个参数的全部网格实体上求值一次，
//! 提前发现未赋值分组等只会在计算中暴露的问题。

use anyhow::{bail, Result};
use clap::Args;
use mh_param::{evaluate_all, Parameter, ParameterError, Project};
use std::path::PathBuf;
use tracing::{error, info, warn};

use super::load_project;

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 工程文件路径
    #[arg(short, long)]
    pub config: PathBuf,

    /// 求值时刻
    #[arg(short, long, default_value_t = 0.0)]
    pub time: f64,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 验证结果
#[derive(Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn is_ok_strict(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("=== MariHydro 参数验证 ===");

    let project = load_project(&args.config)?;
    let mut result = ValidationResult::default();
    validate_project(&project, args.time, &mut result);

    print_validation_result(&result, args.strict)
}

fn validate_project(project: &Project, t: f64, result: &mut ValidationResult) {
    for parameter in project.parameters.iter() {
        validate_parameter(parameter.as_ref(), project, t, result);
    }
}

fn validate_parameter(
    parameter: &dyn Parameter,
    project: &Project,
    t: f64,
    result: &mut ValidationResult,
) {
    if parameter.number_of_components() == 0 {
        result.add_warning(format!("参数 '{}' 没有分量", parameter.name()));
    }

    let Some(item_type) = parameter.mesh_item_type() else {
        return;
    };
    if let Some(mesh) = parameter.mesh() {
        if mesh.name() != project.mesh.name() {
            result.add_warning(format!(
                "参数 '{}' 定义在网格 '{}' 上, 工程网格为 '{}'",
                parameter.name(),
                mesh.name(),
                project.mesh.name()
            ));
        }
    }

    let n_items = project.mesh.n_items(item_type);
    match evaluate_all(parameter, t, item_type, n_items) {
        Ok(_) => println!("  ✓ {} ({} 个 {})", parameter.name(), n_items, item_type),
        Err(err @ ParameterError::NoDataForGroup { .. }) => {
            error!("{}", err);
            result.add_error(err.to_string());
        }
        Err(err) => {
            warn!("{}", err);
            result.add_error(err.to_string());
        }
    }
}

fn print_validation_result(result: &ValidationResult, strict: bool) -> Result<()> {
    println!();
    for w in &result.warnings {
        println!("  ⚠ {}", w);
    }
    for e in &result.errors {
        println!("  ✗ {}", e);
    }
    println!(
        "\n验证完成: {} 个错误, {} 个警告",
        result.errors.len(),
        result.warnings.len()
    );

    let ok = if strict {
        result.is_ok_strict()
    } else {
        result.is_ok()
    };
    if !ok {
        bail!("验证未通过");
    }
    Ok(())
}
