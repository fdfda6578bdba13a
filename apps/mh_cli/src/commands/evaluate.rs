// apps/mh_cli/src/commands/evaluate.rs

//! 参数求值命令
//!
//! 在指定单元/节点，或在参数所依附实体的全部位置上求值，结果以 JSON 输出。

use anyhow::{bail, Result};
use clap::Args;
use mh_param::{evaluate_all, SpatialPosition};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use super::load_project;

/// 求值参数
#[derive(Args)]
pub struct EvaluateArgs {
    /// 工程文件路径
    #[arg(short, long)]
    pub config: PathBuf,

    /// 参数名
    #[arg(short, long)]
    pub parameter: String,

    /// 求值时刻
    #[arg(short, long, default_value_t = 0.0)]
    pub time: f64,

    /// 单元编号
    #[arg(long, conflicts_with = "all")]
    pub cell: Option<usize>,

    /// 节点编号
    #[arg(long, conflicts_with = "all")]
    pub node: Option<usize>,

    /// 在全部实体上求值
    #[arg(long)]
    pub all: bool,
}

#[derive(Serialize)]
struct Evaluation<'a> {
    parameter: &'a str,
    time: f64,
    values: Vec<Vec<f64>>,
}

/// 执行求值命令
pub fn execute(args: EvaluateArgs) -> Result<()> {
    let project = load_project(&args.config)?;
    let parameter = project
        .parameters
        .find_parameter(&args.parameter, None)?;

    let values = if args.all {
        let Some(item_type) = parameter.mesh_item_type() else {
            bail!("参数 '{}' 不依附于网格实体, 不能使用 --all", args.parameter);
        };
        let n_items = project.mesh.n_items(item_type);
        debug!(parameter = %args.parameter, %item_type, n_items, "批量求值");
        evaluate_all(parameter.as_ref(), args.time, item_type, n_items)?
    } else {
        let mut pos = SpatialPosition::new();
        if let Some(cell) = args.cell {
            pos.set_element_id(cell);
        }
        if let Some(node) = args.node {
            pos.set_node_id(node);
        }
        vec![parameter.evaluate(args.time, &pos)?]
    };

    let output = Evaluation {
        parameter: &args.parameter,
        time: args.time,
        values,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
