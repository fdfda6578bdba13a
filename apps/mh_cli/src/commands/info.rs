// apps/mh_cli/src/commands/info.rs

//! 信息显示命令
//!
//! 显示网格、属性、曲线和参数概况。

use anyhow::Result;
use clap::Args;
use mh_mesh::PropertyEntry;
use std::path::PathBuf;
use tracing::info;

use super::load_project;

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// 工程文件路径
    #[arg(short, long)]
    pub config: PathBuf,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    info!("=== MariHydro 参数信息 ===");
    let project = load_project(&args.config)?;
    let mesh = &project.mesh;

    println!("=== 网格 ===");
    println!("名称: {}", mesh.name());
    println!("节点数: {}", mesh.n_nodes());
    println!("单元数: {}", mesh.n_cells());

    println!("\n=== 属性 ===");
    for (name, entry) in mesh.properties().iter() {
        let (min, max) = match entry {
            PropertyEntry::Int(v) => {
                let data = v.read();
                (
                    data.iter().min().map(|x| *x as f64),
                    data.iter().max().map(|x| *x as f64),
                )
            }
            PropertyEntry::Double(v) => {
                let data = v.read();
                (
                    data.iter().copied().reduce(f64::min),
                    data.iter().copied().reduce(f64::max),
                )
            }
        };
        println!(
            "  {:<20} {:<6} {:<4} 分量={} 范围=[{}, {}]",
            name,
            entry.type_name(),
            entry.item_type(),
            entry.n_components(),
            min.map_or("-".to_string(), |v| v.to_string()),
            max.map_or("-".to_string(), |v| v.to_string()),
        );
    }

    println!("\n=== 曲线 ===");
    for (name, curve) in &project.curves {
        let (start, end) = curve.range();
        println!("  {:<20} [{}, {}]", name, start, end);
    }

    println!("\n=== 参数 ===");
    for p in project.parameters.iter() {
        println!(
            "  {:<20} 分量={} 实体={} 随时间变化={}",
            p.name(),
            p.number_of_components(),
            p.mesh_item_type().map_or("-", |t| t.name()),
            if p.is_time_dependent() { "是" } else { "否" },
        );
    }

    Ok(())
}
