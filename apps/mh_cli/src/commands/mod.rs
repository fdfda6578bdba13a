// apps/mh_cli/src/commands/mod.rs

//! 子命令实现

pub mod evaluate;
pub mod info;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use mh_param::{Project, ProjectConfig};

/// 读取并构建工程
pub(crate) fn load_project(path: &Path) -> Result<Project> {
    let config = ProjectConfig::from_file(path)
        .with_context(|| format!("无法读取工程文件: {}", path.display()))?;
    config
        .build()
        .with_context(|| format!("工程构建失败: {}", path.display()))
}
