// apps/mh_cli/src/main.rs

//! MariHydro 参数工具命令行界面
//!
//! 读取 JSON 工程文件（网格 + 曲线 + 参数），检查并求值参数。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// MariHydro 参数工具
#[derive(Parser)]
#[command(name = "mh_cli")]
#[command(author = "MariHydro Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MariHydro spatial parameter inspection tool", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 显示工程信息
    Info(commands::info::InfoArgs),
    /// 验证工程配置
    Validate(commands::validate::ValidateArgs),
    /// 参数求值
    Evaluate(commands::evaluate::EvaluateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Info(args) => commands::info::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Evaluate(args) => commands::evaluate::execute(args),
    }
}
