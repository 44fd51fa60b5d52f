use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lsb_watermark::{cli::Cli, config::Config, handler::run};

/// 初始化日志系统。默认级别为 INFO，`--verbose` 时为 DEBUG，`RUST_LOG` 可进一步覆盖。
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

/// 程序的主入口点
///
/// 负责解析并校验命令行参数，然后根据模式执行创建或提取水印
fn main() -> anyhow::Result<()> {
    // 参数错误由 clap 报告并在任何文件操作之前退出
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = Config::try_from(cli)?;
    run(&config)
}
