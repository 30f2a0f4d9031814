use anyhow::Result;
use clap::Parser;
use trivia_review::cli::Cli;
use trivia_review::utils::logging;
use trivia_review::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置，命令行参数优先
    let mut config = Config::from_env()?;
    cli.apply(&mut config);

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run(cli.subcommand()).await?;

    Ok(())
}
