use anyhow::Result;
use clap::Parser;
use seashell_add_file::orchestrator::app::exit_status;
use seashell_add_file::orchestrator::AddFileRequest;
use seashell_add_file::utils::logging;
use seashell_add_file::{App, Config};
use std::path::PathBuf;
use std::process::ExitCode;

/// 向 Seashell 项目的题目中添加文件
#[derive(Parser, Debug)]
#[command(name = "seashell-add-file", version)]
struct Cli {
    /// 项目ID
    #[arg(long, env = "SEASHELL_PROJECT")]
    project: String,

    /// 题目名称
    #[arg(long, env = "SEASHELL_QUESTION")]
    question: String,

    /// 新建文件名，按扩展名生成初始内容
    #[arg(long)]
    name: Option<String>,

    /// 以 JSON 输出批次报告
    #[arg(long)]
    json: bool,

    /// 要上传的本地文件
    uploads: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    let request = AddFileRequest {
        project: cli.project,
        question: cli.question,
        name: cli.name,
        uploads: cli.uploads,
        json: cli.json,
    };

    // 初始化并运行应用
    let success = App::initialize(config, request)?.run().await?;

    Ok(ExitCode::from(exit_status(success)))
}
