use anyhow::Result;
use clap::Parser;
use duebrief_core::app::OrchestratorBuilder;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod console;
mod file_source;
mod sendgrid;
mod ses;
mod todoist;

use cli::Cli;

const DEFAULT_LOG_FILTER: &str = "duebrief=info,duebrief_core=info";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // (A) ポートと設定を組み立てる（不足があればここで止まる）
    let orchestrator = OrchestratorBuilder::new()
        .source(cli.task_source()?)
        .mailer(cli.mailer().await?)
        .config(cli.digest_config())
        .build()?;

    // (B) 一回分の実行: 取得 → 要約 → 描画 → 送信
    match orchestrator.run().await {
        Ok(report) => {
            info!(run_id = %report.run_id, "digest run finished");
            println!("{}", serde_json::to_string(&report)?);
            Ok(())
        }
        Err(e) => {
            error!(kind = ?e.kind(), error = %e, "digest run failed");
            Err(e.into())
        }
    }
}
