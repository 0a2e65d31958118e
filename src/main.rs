use anyhow::Result;
use render_complete::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
