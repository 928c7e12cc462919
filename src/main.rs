use anyhow::Result;
use fetchfile::cli::run;

#[tokio::main]
pub async fn main() -> Result<()> {
    run().await
}
