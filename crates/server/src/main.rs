#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sqlsage_server::start().await
}
