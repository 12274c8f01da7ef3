#[tokio::main]
async fn main() -> anyhow::Result<()> {
    modfill_lib::main().await
}
