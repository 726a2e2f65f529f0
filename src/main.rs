#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lotto::cli::run().await
}
