#[tokio::main]
async fn main() -> std::io::Result<()> {
    actions_server::run_with_config().await
}
