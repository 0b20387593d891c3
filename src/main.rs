use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    thermodash_lib::run(std::env::args_os().nth(1).map(PathBuf::from)).await
}
