#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dictation_quiz_backend::run().await
}
