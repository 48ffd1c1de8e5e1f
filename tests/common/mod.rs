use anyhow::anyhow;
use async_trait::async_trait;
use legal_assistant::services::completion::TextGenerator;

/// Always fails, with an error text that must never reach the caller.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _system: &str, _prompt: &str) -> anyhow::Result<String> {
        Err(anyhow!("connection refused (os error 111) at 10.0.0.7:443"))
    }
}
