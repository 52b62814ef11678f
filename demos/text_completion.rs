/// Single completion with default parameters and tracing output.
///
/// Run with: RUST_LOG=ai21_complete=debug cargo run --example text-completion
use ai21_complete::{Ai21Client, Ai21Config, ApiKey, CompletionParams, Message};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Ai21Config::new(ApiKey::Default)
        .with_default_params(CompletionParams::new().max_tokens(200).temperature(0.7));
    let client = Ai21Client::new(config)?;

    // Rough whitespace count; swap in a real tokenizer for billing-grade numbers.
    let encoder = |text: &str| text.split_whitespace().map(|_| 0u32).collect::<Vec<_>>();

    let completion = client
        .completion(
            "j2-mid",
            &[
                Message::system("You are a concise, upbeat assistant.\n"),
                Message::user("Share a fun fact about the ocean."),
            ],
            CompletionParams::new(),
            &encoder,
        )
        .await?;

    if let Some(response) = completion.into_response() {
        println!("Assistant:\n{}", response.content());
        println!(
            "finish_reason={:?} tokens={}/{}/{}",
            response.finish_reason(),
            response.usage.prompt_tokens,
            response.usage.completion_tokens,
            response.usage.total_tokens
        );
    }

    Ok(())
}
