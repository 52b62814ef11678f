/// Streaming completion: prints the raw response lines as they arrive.
///
/// Run with: cargo run --example stream-completion
use ai21_complete::{Ai21Client, Ai21Config, ApiKey, CompletionParams, Message};
use dotenv::dotenv;
use futures::StreamExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let client = Ai21Client::new(Ai21Config::new(ApiKey::Default))?;
    let no_usage = |_: &str| Vec::<u32>::new();

    let completion = client
        .completion(
            "j2-ultra",
            &[Message::user("Explain photosynthesis step by step.")],
            CompletionParams::new().max_tokens(256).stream(true),
            &no_usage,
        )
        .await?;

    let Some(mut lines) = completion.into_stream() else {
        return Ok(());
    };

    while let Some(line) = lines.next().await {
        match line {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("\nError during streaming: {e}");
                break;
            }
        }
    }

    Ok(())
}
