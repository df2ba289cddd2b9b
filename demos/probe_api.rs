use memo_spa::api::ApiClient;
use memo_spa::config;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let base = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| config::api_base_url(config::DEV_MODE).to_string());

    println!("--- Headless probe against {} ---", base);
    let api = ApiClient::with_base(base);

    println!("Fetching random sequence (count=5)...");
    match api.random_sequence(5).await {
        Ok(seq) => {
            println!("Got {} values:", seq.len());
            for (pos, value) in seq.ordered() {
                println!("  {:>2}: {}", pos, value);
            }
        }
        Err(e) => eprintln!("Sequence fetch failed: {}", e),
    }

    println!("Fetching memo sections...");
    match api.sections().await {
        Ok(sections) => {
            println!("Got {} sections:", sections.len());
            for section in sections {
                println!("  [{}] {} ({} notes)", section.id, section.name, section.notes.len());
                for note in section.notes {
                    println!("      - {} -> {}", note.name, note.url);
                }
            }
        }
        Err(e) => eprintln!("Sections fetch failed: {}", e),
    }

    Ok(())
}
