use dotenvy::dotenv;
use symbio_sdk::{generate_response, Config, Mood};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let mut args = std::env::args().skip(1);
    let mood: Mood = args
        .next()
        .as_deref()
        .unwrap_or("Neutral")
        .parse()
        .expect("mood must be one of Joyful, Happy, Neutral, Sad, Depressed");
    let thoughts = args.collect::<Vec<_>>().join(" ");

    let config = Config::from_env().expect("API_KEY must be set");
    let model = config.google_model();

    match generate_response(&model, mood, Some(thoughts.as_str())).await {
        Ok(result) => {
            println!("Advice: {}", result.advice);
            println!("Quote: {}", result.quote);
            for resource in result.resources.unwrap_or_default() {
                println!("- {} ({})", resource.title, resource.search_url());
            }
        }
        Err(error) => {
            eprintln!("{:?}: {error}", error.kind());
            eprintln!("{}", error.user_message());
        }
    }
}
