use std::time::Duration;

/// One-shot manual smoke test against a running feed service: fetches the
/// question feed once and prints it, or a categorized failure.
#[tokio::main]
async fn main() {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:8000/questions".to_string());

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to build HTTP client");

    match fetch_feed(&client, &url).await {
        Ok(body) => println!("{}", body),
        Err(e) => {
            if e.is_timeout() {
                eprintln!("Server took too long to respond.");
            } else if e.is_connect() {
                eprintln!("Connection error: {}", e);
            } else {
                eprintln!("Request error: {}", e);
            }
            std::process::exit(1);
        }
    }
}

async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body: serde_json::Value = response.json().await?;
    Ok(serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string()))
}
