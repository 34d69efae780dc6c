//! Expand a shortened URL with the default client.
//!
//! ```bash
//! cargo run -p unshort-http --example basic_usage -- https://git.io/typing-svg
//! ```

#[tokio::main]
async fn main() {
    let short_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://git.io/typing-svg".to_string());
    println!("Expanding URL: {short_url}");

    match unshort_http::expand_url(&short_url).await {
        Ok(expanded) => println!("Expanded URL: {expanded}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}
