//! Query the search endpoint for an author and save the result
//!
//! ```bash
//! cargo run --example query_books -- "Agatha Christie" data/christie.json [config.json]
//! ```

use book_query::{BookQuery, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("book_query=debug")
        .init();

    let mut args = std::env::args().skip(1);
    let author = args.next().unwrap_or_else(|| "Agatha Christie".to_string());
    let output = args.next().unwrap_or_else(|| "data/books.json".to_string());

    let config = match args.next() {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    let books = BookQuery::new(&config)?;
    tracing::info!(url = %books.search_url(&author), output = %output, "querying books");

    books.save_books(&author, &output).await;

    Ok(())
}
