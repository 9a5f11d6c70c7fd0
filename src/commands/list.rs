//! List remote articles

use anyhow::Result;

use crate::Travesia;

/// Fetch the archive (optionally one category) and print it as a table
pub async fn run(app: &Travesia, category: Option<&str>) -> Result<()> {
    let articles = app.notion.query_articles(category).await;

    match category {
        Some(name) => println!("Articles in {} ({}):", name, articles.len()),
        None => println!("Articles ({}):", articles.len()),
    }

    for article in &articles {
        println!(
            "  {} - {} [{}]",
            if article.date.is_empty() {
                "----------"
            } else {
                article.date.as_str()
            },
            article.title,
            article.category
        );
    }

    Ok(())
}
