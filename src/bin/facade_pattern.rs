//! Facade pattern demo.
//!
//! Responses come from canned fixtures; no request leaves the process.
//!
//! Run with: cargo run --bin facade_pattern

use anyhow::{Context, Result};
use design_patterns::banner;
use design_patterns::facade::{
    build_url, query_string, verbose_get_user_posts, verbose_get_users, ApiFacade,
    FixtureTransport,
};
use design_patterns::CatalogConfig;

fn main() -> Result<()> {
    design_patterns::init_tracing();
    let config = CatalogConfig::load().context("failed to load catalog config")?;
    let base = config.api_base_url.as_str();
    let transport = FixtureTransport::sample(base).context("failed to build fixtures")?;

    banner("Without A Facade");
    for user in verbose_get_users(&transport, base)? {
        let posts = verbose_get_user_posts(&transport, base, user.id)?;
        println!("{} = {}", user.name, posts.len());
    }

    banner("With A Facade");
    let api = ApiFacade::new(base, &transport)?;
    for (name, count) in api.post_counts()? {
        println!("{name} = {count}");
    }

    banner("What The Facade Hides");
    println!("query: {}", query_string(&[("userId", "1"), ("_limit", "5")]));
    println!("url:   {}", build_url(base, "posts", &[("userId", "1")])?);
    match api.get_json::<Vec<serde_json::Value>>("comments", &[]) {
        Ok(comments) => println!("Unexpected {} comments", comments.len()),
        Err(e) => println!("Expected error: {e}"),
    }
    println!("requests made: {}", transport.requests().len());

    Ok(())
}
