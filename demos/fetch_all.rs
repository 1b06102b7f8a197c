//! End-to-end async demo:
//! 1. profile   2. countries   3. organisation by id

use portal_sdk::PortalAsync;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) build async client
    let client = PortalAsync::builder("https://portal.example.com")
        .no_system_proxy()
        .build()?;

    // 2) current user's profile
    let profile = client.profile().await?;
    println!("Profile: {}", profile["name"]);

    // 3) country list
    let countries = client.countries().await?;
    let total = countries.as_array().map_or(0, |a| a.len());
    println!("Countries: {total}");

    // 4) one organisation
    let org = client.organisation("7").await?;
    println!("Organisation 7: {}", org["name"]);

    Ok(())
}
