use steam_client::{SteamClient, SteamConfig};

/// Usage: `STEAM_API_KEY=... cargo run --example lookup -- <name or appid>`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "portal".to_string());
    let api_key = std::env::var("STEAM_API_KEY").unwrap_or_default();
    let client = SteamClient::new(SteamConfig::new(api_key));

    let title_id = match query.parse() {
        Ok(title_id) => title_id,
        Err(_) => {
            let titles = client.search_titles_by_name(&query).await;
            println!("Found {} titles for {:?}", titles.len(), query);
            for title in &titles {
                println!("  {:>8}  {}", title.id(), title.name());
            }
            match titles.first() {
                Some(title) => title.id(),
                None => return Ok(()),
            }
        }
    };

    let start = std::time::Instant::now();
    match client.build_achievement_set(title_id).await {
        Some(set) => {
            println!(
                "{} ({}) has {} achievements, fetched in {:?}",
                set.title_name(),
                set.title_id(),
                set.achievements().len(),
                start.elapsed()
            );
            for achievement in set.achievements() {
                let percent = achievement
                    .unlock_percent()
                    .map(|percent| format!("{:.1}%", percent))
                    .unwrap_or_else(|| "-".to_string());
                println!("  {:>6}  {}", percent, achievement.display_name());
            }
        }
        None => println!("Title {} not found", title_id),
    }

    Ok(())
}
