use animefire_core::AnimeFireScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = AnimeFireScraper::new()?;

    let url = "https://animefire.plus/animes/one-piece-todos-os-episodios";
    println!("🔍 Buscando episódios em {}...\n", url);

    let episodes = scraper.get_anime_episodes(url).await?;

    println!("Encontrados {} episódios:", episodes.len());
    for ep in &episodes {
        println!("  {:>4}  {}  ->  {}", ep.num, ep.number.trim(), ep.url);
    }

    Ok(())
}
