use animefire_core::AnimeFireScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = AnimeFireScraper::new()?;

    let test_animes = [
        "https://animefire.plus/animes/one-piece-todos-os-episodios",
        "https://animefire.plus/animes/naruto-classico-todos-os-episodios",
        "https://animefire.plus/animes/jujutsu-kaisen-todos-os-episodios",
    ];

    for url in test_animes {
        println!("\n{}", "=".repeat(60));
        println!("🔍 Anime: {}", url);
        println!("{}\n", "=".repeat(60));

        let episodes = scraper.get_anime_episodes(url).await?;

        if episodes.is_empty() {
            println!("❌ Nenhum episódio encontrado!");
            continue;
        }

        println!("Total: {} episódios", episodes.len());
        if let (Some(first), Some(last)) = (episodes.first(), episodes.last()) {
            println!("Primeiro: {:>4}  {}", first.num, first.url);
            println!("Último:   {:>4}  {}", last.num, last.url);
        }
    }

    Ok(())
}
