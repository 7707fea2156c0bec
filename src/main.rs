use log::info;
use recipe_scaler::{AppConfig, FileStore, HttpRecipeSource, Session};
use std::env;

const USAGE: &str = "Usage:
  recipe-scaler <recipe-id> [servings]   show a recipe scaled to <servings>
  recipe-scaler search <query> [page]    search recipes
  recipe-scaler like <recipe-id>         like or unlike a recipe
  recipe-scaler likes                    list liked recipes";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().ok_or(USAGE)?;

    let config = AppConfig::load()?;
    let source = HttpRecipeSource::new(
        config.api.base_url.clone(),
        Some(config.api.timeout_duration()),
    )?;
    let mut session = Session::new(FileStore::new(&config.storage.path), &config)?;

    match command.as_str() {
        "search" => {
            let query = args.get(1).ok_or(USAGE)?;
            let page = match args.get(2) {
                Some(page) => page.parse::<usize>()?,
                None => 1,
            };
            let per_page = config.recipe.results_per_page;
            let search = session.search(&source, query).await?;
            info!(
                "Page {} of {} for {:?}",
                page,
                search.page_count(per_page),
                query
            );
            println!("{}", serde_json::to_string_pretty(search.page(page, per_page))?);
        }
        "like" => {
            let id = args.get(1).ok_or(USAGE)?;
            session.load_recipe(&source, id).await?;
            let liked = session.toggle_like()?;
            println!("{}", if liked { "liked" } else { "unliked" });
        }
        "likes" => {
            println!("{}", serde_json::to_string_pretty(session.likes.likes())?);
        }
        id => {
            session.load_recipe(&source, id).await?;
            let recipe = match args.get(1) {
                Some(servings) => session.set_servings(servings.parse::<u32>()?)?,
                None => session.recipe.as_ref().ok_or(USAGE)?,
            };
            println!("{}", serde_json::to_string_pretty(recipe)?);
        }
    }

    Ok(())
}
