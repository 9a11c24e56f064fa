use clap::{Parser, Subcommand};
use log::debug;
use recipe_finder::{Category, FinderConfig, Recipe, RecipeFinder, SearchOutcome};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-finder", version, about = "Search recipes and keep favorites")]
struct Cli {
    /// Recipe API root URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// File holding favorite recipes
    #[arg(long, global = true)]
    favorites: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search recipes by name, or list a category
    Search {
        /// Recipe name to search for
        #[arg(default_value = "")]
        query: String,
        /// Category filter; takes precedence over the query
        #[arg(short, long, default_value = "")]
        category: String,
        /// Result page to show
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show the full recipe
    Show { id: String },
    /// Add a recipe to favorites, or remove it if already there
    Favorite { id: String },
    /// List favorite recipes
    Favorites,
    /// Remove all favorites
    ClearFavorites,
    /// List known categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = RecipeFinder::builder().config(FinderConfig::load()?);
    if let Some(url) = cli.base_url {
        builder = builder.base_url(url);
    }
    if let Some(path) = cli.favorites {
        builder = builder.favorites_path(path);
    }
    let mut finder = builder.build()?;

    match cli.command {
        Command::Search {
            query,
            category,
            page,
        } => {
            finder.set_category(Category::parse_filter(&category)?);
            let outcome = finder.search_selected(&query).await;
            debug!("search outcome: {:?}", outcome);
            finder.set_page(page);
            print_results(&finder, outcome);
        }
        Command::Show { id } => {
            finder.view_detail(&Recipe::summary(id, "", None)).await;
            match &finder.ui().selected_recipe {
                Some(recipe) => print_detail(recipe),
                None => eprintln!("{}", finder.ui().detail_error.as_deref().unwrap_or("")),
            }
        }
        Command::Favorite { id } => {
            let existing = finder.favorites().get(&id).cloned();
            let recipe = match existing {
                Some(existing) => existing,
                None => {
                    finder.view_detail(&Recipe::summary(id.as_str(), "", None)).await;
                    match finder.ui().selected_recipe.clone() {
                        Some(detail) => detail,
                        None => {
                            eprintln!("{}", finder.ui().detail_error.as_deref().unwrap_or(""));
                            return Ok(());
                        }
                    }
                }
            };
            let added = finder.toggle_favorite(&recipe)?;
            println!(
                "{} {} {}",
                star(added),
                recipe.name,
                if added { "added to favorites" } else { "removed from favorites" }
            );
        }
        Command::Favorites => {
            if finder.favorites().is_empty() {
                println!("No favorite recipes yet.");
            }
            for fav in finder.favorites().iter() {
                println!("{}  {}", fav.id, fav.name);
            }
        }
        Command::ClearFavorites => {
            finder.clear_favorites()?;
            println!("Favorites cleared.");
        }
        Command::Categories => {
            for category in Category::ALL {
                println!("{}", category);
            }
        }
    }

    Ok(())
}

fn star(favorite: bool) -> &'static str {
    if favorite {
        "★"
    } else {
        "☆"
    }
}

fn print_results(finder: &RecipeFinder, outcome: SearchOutcome) {
    if let Some(error) = &finder.ui().error {
        println!("{}", error);
        return;
    }

    let recipes = finder.current_page_slice();
    if recipes.is_empty() {
        if outcome == SearchOutcome::Skipped {
            println!("Search for recipes by name or pick a category.");
        }
        return;
    }

    for recipe in recipes {
        println!(
            "{} {:>6}  {}",
            star(finder.is_favorite(&recipe.id)),
            recipe.id,
            recipe.name
        );
    }
    println!("page {} of {}", finder.page_state().page(), finder.max_page());
}

fn print_detail(recipe: &Recipe) {
    println!("{}", recipe.name);
    if let Some(thumb) = &recipe.thumbnail {
        println!("{}", thumb);
    }
    println!();
    println!("ID: {}", recipe.id);
    println!("Category: {}", recipe.category.as_deref().unwrap_or("N/A"));
    println!();
    println!(
        "Instructions: {}",
        recipe
            .instructions
            .as_deref()
            .unwrap_or("No instructions available")
    );

    let ingredients = recipe.ingredients();
    if !ingredients.is_empty() {
        println!();
        println!("Ingredients:");
        for ingredient in ingredients {
            println!("  - {}", ingredient);
        }
    }
}
