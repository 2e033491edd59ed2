use chrono::Utc;
use clap::Subcommand;

use briefly_core::{LikedFact, LikedStore};

use super::{load_config, open_store};

#[derive(Subcommand)]
pub enum LikedAction {
    /// List liked facts as JSON, most recent first
    List,
    /// Like a fact (no-op if the title is already liked)
    Add {
        /// Fact title (the logical key)
        title: String,
        /// Fact body
        #[arg(long, default_value = "")]
        content: String,
        /// Source URL
        #[arg(long, default_value = "")]
        url: String,
        /// Fact category (cap is enforced per category)
        #[arg(long)]
        category: String,
    },
    /// Remove a liked fact by title (no-op if absent)
    Remove {
        title: String,
    },
    /// Count liked facts, optionally within one category
    Count {
        #[arg(long)]
        category: Option<String>,
    },
}

pub fn run(action: LikedAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;
    let liked = LikedStore::new(store);

    match action {
        LikedAction::List => {
            println!("{}", serde_json::to_string_pretty(&liked.list())?);
        }
        LikedAction::Add {
            title,
            content,
            url,
            category,
        } => {
            let tz = load_config().region.timezone();
            let fact = LikedFact::new(title, content, url, category, tz, Utc::now());
            if liked.like(fact) {
                println!("liked");
            } else {
                println!("already liked");
            }
        }
        LikedAction::Remove { title } => {
            liked.unlike(&title);
            println!("ok");
        }
        LikedAction::Count { category } => {
            let count = match category {
                Some(category) => liked.count_by_category(&category),
                None => liked.count(),
            };
            println!("{count}");
        }
    }
    Ok(())
}
