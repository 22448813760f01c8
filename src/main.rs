mod render;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::warn;
use tokio::io::{AsyncBufReadExt, BufReader};

use ms_app::AppDeps;
use ms_core::ports::{CatalogPort, TrendingStorePort};
use ms_infra::{config, HttpTrendingStore, TmdbCatalogClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = config::load()?;

    let catalog: Arc<dyn CatalogPort> = Arc::new(TmdbCatalogClient::new(&config.catalog)?);
    let trending: Option<Arc<dyn TrendingStorePort>> = match &config.trending {
        Some(cfg) => Some(Arc::new(HttpTrendingStore::new(cfg)?)),
        None => None,
    };
    let deps = AppDeps { catalog, trending };

    // Trending panel: read once at startup, degrade to a message on failure.
    if let Some(limit) = config.trending.as_ref().map(|t| t.limit) {
        if let Some(load_trending) = deps.load_trending(limit) {
            match load_trending.execute().await {
                Ok(entries) => {
                    for line in render::render_trending(&entries) {
                        println!("{line}");
                    }
                }
                Err(err) => {
                    warn!("loading trending movies failed: {}", err);
                    println!("Error fetching trending movies. Please try again later.");
                }
            }
        }
    }

    let window = Duration::from_millis(config.search.debounce_ms);
    let (controller, handle) = deps.search_controller(window);
    tokio::spawn(controller.run());

    // Render every state change as it lands.
    let mut state_rx = handle.subscribe();
    tokio::spawn(async move {
        while state_rx.changed().await.is_ok() {
            let state = state_rx.borrow_and_update().clone();
            for line in render::render_search(&state) {
                println!("{line}");
            }
        }
    });

    // Each stdin line is the new raw query; an empty line goes back to the
    // default listing. EOF exits.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        handle.push_input(line);
    }

    Ok(())
}
