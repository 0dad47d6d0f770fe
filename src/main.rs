use anyhow::Result;
use delve_site::carousel::CarouselController;
use delve_site::config::Config;
use delve_site::content::{ContentStore, SectionId, SiteVariables};
use delve_site::dashboard;
use delve_site::i18n::LanguageRegistry;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("delve_site=info".parse()?),
        )
        .init();

    info!("Starting DELVE site content engine");

    // Load configuration from environment
    let config = Config::from_env()?;
    let variables = SiteVariables::from_config(&config)?;

    // Build the content store (operator-supplied directory, or the bundles
    // compiled into the binary)
    let mut registry = LanguageRegistry::new();
    registry.change_language(&config.default_language);
    let default_language = registry.current();

    let store = match &config.content_dir {
        Some(dir) => {
            info!("Loading content bundles from {}", dir);
            ContentStore::from_dir(Path::new(dir), default_language, &variables)?
        }
        None => ContentStore::from_embedded(default_language, &variables)?,
    };
    let store = Arc::new(store);

    // Surface authoring gaps up front; resolution still degrades gracefully
    let report = store.validate_completeness(registry.available());
    for error in &report.errors {
        warn!("Content error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Content warning: {}", warning);
    }

    info!(
        "Serving {} languages (current: {})",
        registry.available().len(),
        registry.current().code()
    );

    // Re-resolve every mounted section whenever the language changes
    {
        let store = Arc::clone(&store);
        registry.subscribe(move |language| {
            for section in SectionId::ALL {
                let _ = store.resolve(language.code(), section);
            }
            info!("Re-resolved all sections for {}", language.code());
        });
    }

    // Resolve the home page and walk its slider once
    let home = store.resolve(registry.current().code(), SectionId::Home);
    let slides = home
        .as_home()
        .map(|content| content.page2.slides.clone())
        .unwrap_or_default();

    let mut carousel = CarouselController::new(slides.len());
    info!("Home slider has {} slides", carousel.len());
    for (index, slide) in slides.iter().enumerate() {
        info!("  [{}] {} ({})", index, slide.title, slide.image_or_placeholder(index));
        carousel.next();
    }

    // Fetch the internal dashboard counters (falls back on any failure)
    let client = reqwest::Client::new();
    let stats = dashboard::fetch_dashboard_stats(&client, &config).await;
    info!(
        "Dashboard: {} users, {} subscriptions, {} transactions, ${} income",
        stats.total_users, stats.total_subscriptions, stats.total_transactions, stats.total_income
    );

    Ok(())
}
