mod terminal;

use anyhow::{Context, Result};
use terminal::TerminalNotifier;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{app::App, config::Config, dictionary::Dictionary, words::WordPool};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stderr keeps log lines off the game screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_scramble=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Word Scramble...");

    // Load configuration
    let config = Config::load()?;
    tracing::info!("Configuration loaded ({:?} variant)", config.variant);

    // Load the start words; the game cannot run without them
    let pool = WordPool::load(&config.word_list_path)
        .await
        .with_context(|| format!("Could not load start words from {}", config.word_list_path))?;

    // Load dictionary
    let dictionary = match Dictionary::load(&config.dictionary_path).await {
        Ok(dict) => {
            tracing::info!("Dictionary loaded successfully");
            dict
        }
        Err(e) => {
            tracing::warn!("{}. Using empty dictionary, no word will be accepted.", e);
            tracing::warn!(
                "Point WORD_SCRAMBLE_DICTIONARY_PATH at a word list for full functionality"
            );
            Dictionary::empty()
        }
    };

    let app = App::launch(
        pool,
        dictionary,
        TerminalNotifier::default(),
        config.rules(),
        rand::rng(),
    )?;

    terminal::run(app).await
}
