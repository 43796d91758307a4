use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinefront_rs::config::Config;
use cinefront_rs::document::{InMemoryDocument, POPULAR_CONTAINER_ID, SUGGESTIONS_PANEL_ID};

#[derive(Parser, Debug)]
#[command(name = "cinefront")]
#[command(about = "Renders the movie-browse page fragments from a backend API", long_about = None)]
struct Args {
    /// YAML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<String>,
    /// Also run the suggestion flow once for this query.
    #[arg(short, long)]
    query: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinefront_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), cinefront_rs::FrontendError> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let document = InMemoryDocument::with_page_anchors();
    let attached = cinefront_rs::attach(config, Arc::new(document.clone())).await?;

    if let Some(container) = document.element(POPULAR_CONTAINER_ID) {
        println!("{}", container.html);
    }

    if let (Some(query), Some(suggester)) = (&args.query, &attached.suggester) {
        suggester.on_input(query);
        suggester.flush().await;
        if let Some(panel) = document.element(SUGGESTIONS_PANEL_ID) {
            if panel.visible {
                println!("{}", panel.html);
            }
        }
    }

    attached.detach();
    Ok(())
}
