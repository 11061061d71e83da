use dotenvy::dotenv;
use tracing_subscriber::fmt::init as tracing_init;

use workstatus::app;
use workstatus::config::Config;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    let config = Config::from_env();
    tracing::debug!(?config, "starting");
    app::run(config).await;
}
