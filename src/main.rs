use dotenvy::dotenv;

use channel_board::config::Config;
use channel_board::error::ApplicationError;
use channel_board::logger;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    dotenv().ok();

    let config = Config::from_env()?;

    let _guard = logger::init(&config)?;

    channel_board::run(&config).await
}
