use config::{Config, Environment, File, FileFormat};
use localmart::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config_path =
        std::env::var("LOCALMART_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    let settings = Config::builder()
        .add_source(File::new(&config_path, FileFormat::Yaml))
        .add_source(Environment::with_prefix("LOCALMART"))
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let server_config: ServerConfig = settings
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;

    localmart::run(server_config).await
}
