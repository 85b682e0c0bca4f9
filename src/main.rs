use tracing::{error, info};

use vault::{
    config::Config, endpoint::Endpoints,
    infrastructure::argon2_password_hasher::Argon2PasswordHasher, logging, server,
    usecase::vault_usecase::VaultUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    logging::init(&config.log_level, config.log_json);

    let password_hasher = Argon2PasswordHasher::new();
    let vault = VaultUsecase::new(password_hasher);

    let mut endpoints = Endpoints::new(vault);
    if let Some(limiter) = config.rate_limiter() {
        info!(
            per_second = config.rate_limit.map(|rate| rate.get()),
            burst = config.rate_burst.or(config.rate_limit).map(|burst| burst.get()),
            "rate limiting enabled"
        );
        endpoints = endpoints.with_rate_limit(limiter);
    }

    let err = server::run(&config, endpoints).await;
    error!(error = %err, "exit");
    Err(err.into())
}
