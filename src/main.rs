//! ShortUUID Worker Service Entry Point
//!
//! Loads `.env` if present, then hands over to [`shortuuid_worker::run`].

use shortuuid_worker::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    run().await
}
