use sea_orm_migration::prelude::*;

use sanctuary_platform_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
