use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use env_logger::Env;
use permadmin::permission::memory::MemoryService;
use permadmin::permission::store::PermissionStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_lib_mods();
    init_our_mods();

    // TODO: Swap for a service backed by the admin API once its client is generated.
    let store = PermissionStore::new(Arc::new(MemoryService::new()));
    let address = permadmin::global::get_bind_address();
    log::info!("Listening on {}", address);

    HttpServer::new(move || {
        // Order of middleware IS IMPORTANT and is in REVERSE EXECUTION ORDER.
        App::new()
            .app_data(Data::new(store.clone()))
            .wrap(Logger::new("%a %{User-Agent}i"))
            .configure(permadmin::web::configure)
    })
    .bind(address)?
    .run()
    .await
}

/// Initialize third party crates we rely on but don't have control over.
pub fn init_lib_mods() {
    // A missing .env is fine; every variable has a default.
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();
}

/// Initialize all local mods.
/// Panics
pub fn init_our_mods() {
    permadmin::global::init();
}
