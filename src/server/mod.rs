use crate::error::Result;
use crate::services::ViewCountService;
use rocket::figment::Figment;
use rocket::{Build, Rocket};
use tracing::info;

mod routes;

pub fn build(service: ViewCountService, figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(service)
        .mount("/api", routes::routes())
        .register("/", catchers![routes::not_found, routes::server_error])
}

pub async fn serve(service: ViewCountService, address: &str, port: u16) -> Result<()> {
    let figment = rocket::Config::figment()
        .merge(("address", address))
        .merge(("port", port));

    info!("Serving view counts on http://{address}:{port}/api/youtube-views");
    build(service, figment).launch().await?;
    Ok(())
}
