use crate::domain::ViewCountMap;
use crate::services::ViewCountService;
use rocket::http::Header;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{Request, State};
use serde::Serialize;
use serde_json::{json, Value};

pub const VIEWS_CACHE_CONTROL: &str = "s-maxage=3600, max-age=300, stale-while-revalidate=600";

/// JSON with open CORS and shared-cache headers, so CDNs absorb most of the
/// scrape traffic.
pub struct CachedJson<T>(pub Json<T>);

impl<'r, T: Serialize> Responder<'r, 'static> for CachedJson<T> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let mut resp = self.0.respond_to(req)?;
        resp.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        resp.set_header(Header::new("Access-Control-Allow-Methods", "GET"));
        resp.set_header(Header::new("Cache-Control", VIEWS_CACHE_CONTROL));
        Ok(resp)
    }
}

// ── View counts ────────────────────────────────────────

#[get("/youtube-views")]
pub async fn youtube_views(service: &State<ViewCountService>) -> CachedJson<ViewCountMap> {
    CachedJson(Json(service.fetch_all().await))
}

// ── Catchers ───────────────────────────────────────────

#[catch(404)]
pub fn not_found() -> Json<Value> {
    Json(json!({ "error": "not found" }))
}

#[catch(500)]
pub fn server_error() -> Json<Value> {
    Json(json!({ "error": "internal server error" }))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![youtube_views]
}
