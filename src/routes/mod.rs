// Route exports
pub mod itinerary;

use actix_web::web;

pub use itinerary::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(itinerary::configure),
    );
}
