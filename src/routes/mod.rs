// Route exports
pub mod mentors;

use actix_web::web;

pub use mentors::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(mentors::configure),
    );
}
