pub mod analytics;
pub mod meetings;
pub mod model;
pub mod predict;
pub mod stats;
pub mod users;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(meetings::configure)
            .configure(users::configure)
            .configure(analytics::configure)
            .configure(stats::configure)
            .configure(predict::configure)
            .configure(model::configure),
    );
}
