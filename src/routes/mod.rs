// Route exports
pub mod chat;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/chatbot")
            .configure(chat::configure),
    );
}
