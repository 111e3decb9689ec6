use actix_web::web;

pub mod config;
pub mod round;

/// Register every HTTP endpoint
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(round::get_round)
        .service(round::post_guess)
        .service(round::new_round)
        .service(config::get_config);
}
