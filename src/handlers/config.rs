use actix_web::{get, web, HttpResponse, Responder};
use crate::models::{AppState, ConfigResponse};
use crate::services::figure::FIGURE_PARTS;
use crate::services::round::LOSS_THRESHOLD;
use crate::utils::PLACEHOLDER;
use log::info;

#[get("/config")]
pub async fn get_config(data: web::Data<AppState>) -> impl Responder {
    let Ok(session) = data.session.lock() else {
        return HttpResponse::InternalServerError().finish();
    };

    let catalog_size = session.catalog().len();
    let figure_parts = FIGURE_PARTS.iter().map(|p| p.name()).collect();

    info!("Served config: threshold {}, {} catalog entries", LOSS_THRESHOLD, catalog_size);

    HttpResponse::Ok().json(ConfigResponse {
        loss_threshold: LOSS_THRESHOLD,
        catalog_size,
        placeholder: PLACEHOLDER,
        figure_parts,
    })
}
