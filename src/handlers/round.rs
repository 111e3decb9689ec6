use actix_web::{get, post, web, HttpResponse, Responder};
use crate::models::{AppState, GuessRequest};
use log::info;

#[get("/round")]
pub async fn get_round(data: web::Data<AppState>) -> impl Responder {
    let Ok(session) = data.session.lock() else {
        return HttpResponse::InternalServerError().finish();
    };

    HttpResponse::Ok().json(session.view())
}

#[post("/round/guess")]
pub async fn post_guess(
    data: web::Data<AppState>,
    body: web::Json<GuessRequest>,
) -> impl Responder {
    let Ok(mut session) = data.session.lock() else {
        return HttpResponse::InternalServerError().finish();
    };

    match session.guess(&body.letter) {
        Some(outcome) => {
            info!("Guess {:?}: {:?}", body.letter, outcome);
            HttpResponse::Ok().json(session.view())
        }
        None => HttpResponse::Conflict().json(session.view()),
    }
}

#[post("/round/new")]
pub async fn new_round(data: web::Data<AppState>) -> impl Responder {
    let Ok(mut session) = data.session.lock() else {
        return HttpResponse::InternalServerError().finish();
    };

    if session.replay() {
        HttpResponse::Ok().json(session.view())
    } else {
        HttpResponse::Conflict().json(session.view())
    }
}
