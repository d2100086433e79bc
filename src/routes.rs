use actix_web::{get, post, web, HttpResponse, Responder};
use log::{error, info};

use crate::inference;
use crate::models::{FeatureRecord, FormatErrorPayload, ResultPayload, ServerErrorPayload};

/// Renvoie le format d'entrée attendu par le modèle
#[get("/")]
pub async fn model_info() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(inference::EXPECTED_INPUT)
}

/// Aller-retour principal: validation puis évaluation du modèle
#[post("/")]
pub async fn predict(body: web::Bytes) -> impl Responder {
    info!("Nouvelle requête de prédiction reçue");

    let record = match FeatureRecord::parse(&body) {
        Ok(record) => record,
        Err(e) => {
            error!("Validation échouée: {}", e);
            return HttpResponse::BadRequest().json(FormatErrorPayload {
                detail: e.to_string(),
            });
        }
    };

    match inference::predict(&record) {
        Ok(result) => {
            info!("Prédiction réussie: {}", result);
            HttpResponse::Ok().json(ResultPayload { result })
        }
        Err(e) => {
            error!("Erreur de prédiction: {}", e);
            HttpResponse::InternalServerError().json(ServerErrorPayload {
                detail: e.to_string(),
            })
        }
    }
}
