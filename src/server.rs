use actix_web::{web, App, HttpResponse, HttpServer};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::{error::Result, itinerary::Itinerary, tour::Tour};

pub struct AppState {
    pub precision: usize,
}

#[derive(Serialize)]
struct OptimizeResponse<'a> {
    success: bool,
    #[serde(flatten)]
    itinerary: &'a Itinerary,
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn plan_tour(tour: &Tour, precision: usize) -> Result<Itinerary> {
    tour.validate()?;
    Itinerary::plan(tour, true, precision)
}

async fn optimize(tour: web::Json<Tour>, data: web::Data<AppState>) -> HttpResponse {
    let tour = tour.into_inner();

    match plan_tour(&tour, data.precision) {
        Ok(itinerary) => {
            info!(tour_id = %tour.tour_id, "served optimized route");
            HttpResponse::Ok().json(OptimizeResponse {
                success: true,
                itinerary: &itinerary,
            })
        }
        Err(e) => {
            warn!(tour_id = %tour.tour_id, "rejected tour: {e}");
            HttpResponse::BadRequest().json(json!({
                "success": false,
                "error": e.to_string(),
            }))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health))
        .route("/optimize", web::post().to(optimize));
}

pub async fn run(host: &str, port: u16, precision: usize) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState { precision });

    info!("listening on {host}:{port}");
    HttpServer::new(move || App::new().app_data(app_state.clone()).configure(configure))
        .bind((host, port))?
        .run()
        .await
}
