use actix_files::Files;
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer, Result};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::display::schedule_csv_string;
use crate::parser::load_roster;
use crate::schedule::{allocate_flights, generate_week, week_dates, CrewAvailability, WeekSchedule};

// In-memory storage for the uploaded roster and the generated schedule
// (in production, use a database)
pub struct AppState {
    pub crew: Mutex<Option<Vec<CrewAvailability>>>,
    pub schedule: Mutex<Option<WeekSchedule>>,
    pub admin_password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    password: String,
}

fn default_normal_flights() -> Vec<u32> {
    vec![3; 7]
}

/// Week configuration posted by the admin page: the first day of the week
/// and the number of normal flights per day (1 maintenance and 3 training
/// flights are always scheduled on top of these).
#[derive(Deserialize)]
pub struct GenerateRequest {
    start_date: String,
    #[serde(default = "default_normal_flights")]
    normal_flights: Vec<u32>,
}

#[derive(Serialize)]
pub struct RosterSummary {
    crew_count: usize,
    pc_count: usize,
    pi_count: usize,
    fe_count: usize,
    ce_count: usize,
}

fn authorized(req: &HttpRequest, state: &AppState) -> bool {
    let password = req
        .headers()
        .get("X-Admin-Password")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    password == state.admin_password
}

// Admin login endpoint
async fn admin_login(
    req: web::Json<LoginRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if req.password == state.admin_password {
        Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
    } else {
        Ok(HttpResponse::Unauthorized()
            .json(serde_json::json!({"success": false, "error": "Invalid password"})))
    }
}

// Admin roster CSV upload endpoint
async fn admin_upload(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if !authorized(&req, &state) {
        return Ok(HttpResponse::Unauthorized()
            .json(serde_json::json!({"success": false, "error": "Unauthorized"})));
    }

    // Save uploaded CSV
    let csv_path = "uploaded_roster.csv";
    std::fs::write(csv_path, &body)
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Failed to save file: {}", e)))?;

    match load_roster(csv_path) {
        Ok(crew) => {
            let summary = RosterSummary {
                crew_count: crew.len(),
                pc_count: crew.iter().filter(|c| c.role == crate::schedule::Role::Pc).count(),
                pi_count: crew.iter().filter(|c| c.role == crate::schedule::Role::Pi).count(),
                fe_count: crew.iter().filter(|c| c.role == crate::schedule::Role::Fe).count(),
                ce_count: crew.iter().filter(|c| c.role == crate::schedule::Role::Ce).count(),
            };
            *state.crew.lock().unwrap() = Some(crew);
            // A new roster invalidates any previously generated schedule.
            *state.schedule.lock().unwrap() = None;

            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "roster": summary
            })))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": format!("Failed to process roster CSV: {}", e)
        }))),
    }
}

// Schedule generation endpoint
async fn admin_generate(
    req: HttpRequest,
    config: web::Json<GenerateRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if !authorized(&req, &state) {
        return Ok(HttpResponse::Unauthorized()
            .json(serde_json::json!({"success": false, "error": "Unauthorized"})));
    }

    let crew = state.crew.lock().unwrap();
    let Some(ref crew) = *crew else {
        return Ok(HttpResponse::BadRequest()
            .json(serde_json::json!({"success": false, "error": "No roster uploaded"})));
    };

    let week = match week_dates(&config.start_date) {
        Ok(week) => week,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(serde_json::json!({"success": false, "error": e.to_string()})))
        }
    };

    match generate_week(&week, &config.normal_flights) {
        Ok(mut schedule) => {
            allocate_flights(&mut schedule, crew);
            let flights = schedule.flights.len();
            *state.schedule.lock().unwrap() = Some(schedule);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "flights": flights
            })))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        }))),
    }
}

// Schedule endpoint (JSON)
async fn get_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let schedule = state.schedule.lock().unwrap();
    if let Some(ref schedule) = *schedule {
        Ok(HttpResponse::Ok().json(schedule))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "Schedule not available"})))
    }
}

// Schedule download endpoint (CSV)
async fn download_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let schedule = state.schedule.lock().unwrap();
    if let Some(ref schedule) = *schedule {
        let csv = schedule_csv_string(schedule)
            .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;
        Ok(HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"FlightSchedules.csv\"",
            ))
            .body(csv))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "Schedule not available"})))
    }
}

// HTML page handlers
async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

async fn admin_page() -> Result<HttpResponse> {
    let html = include_str!("../templates/admin.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

async fn schedules_page() -> Result<HttpResponse> {
    let html = include_str!("../templates/schedules.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(port: u16, admin_password: String) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState {
        crew: Mutex::new(None),
        schedule: Mutex::new(None),
        admin_password,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static").show_files_listing())
            .route("/", web::get().to(index))
            .route("/admin", web::get().to(admin_page))
            .route("/schedules", web::get().to(schedules_page))
            .route("/api/login", web::post().to(admin_login))
            .route("/api/upload", web::post().to(admin_upload))
            .route("/api/generate", web::post().to(admin_generate))
            .route("/api/schedule", web::get().to(get_schedule))
            .route("/api/schedule.csv", web::get().to(download_schedule))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
