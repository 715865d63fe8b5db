use actix_cors::Cors;
use actix_multipart::Multipart;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use futures_util::stream::StreamExt;
use log::{error, info, warn};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::algorithm::{get_all_sections, get_courses_by_section, parse_timetable, summarize_catalog};
use crate::api_json::{catalog_from_request, parse_json_input};
use crate::config::Config;
use crate::datafiles::{list_timetable_files, load_catalog_from_dir};
use crate::models::{Catalog, Day};

/// Estado compartido: el catálogo vigente (inmutable; recargar lo reemplaza).
pub struct AppState {
    pub catalog: RwLock<Arc<Catalog>>,
    pub datafiles_dir: PathBuf,
}

impl AppState {
    pub fn new(catalog: Catalog, datafiles_dir: PathBuf) -> Self {
        AppState {
            catalog: RwLock::new(Arc::new(catalog)),
            datafiles_dir,
        }
    }

    pub fn current(&self) -> Arc<Catalog> {
        match self.catalog.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn install(&self, catalog: Catalog) {
        let next = Arc::new(catalog);
        match self.catalog.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// GET /sections
async fn sections_handler(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.current();
    let sections = get_all_sections(&catalog);
    HttpResponse::Ok().json(json!({"total": sections.len(), "sections": sections}))
}

/// GET /sections/{section}
/// La búsqueda ignora mayúsculas ("bcs-5f" == "BCS-5F").
async fn section_courses_handler(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let section = path.into_inner();
    let catalog = state.current();
    let courses = get_courses_by_section(&catalog, &section);
    if courses.is_empty() {
        return HttpResponse::NotFound().json(json!({"error": format!("section '{}' not found", section)}));
    }
    HttpResponse::Ok().json(json!({"section": section.trim().to_uppercase(), "courses": courses}))
}

async fn catalog_handler(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.current();
    HttpResponse::Ok().json(&*catalog)
}

async fn catalog_summary_handler(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.current();
    HttpResponse::Ok().json(summarize_catalog(&catalog))
}

/// POST /timetable/parse
/// Parsea los CSV del cuerpo JSON y devuelve el catálogo (no lo instala).
async fn parse_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let body_value = body.into_inner();
    let json_str = match serde_json::to_string(&body_value) {
        Ok(s) => s,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("invalid JSON body: {}", e)})),
    };

    let request = match parse_json_input(&json_str) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("failed to parse input: {}", e)})),
    };
    if request.days.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "at least one day is required"}));
    }

    HttpResponse::Ok().json(catalog_from_request(&request))
}

/// Tamaño máximo de cada parte del upload.
pub const MAX_UPLOAD_PART_BYTES: usize = 2 * 1024 * 1024;

fn is_csv_file_name(file_name: &str) -> bool {
    file_name.is_empty() || file_name.to_lowercase().ends_with(".csv")
}

/// POST /timetable/upload[?install=true]
/// Multipart: cada parte se asigna a un día por su nombre de campo
/// ("Monday") o por el nombre de archivo ("timetable-monday.csv").
/// Sólo se aceptan CSV; un workbook subido como día se ignora.
async fn upload_handler(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
    mut payload: Multipart,
) -> impl Responder {
    let mut days: BTreeMap<Day, String> = BTreeMap::new();
    let mut ignored: Vec<String> = Vec::new();

    while let Some(field_res) = payload.next().await {
        let mut field = match field_res {
            Ok(f) => f,
            Err(e) => {
                return HttpResponse::BadRequest().json(json!({"error": format!("multipart error: {}", e)}));
            }
        };

        let disposition = field.content_disposition();
        let field_name = disposition.get_name().unwrap_or("").to_string();
        let file_name = disposition.get_filename().unwrap_or("").to_string();
        let day = Day::from_name(&field_name)
            .or_else(|| Day::from_file_name(&file_name))
            .filter(|_| is_csv_file_name(&file_name));

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(b) => {
                    if bytes.len() + b.len() > MAX_UPLOAD_PART_BYTES {
                        return HttpResponse::PayloadTooLarge().json(json!({
                            "error": format!("upload part '{}' exceeds {} bytes", field_name, MAX_UPLOAD_PART_BYTES)
                        }));
                    }
                    bytes.extend_from_slice(&b);
                }
                Err(e) => {
                    return HttpResponse::BadRequest().json(json!({"error": format!("upload stream error: {}", e)}));
                }
            }
        }

        match day {
            Some(d) => {
                let text = match String::from_utf8(bytes) {
                    Ok(t) => t,
                    Err(_) => {
                        return HttpResponse::BadRequest()
                            .json(json!({"error": format!("upload part for {} is not UTF-8 text", d)}));
                    }
                };
                days.insert(d, text);
            }
            None => {
                warn!("upload part '{}' ({}) is not a day CSV, ignored", field_name, file_name);
                ignored.push(if file_name.is_empty() { field_name } else { file_name });
            }
        }
    }

    if days.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "no day timetables in upload", "ignored": ignored}));
    }

    let catalog = parse_timetable(&days);
    let install = query.get("install").map(|v| v == "true" || v == "1").unwrap_or(false);
    let loaded: Vec<&str> = days.keys().map(|d| d.as_str()).collect();
    let summary = summarize_catalog(&catalog);
    let body = json!({"days": loaded, "ignored": ignored, "installed": install, "summary": summary, "catalog": catalog});
    if install {
        info!("installing uploaded catalog ({} sections)", catalog.len());
        state.install(catalog);
    }
    HttpResponse::Ok().json(body)
}

/// POST /timetable/reload
/// Vuelve a leer el directorio de datos e instala el catálogo resultante.
async fn reload_handler(state: web::Data<AppState>) -> impl Responder {
    let dir = state.datafiles_dir.clone();
    let loaded = web::block(move || load_catalog_from_dir(&dir)).await;
    match loaded {
        Ok(Ok(catalog)) => {
            let summary = summarize_catalog(&catalog);
            state.install(catalog);
            HttpResponse::Ok().json(json!({"status": "ok", "summary": summary}))
        }
        Ok(Err(e)) => {
            error!("reload failed: {}", e);
            HttpResponse::InternalServerError().json(json!({"error": format!("reload failed: {}", e)}))
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("reload task failed: {}", e)})),
    }
}

/// GET /datafiles
async fn datafiles_list_handler(state: web::Data<AppState>) -> impl Responder {
    match list_timetable_files(&state.datafiles_dir) {
        Ok(files) => HttpResponse::Ok().json(json!({"dir": state.datafiles_dir.to_string_lossy(), "files": files})),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("failed to list datafiles: {}", e)})),
    }
}

async fn help_handler() -> impl Responder {
    let help = json!({
        "description": "API del catálogo de horarios: secciones -> cursos con sus sesiones semanales.",
        "endpoints": {
            "GET /health": "estado del servicio",
            "GET /sections": "lista ordenada de secciones",
            "GET /sections/{section}": "cursos de una sección (sin distinguir mayúsculas)",
            "GET /catalog": "catálogo completo",
            "GET /catalog/summary": "conteos de secciones, cursos y sesiones",
            "POST /timetable/parse": "JSON {\"days\": {\"Monday\": \"<csv>\", ...}} -> catálogo",
            "POST /timetable/upload": "multipart con un CSV por día; ?install=true lo deja como catálogo vigente",
            "POST /timetable/reload": "relee el directorio de datos",
            "GET /datafiles": "archivos de horario disponibles"
        },
        "days": Day::ALL.iter().map(|d| d.as_str()).collect::<Vec<_>>()
    });
    HttpResponse::Ok().json(help)
}

/// Rutas de la API (se reutiliza en los tests con `test::init_service`).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_handler))
        .route("/sections", web::get().to(sections_handler))
        .route("/sections/{section}", web::get().to(section_courses_handler))
        .route("/catalog", web::get().to(catalog_handler))
        .route("/catalog/summary", web::get().to(catalog_summary_handler))
        .route("/timetable/parse", web::post().to(parse_handler))
        .route("/timetable/upload", web::post().to(upload_handler))
        .route("/timetable/reload", web::post().to(reload_handler))
        .route("/datafiles", web::get().to(datafiles_list_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let dir = config.resolved_datafiles_dir();
    let catalog = match load_catalog_from_dir(&dir) {
        Ok(c) => c,
        Err(e) => {
            warn!("starting with an empty catalog: {}", e);
            Catalog::new()
        }
    };

    let state = web::Data::new(AppState::new(catalog, dir));
    info!("listening on http://{}", config.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(configure_routes)
    })
    .bind(config.bind.as_str())?
    .run()
    .await
}
