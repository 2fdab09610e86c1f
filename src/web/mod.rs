// src/web/mod.rs
pub mod types;

pub use types::*;

use crate::compiler::LatexCompiler;
use crate::environment::EnvironmentConfig;
use crate::renderer;
use crate::types::ResumeDocument;
use anyhow::{Context, Result};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{get, options, post, routes, Request, Response, State};
use tracing::{error, info};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

/// Generic CORS handler that returns Status::Ok for any OPTIONS request
#[options("/<_..>")]
pub async fn universal_options_handler() -> Status {
    Status::Ok
}

#[get("/")]
pub async fn index() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Resume Builder API is up and running".to_string(),
    })
}

#[post("/generate-resume", data = "<resume>")]
pub async fn generate_resume(
    resume: Json<ResumeDocument>,
    config: &State<ServerConfig>,
) -> Result<PdfResponse, Custom<Json<ErrorResponse>>> {
    let doc = resume.into_inner();

    info!(
        "Generating resume for '{}' ({} education, {} experience, {} project entries)",
        doc.profile.full_name,
        doc.education.len(),
        doc.experience.len(),
        doc.project.len()
    );

    let latex_source = renderer::render(&doc);

    let compiler = LatexCompiler::new(config.workspace_path.clone())
        .with_latex_bin(config.latex_bin.clone())
        .with_keep_artifacts(config.keep_artifacts);

    match compiler.compile(&latex_source) {
        Ok(pdf_data) => {
            info!(
                "Resume compiled successfully, pdf_size: {}",
                pdf_data.len()
            );
            Ok(PdfResponse::new(pdf_data, "resume.pdf".to_string()))
        }
        Err(e) => {
            error!("Resume compilation failed: {:?}", e);
            Err(Custom(
                Status::InternalServerError,
                Json(ErrorResponse::new("Failed to generate PDF".to_string())),
            ))
        }
    }
}

pub async fn start_web_server(env_config: EnvironmentConfig, port: u16) -> Result<()> {
    let server_config = ServerConfig {
        workspace_path: env_config.workspace_path.clone(),
        latex_bin: env_config.latex_bin.clone(),
        keep_artifacts: env_config.keep_artifacts,
    };

    info!("Starting Resume Builder API server");
    info!("Workspace: {}", env_config.workspace_path.display());
    info!("LaTeX binary: {}", env_config.latex_bin);

    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    let _rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(server_config)
        .mount(
            "/",
            routes![index, generate_resume, universal_options_handler],
        )
        .launch()
        .await
        .context("Rocket server failed")?;

    Ok(())
}
