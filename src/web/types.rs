// src/web/types.rs
use rocket::http::ContentType;
use rocket::response::{self, Responder};
use rocket::serde::Serialize;
use rocket::{Request, Response};
use std::path::PathBuf;

pub struct PdfResponse {
    pub data: Vec<u8>,
    pub filename: String,
}

impl PdfResponse {
    pub fn new(data: Vec<u8>, filename: String) -> Self {
        Self { data, filename }
    }
}

impl<'r> Responder<'r, 'static> for PdfResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .header(ContentType::PDF)
            .raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            )
            .sized_body(self.data.len(), std::io::Cursor::new(self.data))
            .ok()
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct LivenessResponse {
    pub message: String,
}

pub struct ServerConfig {
    pub workspace_path: PathBuf,
    pub latex_bin: String,
    pub keep_artifacts: bool,
}
