pub mod compiler;
pub mod environment;
pub mod escape;
pub mod renderer;
pub mod types;
pub mod web;

pub use compiler::LatexCompiler;
pub use environment::EnvironmentConfig;
pub use renderer::render;
pub use types::ResumeDocument;
pub use web::start_web_server;
