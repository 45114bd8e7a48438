// HTTP server setup (Axum + server-rendered views)
pub mod app;
pub mod routes;
pub mod static_files;

pub use app::*;
