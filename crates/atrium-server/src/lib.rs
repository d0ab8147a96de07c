//! HTTP server for the Atrium site.
//!
//! Serves the content API consumed by the site front end: blog posts with
//! best-effort category embedding, categories, services, projects, team
//! members, testimonials, and the contact/subscribe form endpoints. CORS is
//! open, legacy paths 301 to their canonical homes, and all storage goes
//! through the [`ContentStore`](atrium_store::ContentStore) trait handed in
//! at startup.

pub mod config;
pub mod error;
pub mod handler;
pub mod redirects;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use server::SiteServer;
pub use state::AppState;
