//! Content storage for the Atrium site.
//!
//! This crate owns every content record the site serves — categories, blog
//! posts, services, projects, team members, testimonials, contact messages,
//! subscribers — and provides typed create/query access over them.
//!
//! # Architecture
//!
//! - **[`ContentStore`]** is the capability interface. Callers (the HTTP
//!   layer, admin tooling) depend only on the trait; backends are swappable.
//! - **[`InMemoryStore`]** is the in-process backend: one locked, id-keyed
//!   table per entity kind, id assignment atomic with insertion. A
//!   document-store backend fits behind the same trait but lives elsewhere.
//! - **Seeded content** is loaded once at construction from [`seed`] and is
//!   immutable for the process lifetime; contact messages and subscribers
//!   grow at runtime through create operations.
//! - **[`enrich`]** attaches a post's category at read time, best-effort:
//!   dangling references and backend failures degrade to an unenriched post,
//!   never an error.
//!
//! # Modules
//!
//! - [`error`] — [`StoreError`] and the [`StoreResult`] alias
//! - [`traits`] — The [`ContentStore`] trait defining the storage interface
//! - [`memory`] — In-memory [`InMemoryStore`] backend
//! - [`seed`] — Sample site content fixtures
//! - [`enrich`] — Read-time category embedding for blog posts

pub mod enrich;
pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use enrich::{attach_categories, attach_category, PostWithCategory};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use traits::ContentStore;
