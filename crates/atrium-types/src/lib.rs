//! Entity records for the Atrium content service.
//!
//! This crate defines the data that the content store holds and the JSON
//! contract the HTTP API serves. Every other Atrium crate depends on
//! `atrium-types`.
//!
//! # Key Types
//!
//! - [`EntityId`] — Sequential per-kind record identifier, assigned by the store
//! - [`Category`], [`BlogPost`], [`Service`], [`Project`], [`TeamMember`],
//!   [`Testimonial`] — Seeded site content
//! - [`ContactMessage`], [`Subscriber`] — Visitor-submitted records
//! - [`User`] — Store-level account record (no auth surface)
//! - [`ContactPayload`], [`SubscribePayload`] — Boundary payloads with
//!   per-field validation

pub mod account;
pub mod content;
pub mod inbox;
pub mod validate;

pub use account::{NewUser, User};
pub use content::{
    BlogPost, Category, EntityId, NewBlogPost, NewCategory, NewProject, NewService,
    NewTeamMember, NewTestimonial, Project, Service, TeamMember, Testimonial,
};
pub use inbox::{ContactMessage, NewContactMessage, NewSubscriber, Subscriber};
pub use validate::{ContactPayload, FieldError, SubscribePayload, ValidationError};
