//! The [`ContentStore`] trait defining the content storage interface.
//!
//! Any backend (in-memory, document store) implements this trait to serve
//! site content. Callers depend only on the trait, never on a concrete
//! backend.

use async_trait::async_trait;

use atrium_types::{
    BlogPost, Category, ContactMessage, EntityId, NewBlogPost, NewCategory, NewContactMessage,
    NewProject, NewService, NewSubscriber, NewTeamMember, NewTestimonial, NewUser, Project,
    Service, Subscriber, TeamMember, Testimonial, User,
};

use crate::error::StoreResult;

/// Storage backend for site content.
///
/// All implementations must satisfy these invariants:
/// - `create_*` assigns the next sequential id for the entity kind, starting
///   at 1; ids are never reused (no delete operation exists).
/// - Id assignment and insertion are a single atomic step per entity kind:
///   concurrent creates must not race on the counter.
/// - A missing record is `Ok(None)`, never an error.
/// - `blog_posts` returns newest-first by `published_at`; every other list
///   is in a stable but unspecified order.
/// - Slugs (and `User.username`) are unique within their kind; `create_*`
///   fails with a conflict when the value is taken.
/// - `create_contact_message` and `create_subscriber` stamp `created_at`.
///   Subscriber email uniqueness is the caller's check, made *before*
///   create is invoked.
#[async_trait]
pub trait ContentStore: Send + Sync {
    // Blog posts
    async fn blog_posts(&self) -> StoreResult<Vec<BlogPost>>;
    async fn blog_post(&self, id: EntityId) -> StoreResult<Option<BlogPost>>;
    async fn blog_post_by_slug(&self, slug: &str) -> StoreResult<Option<BlogPost>>;
    async fn create_blog_post(&self, input: NewBlogPost) -> StoreResult<BlogPost>;

    // Categories
    async fn categories(&self) -> StoreResult<Vec<Category>>;
    async fn category(&self, id: EntityId) -> StoreResult<Option<Category>>;
    async fn category_by_slug(&self, slug: &str) -> StoreResult<Option<Category>>;
    async fn create_category(&self, input: NewCategory) -> StoreResult<Category>;

    // Services
    async fn services(&self) -> StoreResult<Vec<Service>>;
    async fn service(&self, id: EntityId) -> StoreResult<Option<Service>>;
    async fn service_by_slug(&self, slug: &str) -> StoreResult<Option<Service>>;
    async fn create_service(&self, input: NewService) -> StoreResult<Service>;

    // Projects
    async fn projects(&self) -> StoreResult<Vec<Project>>;
    async fn project(&self, id: EntityId) -> StoreResult<Option<Project>>;
    async fn create_project(&self, input: NewProject) -> StoreResult<Project>;

    // Team members
    async fn team_members(&self) -> StoreResult<Vec<TeamMember>>;
    async fn team_member(&self, id: EntityId) -> StoreResult<Option<TeamMember>>;
    async fn create_team_member(&self, input: NewTeamMember) -> StoreResult<TeamMember>;

    // Testimonials
    async fn testimonials(&self) -> StoreResult<Vec<Testimonial>>;
    async fn testimonial(&self, id: EntityId) -> StoreResult<Option<Testimonial>>;
    async fn create_testimonial(&self, input: NewTestimonial) -> StoreResult<Testimonial>;

    // Contact messages
    async fn contact_messages(&self) -> StoreResult<Vec<ContactMessage>>;
    async fn contact_message(&self, id: EntityId) -> StoreResult<Option<ContactMessage>>;
    async fn create_contact_message(&self, input: NewContactMessage)
        -> StoreResult<ContactMessage>;

    // Subscribers
    async fn subscribers(&self) -> StoreResult<Vec<Subscriber>>;
    async fn subscriber(&self, id: EntityId) -> StoreResult<Option<Subscriber>>;
    async fn subscriber_by_email(&self, email: &str) -> StoreResult<Option<Subscriber>>;
    async fn create_subscriber(&self, input: NewSubscriber) -> StoreResult<Subscriber>;

    // Users
    async fn user(&self, id: EntityId) -> StoreResult<Option<User>>;
    async fn user_by_username(&self, username: &str) -> StoreResult<Option<User>>;
    async fn create_user(&self, input: NewUser) -> StoreResult<User>;
}
