//! In-memory content store.
//!
//! [`InMemoryStore`] keeps every entity kind in its own id-keyed table
//! behind a `RwLock`. It implements the full [`ContentStore`] trait and
//! backs the site in development, tests, and single-process deployments.
//! Data is lost when the store is dropped.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use atrium_types::{
    BlogPost, Category, ContactMessage, EntityId, NewBlogPost, NewCategory, NewContactMessage,
    NewProject, NewService, NewSubscriber, NewTeamMember, NewTestimonial, NewUser, Project,
    Service, Subscriber, TeamMember, Testimonial, User,
};

use crate::error::{StoreError, StoreResult};
use crate::seed;
use crate::traits::ContentStore;

/// One entity kind's rows plus its id counter.
///
/// The counter and the map always mutate under the same write lock, which
/// makes id assignment atomic with insertion. A `BTreeMap` keeps list
/// results in id (= insertion) order, satisfying the stable-order
/// requirement for unordered kinds.
struct Table<T> {
    rows: BTreeMap<EntityId, T>,
    next_id: EntityId,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn get(&self, id: EntityId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn values(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| pred(row)).cloned()
    }

    /// Assign the next id, build the row, and store it.
    fn insert_with(&mut self, build: impl FnOnce(EntityId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    /// Insert a fixture row under its fixed id and keep the counter ahead
    /// of every seeded id.
    fn seed(&mut self, id: EntityId, row: T) {
        self.rows.insert(id, row);
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }
}

fn read<T>(lock: &RwLock<Table<T>>) -> StoreResult<RwLockReadGuard<'_, Table<T>>> {
    lock.read()
        .map_err(|e| StoreError::LockPoisoned(e.to_string()))
}

fn write<T>(lock: &RwLock<Table<T>>) -> StoreResult<RwLockWriteGuard<'_, Table<T>>> {
    lock.write()
        .map_err(|e| StoreError::LockPoisoned(e.to_string()))
}

/// An in-memory implementation of [`ContentStore`].
pub struct InMemoryStore {
    categories: RwLock<Table<Category>>,
    blog_posts: RwLock<Table<BlogPost>>,
    services: RwLock<Table<Service>>,
    projects: RwLock<Table<Project>>,
    team_members: RwLock<Table<TeamMember>>,
    testimonials: RwLock<Table<Testimonial>>,
    contact_messages: RwLock<Table<ContactMessage>>,
    subscribers: RwLock<Table<Subscriber>>,
    users: RwLock<Table<User>>,
}

impl InMemoryStore {
    /// Create an empty store. Every id counter starts at 1.
    pub fn new() -> Self {
        Self {
            categories: RwLock::new(Table::new()),
            blog_posts: RwLock::new(Table::new()),
            services: RwLock::new(Table::new()),
            projects: RwLock::new(Table::new()),
            team_members: RwLock::new(Table::new()),
            testimonials: RwLock::new(Table::new()),
            contact_messages: RwLock::new(Table::new()),
            subscribers: RwLock::new(Table::new()),
            users: RwLock::new(Table::new()),
        }
    }

    /// Create a store seeded with the sample site content.
    ///
    /// Fixture rows keep their fixed ids and each counter resumes at the
    /// kind's maximum seeded id + 1. Tables are seeded before any lock
    /// exists, so construction cannot fail.
    pub fn with_sample_content() -> Self {
        let mut categories = Table::new();
        for row in seed::categories() {
            let id = row.id;
            categories.seed(id, row);
        }

        let mut blog_posts = Table::new();
        for row in seed::blog_posts() {
            let id = row.id;
            blog_posts.seed(id, row);
        }

        let mut services = Table::new();
        for row in seed::services() {
            let id = row.id;
            services.seed(id, row);
        }

        let mut projects = Table::new();
        for row in seed::projects() {
            let id = row.id;
            projects.seed(id, row);
        }

        let mut team_members = Table::new();
        for row in seed::team_members() {
            let id = row.id;
            team_members.seed(id, row);
        }

        let mut testimonials = Table::new();
        for row in seed::testimonials() {
            let id = row.id;
            testimonials.seed(id, row);
        }

        Self {
            categories: RwLock::new(categories),
            blog_posts: RwLock::new(blog_posts),
            services: RwLock::new(services),
            projects: RwLock::new(projects),
            team_members: RwLock::new(team_members),
            testimonials: RwLock::new(testimonials),
            contact_messages: RwLock::new(Table::new()),
            subscribers: RwLock::new(Table::new()),
            users: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    // Blog posts

    async fn blog_posts(&self) -> StoreResult<Vec<BlogPost>> {
        let mut posts = read(&self.blog_posts)?.values();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts)
    }

    async fn blog_post(&self, id: EntityId) -> StoreResult<Option<BlogPost>> {
        Ok(read(&self.blog_posts)?.get(id))
    }

    async fn blog_post_by_slug(&self, slug: &str) -> StoreResult<Option<BlogPost>> {
        Ok(read(&self.blog_posts)?.find(|post| post.slug == slug))
    }

    async fn create_blog_post(&self, input: NewBlogPost) -> StoreResult<BlogPost> {
        let mut posts = write(&self.blog_posts)?;
        if posts.find(|post| post.slug == input.slug).is_some() {
            return Err(StoreError::Conflict {
                entity: "blog post",
                field: "slug",
                value: input.slug,
            });
        }
        Ok(posts.insert_with(|id| input.into_record(id)))
    }

    // Categories

    async fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(read(&self.categories)?.values())
    }

    async fn category(&self, id: EntityId) -> StoreResult<Option<Category>> {
        Ok(read(&self.categories)?.get(id))
    }

    async fn category_by_slug(&self, slug: &str) -> StoreResult<Option<Category>> {
        Ok(read(&self.categories)?.find(|category| category.slug == slug))
    }

    async fn create_category(&self, input: NewCategory) -> StoreResult<Category> {
        let mut categories = write(&self.categories)?;
        if categories.find(|c| c.slug == input.slug).is_some() {
            return Err(StoreError::Conflict {
                entity: "category",
                field: "slug",
                value: input.slug,
            });
        }
        Ok(categories.insert_with(|id| input.into_record(id)))
    }

    // Services

    async fn services(&self) -> StoreResult<Vec<Service>> {
        Ok(read(&self.services)?.values())
    }

    async fn service(&self, id: EntityId) -> StoreResult<Option<Service>> {
        Ok(read(&self.services)?.get(id))
    }

    async fn service_by_slug(&self, slug: &str) -> StoreResult<Option<Service>> {
        Ok(read(&self.services)?.find(|service| service.slug == slug))
    }

    async fn create_service(&self, input: NewService) -> StoreResult<Service> {
        let mut services = write(&self.services)?;
        if services.find(|s| s.slug == input.slug).is_some() {
            return Err(StoreError::Conflict {
                entity: "service",
                field: "slug",
                value: input.slug,
            });
        }
        Ok(services.insert_with(|id| input.into_record(id)))
    }

    // Projects

    async fn projects(&self) -> StoreResult<Vec<Project>> {
        Ok(read(&self.projects)?.values())
    }

    async fn project(&self, id: EntityId) -> StoreResult<Option<Project>> {
        Ok(read(&self.projects)?.get(id))
    }

    async fn create_project(&self, input: NewProject) -> StoreResult<Project> {
        Ok(write(&self.projects)?.insert_with(|id| input.into_record(id)))
    }

    // Team members

    async fn team_members(&self) -> StoreResult<Vec<TeamMember>> {
        Ok(read(&self.team_members)?.values())
    }

    async fn team_member(&self, id: EntityId) -> StoreResult<Option<TeamMember>> {
        Ok(read(&self.team_members)?.get(id))
    }

    async fn create_team_member(&self, input: NewTeamMember) -> StoreResult<TeamMember> {
        Ok(write(&self.team_members)?.insert_with(|id| input.into_record(id)))
    }

    // Testimonials

    async fn testimonials(&self) -> StoreResult<Vec<Testimonial>> {
        Ok(read(&self.testimonials)?.values())
    }

    async fn testimonial(&self, id: EntityId) -> StoreResult<Option<Testimonial>> {
        Ok(read(&self.testimonials)?.get(id))
    }

    async fn create_testimonial(&self, input: NewTestimonial) -> StoreResult<Testimonial> {
        Ok(write(&self.testimonials)?.insert_with(|id| input.into_record(id)))
    }

    // Contact messages

    async fn contact_messages(&self) -> StoreResult<Vec<ContactMessage>> {
        Ok(read(&self.contact_messages)?.values())
    }

    async fn contact_message(&self, id: EntityId) -> StoreResult<Option<ContactMessage>> {
        Ok(read(&self.contact_messages)?.get(id))
    }

    async fn create_contact_message(
        &self,
        input: NewContactMessage,
    ) -> StoreResult<ContactMessage> {
        let created_at = Utc::now();
        Ok(write(&self.contact_messages)?.insert_with(|id| input.into_record(id, created_at)))
    }

    // Subscribers

    async fn subscribers(&self) -> StoreResult<Vec<Subscriber>> {
        Ok(read(&self.subscribers)?.values())
    }

    async fn subscriber(&self, id: EntityId) -> StoreResult<Option<Subscriber>> {
        Ok(read(&self.subscribers)?.get(id))
    }

    async fn subscriber_by_email(&self, email: &str) -> StoreResult<Option<Subscriber>> {
        Ok(read(&self.subscribers)?.find(|sub| sub.email == email))
    }

    async fn create_subscriber(&self, input: NewSubscriber) -> StoreResult<Subscriber> {
        let created_at = Utc::now();
        Ok(write(&self.subscribers)?.insert_with(|id| input.into_record(id, created_at)))
    }

    // Users

    async fn user(&self, id: EntityId) -> StoreResult<Option<User>> {
        Ok(read(&self.users)?.get(id))
    }

    async fn user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(read(&self.users)?.find(|user| user.username == username))
    }

    async fn create_user(&self, input: NewUser) -> StoreResult<User> {
        let mut users = write(&self.users)?;
        if users.find(|u| u.username == input.username).is_some() {
            return Err(StoreError::Conflict {
                entity: "user",
                field: "username",
                value: input.username,
            });
        }
        Ok(users.insert_with(|id| input.into_record(id)))
    }
}
