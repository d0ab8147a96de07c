//! Best-effort category enrichment for blog posts.
//!
//! The API returns blog posts with their category embedded when the post's
//! `category_id` resolves. Resolution is never load-bearing: a dangling
//! reference or a backend failure leaves the post unenriched and is logged,
//! and one post's failure never affects the rest of the batch.

use serde::Serialize;

use atrium_types::{BlogPost, Category};

use crate::traits::ContentStore;

/// A blog post with its category attached when resolution succeeded.
///
/// Serializes as the post's own fields plus an embedded `category` object;
/// the `category` key is omitted entirely when enrichment did not happen.
#[derive(Clone, Debug, Serialize)]
pub struct PostWithCategory {
    #[serde(flatten)]
    pub post: BlogPost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Resolve and attach the category for one post.
pub async fn attach_category(store: &dyn ContentStore, post: BlogPost) -> PostWithCategory {
    let category = match post.category_id {
        None => None,
        Some(category_id) => match store.category(category_id).await {
            // A dangling reference is tolerated silently.
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(
                    post_id = post.id,
                    category_id,
                    error = %err,
                    "category lookup failed, returning post unenriched"
                );
                None
            }
        },
    };
    PostWithCategory { post, category }
}

/// Resolve and attach categories for a batch of posts, preserving order.
pub async fn attach_categories(
    store: &dyn ContentStore,
    posts: Vec<BlogPost>,
) -> Vec<PostWithCategory> {
    let mut enriched = Vec::with_capacity(posts.len());
    for post in posts {
        enriched.push(attach_category(store, post).await);
    }
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use atrium_types::{
        ContactMessage, EntityId, NewBlogPost, NewCategory, NewContactMessage, NewProject,
        NewService, NewSubscriber, NewTeamMember, NewTestimonial, NewUser, Project, Service,
        Subscriber, TeamMember, Testimonial, User,
    };

    use crate::error::{StoreError, StoreResult};
    use crate::memory::InMemoryStore;

    fn post_input(slug: &str, category_id: Option<EntityId>) -> NewBlogPost {
        NewBlogPost {
            title: slug.to_string(),
            slug: slug.to_string(),
            excerpt: "e".into(),
            content: "c".into(),
            published: true,
            author_name: "A".into(),
            author_image: None,
            cover_image: None,
            published_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            category_id,
        }
    }

    #[tokio::test]
    async fn attaches_resolvable_category() {
        let store = InMemoryStore::new();
        let category = store
            .create_category(NewCategory {
                name: "Tech".into(),
                slug: "tech".into(),
            })
            .await
            .unwrap();
        let post = store
            .create_blog_post(post_input("hello", Some(category.id)))
            .await
            .unwrap();

        let enriched = attach_category(&store, post).await;
        assert_eq!(enriched.category.as_ref().unwrap().name, "Tech");
    }

    #[tokio::test]
    async fn dangling_reference_returns_post_unenriched() {
        let store = InMemoryStore::new();
        let post = store
            .create_blog_post(post_input("orphan", Some(99)))
            .await
            .unwrap();

        let enriched = attach_category(&store, post).await;
        assert!(enriched.category.is_none());
        assert_eq!(enriched.post.slug, "orphan");
    }

    #[tokio::test]
    async fn batch_survives_mixed_references() {
        let store = InMemoryStore::new();
        let category = store
            .create_category(NewCategory {
                name: "Tech".into(),
                slug: "tech".into(),
            })
            .await
            .unwrap();
        store
            .create_blog_post(post_input("good", Some(category.id)))
            .await
            .unwrap();
        store
            .create_blog_post(post_input("dangling", Some(404)))
            .await
            .unwrap();
        store.create_blog_post(post_input("bare", None)).await.unwrap();

        let posts = store.blog_posts().await.unwrap();
        let enriched = attach_categories(&store, posts).await;
        assert_eq!(enriched.len(), 3);
        for item in &enriched {
            match item.post.slug.as_str() {
                "good" => assert!(item.category.is_some()),
                _ => assert!(item.category.is_none()),
            }
        }
    }

    #[tokio::test]
    async fn enrichment_is_idempotent_between_writes() {
        let store = InMemoryStore::with_sample_content();
        let first = attach_categories(&store, store.blog_posts().await.unwrap()).await;
        let second = attach_categories(&store, store.blog_posts().await.unwrap()).await;
        let names = |batch: &[PostWithCategory]| -> Vec<Option<String>> {
            batch
                .iter()
                .map(|p| p.category.as_ref().map(|c| c.name.clone()))
                .collect()
        };
        assert_eq!(names(&first), names(&second));
    }

    #[tokio::test]
    async fn category_key_omitted_from_json_when_absent() {
        let store = InMemoryStore::new();
        let post = store
            .create_blog_post(post_input("bare", None))
            .await
            .unwrap();
        let json = serde_json::to_value(attach_category(&store, post).await).unwrap();
        assert!(json.get("category").is_none());
        assert_eq!(json["slug"], "bare");
    }

    /// Store whose category lookups always fail, for exercising the
    /// swallow-and-log path.
    struct DownStore;

    macro_rules! down {
        () => {
            Err(StoreError::Backend("store offline".into()))
        };
    }

    #[async_trait]
    impl crate::traits::ContentStore for DownStore {
        async fn blog_posts(&self) -> StoreResult<Vec<BlogPost>> { down!() }
        async fn blog_post(&self, _: EntityId) -> StoreResult<Option<BlogPost>> { down!() }
        async fn blog_post_by_slug(&self, _: &str) -> StoreResult<Option<BlogPost>> { down!() }
        async fn create_blog_post(&self, _: NewBlogPost) -> StoreResult<BlogPost> { down!() }
        async fn categories(&self) -> StoreResult<Vec<Category>> { down!() }
        async fn category(&self, _: EntityId) -> StoreResult<Option<Category>> { down!() }
        async fn category_by_slug(&self, _: &str) -> StoreResult<Option<Category>> { down!() }
        async fn create_category(&self, _: NewCategory) -> StoreResult<Category> { down!() }
        async fn services(&self) -> StoreResult<Vec<Service>> { down!() }
        async fn service(&self, _: EntityId) -> StoreResult<Option<Service>> { down!() }
        async fn service_by_slug(&self, _: &str) -> StoreResult<Option<Service>> { down!() }
        async fn create_service(&self, _: NewService) -> StoreResult<Service> { down!() }
        async fn projects(&self) -> StoreResult<Vec<Project>> { down!() }
        async fn project(&self, _: EntityId) -> StoreResult<Option<Project>> { down!() }
        async fn create_project(&self, _: NewProject) -> StoreResult<Project> { down!() }
        async fn team_members(&self) -> StoreResult<Vec<TeamMember>> { down!() }
        async fn team_member(&self, _: EntityId) -> StoreResult<Option<TeamMember>> { down!() }
        async fn create_team_member(&self, _: NewTeamMember) -> StoreResult<TeamMember> { down!() }
        async fn testimonials(&self) -> StoreResult<Vec<Testimonial>> { down!() }
        async fn testimonial(&self, _: EntityId) -> StoreResult<Option<Testimonial>> { down!() }
        async fn create_testimonial(&self, _: NewTestimonial) -> StoreResult<Testimonial> { down!() }
        async fn contact_messages(&self) -> StoreResult<Vec<ContactMessage>> { down!() }
        async fn contact_message(&self, _: EntityId) -> StoreResult<Option<ContactMessage>> { down!() }
        async fn create_contact_message(&self, _: NewContactMessage) -> StoreResult<ContactMessage> { down!() }
        async fn subscribers(&self) -> StoreResult<Vec<Subscriber>> { down!() }
        async fn subscriber(&self, _: EntityId) -> StoreResult<Option<Subscriber>> { down!() }
        async fn subscriber_by_email(&self, _: &str) -> StoreResult<Option<Subscriber>> { down!() }
        async fn create_subscriber(&self, _: NewSubscriber) -> StoreResult<Subscriber> { down!() }
        async fn user(&self, _: EntityId) -> StoreResult<Option<User>> { down!() }
        async fn user_by_username(&self, _: &str) -> StoreResult<Option<User>> { down!() }
        async fn create_user(&self, _: NewUser) -> StoreResult<User> { down!() }
    }

    #[tokio::test]
    async fn backend_failure_swallowed_per_post() {
        let helper = InMemoryStore::new();
        let post = helper
            .create_blog_post(post_input("resilient", Some(1)))
            .await
            .unwrap();

        let enriched = attach_categories(&DownStore, vec![post]).await;
        assert_eq!(enriched.len(), 1);
        assert!(enriched[0].category.is_none());
        assert_eq!(enriched[0].post.slug, "resilient");
    }
}
