//! Seeded site content: categories, blog posts, services, projects, team
//! members, and testimonials.
//!
//! Each record kind comes in two shapes: the stored record carrying the
//! store-assigned [`EntityId`], and a `New*` input carrying everything the
//! caller provides. All records serialize camelCase; the JSON field names
//! are the API contract the site's front end consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a stored record, unique and monotonically increasing
/// within its entity kind. Assigned by the store starting at 1; never
/// reused (there is no delete operation).
pub type EntityId = u32;

/// A blog category. `name` and `slug` are unique within the kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
}

/// Input for creating a [`Category`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}

impl NewCategory {
    pub fn into_record(self, id: EntityId) -> Category {
        Category {
            id,
            name: self.name,
            slug: self.slug,
        }
    }
}

/// A published article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: EntityId,
    pub title: String,
    /// URL-facing unique identifier, distinct from the numeric id.
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub published: bool,
    pub author_name: String,
    pub author_image: Option<String>,
    pub cover_image: Option<String>,
    /// Publication timestamp; list results sort newest-first on this field.
    pub published_at: DateTime<Utc>,
    /// Weak reference to a [`Category`]. May point at a category that does
    /// not exist; readers tolerate the dangling case.
    pub category_id: Option<EntityId>,
}

/// Input for creating a [`BlogPost`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub published: bool,
    pub author_name: String,
    pub author_image: Option<String>,
    pub cover_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub category_id: Option<EntityId>,
}

impl NewBlogPost {
    pub fn into_record(self, id: EntityId) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            published: self.published,
            author_name: self.author_name,
            author_image: self.author_image,
            cover_image: self.cover_image,
            published_at: self.published_at,
            category_id: self.category_id,
        }
    }
}

/// A service offering shown on the services page. `slug` is unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Icon name resolved by the front end (e.g. "cloud", "shield").
    pub icon: String,
    pub slug: String,
}

/// Input for creating a [`Service`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub slug: String,
}

impl NewService {
    pub fn into_record(self, id: EntityId) -> Service {
        Service {
            id,
            title: self.title,
            description: self.description,
            icon: self.icon,
            slug: self.slug,
        }
    }
}

/// A portfolio project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    /// Free-text label (e.g. "Cloud Solutions"), not a [`Category`] reference.
    pub category: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
}

/// Input for creating a [`Project`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub category: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
}

impl NewProject {
    pub fn into_record(self, id: EntityId) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            category: self.category,
            technologies: self.technologies,
            link: self.link,
        }
    }
}

/// A team member shown on the about page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: EntityId,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image: Option<String>,
    pub linked_in: Option<String>,
    pub twitter: Option<String>,
}

/// Input for creating a [`TeamMember`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamMember {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image: Option<String>,
    pub linked_in: Option<String>,
    pub twitter: Option<String>,
}

impl NewTeamMember {
    pub fn into_record(self, id: EntityId) -> TeamMember {
        TeamMember {
            id,
            name: self.name,
            position: self.position,
            bio: self.bio,
            image: self.image,
            linked_in: self.linked_in,
            twitter: self.twitter,
        }
    }
}

/// A client testimonial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: EntityId,
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub image: Option<String>,
}

/// Input for creating a [`Testimonial`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub image: Option<String>,
}

impl NewTestimonial {
    pub fn into_record(self, id: EntityId) -> Testimonial {
        Testimonial {
            id,
            name: self.name,
            position: self.position,
            company: self.company,
            content: self.content,
            image: self.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn blog_post_serializes_camel_case() {
        let post = NewBlogPost {
            title: "Hello".into(),
            slug: "hello".into(),
            excerpt: "ex".into(),
            content: "body".into(),
            published: true,
            author_name: "Dana Reyes".into(),
            author_image: None,
            cover_image: None,
            published_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            category_id: Some(1),
        }
        .into_record(7);

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["authorName"], "Dana Reyes");
        assert_eq!(json["categoryId"], 1);
        assert!(json.get("author_name").is_none());
    }

    #[test]
    fn team_member_linked_in_field_name() {
        let member = NewTeamMember {
            name: "A".into(),
            position: "B".into(),
            bio: "C".into(),
            image: None,
            linked_in: Some("https://linkedin.com/in/a".into()),
            twitter: None,
        }
        .into_record(1);

        let json = serde_json::to_value(&member).unwrap();
        assert!(json.get("linkedIn").is_some());
    }

    #[test]
    fn into_record_assigns_id() {
        let cat = NewCategory {
            name: "Tech".into(),
            slug: "tech".into(),
        }
        .into_record(3);
        assert_eq!(cat.id, 3);
        assert_eq!(cat.slug, "tech");
    }

    #[test]
    fn project_round_trips_technologies() {
        let project = NewProject {
            title: "ERP Rollout".into(),
            description: "d".into(),
            image: None,
            category: "Software Development".into(),
            technologies: vec!["Rust".into(), "Postgres".into()],
            link: None,
        }
        .into_record(2);

        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
    }
}
