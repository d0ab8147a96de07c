//! Sample site content.
//!
//! Fixture rows seeded into
//! [`InMemoryStore::with_sample_content`](crate::memory::InMemoryStore::with_sample_content)
//! at construction. Ids are fixed so blog posts can reference categories;
//! the store resumes numbering past the highest seeded id. Contact
//! messages, subscribers, and users are never seeded; those kinds only
//! grow at runtime.

use chrono::{DateTime, TimeZone, Utc};

use atrium_types::{BlogPost, Category, Project, Service, TeamMember, Testimonial};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // Fixture dates are compile-time constants; fall back to the epoch
    // rather than panic if one is ever edited into something invalid.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn categories() -> Vec<Category> {
    [
        (1, "Cloud & Infrastructure", "cloud-infrastructure"),
        (2, "Security", "security"),
        (3, "AI & Data", "ai-data"),
        (4, "Product Engineering", "product-engineering"),
        (5, "Industry Insights", "industry-insights"),
    ]
    .into_iter()
    .map(|(id, name, slug)| Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
    })
    .collect()
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Rightsizing Kubernetes: What We Learned From 40 Client Clusters".into(),
            slug: "rightsizing-kubernetes".into(),
            excerpt: "Most clusters we audit run below 30% utilization. Here is the \
                      playbook we use to bring spend back in line without hurting reliability."
                .into(),
            content: "Over the past two years our infrastructure practice has audited more \
                      than forty production Kubernetes clusters, and the pattern repeats: \
                      requests set during an incident three quarters ago, never revisited, \
                      quietly tripling the compute bill.\n\nThe fix is rarely exotic. We start \
                      with two weeks of per-workload utilization data, split workloads into \
                      latency-sensitive and batch tiers, and only then touch requests and \
                      limits. Autoscaler settings come last, after the baselines are honest. \
                      Clients typically recover a third of their spend, and the on-call rota \
                      notices nothing except quieter paging.".into(),
            published: true,
            author_name: "Lena Okafor".into(),
            author_image: Some("https://images.atriumdigital.io/team/lena-okafor.jpg".into()),
            cover_image: Some("https://images.atriumdigital.io/blog/kubernetes-cost.jpg".into()),
            published_at: day(2024, 6, 18),
            category_id: Some(1),
        },
        BlogPost {
            id: 2,
            title: "Passkeys in Production: A Migration Diary".into(),
            slug: "passkeys-in-production".into(),
            excerpt: "We moved a 200k-user login flow from passwords to passkeys in one \
                      quarter. The hard parts were nothing like what we expected."
                .into(),
            content: "When a fintech client asked us to retire passwords, we budgeted most of \
                      the quarter for WebAuthn's ceremony details. Those took a week. The real \
                      work was account recovery: every support path that assumed a password \
                      had to be redesigned, and the fraud team needed new signals to replace \
                      the ones password-reset abuse used to give them.\n\nRollout went \
                      cohort-by-cohort with an instant fallback flag. Adoption crossed 60% in \
                      six weeks, support tickets about lockouts halved, and credential-stuffing \
                      traffic against the login endpoint simply stopped converting.".into(),
            published: true,
            author_name: "Marcus Webb".into(),
            author_image: Some("https://images.atriumdigital.io/team/marcus-webb.jpg".into()),
            cover_image: Some("https://images.atriumdigital.io/blog/passkeys.jpg".into()),
            published_at: day(2024, 5, 30),
            category_id: Some(2),
        },
        BlogPost {
            id: 3,
            title: "Retrieval Pipelines That Survive Contact With Real Documents".into(),
            slug: "retrieval-pipelines-real-documents".into(),
            excerpt: "Demo corpora are clean. Your contracts, wikis, and scanned PDFs are \
                      not. Practical lessons from shipping retrieval systems at three clients."
                .into(),
            content: "Every retrieval demo works beautifully on a folder of tidy markdown. \
                      Production corpora arrive as scanned PDFs with OCR artifacts, wiki pages \
                      that contradict each other, and spreadsheets exported to HTML.\n\nThe \
                      systems that survive share three habits: they treat chunking as a \
                      per-format decision rather than a global constant, they keep document \
                      provenance attached to every chunk so answers can cite their sources, \
                      and they measure retrieval quality with a fixed evaluation set before \
                      anyone tunes a prompt. None of this is glamorous, all of it is what \
                      separates a demo from a tool people trust.".into(),
            published: true,
            author_name: "Priya Raman".into(),
            author_image: Some("https://images.atriumdigital.io/team/priya-raman.jpg".into()),
            cover_image: Some("https://images.atriumdigital.io/blog/retrieval.jpg".into()),
            published_at: day(2024, 4, 12),
            category_id: Some(3),
        },
        BlogPost {
            id: 4,
            title: "The Monolith We Deliberately Didn't Split".into(),
            slug: "monolith-we-didnt-split".into(),
            excerpt: "A client came to us for a microservices migration. We talked them out \
                      of it, and eighteen months later the decision still looks right."
                .into(),
            content: "The brief was clear: break the monolith into services. The codebase told \
                      a different story — a well-modularized Rails application with one genuine \
                      scaling hotspot in report generation.\n\nWe extracted exactly that one \
                      workload behind a queue, left everything else in place, and spent the \
                      remaining budget on deploy tooling and test speed. Deploys went from \
                      weekly to daily. The team still runs one repository, one on-call \
                      rotation, and one mental model. Architecture advice that ignores team \
                      size is just fashion; eight engineers rarely need thirty services.".into(),
            published: true,
            author_name: "Marcus Webb".into(),
            author_image: Some("https://images.atriumdigital.io/team/marcus-webb.jpg".into()),
            cover_image: Some("https://images.atriumdigital.io/blog/monolith.jpg".into()),
            published_at: day(2024, 3, 7),
            category_id: Some(4),
        },
        BlogPost {
            id: 5,
            title: "What Mid-Market CTOs Are Actually Budgeting For in 2024".into(),
            slug: "mid-market-cto-budgets-2024".into(),
            excerpt: "We interviewed twenty technology leaders about where next year's money \
                      goes. Three themes dominated, and AI pilots were only one of them."
                .into(),
            content: "Between October and December we sat down with twenty CTOs at companies \
                      between 200 and 2,000 employees. The headlines say every budget is an AI \
                      budget; the spreadsheets say otherwise.\n\nThe three recurring line items: \
                      consolidating SaaS sprawl inherited from the zero-interest years, paying \
                      down security debt ahead of tightening cyber-insurance requirements, and \
                      yes, a contained AI pilot — almost always internal-facing, almost never \
                      customer-facing yet. The common thread is reversibility. After two years \
                      of layoffs and vendor churn, leaders are buying options, not platforms.".into(),
            published: true,
            author_name: "Daniel Osei".into(),
            author_image: Some("https://images.atriumdigital.io/team/daniel-osei.jpg".into()),
            cover_image: Some("https://images.atriumdigital.io/blog/budgets.jpg".into()),
            published_at: day(2024, 1, 25),
            category_id: Some(5),
        },
        BlogPost {
            id: 6,
            title: "Incident Reviews That People Stop Dreading".into(),
            slug: "incident-reviews-people-stop-dreading".into(),
            excerpt: "Blameless is table stakes. The reviews that actually change systems \
                      share a structure, and it fits on one page."
                .into(),
            content: "Most incident reviews fail the same way: forty minutes reconstructing a \
                      timeline everyone already read, five minutes on the only question that \
                      matters — what made the system easy to break and hard to fix?\n\nThe \
                      format we install at clients is one page. Timeline written asynchronously \
                      before the meeting. The meeting itself spends its hour on contributing \
                      factors and on proposed guardrails, each with an owner and a review date. \
                      Action items that nobody owns are deleted on the spot; a shorter honest \
                      list beats a long aspirational one. Within a quarter, reviews shift from \
                      ritual to the place where the roadmap actually gets negotiated.".into(),
            published: true,
            author_name: "Lena Okafor".into(),
            author_image: Some("https://images.atriumdigital.io/team/lena-okafor.jpg".into()),
            cover_image: Some("https://images.atriumdigital.io/blog/incident-reviews.jpg".into()),
            published_at: day(2023, 11, 9),
            category_id: Some(4),
        },
    ]
}

pub fn services() -> Vec<Service> {
    [
        (
            1,
            "Custom Software Development",
            "Web platforms, internal tools, and APIs designed around your workflows and \
             built to be maintained by your own team after handover.",
            "code",
            "custom-software-development",
        ),
        (
            2,
            "Cloud Architecture & Migration",
            "Assessment, landing-zone design, and staged migrations that move workloads \
             without moving your outage budget.",
            "cloud",
            "cloud-architecture-migration",
        ),
        (
            3,
            "Security Engineering",
            "Threat modeling, hardening, and incident readiness woven into delivery \
             rather than bolted on at audit time.",
            "shield",
            "security-engineering",
        ),
        (
            4,
            "Data & Analytics",
            "Warehouses, pipelines, and dashboards that answer the questions your \
             leadership actually asks.",
            "bar-chart",
            "data-analytics",
        ),
        (
            5,
            "Applied AI",
            "Retrieval, automation, and decision-support systems with evaluation \
             baked in from the first prototype.",
            "brain",
            "applied-ai",
        ),
        (
            6,
            "Technology Advisory",
            "Fractional architecture and due-diligence support for leaders making \
             build-versus-buy and platform decisions.",
            "users",
            "technology-advisory",
        ),
    ]
    .into_iter()
    .map(|(id, title, description, icon, slug)| Service {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        slug: slug.to_string(),
    })
    .collect()
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: 1,
            name: "Daniel Osei".into(),
            position: "Managing Partner".into(),
            bio: "Two decades guiding mid-market technology strategy; previously VP of \
                  Engineering at a logistics unicorn."
                .into(),
            image: Some("https://images.atriumdigital.io/team/daniel-osei.jpg".into()),
            linked_in: Some("https://www.linkedin.com/in/daniel-osei".into()),
            twitter: None,
        },
        TeamMember {
            id: 2,
            name: "Lena Okafor".into(),
            position: "Head of Infrastructure".into(),
            bio: "SRE by training, runs our cloud and reliability practice; speaks \
                  regularly on cost-aware platform design."
                .into(),
            image: Some("https://images.atriumdigital.io/team/lena-okafor.jpg".into()),
            linked_in: Some("https://www.linkedin.com/in/lena-okafor".into()),
            twitter: Some("https://twitter.com/lenaokafor".into()),
        },
        TeamMember {
            id: 3,
            name: "Marcus Webb".into(),
            position: "Principal Engineer".into(),
            bio: "Full-stack generalist with a security bent; led the passkey and \
                  platform work featured on our blog."
                .into(),
            image: Some("https://images.atriumdigital.io/team/marcus-webb.jpg".into()),
            linked_in: Some("https://www.linkedin.com/in/marcus-webb".into()),
            twitter: None,
        },
        TeamMember {
            id: 4,
            name: "Priya Raman".into(),
            position: "Head of AI & Data".into(),
            bio: "Builds retrieval and analytics systems that survive production; \
                  former research engineer turned consultant."
                .into(),
            image: Some("https://images.atriumdigital.io/team/priya-raman.jpg".into()),
            linked_in: Some("https://www.linkedin.com/in/priya-raman".into()),
            twitter: Some("https://twitter.com/priyaraman".into()),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Freight Marketplace Replatform".into(),
            description: "Rebuilt a spot-freight marketplace's booking flow and pricing \
                          engine; quote-to-booking conversion rose 28%."
                .into(),
            image: Some("https://images.atriumdigital.io/work/freight.jpg".into()),
            category: "Custom Software Development".into(),
            technologies: vec!["Rust".into(), "React".into(), "PostgreSQL".into()],
            link: Some("https://atriumdigital.io/work/freight-marketplace".into()),
        },
        Project {
            id: 2,
            title: "Hospital Group Cloud Migration".into(),
            description: "Moved 14 clinical support systems to a compliant landing zone \
                          across two regions with zero unplanned downtime."
                .into(),
            image: Some("https://images.atriumdigital.io/work/hospital.jpg".into()),
            category: "Cloud Architecture & Migration".into(),
            technologies: vec!["AWS".into(), "Terraform".into(), "Kubernetes".into()],
            link: None,
        },
        Project {
            id: 3,
            title: "Claims Triage Copilot".into(),
            description: "Retrieval-backed assistant that drafts first-pass insurance claim \
                          assessments; adjusters clear 40% more cases per day."
                .into(),
            image: Some("https://images.atriumdigital.io/work/claims.jpg".into()),
            category: "Applied AI".into(),
            technologies: vec!["Python".into(), "OpenSearch".into(), "LLM APIs".into()],
            link: None,
        },
        Project {
            id: 4,
            title: "Retail Banking Passkey Rollout".into(),
            description: "Replaced password login for 200k customers with passkeys and \
                          rebuilt account recovery around them."
                .into(),
            image: Some("https://images.atriumdigital.io/work/passkeys.jpg".into()),
            category: "Security Engineering".into(),
            technologies: vec!["WebAuthn".into(), "TypeScript".into(), "Go".into()],
            link: Some("https://atriumdigital.io/work/passkey-rollout".into()),
        },
        Project {
            id: 5,
            title: "Manufacturing Analytics Platform".into(),
            description: "Plant-floor telemetry warehouse and dashboard suite giving a \
                          12-site manufacturer its first shared view of yield."
                .into(),
            image: Some("https://images.atriumdigital.io/work/manufacturing.jpg".into()),
            category: "Data & Analytics".into(),
            technologies: vec!["dbt".into(), "Snowflake".into(), "Grafana".into()],
            link: None,
        },
        Project {
            id: 6,
            title: "SaaS Portfolio Due Diligence".into(),
            description: "Technical diligence across a private-equity firm's five-company \
                          acquisition pipeline, delivered in six weeks."
                .into(),
            image: Some("https://images.atriumdigital.io/work/diligence.jpg".into()),
            category: "Technology Advisory".into(),
            technologies: vec!["Architecture Review".into(), "Cost Modeling".into()],
            link: None,
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: "Hannah Brooks".into(),
            position: "Chief Operating Officer".into(),
            company: "Meridian Freight".into(),
            content: "Atrium rebuilt our booking platform while it kept running. They \
                      estimated honestly, shipped weekly, and left our own engineers \
                      stronger than they found them."
                .into(),
            image: Some("https://images.atriumdigital.io/testimonials/hannah-brooks.jpg".into()),
        },
        Testimonial {
            id: 2,
            name: "Tomás Herrera".into(),
            position: "CTO".into(),
            company: "Northgate Health".into(),
            content: "The migration plan survived contact with reality, which in my \
                      experience is the rarest compliment you can pay a consultancy."
                .into(),
            image: Some("https://images.atriumdigital.io/testimonials/tomas-herrera.jpg".into()),
        },
        Testimonial {
            id: 3,
            name: "Grace Lindqvist".into(),
            position: "VP of Claims".into(),
            company: "Beacon Mutual".into(),
            content: "Our adjusters were skeptical of an AI assistant until Atrium showed \
                      them the citations. Adoption took care of itself after that."
                .into(),
            image: Some("https://images.atriumdigital.io/testimonials/grace-lindqvist.jpg".into()),
        },
    ]
}
