//! Content records consumed when the file system is built.
//!
//! Every field defaults to empty so partial content files still load.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub name: String,
    pub title: String,
    pub intro: String,
    pub about: String,
    pub skills: Vec<String>,
    pub current_status: String,
    pub resume_url: String,
    pub email: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub short_desc: String,
    pub long_desc: String,
    pub tech: Vec<String>,
    pub screenshots: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Learning {
    pub title: String,
    pub summary: String,
    pub full_details: String,
}

/// A work experience entry. An empty `end_date` means the role is current.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl SocialLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self { label: label.to_string(), href: href.to_string() }
    }
}

/// Everything the shell needs to populate its file system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub settings: SiteSettings,
    pub projects: Vec<Project>,
    pub learnings: Vec<Learning>,
    pub experience: Vec<WorkExperience>,
    pub socials: Vec<SocialLink>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SiteContent {
    /// Built-in demo content, used when no content file is given.
    pub fn sample() -> Self {
        let settings = SiteSettings {
            name: "John Doe".to_string(),
            title: "Full Stack Developer".to_string(),
            intro: "Building modern web experiences with clean code and thoughtful design.".to_string(),
            about: "I'm a developer who cares about performance, accessibility, and simplicity. \
                    I enjoy turning complex problems into elegant interfaces and shipping products \
                    that people love to use."
                .to_string(),
            skills: strings(&[
                "Rust", "TypeScript", "React", "PostgreSQL", "Tokio", "Docker", "Git",
            ]),
            current_status: "Currently building: a shell in the browser".to_string(),
            resume_url: "https://example.com/resume.pdf".to_string(),
            email: "john@example.com".to_string(),
            location: "Remote".to_string(),
        };

        let projects = vec![
            Project {
                title: "E-Commerce Platform".to_string(),
                short_desc: "A storefront with real-time inventory and payments.".to_string(),
                long_desc: "Handles everything from product cataloging to order fulfillment, \
                            with real-time inventory tracking and an admin dashboard."
                    .to_string(),
                tech: strings(&["Next.js", "PostgreSQL", "Stripe", "TypeScript"]),
                screenshots: strings(&[
                    "https://example.com/shots/ecom1.png",
                    "https://example.com/shots/ecom2.png",
                ]),
                live_url: "https://example.com".to_string(),
                github_url: "https://github.com/example/ecommerce".to_string(),
            },
            Project {
                title: "Task Management App".to_string(),
                short_desc: "Kanban board with drag-and-drop and real-time sync.".to_string(),
                long_desc: "A collaborative task board with presence indicators, keyboard \
                            shortcuts and Markdown task descriptions."
                    .to_string(),
                tech: strings(&["React", "Zustand", "TypeScript"]),
                screenshots: Vec::new(),
                live_url: "https://example.com/tasks".to_string(),
                github_url: "https://github.com/example/taskboard".to_string(),
            },
        ];

        let learnings = vec![
            Learning {
                title: "Database Indexing Strategies".to_string(),
                summary: "How proper indexing turns a 5-second query into a 5ms query.".to_string(),
                full_details: "Index foreign keys and columns used in WHERE clauses.\n\
                               EXPLAIN ANALYZE is your best friend.\n\
                               Partial indexes shrink indexes when only a subset is queried."
                    .to_string(),
            },
            Learning {
                title: "Ownership Without Tears".to_string(),
                summary: "Thinking in moves and borrows instead of fighting them.".to_string(),
                full_details: "Start with owned data, borrow at the edges, clone only when \
                               profiling says it matters."
                    .to_string(),
            },
        ];

        let experience = vec![WorkExperience {
            company: "Acme Corp".to_string(),
            role: "Senior Engineer".to_string(),
            start_date: "2021-03".to_string(),
            end_date: String::new(),
            description: "Led the platform team building internal developer tooling.".to_string(),
            tech: strings(&["Rust", "Kubernetes", "PostgreSQL"]),
        }];

        let socials = vec![
            SocialLink::new("GitHub", "https://github.com/example"),
            SocialLink::new("LinkedIn", "https://linkedin.com/in/example"),
        ];

        Self { settings, projects, learnings, experience, socials }
    }
}
