//! File System Builder
//!
//! Populates the synthetic tree from the site's content records. The layout
//! is fixed; only the file contents and the per-record entries vary.

use regex_lite::Regex;

use super::types::FsNode;
use crate::content::{Learning, Project, SiteContent, SiteSettings, SocialLink, WorkExperience};

lazy_static::lazy_static! {
    static ref NON_ALNUM_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Names of the builtin commands advertised in `/usr/bin/README`.
const README_COMMANDS: &str = "help, ls, cd, cat, pwd, echo, clear, whoami, date, uname, head, \
tail, wc, grep, tree, find, env, history, hexdump, base64, fortune";

/// Turn a title into a file name: lower-case, runs of anything but `[a-z0-9]`
/// collapse into one `-`, and leading/trailing dashes are trimmed.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Build the file system from its content collaborators.
pub fn build_filesystem(
    settings: &SiteSettings,
    projects: &[Project],
    learnings: &[Learning],
    experience: &[WorkExperience],
    socials: &[SocialLink],
) -> FsNode {
    let mut visitor = FsNode::dir();
    visitor.set("about.txt", FsNode::file(about_text(settings)));
    visitor.set(
        "resume.txt",
        FsNode::file(format!(
            "Resume: {}\n\nTo download, visit the URL above.",
            settings.resume_url
        )),
    );
    visitor.set("skills.txt", FsNode::file(skills_text(&settings.skills)));
    visitor.set("socials.txt", FsNode::file(socials_text(socials)));
    visitor.set("projects", projects_dir(projects));
    visitor.set("learnings", learnings_dir(learnings));
    visitor.set("experience", experience_dir(experience));

    let mut home = FsNode::dir();
    home.set("visitor", visitor);

    let mut root = FsNode::dir();
    root.set("home", home);
    root.set("etc", etc_dir(settings));

    let mut tmp = FsNode::dir();
    tmp.set(
        "welcome.txt",
        FsNode::file("You're in /tmp. Nothing persists here, just like real life."),
    );
    root.set("tmp", tmp);

    let mut bin = FsNode::dir();
    bin.set("README", FsNode::file(format!("Built-in commands: {}", README_COMMANDS)));
    let mut usr = FsNode::dir();
    usr.set("bin", bin);
    root.set("usr", usr);

    root
}

/// Convenience wrapper over [`build_filesystem`] for a whole content bundle.
pub fn build_from_content(content: &SiteContent) -> FsNode {
    build_filesystem(
        &content.settings,
        &content.projects,
        &content.learnings,
        &content.experience,
        &content.socials,
    )
}

fn about_text(settings: &SiteSettings) -> String {
    format!(
        "{}\n{}\n{}\n\n{}\n\nLocation: {}\nEmail: {}\nStatus: {}",
        settings.name,
        settings.title,
        "─".repeat(40),
        settings.about,
        settings.location,
        settings.email,
        settings.current_status
    )
}

fn skills_text(skills: &[String]) -> String {
    skills
        .iter()
        .enumerate()
        .map(|(i, s)| format!("  {}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n")
}

fn socials_text(socials: &[SocialLink]) -> String {
    if socials.is_empty() {
        return "No socials configured.".to_string();
    }
    socials
        .iter()
        .map(|s| format!("{:<14} {}", s.label, s.href))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|t| format!("- {}", t))
        .collect::<Vec<_>>()
        .join("\n")
}

fn projects_dir(projects: &[Project]) -> FsNode {
    let mut dir = FsNode::dir();
    for p in projects {
        let mut project = FsNode::dir();
        project.set(
            "README.md",
            FsNode::file(format!(
                "# {}\n\n{}\n\n## Tech Stack\n{}\n\n## Links\n- Live: {}\n- GitHub: {}",
                p.title,
                p.long_desc,
                bullet_list(&p.tech),
                p.live_url,
                p.github_url
            )),
        );
        project.set("tech.txt", FsNode::file(p.tech.join("\n")));
        if !p.screenshots.is_empty() {
            project.set("screenshots.txt", FsNode::file(p.screenshots.join("\n")));
        }
        // Equal slugs overwrite each other; the last record wins.
        dir.set(slugify(&p.title), project);
    }
    dir
}

fn learnings_dir(learnings: &[Learning]) -> FsNode {
    let mut dir = FsNode::dir();
    for l in learnings {
        dir.set(
            format!("{}.md", slugify(&l.title)),
            FsNode::file(format!(
                "# {}\n\n{}\n\n---\n\n{}",
                l.title, l.summary, l.full_details
            )),
        );
    }
    dir
}

fn experience_dir(experience: &[WorkExperience]) -> FsNode {
    let mut dir = FsNode::dir();
    for e in experience {
        let slug = slugify(&format!("{}-at-{}", e.role, e.company));
        let end = if e.end_date.is_empty() { "Present" } else { e.end_date.as_str() };
        dir.set(
            format!("{}.md", slug),
            FsNode::file(format!(
                "# {} @ {}\n{} — {}\n\n{}\n\n## Tech\n{}",
                e.role,
                e.company,
                e.start_date,
                end,
                e.description,
                bullet_list(&e.tech)
            )),
        );
    }
    dir
}

fn etc_dir(settings: &SiteSettings) -> FsNode {
    let mut etc = FsNode::dir();
    etc.set("hostname", FsNode::file("portfolio"));
    etc.set(
        "os-release",
        FsNode::file(
            "NAME=\"PortfolioOS\"\nVERSION=\"1.0.0\"\nBUILD=\"Rust + in-memory VFS\"\nMOTTO=\"Built different.\"",
        ),
    );
    etc.set(
        "motd",
        FsNode::file(format!(
            "Welcome to {}'s portfolio terminal.\n\
             Type 'help' for commands, or explore the filesystem with ls, cd, cat.\n\n\
             Everything runs in memory. Nothing you change here is saved.",
            settings.name
        )),
    );

    let mut secrets = FsNode::dir();
    secrets.set(
        "flag.txt",
        FsNode::file("CTF{you_found_the_secret_filesystem} Nice work, explorer!"),
    );
    secrets.set(
        ".hidden_message",
        FsNode::file(format!(
            "If you're reading this, you're exactly the kind of person I'd love to work with.\nReach out: {}",
            settings.email
        )),
    );
    etc.set("secrets", secrets);
    etc
}
