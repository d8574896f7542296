//! Project catalog: records, tech categories, and category filtering.
//!
//! The catalog is read-only reference data. Filtering is tag-driven: each
//! category is either a flag check or a membership test against a fixed tag
//! vocabulary, mirroring how the projects page groups work.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// A portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-paragraph description.
    pub description: String,
    /// Role or project-type label shown next to the name.
    pub role: String,
    /// Ordered technology tags.
    pub tech: Vec<String>,
    /// Deployed URL, when the project is live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Source repository URL, when public.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// In-progress entry shown with a badge and no links.
    #[serde(default)]
    pub coming_soon: bool,
}

/// Filter categories shown as chips on the projects page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TechCategory {
    #[default]
    All,
    Frontend,
    Backend,
    FullStack,
    CivicTech,
    AiMl,
    ComingSoon,
}

/// Chip display order on the projects page.
pub const TECH_CATEGORIES: [TechCategory; 7] = [
    TechCategory::All,
    TechCategory::Frontend,
    TechCategory::Backend,
    TechCategory::FullStack,
    TechCategory::CivicTech,
    TechCategory::AiMl,
    TechCategory::ComingSoon,
];

/// Tags that mark a project as frontend work.
const FRONTEND_TAGS: [&str; 5] = ["React", "Next.js", "Tailwind CSS", "Framer Motion", "TypeScript"];

/// Tags that mark a project as backend work.
const BACKEND_TAGS: [&str; 5] = ["Node.js", "Express", "MongoDB", "PostgreSQL", "AWS"];

impl TechCategory {
    /// Chip label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::FullStack => "Full Stack",
            Self::CivicTech => "Civic Tech",
            Self::AiMl => "AI/ML",
            Self::ComingSoon => "Coming Soon",
        }
    }

    /// Whether `project` belongs to this category.
    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        let has_tag = |tag: &str| project.tech.iter().any(|t| t == tag);
        match self {
            Self::All => true,
            Self::ComingSoon => project.coming_soon,
            Self::Frontend => project.tech.iter().any(|t| FRONTEND_TAGS.contains(&t.as_str())),
            Self::Backend => project.tech.iter().any(|t| BACKEND_TAGS.contains(&t.as_str())),
            Self::FullStack => (has_tag("React") || has_tag("Node.js")) && project.tech.len() > 3,
            Self::CivicTech => has_tag("Civic Tech"),
            Self::AiMl => has_tag("AI/ML"),
        }
    }
}

/// Projects belonging to `category`, in catalog order.
#[must_use]
pub fn filter_projects(projects: &[Project], category: TechCategory) -> Vec<Project> {
    projects.iter().filter(|p| category.matches(p)).cloned().collect()
}

/// The first `limit` launched (non-coming-soon) projects, for the home page
/// featured strip.
#[must_use]
pub fn featured_projects(projects: &[Project], limit: usize) -> Vec<Project> {
    projects.iter().filter(|p| !p.coming_soon).take(limit).cloned().collect()
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|tag| (*tag).to_owned()).collect()
}

/// The full project catalog, in display order.
#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "habit-battles".to_owned(),
            name: "Habit Battles".to_owned(),
            description: "A habit-tracking \"battle\" app where users log daily actions and compete on \
                          consistency, built with a full MERN stack backend focus."
                .to_owned(),
            role: "Solo project".to_owned(),
            tech: tags(&["React", "Node.js", "Express", "MongoDB", "Mongoose", "Tailwind CSS", "AWS"]),
            live_url: Some("https://habit-battles.com".to_owned()),
            source_url: Some("https://github.com/andrew/habit-battles".to_owned()),
            coming_soon: false,
        },
        Project {
            id: "scla-dashboard".to_owned(),
            name: "SCLA Dashboard".to_owned(),
            description: "An internal dashboard for a classic car dealership to track inventory, pricing, \
                          and operations, replacing spreadsheets with a modern web UI."
                .to_owned(),
            role: "Frontend Developer".to_owned(),
            tech: tags(&["React", "TypeScript", "Chart.js", "Tailwind CSS", "REST APIs"]),
            live_url: Some("https://scla-dashboard.com".to_owned()),
            source_url: None,
            coming_soon: false,
        },
        Project {
            id: "commonwheel".to_owned(),
            name: "CommonWheel".to_owned(),
            description: "Led product and front-end efforts for a platform aimed at increasing collaboration \
                          and accountability across teams, setting deadlines and workflows."
                .to_owned(),
            role: "Product Manager / Developer".to_owned(),
            tech: tags(&["React", "TypeScript", "Figma", "Node.js", "PostgreSQL"]),
            live_url: Some("https://commonwheel.com".to_owned()),
            source_url: None,
            coming_soon: false,
        },
        Project {
            id: "nato-project".to_owned(),
            name: "NATO Project".to_owned(),
            description: "Academic/political-tech project related to NATO, exploring policy, governance, and \
                          structured information presentation through software."
                .to_owned(),
            role: "Research & Development".to_owned(),
            tech: tags(&["React", "D3.js", "Python", "Data Visualization", "Government APIs"]),
            live_url: None,
            source_url: None,
            coming_soon: false,
        },
        Project {
            id: "repme".to_owned(),
            name: "RepMe – Accountability & Civic Engagement App".to_owned(),
            description: "A mobile-first app that helps people understand bills, track how representatives \
                          vote, and stay informed about elections — designed to give regular people a voice \
                          without needing lobbying money."
                .to_owned(),
            role: "Lead Developer".to_owned(),
            tech: tags(&["React Native", "React", "Node.js", "Government APIs", "MongoDB", "Civic Tech"]),
            live_url: Some("https://repme.app".to_owned()),
            source_url: Some("https://github.com/andrew/repme".to_owned()),
            coming_soon: false,
        },
        Project {
            id: "coming-soon-1".to_owned(),
            name: "AI Health Assistant".to_owned(),
            description: "New AI-driven health tracking and recommendation system in progress — focused on \
                          making personalized wellness accessible to everyone."
                .to_owned(),
            role: "Coming Soon".to_owned(),
            tech: tags(&["AI/ML", "React", "Python", "Health APIs"]),
            live_url: None,
            source_url: None,
            coming_soon: true,
        },
        Project {
            id: "coming-soon-2".to_owned(),
            name: "Education Automation Platform".to_owned(),
            description: "Automation tools for educators and students in progress — designed to remove \
                          barriers to quality education and learning resources."
                .to_owned(),
            role: "Coming Soon".to_owned(),
            tech: tags(&["Automation", "React", "Node.js", "Education Tech"]),
            live_url: None,
            source_url: None,
            coming_soon: true,
        },
        Project {
            id: "coming-soon-3".to_owned(),
            name: "Financial Freedom Tools".to_owned(),
            description: "Personal finance and investment tracking tools in development — helping regular \
                          people build wealth and financial literacy."
                .to_owned(),
            role: "Coming Soon".to_owned(),
            tech: tags(&["FinTech", "React", "Financial APIs", "Data Analytics"]),
            live_url: None,
            source_url: None,
            coming_soon: true,
        },
    ]
}
