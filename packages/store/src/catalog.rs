//! # Project catalog: load state, filtering and sorting
//!
//! [`CatalogState`] is what a catalog view holds while the project list loads:
//! the records, a loading flag and an optional error. A failed load keeps an empty
//! list so pagination simply shows nothing until a retry succeeds.
//!
//! [`ProjectQuery`] turns the full list into the list the user asked for. It runs
//! before pagination:
//!
//! 1. text search (case-insensitive, over title, description, category and tech),
//! 2. category filter (`"All"` keeps everything),
//! 3. a stable sort by [`SortOrder`].
//!
//! Views must reset pagination to page 1 whenever the query changes; [`refine`]
//! does both steps.

use std::cmp::Ordering;

use crate::models::{ProjectRecord, ProjectStatus};
use crate::pagination::{PageChange, PaginationState};

/// Category value that disables the category filter.
pub const ALL_CATEGORIES: &str = "All";

/// Load state of the project list.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub projects: Vec<ProjectRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::loading()
    }
}

impl CatalogState {
    pub fn loading() -> Self {
        Self {
            projects: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn loaded(projects: Vec<ProjectRecord>) -> Self {
        Self {
            projects,
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            projects: Vec::new(),
            loading: false,
            error: Some(error.into()),
        }
    }
}

/// Sort order offered by the catalog toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Latest completion year first
    #[default]
    Latest,
    Oldest,
    NameAsc,
    NameDesc,
    /// Most progress first
    Progress,
    /// Largest investment first
    Investment,
}

impl SortOrder {
    pub const ALL: [SortOrder; 6] = [
        SortOrder::Latest,
        SortOrder::Oldest,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
        SortOrder::Progress,
        SortOrder::Investment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Latest => "Latest",
            SortOrder::Oldest => "Oldest",
            SortOrder::NameAsc => "Name A-Z",
            SortOrder::NameDesc => "Name Z-A",
            SortOrder::Progress => "Progress",
            SortOrder::Investment => "Investment",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.label() == label)
    }

    fn compare(self, a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
        match self {
            SortOrder::Latest => b.completion_year().cmp(&a.completion_year()),
            SortOrder::Oldest => match (a.completion_year(), b.completion_year()) {
                (Some(x), Some(y)) => x.cmp(&y),
                // Undated projects go last in both directions.
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortOrder::NameAsc => compare_titles(a, b),
            SortOrder::NameDesc => compare_titles(b, a),
            SortOrder::Progress => b.progress.cmp(&a.progress),
            SortOrder::Investment => {
                let x = a.investment_amount().unwrap_or(f64::NEG_INFINITY);
                let y = b.investment_amount().unwrap_or(f64::NEG_INFINITY);
                y.total_cmp(&x)
            }
        }
    }
}

fn compare_titles(a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

/// Search, category filter and sort order for the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectQuery {
    pub search: String,
    pub category: String,
    pub sort: SortOrder,
}

impl Default for ProjectQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort: SortOrder::default(),
        }
    }
}

impl ProjectQuery {
    /// Whether the query leaves the list untouched (no "active filters" strip).
    pub fn is_default(&self) -> bool {
        self.search.trim().is_empty()
            && self.category == ALL_CATEGORIES
            && self.sort == SortOrder::default()
    }

    pub fn matches(&self, project: &ProjectRecord) -> bool {
        self.matches_category(project) && self.matches_search(project)
    }

    fn matches_category(&self, project: &ProjectRecord) -> bool {
        self.category == ALL_CATEGORIES || project.category.eq_ignore_ascii_case(&self.category)
    }

    fn matches_search(&self, project: &ProjectRecord) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle)
            || project.category.to_lowercase().contains(&needle)
            || project
                .tech
                .iter()
                .any(|tech| tech.to_lowercase().contains(&needle))
    }

    /// Filter and sort `projects`. The input is never modified.
    pub fn apply(&self, projects: &[ProjectRecord]) -> Vec<ProjectRecord> {
        let mut result: Vec<ProjectRecord> = projects
            .iter()
            .filter(|project| self.matches(project))
            .cloned()
            .collect();
        result.sort_by(|a, b| self.sort.compare(a, b));
        result
    }
}

/// Edit `query` and bring `pagination` in line with the new result: the total is
/// recounted and the view returns to page 1 with no highlighted card.
pub fn refine(
    query: &mut ProjectQuery,
    pagination: &mut PaginationState,
    projects: &[ProjectRecord],
    edit: impl FnOnce(&mut ProjectQuery),
) -> PageChange {
    edit(query);
    pagination.set_total_items(projects.iter().filter(|p| query.matches(p)).count());
    pagination.reset_page()
}

/// Category options for a list: `"All"` followed by each distinct category in
/// order of first appearance.
pub fn categories(projects: &[ProjectRecord]) -> Vec<String> {
    let mut result = vec![ALL_CATEGORIES.to_string()];
    for project in projects {
        if !result.iter().any(|c| c.eq_ignore_ascii_case(&project.category)) {
            result.push(project.category.clone());
        }
    }
    result
}

/// Built-in projects served when no project endpoint is configured.
pub fn showcase_projects() -> Vec<ProjectRecord> {
    fn project(
        title: &str,
        category: &str,
        image: &str,
        description: &str,
        tech: [&str; 3],
        status: ProjectStatus,
        completion: &str,
        progress: u8,
        investment: &str,
        rating: f32,
    ) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            category: category.to_string(),
            image: format!("https://images.unsplash.com/{image}?w=600&h=400&fit=crop"),
            description: description.to_string(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            status,
            completion: completion.to_string(),
            progress,
            investment: investment.to_string(),
            rating,
        }
    }

    vec![
        project(
            "Colombo Tech Hub 2030",
            "Smart Commercial",
            "photo-1545324418-cc1a3fa10c00",
            "AI-powered 60-story smart building with integrated renewable energy systems and automated facilities management.",
            ["AI Integration", "Solar Panels", "Smart HVAC"],
            ProjectStatus::InProgress,
            "2026",
            65,
            "$250M",
            4.9,
        ),
        project(
            "Kandy Green Residences",
            "Eco-Living",
            "photo-1486406146926-c627a92ad1ab",
            "Carbon-neutral residential complex with vertical gardens, smart home systems, and community energy grid.",
            ["Vertical Gardens", "Energy Grid", "Smart Homes"],
            ProjectStatus::Completed,
            "2024",
            100,
            "$180M",
            4.8,
        ),
        project(
            "Galle Smart Bridge",
            "Infrastructure",
            "photo-1558618666-fcd25c85cd64",
            "IoT-enabled bridge with real-time monitoring, adaptive lighting, and integrated transportation systems.",
            ["IoT Sensors", "LED Systems", "Traffic AI"],
            ProjectStatus::Planning,
            "2027",
            25,
            "$95M",
            4.7,
        ),
        project(
            "Quantum Tower",
            "Futuristic",
            "photo-1486406146926-c627a92ad1ab",
            "AI-powered smart building with quantum computing infrastructure and adaptive architecture.",
            ["Quantum Computing", "AI Integration", "Adaptive Materials"],
            ProjectStatus::Planning,
            "2029",
            10,
            "$1.2B",
            4.6,
        ),
        project(
            "Neo-Habitat Complex",
            "Residential",
            "photo-1545324418-cc1a3fa10c00",
            "Self-sustaining residential ecosystem with atmospheric energy harvesting.",
            ["Energy Harvesting", "Bio-Integration", "Smart Automation"],
            ProjectStatus::InProgress,
            "2026",
            48,
            "$320M",
            4.7,
        ),
        project(
            "Fusion Manufacturing Hub",
            "Industrial",
            "photo-1581094794329-c8112a89af12",
            "Zero-emission manufacturing facility powered by fusion energy systems.",
            ["Fusion Power", "Zero Emissions", "Automated Production"],
            ProjectStatus::InProgress,
            "2028",
            30,
            "$540M",
            4.5,
        ),
        project(
            "Temporal Archive",
            "Heritage Tech",
            "photo-1448630360428-65456885c650",
            "Historic preservation enhanced with holographic restoration technology.",
            ["Holographic Tech", "Nano Restoration", "Time Preservation"],
            ProjectStatus::Completed,
            "2023",
            100,
            "$60M",
            4.9,
        ),
    ]
}
