use std::{collections::HashSet, sync::LazyLock};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::section::SectionId;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

/// Marker the hand-authored content historically used for "no public link".
const NO_LINK_MARKER: &str = "#";

pub static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file {0} not found")]
    Missing(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
    #[error("Skill group #{0} has an empty category")]
    EmptyCategory(usize),
    #[error("Invalid project link {0:?}")]
    InvalidLink(String),
    #[error("No section named {0:?}")]
    UnknownSection(String),
    #[error("Navigation lists section {0} more than once")]
    DuplicateNav(SectionId),
    #[error("Navigation is missing section {0}")]
    MissingNav(SectionId),
    #[error("Invalid behavior setting: {0}")]
    InvalidBehavior(String),
}

/// Symbolic icon reference, rendered as an icon font class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    User,
    Code,
    Briefcase,
    Mail,
    Terminal,
    Cpu,
    Database,
    Layout,
    Github,
    Linkedin,
    Send,
    Menu,
    Close,
    ExternalLink,
    Award,
    BookOpen,
    Target,
    Map,
    Server,
    ChevronUp,
}

impl Icon {
    pub fn class_name(&self) -> &'static str {
        match self {
            Icon::User => "icon-user",
            Icon::Code => "icon-code",
            Icon::Briefcase => "icon-briefcase",
            Icon::Mail => "icon-mail",
            Icon::Terminal => "icon-terminal",
            Icon::Cpu => "icon-cpu",
            Icon::Database => "icon-database",
            Icon::Layout => "icon-layout-dashboard",
            Icon::Github => "icon-github",
            Icon::Linkedin => "icon-linkedin",
            Icon::Send => "icon-send",
            Icon::Menu => "icon-menu",
            Icon::Close => "icon-x",
            Icon::ExternalLink => "icon-external-link",
            Icon::Award => "icon-award",
            Icon::BookOpen => "icon-book-open",
            Icon::Target => "icon-target",
            Icon::Map => "icon-map",
            Icon::Server => "icon-server",
            Icon::ChevronUp => "icon-chevron-up",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initial: String,
    pub subtitle: String,
    pub photo: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub relay_endpoint: String,
    #[serde(default)]
    pub footer_note: String,
}

/// Tunables for the interactive effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Behavior {
    #[serde(default = "Behavior::default_typewriter_speed_ms")]
    pub typewriter_speed_ms: u64,
    #[serde(default = "Behavior::default_reveal_threshold")]
    pub reveal_threshold: f64,
    #[serde(default = "Behavior::default_spy_window_px")]
    pub spy_window_px: f64,
    #[serde(default = "Behavior::default_back_to_top_px")]
    pub back_to_top_px: f64,
    #[serde(default = "Behavior::default_settle_ms")]
    pub settle_ms: f64,
}

impl Behavior {
    fn default_typewriter_speed_ms() -> u64 {
        50
    }

    fn default_reveal_threshold() -> f64 {
        0.1
    }

    fn default_spy_window_px() -> f64 {
        300.0
    }

    fn default_back_to_top_px() -> f64 {
        300.0
    }

    fn default_settle_ms() -> f64 {
        150.0
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.typewriter_speed_ms == 0 {
            return Err(ContentError::InvalidBehavior(
                "typewriter_speed_ms must be positive".to_string(),
            ));
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(ContentError::InvalidBehavior(format!(
                "reveal_threshold {} is outside (0, 1]",
                self.reveal_threshold
            )));
        }
        let distances = [
            ("spy_window_px", self.spy_window_px),
            ("back_to_top_px", self.back_to_top_px),
            ("settle_ms", self.settle_ms),
        ];
        for (name, value) in distances {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ContentError::InvalidBehavior(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            typewriter_speed_ms: Self::default_typewriter_speed_ms(),
            reveal_threshold: Self::default_reveal_threshold(),
            spy_window_px: Self::default_spy_window_px(),
            back_to_top_px: Self::default_back_to_top_px(),
            settle_ms: Self::default_settle_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: SectionId,
    pub label: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutCard {
    pub title: String,
    pub icon: Icon,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub icon: Icon,
    pub items: Vec<String>,
}

/// Where a project's code can be seen, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<String>", into = "Option<String>")]
pub enum ProjectLink {
    Url(String),
    #[default]
    Private,
}

impl ProjectLink {
    pub fn url(&self) -> Option<&str> {
        match self {
            ProjectLink::Url(u) => Some(u),
            ProjectLink::Private => None,
        }
    }
}

impl TryFrom<Option<String>> for ProjectLink {
    type Error = ContentError;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        let link = match value {
            None => return Ok(ProjectLink::Private),
            Some(l) => l,
        };
        let trimmed = link.trim();
        if trimmed.is_empty() || trimmed == NO_LINK_MARKER {
            return Ok(ProjectLink::Private);
        }
        if is_absolute_url(trimmed) || is_relative_path(trimmed) {
            Ok(ProjectLink::Url(trimmed.to_string()))
        } else {
            Err(ContentError::InvalidLink(link))
        }
    }
}

impl From<ProjectLink> for Option<String> {
    fn from(value: ProjectLink) -> Self {
        match value {
            ProjectLink::Url(u) => Some(u),
            ProjectLink::Private => None,
        }
    }
}

fn is_absolute_url(link: &str) -> bool {
    if !(link.starts_with("https://") || link.starts_with("http://")) {
        return false;
    }
    link.parse::<http::Uri>()
        .map(|uri| uri.host().is_some_and(|h| !h.is_empty()))
        .unwrap_or(false)
}

// site-relative pages such as `24h_Info-main/index.html`
fn is_relative_path(link: &str) -> bool {
    !link.contains("://")
        && !link.contains(':')
        && !link.starts_with('#')
        && !link.chars().any(char::is_whitespace)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: ProjectLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub role: String,
    /// Display text only.
    pub period: String,
    pub description: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub behavior: Behavior,
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub about: Vec<AboutCard>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
}

impl Portfolio {
    /// Load and validate an embedded content file.
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let file = ContentAssets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
        let json = std::str::from_utf8(&file.data)
            .map_err(|e| ContentError::ParseError(e.to_string()))?;
        Self::from_json(json)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let portfolio = serde_json::from_str::<Portfolio>(json)
            .map_err(|e| ContentError::ParseError(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        self.behavior.validate()?;

        if let Some(i) = self
            .skills
            .iter()
            .position(|s| s.category.trim().is_empty())
        {
            return Err(ContentError::EmptyCategory(i));
        }

        let mut seen = HashSet::new();
        for item in &self.nav {
            if !seen.insert(item.id) {
                return Err(ContentError::DuplicateNav(item.id));
            }
        }
        if let Some(missing) = SectionId::ALL.into_iter().find(|id| !seen.contains(id)) {
            return Err(ContentError::MissingNav(missing));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(nav: &str, link: &str) -> String {
        format!(
            r#"{{
                "profile": {{
                    "name": "Test", "initial": "T", "subtitle": "abc",
                    "photo": "/p.jpg", "email": "t@example.com",
                    "linkedin": "https://linkedin.com/in/t",
                    "github": "https://github.com/t",
                    "relay_endpoint": "https://relay.example.com/f/1"
                }},
                "nav": {nav},
                "skills": [{{ "category": "Rust", "icon": "cpu", "items": ["leptos"] }}],
                "projects": [{{
                    "title": "P", "type": "Side", "description": "d",
                    "tags": [], "link": {link}
                }}],
                "experience": []
            }}"#
        )
    }

    fn full_nav() -> String {
        let items = SectionId::ALL
            .iter()
            .map(|id| format!(r#"{{ "id": "{id}", "label": "{id}", "icon": "user" }}"#))
            .collect::<Vec<_>>();
        format!("[{}]", items.join(","))
    }

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = Portfolio::load(PORTFOLIO_FILE).expect("embedded content should load");
        assert_eq!(portfolio.nav.len(), SectionId::ALL.len());
        assert_eq!(portfolio.skills.len(), 4);
        assert_eq!(portfolio.behavior, Behavior::default());
        assert!(!portfolio.profile.subtitle.is_empty());

        let private = portfolio
            .projects
            .iter()
            .filter(|p| p.link == ProjectLink::Private)
            .count();
        assert_eq!(private, 1);
        assert!(portfolio
            .projects
            .iter()
            .any(|p| p.link.url() == Some("24h_Info-main/index.html")));
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            Portfolio::load("nope.json").unwrap_err(),
            ContentError::Missing("nope.json".to_string())
        );
    }

    #[test]
    fn test_project_link_variants() {
        assert_eq!(ProjectLink::try_from(None), Ok(ProjectLink::Private));
        assert_eq!(
            ProjectLink::try_from(Some("#".to_string())),
            Ok(ProjectLink::Private)
        );
        assert_eq!(
            ProjectLink::try_from(Some("https://github.com/a/b.git".to_string())),
            Ok(ProjectLink::Url("https://github.com/a/b.git".to_string()))
        );
        assert_eq!(
            ProjectLink::try_from(Some("docs/index.html".to_string())),
            Ok(ProjectLink::Url("docs/index.html".to_string()))
        );
        assert!(ProjectLink::try_from(Some("not a link".to_string())).is_err());
        assert!(ProjectLink::try_from(Some("javascript:alert(1)".to_string())).is_err());
        assert!(ProjectLink::try_from(Some("https://".to_string())).is_err());
    }

    #[test]
    fn test_missing_link_field_is_private() {
        let json = minimal_json(&full_nav(), "null").replace(r#", "link": null"#, "");
        let portfolio = Portfolio::from_json(&json).unwrap();
        assert_eq!(portfolio.projects[0].link, ProjectLink::Private);
    }

    #[test]
    fn test_bad_link_is_rejected() {
        let json = minimal_json(&full_nav(), r#""no spaces allowed""#);
        assert!(matches!(
            Portfolio::from_json(&json),
            Err(ContentError::ParseError(_))
        ));
    }

    #[test]
    fn test_unknown_nav_section_is_rejected() {
        let nav = r#"[{ "id": "blog", "label": "Blog", "icon": "code" }]"#;
        let err = Portfolio::from_json(&minimal_json(nav, "null")).unwrap_err();
        match err {
            ContentError::ParseError(msg) => assert!(msg.contains("blog")),
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[test]
    fn test_nav_must_cover_each_section_once() {
        let nav = r#"[
            { "id": "home", "label": "A", "icon": "user" },
            { "id": "home", "label": "B", "icon": "user" }
        ]"#;
        assert_eq!(
            Portfolio::from_json(&minimal_json(nav, "null")).unwrap_err(),
            ContentError::DuplicateNav(SectionId::Home)
        );

        let nav = r#"[{ "id": "home", "label": "A", "icon": "user" }]"#;
        assert_eq!(
            Portfolio::from_json(&minimal_json(nav, "null")).unwrap_err(),
            ContentError::MissingNav(SectionId::About)
        );
    }

    #[test]
    fn test_empty_category_is_rejected() {
        let json = minimal_json(&full_nav(), "null").replace(r#""category": "Rust""#, r#""category": "  ""#);
        assert_eq!(
            Portfolio::from_json(&json).unwrap_err(),
            ContentError::EmptyCategory(0)
        );
    }

    #[test]
    fn test_behavior_defaults_and_validation() {
        let portfolio = Portfolio::from_json(&minimal_json(&full_nav(), "null")).unwrap();
        assert_eq!(portfolio.behavior.typewriter_speed_ms, 50);
        assert_eq!(portfolio.behavior.reveal_threshold, 0.1);

        let bad = Behavior {
            reveal_threshold: 0.0,
            ..Behavior::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(ContentError::InvalidBehavior(_))
        ));
        let bad = Behavior {
            typewriter_speed_ms: 0,
            ..Behavior::default()
        };
        assert!(bad.validate().is_err());
        let bad = Behavior {
            spy_window_px: -1.0,
            ..Behavior::default()
        };
        assert!(bad.validate().is_err());
    }
}
