//! Exhibit selection

use crate::consts::cli_consts::{DEFAULT_CATEGORY, PLACEHOLDER_LINK};

struct KnownExhibit {
    title: &'static str,
    category: &'static str,
    technologies: &'static [&'static str],
}

static KNOWN_EXHIBITS: [KnownExhibit; 5] = [
    KnownExhibit {
        title: "ERP System",
        category: "Full-Stack Development",
        technologies: &["PHP", "MySQL", "JavaScript"],
    },
    KnownExhibit {
        title: "E-Commerce Store",
        category: "Web Application",
        technologies: &["JavaScript", "Node.js", "MongoDB"],
    },
    KnownExhibit {
        title: "My First Website",
        category: "Frontend Development",
        technologies: &["HTML", "CSS"],
    },
    KnownExhibit {
        title: "AI Chatbot",
        category: "Artificial Intelligence",
        technologies: &["Python", "REST APIs"],
    },
    KnownExhibit {
        title: "Mini ERP System",
        category: "Business Management",
        technologies: &["PHP", "MySQL"],
    },
];

fn known_exhibit(title: &str) -> Option<&'static KnownExhibit> {
    KNOWN_EXHIBITS.iter().find(|known| known.title == title)
}

/// Category label for an exhibit title, `"Project"` when the title is unknown.
pub fn category_for_title(title: &str) -> &'static str {
    known_exhibit(title).map_or(DEFAULT_CATEGORY, |known| known.category)
}

/// Technologies listed on an exhibit card. Unknown titles have none.
pub fn technologies_for_title(title: &str) -> &'static [&'static str] {
    match known_exhibit(title) {
        Some(known) => known.technologies,
        None => &[],
    }
}

/// The exhibit most recently opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectExhibitSelection {
    pub title: String,
    pub description: String,
    pub link: String,
    pub category: String,
    pub technologies: Vec<String>,
}

impl ProjectExhibitSelection {
    /// Builds a selection, deriving category and technologies from the title.
    /// A missing link becomes the placeholder.
    pub fn new(title: &str, description: &str, link: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            link: link.unwrap_or(PLACEHOLDER_LINK).to_string(),
            category: category_for_title(title).to_string(),
            technologies: technologies_for_title(title)
                .iter()
                .map(|tech| tech.to_string())
                .collect(),
        }
    }

    /// Whether the selection points at a real link.
    pub fn has_link(&self) -> bool {
        !self.link.is_empty() && self.link != PLACEHOLDER_LINK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_titles_map_to_their_category() {
        assert_eq!(category_for_title("ERP System"), "Full-Stack Development");
        assert_eq!(category_for_title("AI Chatbot"), "Artificial Intelligence");
        assert_eq!(category_for_title("Mini ERP System"), "Business Management");
    }

    #[test]
    fn unknown_and_near_miss_titles_fall_back() {
        assert_eq!(category_for_title("Weather App"), "Project");
        assert_eq!(category_for_title("erp system"), "Project");
        assert_eq!(category_for_title(""), "Project");
    }

    #[test]
    fn selection_lists_technologies_for_known_titles() {
        let erp = ProjectExhibitSelection::new("ERP System", "Modules", None);
        assert_eq!(erp.technologies, vec!["PHP", "MySQL", "JavaScript"]);

        let unknown = ProjectExhibitSelection::new("Weather App", "Forecasts", None);
        assert!(unknown.technologies.is_empty());
        assert_eq!(unknown.category, "Project");
    }

    #[test]
    fn placeholder_and_empty_links_are_not_real() {
        assert!(!ProjectExhibitSelection::new("ERP System", "", None).has_link());
        assert!(!ProjectExhibitSelection::new("ERP System", "", Some("#")).has_link());
        assert!(!ProjectExhibitSelection::new("ERP System", "", Some("")).has_link());
        assert!(
            ProjectExhibitSelection::new("ERP System", "", Some("https://example.com"))
                .has_link()
        );
    }
}
