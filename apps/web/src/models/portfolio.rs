use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SocialKind {
    GitHub,
    LinkedIn,
}

impl SocialKind {
    /// Text shown on the contact link.
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub location: String,
    pub email: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillGroup {
    pub group: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub period: String,
    pub summary: String,
    pub bullets: Vec<String>,
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Certification {
    pub name: String,
    pub when: String,
    pub note: String,
    /// Relative path to a badge image, resolved by the browser against the page URL.
    pub badge: Option<String>,
    pub verify_url: Option<String>,
}

/// Everything the page shows. Built once from literal data and never mutated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    /// Paragraphs of the About card.
    pub about: Vec<String>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_kind_labels() {
        assert_eq!(SocialKind::GitHub.label(), "GitHub");
        assert_eq!(SocialKind::LinkedIn.label(), "LinkedIn");
    }

    #[test]
    fn test_certification_serializes_missing_options_as_null() {
        let cert = Certification {
            name: "Cert".to_string(),
            when: "Jan 2025".to_string(),
            note: "note".to_string(),
            badge: None,
            verify_url: None,
        };
        let value = serde_json::to_value(&cert).unwrap();
        assert!(value["badge"].is_null());
        assert!(value["verify_url"].is_null());
    }

    #[test]
    fn test_social_kind_serializes_snake_case() {
        let value = serde_json::to_value(SocialKind::LinkedIn).unwrap();
        assert_eq!(value, serde_json::json!("linked_in"));
    }
}
