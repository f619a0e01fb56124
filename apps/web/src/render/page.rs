//! Page composer — projects the content store into one HTML document.
//!
//! Layout is fixed: hero header, About, Skills, Selected Projects, Certifications, footer.
//! Each collection is walked once in declaration order, one card per record.

use anyhow::{Context, Result};
use askama::Template;

use crate::models::{Certification, Portfolio, Profile, Project, SkillGroup};
use crate::render::icons;
use crate::render::primitives::{card, grid, section, tag_row, Card, Grid, Section, TagRow};
use crate::render::style::STYLESHEET;

#[derive(Template)]
#[template(path = "cards/about.html")]
pub struct AboutBody<'a> {
    pub paragraphs: &'a [String],
}

#[derive(Template)]
#[template(path = "cards/skill.html")]
pub struct SkillBody<'a> {
    pub group: &'a SkillGroup,
    pub tags: TagRow<'a>,
}

#[derive(Template)]
#[template(path = "cards/project.html")]
pub struct ProjectBody<'a> {
    pub project: &'a Project,
    pub link_icon: &'static str,
}

#[derive(Template)]
#[template(path = "cards/cert.html")]
pub struct CertBody<'a> {
    pub cert: &'a Certification,
    pub link_icon: &'static str,
}

pub struct SocialAnchor<'a> {
    pub url: &'a str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Email followed by the social links. Shared verbatim by header and footer.
#[derive(Template)]
#[template(path = "contacts.html")]
pub struct ContactRow<'a> {
    pub email: &'a str,
    pub mail_icon: &'static str,
    pub socials: Vec<SocialAnchor<'a>>,
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub profile: &'a Profile,
    pub stylesheet: &'static str,
    pub contacts: ContactRow<'a>,
    pub about: Section<Card<AboutBody<'a>>>,
    pub skills: Section<Grid<Card<SkillBody<'a>>>>,
    pub projects: Section<Grid<Card<ProjectBody<'a>>>>,
    pub certifications: Section<Grid<Card<CertBody<'a>>>>,
}

impl<'a> PageTemplate<'a> {
    pub fn new(portfolio: &'a Portfolio) -> Self {
        PageTemplate {
            profile: &portfolio.profile,
            stylesheet: STYLESHEET,
            contacts: contact_row(&portfolio.profile),
            about: section(
                "about",
                "About",
                card(
                    "about",
                    AboutBody {
                        paragraphs: &portfolio.about,
                    },
                ),
            ),
            skills: section(
                "skills",
                "Skills",
                grid("skills", portfolio.skills.iter().map(skill_card)),
            ),
            projects: section(
                "projects",
                "Selected Projects",
                grid("projects", portfolio.projects.iter().map(project_card)),
            ),
            certifications: section(
                "certs",
                "Certifications",
                grid(
                    "certs",
                    portfolio.certifications.iter().map(certification_card),
                ),
            ),
        }
    }
}

/// Renders the complete page. Pure: the same content always yields the same bytes.
pub fn render_page(portfolio: &Portfolio) -> Result<String> {
    PageTemplate::new(portfolio)
        .render()
        .context("Failed to render portfolio page")
}

pub fn contact_row(profile: &Profile) -> ContactRow<'_> {
    ContactRow {
        email: &profile.email,
        mail_icon: icons::MAIL,
        socials: profile
            .socials
            .iter()
            .map(|social| SocialAnchor {
                url: &social.url,
                label: social.kind.label(),
                icon: icons::for_social(social.kind),
            })
            .collect(),
    }
}

pub fn skill_card(group: &SkillGroup) -> Card<SkillBody<'_>> {
    card(
        "skill",
        SkillBody {
            group,
            tags: tag_row(&group.items),
        },
    )
}

pub fn project_card(project: &Project) -> Card<ProjectBody<'_>> {
    card(
        "project",
        ProjectBody {
            project,
            link_icon: icons::LINK,
        },
    )
}

pub fn certification_card(cert: &Certification) -> Card<CertBody<'_>> {
    card(
        "cert",
        CertBody {
            cert,
            link_icon: icons::LINK,
        },
    )
}
