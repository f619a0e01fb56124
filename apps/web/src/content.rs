//! Content store — the literal records rendered on the page.
//!
//! Edit the tables below to change what the page shows. Declaration order is display order.

use crate::models::{
    Certification, Portfolio, Profile, Project, ProjectLink, SkillGroup, SocialKind, SocialLink,
};

const NAME: &str = "Sinjini Sarkar";
const TITLE: &str = "Computer Science with AI — UI/UX + Cloud";
const BLURB: &str = "Designing clear user flows for internal tools and dashboards. \
    Bonus: cloud + Python so I speak developer too.";
const LOCATION: &str = "UK — London/Leeds (remote-friendly)";
const EMAIL: &str = "sinjini.brampton@gmail.com";

const SOCIALS: &[(SocialKind, &str)] = &[
    (SocialKind::GitHub, "https://github.com/sinjinisarkar"),
    (
        SocialKind::LinkedIn,
        "https://www.linkedin.com/in/sinjini-sarkar",
    ),
];

const ABOUT: &[&str] = &[
    "BSc Computer Science with Artificial Intelligence, University of Leeds — First‑Class trajectory. \
     I enjoy designing usable internal tools and collaborating closely with engineers.",
    "Recent highlights: led UI/UX flows for a ride‑sharing app (multi‑sprint wireframes, QA‑driven iteration), \
     refined a cloud storefront checkout, and presented ML results with clear, decision‑ready visuals.",
];

const SKILLS: &[(&str, &[&str])] = &[
    (
        "Design",
        &[
            "User flows",
            "Wireframing",
            "Low/High‑fi prototyping",
            "Usability testing",
            "Accessibility basics",
        ],
    ),
    (
        "Tools",
        &["Figma", "Canva", "iPad design apps", "GitHub Wiki/Markdown"],
    ),
    ("Web", &["HTML", "CSS", "Basic JavaScript", "Flask/Jinja2"]),
    (
        "Systems & Cloud",
        &[
            "Python",
            "SQL",
            "AWS (CCP, AI Practitioner)",
            "CI/CD (GitHub Actions)",
            "Linux (bash)",
        ],
    ),
    (
        "AI/ML",
        &[
            "Naive Bayes",
            "SVM",
            "Random Forest",
            "TF‑IDF",
            "Model eval (P/R/F1, ROC‑AUC)",
        ],
    ),
    (
        "Soft Skills",
        &[
            "Agile teamwork",
            "GitHub project boards",
            "Public speaking (Toastmasters)",
            "Tutoring/teaching",
        ],
    ),
];

struct ProjectRecord {
    title: &'static str,
    period: &'static str,
    summary: &'static str,
    bullets: &'static [&'static str],
    links: &'static [(&'static str, &'static str)],
}

const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "CatchMyRide — UI/UX flows (Group Project)",
        period: "Feb–Apr 2025",
        summary: "Designed end‑to‑end flows for login, booking, payment, and dashboards; \
            iterated across 4 sprints based on feedback & QA.",
        bullets: &[
            "Wireframes & user flows documented in GitHub Wiki",
            "QA uncovered multiple issues (e.g., penalty logic, layout misalignment); raised issues and verified fixes",
            "Implemented flows in Flask templates; cross‑device responsive checks",
        ],
        links: &[
            (
                "GitHub Wiki (UI Designs)",
                "https://github.com/COMP2913-24-25/software-engineering-project-team-19/wiki/UI-Designs",
            ),
            (
                "Repo",
                "https://github.com/COMP2913-24-25/software-engineering-project-team-19",
            ),
        ],
    },
    ProjectRecord {
        title: "Cloud E‑commerce — Storefront & Checkout UX",
        period: "Nov–Dec 2024",
        summary: "Developed responsive storefront and refined checkout; validated mobile/desktop \
            behaviour; documented deploy/rollback.",
        bullets: &[
            "Reduced friction via clearer error states & form labels",
            "Repeatable deployment steps (Flask on AWS/PythonAnywhere)",
            "Responsive testing across common breakpoints",
        ],
        links: &[],
    },
    ProjectRecord {
        title: "Phishing Detector — Data UX for results",
        period: "Mar–Apr 2025",
        summary: "Built TF‑IDF pipeline with classical models; presented metrics clearly for \
            non‑ML readers; 90.2% accuracy.",
        bullets: &[
            "Tables/plots for precision, recall, F1, ROC‑AUC",
            "Recommendations on model trade‑offs (accuracy vs interpretability)",
        ],
        links: &[],
    },
    ProjectRecord {
        title: "Unix Shell in C — DX & reliability",
        period: "Oct–Nov 2024",
        summary: "Created a Unix‑style shell; added defensive error handling & a concise test \
            checklist to improve developer experience.",
        bullets: &["Parsing, piping, redirection; known‑issues doc & test steps"],
        links: &[],
    },
];

struct CertificationRecord {
    name: &'static str,
    when: &'static str,
    note: &'static str,
    badge: Option<&'static str>,
    verify_url: Option<&'static str>,
}

const CERTIFICATIONS: &[CertificationRecord] = &[
    CertificationRecord {
        name: "AWS Certified AI Practitioner",
        when: "Aug 2025",
        note: "Bedrock, SageMaker, Rekognition; responsible AI",
        badge: None,
        verify_url: None,
    },
    CertificationRecord {
        name: "AWS Certified Cloud Practitioner (CLF‑C02)",
        when: "Apr 2025",
        note: "EC2, S3, IAM, CloudWatch; security & resilient design",
        badge: None,
        verify_url: None,
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the page content from the tables above.
pub fn portfolio() -> Portfolio {
    let profile = Profile {
        name: NAME.to_string(),
        title: TITLE.to_string(),
        blurb: BLURB.to_string(),
        location: LOCATION.to_string(),
        email: EMAIL.to_string(),
        socials: SOCIALS
            .iter()
            .map(|(kind, url)| SocialLink {
                kind: *kind,
                url: url.to_string(),
            })
            .collect(),
    };

    let skills = SKILLS
        .iter()
        .map(|(group, items)| SkillGroup {
            group: group.to_string(),
            items: strings(items),
        })
        .collect();

    let projects = PROJECTS
        .iter()
        .map(|p| Project {
            title: p.title.to_string(),
            period: p.period.to_string(),
            summary: p.summary.to_string(),
            bullets: strings(p.bullets),
            links: p
                .links
                .iter()
                .map(|(label, href)| ProjectLink {
                    label: label.to_string(),
                    href: href.to_string(),
                })
                .collect(),
        })
        .collect();

    let certifications = CERTIFICATIONS
        .iter()
        .map(|c| Certification {
            name: c.name.to_string(),
            when: c.when.to_string(),
            note: c.note.to_string(),
            badge: c.badge.map(str::to_string),
            verify_url: c.verify_url.map(str::to_string),
        })
        .collect();

    Portfolio {
        profile,
        about: strings(ABOUT),
        skills,
        projects,
        certifications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_match_tables() {
        let p = portfolio();
        assert_eq!(p.skills.len(), SKILLS.len());
        assert_eq!(p.projects.len(), PROJECTS.len());
        assert_eq!(p.certifications.len(), CERTIFICATIONS.len());
        assert_eq!(p.about.len(), ABOUT.len());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let p = portfolio();
        let groups: Vec<&str> = p.skills.iter().map(|s| s.group.as_str()).collect();
        assert_eq!(
            groups,
            vec!["Design", "Tools", "Web", "Systems & Cloud", "AI/ML", "Soft Skills"]
        );
        assert_eq!(p.skills[2].items, vec!["HTML", "CSS", "Basic JavaScript", "Flask/Jinja2"]);
        assert!(p.projects[0].title.starts_with("CatchMyRide"));
    }

    #[test]
    fn test_only_first_project_has_links() {
        let p = portfolio();
        assert_eq!(p.projects[0].links.len(), 2);
        assert!(p.projects[1..].iter().all(|proj| proj.links.is_empty()));
    }

    #[test]
    fn test_all_urls_are_absolute() {
        let p = portfolio();
        let urls = p
            .profile
            .socials
            .iter()
            .map(|s| s.url.as_str())
            .chain(
                p.projects
                    .iter()
                    .flat_map(|proj| proj.links.iter().map(|l| l.href.as_str())),
            )
            .chain(p.certifications.iter().filter_map(|c| c.verify_url.as_deref()));
        for url in urls {
            assert!(url.starts_with("https://"), "non-https url: {url}");
        }
    }

    #[test]
    fn test_building_twice_yields_equal_content() {
        assert_eq!(portfolio(), portfolio());
    }
}
