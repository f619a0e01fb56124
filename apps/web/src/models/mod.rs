pub mod portfolio;

pub use portfolio::{
    Certification, Portfolio, Profile, Project, ProjectLink, SkillGroup, SocialKind, SocialLink,
};
