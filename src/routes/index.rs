use axum::response::IntoResponse;
use time::OffsetDateTime;

use crate::contact::FormFields;
use crate::content::{
    CERTIFICATIONS, Certification, EDUCATION, EducationEntry, NAV_LINKS, NavLink, PROFILE,
    PROJECTS, Profile, Project, SKILLS, SkillCategory, VALUES, Value,
};
use crate::template::Template;
use crate::theme::Theme;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub theme: Theme,
    pub profile: &'static Profile,
    pub nav_links: &'static [NavLink],
    pub values: &'static [Value],
    pub education: &'static [EducationEntry],
    pub skills: &'static [SkillCategory],
    pub projects: &'static [Project],
    pub certifications: &'static [Certification],
    pub year: i32,
    // Contact section state; the POST handler re-renders only the fragment.
    pub form: FormFields,
    pub success: bool,
    pub error: Option<String>,
}

impl IndexTemplate {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            profile: &PROFILE,
            nav_links: NAV_LINKS,
            values: VALUES,
            education: EDUCATION,
            skills: SKILLS,
            projects: PROJECTS,
            certifications: CERTIFICATIONS,
            year: OffsetDateTime::now_utc().year(),
            form: FormFields::default(),
            success: false,
            error: None,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    let index = IndexTemplate::new(template.theme);
    template.render(index)
}
