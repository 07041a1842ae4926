//! Askama Templates
//!
//! Template structs for rendering HTML pages.

mod fallback;

use askama::Template;

use crate::config::GitIdentity;
use crate::models::EnvironmentSnapshot;
use crate::site::Site;

pub use fallback::render_lab_fallback;

/// Starter site home page.
#[derive(Template)]
#[template(path = "starter/index.html")]
pub struct StarterHomeTemplate {
    pub title: String,
    pub repo_url: String,
    pub git_user_name: String,
    pub git_user_email: String,
}

impl StarterHomeTemplate {
    pub fn new(site: Site, git: &GitIdentity) -> Self {
        Self {
            title: site.home_title().to_string(),
            repo_url: git.repo_url.clone(),
            git_user_name: git.user_name.clone(),
            git_user_email: git.user_email.clone(),
        }
    }
}

/// Starter site tutorial page.
#[derive(Template)]
#[template(path = "starter/tutorial.html")]
pub struct TutorialTemplate {
    pub title: String,
}

impl TutorialTemplate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Lab dashboard home page.
#[derive(Template)]
#[template(path = "lab/index.html")]
pub struct LabHomeTemplate {
    pub title: String,
    pub python_version: String,
    pub platform: String,
    pub hostname: String,
    pub current_time: String,
    pub environment: String,
    pub notebook_url: String,
}

impl LabHomeTemplate {
    pub fn new(
        snapshot: EnvironmentSnapshot,
        environment: impl Into<String>,
        notebook_url: impl Into<String>,
    ) -> Self {
        Self {
            title: Site::Pylab.home_title().to_string(),
            python_version: snapshot.python_version,
            platform: snapshot.platform,
            hostname: snapshot.hostname,
            current_time: snapshot.current_time,
            environment: environment.into(),
            notebook_url: notebook_url.into(),
        }
    }
}
