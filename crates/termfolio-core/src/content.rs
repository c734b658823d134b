//! Portfolio content records (projects, contact, profile).
//!
//! Built-in records are embedded at compile time. A data directory can
//! override any of them by providing `projects.json`, `contact.json` or
//! `profile.json`; missing files fall back to the embedded copy.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const PROJECTS_FILE: &str = "projects.json";
const CONTACT_FILE: &str = "contact.json";
const PROFILE_FILE: &str = "profile.json";

const DEFAULT_PROJECTS: &str = include_str!("../data/projects.json");
const DEFAULT_CONTACT: &str = include_str!("../data/contact.json");
const DEFAULT_PROFILE: &str = include_str!("../data/profile.json");

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
}

/// Contact links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

/// Owner profile used by `about` and `resume`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default = "default_resume_url")]
    pub resume_url: String,
}

fn default_resume_url() -> String {
    "/resume.pdf".to_string()
}

/// Read-only content consulted by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Projects in display order.
    pub projects: Vec<Project>,
    pub contact: Contact,
    pub profile: Profile,
}

impl Content {
    /// Content compiled into the binary.
    ///
    /// # Panics
    /// Panics if the embedded JSON is malformed.
    pub fn builtin() -> Self {
        Self {
            projects: serde_json::from_str(DEFAULT_PROJECTS).expect("embedded projects.json"),
            contact: serde_json::from_str(DEFAULT_CONTACT).expect("embedded contact.json"),
            profile: serde_json::from_str(DEFAULT_PROFILE).expect("embedded profile.json"),
        }
    }

    /// Loads content, overriding built-in records with files from `data_dir`.
    ///
    /// # Errors
    /// Returns an error if a present file cannot be read or parsed.
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        let mut content = Self::builtin();
        let Some(dir) = data_dir else {
            tracing::debug!("using built-in content");
            return Ok(content);
        };

        if !dir.is_dir() {
            anyhow::bail!("Data directory not found: {}", dir.display());
        }

        if let Some(projects) = load_record(&dir.join(PROJECTS_FILE))? {
            content.projects = projects;
        }
        if let Some(contact) = load_record(&dir.join(CONTACT_FILE))? {
            content.contact = contact;
        }
        if let Some(profile) = load_record(&dir.join(PROFILE_FILE))? {
            content.profile = profile;
        }

        tracing::info!(
            data_dir = %dir.display(),
            projects = content.projects.len(),
            "loaded content"
        );
        Ok(content)
    }

    /// Finds a project whose name equals `name`, ignoring case.
    ///
    /// Matching is exact apart from case: no prefix or fuzzy matching.
    pub fn find_project(&self, name: &str) -> Option<&Project> {
        let wanted = name.to_lowercase();
        self.projects
            .iter()
            .find(|project| project.name.to_lowercase() == wanted)
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}

fn load_record<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no override, keeping built-in record");
        return Ok(None);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let record = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(record))
}
