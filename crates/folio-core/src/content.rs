//! Portfolio content records fetched from the remote content API.
//!
//! The content API returns loosely-shaped JSON (`{ "data": [...] }`), so
//! every display field here is optional or defaulted. Formatting code must
//! tolerate absent values rather than assume a fixed schema.

use serde::{Deserialize, Serialize};

/// Response envelope used by every content endpoint.
///
/// A missing `data` array deserializes to an empty list.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

/// A named group of skills, e.g. "Languages" or "Frameworks".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "skillsList")]
    pub skills_list: Vec<SkillEntry>,
}

/// One skill inside a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(default)]
    pub name: Option<String>,
}

/// A portfolio project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, rename = "liveUrl")]
    pub live_url: Option<String>,
    #[serde(default, rename = "githubUrl")]
    pub github_url: Option<String>,
}

/// A published article (external publication).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "articleLink")]
    pub article_link: Option<String>,
}

/// A blog post hosted on the site itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A course or tutorial series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Aggregated snapshot of all content sources used to ground the assistant.
///
/// Built once per session from concurrent fetches and immutable afterwards.
/// Any or all of the lists may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptContext {
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub articles: Vec<Article>,
    pub blogs: Vec<BlogPost>,
    pub courses: Vec<Course>,
}

impl PromptContext {
    /// Returns true when every section is empty.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.projects.is_empty()
            && self.articles.is_empty()
            && self.blogs.is_empty()
            && self.courses.is_empty()
    }

    /// Fills each *empty* section from the supplied fallback context.
    ///
    /// This is an explicit policy decided by the caller: the loader itself
    /// never substitutes fallback content, because it cannot distinguish a
    /// legitimately empty source from a failed fetch.
    pub fn or_fallback(mut self, fallback: &PromptContext) -> Self {
        if self.skills.is_empty() {
            self.skills = fallback.skills.clone();
        }
        if self.projects.is_empty() {
            self.projects = fallback.projects.clone();
        }
        if self.articles.is_empty() {
            self.articles = fallback.articles.clone();
        }
        if self.blogs.is_empty() {
            self.blogs = fallback.blogs.clone();
        }
        if self.courses.is_empty() {
            self.courses = fallback.courses.clone();
        }
        self
    }
}

pub mod sample {
    //! Bundled sample content for demo runs without a live content API.

    use super::*;

    /// Builds a small sample context covering every section.
    pub fn context() -> PromptContext {
        PromptContext {
            skills: vec![
                SkillCategory {
                    name: Some("Languages".to_string()),
                    skills_list: ["TypeScript", "JavaScript", "Rust", "Python"]
                        .into_iter()
                        .map(|name| SkillEntry {
                            name: Some(name.to_string()),
                        })
                        .collect(),
                },
                SkillCategory {
                    name: Some("Frameworks".to_string()),
                    skills_list: ["React", "Node.js", "Express"]
                        .into_iter()
                        .map(|name| SkillEntry {
                            name: Some(name.to_string()),
                        })
                        .collect(),
                },
            ],
            projects: vec![Project {
                title: Some("Portfolio Website".to_string()),
                description: Some(
                    "Personal portfolio with an embedded AI assistant".to_string(),
                ),
                technologies: vec!["React".to_string(), "Gemini".to_string()],
                live_url: Some("https://princesahni.com".to_string()),
                github_url: None,
            }],
            articles: vec![Article {
                title: Some("Scaling Node.js Services".to_string()),
                tags: vec!["nodejs".to_string(), "backend".to_string()],
                article_link: None,
            }],
            blogs: vec![BlogPost {
                title: Some("Why I Rebuilt My Portfolio".to_string()),
                tags: vec!["meta".to_string()],
            }],
            courses: vec![Course {
                title: Some("Full-Stack Fundamentals".to_string()),
                description: Some("From HTML to deployed app".to_string()),
                technologies: vec!["React".to_string(), "Node.js".to_string()],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_tolerates_missing_data() {
        let env: DataEnvelope<Project> = serde_json::from_str("{}").unwrap();
        assert!(env.data.is_empty());
    }

    #[test]
    fn test_records_tolerate_sparse_fields() {
        let project: Project = serde_json::from_str(r#"{"title": "X"}"#).unwrap();
        assert_eq!(project.title.as_deref(), Some("X"));
        assert!(project.technologies.is_empty());
        assert!(project.live_url.is_none());

        let category: SkillCategory =
            serde_json::from_str(r#"{"skillsList": [{"name": "Rust"}, {}]}"#).unwrap();
        assert!(category.name.is_none());
        assert_eq!(category.skills_list.len(), 2);
    }

    #[test]
    fn test_camel_case_aliases() {
        let article: Article =
            serde_json::from_str(r#"{"title": "A", "articleLink": "https://a"}"#).unwrap();
        assert_eq!(article.article_link.as_deref(), Some("https://a"));
    }

    #[test]
    fn test_or_fallback_fills_only_empty_sections() {
        let live = PromptContext {
            projects: vec![Project {
                title: Some("Live project".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let merged = live.or_fallback(&sample::context());

        // The live section is preserved, empty sections come from the sample.
        assert_eq!(merged.projects.len(), 1);
        assert_eq!(merged.projects[0].title.as_deref(), Some("Live project"));
        assert!(!merged.skills.is_empty());
        assert!(!merged.courses.is_empty());
    }

    #[test]
    fn test_is_empty() {
        assert!(PromptContext::default().is_empty());
        assert!(!sample::context().is_empty());
    }
}
