//! System prompt assembly.
//!
//! Renders a [`PromptContext`] into the textual instruction consumed by the
//! model: a fixed persona/biography/guideline preamble followed by one titled
//! block per non-empty content section, in a fixed order. This is a pure
//! function of its input: no I/O, no randomness.

use folio_core::content::PromptContext;
use std::fmt::Write;

/// Fixed persona, biography, and response guidelines for the assistant.
pub const BASE_PROMPT: &str = r#"You are an AI assistant on Prince Kumar Sahni's personal portfolio website. Your job is to answer questions about Prince in a friendly, concise, and professional tone.

## Personal
- Full name: Prince Kumar Sahni
- Role: Software Engineer
- Based in: Noida, India
- Website: https://princesahni.com
- Passionate about: building scalable, secure, and high-performing web and mobile applications
- He is a Lifelong Learner, audiophile, photographer, and content creator
- His Google Maps Local Guide photos and reviews have crossed 600K+ views

## Professional Experience
1. Associate Software Developer at Chetu Inc. (2024 – Present), Noida, India
   - Leading development of scalable web applications using React, Node.js, and cloud technologies
2. Full-Stack Developer at Webbocket (2023 – 2024), Bhubaneswar, Odisha
   - Built and maintained multiple web applications, collaborated with cross-functional teams

## Education
- Bachelor of Science in Computer Science, Biju Patnaik University of Technology (2020–2024), GPA: 8.34/10.0

## Interests & Hobbies
Open Source Contributing, Technical Writing, AI/ML Research, Mobile App Development, Medium Articles, Local Guide at Google Maps, Photography, Audiophile, Cricket, Hiking, Chess

## Content & Social
- Writes tech articles on Medium
- Has a YouTube channel
- Passionate photographer

## Contact
- For professional inquiries, visitors can use the /contact page on the website

## Guidelines for your responses:
- Be friendly, helpful, and professional
- Keep answers concise (2–4 sentences) unless the question requires detail
- If asked something not related to Prince, politely say you're only here to answer questions about Prince
- Never make up information not provided to you
- Encourage visitors to explore the portfolio or get in touch
"#;

/// Treats `"#"` placeholder links as absent.
fn real_url(url: &Option<String>) -> Option<&str> {
    url.as_deref().filter(|u| !u.is_empty() && *u != "#")
}

/// Builds the full system prompt from the preamble and the given context.
///
/// Sections appear in the fixed order skills, projects, articles, blogs,
/// courses; a section with an empty list is omitted entirely, so an empty
/// context yields exactly [`BASE_PROMPT`].
pub fn build_system_prompt(context: &PromptContext) -> String {
    let mut prompt = String::from(BASE_PROMPT);

    if !context.skills.is_empty() {
        prompt.push_str("\n## Technical Skills (from server)\n");
        for category in &context.skills {
            let names: Vec<&str> = category
                .skills_list
                .iter()
                .filter_map(|skill| skill.name.as_deref())
                .collect();
            if let (Some(name), false) = (category.name.as_deref(), names.is_empty()) {
                let _ = writeln!(prompt, "- {}: {}", name, names.join(", "));
            }
        }
    }

    if !context.projects.is_empty() {
        let _ = write!(
            prompt,
            "\n## Projects ({} total, from server)\n",
            context.projects.len()
        );
        for project in &context.projects {
            let Some(title) = project.title.as_deref() else {
                continue;
            };
            let _ = write!(
                prompt,
                "- {}: {}",
                title,
                project.description.as_deref().unwrap_or("")
            );
            if !project.technologies.is_empty() {
                let _ = write!(prompt, " [Tech: {}]", project.technologies.join(", "));
            }
            if let Some(url) = real_url(&project.live_url) {
                let _ = write!(prompt, " [Live: {url}]");
            }
            if let Some(url) = real_url(&project.github_url) {
                let _ = write!(prompt, " [GitHub: {url}]");
            }
            prompt.push('\n');
        }
    }

    if !context.articles.is_empty() {
        let _ = write!(
            prompt,
            "\n## Published Articles ({} total, from server)\n",
            context.articles.len()
        );
        for article in &context.articles {
            let Some(title) = article.title.as_deref() else {
                continue;
            };
            let _ = write!(prompt, "- \"{title}\"");
            if !article.tags.is_empty() {
                let _ = write!(prompt, " [Tags: {}]", article.tags.join(", "));
            }
            if let Some(link) = real_url(&article.article_link) {
                let _ = write!(prompt, " [Link: {link}]");
            }
            prompt.push('\n');
        }
    }

    if !context.blogs.is_empty() {
        let _ = write!(
            prompt,
            "\n## Blog Posts ({} total, from server)\n",
            context.blogs.len()
        );
        for blog in &context.blogs {
            let Some(title) = blog.title.as_deref() else {
                continue;
            };
            let _ = write!(prompt, "- \"{title}\"");
            if !blog.tags.is_empty() {
                let _ = write!(prompt, " [Tags: {}]", blog.tags.join(", "));
            }
            prompt.push('\n');
        }
    }

    if !context.courses.is_empty() {
        let _ = write!(
            prompt,
            "\n## Courses ({} total, from server)\n",
            context.courses.len()
        );
        for course in &context.courses {
            let Some(title) = course.title.as_deref() else {
                continue;
            };
            let _ = write!(
                prompt,
                "- \"{}\": {}",
                title,
                course.description.as_deref().unwrap_or("")
            );
            if !course.technologies.is_empty() {
                let _ = write!(prompt, " [Tech: {}]", course.technologies.join(", "));
            }
            prompt.push('\n');
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::{
        Article, BlogPost, Course, Project, SkillCategory, SkillEntry, sample,
    };

    fn skills_only() -> PromptContext {
        PromptContext {
            skills: vec![SkillCategory {
                name: Some("Languages".to_string()),
                skills_list: vec![SkillEntry {
                    name: Some("TypeScript".to_string()),
                }],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_context_yields_preamble_exactly() {
        assert_eq!(build_system_prompt(&PromptContext::default()), BASE_PROMPT);
    }

    #[test]
    fn test_skills_only_context() {
        let prompt = build_system_prompt(&skills_only());
        assert!(prompt.contains("## Technical Skills (from server)"));
        assert!(prompt.contains("- Languages: TypeScript"));
        assert!(!prompt.contains("## Projects"));
        assert!(!prompt.contains("## Published Articles"));
        assert!(!prompt.contains("## Blog Posts"));
        assert!(!prompt.contains("## Courses"));
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let prompt = build_system_prompt(&sample::context());
        let skills = prompt.find("## Technical Skills").unwrap();
        let projects = prompt.find("## Projects").unwrap();
        let articles = prompt.find("## Published Articles").unwrap();
        let blogs = prompt.find("## Blog Posts").unwrap();
        let courses = prompt.find("## Courses").unwrap();
        assert!(skills < projects);
        assert!(projects < articles);
        assert!(articles < blogs);
        assert!(blogs < courses);
    }

    #[test]
    fn test_project_line_formatting() {
        let context = PromptContext {
            projects: vec![Project {
                title: Some("Folio".to_string()),
                description: Some("Portfolio assistant".to_string()),
                technologies: vec!["Rust".to_string(), "Tokio".to_string()],
                live_url: Some("#".to_string()),
                github_url: Some("https://github.com/princesahni/folio".to_string()),
            }],
            ..Default::default()
        };
        let prompt = build_system_prompt(&context);
        assert!(prompt.contains("## Projects (1 total, from server)"));
        assert!(prompt.contains("- Folio: Portfolio assistant [Tech: Rust, Tokio]"));
        // "#" placeholder links are not real links
        assert!(!prompt.contains("[Live:"));
        assert!(prompt.contains("[GitHub: https://github.com/princesahni/folio]"));
    }

    #[test]
    fn test_article_and_blog_lines_quote_titles() {
        let context = PromptContext {
            articles: vec![Article {
                title: Some("On Caching".to_string()),
                tags: vec!["perf".to_string()],
                article_link: Some("https://medium.com/x".to_string()),
            }],
            blogs: vec![BlogPost {
                title: Some("Hello".to_string()),
                tags: vec![],
            }],
            ..Default::default()
        };
        let prompt = build_system_prompt(&context);
        assert!(prompt.contains("- \"On Caching\" [Tags: perf] [Link: https://medium.com/x]"));
        assert!(prompt.contains("- \"Hello\"\n"));
    }

    #[test]
    fn test_course_line_formatting() {
        let context = PromptContext {
            courses: vec![Course {
                title: Some("Rust 101".to_string()),
                description: Some("Basics".to_string()),
                technologies: vec!["Rust".to_string()],
            }],
            ..Default::default()
        };
        let prompt = build_system_prompt(&context);
        assert!(prompt.contains("- \"Rust 101\": Basics [Tech: Rust]"));
    }

    #[test]
    fn test_untitled_records_are_skipped() {
        let context = PromptContext {
            skills: vec![SkillCategory {
                name: None,
                skills_list: vec![SkillEntry {
                    name: Some("Rust".to_string()),
                }],
            }],
            projects: vec![Project::default()],
            ..Default::default()
        };
        let prompt = build_system_prompt(&context);
        // Headers still appear (the lists are non-empty) but no item lines do.
        let dynamic = prompt.strip_prefix(BASE_PROMPT).unwrap();
        assert!(dynamic.contains("## Technical Skills (from server)"));
        assert!(dynamic.contains("## Projects (1 total, from server)"));
        assert!(!dynamic.contains("\n- "));
    }

    #[test]
    fn test_deterministic() {
        let context = sample::context();
        assert_eq!(build_system_prompt(&context), build_system_prompt(&context));
    }
}
