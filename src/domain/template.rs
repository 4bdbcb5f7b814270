//! Front matter templates for new posts and drafts

use crate::error::{JekyllError, Result};
use log::debug;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Built-in post skeleton. `${title}` and `${date}` are filled in; the
/// numbered `${N:...}` tab stops are left for the editor.
const DEFAULT_POST_TEMPLATE: &str = "---
layout: ${1:post}
title: \"${title}\"
date: ${date}
category: ${2}
author: ${3}
tags: [${4}]
description: \"${5}\"
---

${6}";

/// Regex matching `${...}` placeholders, non-greedy
fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\$\{(.*?)\}").unwrap())
}

/// Editor snippet tab stops start with a digit (`${1}`, `${2:post}`)
fn is_tab_stop(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Values substituted into a template, keyed by placeholder name
pub type TemplateVariables = HashMap<String, String>;

/// Build the variable set used for new files
pub fn post_variables(title: &str, date: &str) -> TemplateVariables {
    let mut variables = TemplateVariables::new();
    variables.insert("title".to_string(), title.to_string());
    variables.insert("date".to_string(), date.to_string());
    variables
}

/// Replace every `${name}` with its variable, or the empty string when the
/// name is not supplied. Snippet tab stops are kept as they are.
pub fn replace_template_variables(template: &str, variables: &TemplateVariables) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            match variables.get(name) {
                Some(value) => value.clone(),
                None if is_tab_stop(name) => caps[0].to_string(),
                None => String::new(),
            }
        })
        .into_owned()
}

/// Template for post and draft generation
#[derive(Debug)]
pub struct Template {
    content: String,
}

impl Template {
    /// The built-in front matter skeleton
    pub fn default_post() -> Self {
        Template {
            content: DEFAULT_POST_TEMPLATE.to_string(),
        }
    }

    /// Create template from a custom template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| JekyllError::Template(format!("Failed to read template file: {}", e)))?;

        Ok(Template { content })
    }

    /// Render template with variable substitution
    pub fn render(&self, variables: &TemplateVariables) -> String {
        replace_template_variables(&self.content, variables)
    }
}

/// Load `<root>/<template_path>/<template_name>` when it is a regular file,
/// otherwise fall back to the built-in skeleton.
pub fn load_template(
    root: &Path,
    template_path: Option<&str>,
    template_name: &str,
) -> Result<Template> {
    let custom_path = root.join(template_path.unwrap_or("")).join(template_name);

    if !template_name.is_empty() && custom_path.is_file() {
        debug!("Using template {}", custom_path.display());
        Template::from_file(&custom_path)
    } else {
        debug!(
            "No template at {}, using built-in front matter",
            custom_path.display()
        );
        Ok(Template::default_post())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_replace_title_and_date() {
        let vars = post_variables("Foo", "2024-01-01 10:00:00 +0000");
        let rendered = replace_template_variables("title: \"${title}\"\ndate: ${date}", &vars);
        assert_eq!(rendered, "title: \"Foo\"\ndate: 2024-01-01 10:00:00 +0000");
    }

    #[test]
    fn test_unknown_variables_become_empty() {
        let vars = post_variables("Foo", "now");
        let rendered = replace_template_variables("author: ${author}|${title}", &vars);
        assert_eq!(rendered, "author: |Foo");
    }

    #[test]
    fn test_tab_stops_are_kept() {
        let vars = post_variables("Foo", "now");
        let rendered = replace_template_variables("layout: ${1:post}\n${6}", &vars);
        assert_eq!(rendered, "layout: ${1:post}\n${6}");
    }

    #[test]
    fn test_repeated_placeholders() {
        let vars = post_variables("Foo", "now");
        let rendered = replace_template_variables("${title} ${title}", &vars);
        assert_eq!(rendered, "Foo Foo");
    }

    #[test]
    fn test_default_template_render() {
        let vars = post_variables("My Post", "2024-01-01 10:00:00 +0000");
        let rendered = Template::default_post().render(&vars);

        assert!(rendered.starts_with("---\nlayout: ${1:post}\n"));
        assert!(rendered.contains("title: \"My Post\"\n"));
        assert!(rendered.contains("date: 2024-01-01 10:00:00 +0000\n"));
        assert!(rendered.contains("tags: [${4}]"));
        assert!(rendered.ends_with("---\n\n${6}"));
    }

    #[test]
    fn test_load_custom_template() {
        let temp = TempDir::new().unwrap();
        let templates_dir = temp.path().join("_templates");
        fs::create_dir_all(&templates_dir).unwrap();
        fs::write(templates_dir.join("post.md"), "---\ntitle: ${title}\n---\n").unwrap();

        let template = load_template(temp.path(), Some("_templates"), "post.md").unwrap();
        assert_eq!(template.content, "---\ntitle: ${title}\n---\n");
    }

    #[test]
    fn test_load_template_falls_back_when_missing() {
        let temp = TempDir::new().unwrap();
        let template = load_template(temp.path(), Some("_templates"), "nope.md").unwrap();
        assert_eq!(template.content, DEFAULT_POST_TEMPLATE);
    }

    #[test]
    fn test_load_template_falls_back_for_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("_templates").join("post.md")).unwrap();

        let template = load_template(temp.path(), Some("_templates"), "post.md").unwrap();
        assert_eq!(template.content, DEFAULT_POST_TEMPLATE);
    }

    #[test]
    fn test_load_template_empty_name_uses_default() {
        let temp = TempDir::new().unwrap();
        let template = load_template(temp.path(), Some("_templates"), "").unwrap();
        assert_eq!(template.content, DEFAULT_POST_TEMPLATE);
    }

    #[test]
    fn test_from_file_missing_file() {
        let result = Template::from_file(Path::new("/nonexistent/template.md"));
        assert!(result.is_err());
    }
}
