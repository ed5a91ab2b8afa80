//! Language and project detection
//!
//! Maps file extensions to languages, probes project roots for build
//! manifests, and works out which framework and package manager a
//! JavaScript project uses.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use promptstore::Category;

/// What language a file is written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Language identifier, e.g. "rust" or "typescript"
    pub language: String,
    /// File extension including the dot, e.g. ".rs"
    pub extension: String,
    /// Prompt category this language maps to
    pub category: Category,
}

/// What kind of project a directory holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Ecosystem identifier, e.g. "javascript", "python", "rust"
    pub project_type: String,
    /// Detected framework, if any
    pub framework: Option<String>,
    /// Detected package manager, if any
    pub package_manager: Option<String>,
}

/// Language ids with a known extension and category mapping
const LANGUAGES: &[(&str, &str, Category)] = &[
    ("javascript", ".js", Category::Generate),
    ("typescript", ".ts", Category::Generate),
    ("python", ".py", Category::Generate),
    ("java", ".java", Category::Generate),
    ("csharp", ".cs", Category::Generate),
    ("cpp", ".cpp", Category::Generate),
    ("c", ".c", Category::Generate),
    ("go", ".go", Category::Generate),
    ("rust", ".rs", Category::Generate),
    ("php", ".php", Category::Generate),
    ("ruby", ".rb", Category::Generate),
    ("swift", ".swift", Category::Generate),
    ("kotlin", ".kt", Category::Generate),
    ("html", ".html", Category::Generate),
    ("css", ".css", Category::Generate),
    ("json", ".json", Category::Generate),
    ("xml", ".xml", Category::Generate),
    ("markdown", ".md", Category::Docs),
    ("yaml", ".yml", Category::Generate),
];

/// Look up a language by its identifier
pub fn language_from_id(language_id: &str) -> LanguageInfo {
    debug!(%language_id, "language_from_id: called");
    let id = language_id.to_lowercase();
    match LANGUAGES.iter().find(|(lang, _, _)| *lang == id) {
        Some((lang, ext, category)) => LanguageInfo {
            language: (*lang).to_string(),
            extension: (*ext).to_string(),
            category: *category,
        },
        None => LanguageInfo {
            language: id,
            extension: String::new(),
            category: Category::Other,
        },
    }
}

/// Detect a file's language from its extension
pub fn language_from_path(path: impl AsRef<Path>) -> Option<LanguageInfo> {
    let path = path.as_ref();
    debug!(path = %path.display(), "language_from_path: called");
    let ext = format!(".{}", path.extension()?.to_str()?.to_lowercase());
    // .yaml and .yml are the same language
    let ext = if ext == ".yaml" { ".yml".to_string() } else { ext };
    LANGUAGES
        .iter()
        .find(|(_, e, _)| *e == ext)
        .map(|(lang, e, category)| LanguageInfo {
            language: (*lang).to_string(),
            extension: (*e).to_string(),
            category: *category,
        })
}

/// Manifest files probed for, in priority order. The first hit wins, so a
/// polyglot repo gets one stable answer.
const PROJECT_MARKERS: &[(&str, &str)] = &[
    ("package.json", "javascript"),
    ("requirements.txt", "python"),
    ("pom.xml", "java"),
    ("build.gradle", "java"),
    ("Cargo.toml", "rust"),
    ("go.mod", "go"),
];

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: HashMap<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: HashMap<String, serde_json::Value>,
}

/// Detect the project type of a directory
///
/// Returns `None` when no known manifest file is present.
pub fn detect_project(root: impl AsRef<Path>) -> Option<ProjectInfo> {
    let root = root.as_ref();
    debug!(root = %root.display(), "detect_project: called");

    for (marker, project_type) in PROJECT_MARKERS {
        let marker_path = root.join(marker);
        if !marker_path.exists() {
            continue;
        }
        debug!(%marker, %project_type, "detect_project: marker found");

        let mut info = ProjectInfo {
            project_type: (*project_type).to_string(),
            framework: None,
            package_manager: None,
        };

        match *marker {
            "package.json" => {
                info.framework = std::fs::read_to_string(&marker_path)
                    .ok()
                    .and_then(|text| serde_json::from_str::<PackageJson>(&text).ok())
                    .and_then(|pkg| detect_framework(&pkg));
                info.package_manager = detect_package_manager(root);
            }
            "pom.xml" => info.framework = Some("maven".to_string()),
            "build.gradle" => info.framework = Some("gradle".to_string()),
            _ => {}
        }

        return Some(info);
    }

    debug!("detect_project: no marker found");
    None
}

/// Detect a JavaScript framework from merged dependencies
fn detect_framework(pkg: &PackageJson) -> Option<String> {
    let mut deps: HashMap<&str, &serde_json::Value> = HashMap::new();
    for (k, v) in pkg.dependencies.iter().chain(pkg.dev_dependencies.iter()) {
        deps.insert(k.as_str(), v);
    }

    let framework = if deps.contains_key("react") {
        "React"
    } else if deps.contains_key("vue") {
        "Vue"
    } else if deps.contains_key("angular") || deps.contains_key("@angular/core") {
        "Angular"
    } else if deps.contains_key("next") {
        "Next.js"
    } else if deps.contains_key("nuxt") {
        "Nuxt.js"
    } else if deps.contains_key("svelte") {
        "Svelte"
    } else if deps.contains_key("express") {
        "Express"
    } else if deps.contains_key("koa") {
        "Koa"
    } else if deps.contains_key("nestjs") || deps.contains_key("@nestjs/core") {
        "NestJS"
    } else {
        return None;
    };
    Some(framework.to_string())
}

/// Detect the package manager from lockfiles, in priority order
fn detect_package_manager(root: &Path) -> Option<String> {
    let lockfiles = [
        ("yarn.lock", "yarn"),
        ("pnpm-lock.yaml", "pnpm"),
        ("package-lock.json", "npm"),
    ];
    for (file, manager) in lockfiles {
        if root.join(file).exists() {
            debug!(%file, %manager, "detect_package_manager: lockfile found");
            return Some(manager.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_language_from_id_known_and_unknown() {
        let rust = language_from_id("rust");
        assert_eq!(rust.extension, ".rs");
        assert_eq!(rust.category, Category::Generate);

        let md = language_from_id("markdown");
        assert_eq!(md.category, Category::Docs);

        let mystery = language_from_id("brainfuck");
        assert_eq!(mystery.category, Category::Other);
        assert_eq!(mystery.language, "brainfuck");
    }

    #[test]
    fn test_language_from_path() {
        let info = language_from_path("src/main.rs").unwrap();
        assert_eq!(info.language, "rust");

        let info = language_from_path("README.md").unwrap();
        assert_eq!(info.category, Category::Docs);

        // .yaml normalizes to the same language as .yml
        let info = language_from_path("ci.yaml").unwrap();
        assert_eq!(info.language, "yaml");

        assert!(language_from_path("no_extension").is_none());
        assert!(language_from_path("a.xyz").is_none());
    }

    #[test]
    fn test_detect_project_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(detect_project(temp.path()).is_none());
    }

    #[test]
    fn test_detect_project_first_marker_wins() {
        let temp = TempDir::new().unwrap();
        // Both a JS and a Rust manifest; package.json has higher priority
        std::fs::write(temp.path().join("package.json"), "{}").unwrap();
        std::fs::write(temp.path().join("Cargo.toml"), "[package]").unwrap();

        let info = detect_project(temp.path()).unwrap();
        assert_eq!(info.project_type, "javascript");
    }

    #[test]
    fn test_detect_project_rust() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("Cargo.toml"), "[package]").unwrap();

        let info = detect_project(temp.path()).unwrap();
        assert_eq!(info.project_type, "rust");
        assert!(info.framework.is_none());
        assert!(info.package_manager.is_none());
    }

    #[test]
    fn test_detect_project_java_gradle() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("build.gradle"), "").unwrap();

        let info = detect_project(temp.path()).unwrap();
        assert_eq!(info.project_type, "java");
        assert_eq!(info.framework.as_deref(), Some("gradle"));
    }

    #[test]
    fn test_detect_framework_from_package_json() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            r#"{"dependencies": {"react": "^18.0.0"}, "devDependencies": {"vite": "^5.0.0"}}"#,
        )
        .unwrap();

        let info = detect_project(temp.path()).unwrap();
        assert_eq!(info.framework.as_deref(), Some("React"));
    }

    #[test]
    fn test_detect_framework_in_dev_dependencies() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            r#"{"devDependencies": {"@nestjs/core": "^10.0.0"}}"#,
        )
        .unwrap();

        let info = detect_project(temp.path()).unwrap();
        assert_eq!(info.framework.as_deref(), Some("NestJS"));
    }

    #[test]
    fn test_detect_package_manager_priority() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("package.json"), "{}").unwrap();
        std::fs::write(temp.path().join("package-lock.json"), "{}").unwrap();
        std::fs::write(temp.path().join("yarn.lock"), "").unwrap();

        // yarn.lock outranks package-lock.json
        let info = detect_project(temp.path()).unwrap();
        assert_eq!(info.package_manager.as_deref(), Some("yarn"));
    }

    #[test]
    fn test_malformed_package_json_still_detects_type() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("package.json"), "{not json").unwrap();

        let info = detect_project(temp.path()).unwrap();
        assert_eq!(info.project_type, "javascript");
        assert!(info.framework.is_none());
    }
}
