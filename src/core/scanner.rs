use crate::config::Config;
use crate::core::Artifact;
use crate::utils::fs::{SourceKind, is_likely_binary, relative_path, source_kind};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, Default)]
pub struct ExplicitSources {
    pub html: Option<PathBuf>,
    pub css: Option<PathBuf>,
    pub js: Option<PathBuf>,
}

impl ExplicitSources {
    fn path_for(&self, kind: SourceKind) -> Option<&Path> {
        match kind {
            SourceKind::Markup => self.html.as_deref(),
            SourceKind::Stylesheet => self.css.as_deref(),
            SourceKind::Script => self.js.as_deref(),
        }
    }

    fn covers_all(&self) -> bool {
        self.html.is_some() && self.css.is_some() && self.js.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub artifact: Artifact,
    pub files: Vec<String>,
    pub missing: Vec<SourceKind>,
}

pub fn collect_artifact(root: &Path, explicit: &ExplicitSources, cfg: &Config) -> Result<ScanResult> {
    let mut discovered = if explicit.covers_all() {
        Discovered::default()
    } else {
        discover(root, cfg)?
    };

    let mut result = ScanResult::default();
    for kind in [SourceKind::Markup, SourceKind::Stylesheet, SourceKind::Script] {
        let text = match explicit.path_for(kind) {
            Some(path) => {
                result.files.push(path.to_string_lossy().replace('\\', "/"));
                read_explicit(path)?
            }
            None => {
                let found = discovered.take(kind);
                if found.is_empty() {
                    result.missing.push(kind);
                }
                let mut parts = Vec::with_capacity(found.len());
                for (rel, content) in found {
                    result.files.push(rel);
                    parts.push(content);
                }
                parts.join("\n")
            }
        };

        match kind {
            SourceKind::Markup => result.artifact.html = text,
            SourceKind::Stylesheet => result.artifact.css = text,
            SourceKind::Script => result.artifact.js = text,
        }
    }

    Ok(result)
}

#[derive(Debug, Default)]
struct Discovered {
    markup: Vec<(String, String)>,
    stylesheet: Vec<(String, String)>,
    script: Vec<(String, String)>,
}

impl Discovered {
    fn take(&mut self, kind: SourceKind) -> Vec<(String, String)> {
        let slot = match kind {
            SourceKind::Markup => &mut self.markup,
            SourceKind::Stylesheet => &mut self.stylesheet,
            SourceKind::Script => &mut self.script,
        };
        std::mem::take(slot)
    }
}

fn discover(root: &Path, cfg: &Config) -> Result<Discovered> {
    if !root.exists() {
        bail!("path does not exist: {}", root.display());
    }
    if !root.is_dir() {
        bail!("path is not a directory: {}", root.display());
    }

    let root = root
        .canonicalize()
        .with_context(|| format!("failed to canonicalize {}", root.display()))?;
    let max_bytes = cfg.scan.max_file_size_kb * 1024;
    let mut discovered = Discovered::default();

    for entry in WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| should_visit(entry, &cfg.scan.exclude))
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(kind) = source_kind(entry.path()) else {
            continue;
        };

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(_) => continue,
        };
        if metadata.len() > max_bytes {
            continue;
        }

        let bytes = match fs::read(entry.path()) {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };
        if is_likely_binary(&bytes) {
            continue;
        }

        let rel = relative_path(&root, entry.path());
        let content = String::from_utf8_lossy(&bytes).into_owned();
        match kind {
            SourceKind::Markup => discovered.markup.push((rel, content)),
            SourceKind::Stylesheet => discovered.stylesheet.push((rel, content)),
            SourceKind::Script => discovered.script.push((rel, content)),
        }
    }

    for files in [
        &mut discovered.markup,
        &mut discovered.stylesheet,
        &mut discovered.script,
    ] {
        files.sort_by(|a, b| a.0.cmp(&b.0));
    }

    Ok(discovered)
}

fn read_explicit(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed reading {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn should_visit(entry: &DirEntry, excludes: &[String]) -> bool {
    if !entry.file_type().is_dir() || entry.depth() == 0 {
        return true;
    }

    let dir_name = entry.file_name().to_string_lossy();
    !excludes
        .iter()
        .any(|excluded| excluded.eq_ignore_ascii_case(&dir_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn collects_each_kind_in_path_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "index.html", b"<h1>home</h1>");
        write(&dir, "b.css", b".b{}");
        write(&dir, "a.css", b".a{}");
        write(&dir, "js/app.js", b"let x = 1;");
        write(&dir, "logo.png", b"\x89PNG\0");

        let result = collect_artifact(dir.path(), &ExplicitSources::default(), &Config::default())
            .unwrap();
        assert_eq!(result.artifact.html, "<h1>home</h1>");
        assert_eq!(result.artifact.css, ".a{}\n.b{}");
        assert_eq!(result.artifact.js, "let x = 1;");
        assert_eq!(result.files, vec!["index.html", "a.css", "b.css", "js/app.js"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn skips_excluded_dirs_and_binary_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "index.html", b"<p>x</p>");
        write(&dir, "node_modules/lib/vendor.js", b"var a;");
        write(&dir, "weird.js", b"\0\0\0");

        let result = collect_artifact(dir.path(), &ExplicitSources::default(), &Config::default())
            .unwrap();
        assert_eq!(result.artifact.js, "");
        assert_eq!(result.missing, vec![SourceKind::Stylesheet, SourceKind::Script]);
    }

    #[test]
    fn explicit_files_override_discovery() {
        let dir = TempDir::new().unwrap();
        write(&dir, "site/index.html", b"<p>found</p>");
        let css = write(&dir, "elsewhere/custom.css", b".x{display:flex}");

        let explicit = ExplicitSources {
            css: Some(css),
            ..ExplicitSources::default()
        };
        let result = collect_artifact(&dir.path().join("site"), &explicit, &Config::default())
            .unwrap();
        assert_eq!(result.artifact.html, "<p>found</p>");
        assert_eq!(result.artifact.css, ".x{display:flex}");
    }

    #[test]
    fn all_explicit_files_do_not_need_a_directory() {
        let dir = TempDir::new().unwrap();
        let html = write(&dir, "a.html", b"<p>x</p>");
        let css = write(&dir, "a.css", b"");
        let js = write(&dir, "a.js", b"");

        let explicit = ExplicitSources {
            html: Some(html),
            css: Some(css),
            js: Some(js),
        };
        let result =
            collect_artifact(&dir.path().join("missing"), &explicit, &Config::default()).unwrap();
        assert_eq!(result.artifact.html, "<p>x</p>");
    }

    #[test]
    fn missing_root_and_missing_explicit_file_are_errors() {
        let dir = TempDir::new().unwrap();
        let err = collect_artifact(&dir.path().join("nope"), &ExplicitSources::default(), &Config::default())
            .unwrap_err();
        assert!(err.to_string().contains("path does not exist"));

        let explicit = ExplicitSources {
            html: Some(dir.path().join("gone.html")),
            ..ExplicitSources::default()
        };
        let err = collect_artifact(dir.path(), &explicit, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("failed reading"));
    }
}
