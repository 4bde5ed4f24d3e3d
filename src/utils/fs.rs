use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Markup,
    Stylesheet,
    Script,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Markup => "html",
            Self::Stylesheet => "css",
            Self::Script => "js",
        }
    }
}

pub fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

pub fn is_likely_binary(bytes: &[u8]) -> bool {
    let sample_len = bytes.len().min(8192);
    bytes[..sample_len].contains(&0)
}

pub fn source_kind(path: &Path) -> Option<SourceKind> {
    let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
    match ext.as_str() {
        "html" | "htm" => Some(SourceKind::Markup),
        "css" => Some(SourceKind::Stylesheet),
        "js" | "mjs" => Some(SourceKind::Script),
        _ => None,
    }
}
