use std::{fs, path::Path, sync::OnceLock};

use regex::Regex;
use tracing::debug;

use crate::error::{MetaError, MetaResult};

/// Display name pulled out of a page's `<title>` tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Title {
    /// A title tag was found. The name may be empty.
    Named(String),
    /// No title tag was found.
    Untitled,
}

impl Title {
    pub fn name(&self) -> Option<&str> {
        match self {
            Title::Named(name) => Some(name),
            Title::Untitled => None,
        }
    }
}

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<title>([^<]+)</title>").expect("static title pattern is valid")
    })
}

/// Titles embed a dotted qualified name (`Project.Suite.DisplayName`); only
/// the last segment of the first title tag is kept.
pub fn title_from_html(html: &str) -> Title {
    let Some(caps) = title_re().captures(html) else {
        return Title::Untitled;
    };
    let name = caps[1].rsplit('.').next().unwrap_or_default();
    Title::Named(name.to_string())
}

/// Read `path` and extract its title. Unreadable files are an error, not
/// an absent title.
pub fn extract_title(path: &Path) -> MetaResult<Title> {
    let html = fs::read_to_string(path).map_err(|e| MetaError::file_access(path, e))?;
    let title = title_from_html(&html);
    debug!(path = %path.display(), ?title, "title extracted");
    Ok(title)
}
