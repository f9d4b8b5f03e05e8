use std::path::Path;

use tracing::debug;

use crate::types::{Locale, Slug};

/// Locales, in [`Locale::ALL`] order, for which `<dir>/<slug>-<locale>.html`
/// is a regular file. A missing directory yields no locales.
pub fn detect_locales(slug: &Slug, project_dir: &Path) -> Vec<Locale> {
    Locale::ALL
        .into_iter()
        .filter(|&locale| {
            let found = project_dir.join(slug.html_file(locale)).is_file();
            debug!(%slug, %locale, found, "locale probe");
            found
        })
        .collect()
}
