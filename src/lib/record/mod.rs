use std::path::Path;

use serde::{Serialize, Serializer, ser::SerializeMap};
use tracing::warn;

use crate::{
    config::{CatalogDefaults, catalog_defaults},
    error::MetaResult,
    locale::detect_locales,
    title::extract_title,
    types::{Locale, Slug},
};

/// What one localized page contributes to a project's metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleEntry {
    pub locale: Locale,
    pub name: Option<String>,
    pub banner: String,
    pub html: String,
}

/// Metadata descriptor for a single project.
///
/// Serializes to a flat object: `languages`, then `name_<l>`, `banner_<l>`
/// and `html_<l>` per locale, then the catalog fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaRecord {
    pub slug: Slug,
    pub entries: Vec<LocaleEntry>,
    pub catalog: CatalogDefaults,
}

impl MetaRecord {
    pub fn languages(&self) -> Vec<Locale> {
        self.entries.iter().map(|e| e.locale).collect()
    }

    #[cfg(test)]
    pub fn entry(&self, locale: Locale) -> Option<&LocaleEntry> {
        self.entries.iter().find(|e| e.locale == locale)
    }
}

impl Serialize for MetaRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + 3 * self.entries.len() + 5))?;

        let codes: Vec<&str> = self.entries.iter().map(|e| e.locale.code()).collect();
        map.serialize_entry("languages", &codes)?;

        for entry in &self.entries {
            let code = entry.locale.code();
            map.serialize_entry(&format!("name_{code}"), &entry.name)?;
            map.serialize_entry(&format!("banner_{code}"), &entry.banner)?;
            map.serialize_entry(&format!("html_{code}"), &entry.html)?;
        }

        let c = &self.catalog;
        map.serialize_entry("category", &c.category)?;
        map.serialize_entry("require", &c.require)?;
        map.serialize_entry("license", &c.license)?;
        map.serialize_entry("url", &c.url)?;
        map.serialize_entry("description", &c.description)?;
        map.end()
    }
}

/// Build the record for the project living in `project_dir`.
pub fn assemble(slug: &Slug, project_dir: &Path) -> MetaResult<MetaRecord> {
    let mut entries = Vec::new();
    for locale in detect_locales(slug, project_dir) {
        let html = slug.html_file(locale);
        let title = extract_title(&project_dir.join(&html))?;
        if title.name().is_none() {
            warn!(%slug, %locale, "page has no title");
        }
        entries.push(LocaleEntry {
            locale,
            name: title.name().map(ToOwned::to_owned),
            banner: slug.banner_file(),
            html,
        });
    }

    Ok(MetaRecord {
        slug: slug.clone(),
        entries,
        catalog: catalog_defaults(),
    })
}
