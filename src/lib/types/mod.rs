//! Shared data types for the metadata builder.
//! Implemented as newtypes to enforce invariants.

use std::{ffi::OsStr, fmt};

use crate::config::{BANNER_EXT, HTML_EXT};

/// A project's directory name, used as its identifier in every derived filename.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(String);

impl Slug {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn from_os(raw: &OsStr) -> Option<Self> {
        raw.to_str().and_then(Self::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<slug>-<locale>.html`
    pub fn html_file(&self, locale: Locale) -> String {
        format!("{}-{}.{HTML_EXT}", self.0, locale.code())
    }

    /// `<slug>.png`
    pub fn banner_file(&self) -> String {
        format!("{}.{BANNER_EXT}", self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Language variants a project page may be published in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    Es,
    En,
    Ca,
}

impl Locale {
    /// Detection and output order.
    pub const ALL: [Locale; 3] = [Locale::Es, Locale::En, Locale::Ca];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
            Locale::Ca => "ca",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests;
