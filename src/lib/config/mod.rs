pub const OUTPUT_DIR: &str = "output";
pub const META_FILE: &str = "meta.json";
pub const BANNER_EXT: &str = "png";
pub const HTML_EXT: &str = "html";

// Catalog fields shared by every project.
pub const CATEGORY: &str = "physics";
pub const REQUIRE: &str = "";
pub const LICENSE: &str = "Apache-2.0";
pub const REPOSITORY_URL: &str = "https://github.com/myphysicslab/myphysicslab";
pub const DESCRIPTION: &str = "Real-time interactive animated physics simulations";

/// Convenience container for the fixed catalog fields of a metadata record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogDefaults {
    pub category: String,
    pub require: String,
    pub license: String,
    pub url: String,
    pub description: String,
}

pub fn catalog_defaults() -> CatalogDefaults {
    CatalogDefaults {
        category: CATEGORY.to_string(),
        require: REQUIRE.to_string(),
        license: LICENSE.to_string(),
        url: REPOSITORY_URL.to_string(),
        description: DESCRIPTION.to_string(),
    }
}
