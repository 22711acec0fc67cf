//! The fixed SpaceFurnio project skeleton.
//!
//! Every static file is embedded at compile time from `templates/`, which mirrors the layout of
//! the generated project. Only `package.json` is produced at runtime, from [`PackageManifest`].

use crate::{
    errors::ManifestError,
    manifest::PackageManifest,
    vfs::{FileSpec, VirtualFS},
};

pub const MANIFEST_PATH: &str = "package.json";

/// Directories created before any file is written.
pub const DIRECTORIES: [&str; 2] = ["src/components", "src/composables"];

// =============================================================================
// Embedded Templates - build tooling
// =============================================================================

mod tooling {
    pub const VITE_CONFIG: &str = include_str!("../templates/vite.config.js");
    pub const TAILWIND_CONFIG: &str = include_str!("../templates/tailwind.config.js");
    pub const POSTCSS_CONFIG: &str = include_str!("../templates/postcss.config.js");
    pub const INDEX_HTML: &str = include_str!("../templates/index.html");
    pub const README: &str = include_str!("../templates/README.md");
}

// =============================================================================
// Embedded Templates - application
// =============================================================================

mod app {
    pub const MAIN_JS: &str = include_str!("../templates/src/main.js");
    pub const STYLE_CSS: &str = include_str!("../templates/src/style.css");
    pub const APP_VUE: &str = include_str!("../templates/src/App.vue");

    // Components
    pub const NAVIGATION: &str = include_str!("../templates/src/components/Navigation.vue");
    pub const BRANDING_SECTION: &str =
        include_str!("../templates/src/components/BrandingSection.vue");
    pub const NEW_ARRIVALS_SECTION: &str =
        include_str!("../templates/src/components/NewArrivalsSection.vue");
    pub const TAGLINES_SECTION: &str =
        include_str!("../templates/src/components/TaglinesSection.vue");
    pub const PROJECT_HIGHLIGHTS: &str =
        include_str!("../templates/src/components/ProjectHighlights.vue");
    pub const FOOTER_SECTION: &str = include_str!("../templates/src/components/FooterSection.vue");

    // Composables
    pub const USE_SCROLL_ANIMATIONS: &str =
        include_str!("../templates/src/composables/useScrollAnimations.js");
    pub const USE_PARALLAX: &str = include_str!("../templates/src/composables/useParallax.js");
}

/// Stages the whole project: both directories and all files, in write order.
///
/// # Errors
///
/// Returns a [`ManifestError`] if `package.json` cannot be serialized.
pub fn project_files() -> Result<VirtualFS, ManifestError> {
    let manifest = PackageManifest::spacefurnio()
        .to_json()
        .map_err(|error| ManifestError::new(MANIFEST_PATH.into(), error))?;

    let vfs = DIRECTORIES
        .into_iter()
        .fold(VirtualFS::new(), |vfs, dir| vfs.with_directory(dir));

    Ok(vfs
        .with_file(FileSpec::new(MANIFEST_PATH, manifest))
        .with_file(FileSpec::new("vite.config.js", tooling::VITE_CONFIG))
        .with_file(FileSpec::new("tailwind.config.js", tooling::TAILWIND_CONFIG))
        .with_file(FileSpec::new("postcss.config.js", tooling::POSTCSS_CONFIG))
        .with_file(FileSpec::new("index.html", tooling::INDEX_HTML))
        .with_file(FileSpec::new("src/main.js", app::MAIN_JS))
        .with_file(FileSpec::new("src/style.css", app::STYLE_CSS))
        .with_file(FileSpec::new("src/App.vue", app::APP_VUE))
        .with_file(FileSpec::new(
            "src/components/Navigation.vue",
            app::NAVIGATION,
        ))
        .with_file(FileSpec::new(
            "src/components/BrandingSection.vue",
            app::BRANDING_SECTION,
        ))
        .with_file(FileSpec::new(
            "src/components/NewArrivalsSection.vue",
            app::NEW_ARRIVALS_SECTION,
        ))
        .with_file(FileSpec::new(
            "src/components/TaglinesSection.vue",
            app::TAGLINES_SECTION,
        ))
        .with_file(FileSpec::new(
            "src/components/ProjectHighlights.vue",
            app::PROJECT_HIGHLIGHTS,
        ))
        .with_file(FileSpec::new(
            "src/components/FooterSection.vue",
            app::FOOTER_SECTION,
        ))
        .with_file(FileSpec::new(
            "src/composables/useScrollAnimations.js",
            app::USE_SCROLL_ANIMATIONS,
        ))
        .with_file(FileSpec::new(
            "src/composables/useParallax.js",
            app::USE_PARALLAX,
        ))
        .with_file(FileSpec::new("README.md", tooling::README)))
}
