use indexmap::IndexMap;
use serde::Serialize;

/// The `package.json` written at the project root.
///
/// Field order matches the order keys appear in the generated file, and the map fields keep
/// insertion order through [`IndexMap`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub private: bool,
    pub version: String,
    pub r#type: String,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
}
impl PackageManifest {
    /// The manifest of the SpaceFurnio landing page.
    pub fn spacefurnio() -> Self {
        Self {
            name: "spacefurnio".to_string(),
            private: true,
            version: "0.0.0".to_string(),
            r#type: "module".to_string(),
            scripts: entries(&[
                ("dev", "vite"),
                ("build", "vite build"),
                ("preview", "vite preview"),
            ]),
            dependencies: entries(&[
                ("vue", "^3.4.0"),
                ("primevue", "^3.50.0"),
                ("primeicons", "^6.0.1"),
                ("aos", "^2.3.4"),
            ]),
            dev_dependencies: entries(&[
                ("@vitejs/plugin-vue", "^5.0.0"),
                ("autoprefixer", "^10.4.16"),
                ("postcss", "^8.4.32"),
                ("tailwindcss", "^3.4.0"),
                ("vite", "^5.0.0"),
            ]),
        }
    }
    /// Renders the manifest as two-space indented JSON, without a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn entries(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = r#"{
  "name": "spacefurnio",
  "private": true,
  "version": "0.0.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "vue": "^3.4.0",
    "primevue": "^3.50.0",
    "primeicons": "^6.0.1",
    "aos": "^2.3.4"
  },
  "devDependencies": {
    "@vitejs/plugin-vue": "^5.0.0",
    "autoprefixer": "^10.4.16",
    "postcss": "^8.4.32",
    "tailwindcss": "^3.4.0",
    "vite": "^5.0.0"
  }
}"#;

    #[test]
    fn test_manifest_json_is_stable() {
        let json = PackageManifest::spacefurnio().to_json().unwrap();

        assert_eq!(json, EXPECTED);
    }

    #[test]
    fn test_manifest_keeps_dependency_order() {
        let manifest = PackageManifest::spacefurnio();
        let names: Vec<&str> = manifest.dependencies.keys().map(String::as_str).collect();

        assert_eq!(names, vec!["vue", "primevue", "primeicons", "aos"]);
    }

    #[test]
    fn test_manifest_uses_package_json_keys() {
        let json = PackageManifest::spacefurnio().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "module");
        assert_eq!(value["devDependencies"]["vite"], "^5.0.0");
        assert!(value.get("dev_dependencies").is_none());
    }
}
