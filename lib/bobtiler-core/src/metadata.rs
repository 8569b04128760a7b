use serde::{Deserialize, Serialize};

/// Descriptive payload attached to a window container. The layout tree stores
/// and returns it but never looks inside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub name: String,
    pub url: String,
    pub id: i64,
    pub width: u32,
    pub height: u32,
    pub focus: bool,
    pub halted: bool,
}

impl Metadata {
    pub fn new(name: impl Into<String>, id: i64) -> Self {
        Self {
            name: name.into(),
            id,
            focus: true,
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn toggle_focus(&mut self) {
        self.focus = !self.focus;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let metadata = Metadata::new("Root Tab", 1);
        assert_eq!(metadata.name, "Root Tab");
        assert_eq!(metadata.id, 1);
        assert!(metadata.focus);
        assert!(!metadata.halted);
        assert!(metadata.url.is_empty());
    }

    #[test]
    fn test_builders() {
        let metadata = Metadata::new("Docs", 7)
            .with_url("https://docs.rs")
            .with_size(800, 600);
        assert_eq!(metadata.url, "https://docs.rs");
        assert_eq!(metadata.width, 800);
        assert_eq!(metadata.height, 600);
    }

    #[test]
    fn test_toggle_focus() {
        let mut metadata = Metadata::new("Tab", 2);
        metadata.toggle_focus();
        assert!(!metadata.focus);
        metadata.toggle_focus();
        assert!(metadata.focus);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let metadata: Metadata = serde_yaml::from_str("name: Tab\nid: 3\n").unwrap();
        assert_eq!(metadata.name, "Tab");
        assert_eq!(metadata.id, 3);
        assert_eq!(metadata.width, 0);
        assert!(!metadata.focus);
    }
}
