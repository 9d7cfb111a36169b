// Sitemap model

/// One server-defined sitemap: a named, hierarchical page of widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sitemap {
    name: String,
    label: String,
    link: Option<String>,
    homepage_link: Option<String>,
}

impl Sitemap {
    /// `label` falls back to `name` when the server reports none.
    pub fn new(
        name: impl Into<String>,
        label: Option<String>,
        link: Option<String>,
        homepage_link: Option<String>,
    ) -> Self {
        let name = name.into();
        let label = label.unwrap_or_else(|| name.clone());
        Self {
            name,
            label,
            link,
            homepage_link,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Link of the sitemap's homepage, the entry point for rendering.
    pub fn homepage_link(&self) -> Option<&str> {
        self.homepage_link.as_deref()
    }
}
