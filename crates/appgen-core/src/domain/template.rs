use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of the generated pair a template or artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Header,
    Source,
}

impl ArtifactKind {
    /// Write order: header first, then source.
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Header, ArtifactKind::Source];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Source => "source",
        }
    }

    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Header => "h",
            Self::Source => "c",
        }
    }

    /// `<stem>.<ext>`
    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed text blueprint with `sample`/`SAMPLE`/`Sample` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub kind: ArtifactKind,
    pub source: &'static str,
}

impl Template {
    pub const fn new(kind: ArtifactKind, source: &'static str) -> Self {
        Self { kind, source }
    }

    pub fn as_str(&self) -> &'static str {
        self.source
    }
}

/// The header and source templates used for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSet {
    pub header: Template,
    pub source: Template,
}

impl TemplateSet {
    pub const fn new(header: &'static str, source: &'static str) -> Self {
        Self {
            header: Template::new(ArtifactKind::Header, header),
            source: Template::new(ArtifactKind::Source, source),
        }
    }

    pub fn get(&self, kind: ArtifactKind) -> &Template {
        match kind {
            ArtifactKind::Header => &self.header,
            ArtifactKind::Source => &self.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions() {
        assert_eq!(ArtifactKind::Header.extension(), "h");
        assert_eq!(ArtifactKind::Source.extension(), "c");
        assert_eq!(ArtifactKind::Header.file_name("blink"), "blink.h");
    }

    #[test]
    fn header_is_written_first() {
        assert_eq!(ArtifactKind::ALL[0], ArtifactKind::Header);
    }

    #[test]
    fn template_set_lookup_by_kind() {
        let set = TemplateSet::new("H sample", "C sample");
        assert_eq!(set.get(ArtifactKind::Header).as_str(), "H sample");
        assert_eq!(set.get(ArtifactKind::Source).kind, ArtifactKind::Source);
    }
}
