//! Literal placeholder substitution renderer.

use appgen_core::{
    application::ports::TemplateRenderer,
    domain::{CaseVariants, Template},
    error::AppgenResult,
};
use tracing::instrument;

/// Renderer that replaces `sample`, `SAMPLE` and `Sample` with the case
/// variants, in that order, over the whole template.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(kind = %template.kind))]
    fn render(&self, template: &Template, variants: &CaseVariants) -> AppgenResult<String> {
        Ok(variants.substitute(template.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_templates::lvgl_app;
    use appgen_core::domain::{AppName, ArtifactKind};

    fn render(kind: ArtifactKind, name: &str) -> String {
        SimpleRenderer::new()
            .render(lvgl_app().get(kind), &AppName::new(name).variants())
            .unwrap()
    }

    #[test]
    fn header_for_blink() {
        let h = render(ArtifactKind::Header, "blink");
        assert!(h.contains("#ifndef _BLINK_APP_H"));
        assert!(h.contains("#ifdef ENABLE_APP_BLINK"));
        assert!(h.contains("void blink_screen_init(void);"));
        assert!(h.contains(" * @file blink.h"));
        assert!(h.contains(" * @brief Blink app for C3 UI"));
    }

    #[test]
    fn source_for_blink() {
        let c = render(ArtifactKind::Source, "blink");
        assert!(c.contains(
            r#"REGISTER_APP("Blink App", NULL, blink_screen_main, blink_screen_init);"#
        ));
        assert!(c.contains(r#"#include "blink.h""#));
        assert!(c.contains(r#""Hello world!\nBlink App""#));
    }

    #[test]
    fn no_placeholder_survives() {
        for kind in ArtifactKind::ALL {
            let out = render(kind, "Timer");
            assert!(!out.contains("sample"));
            assert!(!out.contains("SAMPLE"));
            assert!(!out.contains("Sample"));
        }
    }

    #[test]
    fn uppercase_name_stays_uppercase_when_capitalized() {
        let c = render(ArtifactKind::Source, "FOO");
        assert!(c.contains(r#"REGISTER_APP("FOO App", NULL, foo_screen_main, foo_screen_init);"#));
    }
}
