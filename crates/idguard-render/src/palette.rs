/// Role of a console line; the palette decides how it looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Compliant,
    Error,
    Plain,
}

/// Escape sequences wrapped around styled lines.
///
/// Passed by value to the renderer; [`Palette::plain`] makes every style a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub compliant: &'static str,
    pub error: &'static str,
    pub reset: &'static str,
}

impl Palette {
    /// Green for compliant files, red for errors and skips.
    pub const fn ansi() -> Self {
        Palette {
            compliant: "\x1b[32m",
            error: "\x1b[31m",
            reset: "\x1b[0m",
        }
    }

    pub const fn plain() -> Self {
        Palette {
            compliant: "",
            error: "",
            reset: "",
        }
    }

    pub fn paint(&self, style: Style, text: &str) -> String {
        let open = match style {
            Style::Compliant => self.compliant,
            Style::Error => self.error,
            Style::Plain => "",
        };
        if open.is_empty() {
            text.to_string()
        } else {
            format!("{open}{text}{}", self.reset)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_never_adds_escapes() {
        let p = Palette::plain();
        for style in [Style::Compliant, Style::Error, Style::Plain] {
            assert_eq!(p.paint(style, "Compliant: a.yaml"), "Compliant: a.yaml");
        }
    }

    #[test]
    fn ansi_palette_wraps_text_unchanged() {
        let p = Palette::ansi();
        assert_eq!(
            p.paint(Style::Compliant, "Compliant: a.yaml"),
            "\x1b[32mCompliant: a.yaml\x1b[0m"
        );
        assert_eq!(p.paint(Style::Error, "Error: x"), "\x1b[31mError: x\x1b[0m");
        assert_eq!(p.paint(Style::Plain, "summary"), "summary");
    }
}
