use clap::ValueEnum;
use console::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Font {
    #[default]
    Sans,
    Serif,
    Mono,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::Sans, Font::Serif, Font::Mono];

    pub fn name(self) -> &'static str {
        match self {
            Font::Sans => "Sans",
            Font::Serif => "Serif",
            Font::Mono => "Mono",
        }
    }

    /// Case-insensitive, accepts `sans`, `serif` and `mono`.
    pub fn parse(name: &str) -> Option<Font> {
        <Font as ValueEnum>::from_str(name.trim(), true).ok()
    }

    // a terminal can't switch typefaces, so each font maps to text attributes
    fn style(self) -> Style {
        match self {
            Font::Sans => Style::new(),
            Font::Serif => Style::new().italic(),
            Font::Mono => Style::new().dim(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Header {
    font: Font,
    dark_mode: bool,
}

impl Header {
    pub fn new(font: Font, dark_mode: bool) -> Self {
        Self { font, dark_mode }
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
    }

    /// Flips dark mode and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn font_menu(&self) -> String {
        Font::ALL
            .iter()
            .map(|&font| {
                let marker = if font == self.font { '*' } else { ' ' };
                format!("  {marker} {}", font.name())
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.font(), self.dark_mode())
    }
}

#[derive(Debug, Clone)]
pub struct Palette {
    pub heading: Style,
    pub text: Style,
    pub accent: Style,
    pub muted: Style,
    pub error: Style,
}

impl Palette {
    pub fn new(font: Font, dark_mode: bool) -> Self {
        let base = font.style();
        let text = if dark_mode {
            base.clone().white()
        } else {
            base.clone().color256(236)
        };
        Self {
            heading: text.clone().bold(),
            text,
            accent: base.clone().color256(135),
            muted: base.clone().color256(244),
            error: base.color256(203),
        }
    }

    pub fn force_styling(self, enabled: bool) -> Self {
        Self {
            heading: self.heading.force_styling(enabled),
            text: self.text.force_styling(enabled),
            accent: self.accent.force_styling(enabled),
            muted: self.muted.force_styling(enabled),
            error: self.error.force_styling(enabled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fonts_parse_case_insensitively() {
        assert_eq!(Font::parse("serif"), Some(Font::Serif));
        assert_eq!(Font::parse("MONO"), Some(Font::Mono));
        assert_eq!(Font::parse(" Sans "), Some(Font::Sans));
        assert_eq!(Font::parse("comic"), None);
    }

    #[test]
    fn header_starts_in_sans_light_mode() {
        let header = Header::default();
        assert_eq!(header.font(), Font::Sans);
        assert!(!header.dark_mode());
    }

    #[test]
    fn dark_mode_toggles_back_and_forth() {
        let mut header = Header::default();
        assert!(header.toggle_dark_mode());
        assert!(header.dark_mode());
        assert!(!header.toggle_dark_mode());
        header.set_dark_mode(true);
        assert!(header.dark_mode());
    }

    #[test]
    fn font_menu_marks_current_font() {
        let mut header = Header::default();
        header.set_font(Font::Mono);
        assert_eq!(header.font_menu(), "    Sans\n    Serif\n  * Mono");
    }

    #[test]
    fn unforced_palette_leaves_text_plain() {
        let palette = Header::new(Font::Serif, true).palette().force_styling(false);
        assert_eq!(palette.accent.apply_to("/ə/").to_string(), "/ə/");
        assert_eq!(palette.heading.apply_to("word").to_string(), "word");
    }

    #[test]
    fn forced_palette_emits_escape_codes() {
        let palette = Palette::new(Font::Sans, false).force_styling(true);
        let styled = palette.error.apply_to("oops").to_string();
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("oops"));
    }
}
