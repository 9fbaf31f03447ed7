use clap::Parser;

use crate::header::Font;

#[derive(Parser, Debug)]
#[command(name = "word-lookup")]
#[command(about = "Looks words up in the free dictionary API", long_about = None)]
pub struct Cli {
    /// Word to look up once; starts the interactive prompt when left out
    pub word: Vec<String>,

    #[arg(short, long, value_enum, default_value_t = Font::Sans)]
    pub font: Font,

    /// Start in dark mode
    #[arg(short, long)]
    pub dark: bool,

    #[arg(long = "api-url", env = "DICTIONARY_API_URL", default_value = dictionary::DEFAULT_API_URL)]
    pub api_url: String,

    /// Program that plays pronunciation audio, given its url
    #[arg(long, env = "DICTIONARY_AUDIO_PLAYER", default_value = "mpv")]
    pub player: String,

    /// tracing filter, e.g. `warn` or `dictionary=debug`
    #[arg(long = "log", env = "DICTIONARY_LOG", default_value = "error")]
    pub log_filter: String,
}

impl Cli {
    /// The positional words joined by single spaces, `None` when there are none.
    pub fn one_shot_query(&self) -> Option<String> {
        (!self.word.is_empty()).then(|| self.word.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["word-lookup"]).unwrap();
        assert!(cli.word.is_empty());
        assert_eq!(cli.one_shot_query(), None);
        assert_eq!(cli.font, Font::Sans);
        assert!(!cli.dark);
        assert_eq!(cli.player, "mpv");
    }

    #[test]
    fn one_shot_words_and_flags() {
        let cli = Cli::try_parse_from([
            "word-lookup",
            "--font",
            "serif",
            "-d",
            "--api-url",
            "http://localhost:9000/entries",
            "ice",
            "cream",
        ])
        .unwrap();
        assert_eq!(cli.word, ["ice", "cream"]);
        assert_eq!(cli.one_shot_query().as_deref(), Some("ice cream"));
        assert_eq!(cli.font, Font::Serif);
        assert!(cli.dark);
        assert_eq!(cli.api_url, "http://localhost:9000/entries");
    }

    #[test]
    fn unknown_font_is_rejected() {
        assert!(Cli::try_parse_from(["word-lookup", "--font", "comic"]).is_err());
    }
}
