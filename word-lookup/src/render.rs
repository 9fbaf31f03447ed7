use dictionary::{Entry, License, Meaning, PartOfSpeech};

use crate::header::Palette;
use crate::search::Search;

pub const EMPTY_QUERY_MESSAGE: &str = "Whoops, can't be empty…";
const SEPARATOR: &str = "----------------------------------------";

/// The parts of an entry that get displayed.
#[derive(Debug)]
pub struct EntryView<'a> {
    pub word: &'a str,
    /// Text of the second phonetic; the first one is expected to hold the audio.
    pub phonetic_text: Option<&'a str>,
    pub audio: Option<&'a str>,
    pub nouns: Vec<&'a Meaning>,
    pub verbs: Vec<&'a Meaning>,
    pub source_urls: &'a [String],
    pub license: Option<&'a License>,
}

impl<'a> EntryView<'a> {
    pub fn new(entry: &'a Entry) -> Self {
        let of_kind = move |kind: PartOfSpeech| {
            entry
                .meanings
                .iter()
                .filter(|meaning| meaning.part_of_speech == kind)
                .collect::<Vec<&Meaning>>()
        };
        Self {
            word: &entry.word,
            phonetic_text: entry.phonetics.get(1).and_then(|phonetic| phonetic.text.as_deref()),
            audio: entry.phonetics.first().and_then(|phonetic| phonetic.audio.as_deref()),
            nouns: of_kind(PartOfSpeech::Noun),
            verbs: of_kind(PartOfSpeech::Verb),
            source_urls: &entry.source_urls,
            license: entry.license.as_ref(),
        }
    }
}

/// The whole result area: the empty-query error, then every stored entry.
pub fn render(search: &Search, palette: &Palette) -> String {
    let mut lines = Vec::new();
    if search.has_error() {
        lines.push(palette.error.apply_to(EMPTY_QUERY_MESSAGE).to_string());
    }
    for (index, entry) in search.results().iter().enumerate() {
        if index != 0 || search.has_error() {
            lines.push(palette.muted.apply_to(SEPARATOR).to_string());
        }
        entry_lines(&mut lines, index + 1, &EntryView::new(entry), palette);
    }
    lines.join("\n")
}

fn entry_lines(lines: &mut Vec<String>, number: usize, view: &EntryView, palette: &Palette) {
    lines.push(palette.heading.apply_to(view.word).to_string());
    if let Some(text) = view.phonetic_text {
        lines.push(palette.accent.apply_to(text).to_string());
    }
    if view.audio.is_some() {
        lines.push(palette.accent.apply_to(format!("[> play {number}]")).to_string());
    }
    for meaning in &view.nouns {
        lines.push(String::new());
        meaning_lines(lines, meaning, Grouping::Noun, palette);
    }
    for meaning in &view.verbs {
        lines.push(String::new());
        meaning_lines(lines, meaning, Grouping::Verb, palette);
    }
    if !view.source_urls.is_empty() {
        lines.push(String::new());
        lines.push(palette.muted.apply_to("Source").to_string());
        for url in view.source_urls {
            lines.push(format!("  {}", palette.text.apply_to(url).underlined()));
        }
        if let Some(license) = view.license {
            lines.push(format!(
                "{} {} ({})",
                palette.muted.apply_to("License"),
                palette.text.apply_to(&license.name),
                palette.text.apply_to(&license.url).underlined()
            ));
        }
    }
}

// nouns list synonyms and show examples as-is, verbs quote their examples and skip synonyms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    Noun,
    Verb,
}

fn meaning_lines(lines: &mut Vec<String>, meaning: &Meaning, grouping: Grouping, palette: &Palette) {
    lines.push(palette.heading.apply_to(&meaning.part_of_speech).italic().to_string());
    lines.push(palette.muted.apply_to("Meaning").to_string());
    for definition in &meaning.definitions {
        lines.push(format!(
            "  {} {}",
            palette.accent.apply_to("•"),
            palette.text.apply_to(&definition.definition)
        ));
        if let Some(example) = &definition.example {
            let example = match grouping {
                Grouping::Noun => example.clone(),
                Grouping::Verb => format!("\"{example}\""),
            };
            lines.push(format!("    {}", palette.muted.apply_to(example)));
        }
    }
    if grouping == Grouping::Noun && !meaning.synonyms.is_empty() {
        lines.push(format!(
            "{} {}",
            palette.muted.apply_to("Synonyms"),
            palette.accent.apply_to(meaning.synonyms.join(", ")).bold()
        ));
    }
}
