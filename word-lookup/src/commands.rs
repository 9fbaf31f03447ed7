#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    /// Search for the rest of the line, which may be empty.
    Define(&'a str),
    Font(Option<&'a str>),
    Dark(Option<&'a str>),
    Play(Option<&'a str>),
    Show,
    Help,
    Unknown {
        command: &'a str,
        suggestion: Option<&'static str>,
    },
}

const KNOWN_COMMANDS: &[&str] = &[
    "define", "find", "search", "font", "dark", "play", "show", "help", "exit", "quit",
];

pub const HELP: &str = "\
define <word>   look a word up (also: find, search)
font [name]     list fonts, or switch to sans, serif or mono
dark [on|off]   toggle dark mode, or set it
play [n]        play the pronunciation of result n (default 1)
show            print the current results again
help            show this message
quit            leave (also: exit, q)";

/// Splits a prompt line into a command, `None` for a blank line.
pub fn parse(line: &str) -> Option<Command<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    let argument = (!rest.is_empty()).then_some(rest);
    let command = match command {
        "exit" | "leave" | "quit" | "e" | "q" | "l" => Command::Quit,
        "define" | "find" | "search" => Command::Define(rest),
        "font" => Command::Font(argument),
        "dark" => Command::Dark(argument),
        "play" => Command::Play(argument),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        other => Command::Unknown {
            command: other,
            suggestion: suggest(other),
        },
    };
    Some(command)
}

fn suggest(command: &str) -> Option<&'static str> {
    let command = command.to_lowercase();
    KNOWN_COMMANDS
        .iter()
        .map(|&known| (known, strsim::jaro(known, &command)))
        .filter(|(_, similarity)| *similarity > 0.8)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(known, _)| known)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   \n"), None);
    }

    #[test]
    fn define_takes_the_rest_of_the_line() {
        assert_eq!(parse("define hello\n"), Some(Command::Define("hello")));
        assert_eq!(parse("find  ice cream "), Some(Command::Define("ice cream")));
        assert_eq!(parse("search"), Some(Command::Define("")));
    }

    #[test]
    fn arguments_are_optional() {
        assert_eq!(parse("font"), Some(Command::Font(None)));
        assert_eq!(parse("font serif"), Some(Command::Font(Some("serif"))));
        assert_eq!(parse("dark"), Some(Command::Dark(None)));
        assert_eq!(parse("dark off"), Some(Command::Dark(Some("off"))));
        assert_eq!(parse("play"), Some(Command::Play(None)));
        assert_eq!(parse("play 2"), Some(Command::Play(Some("2"))));
    }

    #[test]
    fn quit_has_aliases() {
        for line in ["exit", "leave", "quit", "e", "q", "l"] {
            assert_eq!(parse(line), Some(Command::Quit));
        }
        assert_eq!(parse("show"), Some(Command::Show));
        assert_eq!(parse("help"), Some(Command::Help));
    }

    #[test]
    fn near_misses_get_a_suggestion() {
        assert_eq!(
            parse("defne cat"),
            Some(Command::Unknown {
                command: "defne",
                suggestion: Some("define"),
            })
        );
        assert_eq!(
            parse("zzz"),
            Some(Command::Unknown {
                command: "zzz",
                suggestion: None,
            })
        );
    }
}
