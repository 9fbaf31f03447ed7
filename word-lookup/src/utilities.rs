use std::io::{self, Write};

/// Reads one line after printing `prompt`, `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

pub fn str_to_bool(str: &str) -> Option<bool> {
    match &str.trim().to_ascii_lowercase()[..] {
        "y" | "yes" | "yeah" | "yea" | "true" | "on" => Some(true),
        "n" | "no" | "nope" | "false" | "off" => Some(false),
        _ => None,
    }
}
