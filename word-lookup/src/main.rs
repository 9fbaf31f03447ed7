use audio::{audio_for, entry_number, AudioPlayer};
use clap::Parser;
use commands::{Command, HELP};
use config::Cli;
use dictionary::Dictionary;
use header::{Font, Header};
use render::render;
use search::{Search, SearchOutcome};
use tracing_subscriber::EnvFilter;
use utilities::{input, str_to_bool};

mod audio;
mod commands;
mod config;
mod header;
mod render;
mod search;
mod utilities;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_filter);

    let one_shot = cli.one_shot_query();
    let dict = Dictionary::with_base_url(cli.api_url);
    let mut header = Header::new(cli.font, cli.dark);
    let mut search = Search::default();
    let player = AudioPlayer::new(cli.player);

    // a failed one-shot lookup prints nothing and still exits successfully
    if let Some(query) = one_shot {
        search.set_input(query);
        define_word(&dict, &header, &mut search).await;
        return Ok(());
    }

    while let Some(line) = input(">> ")? {
        let Some(command) = commands::parse(&line) else {
            continue;
        };
        match command {
            Command::Quit => {
                break;
            }
            Command::Define(text) => {
                search.set_input(text);
                define_word(&dict, &header, &mut search).await;
            }
            Command::Font(None) => {
                println!("{}", header.font_menu());
            }
            Command::Font(Some(name)) => match Font::parse(name) {
                Some(font) => {
                    header.set_font(font);
                    show(&header, &search);
                }
                None => {
                    println!("Unknown font {name}, pick one of:\n{}", header.font_menu());
                }
            },
            Command::Dark(None) => {
                header.toggle_dark_mode();
                show(&header, &search);
            }
            Command::Dark(Some(value)) => match str_to_bool(value) {
                Some(dark_mode) => {
                    header.set_dark_mode(dark_mode);
                    show(&header, &search);
                }
                None => {
                    println!("Expected on or off, got {value}.");
                }
            },
            Command::Play(argument) => {
                play(&player, &search, argument).await;
            }
            Command::Show => {
                show(&header, &search);
            }
            Command::Help => {
                println!("{HELP}");
            }
            Command::Unknown { command, suggestion } => match suggestion {
                Some(suggestion) => {
                    println!("Unknown command {command}. Did you mean {suggestion}?");
                }
                None => {
                    println!("Unknown command {command}. Type help for a list of commands.");
                }
            },
        }
    }
    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn define_word(dict: &Dictionary, header: &Header, search: &mut Search) {
    match search.submit(dict).await {
        SearchOutcome::Rejected | SearchOutcome::Replaced(_) => show(header, search),
        // failures stay silent, the previous results are still on screen
        SearchOutcome::Unchanged => {}
    }
}

fn show(header: &Header, search: &Search) {
    let output = render(search, &header.palette());
    if !output.is_empty() {
        println!("{output}");
    }
}

async fn play(player: &AudioPlayer, search: &Search, argument: Option<&str>) {
    let Some(number) = entry_number(argument) else {
        println!("{} is not a result number.", argument.unwrap_or_default());
        return;
    };
    match audio_for(search.results(), number) {
        Some(url) => {
            if let Err(error) = player.play(url).await {
                eprintln!("{error:#}");
            }
        }
        None => {
            println!("Result {number} has no audio.");
        }
    }
}
