use crate::error::IdentifyError;
use crate::image_identifier::main::ImageIdentifier;
use crate::image_source::interface::ImageSelection;
use std::io::BufRead;
use std::path::PathBuf;

pub const HELP: &str = "commands: upload [path] | url <text> | identify | recent <n> | load | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Upload(Vec<PathBuf>),
    Url(String),
    Identify,
    /// 1-based position in the recent images list.
    Recent(usize),
    Load,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name {
        "upload" if rest.is_empty() => Ok(ConsoleCommand::Upload(vec![])),
        "upload" => Ok(ConsoleCommand::Upload(vec![PathBuf::from(rest)])),
        "url" => Ok(ConsoleCommand::Url(rest.to_string())),
        "identify" => Ok(ConsoleCommand::Identify),
        "recent" => rest
            .parse::<usize>()
            .ok()
            .filter(|position| *position > 0)
            .map(ConsoleCommand::Recent)
            .ok_or_else(|| format!("recent expects a position starting at 1, got `{}`", rest)),
        "load" => Ok(ConsoleCommand::Load),
        "help" | "" => Ok(ConsoleCommand::Help),
        "quit" | "exit" => Ok(ConsoleCommand::Quit),
        other => Err(format!("unknown command `{}`", other)),
    }
}

/// Feeds commands read from `input` to `identifier` until `quit` or end of
/// input.
pub fn run_console_input<R: BufRead>(
    identifier: &ImageIdentifier,
    input: R,
) -> Result<(), IdentifyError> {
    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };

        match parse_command(&line) {
            Ok(ConsoleCommand::Upload(files)) => {
                identifier.select_image(ImageSelection::Files(files))
            }
            Ok(ConsoleCommand::Url(url)) => identifier.select_image(ImageSelection::Url(url)),
            Ok(ConsoleCommand::Identify) => identifier.classify_current_image(),
            Ok(ConsoleCommand::Recent(position)) => {
                let state = identifier.snapshot();
                match state.history.entries().get(position - 1) {
                    Some(image) => identifier.select_from_history(image.clone()),
                    None => println!("no recent image at position {}", position),
                }
            }
            Ok(ConsoleCommand::Load) => identifier.request_model_load(),
            Ok(ConsoleCommand::Help) => println!("{}", HELP),
            Ok(ConsoleCommand::Quit) => break,
            Err(message) => println!("{}\n{}", message, HELP),
        }
    }

    Ok(())
}
