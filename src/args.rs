use log::debug;

use crate::error::{NamerError, Result};
use crate::namer::{GenerationRequest, JoinStyle, DEFAULT_EXTENSION, DEFAULT_SEPARATOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Interactive,
    Generate(GenerationRequest),
}

#[derive(Debug)]
struct Flags {
    text: String,
    ext: String,
    sep: String,
    keep_numbers: bool,
    help: bool,
    version: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Flags {
            text: String::new(),
            ext: DEFAULT_EXTENSION.to_string(),
            sep: DEFAULT_SEPARATOR.to_string(),
            keep_numbers: false,
            help: false,
            version: false,
        }
    }
}

/// Parse process arguments (program name excluded).
///
/// Flags take one or two dashes. Value flags accept `-t v` or `-t=v`;
/// bool flags accept `-flag` or `-flag=<bool>`. Parsing stops at the first
/// positional argument or `--`. With no arguments at all the interactive
/// session is selected.
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    if args.is_empty() {
        return Ok(Command::Interactive);
    }

    let mut flags = Flags::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--" || !arg.starts_with('-') || arg == "-" {
            break;
        }
        let body = arg.strip_prefix("--").unwrap_or_else(|| &arg[1..]);
        let (name, inline) = match body.split_once('=') {
            Some((n, v)) => (n, Some(v.to_string())),
            None => (body, None),
        };
        match name {
            "t" | "ext" | "sep" => {
                let value = match inline {
                    Some(v) => v,
                    None => iter
                        .next()
                        .ok_or_else(|| NamerError::Usage(format!("flag needs an argument: -{}", name)))?,
                };
                match name {
                    "t" => flags.text = value,
                    "ext" => flags.ext = value,
                    _ => flags.sep = value,
                }
            }
            "keep-numbers" => flags.keep_numbers = parse_bool(name, inline.as_deref())?,
            "help" | "h" => flags.help = parse_bool(name, inline.as_deref())?,
            "version" => flags.version = parse_bool(name, inline.as_deref())?,
            _ => return Err(NamerError::Usage(format!("flag provided but not defined: -{}", name))),
        }
    }
    debug!("parsed flags: {:?}", flags);

    if flags.help {
        return Ok(Command::Help);
    }
    if flags.version {
        return Ok(Command::Version);
    }
    if flags.text.is_empty() {
        return Err(NamerError::MissingInput);
    }
    Ok(Command::Generate(GenerationRequest::new(
        flags.text,
        flags.ext,
        JoinStyle::Separator(flags.sep),
        flags.keep_numbers,
    )))
}

fn parse_bool(name: &str, value: Option<&str>) -> Result<bool> {
    match value {
        None => Ok(true),
        Some("1" | "t" | "T" | "TRUE" | "true" | "True") => Ok(true),
        Some("0" | "f" | "F" | "FALSE" | "false" | "False") => Ok(false),
        Some(v) => Err(NamerError::Usage(format!(
            "invalid boolean value {:?} for -{}: parse error",
            v, name
        ))),
    }
}
