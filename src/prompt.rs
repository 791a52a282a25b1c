use dialoguer::{Confirm, Input, Select};
use log::warn;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::Result;
use crate::namer::{GenerationRequest, JoinStyle, EXTENSIONS, SEPARATORS};

fn separator_label(sep: &str) -> &str {
    if sep.is_empty() { "(none)" } else { sep }
}

/// Ask the four questions in order and build the request from the answers.
pub fn run_interactive() -> Result<GenerationRequest> {
    if io::stdin().is_terminal() {
        ask_terminal()
    } else {
        let stdin = io::stdin();
        let mut out = io::stdout();
        ask_lines(&mut stdin.lock(), &mut out)
    }
}

fn ask_terminal() -> Result<GenerationRequest> {
    // Empty input is rejected and re-prompted by dialoguer
    let text: String = Input::new().with_prompt("Enter text for filename:").interact_text()?;

    let ext_idx = Select::new()
        .with_prompt("Choose file extension:")
        .items(&EXTENSIONS)
        .default(0)
        .interact()?;

    let labels: Vec<&str> = SEPARATORS.iter().map(|s| separator_label(*s)).collect();
    let sep_idx = Select::new()
        .with_prompt("Choose word separator:")
        .items(&labels)
        .default(0)
        .interact()?;

    let keep_numbers = Confirm::new()
        .with_prompt("Keep numbers in filename?")
        .default(false)
        .interact()?;

    Ok(GenerationRequest::new(
        text,
        EXTENSIONS[ext_idx],
        JoinStyle::from_choice(SEPARATORS[sep_idx]),
        keep_numbers,
    ))
}

// Plain line based fallback when stdin is not a TTY.
fn ask_lines<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<GenerationRequest> {
    let text = loop {
        writeln!(out, "Enter text for filename:")?;
        let line = read_answer(input)?;
        if !line.is_empty() {
            break line;
        }
        writeln!(out, "Value is required")?;
    };

    let ext = pick(input, out, "Choose file extension:", &EXTENSIONS)?;
    let sep = pick(input, out, "Choose word separator:", &SEPARATORS)?;

    writeln!(out, "Keep numbers in filename? (y/n, default: n)")?;
    let answer = read_answer(input)?.trim().to_ascii_lowercase();
    let keep_numbers = answer.starts_with('y');

    Ok(GenerationRequest::new(text, ext, JoinStyle::from_choice(sep), keep_numbers))
}

fn pick<'a, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    options: &[&'a str],
) -> Result<&'a str> {
    let default = options[0];
    writeln!(out, "{}", prompt)?;
    for (i, opt) in options.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, separator_label(opt))?;
    }
    writeln!(out, "Enter value (default: {})", separator_label(default))?;
    let answer = read_answer(input)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    if let Some(opt) = options.iter().find(|o| **o == answer) {
        return Ok(*opt);
    }
    if let Some(opt) = answer.parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| options.get(i)) {
        return Ok(*opt);
    }
    warn!("invalid choice {:?} for {:?}, using default", answer, prompt);
    eprintln!("Invalid value, using default.");
    Ok(default)
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed").into());
    }
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}
