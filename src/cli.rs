use anyhow::{Context, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Csv,
    Youtube,
    Facebook,
    Instagram,
    X,
    Linkedin,
}

impl InputMode {
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(InputMode::Csv),
            "2" => Some(InputMode::Youtube),
            "3" => Some(InputMode::Facebook),
            "4" => Some(InputMode::Instagram),
            "5" => Some(InputMode::X),
            "6" => Some(InputMode::Linkedin),
            _ => None,
        }
    }

    fn source_prompt(&self) -> &'static str {
        match self {
            InputMode::Csv => "Enter the path to your CSV file: ",
            InputMode::Youtube => "Enter YouTube video URL: ",
            InputMode::Facebook => "Enter Facebook post URL: ",
            InputMode::Instagram => "Enter Instagram post URL: ",
            InputMode::X => "Enter X/Twitter post URL: ",
            InputMode::Linkedin => "Enter LinkedIn post URL: ",
        }
    }
}

/// What the user asked to analyse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub mode: InputMode,
    pub source: String,
    pub max_results: u32,
}

const MENU: &str = "\
Social Media Comment Analyzer
Analyze comments from social media platforms or a CSV file.
Supported platforms: YouTube, Facebook, Instagram, X/Twitter, LinkedIn

Choose an option:
  1. Analyze comments from a CSV file
  2. Analyze comments from a YouTube URL
  3. Analyze comments from a Facebook URL
  4. Analyze comments from an Instagram URL
  5. Analyze comments from an X/Twitter URL
  6. Analyze comments from a LinkedIn URL
";

/// Runs the interactive menu. Invalid choices are asked again; end of input
/// is an error.
pub fn prompt_request<R: BufRead, W: Write>(input: &mut R, output: &mut W, default_max: u32) -> Result<Request> {
    writeln!(output, "{}", MENU)?;

    let mode = loop {
        let choice = ask(input, output, "Enter your choice (1-6): ")?;
        match InputMode::from_choice(&choice) {
            Some(mode) => break mode,
            None => writeln!(output, "Invalid choice. Please enter a number between 1 and 6.")?,
        }
    };

    let source = ask(input, output, mode.source_prompt())?;

    let max_results = if mode == InputMode::Csv {
        default_max
    } else {
        let prompt = format!("Maximum comments to fetch [{}]: ", default_max);
        let answer = ask(input, output, &prompt)?;
        match answer.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                if !answer.is_empty() {
                    writeln!(output, "Not a positive number, using {}.", default_max)?;
                }
                default_max
            }
        }
    };

    Ok(Request {
        mode,
        source,
        max_results,
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    if read == 0 {
        anyhow::bail!("No input provided");
    }
    Ok(line.trim().to_string())
}
