//! A module containing the command-line arguments, parsed by [`clap`].
//!
//! [`clap`]: clap

use clap::{Args, Parser, Subcommand};

use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "trains", version, about = "Keeps a list of train departures")]
pub struct Options {
    #[command(subcommand)]
    pub subcmd: SubCmd,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SubCmd {
    #[command(about = "Add a new train")]
    Add(AddParameters),
    #[command(about = "Display all trains")]
    Display(FileParameters),
    #[command(about = "Select trains by destination")]
    Select(SelectParameters),
}

impl SubCmd {
    pub fn file(&self) -> &FileParameters {
        match self {
            Self::Add(param) => &param.file,
            Self::Display(file) => file,
            Self::Select(param) => &param.file,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct FileParameters {
    #[arg(long, help = "The data file name (default: $TRAINS_DATA)")]
    pub data: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct AddParameters {
    #[command(flatten)]
    pub file: FileParameters,

    #[arg(
        short = 'n',
        long,
        allow_negative_numbers = true,
        help = "The number of a train"
    )]
    pub number: i64,

    #[arg(short = 'd', long, help = "Destination point")]
    pub destination: String,

    // `-st` is rewritten to this by `normalize_args`
    #[arg(long = "start_time", help = "Depart time (short: -st)")]
    pub start_time: String,
}

#[derive(Debug, Args, Clone)]
pub struct SelectParameters {
    #[command(flatten)]
    pub file: FileParameters,

    #[arg(short = 'D', long, help = "The required destination")]
    pub dest: String,
}

/// Rewrites the two-letter `-st` flag, which clap can't express, into `--start_time`.
///
/// The value may follow as a separate argument, after `=`, or attached (`-st10:00`).
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-st") => OsString::from("--start_time"),
            Some(s) if s.starts_with("-st") => {
                let value = &s["-st".len()..];
                let value = value.strip_prefix('=').unwrap_or(value);

                OsString::from(format!("--start_time={}", value))
            }
            _ => arg,
        })
        .collect()
}

impl Options {
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}
