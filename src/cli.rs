use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::internal::color::{Color, FormatOptions, LogOptions, Rgb};
use crate::internal::config::{LoggyConfig, VERSION};
use crate::internal::logger::{ConsoleLogger, DEFAULT_TYPE};

pub fn build_cli() -> Command {
    Command::new("loggy")
        .version(VERSION)
        .about("Print a colorized log line and mirror it to <program>.log")
        .arg(
            Arg::new("message")
                .required(true)
                .help("Message to log")
        )
        .arg(
            Arg::new("type")
                .long("type")
                .short('t')
                .default_value(DEFAULT_TYPE)
                .help("Log type (case-insensitive), e.g. MAIN, DEBUG, WARNING, ERROR")
        )
        .arg(flag("bold", "Bold message text"))
        .arg(flag("italic", "Italic message text"))
        .arg(flag("underline", "Underlined message text"))
        .arg(flag("strike", "Struck-through message text"))
        .arg(flag("no-prefix", "Omit the type label before the separator"))
        .arg(flag("no-dump", "Do not mirror the line to the log file"))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to a logger config file (yaml, toml, json, ...)")
        )
        .arg(
            Arg::new("set")
                .long("set")
                .action(ArgAction::Append)
                .value_name("NAME=COLOR")
                .help("Register or recolor a type; COLOR is #RRGGBB or R,G,B")
        )
        .arg(
            Arg::new("colorize")
                .long("colorize")
                .value_name("COLOR")
                .help("Print the message in COLOR only, without a log line or file write")
        )
}

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .action(ArgAction::SetTrue)
        .help(help)
}

/// Everything a single `loggy` run needs
#[derive(Debug, Clone)]
pub struct Invocation {
    pub message: String,
    pub log_type: String,
    pub options: LogOptions,
    pub config_path: Option<PathBuf>,
    pub no_dump: bool,
    pub overrides: Vec<(String, Color)>,
    pub colorize: Option<Color>,
}

/// Parse a color argument: hex (`#112233`, `112233`) or a triple (`17,34,51`)
pub fn parse_color_arg(value: &str) -> anyhow::Result<Color> {
    if value.contains(',') {
        let parts = value
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .with_context(|| format!("Invalid RGB triple: {}", value))?;
        return match parts.as_slice() {
            [r, g, b] => Ok(Color::Rgb(Rgb(*r, *g, *b))),
            _ => Err(anyhow!("RGB triple needs exactly three components: {}", value)),
        };
    }
    Ok(value.parse::<Color>()?)
}

pub fn parse_invocation(matches: &clap::ArgMatches) -> anyhow::Result<Invocation> {
    let message = matches
        .get_one::<String>("message")
        .cloned()
        .ok_or_else(|| anyhow!("message is required"))?;

    let log_type = matches
        .get_one::<String>("type")
        .cloned()
        .unwrap_or_else(|| DEFAULT_TYPE.to_string());

    let format = FormatOptions::new()
        .with_bold(matches.get_flag("bold"))
        .with_italic(matches.get_flag("italic"))
        .with_underline(matches.get_flag("underline"))
        .with_strike(matches.get_flag("strike"));
    let options = LogOptions::new()
        .with_prefix(!matches.get_flag("no-prefix"))
        .with_format(format);

    let overrides = matches
        .get_many::<String>("set")
        .into_iter()
        .flatten()
        .map(|entry| {
            let (name, color) = entry
                .split_once('=')
                .ok_or_else(|| anyhow!("Expected NAME=COLOR, got: {}", entry))?;
            Ok((name.to_string(), parse_color_arg(color)?))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let colorize = matches
        .get_one::<String>("colorize")
        .map(|c| parse_color_arg(c))
        .transpose()?;

    Ok(Invocation {
        message,
        log_type,
        options,
        config_path: matches.get_one::<PathBuf>("config").cloned(),
        no_dump: matches.get_flag("no-dump"),
        overrides,
        colorize,
    })
}

/// Build the logger an invocation describes
pub fn build_logger(invocation: &Invocation) -> anyhow::Result<ConsoleLogger> {
    let config = match &invocation.config_path {
        Some(path) => LoggyConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => LoggyConfig::default(),
    };

    let mut logger = ConsoleLogger::from_config(&config)?;
    for (name, color) in &invocation.overrides {
        logger.set_type(name, color)?;
    }
    if invocation.no_dump {
        logger.set_dump_file(false);
    }
    Ok(logger)
}

pub fn run(invocation: &Invocation) -> anyhow::Result<()> {
    if let Some(color) = &invocation.colorize {
        debug!("Colorizing message with {:?}", color);
        let line = ConsoleLogger::colorize(&invocation.message, color, &invocation.options.format)?;
        println!("{}", line);
        return Ok(());
    }

    let logger = build_logger(invocation)?;
    info!(
        "Logging as {} (mirroring to {})",
        invocation.log_type.to_uppercase(),
        logger.log_file_path().display()
    );
    logger.log(&invocation.message, &invocation.log_type, &invocation.options)?;
    Ok(())
}
