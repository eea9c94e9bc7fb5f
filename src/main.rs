//! # Chanlog Demo Binary
//!
//! A thin command-line front end over the library: build a `Logger` from
//! CLI switches and emit one message through it. Handy for eyeballing
//! palettes, flag combinations, and file-sink behavior without writing a
//! test program.
//!
//! ## Examples
//!
//! ```text
//! chanlog "boot ok"
//! chanlog --level WRN --whitespace "cache cold"
//! chanlog --flags 22 --channel 3 "channel-tagged, 256-color, file-backed"
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use chanlog::{defaults, LogOptions, Logger, LoggerConfig, TextAttr};

/// Emit a log line through a configurable console/file logger
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Message to log
    message: String,

    /// Level name (case-insensitive; LOG, WRN and ERR are built in)
    #[clap(short, long, default_value = defaults::LEVEL)]
    level: String,

    /// Channel to send the message on (0 is global)
    #[clap(short, long, default_value_t = defaults::DEFAULT_CHANNEL)]
    channel: u32,

    /// Prefix tags rendered as [a, b] before the timestamp
    #[clap(short, long)]
    prefix: Vec<String>,

    /// Packed flag integer; overrides the individual switches when nonzero
    #[clap(short, long, default_value_t = 0)]
    flags: u8,

    /// Use the 256-color palette
    #[clap(long)]
    use_256: bool,

    /// Embed channel tags in the output
    #[clap(long)]
    channels: bool,

    /// Separate segments with whitespace
    #[clap(short, long)]
    whitespace: bool,

    /// Print internal diagnostics
    #[clap(short, long)]
    verbose: bool,

    /// Also append the line to a log file
    #[clap(long)]
    file: bool,

    /// Directory for the log file
    #[clap(long, default_value = defaults::FILE_DIR)]
    file_dir: PathBuf,

    /// Render the line bold
    #[clap(long)]
    bold: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Discrete switches and the packed integer go in together; the
    // library's precedence rule (nonzero flags win) applies as documented.
    let logger = Logger::new(LoggerConfig {
        use_256: args.use_256,
        use_channels: args.channels,
        use_whitespace: args.whitespace,
        verbose: args.verbose,
        use_file: args.file,
        file_dir: args.file_dir,
        flags: args.flags,
        ..Default::default()
    })?;

    let attrs = if args.bold {
        vec![TextAttr::Bold]
    } else {
        Vec::new()
    };

    logger.log(
        &args.message,
        LogOptions {
            level: args.level,
            attrs,
            prefixes: args.prefix,
            channel: args.channel,
            ..Default::default()
        },
    )?;

    if let Some(path) = logger.log_file() {
        if args.verbose {
            eprintln!("appended to {}", path.display());
        }
    }

    Ok(())
}
