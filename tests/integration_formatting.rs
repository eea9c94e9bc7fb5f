use anyhow::Result;
use chrono::{TimeZone, Utc};

use chanlog::{
    ColorPair, LogError, LogOptions, Logger, LoggerConfig, MemorySink, RenderColor, TextAttr,
};

/// Build a logger that renders into a shared in-memory sink.
fn capture_logger(config: LoggerConfig) -> Result<(Logger, MemorySink)> {
    let sink = MemorySink::new();
    let logger = Logger::with_console(config, Box::new(sink.clone()))?;
    Ok((logger, sink))
}

/// Reference scenario: whitespace and channel tags enabled, global channel,
/// fixed timestamp.
#[test]
fn formatted_line_with_whitespace_and_channels() -> Result<()> {
    let (logger, sink) = capture_logger(LoggerConfig {
        use_whitespace: true,
        use_channels: true,
        ..Default::default()
    })?;

    logger.log(
        "boot ok",
        LogOptions {
            timestamp: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        },
    )?;

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].line, "[LOG] [0] 2024-01-01 00:00:00: boot ok");
    assert_eq!(records[0].color, RenderColor::Named("white".to_string()));
    Ok(())
}

/// Fixed inputs must produce a byte-identical line on repeated calls.
#[test]
fn formatting_is_deterministic() -> Result<()> {
    let (logger, sink) = capture_logger(LoggerConfig {
        use_whitespace: true,
        use_channels: true,
        ..Default::default()
    })?;

    let opts = LogOptions {
        level: "WRN".to_string(),
        timestamp: Some(Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 45).unwrap()),
        prefix: "core".to_string(),
        channel: 3,
        ..Default::default()
    };

    logger.log("same thing", opts.clone())?;
    logger.log("same thing", opts)?;

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].line, records[1].line);
    assert_eq!(
        records[0].line,
        "[WRN] [3] [core] 2024-06-15 12:30:45: same thing"
    );
    Ok(())
}

/// A non-empty prefixes list overrides the single prefix with its comma join.
#[test]
fn prefixes_take_precedence_over_prefix() -> Result<()> {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let (logger, sink) = capture_logger(LoggerConfig::default())?;

    logger.log(
        "x",
        LogOptions {
            timestamp: Some(ts),
            prefix: "z".to_string(),
            prefixes: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        },
    )?;
    logger.log(
        "x",
        LogOptions {
            timestamp: Some(ts),
            prefix: "a, b".to_string(),
            ..Default::default()
        },
    )?;

    let records = sink.records();
    assert_eq!(records[0].line, records[1].line);
    assert_eq!(records[0].line, "[LOG][a, b]2024-01-01 00:00:00: x");
    Ok(())
}

/// An unregistered level is fatal to the call, with no fallback color.
#[test]
fn unknown_level_is_an_error() -> Result<()> {
    let (logger, sink) = capture_logger(LoggerConfig::default())?;

    match logger.log("x", LogOptions { level: "FOO".to_string(), ..Default::default() }) {
        Err(LogError::UnknownLevel(name)) => assert_eq!(name, "FOO"),
        other => panic!("expected UnknownLevel, got {:?}", other.map(|_| ())),
    }
    assert!(sink.records().is_empty());
    Ok(())
}

/// Registered levels resolve case-insensitively and carry their colors.
#[test]
fn added_level_resolves_case_insensitively() -> Result<()> {
    let sink = MemorySink::new();
    let mut logger = Logger::with_console(LoggerConfig::default(), Box::new(sink.clone()))?;
    logger.add_level("DEBUG", ColorPair::new("cyan", 14));

    logger.log(
        "trace",
        LogOptions {
            level: "debug".to_string(),
            ..Default::default()
        },
    )?;

    let records = sink.records();
    assert_eq!(records[0].color, RenderColor::Named("cyan".to_string()));
    // The level tag is uppercased regardless of how the caller spelled it.
    assert!(records[0].line.starts_with("[DEBUG]"));
    Ok(())
}

/// With the 256-color switch on, the other ColorPair member is selected.
#[test]
fn use_256_selects_the_256_color_member() -> Result<()> {
    let sink = MemorySink::new();
    let mut logger = Logger::with_console(
        LoggerConfig {
            use_256: true,
            ..Default::default()
        },
        Box::new(sink.clone()),
    )?;
    logger.add_level("debug", ColorPair::new("cyan", 14));

    logger.log("trace", LogOptions { level: "DEBUG".to_string(), ..Default::default() })?;
    logger.err("broke", LogOptions::default())?;

    let records = sink.records();
    assert_eq!(records[0].color, RenderColor::Ansi256(14));
    assert_eq!(records[1].color, RenderColor::Ansi256(9));
    Ok(())
}

/// err/warn are log with the level overridden and everything else forwarded.
#[test]
fn err_and_warn_shorthands_forward_options() -> Result<()> {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let (logger, sink) = capture_logger(LoggerConfig {
        use_channels: true,
        ..Default::default()
    })?;

    logger.err(
        "broke",
        LogOptions {
            timestamp: Some(ts),
            channel: 7,
            attrs: vec![TextAttr::Bold],
            ..Default::default()
        },
    )?;
    logger.warn(
        "careful",
        LogOptions {
            timestamp: Some(ts),
            // A caller-supplied level is overridden by the shorthand.
            level: "LOG".to_string(),
            ..Default::default()
        },
    )?;

    let records = sink.records();
    assert_eq!(records[0].line, "[ERR][7]2024-01-01 00:00:00: broke");
    assert_eq!(records[0].color, RenderColor::Named("red".to_string()));
    assert_eq!(records[0].attrs, vec![TextAttr::Bold]);
    assert_eq!(records[1].line, "[WRN][0]2024-01-01 00:00:00: careful");
    assert_eq!(records[1].color, RenderColor::Named("yellow".to_string()));
    Ok(())
}

/// Two loggers never share level registrations.
#[test]
fn level_registries_are_per_instance() -> Result<()> {
    let sink_a = MemorySink::new();
    let sink_b = MemorySink::new();
    let mut a = Logger::with_console(LoggerConfig::default(), Box::new(sink_a.clone()))?;
    let b = Logger::with_console(LoggerConfig::default(), Box::new(sink_b.clone()))?;

    a.add_level("AUDIT", ColorPair::new("magenta", 13));
    a.log("tracked", LogOptions { level: "audit".to_string(), ..Default::default() })?;

    assert!(matches!(
        b.log("tracked", LogOptions { level: "audit".to_string(), ..Default::default() }),
        Err(LogError::UnknownLevel(_))
    ));
    assert_eq!(sink_a.records().len(), 1);
    assert!(sink_b.records().is_empty());
    Ok(())
}
