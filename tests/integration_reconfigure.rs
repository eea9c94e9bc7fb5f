use anyhow::Result;

use chanlog::{
    config::{FLAG_USE_CHANNELS, FLAG_USE_WHITESPACE},
    ColorPair, LogError, LogOptions, Logger, LoggerConfig, MemorySink,
};

/// set_flags replaces the configuration wholesale and reports the new bits.
#[test]
fn set_flags_applies_the_new_bits() -> Result<()> {
    let sink = MemorySink::new();
    let mut logger = Logger::with_console(LoggerConfig::default(), Box::new(sink.clone()))?;
    assert_eq!(logger.flags(), 0);

    let returned = logger.set_flags(FLAG_USE_WHITESPACE | FLAG_USE_CHANNELS)?;
    assert_eq!(returned, 0b0110);
    assert_eq!(logger.flags(), 0b0110);

    // The new switches are live immediately.
    logger.log("after", LogOptions::default())?;
    let records = sink.records();
    assert!(records[0].line.starts_with("[LOG] [0] "));
    Ok(())
}

/// Reconfiguration is a full reset: custom levels and the observed channel
/// do not survive it.
#[test]
fn set_flags_discards_levels_and_channel() -> Result<()> {
    let sink = MemorySink::new();
    let mut logger = Logger::with_console(LoggerConfig::default(), Box::new(sink.clone()))?;

    logger.add_level("AUDIT", ColorPair::new("magenta", 13));
    logger.observe_channel(5);

    logger.set_flags(FLAG_USE_WHITESPACE)?;

    // Back on the global channel, so everything is visible again.
    assert_eq!(logger.current_channel(), 0);
    logger.log("visible", LogOptions { channel: 3, ..Default::default() })?;
    assert_eq!(sink.records().len(), 1);

    // The custom level is gone; the seeds are back.
    assert!(matches!(
        logger.log("gone", LogOptions { level: "AUDIT".to_string(), ..Default::default() }),
        Err(LogError::UnknownLevel(_))
    ));
    logger.warn("seed level still works", LogOptions::default())?;
    Ok(())
}

/// The injected console sink is a collaborator, not configuration, and is
/// kept across resets.
#[test]
fn set_flags_keeps_the_console_sink() -> Result<()> {
    let sink = MemorySink::new();
    let mut logger = Logger::with_console(LoggerConfig::default(), Box::new(sink.clone()))?;

    logger.log("before", LogOptions::default())?;
    logger.set_flags(FLAG_USE_WHITESPACE)?;
    logger.log("after", LogOptions::default())?;

    assert_eq!(sink.records().len(), 2);
    Ok(())
}

/// A logger built from a nonzero flags integer ignores the discrete options.
#[test]
fn construction_from_flags_ignores_discrete_options() -> Result<()> {
    let sink = MemorySink::new();
    let logger = Logger::with_console(
        LoggerConfig {
            use_256: true,
            use_channels: true,
            flags: FLAG_USE_WHITESPACE,
            ..Default::default()
        },
        Box::new(sink.clone()),
    )?;

    logger.log("flag built", LogOptions::default())?;
    let records = sink.records();
    // Whitespace from the flags; no channel tag despite use_channels above.
    assert!(records[0].line.starts_with("[LOG] "));
    assert!(!records[0].line.contains("[0]"));
    Ok(())
}
