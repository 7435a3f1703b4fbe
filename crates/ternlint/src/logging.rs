use anyhow::Result;
use colored::Colorize;
use fern::Dispatch;
use log::LevelFilter;

/// Routes `log` output to stderr, gated on the `-v` count.
pub(crate) fn set_up_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

pub(crate) fn warn_user(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}
