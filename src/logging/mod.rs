use std::{io::Write as _, time::SystemTime};

use anstyle::{AnsiColor, Effects};
use env_logger::Env;

/// Diagnostics stay on stderr at `warn` unless `RUST_LOG` says otherwise, so
/// the formatted report on stdout stays clean.
pub fn init() {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    let subtle = AnsiColor::BrightBlack.on_default();
    builder.format(move |buf, record| {
        let now = SystemTime::now();
        write!(buf, "{subtle}[{subtle:#}")?;
        if let Ok(now) = jiff::Timestamp::try_from(now) {
            write!(buf, "{now:.3} ")?;
        } else {
            write!(buf, "timestamp_error ")?;
        }
        let level_style = match record.level() {
            log::Level::Error => AnsiColor::Red.on_default().effects(Effects::BOLD),
            log::Level::Warn => AnsiColor::Yellow.on_default(),
            log::Level::Info => AnsiColor::Green.on_default(),
            log::Level::Debug => AnsiColor::Blue.on_default(),
            log::Level::Trace => AnsiColor::Cyan.on_default(),
        };
        write!(
            buf,
            "{level_style}{}{level_style:#} {}",
            record.level(),
            record.target(),
        )?;
        if let Some(line) = record.line() {
            write!(buf, ":{line}")?;
        }
        write!(buf, "{subtle}]{subtle:#} ")?;
        writeln!(buf, "{}", record.args())
    });
    builder.init();
}
