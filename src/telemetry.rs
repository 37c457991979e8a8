use std::io::Write;

use crate::error::LazySeqResult;

/// Install the global logger.
///
/// `RUST_LOG` takes precedence over `default_filter`. Fails if a logger has
/// already been installed in this process.
pub fn init_logger(default_filter: &str) -> LazySeqResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(move |buf, record| {
            let level = record.level();
            let target = record.target();
            let style = buf.default_level_style(level);
            let timestamp = buf.timestamp();
            let args = record.args();
            writeln!(buf, "[{timestamp} {style}{level}{style:#} {target}] {args}")
        })
        .try_init()?;
    Ok(())
}
