use std::io::Write;

use colored::{ColoredString, Colorize};
use env_logger::{Builder, Env};
use log::{Level, LevelFilter, SetLoggerError};


pub const LOG_LEVEL_VAR: &str = "TYPED_LIST_LOG";
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

fn level_label(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARNING".yellow(),
        Level::Info => "INFO".blue(),
        Level::Debug => "DEBUG".dimmed(),
        Level::Trace => "TRACE".magenta(),
    }
    .bold()
}

fn builder(env: Env) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(DEFAULT_LEVEL)
        .parse_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}][{}]: {}",
                level_label(record.level()),
                record.target().dimmed(),
                record.args()
            )
        });
    builder
}

/// Installs the colored console logger. Filter directives are read from
/// `TYPED_LIST_LOG` in `env_logger` syntax, `info` when unset.
pub fn init() -> Result<(), SetLoggerError> {
    builder(Env::new().filter(LOG_LEVEL_VAR)).try_init()
}
