use crate::config::Config;

const TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Send log records to stderr, leaving stdout to the prompts.
pub fn init(config: &Config) -> Result<(), log::SetLoggerError> {
  fern::Dispatch::new().format(|out, message, record| {
                         out.finish(format_args!("{} [{}] {}: {}",
                                                 chrono::Local::now().format(TIMESTAMP),
                                                 record.level(),
                                                 record.target(),
                                                 message))
                       })
                       .level(config.elevated_log)
                       .chain(std::io::stderr())
                       .apply()
}
