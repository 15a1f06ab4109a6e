use log::LevelFilter;

#[derive(Debug, Default, Clone)]
pub struct AppSettings {
    /// Log verbosity override from `MLBTUI_LOG` (`error`, `warn`, `info`,
    /// `debug`, `trace`). Unset or unparseable leaves the default alone.
    pub log_level: Option<LevelFilter>,
}

impl AppSettings {
    pub fn load() -> Self {
        let log_level = std::env::var("MLBTUI_LOG")
            .ok()
            .and_then(|v| v.trim().parse::<LevelFilter>().ok());
        Self { log_level }
    }
}
