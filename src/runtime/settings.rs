use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("twofade: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("twofade: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

/// Selector labels as a fixed pair. `validate` guarantees two entries.
pub fn selector_labels(ui: &config::UiSettings) -> [String; 2] {
    let defaults = config::UiSettings::default().selector_labels;
    let pick = |i: usize| {
        ui.selector_labels
            .get(i)
            .or_else(|| defaults.get(i))
            .cloned()
            .unwrap_or_default()
    };
    [pick(0), pick(1)]
}
