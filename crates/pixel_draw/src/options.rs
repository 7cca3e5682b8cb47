use std::{fs, path::PathBuf};

use pixel_engine_edit::EditorSettings;

const SETTINGS_FILE: &str = "settings.toml";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "GitHub", "pixel_draw")
}

/// Returns the configuration directory path, creating it if needed
pub fn get_config_dir() -> Option<PathBuf> {
    let dir = project_dirs()?.config_dir().to_path_buf();
    if !dir.exists() {
        fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

pub fn load_settings() -> EditorSettings {
    let Some(dir) = get_config_dir() else {
        log::error!("Can't create configuration directory");
        return EditorSettings::default();
    };
    let settings_file = dir.join(SETTINGS_FILE);
    if settings_file.exists() {
        match fs::read_to_string(&settings_file) {
            Ok(txt) => match toml::from_str(&txt) {
                Ok(result) => return result,
                Err(err) => log::error!("Error parsing settings file {}: {}", settings_file.display(), err),
            },
            Err(err) => log::error!("Error reading settings file: {}", err),
        }
    }
    EditorSettings::default()
}

pub fn store_settings(settings: &EditorSettings) {
    let Some(dir) = get_config_dir() else {
        log::error!("Can't create configuration directory");
        return;
    };
    match toml::to_string(settings) {
        Ok(text) => {
            if let Err(err) = fs::write(dir.join(SETTINGS_FILE), text) {
                log::error!("Error writing settings file: {}", err);
            }
        }
        Err(err) => log::error!("Error writing settings file: {}", err),
    }
}
