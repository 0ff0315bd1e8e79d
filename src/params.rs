use anyhow::Result;
use serde::Deserialize;
use std::{
    env, fs,
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};

/// Node configuration loaded from a TOML file.
///
/// Defaults reproduce the fixed chase policy: approach the target at half
/// speed while turning, drive at full speed when it is centered.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ChaserParams {
    // Topic names
    pub image_topic: String,
    pub cmd_topic: String,
    // Target pattern: the byte value all three channels must hold
    pub target_pixel: u8,
    // Drive policy
    pub approach_speed: f64,
    pub forward_speed: f64,
    pub turn_rate: f64,
    // Debug options
    pub debug_mode: bool,
}

impl Default for ChaserParams {
    fn default() -> Self {
        Self {
            image_topic: "/camera/rgb/image_raw".to_string(),
            cmd_topic: "/cmd_vel".to_string(),
            target_pixel: 255,
            approach_speed: 0.5,
            forward_speed: 1.0,
            turn_rate: 1.0,
            debug_mode: false,
        }
    }
}

impl ChaserParams {
    /// Load parameters from the configured TOML file, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &str) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(_) => Ok(Self::default()),
        }
    }
}

fn config_path() -> String {
    env::var("CONFIG_PATH").unwrap_or_else(|_| "./chaser_params.toml".to_string())
}

/// Parameter manager with hot-reload capability.
pub struct ParameterManager {
    params: Arc<Mutex<ChaserParams>>,
    config_path: String,
}

impl ParameterManager {
    /// Create a new parameter manager and load the initial configuration.
    pub fn new() -> Result<Self> {
        let config_path = config_path();
        let params = Arc::new(Mutex::new(ChaserParams::load()?));

        println!("Parameter manager initialized with config: {}", config_path);

        Ok(Self {
            params,
            config_path,
        })
    }

    /// Get a thread-safe reference to the parameters.
    pub fn get_params(&self) -> Arc<Mutex<ChaserParams>> {
        self.params.clone()
    }

    /// Start a background thread that reloads the TOML file when it changes.
    pub fn start_file_watcher(&self) {
        let params = self.params.clone();
        let config_path = self.config_path.clone();
        let mut last_modified = fs::metadata(&config_path)
            .and_then(|m| m.modified())
            .unwrap_or(std::time::SystemTime::UNIX_EPOCH);

        thread::spawn(move || loop {
            thread::sleep(Duration::from_millis(500));

            // Missing file or unreadable metadata is normal during startup;
            // just try again on the next tick.
            let modified = match fs::metadata(&config_path).and_then(|m| m.modified()) {
                Ok(modified) => modified,
                Err(_) => continue,
            };

            if modified > last_modified {
                match ChaserParams::load_from(&config_path) {
                    Ok(new_params) => {
                        if let Ok(mut guard) = params.lock() {
                            *guard = new_params;
                            last_modified = modified;
                            println!("Parameters hot-reloaded!");
                        }
                    }
                    Err(e) => eprintln!("Hot-reload failed: {}", e),
                }
            }
        });
    }
}
