use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub targets: TargetsConfig,
    pub current: CurrentFiguresConfig,
}

/// Target values the circular-economy indicator cards track
#[derive(Debug, Deserialize, Clone)]
pub struct TargetsConfig {
    /// Recycling rate target, percent
    pub recycling_rate: f64,
    /// Landfill-zero achievement target, percent
    pub landfill_zero: f64,
    /// Resource recovery target, percent
    pub resource_recovery: f64,
    /// Energy efficiency target, percent
    pub energy_efficiency: f64,
}

/// Externally-sourced figures that no record store computes
#[derive(Debug, Deserialize, Clone)]
pub struct CurrentFiguresConfig {
    /// Year-over-year total emission change, percent (negative = reduction)
    pub yoy_emission_change: f64,
    pub resource_recovery: f64,
    pub energy_efficiency: f64,
    /// Landfill-zero figure reported while some waste still goes to landfill
    pub landfill_zero_fallback: f64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[targets]
recycling_rate = 90.0
landfill_zero = 100.0
resource_recovery = 95.0
energy_efficiency = 85.0

[current]
yoy_emission_change = -15.0
resource_recovery = 92.0
energy_efficiency = 78.0
landfill_zero_fallback = 95.0
"#;

/// Load configuration from a config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to the embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

impl Default for Config {
    fn default() -> Self {
        // The embedded default is a compile-time literal and always parses
        toml::from_str(DEFAULT_CONFIG).unwrap_or(Config {
            targets: TargetsConfig {
                recycling_rate: 90.0,
                landfill_zero: 100.0,
                resource_recovery: 95.0,
                energy_efficiency: 85.0,
            },
            current: CurrentFiguresConfig {
                yoy_emission_change: -15.0,
                resource_recovery: 92.0,
                energy_efficiency: 78.0,
                landfill_zero_fallback: 95.0,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.targets.recycling_rate, 90.0);
        assert_eq!(config.current.yoy_emission_change, -15.0);
    }

    #[test]
    fn test_default_impl_matches_embedded() {
        let config = Config::default();
        assert_eq!(config.targets.landfill_zero, 100.0);
        assert_eq!(config.current.landfill_zero_fallback, 95.0);
    }
}
