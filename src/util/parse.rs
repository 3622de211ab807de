use crate::error::config::ConfigError;

/// Parses a Discord snowflake from a configuration value
///
/// # Arguments
/// - `name` - Name of the variable being parsed, used in the error
/// - `value` - The raw value to parse
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed non-zero id
/// - `Err(ConfigError::InvalidEnvVar)` - Value is not a number or is zero
pub fn parse_snowflake(name: &str, value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    };

    let id = value.trim().parse::<u64>().map_err(|e| invalid(e.to_string()))?;

    // Serenity ids are NonZero
    if id == 0 {
        return Err(invalid("id must be non-zero".to_string()));
    }

    Ok(id)
}

/// Parses a comma separated list of snowflakes, skipping empty entries
pub fn parse_snowflake_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_snowflake(name, entry))
        .collect()
}

/// Parses a boolean flag accepting `true/false`, `1/0`, `yes/no` and `on/off`
pub fn parse_bool_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
