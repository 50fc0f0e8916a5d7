//! Configuration validation module
//! 
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{RegistryError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_database_config(&settings.database)?;
    validate_server_config(&settings.server)?;
    validate_logging_config(&settings.logging)?;
    
    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseSettings) -> Result<()> {
    if config.host.is_empty() {
        return Err(RegistryError::Config(
            "Database host is required".to_string()
        ));
    }

    if config.username.is_empty() {
        return Err(RegistryError::Config(
            "Database username is required".to_string()
        ));
    }

    if config.database.is_empty() {
        return Err(RegistryError::Config(
            "Database name is required".to_string()
        ));
    }
    
    if config.max_connections == 0 {
        return Err(RegistryError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }
    
    if config.min_connections > config.max_connections {
        return Err(RegistryError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }
    
    Ok(())
}

/// Validate HTTP listener configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(RegistryError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(RegistryError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(RegistryError::Config(
            "Log level is required".to_string()
        ));
    }
    
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(RegistryError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }
    
    Ok(())
}
