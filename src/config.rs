//! Service configuration parsed from environment variables.
//!
//! All variables are optional:
//! - `PORT`: listen port, default 8080
//! - `SURFACE_WIDTH` / `SURFACE_HEIGHT`: studio surface size, default 500
//! - `GREETING_MESSAGE`: message served by `/api/home`
//! - `GREETING_PEOPLE`: comma-separated names served by `/api/home`
//!
//! Unparseable numeric values fall back to their defaults with a warning, as
//! do surface edges above [`MAX_RENDER_DIMENSION`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::render::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, MAX_RENDER_DIMENSION};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_GREETING_MESSAGE: &str = "Hello World!";
pub const DEFAULT_GREETING_PEOPLE: &str = "Jack,Harry,Barry";

/// Payload of the greeting endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
    pub people: Vec<String>,
}

impl Default for Greeting {
    fn default() -> Self {
        Self { message: DEFAULT_GREETING_MESSAGE.to_owned(), people: parse_people(DEFAULT_GREETING_PEOPLE) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub surface_width: u32,
    pub surface_height: u32,
    pub greeting: Greeting,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            greeting: Greeting::default(),
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let message = std::env::var("GREETING_MESSAGE").unwrap_or_else(|_| DEFAULT_GREETING_MESSAGE.to_owned());
        let people = std::env::var("GREETING_PEOPLE").unwrap_or_else(|_| DEFAULT_GREETING_PEOPLE.to_owned());

        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            surface_width: env_dimension("SURFACE_WIDTH", DEFAULT_SURFACE_WIDTH),
            surface_height: env_dimension("SURFACE_HEIGHT", DEFAULT_SURFACE_HEIGHT),
            greeting: Greeting { message, people: parse_people(&people) },
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, "invalid value; using default");
            default
        }
    }
}

fn env_dimension(key: &str, default: u32) -> u32 {
    let value = env_parse(key, default);
    if value > MAX_RENDER_DIMENSION {
        tracing::warn!(key, value, max = MAX_RENDER_DIMENSION, "surface dimension too large; using default");
        return default;
    }
    value
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
#[must_use]
pub fn parse_people(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
