use crate::{
    clock::{parse_zone, DEFAULT_ZONE},
    contact::ContactTransport,
    logging::{LogLevel, DEFAULT_LOG_LEVEL},
    navbar::{DEFAULT_THRESHOLD, DEFAULT_TOP_OFFSET},
    showcase::MissingProjectPolicy,
};
use chrono_tz::Tz;
use url::Url;

pub const DEFAULT_ROLES: [&str; 2] = ["WEB DEVELOPER", "COMPUTER ENGINEER"];
const DEFAULT_MISSING_PROJECT: MissingProjectPolicy = MissingProjectPolicy::Notify;
const ROLE_SEPARATOR: char = '|';

const NAV_THRESHOLD_BOUNDS: (f64, f64) = (1.0, 200.0);
const NAV_TOP_OFFSET_BOUNDS: (f64, f64) = (0.0, 1_000.0);

/// Key/value lookup backing a configuration layer.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

impl<F> ConfigSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Page behavior settings read from `data-*` attributes on the mount root.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    pub nav_threshold: f64,
    pub nav_top_offset: f64,
    pub clock_zone: Tz,
    pub roles: Vec<String>,
    pub missing_project: MissingProjectPolicy,
    pub contact: ContactTransport,
    pub log_level: LogLevel,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            nav_threshold: DEFAULT_THRESHOLD,
            nav_top_offset: DEFAULT_TOP_OFFSET,
            clock_zone: DEFAULT_ZONE,
            roles: DEFAULT_ROLES.iter().map(ToString::to_string).collect(),
            missing_project: DEFAULT_MISSING_PROJECT,
            contact: ContactTransport::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ViewConfig {
    pub fn from_source(source: &impl ConfigSource) -> Self {
        let nav_threshold = parse_f64_with_bounds(
            source,
            "data-nav-threshold",
            DEFAULT_THRESHOLD,
            NAV_THRESHOLD_BOUNDS,
        );
        let nav_top_offset = parse_f64_with_bounds(
            source,
            "data-nav-top-offset",
            DEFAULT_TOP_OFFSET,
            NAV_TOP_OFFSET_BOUNDS,
        );
        let clock_zone = parse_non_empty_string(source, "data-clock-zone")
            .and_then(|name| parse_zone(&name))
            .unwrap_or(DEFAULT_ZONE);
        let roles = parse_non_empty_string(source, "data-roles")
            .map(|raw| parse_roles(&raw))
            .filter(|roles| !roles.is_empty())
            .unwrap_or_else(|| DEFAULT_ROLES.iter().map(ToString::to_string).collect());
        let missing_project = parse_non_empty_string(source, "data-missing-project")
            .and_then(|value| MissingProjectPolicy::parse(&value))
            .unwrap_or(DEFAULT_MISSING_PROJECT);
        let contact = parse_http_url(source, "data-contact-endpoint")
            .map(ContactTransport::Endpoint)
            .unwrap_or_default();
        let log_level = parse_log_level(source, "data-log-level", DEFAULT_LOG_LEVEL);

        Self {
            nav_threshold,
            nav_top_offset,
            clock_zone,
            roles,
            missing_project,
            contact,
            log_level,
        }
    }
}

fn parse_roles(raw: &str) -> Vec<String> {
    raw.split(ROLE_SEPARATOR)
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(ToString::to_string)
        .collect()
}

pub fn parse_non_empty_string(source: &impl ConfigSource, key: &str) -> Option<String> {
    source
        .get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn parse_f64_with_bounds(
    source: &impl ConfigSource,
    key: &str,
    default: f64,
    bounds: (f64, f64),
) -> f64 {
    source
        .get(key)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

pub fn parse_u16_with_bounds(
    source: &impl ConfigSource,
    key: &str,
    default: u16,
    bounds: (u16, u16),
) -> u16 {
    source
        .get(key)
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

pub fn parse_http_url(source: &impl ConfigSource, key: &str) -> Option<Url> {
    let value = parse_non_empty_string(source, key)?;
    let parsed = Url::parse(&value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

pub fn parse_log_level(source: &impl ConfigSource, key: &str, default: LogLevel) -> LogLevel {
    parse_non_empty_string(source, key)
        .and_then(|value| LogLevel::parse(&value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| values.get(key).cloned()
    }

    #[test]
    fn empty_source_yields_defaults() {
        let config = ViewConfig::from_source(&source(&[]));

        assert_eq!(config, ViewConfig::default());
        assert_eq!(config.clock_zone, chrono_tz::Asia::Manila);
        assert_eq!(config.roles, vec!["WEB DEVELOPER", "COMPUTER ENGINEER"]);
    }

    #[test]
    fn values_in_bounds_are_applied() {
        let config = ViewConfig::from_source(&source(&[
            ("data-nav-threshold", "24"),
            ("data-nav-top-offset", "80"),
            ("data-clock-zone", "Europe/Berlin"),
            ("data-roles", "Engineer | | Designer"),
            ("data-missing-project", "silent"),
            ("data-log-level", "debug"),
        ]));

        assert_eq!(config.nav_threshold, 24.0);
        assert_eq!(config.nav_top_offset, 80.0);
        assert_eq!(config.clock_zone, chrono_tz::Europe::Berlin);
        assert_eq!(config.roles, vec!["Engineer", "Designer"]);
        assert_eq!(config.missing_project, MissingProjectPolicy::Silent);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_and_garbage_fall_back() {
        let config = ViewConfig::from_source(&source(&[
            ("data-nav-threshold", "0"),
            ("data-nav-top-offset", "lots"),
            ("data-clock-zone", "Nowhere/Special"),
            ("data-roles", " | "),
            ("data-missing-project", "shout"),
        ]));

        assert_eq!(config.nav_threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.nav_top_offset, DEFAULT_TOP_OFFSET);
        assert_eq!(config.clock_zone, DEFAULT_ZONE);
        assert_eq!(config.roles.len(), 2);
        assert_eq!(config.missing_project, MissingProjectPolicy::Notify);
    }

    #[test]
    fn contact_endpoint_requires_http_scheme() {
        let https = ViewConfig::from_source(&source(&[(
            "data-contact-endpoint",
            "https://forms.example.com/contact",
        )]));
        let ftp = ViewConfig::from_source(&source(&[(
            "data-contact-endpoint",
            "ftp://forms.example.com/contact",
        )]));

        assert!(matches!(https.contact, ContactTransport::Endpoint(ref url) if url.host_str() == Some("forms.example.com")));
        assert_eq!(ftp.contact, ContactTransport::default());
    }

    #[test]
    fn u16_parsing_respects_bounds() {
        let values = source(&[("PORT", "3000"), ("LOW", "0")]);

        assert_eq!(parse_u16_with_bounds(&values, "PORT", 8080, (1, u16::MAX)), 3000);
        assert_eq!(parse_u16_with_bounds(&values, "LOW", 8080, (1, u16::MAX)), 8080);
        assert_eq!(parse_u16_with_bounds(&values, "MISSING", 8080, (1, u16::MAX)), 8080);
    }
}
