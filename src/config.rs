use anyhow::Context;

use crate::models::Threshold;

pub const THRESHOLD_ENV: &str = "BUNK_THRESHOLD_PERCENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub threshold: Threshold,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let threshold = match lookup(THRESHOLD_ENV) {
            Some(value) => parse_threshold(&value)
                .with_context(|| format!("{THRESHOLD_ENV} is not a valid threshold"))?,
            None => Threshold::default(),
        };
        Ok(Self { threshold })
    }

    pub fn with_threshold_override(self, percent: Option<&str>) -> anyhow::Result<Self> {
        match percent {
            Some(value) => Ok(Self {
                threshold: parse_threshold(value)?,
            }),
            None => Ok(self),
        }
    }
}

/// Accepts `80` or `80%`.
pub fn parse_threshold(value: &str) -> anyhow::Result<Threshold> {
    let percent: i64 = value
        .trim()
        .trim_end_matches('%')
        .parse()
        .with_context(|| format!("expected a whole percentage, got {value:?}"))?;
    Ok(Threshold::new(percent)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_seventy_five_percent() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.threshold.percent(), 75);
    }

    #[test]
    fn reads_threshold_from_environment() {
        let config = Config::from_lookup(|key| {
            (key == THRESHOLD_ENV).then(|| "80%".to_string())
        })
        .unwrap();
        assert_eq!(config.threshold.percent(), 80);
    }

    #[test]
    fn rejects_bad_environment_value() {
        let err = Config::from_lookup(|_| Some("lots".to_string())).unwrap_err();
        assert!(err.to_string().contains(THRESHOLD_ENV));
        assert!(Config::from_lookup(|_| Some("0".to_string())).is_err());
    }

    #[test]
    fn cli_override_wins() {
        let config = Config::default().with_threshold_override(Some("60")).unwrap();
        assert_eq!(config.threshold.percent(), 60);
        assert!(Config::default().with_threshold_override(Some("150")).is_err());
        assert_eq!(
            Config::default().with_threshold_override(None).unwrap(),
            Config::default()
        );
    }

    #[test]
    fn flag_and_environment_accept_the_same_forms() {
        for value in ["80", "80%", " 80% "] {
            let from_flag = Config::default().with_threshold_override(Some(value)).unwrap();
            let from_env = Config::from_lookup(|_| Some(value.to_string())).unwrap();
            assert_eq!(from_flag, from_env);
            assert_eq!(from_flag.threshold.percent(), 80);
        }
    }
}
