use crate::quiz::MAX_QUESTIONS;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Settings read from the environment at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Requests from any other skill are refused when this is set.
    pub application_id: Option<String>,
    pub max_questions: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            application_id: None,
            max_questions: MAX_QUESTIONS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Tests set the environment themselves
        if !cfg!(test) {
            dotenv::dotenv().ok();
        }

        let application_id = std::env::var("MATHS_QUIZ_APPLICATION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        let max_questions = match std::env::var("MATHS_QUIZ_MAX_QUESTIONS") {
            Ok(raw) => match raw.trim().parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "MATHS_QUIZ_MAX_QUESTIONS".to_string(),
                        format!("'{}' is not a positive integer", raw),
                    ))
                }
            },
            Err(_) => MAX_QUESTIONS,
        };

        Ok(Self {
            application_id,
            max_questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env_vars() {
        env::remove_var("MATHS_QUIZ_APPLICATION_ID");
        env::remove_var("MATHS_QUIZ_MAX_QUESTIONS");
    }

    #[test]
    #[serial]
    fn defaults_without_environment() {
        clear_env_vars();

        let config = Config::from_env().expect("Config should load successfully");
        assert_eq!(config, Config::default());
        assert_eq!(config.max_questions, 10);
    }

    #[test]
    #[serial]
    fn reads_custom_values() {
        clear_env_vars();
        env::set_var("MATHS_QUIZ_APPLICATION_ID", "amzn1.ask.skill.test");
        env::set_var("MATHS_QUIZ_MAX_QUESTIONS", "5");

        let config = Config::from_env().expect("Config should load successfully");
        assert_eq!(config.application_id.as_deref(), Some("amzn1.ask.skill.test"));
        assert_eq!(config.max_questions, 5);
        clear_env_vars();
    }

    #[test]
    #[serial]
    fn blank_application_id_disables_the_check() {
        clear_env_vars();
        env::set_var("MATHS_QUIZ_APPLICATION_ID", "  ");

        let config = Config::from_env().expect("Config should load successfully");
        assert_eq!(config.application_id, None);
        clear_env_vars();
    }

    #[test]
    #[serial]
    fn rejects_invalid_question_count() {
        for raw in ["0", "ten", "-3"] {
            clear_env_vars();
            env::set_var("MATHS_QUIZ_MAX_QUESTIONS", raw);

            let err = Config::from_env().unwrap_err();
            match err {
                ConfigError::InvalidValue(var, _) => assert_eq!(var, "MATHS_QUIZ_MAX_QUESTIONS"),
            }
        }
        clear_env_vars();
    }
}
