use serde::{Deserialize, Serialize};

/// Score magnitudes. Rewards are added as-is, penalties are subtracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub prize: i32,
    pub trap: i32,
    pub trap_expired: i32,
    pub end: i32,
    pub off_grid: i32,
    pub hit_wall: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            prize: 5,
            trap: 5,
            trap_expired: 10,
            end: 10,
            off_grid: 5,
            hit_wall: 5,
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<(), String> {
        let values = [
            ("prize", self.prize),
            ("trap", self.trap),
            ("trap_expired", self.trap_expired),
            ("end", self.end),
            ("off_grid", self.off_grid),
            ("hit_wall", self.hit_wall),
        ];
        for (name, value) in values {
            if value <= 0 {
                return Err(format!("Score value '{}' must be positive, got {}", name, value));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        assert!(Rules::default().validate().is_ok());
    }

    #[test]
    fn test_non_positive_value_rejected() {
        let rules = Rules {
            hit_wall: 0,
            ..Rules::default()
        };
        let err = rules.validate().unwrap_err();
        assert!(err.contains("hit_wall"));
    }
}
