use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert level of a single reading against its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl Status {
    /// Classify `value` against a warning and a critical threshold.
    ///
    /// With `critical >= warning` readings at or above a threshold trip it.
    /// With `critical < warning` the sensor is low-is-bad (dissolved oxygen)
    /// and readings at or below a threshold trip it.
    pub fn classify(value: f64, warning: f64, critical: f64) -> Status {
        if critical >= warning {
            if value >= critical {
                Status::Critical
            } else if value >= warning {
                Status::Warning
            } else {
                Status::Normal
            }
        } else if value <= critical {
            Status::Critical
        } else if value <= warning {
            Status::Warning
        } else {
            Status::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Warning => "warning",
            Status::Critical => "critical",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Status;

    #[test]
    fn classify_rising_thresholds() {
        assert_eq!(Status::classify(80.0, 85.0, 95.0), Status::Normal);
        assert_eq!(Status::classify(85.0, 85.0, 95.0), Status::Warning);
        assert_eq!(Status::classify(94.99, 85.0, 95.0), Status::Warning);
        assert_eq!(Status::classify(95.0, 85.0, 95.0), Status::Critical);
        assert_eq!(Status::classify(120.0, 85.0, 95.0), Status::Critical);
    }

    #[test]
    fn classify_equal_thresholds_skips_warning() {
        assert_eq!(Status::classify(4.0, 4.0, 4.0), Status::Critical);
        assert_eq!(Status::classify(3.9, 4.0, 4.0), Status::Normal);
    }

    #[test]
    fn classify_grid_matches_definition() {
        // For c >= w: critical iff v >= c, warning iff w <= v < c.
        let thresholds = [(0.0, 0.0), (1.0, 2.0), (-3.0, 5.5), (8.5, 9.0)];
        for (w, c) in thresholds {
            let mut v = -10.0;
            while v <= 12.0 {
                let expected = if v >= c {
                    Status::Critical
                } else if v >= w {
                    Status::Warning
                } else {
                    Status::Normal
                };
                assert_eq!(Status::classify(v, w, c), expected, "v={v} w={w} c={c}");
                v += 0.25;
            }
        }
    }

    #[test]
    fn classify_low_is_bad() {
        // dissolved oxygen: warning 5, critical 4
        assert_eq!(Status::classify(8.0, 5.0, 4.0), Status::Normal);
        assert_eq!(Status::classify(5.0, 5.0, 4.0), Status::Warning);
        assert_eq!(Status::classify(4.5, 5.0, 4.0), Status::Warning);
        assert_eq!(Status::classify(4.0, 5.0, 4.0), Status::Critical);
        assert_eq!(Status::classify(1.0, 5.0, 4.0), Status::Critical);
    }

    #[test]
    fn status_ordering_by_severity() {
        assert!(Status::Normal < Status::Warning);
        assert!(Status::Warning < Status::Critical);
        assert_eq!(Status::Critical.to_string(), "critical");
    }
}
