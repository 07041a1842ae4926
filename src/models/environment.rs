//! Snapshot of the lab environment, as reported by `/api/info`.

use std::collections::BTreeMap;

use serde::Serialize;

/// Libraries advertised by the lab image. Not probed.
pub const LIBRARIES: [&str; 5] = ["flask", "pandas", "numpy", "matplotlib", "scikit-learn"];

/// Marker reported for every advertised library.
pub const INSTALLED: &str = "installed";

/// Timestamp layout used for `current_time`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Host facts gathered for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentSnapshot {
    pub python_version: String,
    pub platform: String,
    pub hostname: String,
    pub current_time: String,
}

/// Response body of `/api/info`.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentInfo {
    #[serde(flatten)]
    pub snapshot: EnvironmentSnapshot,
    pub libraries: BTreeMap<&'static str, &'static str>,
}

impl From<EnvironmentSnapshot> for EnvironmentInfo {
    fn from(snapshot: EnvironmentSnapshot) -> Self {
        Self {
            snapshot,
            libraries: LIBRARIES.iter().map(|name| (*name, INSTALLED)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_shape() {
        let info = EnvironmentInfo::from(EnvironmentSnapshot {
            python_version: "3.11.9".into(),
            platform: "Linux-6.1.0-x86_64".into(),
            hostname: "lab".into(),
            current_time: "2024-05-01 12:30:00".into(),
        });

        let value = serde_json::to_value(&info).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["current_time", "hostname", "libraries", "platform", "python_version"]
        );

        let libraries = object["libraries"].as_object().unwrap();
        assert_eq!(libraries.len(), LIBRARIES.len());
        for name in LIBRARIES {
            assert_eq!(libraries[name], INSTALLED);
        }
    }
}
