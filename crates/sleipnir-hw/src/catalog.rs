//! The built-in device catalog.

use crate::profile::DeviceProfile;

/// All built-in device profiles, in stable presentation order.
pub fn catalog() -> Vec<DeviceProfile> {
    vec![
        DeviceProfile::ibm_falcon_r5(),
        DeviceProfile::rigetti_aspen_m3(),
        DeviceProfile::ionq_aria(),
    ]
}

/// Look up a profile by its short key.
///
/// Returns `None` for unknown keys; callers decide how to report that.
pub fn lookup(key: &str) -> Option<DeviceProfile> {
    catalog().into_iter().find(|profile| profile.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_stable() {
        let keys: Vec<String> = catalog().into_iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["ibm", "rigetti", "ionq"]);
    }

    #[test]
    fn test_lookup_known_key() {
        let profile = lookup("rigetti").expect("rigetti is in the catalog");
        assert_eq!(profile.name, "Rigetti Aspen-M-3");
    }

    #[test]
    fn test_lookup_unknown_key() {
        assert!(lookup("google").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("IBM").is_none(), "keys are case-sensitive");
    }
}
