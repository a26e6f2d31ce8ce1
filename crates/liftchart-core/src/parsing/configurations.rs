use crate::model::{Configurations, UNKNOWN_CONFIG_DESCRIPTION};
use crate::parsing::{normalize_ws, truncate_chars};
use crate::profile::schema::ExtractionProfile;
use regex::Regex;
use std::sync::LazyLock;

/// Short configuration code: `MB`, `HA`, `SL-LJ`, ...
static CONFIG_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]{1,4}(?:-[A-Z]{1,3})?)\b").expect("valid config code pattern")
});

/// Collect configuration descriptions from the chunk sequence.
///
/// A chunk qualifies when it is long enough, mentions a boom/jib hint and
/// carries a code-shaped token outside the stop list. The earliest chunk for
/// a code wins, since chart labels precede their tables.
pub fn extract_configurations(chunks: &[&str], profile: &ExtractionProfile) -> Configurations {
    let mut configs = Configurations::new();

    for chunk in chunks {
        let Some((code, description)) = configuration_from_chunk(chunk, profile) else {
            continue;
        };
        configs.entry(code).or_insert(description);
    }

    log::debug!("found {} configuration(s)", configs.len());
    configs
}

/// Code and description for one chunk, if it describes a configuration.
pub fn configuration_from_chunk(
    chunk: &str,
    profile: &ExtractionProfile,
) -> Option<(String, String)> {
    let text = normalize_ws(chunk);
    if text.chars().count() < profile.min_config_chunk_chars {
        return None;
    }

    if !profile.has_config_hint(&text.to_lowercase()) {
        return None;
    }

    let code = CONFIG_CODE_RE
        .find_iter(&text)
        .map(|m| m.as_str())
        .find(|candidate| !profile.is_stop_code(candidate))?
        .to_string();

    Some((code, truncate_chars(&text, profile.snippet_chars)))
}

/// Substitute the sentinel configuration when nothing was identified.
pub fn with_sentinel(mut configs: Configurations, profile: &ExtractionProfile) -> Configurations {
    if configs.is_empty() {
        configs.insert(
            profile.unknown_config.clone(),
            UNKNOWN_CONFIG_DESCRIPTION.to_string(),
        );
    }
    configs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::builtin::default_profile;

    #[test]
    fn test_hint_and_code() {
        let p = default_profile().unwrap();
        let configs = extract_configurations(&["MB Hauptausleger configuration"], &p);
        assert_eq!(
            configs.get("MB").map(String::as_str),
            Some("MB Hauptausleger configuration")
        );
    }

    #[test]
    fn test_first_chunk_wins() {
        let p = default_profile().unwrap();
        let chunks = [
            "MB main boom telescoped",
            "12 m 40 t",
            "",
            "noise",
            "other",
            "MB boom with counterweight",
        ];
        let configs = extract_configurations(&chunks, &p);
        assert_eq!(configs.len(), 1);
        assert_eq!(configs["MB"], "MB main boom telescoped");
    }

    #[test]
    fn test_stop_codes_skipped() {
        let p = default_profile().unwrap();
        let (code, _) = configuration_from_chunk("PDF LOAD CHART LJ luffing jib", &p).unwrap();
        assert_eq!(code, "LJ");
    }

    #[test]
    fn test_only_stop_codes_yields_nothing() {
        let p = default_profile().unwrap();
        assert!(configuration_from_chunk("GROVE TON main boom", &p).is_none());
    }

    #[test]
    fn test_hyphenated_code() {
        let p = default_profile().unwrap();
        let (code, _) = configuration_from_chunk("SL-LJ luffing jib mode", &p).unwrap();
        assert_eq!(code, "SL-LJ");
    }

    #[test]
    fn test_no_hint_no_config() {
        let p = default_profile().unwrap();
        assert!(configuration_from_chunk("MB counterweight 120 t", &p).is_none());
    }

    #[test]
    fn test_short_chunk_ignored() {
        let p = default_profile().unwrap();
        // seven characters, contains "jib" and a code
        assert!(configuration_from_chunk("LJ jib ", &p).is_none());
        assert!(configuration_from_chunk("LJ  jibs", &p).is_none());
    }

    #[test]
    fn test_description_truncated() {
        let p = default_profile().unwrap();
        let long = format!("MB main boom {}", "x".repeat(400));
        let (_, description) = configuration_from_chunk(&long, &p).unwrap();
        assert_eq!(description.chars().count(), 220);
    }

    #[test]
    fn test_custom_stop_code() {
        let mut p = default_profile().unwrap();
        p.stop_codes.insert("MB".to_string());
        let (code, _) = configuration_from_chunk("MB HA main boom", &p).unwrap();
        assert_eq!(code, "HA");
    }

    #[test]
    fn test_sentinel_only_when_empty() {
        let p = default_profile().unwrap();
        let filled = with_sentinel(Configurations::new(), &p);
        assert_eq!(filled.len(), 1);
        assert_eq!(filled["UNKNOWN"], UNKNOWN_CONFIG_DESCRIPTION);

        let mut existing = Configurations::new();
        existing.insert("MB".into(), "MB main boom".into());
        assert_eq!(with_sentinel(existing, &p).len(), 1);
    }
}
