//! Naming rules for Gardener shoots

/// Maximum length of a generated shoot name
pub const GARDENER_CLUSTER_NAME_LENGTH: usize = 7;

/// Derive a shoot name from a generated identifier.
///
/// Hyphens are dropped, the result is cut to
/// [`GARDENER_CLUSTER_NAME_LENGTH`] characters and lowercased.
pub fn gardener_cluster_name(id: &str) -> String {
    id.chars()
        .filter(|c| *c != '-')
        .take(GARDENER_CLUSTER_NAME_LENGTH)
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_id_is_cut_and_lowercased() {
        let name = gardener_cluster_name(
            "very-Long-ID-That-Has-More-Than-Fourteen-Characters-And-Even-Some-Hyphens",
        );
        assert_eq!(name, "verylon");
    }

    #[test]
    fn test_short_id_is_kept_whole() {
        assert_eq!(gardener_cluster_name("a-B"), "ab");
    }

    #[test]
    fn test_uuid_yields_seven_characters() {
        let name = gardener_cluster_name("5b3a2a49-0a8e-4c8e-9c59-1f0d2c8b9e11");
        assert_eq!(name, "5b3a2a4");
        assert_eq!(name.len(), GARDENER_CLUSTER_NAME_LENGTH);
    }
}
