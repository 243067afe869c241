//! Identifier generation for nested cluster objects

#[cfg(test)]
use mockall::automock;

/// Source of unique identifiers
#[cfg_attr(test, automock)]
pub trait UuidGenerator: Send + Sync {
    /// Return a new identifier, distinct from every previous one
    fn generate(&self) -> String;
}

/// Random (v4) UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuidGenerator;

impl UuidGenerator for RandomUuidGenerator {
    fn generate(&self) -> String {
        ::uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_uuid_generator_returns_distinct_ids() {
        let generator = RandomUuidGenerator;

        let first = generator.generate();
        let second = generator.generate();

        assert_ne!(first, second);
        assert!(::uuid::Uuid::parse_str(&first).is_ok());
    }
}
