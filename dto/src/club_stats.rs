use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Figures and contact details shown on the club page.
/// A zero or empty value means the field is not set.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Default)]
pub struct ClubStats {
    member_count: u32,
    founded_year: i32,
    activity_count: u32,
    current_year: i32,
    email: String,
    phone: String,
    location: String,
}

impl ClubStats {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        member_count: u32,
        founded_year: i32,
        activity_count: u32,
        current_year: i32,
        email: String,
        phone: String,
        location: String,
    ) -> Self {
        Self {
            member_count,
            founded_year,
            activity_count,
            current_year,
            email,
            phone,
            location,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl ClubStats {
        /// Stats with every field set, contact details included.
        pub fn new_test() -> Self {
            ClubStats {
                member_count: 25,
                founded_year: 2020,
                activity_count: 48,
                current_year: 2026,
                email: "info@club-fk.com".to_owned(),
                phone: "090-XXXX-XXXX".to_owned(),
                location: "東京都内各所のグラウンド".to_owned(),
            }
        }

        pub fn with_contact(email: &str, phone: &str, location: &str) -> Self {
            ClubStats {
                email: email.to_owned(),
                phone: phone.to_owned(),
                location: location.to_owned(),
                ..Self::new_test()
            }
        }
    }

    #[test]
    fn should_default_to_unset_fields() {
        let stats = ClubStats::default();
        assert_eq!(0, *stats.member_count());
        assert_eq!(0, *stats.founded_year());
        assert!(stats.email().is_empty());
    }
}
