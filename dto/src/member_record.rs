use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One player of the roster. An empty field means it is not set.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Hash, Clone, Default)]
pub struct MemberRecord {
    name: String,
    position: String,
    number: String,
    /// Single character displayed in the avatar.
    initial: String,
}

impl MemberRecord {
    pub fn new(name: String, position: String, number: String, initial: String) -> Self {
        Self {
            name,
            position,
            number,
            initial,
        }
    }
}

impl From<(&str, &str, &str, &str)> for MemberRecord {
    fn from((name, position, number, initial): (&str, &str, &str, &str)) -> Self {
        Self::new(
            name.to_owned(),
            position.to_owned(),
            number.to_owned(),
            initial.to_owned(),
        )
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const MEMBER_NAME: &str = "佐藤 太郎";
    pub const MEMBER_POSITION: &str = "キャプテン / FW";
    pub const MEMBER_NUMBER: &str = "10";
    pub const MEMBER_INITIAL: &str = "佐";

    pub fn get_expected_member() -> MemberRecord {
        MemberRecord::from((MEMBER_NAME, MEMBER_POSITION, MEMBER_NUMBER, MEMBER_INITIAL))
    }

    #[cfg(test)]
    mod from_tuple {
        use super::*;
        use parameterized::{ide, parameterized};

        ide!();

        #[parameterized(
            fields = {
            ("佐藤 太郎", "キャプテン / FW", "10", "佐"),
            ("", "Forward", "9", ""),
            ("", "", "", ""),
            }
        )]
        fn should_build_member_from_tuple(fields: (&str, &str, &str, &str)) {
            let (name, position, number, initial) = fields;
            let member = MemberRecord::from(fields);
            assert_eq!(name, member.name());
            assert_eq!(position, member.position());
            assert_eq!(number, member.number());
            assert_eq!(initial, member.initial());
        }

        #[test]
        fn should_expose_expected_member() {
            let member = get_expected_member();
            assert_eq!(MEMBER_NAME, member.name());
            assert_eq!(MEMBER_INITIAL, member.initial());
        }
    }
}
