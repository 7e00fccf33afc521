//! The fixed-shape record produced by the records payload

use serde::Serialize;

/// One generated user record
///
/// Every field except `id` holds the same static value for all records, so the
/// string fields borrow `'static` data and a record is a plain `Copy` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub username: &'static str,
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub date_of_birth: &'static str,
    pub gender: &'static str,
    pub phone_number: &'static str,
    pub address: &'static str,
    pub membership_status: &'static str,
}

impl UserRecord {
    pub const USERNAME: &'static str = "user1";
    pub const EMAIL: &'static str = "user1@example.com";
    pub const FIRST_NAME: &'static str = "User";
    pub const LAST_NAME: &'static str = "One";
    pub const DATE_OF_BIRTH: &'static str = "1990-01-01";
    pub const GENDER: &'static str = "male";
    pub const PHONE_NUMBER: &'static str = "123-456-7890";
    pub const ADDRESS: &'static str = "123 Main St, Any town, USA";
    pub const MEMBERSHIP_STATUS: &'static str = "active";

    /// Build the record for a source index; `id` is the index plus one.
    #[inline]
    pub fn from_index(index: u64) -> Self {
        Self {
            id: index + 1,
            username: Self::USERNAME,
            email: Self::EMAIL,
            first_name: Self::FIRST_NAME,
            last_name: Self::LAST_NAME,
            date_of_birth: Self::DATE_OF_BIRTH,
            gender: Self::GENDER,
            phone_number: Self::PHONE_NUMBER,
            address: Self::ADDRESS,
            membership_status: Self::MEMBERSHIP_STATUS,
        }
    }

    /// True when every static field carries its template value
    pub fn matches_template(&self) -> bool {
        self.username == Self::USERNAME
            && self.email == Self::EMAIL
            && self.first_name == Self::FIRST_NAME
            && self.last_name == Self::LAST_NAME
            && self.date_of_birth == Self::DATE_OF_BIRTH
            && self.gender == Self::GENDER
            && self.phone_number == Self::PHONE_NUMBER
            && self.address == Self::ADDRESS
            && self.membership_status == Self::MEMBERSHIP_STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_derives_id() {
        assert_eq!(UserRecord::from_index(0).id, 1);
        assert_eq!(UserRecord::from_index(2).id, 3);
        assert!(UserRecord::from_index(41).matches_template());
    }

    #[test]
    fn test_template_values() {
        let record = UserRecord::from_index(7);
        assert_eq!(record.username, "user1");
        assert_eq!(record.email, "user1@example.com");
        assert_eq!(record.first_name, "User");
        assert_eq!(record.last_name, "One");
        assert_eq!(record.date_of_birth, "1990-01-01");
        assert_eq!(record.gender, "male");
        assert_eq!(record.phone_number, "123-456-7890");
        assert_eq!(record.address, "123 Main St, Any town, USA");
        assert_eq!(record.membership_status, "active");
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(UserRecord::from_index(0)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["firstName"], "User");
        assert_eq!(json["membershipStatus"], "active");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_template_mismatch_detected() {
        let mut record = UserRecord::from_index(0);
        record.gender = "female";
        assert!(!record.matches_template());
    }
}
