//! Builder pattern: constructing a `User` whose fields are mostly optional.

use crate::error::{PatternError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PHONE: &str = "1234567890";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub zip: String,
    pub street: String,
}

impl Address {
    pub fn new(zip: impl Into<String>, street: impl Into<String>) -> Self {
        Address {
            zip: zip.into(),
            street: street.into(),
        }
    }
}

/// Absent optional fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub name: String,
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

// =============================================================================
// Milestone 1: Positional constructor
// =============================================================================

impl User {
    /// Every caller has to spell out each absent field, in order.
    pub fn new(
        name: impl Into<String>,
        age: Option<u32>,
        phone: Option<String>,
        address: Option<Address>,
    ) -> Self {
        User {
            name: name.into(),
            age,
            phone,
            address,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

// =============================================================================
// Milestone 2: Consuming builder
// =============================================================================

#[derive(Debug, Clone, Default)]
#[must_use = "a builder does nothing until build() is called"]
pub struct UserBuilder {
    name: String,
    age: Option<u32>,
    phone: Option<String>,
    address: Option<Address>,
}

impl UserBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        UserBuilder {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn build(self) -> Result<User> {
        if self.name.trim().is_empty() {
            return Err(PatternError::missing_field("name"));
        }

        Ok(User {
            name: self.name,
            age: self.age,
            phone: self.phone,
            address: self.address,
        })
    }
}

// =============================================================================
// Milestone 3: Options struct with declared defaults
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserOptions {
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

impl Default for UserOptions {
    fn default() -> Self {
        UserOptions {
            age: None,
            phone: Some(DEFAULT_PHONE.to_string()),
            address: None,
        }
    }
}

impl UserOptions {
    /// Keys left out take their defaults; unknown or mistyped keys are errors.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|err| PatternError::InvalidOptions(err.to_string()))
    }
}

impl User {
    pub fn with_options(name: impl Into<String>, options: UserOptions) -> Result<Self> {
        let UserOptions {
            age,
            phone,
            address,
        } = options;

        let mut builder = UserBuilder::new(name);
        builder.age = age;
        builder.phone = phone;
        builder.address = address;
        builder.build()
    }
}

// =============================================================================
// Milestone 4: Functional constructors
// =============================================================================

pub fn create_address(zip: &str, street: &str) -> Address {
    Address::new(zip, street)
}

pub fn create_user(name: &str, options: UserOptions) -> Result<User> {
    User::with_options(name, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_constructor_needs_placeholders() {
        let user = User::new("Bob", None, None, Some(Address::new("12345", "Main St.")));
        assert_eq!(user.age, None);
        assert_eq!(user.address.unwrap().street, "Main St.");
    }

    #[test]
    fn test_builder_with_no_setters() {
        let user = UserBuilder::new("Bob").build().unwrap();
        assert_eq!(user, User::new("Bob", None, None, None));
    }

    #[test]
    fn test_builder_age_and_phone_leaves_address_absent() {
        let user = UserBuilder::new("Bob")
            .age(37)
            .phone("1234567890")
            .build()
            .unwrap();

        assert_eq!(user.age, Some(37));
        assert_eq!(user.phone.as_deref(), Some("1234567890"));
        assert_eq!(user.address, None);
    }

    #[test]
    fn test_builder_rejects_blank_name() {
        let err = UserBuilder::new("   ").age(3).build().unwrap_err();
        assert_eq!(err, PatternError::missing_field("name"));
    }

    #[test]
    fn test_options_default_phone() {
        let user = User::with_options(
            "Bob",
            UserOptions {
                age: Some(40),
                address: Some(Address::new("12345", "Main St.")),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(user.phone.as_deref(), Some(DEFAULT_PHONE));
        assert_eq!(user.age, Some(40));
    }

    #[test]
    fn test_options_from_json() {
        let options = UserOptions::from_json(r#"{"age": 40, "address": {"zip": "12345", "street": "Main St."}}"#).unwrap();
        assert_eq!(options.phone.as_deref(), Some(DEFAULT_PHONE));
        assert_eq!(options.address, Some(Address::new("12345", "Main St.")));
    }

    #[test]
    fn test_options_from_json_rejects_bad_input() {
        assert!(matches!(
            UserOptions::from_json(r#"{"nickname": "bobby"}"#),
            Err(PatternError::InvalidOptions(_))
        ));
        assert!(matches!(
            UserOptions::from_json(r#"{"age": "forty"}"#),
            Err(PatternError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_functional_version_matches_struct_version() {
        let options = UserOptions {
            age: Some(40),
            address: Some(create_address("12345", "Main St.")),
            ..Default::default()
        };
        let functional = create_user("Bob", options.clone()).unwrap();
        let structural = User::with_options("Bob", options).unwrap();
        assert_eq!(functional, structural);
    }

    #[test]
    fn test_json_rendering() {
        let user = UserBuilder::new("Bob").age(37).build().unwrap();
        assert_eq!(
            user.to_json(),
            r#"{"name":"Bob","age":37,"phone":null,"address":null}"#
        );
    }
}
