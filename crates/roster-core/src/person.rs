// ABOUTME: Defines the Person entity and the NewPerson not-yet-persisted record.
// ABOUTME: A Person carries a store-assigned id; a NewPerson holds only the name fields.

use serde::{Deserialize, Serialize};

/// A persisted person record. The id is assigned by the store on creation
/// and immutable afterwards. Serializes with camelCase field names; absent
/// names appear as JSON null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A person that has not been persisted yet: name fields only, no id.
/// Passing one through the store's create operation yields a [`Person`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPerson {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl NewPerson {
    /// Build a NewPerson from the given name fields. Any text is accepted,
    /// including the empty string; no validation happens here or later.
    pub fn new(first_name: Option<String>, last_name: Option<String>) -> Self {
        Self {
            first_name,
            last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_serializes_camel_case() {
        let person = Person {
            id: 1,
            first_name: Some("Henriette".to_string()),
            last_name: Some("Dellerup".to_string()),
        };

        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "firstName": "Henriette",
                "lastName": "Dellerup"
            })
        );
    }

    #[test]
    fn absent_names_serialize_as_null() {
        let person = Person {
            id: 7,
            first_name: None,
            last_name: None,
        };

        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["firstName"], serde_json::Value::Null);
        assert_eq!(json["lastName"], serde_json::Value::Null);
    }

    #[test]
    fn person_deserializes_missing_names_as_none() {
        let person: Person = serde_json::from_str(r#"{ "id": 3 }"#).unwrap();

        assert_eq!(person.id, 3);
        assert!(person.first_name.is_none());
        assert!(person.last_name.is_none());
    }

    #[test]
    fn new_person_keeps_names_verbatim() {
        let person = NewPerson::new(Some(String::new()), Some("Black".to_string()));

        // Empty strings are acceptable name values, distinct from absent ones.
        assert_eq!(person.first_name.as_deref(), Some(""));
        assert_eq!(person.last_name.as_deref(), Some("Black"));
    }

    #[test]
    fn new_person_default_is_all_absent() {
        let person = NewPerson::default();

        assert!(person.first_name.is_none());
        assert!(person.last_name.is_none());
    }
}
