//! Field rules for incoming recipe payloads.
//!
//! Rules are checked in a fixed order and the first failure wins:
//!
//! 1. `title` - string, 1-120 characters
//! 2. `description` - string, 1-2000 characters
//! 3. `ingredients` - non-empty list of strings, each 1-200 characters
//! 4. `instructions` - optional string, at most 5000 characters
//!
//! Lengths count characters, not bytes. No text field may contain a NUL
//! character, which `PostgreSQL` cannot store. Validation works on the raw JSON value
//! so that a wrong type (say, `"ingredients": "salt"`) is reported the same way
//! as a bad length instead of surfacing as a deserialization error.

use serde_json::{Map, Value};

use crate::types::RecipeFields;

pub const TITLE_MAX: usize = 120;
pub const DESCRIPTION_MAX: usize = 2000;
pub const INGREDIENT_MAX: usize = 200;
pub const INSTRUCTIONS_MAX: usize = 5000;

/// Why a field was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// The payload itself is not a JSON object.
    #[error("must be a JSON object")]
    NotAnObject,
    /// The field is missing or is not a string.
    #[error("must be a string")]
    NotAString,
    /// The field is missing, not a list, or an empty list.
    #[error("must be a non-empty list")]
    NotANonEmptyList,
    /// The string contains U+0000.
    #[error("must not contain NUL characters")]
    ContainsNul,
    /// The string length is outside the allowed range.
    #[error("must be {min}..{max} chars")]
    Length {
        /// Minimum allowed length (inclusive).
        min: usize,
        /// Maximum allowed length (inclusive).
        max: usize,
    },
}

/// A payload field that failed validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} {reason}")]
pub struct ValidationError {
    /// Field path, e.g. `title` or `ingredients[2]`.
    pub field: String,
    /// What was wrong with it.
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Create a validation error for a field.
    #[must_use]
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

/// Validate a recipe payload and extract its fields.
///
/// `instructions` may be absent or `null`; both become an empty string.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in rule order.
///
/// # Examples
///
/// ```
/// use recipe_box_core::validate;
/// use serde_json::json;
///
/// let fields = validate(&json!({
///     "title": "Pancakes",
///     "description": "Fluffy",
///     "ingredients": ["flour", "milk"]
/// }))
/// .unwrap();
/// assert_eq!(fields.instructions, "");
///
/// let err = validate(&json!({"title": "", "description": "x", "ingredients": []})).unwrap_err();
/// assert_eq!(err.to_string(), "title must be 1..120 chars");
/// ```
pub fn validate(payload: &Value) -> Result<RecipeFields, ValidationError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ValidationError::new("body", ValidationReason::NotAnObject))?;

    let title = required_text(object, "title", TITLE_MAX)?;
    let description = required_text(object, "description", DESCRIPTION_MAX)?;
    let ingredients = ingredient_list(object.get("ingredients"))?;
    let instructions = match object.get("instructions") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => {
            check_length("instructions", s, 0, INSTRUCTIONS_MAX)?;
            s.clone()
        }
        Some(_) => {
            return Err(ValidationError::new(
                "instructions",
                ValidationReason::NotAString,
            ));
        }
    };

    Ok(RecipeFields {
        title,
        description,
        ingredients,
        instructions,
    })
}

impl RecipeFields {
    /// Check already-typed fields against the same rules as [`validate`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in rule order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("title", &self.title, 1, TITLE_MAX)?;
        check_length("description", &self.description, 1, DESCRIPTION_MAX)?;
        if self.ingredients.is_empty() {
            return Err(ValidationError::new(
                "ingredients",
                ValidationReason::NotANonEmptyList,
            ));
        }
        for (index, ingredient) in self.ingredients.iter().enumerate() {
            check_length(&format!("ingredients[{index}]"), ingredient, 1, INGREDIENT_MAX)?;
        }
        check_length("instructions", &self.instructions, 0, INSTRUCTIONS_MAX)
    }
}

/// Number of characters in `s`.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    if !(min..=max).contains(&char_len(value)) {
        return Err(ValidationError::new(
            field,
            ValidationReason::Length { min, max },
        ));
    }
    if value.contains('\0') {
        return Err(ValidationError::new(field, ValidationReason::ContainsNul));
    }
    Ok(())
}

fn required_text(
    object: &Map<String, Value>,
    field: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let value = object
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ValidationError::new(field, ValidationReason::NotAString))?;
    check_length(field, value, 1, max)?;
    Ok(value.to_owned())
}

fn ingredient_list(value: Option<&Value>) -> Result<Vec<String>, ValidationError> {
    let entries = match value {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        _ => {
            return Err(ValidationError::new(
                "ingredients",
                ValidationReason::NotANonEmptyList,
            ));
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let field = format!("ingredients[{index}]");
            let text = entry
                .as_str()
                .ok_or_else(|| ValidationError::new(field.clone(), ValidationReason::NotAString))?;
            check_length(&field, text, 1, INGREDIENT_MAX)?;
            Ok(text.to_owned())
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid() -> Value {
        json!({
            "title": "Test Recipe",
            "description": "A test recipe description",
            "ingredients": ["ingredient1", "ingredient2"],
            "instructions": "Mix ingredients."
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut payload = valid();
        payload[field] = value;
        payload
    }

    fn without(field: &str) -> Value {
        let mut payload = valid();
        payload.as_object_mut().unwrap().remove(field);
        payload
    }

    #[test]
    fn test_valid_payload() {
        let fields = validate(&valid()).unwrap();
        assert_eq!(fields.title, "Test Recipe");
        assert_eq!(fields.ingredients, vec!["ingredient1", "ingredient2"]);
        assert_eq!(fields.instructions, "Mix ingredients.");
    }

    #[test]
    fn test_title_bounds() {
        assert!(validate(&with("title", json!("a"))).is_ok());
        assert!(validate(&with("title", json!("a".repeat(120)))).is_ok());

        let err = validate(&with("title", json!(""))).unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.to_string(), "title must be 1..120 chars");

        let err = validate(&with("title", json!("a".repeat(300)))).unwrap_err();
        assert_eq!(err.reason, ValidationReason::Length { min: 1, max: 120 });
    }

    #[test]
    fn test_title_must_be_string() {
        let err = validate(&with("title", json!(42))).unwrap_err();
        assert_eq!(err.reason, ValidationReason::NotAString);

        let err = validate(&without("title")).unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 120 two-byte characters is still a valid title
        assert!(validate(&with("title", json!("é".repeat(120)))).is_ok());
        assert!(validate(&with("title", json!("é".repeat(121)))).is_err());
    }

    #[test]
    fn test_description_bounds() {
        assert!(validate(&with("description", json!("d".repeat(2000)))).is_ok());

        let err = validate(&with("description", json!(""))).unwrap_err();
        assert_eq!(err.field, "description");

        let err = validate(&with("description", json!("d".repeat(2001)))).unwrap_err();
        assert_eq!(err.to_string(), "description must be 1..2000 chars");
    }

    #[test]
    fn test_ingredients_must_be_non_empty_list() {
        for bad in [json!("not-a-list"), json!([]), json!(null), json!({"a": 1})] {
            let err = validate(&with("ingredients", bad)).unwrap_err();
            assert_eq!(err.field, "ingredients");
            assert_eq!(err.reason, ValidationReason::NotANonEmptyList);
        }

        let err = validate(&without("ingredients")).unwrap_err();
        assert_eq!(err.to_string(), "ingredients must be a non-empty list");
    }

    #[test]
    fn test_ingredient_entries() {
        let err = validate(&with("ingredients", json!(["salt", "a".repeat(500)]))).unwrap_err();
        assert_eq!(err.to_string(), "ingredients[1] must be 1..200 chars");

        let err = validate(&with("ingredients", json!(["salt", ""]))).unwrap_err();
        assert_eq!(err.field, "ingredients[1]");

        let err = validate(&with("ingredients", json!([1, "salt"]))).unwrap_err();
        assert_eq!(err.field, "ingredients[0]");
        assert_eq!(err.reason, ValidationReason::NotAString);

        assert!(validate(&with("ingredients", json!(["a".repeat(200)]))).is_ok());
    }

    #[test]
    fn test_instructions_optional() {
        assert_eq!(validate(&without("instructions")).unwrap().instructions, "");
        assert_eq!(
            validate(&with("instructions", json!(null)))
                .unwrap()
                .instructions,
            ""
        );
        assert!(validate(&with("instructions", json!("i".repeat(5000)))).is_ok());
    }

    #[test]
    fn test_instructions_too_long_or_wrong_type() {
        let err = validate(&with("instructions", json!("i".repeat(5001)))).unwrap_err();
        assert_eq!(err.to_string(), "instructions must be 0..5000 chars");

        let err = validate(&with("instructions", json!(["step"]))).unwrap_err();
        assert_eq!(err.reason, ValidationReason::NotAString);
    }

    #[test]
    fn test_first_failure_wins() {
        let err = validate(&json!({"title": "", "description": "", "ingredients": []})).unwrap_err();
        assert_eq!(err.field, "title");

        let err = validate(&json!({"title": "ok", "description": "", "ingredients": []})).unwrap_err();
        assert_eq!(err.field, "description");
    }

    #[test]
    fn test_payload_must_be_object() {
        let err = validate(&json!(["title"])).unwrap_err();
        assert_eq!(err.field, "body");
        assert_eq!(err.reason, ValidationReason::NotAnObject);
    }

    #[test]
    fn test_typed_fields_use_same_rules() {
        let mut fields = validate(&valid()).unwrap();
        assert!(fields.validate().is_ok());

        fields.ingredients.clear();
        assert_eq!(
            fields.validate().unwrap_err().reason,
            ValidationReason::NotANonEmptyList
        );

        fields.ingredients = vec!["ok".to_string()];
        fields.instructions = "i".repeat(5001);
        assert_eq!(fields.validate().unwrap_err().field, "instructions");

        fields.instructions = "stir\u{0}".to_string();
        assert_eq!(
            fields.validate().unwrap_err().reason,
            ValidationReason::ContainsNul
        );
    }

    #[test]
    fn test_nul_characters_rejected() {
        let err = validate(&json!({"title": "a\u{0}b", "description": "d", "ingredients": ["x"]}))
            .unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.reason, ValidationReason::ContainsNul);
        assert_eq!(err.to_string(), "title must not contain NUL characters");

        let err = validate(&json!({"title": "t", "description": "d", "ingredients": ["ok", "\u{0}"]}))
            .unwrap_err();
        assert_eq!(err.field, "ingredients[1]");

        let err = validate(&json!({
            "title": "t",
            "description": "d",
            "ingredients": ["x"],
            "instructions": "mix\u{0}"
        }))
        .unwrap_err();
        assert_eq!(err.field, "instructions");
        assert_eq!(err.reason, ValidationReason::ContainsNul);
    }
}
