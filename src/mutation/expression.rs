//! Update expression builder.
//!
//! Turns an accepted field map into a storage mutation instruction. Every
//! field name and value is indirected through a placeholder (`#key_x` for
//! names, `:val_x` for values) rather than inlined, so payload content can
//! never collide with the instruction syntax. The instruction sets exactly
//! the supplied fields plus a freshly generated `updatedAt`; attributes it
//! does not name keep their stored values byte for byte.

use crate::error::UserStoreError;
use crate::fields::UserField;
use crate::mutation::pipeline::NormalizedFields;
use crate::transform::current_timestamp;
use serde_json::Value;
use std::collections::BTreeMap;

/// Errors from building an update expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
    /// The target identifier is missing or blank
    #[error("Update target identifier is missing or blank")]
    InvalidTarget,

    /// The accepted field map is empty, so there is nothing to update
    #[error("Update payload must include at least one updatable field")]
    EmptyMutation,
}

impl From<ExpressionError> for UserStoreError {
    fn from(error: ExpressionError) -> Self {
        match error {
            ExpressionError::InvalidTarget => UserStoreError::malformed(error.to_string()),
            ExpressionError::EmptyMutation => UserStoreError::validation(vec![error.to_string()]),
        }
    }
}

/// A storage mutation instruction for one record.
///
/// The rendered instruction reads `SET #key_a = :val_a, #key_b = :val_b`,
/// with `attribute_names` resolving each `#key_*` placeholder to a real
/// field name and `attribute_values` resolving each `:val_*` placeholder
/// to the value to store. The `updatedAt` assignment is always present and
/// always last.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    target: String,
    clauses: Vec<Clause>,
    attribute_names: BTreeMap<String, String>,
    attribute_values: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
struct Clause {
    name_placeholder: String,
    value_placeholder: String,
}

impl UpdateExpression {
    /// Build the mutation instruction for a target record.
    ///
    /// Consumes the normalized fields in canonical order, then appends the
    /// `updatedAt` refresh with a timestamp generated here.
    ///
    /// # Errors
    ///
    /// * [`ExpressionError::InvalidTarget`] - The identifier is blank
    /// * [`ExpressionError::EmptyMutation`] - No fields were supplied
    pub fn build(
        target: &str,
        fields: &NormalizedFields,
    ) -> Result<UpdateExpression, ExpressionError> {
        if target.trim().is_empty() {
            return Err(ExpressionError::InvalidTarget);
        }
        if fields.is_empty() {
            return Err(ExpressionError::EmptyMutation);
        }

        let mut expression = UpdateExpression {
            target: target.to_string(),
            clauses: Vec::with_capacity(fields.len() + 1),
            attribute_names: BTreeMap::new(),
            attribute_values: BTreeMap::new(),
        };
        for (field, value) in fields.iter() {
            expression.push_assignment(field.as_str(), Value::String(value.to_string()));
        }
        expression.push_assignment("updatedAt", Value::String(current_timestamp()));
        Ok(expression)
    }

    fn push_assignment(&mut self, field: &str, value: Value) {
        let name_placeholder = format!("#key_{}", field);
        let value_placeholder = format!(":val_{}", field);
        self.attribute_names
            .insert(name_placeholder.clone(), field.to_string());
        self.attribute_values
            .insert(value_placeholder.clone(), value);
        self.clauses.push(Clause {
            name_placeholder,
            value_placeholder,
        });
    }

    /// The identifier of the record this instruction applies to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Render the `SET` instruction with placeholders, never literals.
    pub fn expression(&self) -> String {
        let assignments: Vec<String> = self
            .clauses
            .iter()
            .map(|clause| {
                format!(
                    "{} = {}",
                    clause.name_placeholder, clause.value_placeholder
                )
            })
            .collect();
        format!("SET {}", assignments.join(", "))
    }

    /// Placeholder-to-field-name substitutions.
    pub fn attribute_names(&self) -> &BTreeMap<String, String> {
        &self.attribute_names
    }

    /// Placeholder-to-value substitutions.
    pub fn attribute_values(&self) -> &BTreeMap<String, Value> {
        &self.attribute_values
    }

    /// Number of assignments, including the `updatedAt` refresh.
    pub fn assignment_count(&self) -> usize {
        self.clauses.len()
    }

    /// Whether this instruction assigns the given field.
    pub fn assigns(&self, field: UserField) -> bool {
        self.attribute_names
            .values()
            .any(|name| name == field.as_str())
    }

    /// Iterate `(field name, value)` pairs with placeholders resolved, in
    /// instruction order.
    pub fn resolved_assignments(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.clauses.iter().filter_map(|clause| {
            let name = self.attribute_names.get(&clause.name_placeholder)?;
            let value = self.attribute_values.get(&clause.value_placeholder)?;
            Some((name.as_str(), value))
        })
    }
}
