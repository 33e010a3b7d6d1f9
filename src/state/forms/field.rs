//! Form field value objects

use super::role::Role;

/// Character used to mask secret fields
pub const MASK_CHAR: char = '•';

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Role(Role),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: FieldValue,
    pub is_required: bool,
    /// Rendered masked (passwords)
    pub is_secret: bool,
    /// Set once the field has lost focus
    pub touched: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str, is_required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::default(),
            is_required,
            is_secret: false,
            touched: false,
        }
    }

    /// Create a new masked text field
    pub fn secret(name: &str, label: &str, placeholder: &str, is_required: bool) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label, placeholder, is_required)
        }
    }

    /// Create a new role selection field, starting at the placeholder
    pub fn role(name: &str, label: &str, is_required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: Role::Unselected.label().to_string(),
            value: FieldValue::Role(Role::Unselected),
            is_required,
            is_secret: false,
            touched: false,
        }
    }

    /// Get the text value (returns empty string for role fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Role(_) => "",
        }
    }

    /// Get the role value (returns the placeholder for text fields)
    pub fn as_role(&self) -> Role {
        match &self.value {
            FieldValue::Role(r) => *r,
            FieldValue::Text(_) => Role::Unselected,
        }
    }

    pub fn is_role(&self) -> bool {
        matches!(self.value, FieldValue::Role(_))
    }

    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = FieldValue::Text(value.into());
    }

    pub fn set_role(&mut self, role: Role) {
        self.value = FieldValue::Role(role);
    }

    /// Push a character to the field value.
    /// Role fields treat the character as an option shortcut.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Role(r) => {
                if let Some(role) = Role::from_shortcut(c) {
                    *r = role;
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Role(_) => {}
        }
    }

    /// Number of characters in a text value
    pub fn char_count(&self) -> usize {
        self.as_text().chars().count()
    }

    /// True for empty text or an unselected role
    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Role(r) => !r.is_selected(),
        }
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    /// Restore the initial value and untouched state
    pub fn reset(&mut self) {
        self.touched = false;
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Role(r) => *r = Role::Unselected,
        }
    }

    /// Label as shown in the field border, with a marker for required fields
    pub fn display_label(&self) -> String {
        if self.is_required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }

    /// Get the display value for rendering; empty when the placeholder applies
    pub fn display_value(&self, mask: bool) -> String {
        match &self.value {
            FieldValue::Text(s) if self.is_secret && mask => {
                MASK_CHAR.to_string().repeat(s.chars().count())
            }
            FieldValue::Text(s) => s.clone(),
            FieldValue::Role(Role::Unselected) => String::new(),
            FieldValue::Role(r) => r.label().to_string(),
        }
    }
}
