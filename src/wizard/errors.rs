//! Per-field validation messages

use std::collections::BTreeMap;

use crate::models::Field;

/// Validation messages keyed by field, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    messages: BTreeMap<Field, String>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any previous one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    /// Drop the message for a field, returning whether there was one
    pub fn clear(&mut self, field: Field) -> bool {
        self.messages.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Fields that currently carry a message
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.messages.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.messages
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}
