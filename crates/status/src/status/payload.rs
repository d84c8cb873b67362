use serde_json::{Map, Value};

use super::Status;
use crate::StatusError;

impl Status {
    /// Stores the payload, replacing any previous one.
    ///
    /// Setting `null` is the same as never setting a payload.
    pub fn set_payload(&mut self, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        self.payload = (!value.is_null()).then_some(value);
        self
    }

    /// Alias of [`set_payload`](Self::set_payload).
    pub fn add_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.set_payload(value)
    }

    /// Returns the payload, if one was set.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::ErrorsUnresolved`] while any error is recorded,
    /// whether or not a payload was set.
    pub fn payload(&self) -> Result<Option<&Value>, StatusError> {
        self.ensure_resolved()?;
        Ok(self.payload.as_ref())
    }

    /// Removes and returns the payload, with the same gating as
    /// [`payload`](Self::payload).
    pub fn take_payload(&mut self) -> Result<Option<Value>, StatusError> {
        self.ensure_resolved()?;
        Ok(self.payload.take())
    }

    /// Reports whether a payload is set, regardless of recorded errors.
    #[must_use]
    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    fn ensure_resolved(&self) -> Result<(), StatusError> {
        match self.errors.first() {
            Some(first) => Err(StatusError::ErrorsUnresolved {
                count: self.errors.len(),
                first: first.rendered(),
            }),
            None => Ok(()),
        }
    }

    /// Attaches a caller-chosen field, replacing any field of the same name.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Returns the extra field called `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Removes and returns the extra field called `name`.
    pub fn remove_field(&mut self, name: &str) -> Option<Value> {
        self.extra.remove(name)
    }

    /// Returns every extra field.
    #[must_use]
    pub const fn extra_fields(&self) -> &Map<String, Value> {
        &self.extra
    }
}
