use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

/// Type-erased value carried by an active drag.
///
/// Sources attach any `Clone + PartialEq` value; targets ask for it back by
/// type. Asking for the wrong type yields `None` instead of failing.
#[derive(Clone)]
pub struct Payload {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Payload {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            value: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// True when the payload holds a `T` equal to `other`.
    pub fn matches<T>(&self, other: &T) -> bool
    where
        T: Any + PartialEq,
    {
        self.value.downcast_ref::<T>().is_some_and(|value| value == other)
    }

    /// Clone the carried value out if it is a `T`.
    pub fn downcast<T>(&self) -> Option<T>
    where
        T: Any + Clone,
    {
        self.value.downcast_ref::<T>().cloned()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}
