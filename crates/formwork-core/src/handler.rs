//! Callback and opaque-payload wrappers shared by every element kind.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// An element's "I changed" callback.
///
/// Every element always carries a callable handler; the default is inert
/// rather than absent, so the layer above never branches on a missing
/// callback. Handlers receive the freshly produced record and are expected
/// to hand it to [`Form::update_element`](crate::form::Form::update_element)
/// or an equivalent owner entry point.
pub struct UpdateHandler<T>(Option<Rc<dyn Fn(&T)>>);

impl<T> UpdateHandler<T> {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Self(Some(Rc::new(handler)))
    }

    /// The do-nothing handler every element defaults to.
    pub fn inert() -> Self {
        Self(None)
    }

    pub fn is_inert(&self) -> bool {
        self.0.is_none()
    }

    /// Invokes the handler with a new record. A no-op when inert.
    pub fn emit(&self, next: &T) {
        if let Some(handler) = &self.0 {
            handler(next);
        }
    }
}

impl<T> Default for UpdateHandler<T> {
    fn default() -> Self {
        Self::inert()
    }
}

impl<T> Clone for UpdateHandler<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for UpdateHandler<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> fmt::Debug for UpdateHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_some() {
            f.write_str("UpdateHandler(..)")
        } else {
            f.write_str("UpdateHandler(inert)")
        }
    }
}

/// Opaque consumer payload carried by Input and Select records.
///
/// The core never looks inside; it exists so the rendering layer can stash
/// per-element state (icons, option sources, whatever) without a side
/// table keyed by name.
#[derive(Clone, Default)]
pub struct ElementData(Option<Rc<dyn Any>>);

impl ElementData {
    pub fn new<T: Any>(value: T) -> Self {
        Self(Some(Rc::new(value)))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_deref().and_then(|any| any.downcast_ref())
    }
}

impl PartialEq for ElementData {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ElementData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_some() {
            f.write_str("ElementData(..)")
        } else {
            f.write_str("ElementData(none)")
        }
    }
}
