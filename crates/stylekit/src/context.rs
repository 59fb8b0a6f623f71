//! Scoped contexts.
//!
//! A value provided with [`provide`] is visible to [`use_context`] for the
//! duration of the closure, on the current thread. Scopes nest: the innermost
//! value of a type wins. The theme provider and component sub-contexts (such
//! as the table context read by table sections) are built on this.
//!
//! ```rust
//! use std::rc::Rc;
//! use stylekit::context::{provide, use_context};
//!
//! struct Density(u8);
//!
//! assert!(use_context::<Density>().is_none());
//! provide(Rc::new(Density(1)), || {
//!     assert_eq!(use_context::<Density>().unwrap().0, 1);
//!     provide(Rc::new(Density(2)), || {
//!         assert_eq!(use_context::<Density>().unwrap().0, 2);
//!     });
//!     assert_eq!(use_context::<Density>().unwrap().0, 1);
//! });
//! ```

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Result, StyleError};

thread_local! {
    static SCOPES: RefCell<Vec<Rc<dyn Any>>> = const { RefCell::new(Vec::new()) };
}

/// Pops the scope on drop, so a panicking closure does not leak its context.
struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            scopes.borrow_mut().pop();
        });
    }
}

/// Runs `f` with `value` in scope.
pub fn provide<T, R, F>(value: Rc<T>, f: F) -> R
where
    T: 'static,
    F: FnOnce() -> R,
{
    SCOPES.with(|scopes| scopes.borrow_mut().push(value as Rc<dyn Any>));
    let _guard = ScopeGuard;
    f()
}

/// Returns the innermost provided value of type `T`.
pub fn use_context<T: 'static>() -> Option<Rc<T>> {
    SCOPES.with(|scopes| {
        scopes
            .borrow()
            .iter()
            .rev()
            .find_map(|value| Rc::clone(value).downcast::<T>().ok())
    })
}

/// Like [`use_context`], failing with [`StyleError::MissingProvider`].
pub fn require_context<T: 'static>(
    accessor: &'static str,
    provider: &'static str,
) -> Result<Rc<T>> {
    use_context::<T>().ok_or(StyleError::MissingProvider { accessor, provider })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Marker(&'static str);

    #[test]
    fn test_missing_context() {
        assert!(use_context::<Marker>().is_none());
        let err = require_context::<Marker>("use_marker", "MarkerProvider").unwrap_err();
        assert_eq!(
            err.to_string(),
            "use_marker must be used within a `MarkerProvider` scope"
        );
    }

    #[test]
    fn test_scope_ends_with_closure() {
        provide(Rc::new(Marker("a")), || {
            assert_eq!(*use_context::<Marker>().unwrap(), Marker("a"));
        });
        assert!(use_context::<Marker>().is_none());
    }

    #[test]
    fn test_different_types_coexist() {
        provide(Rc::new(Marker("outer")), || {
            provide(Rc::new(42u32), || {
                assert_eq!(*use_context::<u32>().unwrap(), 42);
                assert_eq!(*use_context::<Marker>().unwrap(), Marker("outer"));
            });
        });
    }

    #[test]
    fn test_returns_closure_value() {
        let n = provide(Rc::new(Marker("x")), || 7);
        assert_eq!(n, 7);
    }

    #[test]
    fn test_scope_popped_after_panic() {
        let result = std::panic::catch_unwind(|| {
            provide(Rc::new(Marker("boom")), || panic!("inside scope"));
        });
        assert!(result.is_err());
        assert!(use_context::<Marker>().is_none());
    }
}
