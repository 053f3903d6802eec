use crate::error::CompileError;

use std::cell::RefCell;

/// A handler with which you can emit errors.
///
/// Every builder of a single parse receives the same `&Handler`. Emitting an error
/// hands back an [ErrorEmitted] token that the builder propagates with `?`, so the
/// first failure unwinds the whole conversion.
#[derive(Default, Debug)]
pub struct Handler {
    /// The inner handler.
    /// This construction is used to avoid `&mut` all over the compiler.
    inner: RefCell<HandlerInner>,
}

/// Contains the actual data for `Handler`.
/// Modelled this way to allow for a single `RefCell` to manage them all.
#[derive(Default, Debug)]
struct HandlerInner {
    /// The sink through which errors will be emitted.
    errors: Vec<CompileError>,
}

impl Handler {
    /// Emit the error `err`.
    pub fn emit_err(&self, err: CompileError) -> ErrorEmitted {
        self.inner.borrow_mut().errors.push(err);
        ErrorEmitted { _priv: () }
    }

    /// Returns whether any errors have been emitted so far.
    pub fn has_errors(&self) -> bool {
        !self.inner.borrow().errors.is_empty()
    }

    /// Returns a copy of the errors emitted so far.
    pub fn errors(&self) -> Vec<CompileError> {
        self.inner.borrow().errors.clone()
    }

    /// Extract all the errors from this handler.
    pub fn consume(self) -> Vec<CompileError> {
        self.inner.into_inner().errors
    }
}

/// Proof that an error was emitted through a `Handler`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorEmitted {
    _priv: (),
}
