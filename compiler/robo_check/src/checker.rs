//! Validator state and reporting helpers.

use robo_diagnostic::{Diagnostic, ErrorCode};
use robo_ir::{FunctionRef, NodeRef, Program, ReturnType};

use crate::scope::Scopes;

/// Walks one program and accumulates its diagnostics.
///
/// Usually driven through [`validate`](crate::validate).
pub struct Validator<'a> {
    pub(crate) program: &'a Program,
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) scopes: Scopes,
    /// Function whose body is being checked.
    pub(crate) current: FunctionRef,
    /// Declared return type of `current`.
    pub(crate) return_type: ReturnType,
}

impl<'a> Validator<'a> {
    pub fn new(program: &'a Program) -> Self {
        Validator {
            program,
            diagnostics: Vec::new(),
            scopes: Scopes::default(),
            current: FunctionRef::Entry,
            return_type: ReturnType::Void,
        }
    }

    /// Check the whole program and return the diagnostics in traversal order.
    pub fn run(mut self) -> Vec<Diagnostic> {
        self.check_program();
        self.diagnostics
    }

    pub(crate) fn error(
        &mut self,
        code: ErrorCode,
        node: NodeRef,
        property: Option<&'static str>,
        message: String,
    ) {
        let diag = Diagnostic::error(code).with_message(message);
        self.push(diag, node, property);
    }

    pub(crate) fn warning(
        &mut self,
        code: ErrorCode,
        node: NodeRef,
        property: Option<&'static str>,
        message: String,
    ) {
        let diag = Diagnostic::warning(code).with_message(message);
        self.push(diag, node, property);
    }

    fn push(&mut self, diag: Diagnostic, node: NodeRef, property: Option<&'static str>) {
        let mut diag = diag.at(node, self.program.span_of(node));
        if let Some(property) = property {
            diag = diag.with_property(property);
        }
        tracing::trace!(code = %diag.code, message = %diag.message, "diagnostic");
        self.diagnostics.push(diag);
    }

    /// Run `f` inside a fresh lexical scope.
    pub(crate) fn with_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.scopes.push();
        let result = f(self);
        self.scopes.pop();
        result
    }
}
