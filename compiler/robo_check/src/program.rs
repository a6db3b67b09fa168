//! Program- and function-level rules.

use robo_diagnostic::ErrorCode;
use robo_ir::{Function, FunctionRef, NodeRef, ReturnType};
use rustc_hash::FxHashSet;

use crate::checker::Validator;
use crate::Ty;

impl Validator<'_> {
    pub(crate) fn check_program(&mut self) {
        let program = self.program;

        match &program.entry {
            None => self.error(
                ErrorCode::E1001,
                NodeRef::Program,
                None,
                "program has no entry function".to_string(),
            ),
            Some(entry) if entry.return_type != ReturnType::Void => self.error(
                ErrorCode::E1002,
                NodeRef::Function(FunctionRef::Entry),
                Some("return_type"),
                format!(
                    "entry function must return `void`, found `{}`",
                    entry.return_type
                ),
            ),
            Some(_) => {}
        }

        let mut seen = FxHashSet::default();
        for (index, function) in program.functions.iter().enumerate() {
            let Some(name) = function.name else { continue };
            if !seen.insert(name) {
                self.error(
                    ErrorCode::E1003,
                    NodeRef::Function(FunctionRef::Declared(index)),
                    Some("name"),
                    format!("duplicate function `{}`", program.name(name)),
                );
            }
        }

        for (function_ref, function) in program.all_functions() {
            self.check_function(function_ref, function);
        }
    }

    fn check_function(&mut self, function_ref: FunctionRef, function: &Function) {
        let program = self.program;
        self.current = function_ref;
        self.return_type = function.return_type;
        self.scopes.clear();

        // Parameters live in their own frame, outside the body block.
        self.with_scope(|this| {
            for (index, param) in program.params(function).iter().enumerate() {
                if !this.scopes.declare(param.name, Ty::from(param.ty)) {
                    this.error(
                        ErrorCode::E1004,
                        NodeRef::Param {
                            function: function_ref,
                            index,
                        },
                        Some("name"),
                        format!("duplicate parameter `{}`", program.name(param.name)),
                    );
                }
            }
            this.check_block(function.body);
        });
    }
}
