//! Emission context and state.
//!
//! The `EmitContext` holds the program being lowered, the output lines, the
//! current indentation and the declared types of the locals of the function
//! being emitted.

use rustc_hash::{FxHashMap, FxHashSet};

use robo_ir::{Name, Program, VarType};

/// Identifiers a script name must not shadow in the sketch: C++ keywords,
/// Arduino core functions and the sketch's own globals.
const RESERVED: &[&str] = &[
    "angularRate", "auto", "bool", "break", "case", "char", "class", "const", "continue",
    "currentSpeed", "default", "delay", "delete", "do", "double", "else", "enum", "extern",
    "false", "float", "for", "goto", "if", "int", "long", "loop", "millis", "new", "Omni4WD",
    "private", "public", "return", "robot", "Serial", "setup", "short", "signed", "sizeof",
    "static", "struct", "switch", "this", "true", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

/// Code emission context.
pub struct EmitContext<'a> {
    pub program: &'a Program,
    /// Current indentation level.
    indent: usize,
    /// Emitted lines, without trailing newlines.
    lines: Vec<String>,
    /// Declared types of the current function's parameters and variables.
    locals: FxHashMap<Name, VarType>,
    /// Sketch spelling of every script name; no two names share one.
    mangled: FxHashMap<Name, String>,
}

impl<'a> EmitContext<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            indent: 0,
            lines: Vec::with_capacity(64),
            locals: FxHashMap::default(),
            mangled: mangle_all(program),
        }
    }

    /// Resolve a name to its script spelling.
    #[inline]
    pub fn resolve_name(&self, name: Name) -> &str {
        self.program.name(name)
    }

    /// Spell a script identifier for the sketch.
    ///
    /// Characters outside `[A-Za-z0-9_]` become `_` and a leading digit gets
    /// a `_` prefix. A spelling that is reserved or already taken by another
    /// name gets `_` suffixes until it is free; names are claimed in
    /// interning order.
    pub fn mangle(&self, name: Name) -> String {
        match self.mangled.get(&name) {
            Some(spelling) => spelling.clone(),
            None => sanitize(self.resolve_name(name)),
        }
    }

    /// Forget the locals of the previous function.
    pub fn clear_locals(&mut self) {
        self.locals.clear();
    }

    /// Record the type of a parameter or variable.
    pub fn declare_local(&mut self, name: Name, ty: VarType) {
        self.locals.insert(name, ty);
    }

    #[inline]
    pub fn local_type(&self, name: Name) -> Option<VarType> {
        self.locals.get(&name).copied()
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write a line at the current indentation.
    pub fn writeln(&mut self, s: &str) {
        let mut line = "    ".repeat(self.indent);
        line.push_str(s);
        self.lines.push(line);
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Take the emitted lines.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

/// Assign each interned name a distinct sketch spelling.
fn mangle_all(program: &Program) -> FxHashMap<Name, String> {
    let mut taken = FxHashSet::default();
    let mut mangled = FxHashMap::default();
    for (name, text) in program.interner.entries() {
        let mut spelling = sanitize(text);
        while RESERVED.contains(&spelling.as_str()) || taken.contains(&spelling) {
            spelling.push('_');
        }
        taken.insert(spelling.clone());
        mangled.insert(name, spelling);
    }
    mangled
}

fn sanitize(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 1);
    if text.starts_with(|c: char| c.is_ascii_digit()) {
        result.push('_');
    }
    for c in text.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            result.push(c);
        } else {
            result.push('_');
        }
    }
    result
}
