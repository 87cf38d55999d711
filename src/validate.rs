//! Pre-start validation of a window's tree and bindings.
//!
//! Errors block `Window::start`. Warnings are returned alongside and logged,
//! but never stop a launch.

use std::collections::BTreeMap;
use std::fmt;

use crate::dom::{Element, Node, NodeSequence};
use crate::event::BindingTable;

// ---------------------------------------------------------------------------
// Diagnostic
// ---------------------------------------------------------------------------

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// A single finding of the validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The same identifier is used by more than one element.
    DuplicateId { id: String, count: usize },
    /// The same binding name is registered more than once.
    DuplicateBinding { name: String },
    /// An inline style entry does not read back as a single declaration.
    MalformedStyle { element: String, property: String },
    /// A button's callback name is not a JavaScript identifier, so its
    /// `onclick` cannot call it.
    InvalidCallbackName { button: String, callback: String },
    /// A button calls a name that has no registered binding.
    InertBinding { button: String, callback: String },
    /// A button has no callback at all.
    EmptyCallback { button: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::DuplicateId { .. }
            | Diagnostic::DuplicateBinding { .. }
            | Diagnostic::MalformedStyle { .. }
            | Diagnostic::InvalidCallbackName { .. } => Severity::Error,
            Diagnostic::InertBinding { .. } | Diagnostic::EmptyCallback { .. } => {
                Severity::Warning
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateId { id, count } => {
                write!(f, "identifier `{id}` is used by {count} elements")
            }
            Diagnostic::DuplicateBinding { name } => {
                write!(f, "binding `{name}` is registered more than once")
            }
            Diagnostic::MalformedStyle { element, property } => {
                write!(f, "{element} has a malformed style entry `{property}`")
            }
            Diagnostic::InvalidCallbackName { button, callback } => {
                write!(f, "{button} calls `{callback}`, which is not a JavaScript identifier")
            }
            Diagnostic::InertBinding { button, callback } => {
                write!(f, "{button} calls `{callback}`, which is not bound")
            }
            Diagnostic::EmptyCallback { button } => write!(f, "{button} has no callback"),
        }
    }
}

// ---------------------------------------------------------------------------
// ValidationReport
// ---------------------------------------------------------------------------

/// All diagnostics found by one validation pass, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// No diagnostics of any severity.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

/// Check identifier uniqueness across head and body, binding-name uniqueness,
/// style well-formedness, and that every button calls a valid, bound name.
pub fn validate(head: &NodeSequence, body: &NodeSequence, bindings: &BindingTable) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut nodes: Vec<&Node> = head.descendants();
    nodes.extend(body.descendants());

    let mut id_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for node in &nodes {
        if let Some(id) = node.name() {
            *id_counts.entry(id).or_default() += 1;
        }
    }
    for (id, count) in id_counts {
        if count > 1 {
            report.push(Diagnostic::DuplicateId {
                id: id.to_owned(),
                count,
            });
        }
    }

    for name in bindings.duplicate_names() {
        report.push(Diagnostic::DuplicateBinding {
            name: name.to_owned(),
        });
    }

    for node in &nodes {
        for property in node.attrs().style.malformed_entries() {
            report.push(Diagnostic::MalformedStyle {
                element: describe(*node),
                property: property.to_owned(),
            });
        }
    }

    for button in head.buttons().into_iter().chain(body.buttons()) {
        if button.is_inert() {
            report.push(Diagnostic::EmptyCallback {
                button: describe(button),
            });
        } else if !is_js_identifier(button.callback()) {
            report.push(Diagnostic::InvalidCallbackName {
                button: describe(button),
                callback: button.callback().to_owned(),
            });
        } else if !bindings.contains(button.callback()) {
            report.push(Diagnostic::InertBinding {
                button: describe(button),
                callback: button.callback().to_owned(),
            });
        }
    }

    report
}

/// Whether `name` can be called from an `onclick` as written: an identifier start
/// (letter, `_` or `$`) followed by letters, digits, `_` or `$`.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// `<tag id="..">` or just `<tag>` for anonymous elements.
fn describe(node: &impl Element) -> String {
    match node.name() {
        Some(id) => format!("<{} id=\"{id}\">", node.tag()),
        None => format!("<{}>", node.tag()),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
