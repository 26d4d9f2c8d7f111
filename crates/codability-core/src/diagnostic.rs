use thiserror::Error as ThisError;

/// Placeholder rewrite offered when the attribute argument is missing or
/// blank. A full replacement for the attribute, ready to edit.
pub const PLACEHOLDER_REWRITE: &str = "#[coding_keys(\"<property>=<coding-key>\")]";

///
/// DiagnosticKind
///
/// Every way the override string can be rejected. Offending substrings are
/// quoted verbatim (trimmed) so the message pinpoints the bad segment.
///

#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum DiagnosticKind {
    #[error("CodingKeys needs a coding key string")]
    NoStringArg,

    #[error("empty coding key string")]
    EmptyString,

    #[error("empty name=key segment")]
    EmptyPart,

    #[error("bad name=key segment: \"{part}\"")]
    BadPart { part: String },

    #[error("property name missing in: \"{part}\"")]
    MissingPropertyName { part: String },

    #[error("coding key missing in: \"{part}\"")]
    MissingCodingKey { part: String },

    #[error("\"{name}\" is not a stored instance property")]
    UnknownProperty { name: String },

    #[error("duplicate property name in: \"{part}\"")]
    DuplicateProperty { part: String },

    #[error("\"{key}\" is an existing coding key in: \"{part}\"")]
    DuplicateCodingKey { key: String, part: String },

    #[error("coding key \"{key}\" is the name of a property with no key override")]
    KeyShadowsProperty { key: String },
}

impl DiagnosticKind {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::EmptyString => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

///
/// Severity
///

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

///
/// Diagnostic
///
/// One structured report for one invocation. Message rendering and the
/// suggested rewrite are kept separate so the host can drive an editor fix
/// action from the rewrite alone.
///

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub suggested_rewrite: Option<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(kind: DiagnosticKind) -> Self {
        // The two argument-shaped failures have a known mechanical fix.
        let suggested_rewrite = match kind {
            DiagnosticKind::NoStringArg | DiagnosticKind::EmptyString => {
                Some(PLACEHOLDER_REWRITE.to_string())
            }
            _ => None,
        };

        Self {
            kind,
            suggested_rewrite,
        }
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.kind.severity()
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<DiagnosticKind> for Diagnostic {
    fn from(kind: DiagnosticKind) -> Self {
        Self::new(kind)
    }
}
