use crate::{
    diagnostic::{Diagnostic, DiagnosticKind},
    member::TypeBody,
    scan::OverrideTable,
};

///
/// FieldKeyMapping
///
/// The synthesized output: one `(field name, effective key)` pair for every
/// instance field, in declaration order. The effective key is the override's
/// coding key when one exists, else the field name itself.
///

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldKeyMapping {
    pairs: Vec<(String, String)>,
}

impl FieldKeyMapping {
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(field, key)| (field.as_str(), key.as_str()))
    }

    #[must_use]
    pub fn key_for(&self, field: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, key)| key.as_str())
    }

    /// True when every field keeps its own name as its key.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.pairs.iter().all(|(field, key)| field == key)
    }

    /// Render the non-identity pairs back into override-string form.
    #[must_use]
    pub fn override_string(&self) -> String {
        self.pairs
            .iter()
            .filter(|(field, key)| field != key)
            .map(|(field, key)| format!("{field}={key}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

///
/// Synthesis
///
/// A successful synthesis. `warning` is set only for the blank-argument
/// case, where the identity mapping is still produced but the invocation is
/// flagged for review.
///

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Synthesis {
    pub mapping: FieldKeyMapping,
    pub warning: Option<Diagnostic>,
}

/// Synthesize the field→key mapping for one invocation.
///
/// `arg` is the raw attribute argument: `None` when the attribute carried no
/// string at all, `Some` otherwise. A blank string downgrades to a warning
/// and falls back to the identity mapping; every other violation aborts the
/// invocation with a single diagnostic and no mapping.
pub fn synthesize(body: &TypeBody, arg: Option<&str>) -> Result<Synthesis, Diagnostic> {
    let Some(arg) = arg else {
        return Err(DiagnosticKind::NoStringArg.into());
    };

    let fields = body.instance_fields();
    let arg = arg.trim();

    let (table, warning) = if arg.is_empty() {
        (
            OverrideTable::default(),
            Some(Diagnostic::new(DiagnosticKind::EmptyString)),
        )
    } else {
        (OverrideTable::parse(arg, &fields)?, None)
    };

    // Emission order is declaration order, never input order.
    let pairs = fields
        .iter()
        .map(|field| {
            let key = table.key_for(&field.name).unwrap_or(&field.name);

            (field.name.clone(), key.to_string())
        })
        .collect();

    Ok(Synthesis {
        mapping: FieldKeyMapping { pairs },
        warning,
    })
}
