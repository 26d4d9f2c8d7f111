use crate::{
    diagnostic::{Diagnostic, DiagnosticKind},
    member::FieldDescriptor,
};

///
/// OverrideEntry
///
/// One parsed `name=key` unit, both sides trimmed. Neither side is empty by
/// the time an entry is admitted to the table.
///

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverrideEntry {
    pub property: String,
    pub coding_key: String,
}

///
/// OverrideTable
///
/// The validated overrides for one invocation. Entries keep the order they
/// appeared in the input; lookup is by property name. The table is abandoned
/// wholesale the instant any invariant fails, so a constructed table always
/// satisfies all of them:
///
///   1. every property names a known instance field
///   2. no property appears twice
///   3. no two entries share a coding key
///   4. no coding key equals the name of a different field that has no
///      override of its own
///

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: Vec<OverrideEntry>,
}

impl OverrideTable {
    /// Scan and validate an override string against the known fields.
    ///
    /// The grammar is regular: split on `,` preserving empty segments, then
    /// require exactly one `=` per segment. Validation runs segment by
    /// segment in input order and short-circuits on the first failure; the
    /// shadowing check runs last, once every segment has been accepted.
    pub fn parse(input: &str, fields: &[&FieldDescriptor]) -> Result<Self, Diagnostic> {
        let mut table = Self::default();

        for part in input.split(',') {
            let pieces: Vec<&str> = part.split('=').collect();

            if pieces.len() == 2 {
                let property = pieces[0].trim();
                let coding_key = pieces[1].trim();

                table.admit(part.trim(), property, coding_key, fields)?;
            } else if part.trim().is_empty() {
                return Err(DiagnosticKind::EmptyPart.into());
            } else {
                // Zero or two-plus separators. The stricter reading wins:
                // a key may not itself contain `=`.
                return Err(DiagnosticKind::BadPart {
                    part: part.trim().to_string(),
                }
                .into());
            }
        }

        table.check_shadowing(fields)?;

        Ok(table)
    }

    /// Validate one trimmed segment and push it onto the table.
    fn admit(
        &mut self,
        part: &str,
        property: &str,
        coding_key: &str,
        fields: &[&FieldDescriptor],
    ) -> Result<(), Diagnostic> {
        if property.is_empty() {
            return Err(DiagnosticKind::MissingPropertyName {
                part: part.to_string(),
            }
            .into());
        }
        if coding_key.is_empty() {
            return Err(DiagnosticKind::MissingCodingKey {
                part: part.to_string(),
            }
            .into());
        }

        if !fields.iter().any(|field| field.name == property) {
            return Err(DiagnosticKind::UnknownProperty {
                name: property.to_string(),
            }
            .into());
        }

        if self.key_for(property).is_some() {
            return Err(DiagnosticKind::DuplicateProperty {
                part: part.to_string(),
            }
            .into());
        }

        if self.entries.iter().any(|entry| entry.coding_key == coding_key) {
            return Err(DiagnosticKind::DuplicateCodingKey {
                key: coding_key.to_string(),
                part: part.to_string(),
            }
            .into());
        }

        self.entries.push(OverrideEntry {
            property: property.to_string(),
            coding_key: coding_key.to_string(),
        });

        Ok(())
    }

    /// A chosen key that equals the name of a different, unoverridden field
    /// would silently alias that field's default key.
    fn check_shadowing(&self, fields: &[&FieldDescriptor]) -> Result<(), Diagnostic> {
        for entry in &self.entries {
            let shadows_field = fields.iter().any(|field| field.name == entry.coding_key);

            if shadows_field && self.key_for(&entry.coding_key).is_none() {
                return Err(DiagnosticKind::KeyShadowsProperty {
                    key: entry.coding_key.clone(),
                }
                .into());
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn key_for(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.property == property)
            .map(|entry| entry.coding_key.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OverrideEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a OverrideTable {
    type Item = &'a OverrideEntry;
    type IntoIter = std::slice::Iter<'a, OverrideEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
