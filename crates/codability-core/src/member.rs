///
/// FieldDescriptor
///
/// One stored field of the target type, as recovered from its declaration.
/// Only `name` and `is_static` drive the synthesis; the declared type and
/// default-value text are carried for hosts that want them.
///

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub is_static: bool,
    pub declared_type: Option<String>,
    pub default_value: Option<String>,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            declared_type: None,
            default_value: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.declared_type = Some(ty.into());
        self
    }

    #[must_use]
    pub const fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

///
/// Member
///
/// Tagged variant for one member of a type body. Computed accessors have no
/// backing storage and never participate in mapping; `Other` covers members
/// that are not data fields at all (methods, nested types).
///

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Member {
    Field(FieldDescriptor),
    Computed { name: String },
    Other,
}

///
/// TypeBody
///
/// The ordered member list of one type declaration. Read-only once built;
/// each macro invocation constructs a fresh body and discards it after
/// synthesis.
///

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeBody {
    members: Vec<Member>,
}

impl TypeBody {
    #[must_use]
    pub const fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Build a body of plain instance fields, in order. Test helper for
    /// hosts that only know field names.
    #[must_use]
    pub fn from_field_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: names
                .into_iter()
                .map(|name| Member::Field(FieldDescriptor::new(name)))
                .collect(),
        }
    }

    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Extract the stored instance fields in declaration order.
    ///
    /// Computed members, non-field members, and static fields are skipped.
    /// The returned order is the emission order of the synthesized mapping,
    /// independent of the order overrides were written.
    #[must_use]
    pub fn instance_fields(&self) -> Vec<&FieldDescriptor> {
        self.members
            .iter()
            .filter_map(|member| match member {
                Member::Field(field) if !field.is_static => Some(field),
                _ => None,
            })
            .collect()
    }
}
