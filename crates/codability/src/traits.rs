///
/// CodingKey
///
/// Implemented by the generated key enum. One variant per stored field, in
/// declaration order; `coding_key` is the effective serialized key.
///

pub trait CodingKey: Copy + PartialEq + 'static {
    /// Every key, in field declaration order.
    const ALL: &'static [Self];

    /// The field's name in the source declaration.
    fn field_name(self) -> &'static str;

    /// The key the field is serialized under.
    fn coding_key(self) -> &'static str;

    #[must_use]
    fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.field_name() == name)
    }

    #[must_use]
    fn from_coding_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.coding_key() == key)
    }
}

///
/// HasCodingKeys
///
/// Links a type to its generated key enum.
///

pub trait HasCodingKeys {
    type Keys: CodingKey;

    #[must_use]
    fn coding_keys() -> &'static [Self::Keys] {
        Self::Keys::ALL
    }
}
