use serde::{Deserialize, Deserializer};

/// One field of a partial update: omitted, explicitly `null`, or a value.
///
/// Use with `#[serde(default)]` so a missing key decodes as [`Patch::Absent`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Apply to a non-nullable field: only a value overwrites.
    pub fn apply_to(self, field: &mut T) {
        if let Self::Value(v) = self {
            *field = v;
        }
    }

    /// Apply to a nullable field: `null` clears, a value overwrites.
    pub fn apply_to_option(self, field: &mut Option<T>) {
        match self {
            Self::Absent => {}
            Self::Null => *field = None,
            Self::Value(v) => *field = Some(v),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Self::Value(v),
            None => Self::Null,
        })
    }
}
