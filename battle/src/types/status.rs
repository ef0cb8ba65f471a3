//! Major status conditions

/// Non-volatile status conditions, kept through switching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Sleep,
    Paralysis,
    Freeze,
    BadPoison,
    Burn,
    Poison,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Sleep,
        Status::Paralysis,
        Status::Freeze,
        Status::BadPoison,
        Status::Burn,
        Status::Poison,
    ];

    /// Parse a Showdown status code; "fnt" and unknown codes are `None`
    pub fn from_protocol(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.to_protocol() == code)
    }

    pub fn to_protocol(&self) -> &'static str {
        match self {
            Status::Sleep => "slp",
            Status::Paralysis => "par",
            Status::Freeze => "frz",
            Status::BadPoison => "tox",
            Status::Burn => "brn",
            Status::Poison => "psn",
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Status {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_protocol())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Status {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let s = String::deserialize(deserializer)?;
        Status::from_protocol(&s).ok_or_else(|| D::Error::custom(format!("unknown status `{s}`")))
    }
}
