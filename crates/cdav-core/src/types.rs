use crate::constants::{ADDRESS_OBJECT_EXTENSION, CALENDAR_OBJECT_EXTENSION};

/// Kind of DAV collection an object resource is created in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionType {
    Calendar,
    Addressbook,
}

impl CollectionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::Addressbook => "addressbook",
        }
    }

    /// ## Summary
    /// File extension of the object resources stored in this kind of collection.
    #[must_use]
    pub const fn object_extension(self) -> &'static str {
        match self {
            Self::Calendar => CALENDAR_OBJECT_EXTENSION,
            Self::Addressbook => ADDRESS_OBJECT_EXTENSION,
        }
    }
}

impl std::fmt::Display for CollectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CollectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "calendar" => Ok(Self::Calendar),
            "addressbook" => Ok(Self::Addressbook),
            other => Err(format!("unknown collection type: {other}")),
        }
    }
}
