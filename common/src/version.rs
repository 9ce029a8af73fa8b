use std::fmt::{Display, Formatter};

/// A semantic-style version triple.
///
/// Ordering is derived, which yields the standard lexicographic comparison:
/// major first, then minor, then patch.
#[derive(
    Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<(u32, u32, u32)> for Version {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Version::new(2, 0, 0) > Version::new(1, 9, 9));
        assert!(Version::new(1, 2, 0) > Version::new(1, 1, 5));
        assert!(Version::new(1, 1, 6) > Version::new(1, 1, 5));
        assert!(Version::new(1, 2, 0) >= Version::new(1, 2, 0));
    }

    #[test]
    fn renders_dotted() {
        assert_eq!(Version::new(1, 2, 0).to_string(), "1.2.0");
        assert_eq!(Version::new(0, 0, 0).to_string(), "0.0.0");
    }
}
