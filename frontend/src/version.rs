/// Version information for the frontend application
pub struct Version;

impl Version {
    /// Returns the current version of the application
    pub fn current() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Returns a short version string
    pub fn short() -> String {
        format!("v{}", Self::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_current() {
        let version = Version::current();
        assert!(!version.is_empty());
        assert!(version.contains('.'));
    }

    #[test]
    fn test_version_short() {
        let short = Version::short();
        assert!(short.starts_with('v'));
        assert!(short.contains('.'));
    }
}
