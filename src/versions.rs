//! Runtime catalog version tables
//!
//! The catalog versions available for each runtime distribution, newest
//! first, plus the Kamelets catalog version. Version identifiers come from
//! the upstream catalog registry and are treated as opaque strings; some
//! carry vendor suffixes that are not semver.

use std::fmt;
use std::str::FromStr;

/// Kamelets catalog version
pub const KAMELETS_VERSION: &str = "4.15.0";

const MAIN_VERSIONS: &[&str] = &[
    "4.17.0",
    "4.14.4",
    "4.14.2.redhat-00011",
    "4.10.7.redhat-00009",
    "4.8.5.redhat-00008",
    "4.4.0.redhat-00046",
];

const QUARKUS_VERSIONS: &[&str] = &[
    "3.30.0",
    "3.27.2",
    "3.27.1.redhat-00003",
    "3.20.0.redhat-00010",
    "3.15.0.redhat-00010",
    "3.8.0.redhat-00018",
];

const SPRING_BOOT_VERSIONS: &[&str] = &[
    "4.17.0",
    "4.14.4",
    "4.14.2.redhat-00015",
    "4.10.7.redhat-00013",
    "4.8.5.redhat-00008",
    "4.4.0.redhat-00039",
];

const CITRUS_VERSIONS: &[&str] = &["4.9.2"];

/// A runtime distribution with its own catalog line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runtime {
    Main,
    Quarkus,
    SpringBoot,
    Citrus,
}

impl Runtime {
    pub const ALL: [Runtime; 4] = [
        Runtime::Main,
        Runtime::Quarkus,
        Runtime::SpringBoot,
        Runtime::Citrus,
    ];

    /// Display label for this runtime
    pub fn label(&self) -> &'static str {
        match self {
            Runtime::Main => "Main",
            Runtime::Quarkus => "Quarkus",
            Runtime::SpringBoot => "Spring Boot",
            Runtime::Citrus => "Citrus",
        }
    }

    /// Known catalog versions, newest first
    pub fn versions(&self) -> &'static [&'static str] {
        match self {
            Runtime::Main => MAIN_VERSIONS,
            Runtime::Quarkus => QUARKUS_VERSIONS,
            Runtime::SpringBoot => SPRING_BOOT_VERSIONS,
            Runtime::Citrus => CITRUS_VERSIONS,
        }
    }

    /// The newest known catalog version
    pub fn latest(&self) -> &'static str {
        self.versions().first().copied().unwrap_or_default()
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Runtime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" => Ok(Runtime::Main),
            "quarkus" => Ok(Runtime::Quarkus),
            "spring-boot" | "springboot" => Ok(Runtime::SpringBoot),
            "citrus" => Ok(Runtime::Citrus),
            other => Err(format!(
                "unknown runtime '{}', expected one of: main, quarkus, spring-boot, citrus",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_runtime_has_versions() {
        for runtime in Runtime::ALL {
            assert!(!runtime.versions().is_empty(), "{} has no versions", runtime);
        }
    }

    #[test]
    fn test_latest_is_first_entry() {
        assert_eq!(Runtime::Main.latest(), "4.17.0");
        assert_eq!(Runtime::Quarkus.latest(), "3.30.0");
        assert_eq!(Runtime::Citrus.latest(), "4.9.2");
    }

    #[test]
    fn test_runtime_parsing() {
        assert_eq!("main".parse::<Runtime>().unwrap(), Runtime::Main);
        assert_eq!("spring-boot".parse::<Runtime>().unwrap(), Runtime::SpringBoot);
        assert!("unknown".parse::<Runtime>().is_err());
    }
}
