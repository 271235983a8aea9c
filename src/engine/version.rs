use crate::error::{DockPruneError, Result};
use semver::{BuildMetadata, Prerelease, Version};

/// First daemon version that requires --volumes for volume pruning.
pub const VOLUMES_FLAG_MIN: Version = Version::new(17, 6, 1);

/// Whether the daemon expects `--volumes` on `docker system prune`.
///
/// Prerelease-tagged versions (e.g. `17.6.1-ce`) order below the bare
/// release per semver rules, same as the loose node-semver comparison
/// deployed installations were built against.
pub fn supports_volumes_flag(server_version: &str) -> Result<bool> {
    Ok(parse_loose(server_version)? >= VOLUMES_FLAG_MIN)
}

/// Parse a server version with the tolerance daemons need in practice:
/// a leading `v`, leading zeros in segments (`17.06.1`), and one or two
/// missing segments (`18.0` reads as `18.0.0`). Prerelease and build
/// suffixes are kept. Anything else is rejected.
pub fn parse_loose(input: &str) -> Result<Version> {
    let invalid = |reason: &str| {
        DockPruneError::InvalidServerVersion(input.to_string(), reason.to_string())
    };

    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(invalid("empty version string"));
    }

    let (rest, build) = match trimmed.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (trimmed, None),
    };
    let (core, pre) = match rest.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (rest, None),
    };

    let segments: Vec<&str> = core.split('.').collect();
    if segments.len() > 3 {
        return Err(invalid("more than three version segments"));
    }

    let mut numbers = [0u64; 3];
    for (i, segment) in segments.iter().enumerate() {
        numbers[i] = segment
            .parse::<u64>()
            .map_err(|_| invalid("non-numeric version segment"))?;
    }

    let mut version = Version::new(numbers[0], numbers[1], numbers[2]);
    if let Some(pre) = pre {
        version.pre = Prerelease::new(pre).map_err(|_| invalid("invalid prerelease tag"))?;
    }
    if let Some(build) = build {
        version.build =
            BuildMetadata::new(build).map_err(|_| invalid("invalid build metadata"))?;
    }

    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_loose("18.3.1").unwrap(), Version::new(18, 3, 1));
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(parse_loose("17.06.1").unwrap(), Version::new(17, 6, 1));
        assert_eq!(parse_loose("18.03.0").unwrap(), Version::new(18, 3, 0));
    }

    #[test]
    fn test_parse_short_versions() {
        assert_eq!(parse_loose("18.0").unwrap(), Version::new(18, 0, 0));
        assert_eq!(parse_loose("19").unwrap(), Version::new(19, 0, 0));
    }

    #[test]
    fn test_parse_v_prefix() {
        assert_eq!(parse_loose("v18.03.1").unwrap(), Version::new(18, 3, 1));
    }

    #[test]
    fn test_parse_suffixes() {
        let version = parse_loose("17.06.1-ce").unwrap();
        assert_eq!((version.major, version.minor, version.patch), (17, 6, 1));
        assert_eq!(version.pre.as_str(), "ce");

        let version = parse_loose("24.0.7+build.5").unwrap();
        assert_eq!(version.build.as_str(), "build.5");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_loose("").is_err());
        assert!(parse_loose("latest").is_err());
        assert!(parse_loose("1.2.3.4").is_err());
        assert!(parse_loose("17..1").is_err());
    }

    #[test]
    fn test_volumes_flag_threshold() {
        assert!(supports_volumes_flag("18.0.0").unwrap());
        assert!(supports_volumes_flag("17.6.1").unwrap());
        assert!(supports_volumes_flag("17.06.1").unwrap());
        assert!(supports_volumes_flag("24.0.7").unwrap());

        assert!(!supports_volumes_flag("17.6.0").unwrap());
        assert!(!supports_volumes_flag("17.3.0").unwrap());
        assert!(!supports_volumes_flag("1.13.1").unwrap());
    }

    #[test]
    fn test_volumes_flag_prerelease_orders_below_release() {
        // 17.6.1-ce < 17.6.1 under semver, as node-semver also ruled
        assert!(!supports_volumes_flag("17.6.1-ce").unwrap());
        assert!(supports_volumes_flag("17.6.2-ce").unwrap());
    }

    #[test]
    fn test_volumes_flag_unparseable_is_an_error() {
        assert!(supports_volumes_flag("unknown").is_err());
    }
}
