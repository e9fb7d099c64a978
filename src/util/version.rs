pub const APP_NAME: &str = "ADmyBRAND AI Suite";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

/// Footer build label, e.g. `v1.0.0` or `v1.2.0 (3f2a9c1)`.
pub fn version_label() -> String {
    let base = match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    };
    match GIT_COMMIT {
        Some(commit) => format!("{base} ({commit})"),
        None => base,
    }
}

/// Year shown in the footer copyright line.
pub fn copyright_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_package_version() {
        let label = version_label();
        match GIT_TAG {
            Some(tag) => assert!(label.starts_with(tag)),
            None => assert!(label.starts_with(&format!("v{APP_VERSION}"))),
        }
        if let Some(commit) = GIT_COMMIT {
            assert!(label.ends_with(&format!("({commit})")));
        }
    }

    #[test]
    fn copyright_year_is_plausible() {
        assert!(copyright_year() >= 2024);
    }
}
