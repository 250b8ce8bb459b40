use chrono::{DateTime, Utc};
use packagebuilder_core::Overwrite;

/// Options controlling how package files are written.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Record rendered content instead of touching the filesystem.
    pub dry_run: bool,
    /// What to do when a package file already exists.
    pub overwrite: Overwrite,
    /// Insert an autogenerated-timestamp comment into each manifest.
    pub autogenerated_timestamp: bool,
    /// Instant shown in the timestamp comment.
    pub generated_at: DateTime<Utc>,
    /// Manifest file extension without dot.
    pub extension: String,
}

impl WriterOptions {
    pub fn new(dry_run: bool, overwrite_existing: bool) -> Self {
        Self {
            dry_run,
            overwrite: Overwrite::from_flag(overwrite_existing),
            ..Self::default()
        }
    }

    pub fn with_autogenerated_timestamp(mut self, enabled: bool) -> Self {
        self.autogenerated_timestamp = enabled;
        self
    }

    /// Pin the timestamp shown in manifests.
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = at;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// The comment line rendered when timestamps are enabled.
    pub fn timestamp_comment(&self) -> Option<String> {
        self.autogenerated_timestamp.then(|| {
            format!(
                "// Autogenerated at {}",
                self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            )
        })
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            overwrite: Overwrite::Always,
            autogenerated_timestamp: false,
            generated_at: Utc::now(),
            extension: "php".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_new_maps_overwrite_flag() {
        let opts = WriterOptions::new(true, false);
        assert!(opts.dry_run);
        assert_eq!(opts.overwrite, Overwrite::IfMissing);
        assert_eq!(WriterOptions::new(false, true).overwrite, Overwrite::Always);
    }

    #[test]
    fn test_timestamp_comment() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let opts = WriterOptions::default().with_generated_at(at);
        assert_eq!(opts.timestamp_comment(), None);

        let opts = opts.with_autogenerated_timestamp(true);
        assert_eq!(
            opts.timestamp_comment().as_deref(),
            Some("// Autogenerated at 2024-03-09 14:05:00 UTC")
        );
    }

    #[test]
    fn test_extension_leading_dot_is_ignored() {
        let opts = WriterOptions::default().with_extension(".inc");
        assert_eq!(opts.extension, "inc");
    }
}
