//! Invocation request built from the command line.

use std::fmt;
use std::path::Path;
use std::path::PathBuf;

/// Save format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Console save packed with zlib streams, unpacked through offzip.
    Ns,
    /// PC save format. Recognized but not implemented.
    Win,
}

impl Format {
    /// Parses a legacy selector token (`-ns`, `-win`), ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use savextract_core::Format;
    ///
    /// assert_eq!(Format::from_token("-NS"), Some(Format::Ns));
    /// assert_eq!(Format::from_token("-win"), Some(Format::Win));
    /// assert_eq!(Format::from_token("-docs"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("-ns") {
            Some(Self::Ns)
        } else if token.eq_ignore_ascii_case("-win") {
            Some(Self::Win)
        } else {
            None
        }
    }

    /// Returns `true` if the pipeline can process this format.
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::Ns)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ns => write!(f, "ns"),
            Self::Win => write!(f, "win"),
        }
    }
}

/// A single extraction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    archive: PathBuf,
    destination: Option<PathBuf>,
    use_docs_dir: bool,
}

impl InvocationRequest {
    /// Creates a request for `archive`, relocating into `destination`.
    pub fn new(archive: impl Into<PathBuf>, destination: Option<PathBuf>) -> Self {
        Self {
            archive: archive.into(),
            destination,
            use_docs_dir: false,
        }
    }

    /// Sends output to the default save folder under `Documents`.
    #[must_use]
    pub fn with_docs_dir(mut self, use_docs_dir: bool) -> Self {
        self.use_docs_dir = use_docs_dir;
        self
    }

    /// Archive handed to the decompression tool.
    #[must_use]
    pub fn archive(&self) -> &Path {
        &self.archive
    }

    /// Explicit destination, if one was given.
    #[must_use]
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// Whether the default save folder was requested.
    #[must_use]
    pub const fn use_docs_dir(&self) -> bool {
        self.use_docs_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tokens() {
        assert_eq!(Format::from_token("-ns"), Some(Format::Ns));
        assert_eq!(Format::from_token("-Win"), Some(Format::Win));
        assert_eq!(Format::from_token("ns"), None);
        assert_eq!(Format::from_token(""), None);
    }

    #[test]
    fn test_only_ns_is_implemented() {
        assert!(Format::Ns.is_implemented());
        assert!(!Format::Win.is_implemented());
        assert_eq!(Format::Win.to_string(), "win");
    }

    #[test]
    fn test_request_accessors() {
        let request = InvocationRequest::new("saves/Manual.1.sav", Some(PathBuf::from("out")))
            .with_docs_dir(true);
        assert_eq!(request.archive(), Path::new("saves/Manual.1.sav"));
        assert_eq!(request.destination(), Some(Path::new("out")));
        assert!(request.use_docs_dir());
    }
}
