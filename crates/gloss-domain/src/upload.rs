//! Uploaded-file input object

/// An uploaded document awaiting validation
///
/// Produced once at the boundary (HTTP multipart field or CLI file read)
/// and treated as immutable from then on. The declared media type is
/// whatever the client sent; adapters also match on the filename suffix,
/// so `media_type` may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Client-supplied file name (may be empty)
    pub filename: String,

    /// Declared media type, if the client sent one
    pub media_type: Option<String>,

    /// Raw file bytes
    pub data: Vec<u8>,
}

impl UploadedFile {
    /// Create a new uploaded file
    ///
    /// # Examples
    ///
    /// ```
    /// use gloss_domain::UploadedFile;
    ///
    /// let file = UploadedFile::new("notes.txt", Some("text/plain".to_string()), b"hello".to_vec());
    /// assert_eq!(file.filename, "notes.txt");
    /// ```
    pub fn new(filename: impl Into<String>, media_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            media_type,
            data,
        }
    }

    /// Case-insensitive filename suffix test
    ///
    /// `ext` includes the leading dot, e.g. `".pdf"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gloss_domain::UploadedFile;
    ///
    /// let file = UploadedFile::new("Report.PDF", None, vec![]);
    /// assert!(file.has_extension(".pdf"));
    /// assert!(!file.has_extension(".txt"));
    /// ```
    pub fn has_extension(&self, ext: &str) -> bool {
        self.filename.to_lowercase().ends_with(ext)
    }

    /// Whether the declared media type equals `media_type`
    pub fn declares_media_type(&self, media_type: &str) -> bool {
        self.media_type.as_deref() == Some(media_type)
    }
}
