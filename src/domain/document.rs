use bytes::Bytes;

/// An uploaded file as received from the client. Dropped once its text has been extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub filename: String,
    pub content_type: ContentType,
    pub data: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Other(String),
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case("application/pdf") {
            Self::Pdf
        } else {
            Self::Other(essence.to_string())
        }
    }

    pub fn as_mime(&self) -> &str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Other(mime) => mime,
        }
    }

    pub fn is_pdf(&self) -> bool {
        matches!(self, Self::Pdf)
    }
}

impl RawDocument {
    pub fn new(filename: String, content_type: ContentType, data: impl Into<Bytes>) -> Self {
        Self {
            filename,
            content_type,
            data: data.into(),
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}
