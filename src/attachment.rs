//! Media attachments for `process_image` / `process_audio`.

use crate::{ClientError, Error, ErrorContext, Result};
use bytes::Bytes;
use futures::Stream;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

/// Boxed byte stream accepted as an attachment body.
pub type ByteStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send + Sync + 'static>>;

/// Where an attachment's bytes come from.
pub enum AttachmentSource {
    /// File on the local filesystem, streamed at send time under its base name.
    Path(PathBuf),
    /// In-memory buffer, sent verbatim under the default file name.
    Bytes(Bytes),
    /// Caller-supplied stream, trusted to carry valid media data.
    Stream(ByteStream),
}

impl AttachmentSource {
    pub fn stream<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Bytes>> + Send + Sync + 'static,
    {
        AttachmentSource::Stream(Box::pin(stream))
    }

    pub fn reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + Sync + 'static,
    {
        AttachmentSource::Stream(Box::pin(ReaderStream::new(reader)))
    }

    /// Turn the source into a sendable attachment. Path sources are checked
    /// and opened here, so a missing file fails before any request is built.
    pub(crate) async fn resolve(self, kind: AttachmentKind) -> Result<Attachment> {
        let context = || {
            ErrorContext::new()
                .with_field_path(kind.field_name())
                .with_source(kind.operation())
        };
        match self {
            AttachmentSource::Path(path) => {
                if path.as_os_str().is_empty() {
                    return Err(Error::validation_with_context(kind.missing_message(), context()));
                }
                let metadata = match tokio::fs::metadata(&path).await {
                    Ok(m) => m,
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        return Err(Error::not_found_with_context(path, context()));
                    }
                    Err(e) => {
                        return Err(ClientError::local(format!("Cannot read {}: {}", path.display(), e)).into());
                    }
                };
                if metadata.is_dir() {
                    return Err(Error::validation_with_context(
                        format!("{} is a directory, not a {} file", path.display(), kind.field_name()),
                        context(),
                    ));
                }
                let file = tokio::fs::File::open(&path).await.map_err(|e| {
                    Error::from(ClientError::local(format!("Cannot open {}: {}", path.display(), e)))
                })?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| kind.default_file_name().to_string());
                Ok(Attachment::new(
                    kind,
                    file_name,
                    AttachmentBody::File {
                        file,
                        len: metadata.len(),
                    },
                ))
            }
            AttachmentSource::Bytes(bytes) => {
                if bytes.is_empty() {
                    return Err(Error::validation_with_context(kind.missing_message(), context()));
                }
                Ok(Attachment::new(
                    kind,
                    kind.default_file_name().to_string(),
                    AttachmentBody::Bytes(bytes),
                ))
            }
            AttachmentSource::Stream(stream) => Ok(Attachment::new(
                kind,
                kind.default_file_name().to_string(),
                AttachmentBody::Stream(stream),
            )),
        }
    }
}

impl fmt::Debug for AttachmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentSource::Path(p) => f.debug_tuple("Path").field(p).finish(),
            AttachmentSource::Bytes(b) => write!(f, "Bytes({} bytes)", b.len()),
            AttachmentSource::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl From<&str> for AttachmentSource {
    fn from(path: &str) -> Self {
        AttachmentSource::Path(PathBuf::from(path))
    }
}

impl From<String> for AttachmentSource {
    fn from(path: String) -> Self {
        AttachmentSource::Path(PathBuf::from(path))
    }
}

impl From<&Path> for AttachmentSource {
    fn from(path: &Path) -> Self {
        AttachmentSource::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for AttachmentSource {
    fn from(path: PathBuf) -> Self {
        AttachmentSource::Path(path)
    }
}

impl From<Vec<u8>> for AttachmentSource {
    fn from(bytes: Vec<u8>) -> Self {
        AttachmentSource::Bytes(Bytes::from(bytes))
    }
}

impl From<Bytes> for AttachmentSource {
    fn from(bytes: Bytes) -> Self {
        AttachmentSource::Bytes(bytes)
    }
}

impl From<&'static [u8]> for AttachmentSource {
    fn from(bytes: &'static [u8]) -> Self {
        AttachmentSource::Bytes(Bytes::from_static(bytes))
    }
}

/// Which multipart field the attachment is sent under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    Image,
    Audio,
}

impl AttachmentKind {
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Image => "image.jpg",
            Self::Audio => "audio.mp3",
        }
    }

    pub(crate) fn operation(&self) -> &'static str {
        match self {
            Self::Image => "process_image",
            Self::Audio => "process_audio",
        }
    }

    fn missing_message(&self) -> String {
        format!("{} is required", self.field_name())
    }
}

/// Resolved attachment ready for the transport.
#[derive(Debug)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub file_name: String,
    pub content_type: &'static str,
    pub body: AttachmentBody,
}

impl Attachment {
    fn new(kind: AttachmentKind, file_name: String, body: AttachmentBody) -> Self {
        let content_type = content_type_for(&file_name);
        Self {
            kind,
            file_name,
            content_type,
            body,
        }
    }
}

pub enum AttachmentBody {
    Bytes(Bytes),
    File { file: tokio::fs::File, len: u64 },
    Stream(ByteStream),
}

impl fmt::Debug for AttachmentBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentBody::Bytes(b) => write!(f, "Bytes({} bytes)", b.len()),
            AttachmentBody::File { len, .. } => write!(f, "File({} bytes)", len),
            AttachmentBody::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Content type from the file extension; unknown extensions are sent as
/// `application/octet-stream`.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a") => "audio/mp4",
        Some("ogg") | Some("oga") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("aac") => "audio/aac",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("image.jpg"), "image/jpeg");
        assert_eq!(content_type_for("PHOTO.PNG"), "image/png");
        assert_eq!(content_type_for("audio.mp3"), "audio/mpeg");
        assert_eq!(content_type_for("voice.wav"), "audio/wav");
        assert_eq!(content_type_for("notes"), "application/octet-stream");
        assert_eq!(content_type_for("archive.tar.gz"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_missing_path_is_not_found() {
        let err = AttachmentSource::from("/nonexistent/path.jpg")
            .resolve(AttachmentKind::Image)
            .await
            .unwrap_err();
        match err {
            Error::NotFound { path, context } => {
                assert_eq!(path, PathBuf::from("/nonexistent/path.jpg"));
                assert_eq!(context.source.as_deref(), Some("process_image"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_sources_are_rejected() {
        let err = AttachmentSource::from("").resolve(AttachmentKind::Audio).await.unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));

        let err = AttachmentSource::from(Vec::new())
            .resolve(AttachmentKind::Image)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[tokio::test]
    async fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = AttachmentSource::from(dir.path())
            .resolve(AttachmentKind::Image)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[tokio::test]
    async fn test_path_uses_base_name() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"\x89PNG....").unwrap();

        let att = AttachmentSource::from(file.path())
            .resolve(AttachmentKind::Image)
            .await
            .unwrap();
        let expected = file.path().file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(att.file_name, expected);
        assert_eq!(att.content_type, "image/png");
        assert!(matches!(att.body, AttachmentBody::File { len: 8, .. }));
    }

    #[tokio::test]
    async fn test_buffer_and_stream_use_default_names() {
        let att = AttachmentSource::from(vec![1u8, 2, 3])
            .resolve(AttachmentKind::Image)
            .await
            .unwrap();
        assert_eq!(att.file_name, "image.jpg");
        assert_eq!(att.content_type, "image/jpeg");

        let stream = futures::stream::iter(vec![Ok::<_, io::Error>(Bytes::from_static(b"ID3"))]);
        let att = AttachmentSource::stream(stream)
            .resolve(AttachmentKind::Audio)
            .await
            .unwrap();
        assert_eq!(att.file_name, "audio.mp3");
        assert_eq!(att.content_type, "audio/mpeg");
        assert!(matches!(att.body, AttachmentBody::Stream(_)));
    }
}
