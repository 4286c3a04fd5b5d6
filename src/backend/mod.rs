//! Community backend collaborator.
//!
//! [`CommunityApi`] is the seam the app calls for sign-in, contributions,
//! audio uploads and search. [`StubBackend`] answers locally: it logs the
//! request and synthesizes the acknowledgement a real service would send.

use rand::RngExt;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub name: String,
    pub session_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionKind {
    Event,
    Phrase,
    Story,
    Audio,
}

impl ContributionKind {
    pub const ALL: [ContributionKind; 4] = [
        ContributionKind::Event,
        ContributionKind::Phrase,
        ContributionKind::Story,
        ContributionKind::Audio,
    ];

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ContributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContributionKind::Event => "Event",
            ContributionKind::Phrase => "Phrase",
            ContributionKind::Story => "Story",
            ContributionKind::Audio => "Audio",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub kind: ContributionKind,
    pub title: String,
    pub description: String,
    pub image: Option<PathBuf>,
}

/// Acknowledgement returned by the backend for a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("{0}")]
    Validation(String),
    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),
}

pub trait CommunityApi {
    fn authenticate(&self, mode: AuthMode, email: &str, password: &str) -> Result<User, BackendError>;
    fn submit_contribution(&self, user: &User, contribution: &Contribution) -> Result<Ack, BackendError>;
    fn upload_audio(&self, path: &Path) -> Result<Ack, BackendError>;
    fn search(&self, query: &str) -> Result<Ack, BackendError>;
}

pub struct StubBackend {
    api_base_url: String,
}

impl StubBackend {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }
}

fn session_token() -> String {
    let mut rng = rand::rng();
    (0..32)
        .map(|_| char::from_digit(rng.random_range(0..16), 16).unwrap_or('0'))
        .collect()
}

impl CommunityApi for StubBackend {
    fn authenticate(&self, mode: AuthMode, email: &str, password: &str) -> Result<User, BackendError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(BackendError::Validation(
                "Email and password are required".to_string(),
            ));
        }
        info!(api = %self.api_base_url, ?mode, %email, "auth request");
        let name = email.split('@').next().unwrap_or(email).to_string();
        Ok(User {
            email: email.to_string(),
            name,
            session_token: session_token(),
        })
    }

    fn submit_contribution(&self, user: &User, contribution: &Contribution) -> Result<Ack, BackendError> {
        if contribution.title.trim().is_empty() {
            return Err(BackendError::Validation(
                "A contribution needs a title".to_string(),
            ));
        }
        if let Some(image) = &contribution.image {
            if !image.exists() {
                return Err(BackendError::MissingFile(image.clone()));
            }
        }
        info!(
            api = %self.api_base_url,
            user = %user.email,
            kind = %contribution.kind,
            title = %contribution.title,
            image = ?contribution.image,
            "new contribution"
        );
        Ok(Ack {
            message: format!(
                "Contribution \"{}\" would be submitted to your backend in a real implementation.",
                contribution.title
            ),
        })
    }

    fn upload_audio(&self, path: &Path) -> Result<Ack, BackendError> {
        if !path.is_file() {
            return Err(BackendError::MissingFile(path.to_path_buf()));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        info!(api = %self.api_base_url, file = %name, "would upload audio file");
        Ok(Ack {
            message: format!(
                "Audio file \"{}\" would be uploaded to your backend in a real implementation.",
                name
            ),
        })
    }

    fn search(&self, query: &str) -> Result<Ack, BackendError> {
        info!(api = %self.api_base_url, %query, "searching");
        Ok(Ack {
            message: format!(
                "Search functionality would look for: {}\nThis would connect to your backend in a real implementation.",
                query
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> StubBackend {
        StubBackend::new("https://your-backend-api.com")
    }

    #[test]
    fn test_authenticate_derives_name() {
        let user = backend()
            .authenticate(AuthMode::Login, " thandi@example.org ", "secret")
            .unwrap();
        assert_eq!(user.email, "thandi@example.org");
        assert_eq!(user.name, "thandi");
        assert_eq!(user.session_token.len(), 32);
        assert!(user.session_token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_authenticate_requires_fields() {
        let err = backend().authenticate(AuthMode::Register, "", "x").unwrap_err();
        assert!(matches!(err, BackendError::Validation(_)));
        assert!(backend().authenticate(AuthMode::Register, "a@b.c", "").is_err());
    }

    #[test]
    fn test_upload_missing_file() {
        let path = Path::new("/nonexistent/song.mp3");
        assert_eq!(
            backend().upload_audio(path),
            Err(BackendError::MissingFile(path.to_path_buf()))
        );
    }

    #[test]
    fn test_upload_existing_file() {
        let path = std::env::temp_dir().join("phrasebook-upload-test.mp3");
        std::fs::write(&path, b"ID3").unwrap();
        let ack = backend().upload_audio(&path).unwrap();
        assert!(ack.message.contains("\"phrasebook-upload-test.mp3\""));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_submit_contribution() {
        let user = backend().authenticate(AuthMode::Login, "a@b.c", "pw").unwrap();
        let mut contribution = Contribution {
            kind: ContributionKind::Story,
            title: "Grandmother's song".into(),
            description: String::new(),
            image: None,
        };
        let ack = backend().submit_contribution(&user, &contribution).unwrap();
        assert!(ack.message.starts_with("Contribution \"Grandmother's song\""));

        contribution.title = "  ".into();
        assert!(backend().submit_contribution(&user, &contribution).is_err());
    }

    #[test]
    fn test_search_ack() {
        let ack = backend().search("umhlanga").unwrap();
        assert!(ack.message.contains("umhlanga"));
    }

    #[test]
    fn test_kind_cycle() {
        assert_eq!(ContributionKind::Audio.next(), ContributionKind::Event);
        assert_eq!(ContributionKind::Event.prev(), ContributionKind::Audio);
        assert_eq!(ContributionKind::Phrase.to_string(), "Phrase");
    }

    #[test]
    fn test_auth_mode_toggle() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
        assert_eq!(AuthMode::Register.toggled(), AuthMode::Login);
    }
}
