//! HR portal sign-in. The credential source sits behind a trait so the static
//! table can be swapped for a directory service without touching handlers.

/// Credential lookup seam for the HR surface.
pub trait CredentialStore: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// Deliberately generic: the caller must not learn whether the email or the
/// password was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid email or password")]
pub struct AuthError;

pub fn authenticate(
    store: &dyn CredentialStore,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    if store.verify(email, password) {
        Ok(())
    } else {
        Err(AuthError)
    }
}

/// Built-in HR accounts for the standalone deployment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCredentialTable;

const HR_ACCOUNTS: [(&str, &str); 4] = [
    ("hr.manager@careers-portal.example", "Hr@2024!"),
    ("admin.hr@careers-portal.example", "Admin@Hr123"),
    ("recruitment@careers-portal.example", "Recruit@2024"),
    ("hr.director@careers-portal.example", "Director@2024"),
];

impl CredentialStore for StaticCredentialTable {
    fn verify(&self, email: &str, password: &str) -> bool {
        HR_ACCOUNTS
            .iter()
            .any(|(known_email, known_password)| *known_email == email && *known_password == password)
    }
}
