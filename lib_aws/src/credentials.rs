use std::{fmt, path::PathBuf, time::SystemTime};

use async_trait::async_trait;
use aws_config::profile::{
    profile_file::{ProfileFileKind, ProfileFiles},
    ProfileFileCredentialsProvider,
};
use aws_credential_types::{provider::ProvideCredentials as _, Credentials};
use lib_core::{define_cli_error, CliError};
use tracing::debug;

define_cli_error!(
    CredentialResolutionFailed,
    "Could not resolve credentials for AWS profile '{profile}'. If this is an SSO profile, the session may have expired:\n\n$ aws sso login --profile {profile}",
    { profile: &str }
);

/// Resolves the secret material behind a profile name. Only invoked when the
/// caller actually needs to authenticate.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn resolve(&self, profile_name: &str) -> Result<AwsCredentials, CliError>;
}

#[derive(Clone, PartialEq, Eq)]
pub struct AwsCredentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
    expiry: Option<SystemTime>,
}

impl AwsCredentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
        expiry: Option<SystemTime>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
            expiry,
        }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub fn expiry(&self) -> Option<SystemTime> {
        self.expiry
    }
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .field("expiry", &self.expiry)
            .finish()
    }
}

impl From<Credentials> for AwsCredentials {
    fn from(credentials: Credentials) -> Self {
        Self {
            access_key_id: credentials.access_key_id().to_string(),
            secret_access_key: credentials.secret_access_key().to_string(),
            session_token: credentials.session_token().map(str::to_string),
            expiry: credentials.expiry(),
        }
    }
}

/// Resolves profiles through the AWS SDK's profile file chain (static keys,
/// SSO, assumed roles, credential processes).
#[derive(Debug, Clone, Default)]
pub struct ProfileFileCredentialProvider {
    credentials_file: Option<PathBuf>,
}

impl ProfileFileCredentialProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads credentials from this file instead of the SDK's default
    /// credentials location. The default config file is still consulted.
    pub fn with_credentials_file(path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_file: Some(path.into()),
        }
    }

    pub(crate) fn sdk_provider(&self, profile_name: &str) -> ProfileFileCredentialsProvider {
        let mut builder = ProfileFileCredentialsProvider::builder().profile_name(profile_name);
        if let Some(path) = &self.credentials_file {
            builder = builder.profile_files(
                ProfileFiles::builder()
                    .include_default_config_file(true)
                    .with_file(ProfileFileKind::Credentials, path)
                    .build(),
            );
        }
        builder.build()
    }
}

#[async_trait]
impl CredentialProvider for ProfileFileCredentialProvider {
    async fn resolve(&self, profile_name: &str) -> Result<AwsCredentials, CliError> {
        debug!(profile = profile_name, "Resolving credentials.");
        self.sdk_provider(profile_name)
            .provide_credentials()
            .await
            .map(AwsCredentials::from)
            .map_err(|e| CredentialResolutionFailed::with_debug(profile_name, &e))
    }
}
