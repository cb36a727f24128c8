use std::fmt;

use lib_core::CliError;

use crate::{AwsCredentials, CredentialProvider};

/// Named handle on a set of credentials declared in the shared credentials
/// file. The secret material itself is only fetched on demand through a
/// [`CredentialProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AwsProfile {
    name: String,
}

impl AwsProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn credentials<P>(&self, provider: &P) -> Result<AwsCredentials, CliError>
    where
        P: CredentialProvider + ?Sized,
    {
        provider.resolve(&self.name).await
    }
}

impl fmt::Display for AwsProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
