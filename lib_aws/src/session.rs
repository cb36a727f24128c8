use aws_config::SdkConfig;
use lib_core::{CliError, Printer, Selectable as _, SelectableEnum};

use crate::{
    shared_config::config_from_profile, AwsProfile, AwsRegion, ProfileFileCredentialProvider,
    ProfileRegistry,
};

/// The profile and region a command operates on.
#[derive(Debug, Clone)]
pub struct AwsSession {
    profile: AwsProfile,
    region: AwsRegion,
    credential_provider: ProfileFileCredentialProvider,
}

impl AwsSession {
    pub fn new(profile: AwsProfile, region: AwsRegion) -> Self {
        Self {
            profile,
            region,
            credential_provider: ProfileFileCredentialProvider::new(),
        }
    }

    /// Session whose credentials are read from the registry's file rather than
    /// the SDK's default location.
    pub fn for_registry(registry: &ProfileRegistry, profile: AwsProfile, region: AwsRegion) -> Self {
        Self {
            profile,
            region,
            credential_provider: ProfileFileCredentialProvider::with_credentials_file(
                registry.path(),
            ),
        }
    }

    /// Prompts for a profile from the (loaded) registry, then for a region.
    pub fn select(registry: &ProfileRegistry) -> Result<Self, CliError> {
        let printer = Printer::new();
        printer.section_open("Selecting AWS session...");
        let selection = select_profile(registry)
            .and_then(|profile| Ok((profile, select_region()?)));
        match selection {
            Ok((profile, region)) => {
                printer.detail("Profile", &profile);
                printer.detail("Region", format!("{} ({})", region.label(), region.code()));
                printer.section_close();
                Ok(Self::for_registry(registry, profile, region))
            }
            Err(error) => {
                printer.section_error();
                Err(error)
            }
        }
    }

    pub fn profile(&self) -> &AwsProfile {
        &self.profile
    }

    pub fn region(&self) -> AwsRegion {
        self.region
    }

    pub fn credential_provider(&self) -> &ProfileFileCredentialProvider {
        &self.credential_provider
    }

    pub async fn sdk_config(&self) -> SdkConfig {
        config_from_profile(&self.credential_provider, self.profile.name(), self.region).await
    }
}

pub fn select_profile(registry: &ProfileRegistry) -> Result<AwsProfile, CliError> {
    registry
        .all_profiles()?
        .iter()
        .cloned()
        .select_with_prompt("AWS profile")
}

pub fn select_region() -> Result<AwsRegion, CliError> {
    <AwsRegion as SelectableEnum>::select()
}
