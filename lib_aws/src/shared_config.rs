use std::time::Duration;

use aws_config::{timeout::TimeoutConfig, BehaviorVersion, Region, SdkConfig};

use crate::{AwsRegion, ProfileFileCredentialProvider};

pub(crate) async fn config_from_profile(
    credential_provider: &ProfileFileCredentialProvider,
    profile_name: &str,
    region: AwsRegion,
) -> SdkConfig {
    // Raised from the SDK defaults, where the 5s connect timeout easily
    // triggers on slow connections.
    let timeout_config = TimeoutConfig::builder()
        .connect_timeout(Duration::from_secs(30))
        .operation_attempt_timeout(Duration::from_secs(300))
        .operation_timeout(Duration::from_secs(3600))
        .build();

    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::from(region))
        .timeout_config(timeout_config)
        .credentials_provider(credential_provider.sdk_provider(profile_name))
        .load()
        .await
}
