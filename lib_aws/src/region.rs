use std::{fmt, str::FromStr};

use aws_config::Region;
use clap::{builder::PossibleValue, ValueEnum};
use lib_core::{define_cli_error, CliError};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

define_cli_error!(UnknownRegion, "Unknown AWS region '{code}'.", { code: &str });

macro_rules! define_aws_regions {
    ($($variant:ident => $code:literal, $label:literal;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, EnumIter)]
        pub enum AwsRegion {
            $(
                #[serde(rename = $code)]
                $variant,
            )*
        }

        impl AwsRegion {
            /// Every region, in declaration order.
            pub const ALL: &'static [AwsRegion] = &[$(AwsRegion::$variant),*];

            pub fn code(&self) -> &'static str {
                match self {
                    $(AwsRegion::$variant => $code,)*
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $(AwsRegion::$variant => $label,)*
                }
            }

            pub fn from_code(code: &str) -> Option<AwsRegion> {
                match code {
                    $($code => Some(AwsRegion::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

define_aws_regions! {
    UsEast1 => "us-east-1", "US East (N. Virginia)";
    UsEast2 => "us-east-2", "US East (Ohio)";
    UsWest1 => "us-west-1", "US West (N. California)";
    UsWest2 => "us-west-2", "US West (Oregon)";
    ApSouth2 => "ap-south-2", "Asia Pacific (Hyderabad)";
    ApSouth1 => "ap-south-1", "Asia Pacific (Mumbai)";
    EuSouth1 => "eu-south-1", "Europe (Milan)";
    EuSouth2 => "eu-south-2", "Europe (Spain)";
    MeCentral1 => "me-central-1", "Middle East (UAE)";
    IlCentral1 => "il-central-1", "Israel (Tel Aviv)";
    CaCentral1 => "ca-central-1", "Canada (Central)";
    EuCentral1 => "eu-central-1", "Europe (Frankfurt)";
    EuCentral2 => "eu-central-2", "Europe (Zurich)";
    AfSouth1 => "af-south-1", "Africa (Cape Town)";
    EuNorth1 => "eu-north-1", "Europe (Stockholm)";
    EuWest3 => "eu-west-3", "Europe (Paris)";
    EuWest2 => "eu-west-2", "Europe (London)";
    EuWest1 => "eu-west-1", "Europe (Ireland)";
    ApNortheast3 => "ap-northeast-3", "Asia Pacific (Osaka)";
    ApNortheast2 => "ap-northeast-2", "Asia Pacific (Seoul)";
    MeSouth1 => "me-south-1", "Middle East (Bahrain)";
    ApNortheast1 => "ap-northeast-1", "Asia Pacific (Tokyo)";
    SaEast1 => "sa-east-1", "South America (Sao Paulo)";
    ApEast1 => "ap-east-1", "Asia Pacific (Hong Kong)";
    CaWest1 => "ca-west-1", "Canada West (Calgary)";
    ApSoutheast1 => "ap-southeast-1", "Asia Pacific (Singapore)";
    ApSoutheast2 => "ap-southeast-2", "Asia Pacific (Sydney)";
    ApSoutheast3 => "ap-southeast-3", "Asia Pacific (Jakarta)";
    ApSoutheast4 => "ap-southeast-4", "Asia Pacific (Melbourne)";
}

/// Display label for a region code, or `None` for codes outside the catalog.
pub fn label_of(code: &str) -> Option<&'static str> {
    AwsRegion::from_code(code).map(|region| region.label())
}

/// `(code, label)` pairs in declaration order.
pub fn all_regions() -> impl Iterator<Item = (&'static str, &'static str)> {
    AwsRegion::ALL
        .iter()
        .map(|region| (region.code(), region.label()))
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<14} {}", self.code(), self.label())
    }
}

impl FromStr for AwsRegion {
    type Err = CliError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        AwsRegion::from_code(code).ok_or_else(|| UnknownRegion::new(code))
    }
}

impl ValueEnum for AwsRegion {
    fn value_variants<'a>() -> &'a [Self] {
        AwsRegion::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.code()).help(self.label()))
    }
}

impl From<AwsRegion> for Region {
    fn from(region: AwsRegion) -> Self {
        Region::from_static(region.code())
    }
}
