use serde::{Deserialize, Deserializer, Serialize};
use snafu::Snafu;
use std::fmt;
use std::str::FromStr;

/// Operating systems the CodePush service distributes updates for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodePushOs {
    Ios,
    Android,
    Windows,
}

impl CodePushOs {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodePushOs::Ios => "ios",
            CodePushOs::Android => "android",
            CodePushOs::Windows => "windows",
        }
    }
}

impl fmt::Display for CodePushOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(display("Unknown CodePush OS: {value}"))]
pub struct ParseCodePushOsError {
    pub value: String,
}

impl FromStr for CodePushOs {
    type Err = ParseCodePushOsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(CodePushOs::Ios),
            "android" => Ok(CodePushOs::Android),
            "windows" => Ok(CodePushOs::Windows),
            _ => Err(ParseCodePushOsError {
                value: s.to_string(),
            }),
        }
    }
}

// The service echoes the OS in whatever case the app was created with.
impl<'de> Deserialize<'de> for CodePushOs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
