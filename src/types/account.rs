//! Account outgoing-method settings.

use crate::error::RequestError;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Free-form option map, as sent under the `aws` or `smtp` key.
pub type OptionMap = Map<String, Value>;

const AWS_REQUIRED: &[&str] = &["aws_access_key", "aws_secret_access_key"];
const SMTP_REQUIRED: &[&str] = &["smtp_host", "smtp_username", "smtp_password"];

/// How the account delivers outgoing mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutgoingMethod {
    /// Turret.IO's own delivery.
    TurretIo,
    /// Amazon SES with the account's own AWS keys.
    Aws,
    /// A customer SMTP server.
    Smtp,
}

impl OutgoingMethod {
    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutgoingMethod::TurretIo => "turret.io",
            OutgoingMethod::Aws => "aws",
            OutgoingMethod::Smtp => "smtp",
        }
    }

    fn credential_set(&self) -> Option<(CredentialSet, &'static [&'static str])> {
        match self {
            OutgoingMethod::TurretIo => None,
            OutgoingMethod::Aws => Some((CredentialSet::Aws, AWS_REQUIRED)),
            OutgoingMethod::Smtp => Some((CredentialSet::Smtp, SMTP_REQUIRED)),
        }
    }
}

impl fmt::Display for OutgoingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutgoingMethod {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "turret.io" => Ok(OutgoingMethod::TurretIo),
            "aws" => Ok(OutgoingMethod::Aws),
            "smtp" => Ok(OutgoingMethod::Smtp),
            other => Err(RequestError::UnsupportedOutgoingMethod {
                method: other.to_string(),
            }),
        }
    }
}

impl Serialize for OutgoingMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Credential set an outgoing method depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialSet {
    /// AWS access key pair.
    Aws,
    /// SMTP host and login.
    Smtp,
}

impl fmt::Display for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSet::Aws => f.write_str("AWS"),
            CredentialSet::Smtp => f.write_str("SMTP"),
        }
    }
}

/// Body of `POST /latest/account/me`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSettings {
    #[serde(rename = "type")]
    method: OutgoingMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    aws: Option<OptionMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    smtp: Option<OptionMap>,
}

impl AccountSettings {
    /// Validate `options` for `method` and build the request body.
    ///
    /// `aws` needs `aws_access_key` and `aws_secret_access_key`; `smtp`
    /// needs `smtp_host`, `smtp_username` and `smtp_password`. Options are
    /// ignored for `turret.io`.
    ///
    /// # Errors
    ///
    /// [`RequestError::CredentialsNotProvided`] naming the incomplete set.
    pub fn new(method: OutgoingMethod, options: &OptionMap) -> Result<Self, RequestError> {
        if let Some((credential_set, required)) = method.credential_set() {
            let missing: Vec<&'static str> = required
                .iter()
                .copied()
                .filter(|key| !options.contains_key(*key))
                .collect();

            if !missing.is_empty() {
                return Err(RequestError::CredentialsNotProvided {
                    credential_set,
                    missing,
                });
            }
        }

        let (aws, smtp) = match method {
            OutgoingMethod::TurretIo => (None, None),
            OutgoingMethod::Aws => (Some(options.clone()), None),
            OutgoingMethod::Smtp => (None, Some(options.clone())),
        };

        Ok(Self { method, aws, smtp })
    }

    /// The outgoing method.
    pub fn method(&self) -> OutgoingMethod {
        self.method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> OptionMap {
        match value {
            Value::Object(map) => map,
            _ => OptionMap::new(),
        }
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("aws".parse::<OutgoingMethod>().unwrap(), OutgoingMethod::Aws);
        assert_eq!("smtp".parse::<OutgoingMethod>().unwrap(), OutgoingMethod::Smtp);
        assert_eq!(
            "turret.io".parse::<OutgoingMethod>().unwrap(),
            OutgoingMethod::TurretIo
        );
        assert!(matches!(
            "sendmail".parse::<OutgoingMethod>(),
            Err(RequestError::UnsupportedOutgoingMethod { .. })
        ));
    }

    #[test]
    fn test_aws_body() {
        let opts = options(json!({"aws_access_key": "a", "aws_secret_access_key": "b"}));
        let settings = AccountSettings::new(OutgoingMethod::Aws, &opts).unwrap();

        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({"type": "aws", "aws": {"aws_access_key": "a", "aws_secret_access_key": "b"}})
        );
    }

    #[test]
    fn test_aws_missing_secret_key() {
        let opts = options(json!({"aws_access_key": "a"}));
        match AccountSettings::new(OutgoingMethod::Aws, &opts) {
            Err(RequestError::CredentialsNotProvided {
                credential_set,
                missing,
            }) => {
                assert_eq!(credential_set, CredentialSet::Aws);
                assert_eq!(missing, vec!["aws_secret_access_key"]);
            }
            other => panic!("expected CredentialsNotProvided, got {:?}", other),
        }
    }

    #[test]
    fn test_smtp_body_and_validation() {
        let opts = options(json!({
            "smtp_host": "mail.example.com",
            "smtp_username": "u",
            "smtp_password": "p"
        }));
        let settings = AccountSettings::new(OutgoingMethod::Smtp, &opts).unwrap();
        let body = serde_json::to_value(&settings).unwrap();
        assert_eq!(body["type"], "smtp");
        assert_eq!(body["smtp"]["smtp_host"], "mail.example.com");
        assert!(body.get("aws").is_none());

        let err = AccountSettings::new(OutgoingMethod::Smtp, &OptionMap::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "SMTP credentials not provided (missing: smtp_host, smtp_username, smtp_password)"
        );
    }

    #[test]
    fn test_turret_io_ignores_options() {
        let opts = options(json!({"anything": 1}));
        let settings = AccountSettings::new(OutgoingMethod::TurretIo, &opts).unwrap();
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({"type": "turret.io"})
        );
    }
}
