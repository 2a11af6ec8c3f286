pub mod error;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use base64::{Engine, engine::general_purpose::STANDARD};
use derwalk::decoder::{DecodableFrom, Decoder};
use error::Error;
use regex::Regex;

const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";
const ENCRYPTED_PRIVATE_KEY_LABEL: &str = "ENCRYPTED PRIVATE KEY";
const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";
const EC_PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";
const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";
const RSA_PUBLIC_KEY_LABEL: &str = "RSA PUBLIC KEY";
const CERTIFICATE_LABEL: &str = "CERTIFICATE";

const BOUNDARY_PATTERN: &str = r"^-----(BEGIN|END) ([A-Z0-9 ]+)-----\s*$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// PKCS#8 private key (non-encrypted)
    PrivateKey,
    /// PKCS#8 encrypted private key
    EncryptedPrivateKey,
    /// PKCS#1 RSA private key
    RSAPrivateKey,
    /// SEC1 EC private key
    ECPrivateKey,
    /// X.509 SubjectPublicKeyInfo
    PublicKey,
    /// PKCS#1 RSA public key
    RSAPublicKey,
    /// X.509 Certificate
    Certificate,
    Other(String),
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::PrivateKey => write!(f, "{}", PRIVATE_KEY_LABEL),
            Label::EncryptedPrivateKey => write!(f, "{}", ENCRYPTED_PRIVATE_KEY_LABEL),
            Label::RSAPrivateKey => write!(f, "{}", RSA_PRIVATE_KEY_LABEL),
            Label::ECPrivateKey => write!(f, "{}", EC_PRIVATE_KEY_LABEL),
            Label::PublicKey => write!(f, "{}", PUBLIC_KEY_LABEL),
            Label::RSAPublicKey => write!(f, "{}", RSA_PUBLIC_KEY_LABEL),
            Label::Certificate => write!(f, "{}", CERTIFICATE_LABEL),
            Label::Other(label) => write!(f, "{}", label),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        match s {
            PRIVATE_KEY_LABEL => Label::PrivateKey,
            ENCRYPTED_PRIVATE_KEY_LABEL => Label::EncryptedPrivateKey,
            RSA_PRIVATE_KEY_LABEL => Label::RSAPrivateKey,
            EC_PRIVATE_KEY_LABEL => Label::ECPrivateKey,
            PUBLIC_KEY_LABEL => Label::PublicKey,
            RSA_PUBLIC_KEY_LABEL => Label::RSAPublicKey,
            CERTIFICATE_LABEL => Label::Certificate,
            other => Label::Other(other.to_string()),
        }
    }
}

impl Label {
    /// Returns true for labels that carry private key material.
    pub fn is_private_key(&self) -> bool {
        matches!(
            self,
            Label::PrivateKey
                | Label::EncryptedPrivateKey
                | Label::RSAPrivateKey
                | Label::ECPrivateKey
        )
    }
}

/*
ref: https://www.rfc-editor.org/rfc/rfc7468.html#section-3
*/

#[derive(Debug, PartialEq, Eq)]
enum Boundary {
    Begin(Label),
    End(Label),
}

impl Boundary {
    fn parse(re: &Regex, line: &str) -> Option<Boundary> {
        let captured = re.captures(line)?;
        let label = Label::from(captured.get(2)?.as_str());
        match captured.get(1)?.as_str() {
            "BEGIN" => Some(Boundary::Begin(label)),
            _ => Some(Boundary::End(label)),
        }
    }
}

/// The first PEM block found in a piece of text.
#[derive(Debug, Clone)]
pub struct Pem {
    label: Label,
    base64_data: String,
}

impl Pem {
    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn data(&self) -> &str {
        &self.base64_data
    }
}

impl FromStr for Pem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = Regex::new(BOUNDARY_PATTERN).map_err(|_| Error::InvalidEncapsulationBoundary)?;
        let mut lines = s.lines();

        // Explanatory text before the pre-eb is skipped.
        let label = loop {
            match lines.next() {
                Some(line) => {
                    if let Some(Boundary::Begin(label)) = Boundary::parse(&re, line) {
                        break label;
                    }
                }
                None => return Err(Error::MissingPreEncapsulationBoundary),
            }
        };

        let mut base64_data = String::new();
        loop {
            match lines.next() {
                Some(line) => match Boundary::parse(&re, line) {
                    Some(Boundary::End(end)) => {
                        if end != label {
                            return Err(Error::LabelMismatch {
                                begin: label.to_string(),
                                end: end.to_string(),
                            });
                        }
                        break;
                    }
                    Some(Boundary::Begin(_)) => {
                        return Err(Error::MissingPostEncapsulationBoundary);
                    }
                    None => base64_data.push_str(line.trim()),
                },
                None => return Err(Error::MissingPostEncapsulationBoundary),
            }
        }

        if base64_data.is_empty() {
            return Err(Error::MissingData);
        }

        log::trace!("pem block {label} with {} base64 chars", base64_data.len());
        Ok(Pem { label, base64_data })
    }
}

impl DecodableFrom<Pem> for Vec<u8> {}

impl Decoder<Pem, Vec<u8>> for Pem {
    type Error = Error;

    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        // The label is dropped here; the DER reader does not need it.
        STANDARD.decode(self.data()).map_err(Error::Base64Decode)
    }
}
