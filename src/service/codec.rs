//! Short UUID service.
//!
//! Wraps the stateless codec functions with configured defaults, request
//! validation, logging, and metrics for the HTTP layer.

use metrics::counter;
use tracing::debug;
use uuid::Uuid;

use crate::config::CodecConfig;
use crate::domain::Base;
use crate::error::{AppError, CodecError, Result};
use crate::service::named::{self, NameVersion};
use crate::service::{basen, bits, short};

/// Service for short id conversion and name-based UUID generation.
pub struct ShortUuidService {
    /// Case sensitivity used when a request does not specify one.
    default_case_sensitive: bool,
    /// Largest number of ids one random request may ask for.
    max_batch: u32,
}

impl ShortUuidService {
    /// Create a new short UUID service.
    pub const fn new(config: &CodecConfig) -> Self {
        Self {
            default_case_sensitive: config.case_sensitive,
            max_batch: config.max_batch,
        }
    }

    fn case(&self, case_sensitive: Option<bool>) -> bool {
        case_sensitive.unwrap_or(self.default_case_sensitive)
    }

    /// Encode a UUID as a short id.
    pub fn encode(&self, uuid: &Uuid, case_sensitive: Option<bool>) -> String {
        let short_id = short::encode(uuid, self.case(case_sensitive));
        counter!("shortuuid_encoded_total").increment(1);
        short_id
    }

    /// Decode a short id.
    ///
    /// # Errors
    ///
    /// Returns an error if the short id is rejected by the codec.
    pub fn decode(&self, short_id: &str, case_sensitive: Option<bool>) -> Result<Uuid> {
        let case_sensitive = self.case(case_sensitive);
        match short::decode(short_id, case_sensitive) {
            Ok(uuid) => {
                counter!("shortuuid_decoded_total").increment(1);
                Ok(uuid)
            }
            Err(err) => {
                counter!("shortuuid_decode_rejected_total").increment(1);
                debug!(short_id, case_sensitive, error = %err, "Short id rejected");
                Err(err.into())
            }
        }
    }

    /// Shorten a UUID or sanitize any other identifier.
    pub fn shorten(&self, id: &str, case_sensitive: Option<bool>) -> String {
        short::try_shorten(id, self.case(case_sensitive))
    }

    /// Generate `count` random short ids.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or above the configured batch limit.
    pub fn random(&self, count: u32, case_sensitive: Option<bool>) -> Result<Vec<String>> {
        if count == 0 {
            return Err(AppError::BadRequest("count must be at least 1".to_string()));
        }
        if count > self.max_batch {
            return Err(AppError::BadRequest(format!(
                "count cannot exceed {}",
                self.max_batch
            )));
        }

        let case_sensitive = self.case(case_sensitive);
        let ids = (0..count).map(|_| short::random(case_sensitive)).collect();
        counter!("shortuuid_encoded_total").increment(u64::from(count));
        Ok(ids)
    }

    /// Derive a name-based UUID.
    ///
    /// # Errors
    ///
    /// Returns an error if `version` is not 3 or 5.
    pub fn named(&self, version: u8, namespace: Option<&Uuid>, name: &str) -> Result<Uuid> {
        let version = NameVersion::try_from(version)?;
        let uuid = named::generate(version, namespace, name);
        counter!("shortuuid_named_total", "version" => version.number().to_string()).increment(1);
        Ok(uuid)
    }

    /// URL-safe Base64 form of a UUID.
    pub fn to_base64(&self, uuid: &Uuid) -> String {
        bits::to_base64(uuid)
    }

    /// Parse the URL-safe Base64 form of a UUID.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not hold exactly 16 Base64 bytes.
    pub fn from_base64(&self, text: &str) -> Result<Uuid> {
        Ok(bits::from_base64(text)?)
    }

    /// Encode a decimal integer in `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a 128-bit decimal integer.
    pub fn encode_value(&self, value: &str, base: Base) -> Result<String> {
        let value = value.trim();
        if value.starts_with('-') {
            return Err(CodecError::NegativeNumber.into());
        }
        let parsed: u128 = value
            .parse()
            .map_err(|e| AppError::BadRequest(format!("value '{value}' is not a 128-bit integer: {e}")))?;
        Ok(basen::encode(parsed, base))
    }

    /// Decode `encoded` in `base`, returning the value as decimal text.
    ///
    /// # Errors
    ///
    /// Returns an error if the codec rejects the input.
    pub fn decode_value(&self, encoded: &str, base: Base, bit_limit: u32) -> Result<String> {
        let value = basen::decode(encoded, base, bit_limit).inspect_err(|err| {
            debug!(encoded, %base, bit_limit, error = %err, "Encoded value rejected");
        })?;
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn create_test_service() -> ShortUuidService {
        ShortUuidService::new(&CodecConfig {
            case_sensitive: false,
            max_batch: 10,
        })
    }

    #[test]
    fn test_default_case() {
        let service = create_test_service();
        let uuid = Uuid::parse_str("a8e41dc6-74c9-42c5-bb03-3bfd623044c5").unwrap();
        assert_eq!(service.encode(&uuid, None), "9zye6dau0hvwo54msqyyjyzt1");
        assert_eq!(service.encode(&uuid, Some(true)), "58gxXh69c8X7f2Id3D84W5");
        assert_eq!(service.decode("9zye6dau0hvwo54msqyyjyzt1", None).unwrap(), uuid);
    }

    #[test]
    fn test_decode_rejection_is_codec_error() {
        let service = create_test_service();
        let err = service.decode("", None).unwrap_err();
        assert!(matches!(err, AppError::Codec(CodecError::EmptyInput)));
    }

    #[test]
    fn test_random_batch() {
        let service = create_test_service();
        let ids = service.random(5, Some(true)).unwrap();
        assert_eq!(ids.len(), 5);
        for id in &ids {
            assert!(service.decode(id, Some(true)).is_ok());
        }

        assert!(matches!(service.random(0, None), Err(AppError::BadRequest(_))));
        assert!(matches!(service.random(11, None), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_named() {
        let service = create_test_service();
        let uuid = service.named(3, None, "widget/1234567890").unwrap();
        assert_eq!(uuid.to_string(), "d904c507-ee93-3794-9a56-22b6f37cbfe6");

        let err = service.named(4, None, "widget/1234567890").unwrap_err();
        assert!(matches!(err, AppError::Codec(CodecError::UnsupportedVersion(4))));
    }

    #[test]
    fn test_encode_value() {
        let service = create_test_service();
        assert_eq!(service.encode_value("0", Base::Base36).unwrap(), "0");
        assert_eq!(service.encode_value("3843", Base::Base62).unwrap(), "zz");

        let err = service.encode_value("-1", Base::Base36).unwrap_err();
        match err {
            AppError::Codec(codec) => {
                assert_eq!(codec, CodecError::NegativeNumber);
                assert_eq!(codec.kind(), ErrorKind::InvalidArgument);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            service.encode_value("12x", Base::Base36),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_decode_value() {
        let service = create_test_service();
        assert_eq!(service.decode_value("zz", Base::Base62, 0).unwrap(), "3843");
        assert!(matches!(
            service.decode_value("zz", Base::Base62, 8),
            Err(AppError::Codec(CodecError::BitLimitExceeded { limit: 8, .. }))
        ));
    }

    #[test]
    fn test_base64() {
        let service = create_test_service();
        let uuid = Uuid::parse_str("a8e41dc6-74c9-42c5-bb03-3bfd623044c5").unwrap();
        let text = service.to_base64(&uuid);
        assert_eq!(service.from_base64(&text).unwrap(), uuid);
        assert!(service.from_base64("@@").is_err());
    }
}
