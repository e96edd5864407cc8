//! EdgeGrid (EG1-HMAC-SHA256) request signing

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::{Method, Url};
use sha2::{Digest, Sha256};
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "EG1-HMAC-SHA256";

/// Request bodies beyond this size are truncated before hashing
const MAX_BODY: usize = 131_072;

/// Signs requests with a client token / access token / client secret triple
#[derive(Debug, Clone)]
pub struct EdgeGridSigner {
    client_token: String,
    access_token: String,
    client_secret: String,
}

impl EdgeGridSigner {
    pub fn new(client_token: &str, access_token: &str, client_secret: &str) -> Self {
        Self {
            client_token: client_token.to_string(),
            access_token: access_token.to_string(),
            client_secret: client_secret.to_string(),
        }
    }

    /// Build the `Authorization` header value for a request
    pub fn authorization(&self, method: &Method, url: &Url, body: &[u8]) -> String {
        let timestamp = Utc::now().format("%Y%m%dT%H:%M:%S+0000").to_string();
        let nonce = Uuid::new_v4().to_string();
        self.sign(method, url, body, &timestamp, &nonce)
    }

    fn sign(&self, method: &Method, url: &Url, body: &[u8], timestamp: &str, nonce: &str) -> String {
        let unsigned = format!(
            "{} client_token={};access_token={};timestamp={};nonce={};",
            ALGORITHM, self.client_token, self.access_token, timestamp, nonce
        );

        let host = match url.port() {
            Some(port) => format!("{}:{}", url.host_str().unwrap_or_default(), port),
            None => url.host_str().unwrap_or_default().to_string(),
        };
        let path = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };

        let data_to_sign = [
            method.as_str(),
            url.scheme(),
            host.as_str(),
            path.as_str(),
            "",
            content_hash(method, body).as_str(),
            unsigned.as_str(),
        ]
        .join("\t");

        let signing_key = hmac_base64(self.client_secret.as_bytes(), timestamp.as_bytes());
        let signature = hmac_base64(signing_key.as_bytes(), data_to_sign.as_bytes());

        format!("{}signature={}", unsigned, signature)
    }
}

/// Only POST bodies take part in the signature
fn content_hash(method: &Method, body: &[u8]) -> String {
    if *method != Method::POST || body.is_empty() {
        return String::new();
    }
    let body = &body[..body.len().min(MAX_BODY)];
    STANDARD.encode(Sha256::digest(body))
}

fn hmac_base64(key: &[u8], data: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    STANDARD.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "20260101T00:00:00+0000";
    const NONCE: &str = "nonce-xyz";

    fn signer() -> EdgeGridSigner {
        EdgeGridSigner::new("akab-client", "akab-access", "c2VjcmV0")
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn header_carries_tokens_and_signature() {
        let header = signer().sign(
            &Method::GET,
            &url("https://akab-host.luna.akamaiapis.net/config-gtm/v1/domains"),
            b"",
            TS,
            NONCE,
        );

        assert!(header.starts_with(
            "EG1-HMAC-SHA256 client_token=akab-client;access_token=akab-access;timestamp=20260101T00:00:00+0000;nonce=nonce-xyz;signature="
        ));

        let signature = header.rsplit("signature=").next().unwrap();
        assert_eq!(STANDARD.decode(signature).unwrap().len(), 32);
    }

    #[test]
    fn signing_is_deterministic_for_fixed_timestamp_and_nonce() {
        let u = url("https://host/config-gtm/v1/domains/example.akadns.net");
        let a = signer().sign(&Method::GET, &u, b"", TS, NONCE);
        let b = signer().sign(&Method::GET, &u, b"", TS, NONCE);
        assert_eq!(a, b);

        let other_path = signer().sign(
            &Method::GET,
            &url("https://host/config-gtm/v1/domains/other.akadns.net"),
            b"",
            TS,
            NONCE,
        );
        assert_ne!(a, other_path);
    }

    #[test]
    fn post_body_is_hashed_put_body_is_not() {
        assert_eq!(
            content_hash(&Method::POST, b"abc"),
            "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0="
        );
        assert_eq!(content_hash(&Method::PUT, b"abc"), "");
        assert_eq!(content_hash(&Method::POST, b""), "");

        let u = url("https://host/config-gtm/v1/domains/d/datacenters");
        let one = signer().sign(&Method::POST, &u, b"{\"a\":1}", TS, NONCE);
        let two = signer().sign(&Method::POST, &u, b"{\"a\":2}", TS, NONCE);
        assert_ne!(one, two);
    }

    #[test]
    fn port_is_part_of_signed_host() {
        let plain = signer().sign(&Method::GET, &url("http://127.0.0.1/x"), b"", TS, NONCE);
        let with_port = signer().sign(&Method::GET, &url("http://127.0.0.1:8080/x"), b"", TS, NONCE);
        assert_ne!(plain, with_port);
    }

    #[test]
    fn get_signature_matches_known_answer() {
        let header = signer().sign(
            &Method::GET,
            &url("https://akab-host.luna.akamaiapis.net/config-gtm/v1/domains/example.akadns.net?x=1"),
            b"",
            TS,
            NONCE,
        );
        assert_eq!(
            header,
            "EG1-HMAC-SHA256 client_token=akab-client;access_token=akab-access;\
             timestamp=20260101T00:00:00+0000;nonce=nonce-xyz;\
             signature=OKr0grOKE+1e7ts+dchiDF2NrdKI/Xc6WqtlmV2K50Q="
        );
    }

    #[test]
    fn post_signature_matches_known_answer() {
        let header = signer().sign(
            &Method::POST,
            &url("https://akab-host.luna.akamaiapis.net/config-gtm/v1/domains/example.akadns.net/datacenters"),
            br#"{"nickname":"sjc"}"#,
            TS,
            NONCE,
        );
        assert!(header.ends_with(";signature=ICJrbyNEhku5QMIm9VIwBp5xzouEs6huiXGqNXRkDjM="));
    }
}
