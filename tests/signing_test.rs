//! Request signing tests.

use proptest::prelude::*;
use test_case::test_case;
use turret_io::signing::{string_to_sign, RequestSigner, Timestamp};
use turret_io::Credentials;

const SECRET: &str = "c2VjcmV0";

fn signer() -> RequestSigner {
    RequestSigner::new(Credentials::new("k1", SECRET))
}

#[test]
fn test_known_signature_without_body() {
    let signature = signer()
        .signature("/latest/user/a@b.com", Timestamp::from_secs(1000), None)
        .unwrap();

    assert_eq!(
        signature,
        "YMphacCIk6bIJLfRr2Mz2C2ysqfvbMkpzxmhmT/E9C6K9KledZo87zcviwJT40ang+2tbtLnrGuuvrniWbJbCA=="
    );
}

#[test]
fn test_known_signature_with_body() {
    let signature = signer()
        .signature(
            "/latest/target/foo",
            Timestamp::from_secs(1000),
            Some(r#"{"attributes":[]}"#),
        )
        .unwrap();

    assert_eq!(
        signature,
        "tCCPX7Y3kCGYN3mTHQMCyw+RCu1aBlEhKlreLPJooUx+AA082Xc0fXBQIVSbKtbJ7trKZqmVBHsF7pxcm/4q6Q=="
    );
}

#[test]
fn test_signed_headers() {
    let signed = signer()
        .sign("/latest/account", Timestamp::from_secs(1000), None)
        .unwrap();
    let headers = signed.headers();

    assert_eq!(headers["X-LS-Time"], "1000");
    assert_eq!(headers["X-LS-Key"], "k1");
    assert_eq!(
        headers["X-LS-Auth"],
        "/YnGmD984dbXj4OdmmXXhsv2Lq3U3bf85W1Yum5qp1SZ361gSU3xNa1OsIs5WV13JsNYubtxMJZK9oXay5FLlQ=="
    );
    assert_eq!(headers["Content-Type"], "text/json");
}

#[test]
fn test_invalid_secret() {
    let signer = RequestSigner::new(Credentials::new("k1", "not base64!"));
    let err = signer
        .signature("/latest/account", Timestamp::from_secs(1000), None)
        .unwrap_err();

    assert!(matches!(err, turret_io::SigningError::InvalidSecret { .. }));
}

#[test_case("/latest/target/bar", 1000, Some(r#"{"attributes":[]}"#), SECRET ; "uri")]
#[test_case("/latest/target/foo", 1001, Some(r#"{"attributes":[]}"#), SECRET ; "timestamp")]
#[test_case("/latest/target/foo", 1000, Some(r#"{"attributes":[1]}"#), SECRET ; "body")]
#[test_case("/latest/target/foo", 1000, None, SECRET ; "missing body")]
#[test_case("/latest/target/foo", 1000, Some(r#"{"attributes":[]}"#), "b3RoZXI=" ; "secret")]
fn test_any_field_change_changes_signature(
    uri: &str,
    time: u64,
    body: Option<&str>,
    secret: &str,
) {
    let baseline = signer()
        .signature(
            "/latest/target/foo",
            Timestamp::from_secs(1000),
            Some(r#"{"attributes":[]}"#),
        )
        .unwrap();

    let mutated = RequestSigner::new(Credentials::new("k1", secret))
        .signature(uri, Timestamp::from_secs(time), body)
        .unwrap();

    assert_ne!(baseline, mutated);
}

proptest! {
    #[test]
    fn prop_signature_is_deterministic(
        uri in "/[a-z/@.]{0,40}",
        time in any::<u64>(),
        body in proptest::option::of("[ -~]{1,64}"),
    ) {
        let a = signer().signature(&uri, Timestamp::from_secs(time), body.as_deref()).unwrap();
        let b = signer().signature(&uri, Timestamp::from_secs(time), body.as_deref()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_string_to_sign_is_concatenation(
        uri in "/[a-z/]{0,40}",
        time in any::<u64>(),
        body in "[ -~]{1,64}",
    ) {
        let ts = Timestamp::from_secs(time);
        prop_assert_eq!(string_to_sign(&uri, ts, Some(&body)), format!("{}{}{}", uri, body, time));
        prop_assert_eq!(string_to_sign(&uri, ts, None), format!("{}{}", uri, time));
    }
}
