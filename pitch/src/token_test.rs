use super::*;

fn claims(sub: &str, exp: i64) -> UserClaims {
    UserClaims {
        sub: sub.to_owned(),
        exp,
    }
}

#[test]
fn decode_reads_sub_and_exp() {
    let token = encode_unsigned(&claims("ada@example.com", 1_900_000_000)).unwrap();
    let decoded = decode(&token).unwrap();
    assert_eq!(decoded, claims("ada@example.com", 1_900_000_000));
}

#[test]
fn decode_accepts_padded_payload() {
    let header = URL_SAFE.encode(br#"{"alg":"HS256"}"#);
    let payload = URL_SAFE.encode(br#"{"sub":"a@b.co","exp":10}"#);
    assert!(payload.ends_with('='));
    let decoded = decode(&format!("{header}.{payload}.sig")).unwrap();
    assert_eq!(decoded, claims("a@b.co", 10));
}

#[test]
fn decode_ignores_extra_claims() {
    let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"x@y.z","exp":5,"role":"admin"}"#);
    let decoded = decode(&format!("h.{payload}.s")).unwrap();
    assert_eq!(decoded.sub, "x@y.z");
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert!(matches!(decode("not-a-token"), Err(DecodeError::Segments(1))));
    assert!(matches!(decode("a.b"), Err(DecodeError::Segments(2))));
    assert!(matches!(decode("a.b.c.d"), Err(DecodeError::Segments(4))));
}

#[test]
fn decode_rejects_bad_base64() {
    assert!(matches!(decode("h.!!!.s"), Err(DecodeError::Base64(_))));
}

#[test]
fn decode_rejects_payload_without_claims() {
    let payload = URL_SAFE_NO_PAD.encode(br#"{"name":"nobody"}"#);
    assert!(matches!(decode(&format!("h.{payload}.s")), Err(DecodeError::Claims(_))));
}

#[test]
fn decode_rejects_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode(b"plain text");
    assert!(matches!(decode(&format!("h.{payload}.s")), Err(DecodeError::Claims(_))));
}

#[test]
fn expiry_is_strictly_before_now() {
    let c = claims("a@b.c", 100);
    assert!(c.is_expired_at(101_000));
    assert!(!c.is_expired_at(100_000));
    assert!(!c.is_expired_at(99_000));
}

#[test]
fn expiry_counts_milliseconds_within_the_last_second() {
    let c = claims("a@b.c", 100);
    assert!(c.is_expired_at(100_001));
    assert!(c.is_expired_at(100_500));
}

#[test]
fn display_name_is_local_part() {
    assert_eq!(claims("ada@example.com", 0).display_name(), "ada");
    assert_eq!(claims("plainuser", 0).display_name(), "plainuser");
}

#[test]
fn initial_uppercases_first_char() {
    assert_eq!(claims("ada@example.com", 0).initial(), "A");
    assert_eq!(claims("", 0).initial(), "U");
}
