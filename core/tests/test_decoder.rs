use blepower_core::{
    classify_text, decode_hex, decode_payload, DecodeError, DecodedSample, PowerSample, TimeSample,
};

fn hex(s: &str) -> String {
    s.bytes().map(|b| format!("{:02x}", b)).collect()
}

#[test]
fn decode_hex_plain_and_spaced() {
    assert_eq!(decode_hex("68656c6c6f").unwrap(), "hello");
    assert_eq!(decode_hex("68 65 6c 6c 6f").unwrap(), "hello");
    assert_eq!(decode_hex("48454C4C4F").unwrap(), "HELLO");
    assert_eq!(decode_hex("").unwrap(), "");
}

#[test]
fn decode_hex_rejects_odd_and_non_hex() {
    assert_eq!(decode_hex("123"), Err(DecodeError::OddLength { digits: 3 }));
    assert_eq!(
        decode_hex("12zz"),
        Err(DecodeError::InvalidHexChar { ch: 'z', position: 2 })
    );
    // whitespace inne i et byte-par
    assert_eq!(
        decode_hex("1 2"),
        Err(DecodeError::InvalidHexChar { ch: ' ', position: 1 })
    );
    assert_eq!(decode_hex("ff"), Err(DecodeError::InvalidUtf8));
}

#[test]
fn power_record() {
    let s = decode_payload(&hex("3.5 90.0|80=150")).unwrap();
    assert_eq!(
        s,
        DecodedSample::Power(PowerSample { force: 3.5, cadence: 80, power: 150 })
    );
}

#[test]
fn power_can_be_negative() {
    let s = classify_text("12.0 0.5|0=-35");
    assert_eq!(
        s,
        DecodedSample::Power(PowerSample { force: 12.0, cadence: 0, power: -35 })
    );
}

#[test]
fn power_record_found_inside_surrounding_text() {
    let s = classify_text("avg 103.4 2.2|91=210 ok");
    assert_eq!(
        s,
        DecodedSample::Power(PowerSample { force: 103.4, cadence: 91, power: 210 })
    );
}

#[test]
fn time_record_ignores_poll_count() {
    let s = decode_payload(&hex("12: 45")).unwrap();
    assert_eq!(s, DecodedSample::Time(TimeSample { elapsed_seconds: 12 }));

    let s = classify_text("3600: 12 polls");
    assert_eq!(s, DecodedSample::Time(TimeSample { elapsed_seconds: 3600 }));
}

#[test]
fn power_wins_over_time_when_both_match() {
    let s = classify_text("7: 1 polls 3.0 1.0|70=99");
    assert!(matches!(s, DecodedSample::Power(p) if p.power == 99));
}

#[test]
fn poll_marker_and_unrecognized() {
    assert_eq!(classify_text("Flash ok"), DecodedSample::Poll);
    // F midt i teksten teller ikke
    assert_eq!(
        classify_text("no F here"),
        DecodedSample::Unrecognized("no F here".into())
    );
    // to desimaler bryter kraftmønsteret
    assert_eq!(
        classify_text("3.55 1.2|80=1"),
        DecodedSample::Unrecognized("3.55 1.2|80=1".into())
    );
    assert_eq!(classify_text(""), DecodedSample::Unrecognized(String::new()));
}

#[test]
fn number_too_large_is_unrecognized_not_truncated() {
    let text = "99999999999: 1";
    assert_eq!(classify_text(text), DecodedSample::Unrecognized(text.into()));
}
