use crate::error::DecodeError;
use crate::types::{DecodedSample, PowerSample, TimeSample};

/// Sentinel for poll-diagnoselinjer (tekst som starter med `F`).
pub const POLL_SENTINEL: char = 'F';

#[inline]
fn nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Hex-par → bytes → UTF-8-tekst. Whitespace er kun lov mellom byte-par.
pub fn decode_hex(payload: &str) -> Result<String, DecodeError> {
    let mut bytes = Vec::with_capacity(payload.len() / 2);
    let mut high: Option<u8> = None;
    let mut digits = 0usize;

    for (position, ch) in payload.char_indices() {
        if ch.is_ascii_whitespace() && high.is_none() {
            continue;
        }
        let n = u8::try_from(ch)
            .ok()
            .and_then(nibble)
            .ok_or(DecodeError::InvalidHexChar { ch, position })?;
        digits += 1;
        match high.take() {
            Some(h) => bytes.push(h << 4 | n),
            None => high = Some(n),
        }
    }

    if high.is_some() {
        return Err(DecodeError::OddLength { digits });
    }
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
}

/// Velger variant i fast prioritet: kraft/kadens/effekt, tidsstempel, poll.
/// Tall som ikke får plass i måltypen gir `Unrecognized`.
pub fn classify_text(text: &str) -> DecodedSample {
    if let Some((force, cadence, power)) = search(text, match_power_at) {
        return match (force.parse::<f64>(), cadence.parse::<u32>(), power.parse::<i32>()) {
            (Ok(force), Ok(cadence), Ok(power)) => {
                DecodedSample::Power(PowerSample { force, cadence, power })
            }
            _ => DecodedSample::Unrecognized(text.to_string()),
        };
    }
    if let Some(seconds) = search(text, match_time_at) {
        return match seconds.parse::<u32>() {
            Ok(elapsed_seconds) => DecodedSample::Time(TimeSample { elapsed_seconds }),
            Err(_) => DecodedSample::Unrecognized(text.to_string()),
        };
    }
    if text.starts_with(POLL_SENTINEL) {
        return DecodedSample::Poll;
    }
    DecodedSample::Unrecognized(text.to_string())
}

/// Hex-payload → dekodet sample. Kun hex-feil er `Err`; ukjent tekst er
/// `DecodedSample::Unrecognized`.
pub fn decode_payload(payload: &str) -> Result<DecodedSample, DecodeError> {
    decode_hex(payload).map(|text| classify_text(&text))
}

/// Prøver `matcher` fra hver startposisjon (venstre mot høyre), første treff vinner.
fn search<'a, T>(text: &'a str, matcher: fn(&mut Cursor<'a>) -> Option<T>) -> Option<T> {
    (0..text.len())
        .filter(|&i| text.as_bytes()[i].is_ascii_digit())
        .find_map(|i| matcher(&mut Cursor { text, pos: i }))
}

// ──────────────────────────────────────────────────────────────────────────────
// Scanner over token-former: sifre, desimaltall, enkelttegn, whitespace
// ──────────────────────────────────────────────────────────────────────────────

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn digits(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let n = self.text.as_bytes()[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if n == 0 {
            return None;
        }
        self.pos += n;
        Some(&self.text[start..self.pos])
    }

    fn byte(&mut self, want: u8) -> Option<()> {
        if self.text.as_bytes().get(self.pos) == Some(&want) {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    /// Ett whitespace-tegn (`\s`).
    fn space(&mut self) -> Option<()> {
        let ch = self.text[self.pos..].chars().next()?;
        if ch.is_whitespace() {
            self.pos += ch.len_utf8();
            Some(())
        } else {
            None
        }
    }

    /// `[0-9]+\.[0-9]` – nøyaktig én desimal.
    fn one_decimal(&mut self) -> Option<&'a str> {
        let start = self.pos;
        self.digits()?;
        self.byte(b'.')?;
        let b = *self.text.as_bytes().get(self.pos)?;
        if !b.is_ascii_digit() {
            return None;
        }
        self.pos += 1;
        Some(&self.text[start..self.pos])
    }

    /// `-?[0-9]+`
    fn signed(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let _ = self.byte(b'-');
        self.digits()?;
        Some(&self.text[start..self.pos])
    }
}

/// `<force> <mps>|<cadence>=<power>`
fn match_power_at<'a>(c: &mut Cursor<'a>) -> Option<(&'a str, &'a str, &'a str)> {
    let force = c.one_decimal()?;
    c.space()?;
    c.one_decimal()?;
    c.byte(b'|')?;
    let cadence = c.digits()?;
    c.byte(b'=')?;
    let power = c.signed()?;
    Some((force, cadence, power))
}

/// `<seconds>: <polls>`
fn match_time_at<'a>(c: &mut Cursor<'a>) -> Option<&'a str> {
    let seconds = c.digits()?;
    c.byte(b':')?;
    c.space()?;
    c.digits()?;
    Some(seconds)
}
