use chrono::{DateTime, Utc};

use crate::constants::{MICROS_PER_SECOND, NANOS_PER_SECOND, SECONDS_PER_MINUTE};

/// Query window as Unix nanosecond timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_ns: i64,
    pub end_ns: i64,
}

impl TimeWindow {
    /// Window of `minutes` ending at the current wall-clock time.
    pub fn ending_now(minutes: i64) -> Self {
        let now = Utc::now();
        let now_secs =
            now.timestamp() as f64 + now.timestamp_subsec_nanos() as f64 / NANOS_PER_SECOND;
        Self::ending_at(now_secs, minutes)
    }

    /// Window of `minutes` ending at `now_secs`.
    ///
    /// Zero or negative lookbacks are not clamped; Loki decides what to do
    /// with an empty or inverted range.
    pub fn ending_at(now_secs: f64, minutes: i64) -> Self {
        let lookback_secs = minutes as f64 * SECONDS_PER_MINUTE as f64;
        Self {
            start_ns: secs_to_ns(now_secs - lookback_secs),
            end_ns: secs_to_ns(now_secs),
        }
    }
}

fn secs_to_ns(seconds: f64) -> i64 {
    (seconds * NANOS_PER_SECOND).floor() as i64
}

/// `2^exp` for exponents in the normal f64 range
fn pow2(exp: i32) -> f64 {
    f64::from_bits(((exp + 1023) as u64) << 52)
}

/// Nanoseconds as f64 seconds, correctly rounded (ties to even).
///
/// Dividing `ns as f64` by 1e9 rounds twice and can land one ulp away.
fn ns_to_secs(ns: i64) -> f64 {
    if ns == 0 {
        return 0.0;
    }
    let n = (ns as i128).abs();
    let d = NANOS_PER_SECOND as i128;

    // e = floor(log2(n / d))
    let mut e = (127 - n.leading_zeros() as i32) - (127 - d.leading_zeros() as i32);
    let at_least = if e >= 0 { n >= d << e } else { n << -e >= d };
    if !at_least {
        e -= 1;
    }

    // 53 significant bits: k = round(n * 2^shift / d)
    let shift = 52 - e;
    let (num, den) = if shift >= 0 {
        (n << shift, d)
    } else {
        (n, d << -shift)
    };
    let (q, r) = (num / den, num % den);
    let k = if 2 * r > den || (2 * r == den && q % 2 == 1) {
        q + 1
    } else {
        q
    };

    let secs = k as f64 * pow2(-shift);
    if ns < 0 { -secs } else { secs }
}

/// Convert a Loki nanosecond timestamp string to an ISO-8601 UTC string.
///
/// Goes through floating-point seconds, so the result carries microsecond
/// precision at best; the fraction is rounded half to even. Whole seconds
/// render without a fractional part.
pub fn ns_to_iso(ns: &str) -> Option<String> {
    let ns: i64 = ns.trim().parse().ok()?;
    let seconds = ns_to_secs(ns);

    let whole = seconds.trunc();
    let mut secs = whole as i64;
    let mut micros = ((seconds - whole) * MICROS_PER_SECOND).round_ties_even() as i64;
    let whole_micros = MICROS_PER_SECOND as i64;
    if micros >= whole_micros {
        secs += 1;
        micros -= whole_micros;
    } else if micros < 0 {
        secs -= 1;
        micros += whole_micros;
    }

    let dt: DateTime<Utc> = DateTime::from_timestamp(secs, (micros * 1_000) as u32)?;

    let iso = if micros == 0 {
        dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
    };
    Some(iso)
}
