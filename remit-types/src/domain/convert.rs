//! Bidirectional JPY↔VND amount conversion.
//!
//! Both directions round half away from zero on the real-valued product or
//! quotient (`f64::round`), then truncate to whole currency units. Callers
//! must ensure `rate > 0`; the quote computation rejects a non-positive
//! rate before conversion runs.

/// VND received for a given JPY amount at `rate` (VND per JPY).
pub fn to_dest(source_amount: i64, rate: f64) -> i64 {
    (source_amount as f64 * rate).round() as i64
}

/// JPY required to produce a given VND amount at `rate` (VND per JPY).
pub fn to_source(dest_amount: i64, rate: f64) -> i64 {
    (dest_amount as f64 / rate).round() as i64
}
