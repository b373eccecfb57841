/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

/// Generate a booking reference.
///
/// Layout: `<base36 millisecond timestamp>-<6 random base36 chars>`,
/// upper-cased. The timestamp keeps references roughly sortable; the random
/// suffix (36^6 ≈ 2.2e9 values) makes same-millisecond collisions
/// negligible at booking-form rates.
pub fn booking_reference() -> String {
    use rand::Rng;

    let ts = encode_base36(now_millis() as u64);
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{ts}-{suffix}").to_uppercase()
}

fn encode_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).expect("base36 alphabet is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base36_known_values() {
        assert_eq!(encode_base36(0), "0");
        assert_eq!(encode_base36(35), "z");
        assert_eq!(encode_base36(36), "10");
        assert_eq!(encode_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn reference_shape() {
        let r = booking_reference();
        assert!(r.contains('-'));
        assert_eq!(r, r.to_uppercase());
        let suffix = r.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), SUFFIX_LEN);
    }

    #[test]
    fn references_unique_across_rapid_generation() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(booking_reference()), "duplicate reference");
        }
    }
}
