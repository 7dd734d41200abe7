//! Tooth identifier normalization.
//!
//! Stored orders mix two-digit FDI ids (`11`, `"48"`) with bare legacy
//! positions (`3`, `"7"`). Normalization never fails on numeric input:
//! values outside the valid ranges pass through unchanged so legacy rows
//! still show up in charts and summaries.

use dental_model::{LEGACY_QUADRANT, ToothPosition, ToothRef};

/// Canonicalize a raw tooth reference.
///
/// - exactly two digits: first is the quadrant, second the position
/// - any other numeric value: quadrant 0 with the value as position
/// - empty or non-numeric: `None`
pub fn normalize(raw: &ToothRef) -> Option<ToothPosition> {
    let text = raw.canonical_text();
    let bytes = text.as_bytes();
    if bytes.len() == 2 && bytes.iter().all(u8::is_ascii_digit) {
        return Some(ToothPosition::lenient(bytes[0] - b'0', bytes[1] - b'0'));
    }
    let position: u8 = text.parse().ok()?;
    Some(ToothPosition::lenient(LEGACY_QUADRANT, position))
}

/// Normalize every reference, dropping the ones with no tooth number.
pub fn normalize_all<'a, I>(refs: I) -> Vec<ToothPosition>
where
    I: IntoIterator<Item = &'a ToothRef>,
{
    refs.into_iter().filter_map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_digits_split_into_quadrant_and_position() {
        let tooth = normalize(&ToothRef::from(14)).unwrap();
        assert_eq!((tooth.quadrant(), tooth.position()), (1, 4));
        let tooth = normalize(&ToothRef::from(" 37 ")).unwrap();
        assert_eq!((tooth.quadrant(), tooth.position()), (3, 7));
    }

    #[test]
    fn single_digit_is_legacy_reference() {
        let tooth = normalize(&ToothRef::from("5")).unwrap();
        assert!(tooth.is_legacy());
        assert_eq!(tooth.position(), 5);
        assert_eq!(tooth.composite_id(), 5);
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let tooth = normalize(&ToothRef::from(59)).unwrap();
        assert_eq!((tooth.quadrant(), tooth.position()), (5, 9));
        let tooth = normalize(&ToothRef::from(123)).unwrap();
        assert_eq!((tooth.quadrant(), tooth.position()), (0, 123));
    }

    #[test]
    fn unresolvable_references_yield_none() {
        assert_eq!(normalize(&ToothRef::from("")), None);
        assert_eq!(normalize(&ToothRef::from("UR1")), None);
        assert_eq!(normalize(&ToothRef::Unresolved), None);
        assert_eq!(normalize(&ToothRef::from(-4)), None);
        assert_eq!(normalize(&ToothRef::from(1000)), None);
    }

    #[test]
    fn normalize_all_skips_unresolvable() {
        let refs = vec![ToothRef::from(11), ToothRef::from("?"), ToothRef::from("21")];
        let teeth = normalize_all(&refs);
        let ids: Vec<u16> = teeth.iter().map(ToothPosition::composite_id).collect();
        assert_eq!(ids, vec![11, 21]);
    }
}
