/// 32-bit polynomial string hash, `h = h * 31 + unit` over UTF-16 code units with
/// wrapping arithmetic.
pub fn hash_code(payload: &str) -> i32 {
    payload.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}
