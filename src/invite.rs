//! Invite codes that let players find a table.

use alloc::string::String;

use rand::Rng;

/// Random bytes behind each invite code. Each byte renders as two hex digits.
pub const INVITE_CODE_BYTES: usize = 4;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Generates an uppercase hexadecimal invite code, e.g. `"9F03A1C4"`.
///
/// ```
/// use hpjack::generate_invite_code;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let code = generate_invite_code(&mut ChaCha8Rng::seed_from_u64(1));
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
/// ```
#[must_use]
pub fn generate_invite_code<R: Rng>(rng: &mut R) -> String {
    let bytes: [u8; INVITE_CODE_BYTES] = rng.random();
    bytes
        .iter()
        .flat_map(|byte| [byte >> 4, byte & 0x0F])
        .map(|nibble| char::from(HEX_DIGITS[usize::from(nibble)]))
        .collect()
}
