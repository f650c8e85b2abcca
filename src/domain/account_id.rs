//! Opaque caller identity.

use core::fmt;

/// An address-like identity of a trader or liquidity provider.
///
/// The exchange never authenticates: the host injects an already
/// authenticated `AccountId` into every operation. Wraps 20 bytes, the
/// width of an EVM address; every byte sequence is valid.
///
/// # Examples
///
/// ```
/// use dex_exchange::domain::AccountId;
///
/// let alice = AccountId::from_bytes([0xaa; 20]);
/// assert_eq!(alice.as_bytes(), [0xaa; 20]);
/// assert!(alice.to_string().starts_with("0xaaaa"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 20]);

impl AccountId {
    /// Creates an identity from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 20] {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
