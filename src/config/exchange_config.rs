//! Exchange-wide parameters: fee rate, Init baseline, and deposit tolerance.

use core::fmt;

use serde::Deserialize;

use crate::domain::{Amount, BasisPoints, FeeRate, Shares};
use crate::error::ExchangeError;
use crate::math::geometric_mean;

/// How many shares `Init` mints for the seeding deposit.
///
/// Later deposits mint proportionally to the existing supply, so this only
/// fixes the unit in which pool ownership is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InitialShares {
    /// `isqrt(token × currency)`: `Init(1000, 1000)` mints `1000`.
    #[default]
    GeometricMean,
    /// One share per token unit deposited.
    TokenAmount,
    /// One share per currency unit deposited.
    CurrencyAmount,
    /// A fixed grant regardless of the deposit size.
    Fixed(Shares),
}

impl InitialShares {
    /// Resolves the baseline grant for an initial deposit.
    pub fn baseline(self, token: Amount, currency: Amount) -> Shares {
        match self {
            Self::GeometricMean => Shares::new(geometric_mean(token.get(), currency.get())),
            Self::TokenAmount => Shares::new(token.get()),
            Self::CurrencyAmount => Shares::new(currency.get()),
            Self::Fixed(shares) => shares,
        }
    }
}

impl fmt::Display for InitialShares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeometricMean => write!(f, "geometric_mean"),
            Self::TokenAmount => write!(f, "token_amount"),
            Self::CurrencyAmount => write!(f, "currency_amount"),
            Self::Fixed(shares) => write!(f, "fixed({shares})"),
        }
    }
}

/// Configuration of a single exchange pool.
///
/// # Validation
///
/// - The fee must be strictly below 100 % (10 000 bp). A full fee leaves
///   no effective input, so every swap would floor to zero output.
/// - [`InitialShares::Fixed`] must grant at least one share.
///
/// # Loading
///
/// The TOML form is flat and every key is optional:
///
/// ```
/// use dex_exchange::config::{ExchangeConfig, InitialShares};
///
/// let cfg = ExchangeConfig::from_toml_str(
///     r#"
///     fee_bps = 25
///     initial_shares = "token_amount"
///     ratio_tolerance = 2
///     "#,
/// );
/// let Ok(cfg) = cfg else { panic!("valid config") };
/// assert_eq!(cfg.fee_rate().basis_points().get(), 25);
/// assert_eq!(cfg.initial_shares(), InitialShares::TokenAmount);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawExchangeConfig")]
pub struct ExchangeConfig {
    fee_rate: FeeRate,
    initial_shares: InitialShares,
    ratio_tolerance: Amount,
}

impl ExchangeConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidConfiguration`] if any parameter is
    /// out of range.
    pub fn new(
        fee_rate: FeeRate,
        initial_shares: InitialShares,
        ratio_tolerance: Amount,
    ) -> Result<Self, ExchangeError> {
        let config = Self {
            fee_rate,
            initial_shares,
            ratio_tolerance,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidConfiguration`] for malformed TOML,
    /// unknown keys, or out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self, ExchangeError> {
        toml::from_str(source).map_err(|e| ExchangeError::InvalidConfiguration(e.to_string()))
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidConfiguration`] describing the first
    /// violated constraint.
    pub fn validate(&self) -> Result<(), ExchangeError> {
        let bps = self.fee_rate.basis_points();
        if !bps.is_valid_percent() {
            return Err(ExchangeError::InvalidConfiguration(format!(
                "fee rate {bps} exceeds 100%"
            )));
        }
        if bps == BasisPoints::MAX_PERCENT {
            return Err(ExchangeError::InvalidConfiguration(
                "fee rate of 100% leaves no swap output".to_string(),
            ));
        }
        if self.initial_shares == InitialShares::Fixed(Shares::ZERO) {
            return Err(ExchangeError::InvalidConfiguration(
                "fixed initial share grant must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Swap fee charged on inputs.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Share grant policy for `Init`.
    #[must_use]
    pub const fn initial_shares(&self) -> InitialShares {
        self.initial_shares
    }

    /// Extra currency units a deposit may deviate from the exact ratio.
    pub const fn ratio_tolerance(&self) -> Amount {
        self.ratio_tolerance
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            fee_rate: FeeRate::DEFAULT,
            initial_shares: InitialShares::GeometricMean,
            ratio_tolerance: Amount::ZERO,
        }
    }
}

impl fmt::Display for ExchangeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExchangeConfig(fee={}, initial_shares={}, tolerance={})",
            self.fee_rate.basis_points(),
            self.initial_shares,
            self.ratio_tolerance
        )
    }
}

// -- on-disk representation ---------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawExchangeConfig {
    #[serde(default = "default_fee_bps")]
    fee_bps: u32,
    #[serde(default)]
    initial_shares: RawInitialShares,
    #[serde(default)]
    fixed_shares: Option<u64>,
    #[serde(default)]
    ratio_tolerance: u64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawInitialShares {
    #[default]
    GeometricMean,
    TokenAmount,
    CurrencyAmount,
    Fixed,
}

const fn default_fee_bps() -> u32 {
    FeeRate::DEFAULT.basis_points().get()
}

impl TryFrom<RawExchangeConfig> for ExchangeConfig {
    type Error = ExchangeError;

    fn try_from(raw: RawExchangeConfig) -> Result<Self, Self::Error> {
        let initial_shares = match (raw.initial_shares, raw.fixed_shares) {
            (RawInitialShares::Fixed, Some(n)) => InitialShares::Fixed(Shares::new(u128::from(n))),
            (RawInitialShares::Fixed, None) => {
                return Err(ExchangeError::InvalidConfiguration(
                    "initial_shares = \"fixed\" requires fixed_shares".to_string(),
                ));
            }
            (_, Some(_)) => {
                return Err(ExchangeError::InvalidConfiguration(
                    "fixed_shares is only valid with initial_shares = \"fixed\"".to_string(),
                ));
            }
            (RawInitialShares::GeometricMean, None) => InitialShares::GeometricMean,
            (RawInitialShares::TokenAmount, None) => InitialShares::TokenAmount,
            (RawInitialShares::CurrencyAmount, None) => InitialShares::CurrencyAmount,
        };
        Self::new(
            FeeRate::new(BasisPoints::new(raw.fee_bps)),
            initial_shares,
            Amount::from(raw.ratio_tolerance),
        )
    }
}
