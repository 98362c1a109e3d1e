//! Card identities and HP values.

use core::fmt;
use core::num::NonZeroU32;

/// Opaque identifier of a card in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// HP band a card falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HpCategory {
    /// Up to 60 HP.
    Low,
    /// 61 to 90 HP.
    MediumLow,
    /// 91 to 140 HP.
    Medium,
    /// 141 to 200 HP.
    MediumHigh,
    /// Above 200 HP.
    High,
}

impl HpCategory {
    /// Returns the band for the given HP.
    #[must_use]
    pub const fn of(hp: u32) -> Self {
        match hp {
            0..=60 => Self::Low,
            61..=90 => Self::MediumLow,
            91..=140 => Self::Medium,
            141..=200 => Self::MediumHigh,
            _ => Self::High,
        }
    }
}

/// A card drawn into a hand. Only its HP takes part in the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Catalog identity of the card.
    pub id: CardId,
    hp: NonZeroU32,
}

impl Card {
    /// Creates a new card.
    ///
    /// Returns `None` when `hp` is zero.
    ///
    /// ```
    /// use hpjack::Card;
    ///
    /// let pikachu = Card::new(25, 60).unwrap();
    /// assert_eq!(pikachu.hp(), 60);
    /// assert!(Card::new(0, 0).is_none());
    /// ```
    #[must_use]
    pub const fn new(id: u32, hp: u32) -> Option<Self> {
        match NonZeroU32::new(hp) {
            Some(hp) => Some(Self {
                id: CardId(id),
                hp,
            }),
            None => None,
        }
    }

    /// Returns the card's HP.
    #[must_use]
    pub const fn hp(&self) -> u32 {
        self.hp.get()
    }

    /// Returns the HP band of the card.
    #[must_use]
    pub const fn category(&self) -> HpCategory {
        HpCategory::of(self.hp())
    }
}
