//! The four trainable stats and an exhaustive per-stat mapping.

use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GymError;

/// A trainable character attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Strength.
    #[serde(alias = "str")]
    Strength,
    /// Defense.
    #[serde(alias = "def")]
    Defense,
    /// Speed.
    #[serde(alias = "spd")]
    Speed,
    /// Dexterity.
    #[serde(alias = "dex")]
    Dexterity,
}

impl Stat {
    /// All stats in canonical order.
    pub const ALL: [Stat; 4] = [Self::Strength, Self::Defense, Self::Speed, Self::Dexterity];

    /// The lowercase full name (`"strength"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Defense => "defense",
            Self::Speed => "speed",
            Self::Dexterity => "dexterity",
        }
    }

    /// The three-letter abbreviation (`"str"`).
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Strength => "str",
            Self::Defense => "def",
            Self::Speed => "spd",
            Self::Dexterity => "dex",
        }
    }

    /// The fixed gain-formula constants `(A, B)` for this stat.
    ///
    /// `A` scales the happiness-dependent term and `B` is a flat offset.
    pub fn constants(self) -> (f64, f64) {
        match self {
            Self::Strength => (1600.0, 1700.0),
            Self::Defense => (2100.0, -600.0),
            Self::Speed => (1600.0, 2000.0),
            Self::Dexterity => (1800.0, 1500.0),
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stat {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Stat::ALL
            .into_iter()
            .find(|stat| stat.as_str() == lower || stat.short_name() == lower)
            .ok_or_else(|| GymError::UnknownStat(s.trim().to_string()))
    }
}

/// One value per stat.
///
/// Missing keys deserialize to `T::default()`, so a partial JSON object
/// like `{"speed": 4}` is a valid `StatMap<f64>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct StatMap<T> {
    /// Strength value.
    #[serde(alias = "str")]
    pub strength: T,
    /// Defense value.
    #[serde(alias = "def")]
    pub defense: T,
    /// Speed value.
    #[serde(alias = "spd")]
    pub speed: T,
    /// Dexterity value.
    #[serde(alias = "dex")]
    pub dexterity: T,
}

impl<T> StatMap<T> {
    /// Build a map from explicit per-stat values.
    pub fn new(strength: T, defense: T, speed: T, dexterity: T) -> Self {
        Self {
            strength,
            defense,
            speed,
            dexterity,
        }
    }

    /// Build a map by evaluating `f` for every stat.
    pub fn from_fn(mut f: impl FnMut(Stat) -> T) -> Self {
        Self {
            strength: f(Stat::Strength),
            defense: f(Stat::Defense),
            speed: f(Stat::Speed),
            dexterity: f(Stat::Dexterity),
        }
    }

    /// Borrow the value for `stat`.
    pub fn get(&self, stat: Stat) -> &T {
        match stat {
            Stat::Strength => &self.strength,
            Stat::Defense => &self.defense,
            Stat::Speed => &self.speed,
            Stat::Dexterity => &self.dexterity,
        }
    }

    /// Mutably borrow the value for `stat`.
    pub fn get_mut(&mut self, stat: Stat) -> &mut T {
        match stat {
            Stat::Strength => &mut self.strength,
            Stat::Defense => &mut self.defense,
            Stat::Speed => &mut self.speed,
            Stat::Dexterity => &mut self.dexterity,
        }
    }

    /// Replace the value for `stat`.
    pub fn set(&mut self, stat: Stat, value: T) {
        *self.get_mut(stat) = value;
    }

    /// Iterate `(stat, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, &T)> {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Transform every value, keeping the stat keys.
    pub fn map<U>(&self, mut f: impl FnMut(Stat, &T) -> U) -> StatMap<U> {
        StatMap::from_fn(|stat| f(stat, self.get(stat)))
    }
}

impl<T: Clone> StatMap<T> {
    /// A map holding the same value for every stat.
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T: Copy + std::iter::Sum<T>> StatMap<T> {
    /// Sum of all four values.
    pub fn sum(&self) -> T {
        Stat::ALL.into_iter().map(|stat| *self.get(stat)).sum()
    }
}

impl<T> Index<Stat> for StatMap<T> {
    type Output = T;

    fn index(&self, stat: Stat) -> &T {
        self.get(stat)
    }
}

impl<T> IndexMut<Stat> for StatMap<T> {
    fn index_mut(&mut self, stat: Stat) -> &mut T {
        self.get_mut(stat)
    }
}
