//! Core value types: stat keys, damage channels, grades and the vectors built on them

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the five player attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    Str,
    Dex,
    Int,
    Fth,
    Arc,
}

impl StatKey {
    /// All stat keys in canonical order
    pub fn all() -> &'static [StatKey] {
        &[
            StatKey::Str,
            StatKey::Dex,
            StatKey::Int,
            StatKey::Fth,
            StatKey::Arc,
        ]
    }

    /// Short upper-case label used in requirement and grade lines
    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Str => "STR",
            StatKey::Dex => "DEX",
            StatKey::Int => "INT",
            StatKey::Fth => "FTH",
            StatKey::Arc => "ARC",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the five damage channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageChannel {
    Phys,
    Mag,
    Fire,
    Ligh,
    Holy,
}

impl DamageChannel {
    /// All damage channels in canonical order
    pub fn all() -> &'static [DamageChannel] {
        &[
            DamageChannel::Phys,
            DamageChannel::Mag,
            DamageChannel::Fire,
            DamageChannel::Ligh,
            DamageChannel::Holy,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DamageChannel::Phys => "Phys",
            DamageChannel::Mag => "Mag",
            DamageChannel::Fire => "Fire",
            DamageChannel::Ligh => "Ligh",
            DamageChannel::Holy => "Holy",
        }
    }
}

/// Player attributes for a single calculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub str: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dex: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub int: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fth: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub arc: u32,
}

impl Stats {
    pub fn new(str: u32, dex: u32, int: u32, fth: u32, arc: u32) -> Self {
        Stats {
            str,
            dex,
            int,
            fth,
            arc,
        }
    }

    /// Same value for every attribute
    pub fn uniform(value: u32) -> Self {
        Stats::new(value, value, value, value, value)
    }

    pub fn get(&self, key: StatKey) -> u32 {
        match key {
            StatKey::Str => self.str,
            StatKey::Dex => self.dex,
            StatKey::Int => self.int,
            StatKey::Fth => self.fth,
            StatKey::Arc => self.arc,
        }
    }

    pub fn set(&mut self, key: StatKey, value: u32) {
        match key {
            StatKey::Str => self.str = value,
            StatKey::Dex => self.dex = value,
            StatKey::Int => self.int = value,
            StatKey::Fth => self.fth = value,
            StatKey::Arc => self.arc = value,
        }
    }
}

/// Minimum attributes a weapon asks for. Same shape as [`Stats`]; absent fields are 0.
pub type Requirements = Stats;

/// Scaling grade letter
///
/// The six lettered grades carry a fixed base coefficient. `NoScaling` ("-") and any
/// letter outside the alphabet contribute nothing to scaling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    E,
    #[default]
    NoScaling,
    Unrecognized(String),
}

impl Grade {
    /// Parse a grade letter; never fails
    pub fn from_letter(letter: &str) -> Self {
        match letter.trim() {
            "S" => Grade::S,
            "A" => Grade::A,
            "B" => Grade::B,
            "C" => Grade::C,
            "D" => Grade::D,
            "E" => Grade::E,
            "-" | "" => Grade::NoScaling,
            other => Grade::Unrecognized(other.to_string()),
        }
    }

    /// Letter used as the curve table key
    pub fn letter(&self) -> &str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::NoScaling => "-",
            Grade::Unrecognized(letter) => letter,
        }
    }

    /// Fixed base coefficient (S=1.1 down to E=0.4, otherwise 0)
    pub fn base_coefficient(&self) -> f64 {
        match self {
            Grade::S => 1.1,
            Grade::A => 1.0,
            Grade::B => 0.9,
            Grade::C => 0.75,
            Grade::D => 0.55,
            Grade::E => 0.4,
            Grade::NoScaling | Grade::Unrecognized(_) => 0.0,
        }
    }
}

impl From<String> for Grade {
    fn from(s: String) -> Self {
        Grade::from_letter(&s)
    }
}

impl From<&str> for Grade {
    fn from(s: &str) -> Self {
        Grade::from_letter(s)
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.letter().to_string()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Per-stat grade letters as displayed on the weapon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingGrades {
    #[serde(default, deserialize_with = "null_as_default")]
    pub str: Grade,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dex: Grade,
    #[serde(default, deserialize_with = "null_as_default")]
    pub int: Grade,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fth: Grade,
    #[serde(default, deserialize_with = "null_as_default")]
    pub arc: Grade,
}

impl ScalingGrades {
    pub fn get(&self, key: StatKey) -> &Grade {
        match key {
            StatKey::Str => &self.str,
            StatKey::Dex => &self.dex,
            StatKey::Int => &self.int,
            StatKey::Fth => &self.fth,
            StatKey::Arc => &self.arc,
        }
    }
}

/// Damage per channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageVector {
    #[serde(default, deserialize_with = "null_as_default")]
    pub phys: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mag: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fire: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ligh: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub holy: f64,
}

impl DamageVector {
    pub fn new(phys: f64, mag: f64, fire: f64, ligh: f64, holy: f64) -> Self {
        DamageVector {
            phys,
            mag,
            fire,
            ligh,
            holy,
        }
    }

    /// Only physical damage
    pub fn physical(amount: f64) -> Self {
        DamageVector {
            phys: amount,
            ..Default::default()
        }
    }

    /// Scalar sum of all five channels
    pub fn sum(&self) -> f64 {
        DamageChannel::all().iter().map(|c| self[*c]).sum()
    }

    /// Apply `f` to every channel
    pub fn map(&self, mut f: impl FnMut(DamageChannel, f64) -> f64) -> Self {
        let mut out = DamageVector::default();
        for channel in DamageChannel::all() {
            out[*channel] = f(*channel, self[*channel]);
        }
        out
    }
}

impl Index<DamageChannel> for DamageVector {
    type Output = f64;

    fn index(&self, channel: DamageChannel) -> &f64 {
        match channel {
            DamageChannel::Phys => &self.phys,
            DamageChannel::Mag => &self.mag,
            DamageChannel::Fire => &self.fire,
            DamageChannel::Ligh => &self.ligh,
            DamageChannel::Holy => &self.holy,
        }
    }
}

impl IndexMut<DamageChannel> for DamageVector {
    fn index_mut(&mut self, channel: DamageChannel) -> &mut f64 {
        match channel {
            DamageChannel::Phys => &mut self.phys,
            DamageChannel::Mag => &mut self.mag,
            DamageChannel::Fire => &mut self.fire,
            DamageChannel::Ligh => &mut self.ligh,
            DamageChannel::Holy => &mut self.holy,
        }
    }
}

/// Deserialize a value that may be `null`, treating `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Round half up to the nearest integer, the way the calculator rounds every displayed number
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
