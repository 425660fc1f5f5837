use anyhow::{
    Error,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single contest stat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum ContestStat {
    #[string = "cool"]
    Cool,
    #[string = "beauty"]
    Beauty,
    #[string = "cute"]
    Cute,
    #[string = "smart"]
    Smart,
    #[string = "tough"]
    Tough,
    #[string = "sheen"]
    Sheen,
}

/// A full table of contest stat values.
///
/// Contest stats only ever train upward, so a fixed table on an encounter definition is a floor
/// for stored records and an exact baseline for freshly generated ones.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContestStatTable {
    #[serde(default)]
    pub cool: u8,
    #[serde(default)]
    pub beauty: u8,
    #[serde(default)]
    pub cute: u8,
    #[serde(default)]
    pub smart: u8,
    #[serde(default)]
    pub tough: u8,
    #[serde(default)]
    pub sheen: u8,
}

impl ContestStatTable {
    /// Constructs a table from an ordered list, validating length once up front.
    ///
    /// The list order is cool, beauty, cute, smart, tough, sheen.
    pub fn from_list(values: &[u8]) -> Result<ContestStatTable> {
        if values.len() != 6 {
            return Err(Error::msg(format!(
                "expected 6 contest stats, got {}",
                values.len()
            )));
        }
        Ok(ContestStatTable {
            cool: values[0],
            beauty: values[1],
            cute: values[2],
            smart: values[3],
            tough: values[4],
            sheen: values[5],
        })
    }

    /// Returns the value for the given contest stat.
    pub fn get(&self, stat: ContestStat) -> u8 {
        match stat {
            ContestStat::Cool => self.cool,
            ContestStat::Beauty => self.beauty,
            ContestStat::Cute => self.cute,
            ContestStat::Smart => self.smart,
            ContestStat::Tough => self.tough,
            ContestStat::Sheen => self.sheen,
        }
    }

    /// Sets the given value in the table.
    pub fn set(&mut self, stat: ContestStat, value: u8) {
        let stat = match stat {
            ContestStat::Cool => &mut self.cool,
            ContestStat::Beauty => &mut self.beauty,
            ContestStat::Cute => &mut self.cute,
            ContestStat::Smart => &mut self.smart,
            ContestStat::Tough => &mut self.tough,
            ContestStat::Sheen => &mut self.sheen,
        };
        *stat = value;
    }

    /// Checks whether any component is strictly below the given baseline.
    pub fn below(&self, baseline: &ContestStatTable) -> bool {
        self.cool < baseline.cool
            || self.beauty < baseline.beauty
            || self.cute < baseline.cute
            || self.smart < baseline.smart
            || self.tough < baseline.tough
            || self.sheen < baseline.sheen
    }
}

impl From<[u8; 6]> for ContestStatTable {
    fn from(values: [u8; 6]) -> Self {
        Self {
            cool: values[0],
            beauty: values[1],
            cute: values[2],
            smart: values[3],
            tough: values[4],
            sheen: values[5],
        }
    }
}
