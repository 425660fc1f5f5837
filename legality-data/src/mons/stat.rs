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

/// A single stat value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "Sp.Atk"]
    SpAtk,
    #[string = "spd"]
    #[alias = "Sp.Def"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
}

/// A full table of individual values, one per stat, each in `0..=31`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IvTable {
    #[serde(default)]
    pub hp: u8,
    #[serde(default)]
    pub atk: u8,
    #[serde(default)]
    pub def: u8,
    #[serde(default)]
    pub spa: u8,
    #[serde(default)]
    pub spd: u8,
    #[serde(default)]
    pub spe: u8,
}

impl IvTable {
    /// The largest value an individual value can take.
    pub const MAX: u8 = 31;

    /// Constructs a table from an ordered list, validating bounds once up front.
    ///
    /// The list order is HP, Atk, Def, SpAtk, SpDef, Spe.
    pub fn from_list(values: &[u8]) -> Result<IvTable> {
        if values.len() != 6 {
            return Err(Error::msg(format!(
                "expected 6 individual values, got {}",
                values.len()
            )));
        }
        if let Some(value) = values.iter().find(|value| **value > Self::MAX) {
            return Err(Error::msg(format!("individual value {value} out of range")));
        }
        Ok(IvTable {
            hp: values[0],
            atk: values[1],
            def: values[2],
            spa: values[3],
            spd: values[4],
            spe: values[5],
        })
    }

    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the given value in the table.
    pub fn set(&mut self, stat: Stat, value: u8) {
        let stat = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *stat = value;
    }
}

impl From<[u8; 6]> for IvTable {
    fn from(values: [u8; 6]) -> Self {
        Self {
            hp: values[0],
            atk: values[1],
            def: values[2],
            spa: values[3],
            spd: values[4],
            spe: values[5],
        }
    }
}

#[cfg(test)]
mod stat_test {
    use crate::{
        Stat,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Stat::HP, "hp");
        test_string_serialization(Stat::SpAtk, "spa");
        test_string_serialization(Stat::Spe, "spe");
    }

    #[test]
    fn deserializes_full_names() {
        test_string_deserialization("Attack", Stat::Atk);
        test_string_deserialization("Sp.Def", Stat::SpDef);
        test_string_deserialization("Speed", Stat::Spe);
    }
}
