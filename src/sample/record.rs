//! A single labeled observation.
use std::io;
use std::str::FromStr;

use super::attribute::{Attribute, Action};


/// One labeled observation:
/// the values of the four attributes and the action taken.
/// A `Record` is never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record {
    values: [bool; 4],
    action: Action,
}


impl Record {
    /// Construct a new record.
    /// The arguments follow the column order of the data file.
    #[inline]
    pub fn new(
        coins_in_room: bool,
        close_to_char: bool,
        five_coins_since: bool,
        five_second_room: bool,
        action: Action,
    ) -> Self
    {
        let values = [
            coins_in_room,
            close_to_char,
            five_coins_since,
            five_second_room,
        ];
        Self { values, action }
    }


    /// Returns the value of `attribute` on this record.
    #[inline]
    pub fn value(&self, attribute: Attribute) -> bool {
        self.values[attribute.index()]
    }


    /// Returns the action label of this record.
    #[inline]
    pub fn action(&self) -> Action {
        self.action
    }
}


/// Anything that tells the value of each attribute.
/// A learned tree walks down by querying an `Observation`.
pub trait Observation {
    /// Returns the value of `attribute`.
    fn value(&self, attribute: Attribute) -> bool;
}


impl Observation for Record {
    #[inline]
    fn value(&self, attribute: Attribute) -> bool {
        Record::value(self, attribute)
    }
}


/// Attribute values in the order of [`Attribute::ALL`].
impl Observation for [bool; 4] {
    #[inline]
    fn value(&self, attribute: Attribute) -> bool {
        self[attribute.index()]
    }
}


fn invalid<S: Into<String>>(message: S) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message.into())
}


fn parse_flag(word: Option<&str>, attribute: Attribute)
    -> io::Result<bool>
{
    match word {
        Some("1") => Ok(true),
        Some("0") => Ok(false),
        Some(other) => Err(invalid(format!(
            "expected 0 or 1 for `{attribute}`, found `{other}`"
        ))),
        None => Err(invalid(format!("missing value for `{attribute}`"))),
    }
}


/// Parses a line of the form `c k f s Label`.
impl FromStr for Record {
    type Err = io::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();

        let mut values = [false; 4];
        for attribute in Attribute::ALL {
            values[attribute.index()] = parse_flag(words.next(), attribute)?;
        }

        let action = words.next()
            .ok_or_else(|| invalid("missing action label"))?
            .parse::<Action>()?;

        if let Some(extra) = words.next() {
            return Err(invalid(format!("unexpected trailing field `{extra}`")));
        }

        let [c, k, f, s] = values;
        Ok(Record::new(c, k, f, s, action))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let record = "1 0 1 0 RoamRoom".parse::<Record>().unwrap();
        assert!(record.value(Attribute::CoinsInRoom));
        assert!(!record.value(Attribute::CloseToChar));
        assert!(record.value(Attribute::FiveCoinsSince));
        assert!(!record.value(Attribute::FiveSecondRoom));
        assert_eq!(record.action(), Action::RoamRoom);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let record = "  0\t1  1 1   Chase ".parse::<Record>().unwrap();
        assert_eq!(record, Record::new(false, true, true, true, Action::Chase));
    }

    #[test]
    fn test_parse_rejects_bad_flag() {
        let err = "1 2 0 0 Chase".parse::<Record>().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("Close to Char"));
    }

    #[test]
    fn test_parse_rejects_short_and_long_lines() {
        assert!("1 0 0 Chase".parse::<Record>().is_err());
        assert!("1 0 0 1".parse::<Record>().is_err());
        assert!("1 0 0 1 Chase Chase".parse::<Record>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        let err = "1 0 0 1 Sleep".parse::<Record>().unwrap_err();
        assert!(err.to_string().contains("Sleep"));
    }
}
