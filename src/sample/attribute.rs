//! The closed schema of a record:
//! four binary attributes and four actions.
use std::fmt;
use std::io;
use std::str::FromStr;


/// A binary attribute observed by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    /// There are coins left in the current room.
    CoinsInRoom,
    /// The agent is close to the character.
    CloseToChar,
    /// Five coins were collected since the last encounter.
    FiveCoinsSince,
    /// The agent has been in the current room for five seconds.
    FiveSecondRoom,
}


impl Attribute {
    /// All attributes in declaration (column) order.
    pub const ALL: [Attribute; 4] = [
        Attribute::CoinsInRoom,
        Attribute::CloseToChar,
        Attribute::FiveCoinsSince,
        Attribute::FiveSecondRoom,
    ];


    /// The order in which attributes are examined when
    /// choosing a split. On equal information gain,
    /// the attribute appearing first wins.
    pub const PRIORITY: [Attribute; 4] = [
        Attribute::CloseToChar,
        Attribute::CoinsInRoom,
        Attribute::FiveCoinsSince,
        Attribute::FiveSecondRoom,
    ];


    /// Position of this attribute in [`Attribute::ALL`].
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }


    /// Returns the human readable name of this attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CoinsInRoom => "Coins In Room",
            Self::CloseToChar => "Close to Char",
            Self::FiveCoinsSince => "Five Coins Since Encounter",
            Self::FiveSecondRoom => "Five Seconds In Room",
        }
    }
}


impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// An action taken by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    /// Chase the character.
    Chase,
    /// Walk to the nearest coin.
    CollectCoin,
    /// Wander inside the current room.
    RoamRoom,
    /// Leave for another room.
    ChangeRoom,
}


impl Action {
    /// All actions in declaration order.
    pub const ALL: [Action; 4] = [
        Action::Chase,
        Action::CollectCoin,
        Action::RoamRoom,
        Action::ChangeRoom,
    ];


    /// Position of this action in [`Action::ALL`].
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }


    /// Returns the human readable name of this action.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chase => "Chase",
            Self::CollectCoin => "Collect Coin",
            Self::RoamRoom => "Roam Room",
            Self::ChangeRoom => "Change Room",
        }
    }


    /// Returns the label used for this action in data files.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chase => "Chase",
            Self::CollectCoin => "CollectNearestCoin",
            Self::RoamRoom => "RoamRoom",
            Self::ChangeRoom => "ChangeRoom",
        }
    }
}


impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


impl FromStr for Action {
    type Err = io::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL.into_iter()
            .find(|action| action.label() == s)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("unknown action label `{s}`"),
                )
            })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_label() {
        for action in Action::ALL {
            let parsed = action.label().parse::<Action>().unwrap();
            assert_eq!(parsed, action);
        }
        assert_eq!(
            "CollectNearestCoin".parse::<Action>().unwrap(),
            Action::CollectCoin,
        );
    }

    #[test]
    fn test_action_unknown_label() {
        let err = "Dance".parse::<Action>().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("Dance"));
    }

    #[test]
    fn test_attribute_index_matches_all() {
        for (i, attribute) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attribute.index(), i);
        }
    }

    #[test]
    fn test_priority_is_a_permutation() {
        let mut priority = Attribute::PRIORITY.to_vec();
        priority.sort();
        assert_eq!(priority, Attribute::ALL.to_vec());
    }
}
