//! Calendar month names for month-scoped queries

use serde::{Deserialize, Serialize};

/// Calendar month enumeration
///
/// Queries address months by their full English name, matched
/// case-insensitively, in any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Map a calendar month number (1-12) to a month
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(Month::January),
            2 => Some(Month::February),
            3 => Some(Month::March),
            4 => Some(Month::April),
            5 => Some(Month::May),
            6 => Some(Month::June),
            7 => Some(Month::July),
            8 => Some(Month::August),
            9 => Some(Month::September),
            10 => Some(Month::October),
            11 => Some(Month::November),
            12 => Some(Month::December),
            _ => None,
        }
    }
}

impl std::str::FromStr for Month {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "january" => Ok(Month::January),
            "february" => Ok(Month::February),
            "march" => Ok(Month::March),
            "april" => Ok(Month::April),
            "may" => Ok(Month::May),
            "june" => Ok(Month::June),
            "july" => Ok(Month::July),
            "august" => Ok(Month::August),
            "september" => Ok(Month::September),
            "october" => Ok(Month::October),
            "november" => Ok(Month::November),
            "december" => Ok(Month::December),
            _ => Err(format!("Invalid month name: {}", s)),
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Month::January => write!(f, "january"),
            Month::February => write!(f, "february"),
            Month::March => write!(f, "march"),
            Month::April => write!(f, "april"),
            Month::May => write!(f, "may"),
            Month::June => write!(f, "june"),
            Month::July => write!(f, "july"),
            Month::August => write!(f, "august"),
            Month::September => write!(f, "september"),
            Month::October => write!(f, "october"),
            Month::November => write!(f, "november"),
            Month::December => write!(f, "december"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_from_str_full_names() {
        assert_eq!("january".parse::<Month>().unwrap(), Month::January);
        assert_eq!("March".parse::<Month>().unwrap(), Month::March);
        assert_eq!("JULY".parse::<Month>().unwrap(), Month::July);
        assert_eq!("dEcEmBeR".parse::<Month>().unwrap(), Month::December);
    }

    #[test]
    fn test_month_from_str_rejects_invalid() {
        assert!("mar".parse::<Month>().is_err());
        assert!("".parse::<Month>().is_err());
        assert!("3".parse::<Month>().is_err());
        assert!("marchh".parse::<Month>().is_err());
    }

    #[test]
    fn test_month_from_index() {
        assert_eq!(Month::from_index(1), Some(Month::January));
        assert_eq!(Month::from_index(12), Some(Month::December));
        assert_eq!(Month::from_index(0), None);
        assert_eq!(Month::from_index(13), None);
    }

    #[test]
    fn test_month_display_roundtrip() {
        for index in 1..=12 {
            let month = Month::from_index(index).unwrap();
            assert_eq!(month.to_string().parse::<Month>().unwrap(), month);
        }
    }
}
