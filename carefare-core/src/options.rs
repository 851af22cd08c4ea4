//! Fixed-choice questionnaire options.
//!
//! The questionnaire stores option values as plain strings. These enums give
//! the engine compile-time safety when branching on them, and carry the
//! Japanese display labels used when results are rendered.
//!
//! # Examples
//! ```
//! use carefare_core::{Mobility, Purpose};
//!
//! assert_eq!("walking_aid".parse::<Mobility>(), Ok(Mobility::WalkingAssisted));
//! assert_eq!(Purpose::Hospital.as_str(), "hospital");
//! assert_eq!(Purpose::Hospital.to_string(), "通院・診察");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Returned when an answer string does not name a known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {question} option '{value}'")]
pub struct UnknownOptionError {
    /// Question the value was supplied for.
    pub question: &'static str,
    /// The rejected value.
    pub value: String,
}

impl UnknownOptionError {
    fn new(question: &'static str, value: &str) -> Self {
        Self {
            question,
            value: value.to_owned(),
        }
    }
}

/// How the passenger moves about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mobility {
    /// Walks without assistance.
    Walking,
    /// Walks with a helper or a walking aid.
    WalkingAssisted,
    /// Travels seated in a wheelchair.
    Wheelchair,
    /// Must travel lying on a stretcher.
    Stretcher,
}

impl Mobility {
    /// Return the canonical option value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::WalkingAssisted => "walking_assist",
            Self::Wheelchair => "wheelchair",
            Self::Stretcher => "stretcher",
        }
    }

    /// Return the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Walking => "歩行可能（介助なし）",
            Self::WalkingAssisted => "歩行可能（介助あり）",
            Self::Wheelchair => "車椅子を使用",
            Self::Stretcher => "ストレッチャーが必要",
        }
    }
}

impl fmt::Display for Mobility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mobility {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walking" => Ok(Self::Walking),
            // The questionnaire and older scoring drafts disagree on the value.
            "walking_assist" | "walking_aid" => Ok(Self::WalkingAssisted),
            "wheelchair" => Ok(Self::Wheelchair),
            "stretcher" => Ok(Self::Stretcher),
            _ => Err(UnknownOptionError::new("mobility", s)),
        }
    }
}

/// Why the trip is being made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    /// Hospital or clinic visit.
    Hospital,
    /// Rehabilitation session.
    Rehabilitation,
    /// Day-care service.
    Daycare,
    /// Shopping trip.
    Shopping,
    /// Leisure outing.
    Leisure,
    /// Anything else.
    Other,
}

impl Purpose {
    /// Return the canonical option value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::Rehabilitation => "rehabilitation",
            Self::Daycare => "daycare",
            Self::Shopping => "shopping",
            Self::Leisure => "leisure",
            Self::Other => "other",
        }
    }

    /// Return the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hospital => "通院・診察",
            Self::Rehabilitation => "リハビリテーション",
            Self::Daycare => "デイサービス",
            Self::Shopping => "買い物・外出",
            Self::Leisure => "レジャー",
            Self::Other => "その他",
        }
    }

    /// Report whether the trip is an outing that benefits from luggage space.
    #[must_use]
    pub const fn is_outing(self) -> bool {
        matches!(self, Self::Shopping | Self::Leisure)
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Purpose {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hospital" => Ok(Self::Hospital),
            "rehabilitation" => Ok(Self::Rehabilitation),
            "daycare" => Ok(Self::Daycare),
            "shopping" => Ok(Self::Shopping),
            "leisure" => Ok(Self::Leisure),
            "other" => Ok(Self::Other),
            _ => Err(UnknownOptionError::new("purpose", s)),
        }
    }
}

/// Where the trip takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceArea {
    /// Inside Wakayama city, where the service operates.
    WakayamaCity,
    /// Outside the service area.
    Other,
}

impl ServiceArea {
    /// Return the canonical option value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WakayamaCity => "wakayama-city",
            Self::Other => "other",
        }
    }

    /// Return the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WakayamaCity => "和歌山市内",
            Self::Other => "その他の地域",
        }
    }
}

impl fmt::Display for ServiceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceArea {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wakayama-city" => Ok(Self::WakayamaCity),
            "other" => Ok(Self::Other),
            _ => Err(UnknownOptionError::new("area", s)),
        }
    }
}

/// A yes/no/unknown answer, used for care certification and the care plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confirmation {
    /// Affirmative.
    Yes,
    /// Negative.
    No,
    /// The passenger does not know.
    Unknown,
}

impl Confirmation {
    /// Return the canonical option value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unknown => "unknown",
        }
    }

    /// Report whether the answer is [`Confirmation::Yes`].
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yes => "はい",
            Self::No => "いいえ",
            Self::Unknown => "わからない",
        })
    }
}

impl FromStr for Confirmation {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "unknown" => Ok(Self::Unknown),
            _ => Err(UnknownOptionError::new("confirmation", s)),
        }
    }
}

/// Certified care-need level. Higher values mean greater need.
///
/// # Examples
/// ```
/// use carefare_core::CareLevel;
///
/// let level = CareLevel::new(3);
/// assert!(level.is_high());
/// assert_eq!(level.to_string(), "要介護3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CareLevel(u32);

impl CareLevel {
    /// Levels at or above this need vehicles with wheelchair or stretcher support.
    pub const HIGH_THRESHOLD: u32 = 3;

    /// Wrap a raw level.
    #[must_use]
    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    /// Return the raw level.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Report whether the level is at or above [`Self::HIGH_THRESHOLD`].
    #[must_use]
    pub const fn is_high(self) -> bool {
        self.0 >= Self::HIGH_THRESHOLD
    }
}

impl fmt::Display for CareLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "要介護{}", self.0)
    }
}
