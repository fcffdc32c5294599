//! Strongly-typed value objects and discriminators shared by domain records.
//!
//! The remote API transmits discriminators as bare integers and strings. The
//! wrappers here turn them into closed enums (or positive identifiers) so that
//! once a value reaches the domain layer it can be matched exhaustively.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Channel discriminator does not name a known platform.
    #[error("unknown channel id: {0}")]
    UnknownChannel(i64),
    /// Search type discriminator is not one of the known search kinds.
    #[error("unknown search type: {0}")]
    UnknownSearchKind(String),
    /// Numeric category id is not a known video category.
    #[error("unknown video category: {0}")]
    UnknownCategory(i64),
}

/// Two-element `[min, max]` range as transmitted on the wire.
///
/// Serde encodes tuples as JSON arrays, so a `Range<i64>` serializes to
/// exactly `[min, max]`.
pub type Range<T> = (T, T);

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(SearchId, "Unique identifier for a stored search job.");
id_newtype!(QuickSearchId, "Unique identifier for a quick search.");
id_newtype!(ChannelId, "Unique identifier for a platform channel.");

/// Platform a search or prospect belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ChannelKind {
    VideoPlatform,
    SocialPlatform,
}

impl ChannelKind {
    /// Integer discriminator used by the remote API.
    pub const fn wire_id(self) -> i64 {
        match self {
            ChannelKind::VideoPlatform => 1,
            ChannelKind::SocialPlatform => 2,
        }
    }
}

impl TryFrom<i64> for ChannelKind {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ChannelKind::VideoPlatform),
            2 => Ok(ChannelKind::SocialPlatform),
            other => Err(TypeConstraintError::UnknownChannel(other)),
        }
    }
}

impl From<ChannelKind> for i64 {
    fn from(value: ChannelKind) -> Self {
        value.wire_id()
    }
}

impl Display for ChannelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelKind::VideoPlatform => write!(f, "video platform"),
            ChannelKind::SocialPlatform => write!(f, "social platform"),
        }
    }
}

/// Kind of search job. Only [`SearchKind::Standard`] has a payload decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Standard,
    Import,
    Similar,
    Follower,
    Hashtag,
}

impl SearchKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SearchKind::Standard => "standard",
            SearchKind::Import => "import",
            SearchKind::Similar => "similar",
            SearchKind::Follower => "follower",
            SearchKind::Hashtag => "hashtag",
        }
    }
}

impl FromStr for SearchKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(SearchKind::Standard),
            "import" => Ok(SearchKind::Import),
            "similar" => Ok(SearchKind::Similar),
            "follower" => Ok(SearchKind::Follower),
            "hashtag" => Ok(SearchKind::Hashtag),
            other => Err(TypeConstraintError::UnknownSearchKind(other.to_string())),
        }
    }
}

impl Display for SearchKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a search or quick search.
///
/// Statuses the client does not know about are preserved verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SearchStatus {
    #[default]
    Pending,
    Finished,
    Other(String),
}

impl Display for SearchStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStatus::Pending => write!(f, "pending"),
            SearchStatus::Finished => write!(f, "finished"),
            SearchStatus::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for SearchStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => SearchStatus::Pending,
            "finished" => SearchStatus::Finished,
            _ => SearchStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for SearchStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<SearchStatus> for String {
    fn from(status: SearchStatus) -> Self {
        status.to_string()
    }
}

/// Numeric category ids used by the video platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum VideoCategory {
    FilmAnimation,
    AutosVehicles,
    Music,
    PetsAnimals,
    Sports,
    TravelEvents,
    Gaming,
    PeopleBlogs,
    Comedy,
    Entertainment,
    NewsPolitics,
    HowtoStyle,
    Education,
    ScienceTech,
    Nonprofits,
    Shows,
    Trailers,
}

impl VideoCategory {
    pub const fn id(self) -> i64 {
        match self {
            VideoCategory::FilmAnimation => 1,
            VideoCategory::AutosVehicles => 2,
            VideoCategory::Music => 10,
            VideoCategory::PetsAnimals => 15,
            VideoCategory::Sports => 17,
            VideoCategory::TravelEvents => 19,
            VideoCategory::Gaming => 20,
            VideoCategory::PeopleBlogs => 22,
            VideoCategory::Comedy => 23,
            VideoCategory::Entertainment => 24,
            VideoCategory::NewsPolitics => 25,
            VideoCategory::HowtoStyle => 26,
            VideoCategory::Education => 27,
            VideoCategory::ScienceTech => 28,
            VideoCategory::Nonprofits => 29,
            VideoCategory::Shows => 43,
            VideoCategory::Trailers => 44,
        }
    }
}

impl TryFrom<i64> for VideoCategory {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let category = match value {
            1 => VideoCategory::FilmAnimation,
            2 => VideoCategory::AutosVehicles,
            10 => VideoCategory::Music,
            15 => VideoCategory::PetsAnimals,
            17 => VideoCategory::Sports,
            19 => VideoCategory::TravelEvents,
            20 => VideoCategory::Gaming,
            22 => VideoCategory::PeopleBlogs,
            23 => VideoCategory::Comedy,
            24 => VideoCategory::Entertainment,
            25 => VideoCategory::NewsPolitics,
            26 => VideoCategory::HowtoStyle,
            27 => VideoCategory::Education,
            28 => VideoCategory::ScienceTech,
            29 => VideoCategory::Nonprofits,
            43 => VideoCategory::Shows,
            44 => VideoCategory::Trailers,
            other => return Err(TypeConstraintError::UnknownCategory(other)),
        };
        Ok(category)
    }
}

impl From<VideoCategory> for i64 {
    fn from(value: VideoCategory) -> Self {
        value.id()
    }
}
