//! Entity and write-payload definitions
//!
//! Each write operation has its own payload struct declaring its required
//! fields. Payloads are checked by the validator first and only then
//! deserialized, so a missing field is always reported as
//! `"No <field> specified."` rather than as a serde error.

use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::Deserialize;
use serde_json::Value;

use super::errors::ValidationError;
use super::validator::validate;

/// The persisted record kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Candidate,
    Party,
    Voter,
}

impl Entity {
    /// Display name used in client messages
    pub fn name(&self) -> &'static str {
        match self {
            Entity::Candidate => "Candidate",
            Entity::Party => "Party",
            Entity::Voter => "Voter",
        }
    }

    /// Message returned when an update or delete matched no row
    pub fn not_found_message(&self) -> &'static str {
        match self {
            Entity::Candidate => "Candidate not found",
            Entity::Party => "Party not found",
            Entity::Voter => "Voter not found",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A write payload with a static set of required fields
pub trait Payload: DeserializeOwned {
    /// Field names that must be present and non-empty, in reporting order
    const REQUIRED: &'static [&'static str];

    /// Validate `payload` and deserialize it into `Self`
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        validate(payload, Self::REQUIRED).into_result()?;
        serde_json::from_value(payload.clone())
            .map_err(|e| ValidationError::Malformed(e.to_string()))
    }
}

/// Body of `POST /candidate`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    #[serde(deserialize_with = "flag")]
    pub industry_connected: bool,
}

impl Payload for NewCandidate {
    const REQUIRED: &'static [&'static str] = &["first_name", "last_name", "industry_connected"];
}

/// Body of `PUT /candidate/:id`; `null` detaches the candidate from its party
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CandidatePartyUpdate {
    #[serde(default, deserialize_with = "optional_id")]
    pub party_id: Option<i64>,
}

impl Payload for CandidatePartyUpdate {
    const REQUIRED: &'static [&'static str] = &["party_id"];
}

/// Body of `POST /party`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewParty {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Payload for NewParty {
    const REQUIRED: &'static [&'static str] = &["name"];
}

/// Body of `POST /voter`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewVoter {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Payload for NewVoter {
    const REQUIRED: &'static [&'static str] = &["first_name", "last_name", "email"];
}

/// Body of `PUT /voter/:id`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoterEmailUpdate {
    pub email: String,
}

impl Payload for VoterEmailUpdate {
    const REQUIRED: &'static [&'static str] = &["email"];
}

/// Body of `POST /vote`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewVote {
    #[serde(deserialize_with = "id")]
    pub voter_id: i64,
    #[serde(deserialize_with = "id")]
    pub candidate_id: i64,
}

impl Payload for NewVote {
    const REQUIRED: &'static [&'static str] = &["voter_id", "candidate_id"];
}

/// Accepts `7` or `"7"`
struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer identifier")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_any(IdVisitor)
}

struct OptionalIdVisitor;

impl<'de> Visitor<'de> for OptionalIdVisitor {
    type Value = Option<i64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer identifier or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Option<i64>, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Option<i64>, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Option<i64>, D::Error> {
        id(deserializer).map(Some)
    }
}

fn optional_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    deserializer.deserialize_option(OptionalIdVisitor)
}

/// Accepts `true`/`false` or an integer, where non-zero is true
struct FlagVisitor;

impl<'de> Visitor<'de> for FlagVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean or 0/1")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
        Ok(v != 0)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
        Ok(v != 0)
    }

    // Form bodies carry every value as a string
    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        match v.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => other
                .parse::<i64>()
                .map(|n| n != 0)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    deserializer.deserialize_any(FlagVisitor)
}
