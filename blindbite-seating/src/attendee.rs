use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityType {
    Emotional,
    Rational,
}

/// Which gender an attendee would like to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookingFor {
    Male,
    Female,
    Other,
    /// Matches any gender.
    Open,
}

impl LookingFor {
    #[must_use]
    pub const fn accepts(self, gender: Gender) -> bool {
        matches!(
            (self, gender),
            (Self::Open, _)
                | (Self::Male, Gender::Male)
                | (Self::Female, Gender::Female)
                | (Self::Other, Gender::Other)
        )
    }
}

/// A person registered for an event.
///
/// The preference fields are only filled in when the attendee went through
/// the onboarding questionnaire, so every one of them is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    /// Job category, only used for the diversity bonus of a table.
    pub job: String,
    pub is_first_time: bool,
    /// Reputation in `0.0..=10.0`.
    pub trust_score: f64,
    #[serde(default)]
    pub personality_type: Option<PersonalityType>,
    #[serde(default)]
    pub looking_for: Option<LookingFor>,
    #[serde(default)]
    pub ideal_weekend_activity: Option<String>,
    #[serde(default)]
    pub preferred_cuisine: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub relationship_priority: Option<String>,
}

impl Attendee {
    /// Whether this attendee would like to meet `other`.
    #[must_use]
    pub fn is_looking_for(&self, other: &Self) -> bool {
        self.looking_for
            .is_some_and(|looking_for| looking_for.accepts(other.gender))
    }
}
