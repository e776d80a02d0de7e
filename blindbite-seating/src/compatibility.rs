use crate::attendee::Attendee;

const CLOSE_AGE: u32 = 3;
const NEAR_AGE: u32 = 6;

fn shared<T: PartialEq>(left: Option<&T>, right: Option<&T>) -> bool {
    matches!((left, right), (Some(left), Some(right)) if left == right)
}

/// How well two attendees suit sharing a table. Higher is better.
///
/// Symmetric: every term is computed the same way from both sides. Unset
/// preferences never earn a bonus.
#[must_use]
pub fn compatibility(a: &Attendee, b: &Attendee) -> f64 {
    let mut score = 0.0;

    let age_gap = a.age.abs_diff(b.age);
    if age_gap <= CLOSE_AGE {
        score += 2.0;
    } else if age_gap <= NEAR_AGE {
        score += 1.0;
    }

    // opposite personalities complement each other
    if let (Some(left), Some(right)) = (a.personality_type, b.personality_type) {
        if left != right {
            score += 1.5;
        }
    }

    if shared(a.preferred_cuisine.as_ref(), b.preferred_cuisine.as_ref()) {
        score += 1.0;
    }
    if shared(
        a.ideal_weekend_activity.as_ref(),
        b.ideal_weekend_activity.as_ref(),
    ) {
        score += 0.5;
    }
    if shared(a.purpose.as_ref(), b.purpose.as_ref()) {
        score += 1.0;
    }

    if a.is_looking_for(b) && b.is_looking_for(a) {
        score += 2.0;
    }

    score + (a.trust_score + b.trust_score) / 10.0
}

/// Mean compatibility of `candidate` with everyone already in `members`.
#[must_use]
pub fn average_compatibility(candidate: &Attendee, members: &[Attendee]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let total: f64 = members
        .iter()
        .map(|member| compatibility(candidate, member))
        .sum();
    #[expect(clippy::cast_precision_loss, reason = "tables seat a handful of people")]
    let count = members.len() as f64;
    total / count
}
