//! Random test-data generation.

use rand::Rng;
use rand::distr::Alphanumeric;

use leadprobe_domain::{NewLead, SubArea};

/// Generates a random alphanumeric string of `len` characters.
#[must_use]
pub fn random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// A well-formed Lead referencing `sub_area`, with a randomized name so
/// repeated runs stay distinguishable in the service's data.
#[must_use]
pub fn lead_referencing(sub_area: &SubArea) -> NewLead {
    NewLead {
        name: format!("User {}", random_string(8)),
        pin_code: sub_area.pin_code.clone(),
        sub_area_id: sub_area.id,
        address: "user address".to_owned(),
        mobile_number: "+359896566556".to_owned(),
        email: "user_mail@abv.bg".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_strings_have_requested_length() {
        assert_eq!(8, random_string(8).chars().count());
        assert!(random_string(8).chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_lead_references_the_sub_area() {
        let sub_area = SubArea {
            id: 4,
            pin_code: "567".to_owned(),
        };
        let lead = lead_referencing(&sub_area);
        assert_eq!(4, lead.sub_area_id);
        assert_eq!("567", lead.pin_code);
        assert!(lead.name.starts_with("User "));
    }
}
