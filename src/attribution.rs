use crate::ctm_client::CallRecord;

/// Marketing attribution extracted from a converting call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribution {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
}

/// Picks the attribution of the first call carrying paid data.
///
/// The input is expected in the order CTM returned it (ascending by call
/// start time), so first-match-wins selects the earliest call whose
/// `paid.source` is present and non-empty. A missing campaign on the
/// winning record stays `None`; it is never coerced to an empty string.
/// No qualifying record means all three fields come back `None`.
pub fn resolve(calls: &[CallRecord]) -> Attribution {
    for call in calls {
        if let Some(paid) = &call.paid {
            if paid.source.as_deref().is_some_and(|s| !s.is_empty()) {
                return Attribution {
                    source: paid.source.clone(),
                    medium: paid.medium.clone(),
                    campaign: paid.campaign.clone(),
                };
            }
        }
    }

    Attribution::default()
}
