use shared_types::ZoneCheck;

/// Ternary deliverability verdict for a position.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneOutcome {
    /// The point falls inside an operating zone.
    Inside { zone: String },
    /// Outside every zone, but the platform operates nearby.
    NearFallback { zone: String },
    /// Outside every zone, nothing nearby.
    Outside,
}

impl ZoneOutcome {
    /// `selected_zone` wins over `fallback_zone` when both are present.
    pub fn classify(check: ZoneCheck) -> Self {
        match (check.selected_zone, check.fallback_zone) {
            (Some(zone), _) => ZoneOutcome::Inside { zone },
            (None, Some(zone)) => ZoneOutcome::NearFallback { zone },
            (None, None) => ZoneOutcome::Outside,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ZoneOutcome::Inside { .. })
    }

    pub fn notice(&self) -> Notice {
        match self {
            ZoneOutcome::Inside { .. } => Notice::ZoneValid,
            ZoneOutcome::NearFallback { .. } => Notice::ZoneFallbackOnly,
            ZoneOutcome::Outside => Notice::ZoneUnavailable,
        }
    }
}

/// User-facing notifications the editor emits. The view layer maps these to
/// toasts; keeping them as data lets the tests count them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ZoneValid,
    ZoneFallbackOnly,
    ZoneUnavailable,
    ZoneCheckFailed,
    OutsideServiceArea,
    LocationSaved,
    SaveFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::ZoneValid | Notice::LocationSaved => NoticeLevel::Success,
            Notice::ZoneFallbackOnly | Notice::ZoneUnavailable | Notice::OutsideServiceArea => {
                NoticeLevel::Warning
            }
            Notice::ZoneCheckFailed | Notice::SaveFailed => NoticeLevel::Error,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::ZoneValid => "Location is inside an operating zone.",
            Notice::ZoneFallbackOnly => {
                "Location is outside your zone; a nearby zone could serve it instead."
            }
            Notice::ZoneUnavailable => "No operating zone covers this location.",
            Notice::ZoneCheckFailed => "Could not verify the delivery zone. Try again.",
            Notice::OutsideServiceArea => "That point is outside the supported service area.",
            Notice::LocationSaved => "Restaurant location saved.",
            Notice::SaveFailed => "Saving the location failed. Your changes are kept.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(selected: Option<&str>, fallback: Option<&str>) -> ZoneCheck {
        ZoneCheck {
            selected_zone: selected.map(Into::into),
            fallback_zone: fallback.map(Into::into),
        }
    }

    #[test]
    fn selected_zone_is_valid() {
        let outcome = ZoneOutcome::classify(check(Some("zone-1"), None));
        assert_eq!(
            outcome,
            ZoneOutcome::Inside {
                zone: "zone-1".into()
            }
        );
        assert!(outcome.is_valid());
        assert_eq!(outcome.notice(), Notice::ZoneValid);
    }

    #[test]
    fn fallback_only_is_invalid_with_distinct_notice() {
        let outcome = ZoneOutcome::classify(check(None, Some("zone-2")));
        assert!(!outcome.is_valid());
        assert_eq!(outcome.notice(), Notice::ZoneFallbackOnly);
        assert_ne!(outcome.notice(), ZoneOutcome::Outside.notice());
    }

    #[test]
    fn neither_zone_is_invalid() {
        let outcome = ZoneOutcome::classify(check(None, None));
        assert_eq!(outcome, ZoneOutcome::Outside);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.notice(), Notice::ZoneUnavailable);
    }

    #[test]
    fn selected_wins_over_fallback() {
        let outcome = ZoneOutcome::classify(check(Some("zone-1"), Some("zone-2")));
        assert!(outcome.is_valid());
    }
}
