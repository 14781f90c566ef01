//! Favorite Card Lifecycle
//!
//! present --(confirmed delete succeeded)--> fading --(timer)--> removed.
//! Every failure leaves the card present.

/// Where a favorite card is in its removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Present,
    Fading,
    Removed,
}

/// Things that happen to a card once its removal was confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// Server refused or the request failed in transit
    RequestFailed,
    RequestSucceeded,
    TransitionElapsed,
}

impl CardEvent {
    pub fn from_request<T, E>(result: &Result<T, E>) -> CardEvent {
        if result.is_ok() {
            CardEvent::RequestSucceeded
        } else {
            CardEvent::RequestFailed
        }
    }
}

impl CardPhase {
    pub fn next(self, event: CardEvent) -> CardPhase {
        match (self, event) {
            (CardPhase::Present, CardEvent::RequestSucceeded) => CardPhase::Fading,
            (CardPhase::Fading, CardEvent::TransitionElapsed) => CardPhase::Removed,
            (phase, _) => phase,
        }
    }

    pub fn is_in_document(self) -> bool {
        self != CardPhase::Removed
    }
}

/// Parse the deal id carried by a delete button's `data-id`
pub fn parse_deal_id(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_removal() {
        let phase = CardPhase::Present.next(CardEvent::RequestSucceeded);
        assert_eq!(phase, CardPhase::Fading);
        assert!(phase.is_in_document());

        let phase = phase.next(CardEvent::TransitionElapsed);
        assert_eq!(phase, CardPhase::Removed);
        assert!(!phase.is_in_document());
    }

    #[test]
    fn test_failures_keep_card() {
        for event in [CardEvent::RequestFailed, CardEvent::TransitionElapsed] {
            assert_eq!(CardPhase::Present.next(event), CardPhase::Present);
        }
    }

    #[test]
    fn test_event_from_request() {
        let ok: Result<(), String> = Ok(());
        let err: Result<(), String> = Err("rejected".to_string());
        assert_eq!(CardEvent::from_request(&ok), CardEvent::RequestSucceeded);
        assert_eq!(CardEvent::from_request(&err), CardEvent::RequestFailed);

        let phase = CardPhase::Present.next(CardEvent::from_request(&err));
        assert!(phase.is_in_document());
        assert_eq!(phase.next(CardEvent::TransitionElapsed), CardPhase::Present);
    }

    #[test]
    fn test_removed_is_terminal() {
        assert_eq!(CardPhase::Removed.next(CardEvent::RequestSucceeded), CardPhase::Removed);
    }

    #[test]
    fn test_parse_deal_id() {
        assert_eq!(parse_deal_id(Some("42")), Some(42));
        assert_eq!(parse_deal_id(Some(" 7 ")), Some(7));
        assert_eq!(parse_deal_id(Some("abc")), None);
        assert_eq!(parse_deal_id(Some("")), None);
        assert_eq!(parse_deal_id(None), None);
    }
}
