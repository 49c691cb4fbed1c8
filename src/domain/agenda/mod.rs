//! Consent-agenda ordering.
//!
//! A meeting's persisted `ConsentAgendaOrder` is advisory: resolutions can
//! be denied, reassigned, or newly approved after the order was saved. The
//! reconciliation here produces the *effective* order used for display and
//! numbering:
//!
//! 1. take the stored order, keeping only ids that are currently eligible
//!    (Approved and assigned to this meeting) or already published under
//!    it, so published agendas keep their numbered items in place;
//! 2. append included resolutions missing from that list in ascending
//!    creation order, so newly approved items surface deterministically
//!    without an explicit reorder.
//!
//! Reconciliation is read-only; the stored order is never mutated as a
//! side effect of reading.

use crate::domain::foundation::{MeetingId, ResolutionId};
use crate::domain::meeting::ConsentAgendaOrder;
use crate::domain::resolution::Resolution;

/// Computes the effective consent-agenda order for a meeting.
///
/// `snapshot` is the caller's snapshot of resolutions; entries that are
/// neither eligible for `meeting_id` nor already published under it are
/// ignored, so callers may pass an unfiltered list. Keeping published
/// items included means display and the publish cascade agree on
/// positions, and a cascade re-run continues the sequence instead of
/// restarting it. Ties on creation time break by id so the result is
/// deterministic.
pub fn effective_order(
    meeting_id: &MeetingId,
    stored: &ConsentAgendaOrder,
    snapshot: &[Resolution],
) -> Vec<ResolutionId> {
    let included: Vec<&Resolution> = snapshot
        .iter()
        .filter(|r| {
            r.is_eligible_for(meeting_id) || r.published_in_meeting_id() == Some(meeting_id)
        })
        .collect();
    reconcile(stored, &included)
}

fn reconcile(stored: &ConsentAgendaOrder, included: &[&Resolution]) -> Vec<ResolutionId> {
    let mut order: Vec<ResolutionId> = stored
        .ids()
        .iter()
        .filter(|id| included.iter().any(|r| r.id() == *id))
        .copied()
        .collect();

    let mut appended: Vec<&Resolution> = included
        .iter()
        .filter(|r| !order.contains(r.id()))
        .copied()
        .collect();
    appended.sort_by_key(|r| (*r.created_at(), *r.id()));
    order.extend(appended.iter().map(|r| *r.id()));

    order
}

/// Splits a proposed order into the eligible ids (order preserved,
/// duplicates removed) and the ids that were dropped as ineligible.
///
/// Used by the reorder command: dropping ineligible ids silently is a
/// documented leniency of the save path, not an error.
pub fn partition_eligible(
    meeting_id: &MeetingId,
    proposed: &[ResolutionId],
    resolutions: &[Resolution],
) -> (ConsentAgendaOrder, Vec<ResolutionId>) {
    let mut kept = Vec::new();
    let mut dropped = Vec::new();
    for id in proposed {
        let eligible = resolutions
            .iter()
            .any(|r| r.id() == id && r.is_eligible_for(meeting_id));
        if eligible {
            if !kept.contains(id) {
                kept.push(*id);
            }
        } else {
            dropped.push(*id);
        }
    }
    (ConsentAgendaOrder::new(kept), dropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use proptest::prelude::*;

    fn approved_for(meeting_id: MeetingId) -> Resolution {
        let mut r = Resolution::new(
            crate::domain::foundation::ResolutionId::new(),
            "Test resolution".to_string(),
        )
        .unwrap();
        r.set_subject("Subject".to_string()).unwrap();
        r.reassign(Some(meeting_id)).unwrap();
        r.submit().unwrap();
        r.approve().unwrap();
        r
    }

    fn submitted_for(meeting_id: MeetingId) -> Resolution {
        let mut r = Resolution::new(
            crate::domain::foundation::ResolutionId::new(),
            "Test resolution".to_string(),
        )
        .unwrap();
        r.set_subject("Subject".to_string()).unwrap();
        r.reassign(Some(meeting_id)).unwrap();
        r.submit().unwrap();
        r
    }

    #[test]
    fn empty_stored_order_yields_creation_order() {
        let meeting = MeetingId::new();
        let r1 = approved_for(meeting);
        let r2 = approved_for(meeting);

        let order = effective_order(
            &meeting,
            &ConsentAgendaOrder::empty(),
            &[r2.clone(), r1.clone()],
        );

        // r1 was created first
        assert_eq!(order, vec![*r1.id(), *r2.id()]);
    }

    #[test]
    fn stored_order_wins_over_creation_order() {
        let meeting = MeetingId::new();
        let r1 = approved_for(meeting);
        let r2 = approved_for(meeting);

        let stored = ConsentAgendaOrder::new([*r2.id(), *r1.id()]);
        let order = effective_order(&meeting, &stored, &[r1.clone(), r2.clone()]);

        assert_eq!(order, vec![*r2.id(), *r1.id()]);
    }

    #[test]
    fn newly_eligible_resolutions_are_appended() {
        let meeting = MeetingId::new();
        let r1 = approved_for(meeting);
        let r2 = approved_for(meeting);
        let r3 = approved_for(meeting);

        let stored = ConsentAgendaOrder::new([*r2.id(), *r1.id()]);
        let order = effective_order(&meeting, &stored, &[r1.clone(), r2.clone(), r3.clone()]);

        assert_eq!(order, vec![*r2.id(), *r1.id(), *r3.id()]);
    }

    #[test]
    fn stale_ids_are_dropped_from_effective_order() {
        let meeting = MeetingId::new();
        let r1 = approved_for(meeting);
        let denied = {
            let mut r = submitted_for(meeting);
            r.deny().unwrap();
            r
        };

        let stored = ConsentAgendaOrder::new([*denied.id(), *r1.id()]);
        let order = effective_order(&meeting, &stored, &[r1.clone(), denied.clone()]);

        assert_eq!(order, vec![*r1.id()]);
    }

    #[test]
    fn reassigned_resolution_leaves_old_meeting_order() {
        let meeting = MeetingId::new();
        let r1 = approved_for(meeting);
        let mut moved = approved_for(meeting);
        moved.reassign(Some(MeetingId::new())).unwrap();

        let stored = ConsentAgendaOrder::new([*moved.id(), *r1.id()]);
        let order = effective_order(&meeting, &stored, &[r1.clone(), moved.clone()]);

        assert_eq!(order, vec![*r1.id()]);
    }

    #[test]
    fn resolutions_for_other_meetings_are_ignored() {
        let meeting = MeetingId::new();
        let r1 = approved_for(meeting);
        let other = approved_for(MeetingId::new());

        let order = effective_order(
            &meeting,
            &ConsentAgendaOrder::empty(),
            &[r1.clone(), other.clone()],
        );

        assert_eq!(order, vec![*r1.id()]);
    }

    #[test]
    fn effective_order_is_idempotent() {
        let meeting = MeetingId::new();
        let r1 = approved_for(meeting);
        let r2 = approved_for(meeting);
        let stored = ConsentAgendaOrder::new([*r2.id()]);
        let snapshot = [r1.clone(), r2.clone()];

        let first = effective_order(&meeting, &stored, &snapshot);
        let second = effective_order(&meeting, &stored, &snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn published_items_keep_their_position() {
        let meeting = MeetingId::new();
        let mut published = approved_for(meeting);
        published
            .publish_in(
                meeting,
                crate::domain::numbering::ResolutionNumber::derive(&Timestamp::now(), 1),
                1,
            )
            .unwrap();
        let pending = approved_for(meeting);

        let stored = ConsentAgendaOrder::new([*published.id(), *pending.id()]);
        let snapshot = [published.clone(), pending.clone()];

        assert_eq!(
            effective_order(&meeting, &stored, &snapshot),
            vec![*published.id(), *pending.id()]
        );
    }

    #[test]
    fn items_published_under_another_meeting_are_excluded() {
        let meeting = MeetingId::new();
        let other = MeetingId::new();
        let mut elsewhere = approved_for(other);
        elsewhere
            .publish_in(
                other,
                crate::domain::numbering::ResolutionNumber::derive(&Timestamp::now(), 1),
                1,
            )
            .unwrap();
        let pending = approved_for(meeting);

        let order = effective_order(
            &meeting,
            &ConsentAgendaOrder::empty(),
            &[elsewhere.clone(), pending.clone()],
        );
        assert_eq!(order, vec![*pending.id()]);
    }

    #[test]
    fn partition_eligible_drops_ineligible_ids() {
        let meeting = MeetingId::new();
        let r1 = approved_for(meeting);
        let r2 = approved_for(meeting);
        let denied = {
            let mut r = submitted_for(meeting);
            r.deny().unwrap();
            r
        };
        let unknown = crate::domain::foundation::ResolutionId::new();

        let proposed = vec![*r2.id(), *r1.id(), *denied.id(), unknown];
        let (kept, dropped) = partition_eligible(
            &meeting,
            &proposed,
            &[r1.clone(), r2.clone(), denied.clone()],
        );

        assert_eq!(kept.ids(), &[*r2.id(), *r1.id()]);
        assert_eq!(dropped, vec![*denied.id(), unknown]);
    }

    #[test]
    fn partition_eligible_round_trips_valid_lists() {
        let meeting = MeetingId::new();
        let r1 = approved_for(meeting);
        let r2 = approved_for(meeting);

        let proposed = vec![*r2.id(), *r1.id()];
        let (kept, dropped) =
            partition_eligible(&meeting, &proposed, &[r1.clone(), r2.clone()]);

        assert_eq!(kept.ids(), proposed.as_slice());
        assert!(dropped.is_empty());

        // And the saved order is exactly what the effective order returns.
        let order = effective_order(&meeting, &kept, &[r1, r2]);
        assert_eq!(order, proposed);
    }

    proptest! {
        // The effective order never contains duplicates and always covers
        // exactly the eligible set, whatever the stored order claims.
        #[test]
        fn effective_order_is_a_permutation_of_the_eligible_set(
            eligible_count in 0usize..6,
            stale_count in 0usize..4,
        ) {
            let meeting = MeetingId::new();
            let eligible: Vec<Resolution> =
                (0..eligible_count).map(|_| approved_for(meeting)).collect();
            let mut stored_ids: Vec<_> = eligible.iter().map(|r| *r.id()).collect();
            stored_ids.truncate(eligible_count / 2);
            for _ in 0..stale_count {
                stored_ids.push(crate::domain::foundation::ResolutionId::new());
            }

            let stored = ConsentAgendaOrder::new(stored_ids);
            let order = effective_order(&meeting, &stored, &eligible);

            prop_assert_eq!(order.len(), eligible_count);
            let mut unique = order.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), eligible_count);
            for r in &eligible {
                prop_assert!(order.contains(r.id()));
            }
        }
    }

    #[test]
    fn creation_order_ties_break_by_id() {
        // Force identical created_at by reconstituting.
        let meeting = MeetingId::new();
        let at = Timestamp::now();
        let make = |id| {
            Resolution::reconstitute(
                id,
                "Tied".to_string(),
                "Subject".to_string(),
                Some(meeting),
                false,
                false,
                None,
                None,
                None,
                String::new(),
                crate::domain::foundation::ResolutionStatus::Approved,
                None,
                None,
                None,
                at,
                at,
            )
        };
        let a = crate::domain::foundation::ResolutionId::new();
        let b = crate::domain::foundation::ResolutionId::new();
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };

        let order = effective_order(
            &meeting,
            &ConsentAgendaOrder::empty(),
            &[make(hi), make(lo)],
        );
        assert_eq!(order, vec![lo, hi]);
    }
}
