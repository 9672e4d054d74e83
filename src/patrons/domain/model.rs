use std::fmt;
use std::fmt::{Debug, Formatter};
use tracing::debug;
use crate::books::domain::AvailableBook;
use crate::patrons::domain::{HoldDuration, PatronHolds, PatronId, PatronInformation};
use crate::patrons::events::{BookHoldFailed, BookPlacedOnHold};
use crate::patrons::policy::{PlacingOnHoldPolicies, Rejection};

/// Patron is the aggregate deciding whether a hold may be placed.
///
/// The policy chain and patron identity are fixed at construction. `PatronHolds`
/// is whatever the caller loaded for this decision; placing a hold never changes it.
pub struct Patron {
    patron: PatronInformation,
    placing_on_hold_policies: PlacingOnHoldPolicies,
    patron_holds: PatronHolds,
}

impl Patron {
    pub fn new(patron: PatronInformation, placing_on_hold_policies: PlacingOnHoldPolicies,
               patron_holds: PatronHolds) -> Self {
        Self {
            patron,
            placing_on_hold_policies,
            patron_holds,
        }
    }

    pub fn patron_id(&self) -> PatronId {
        self.patron.patron_id()
    }

    pub fn is_regular(&self) -> bool {
        self.patron.is_regular()
    }

    pub fn number_of_holds(&self) -> usize {
        self.patron_holds.count()
    }

    /// Runs the policies in order and stops at the first rejection.
    pub fn place_on_hold(&self, book: &AvailableBook, duration: HoldDuration) -> Result<BookPlacedOnHold, BookHoldFailed> {
        match self.patron_can_hold(book, &duration) {
            None => Ok(BookPlacedOnHold::now(
                self.patron_id(), book.book_id(), book.book_type(), book.library_branch(), duration)),
            Some(rejection) => Err(BookHoldFailed::now(
                self.patron_id(), rejection.reason(), book.book_id(), book.library_branch(), duration)),
        }
    }

    fn patron_can_hold(&self, book: &AvailableBook, duration: &HoldDuration) -> Option<Rejection> {
        self.placing_on_hold_policies.iter().find_map(|policy| {
            policy.evaluate(book, self, duration).err().map(|rejection| {
                debug!("policy {} rejected hold of book {} for patron {}: {}",
                    policy.name(), book.book_id(), self.patron_id(), rejection.reason());
                rejection
            })
        })
    }
}

impl Debug for Patron {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Patron")
            .field("patron", &self.patron)
            .field("placing_on_hold_policies", &self.placing_on_hold_policies.len())
            .field("patron_holds", &self.patron_holds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use crate::books::domain::{AvailableBook, BookId, LibraryBranchId};
    use crate::core::library::BookType;
    use crate::patrons::domain::{Hold, HoldDuration, PatronHolds, PatronId, PatronInformation};
    use crate::patrons::domain::model::Patron;
    use crate::patrons::policy::{Allowance, PlacingOnHoldPolicies, PlacingOnHoldPolicy, PolicyDecision, Rejection, RejectionReason};

    fn rejecting(reason: RejectionReason) -> Arc<dyn PlacingOnHoldPolicy> {
        Arc::new(move |_: &AvailableBook, _: &Patron, _: &HoldDuration| -> PolicyDecision {
            Err(Rejection::with_reason(reason))
        })
    }

    fn approving() -> Arc<dyn PlacingOnHoldPolicy> {
        Arc::new(|_: &AvailableBook, _: &Patron, _: &HoldDuration| -> PolicyDecision { Ok(Allowance) })
    }

    fn holds(count: usize) -> PatronHolds {
        PatronHolds::new((0..count).map(|_| Hold::new(BookId::new(), LibraryBranchId::new())).collect())
    }

    fn regular_patron(policies: PlacingOnHoldPolicies) -> Patron {
        Patron::new(PatronInformation::regular(PatronId::new()), policies, PatronHolds::empty())
    }

    fn circulating_book() -> AvailableBook {
        AvailableBook::new(BookId::new(), BookType::Circulating, LibraryBranchId::new())
    }

    fn ten_days() -> HoldDuration {
        HoldDuration::close_ended(10).expect("valid duration")
    }

    #[tokio::test]
    async fn test_should_place_on_hold_without_policies() {
        let patron = regular_patron(vec![]);
        let book = AvailableBook::new(BookId::new(), BookType::Restricted, LibraryBranchId::new());
        let duration = ten_days();
        let placed = patron.place_on_hold(&book, duration).expect("should be placed on hold");
        assert_eq!(patron.patron_id(), placed.patron_id());
        assert_eq!(book.book_id(), placed.book_id());
        assert_eq!(BookType::Restricted, placed.book_type());
        assert_eq!(book.library_branch(), placed.library_branch_id());
        assert_eq!(duration, placed.hold_duration());
    }

    #[tokio::test]
    async fn test_should_fail_with_reason_of_single_rejecting_policy() {
        let patron = regular_patron(vec![rejecting(RejectionReason::TooManyHolds)]);
        let book = circulating_book();
        let duration = ten_days();
        let failed = patron.place_on_hold(&book, duration).expect_err("should fail");
        assert_eq!(RejectionReason::TooManyHolds, failed.reason());
        assert_eq!(patron.patron_id(), failed.patron_id());
        assert_eq!(book.book_id(), failed.book_id());
        assert_eq!(book.library_branch(), failed.library_branch_id());
        assert_eq!(duration, failed.hold_duration());
    }

    #[tokio::test]
    async fn test_should_surface_first_rejection_in_order() {
        let first = rejecting(RejectionReason::RestrictedBook);
        let second = rejecting(RejectionReason::OpenEndedHold);
        let book = circulating_book();

        let patron = regular_patron(vec![first.clone(), second.clone()]);
        let failed = patron.place_on_hold(&book, ten_days()).expect_err("should fail");
        assert_eq!(RejectionReason::RestrictedBook, failed.reason());

        let swapped = regular_patron(vec![second, first]);
        let failed = swapped.place_on_hold(&book, ten_days()).expect_err("should fail");
        assert_eq!(RejectionReason::OpenEndedHold, failed.reason());
    }

    #[tokio::test]
    async fn test_should_not_evaluate_policies_after_rejection() {
        let evaluated = Arc::new(AtomicBool::new(false));
        let recorder = evaluated.clone();
        let recording: Arc<dyn PlacingOnHoldPolicy> = Arc::new(move |_: &AvailableBook, _: &Patron, _: &HoldDuration| -> PolicyDecision {
            recorder.store(true, Ordering::SeqCst);
            Ok(Allowance)
        });
        let patron = regular_patron(vec![rejecting(RejectionReason::TooManyHolds), recording]);
        assert!(patron.place_on_hold(&circulating_book(), ten_days()).is_err());
        assert!(!evaluated.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_should_evaluate_approving_policies_before_rejection() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let counting: Arc<dyn PlacingOnHoldPolicy> = Arc::new(move |_: &AvailableBook, _: &Patron, _: &HoldDuration| -> PolicyDecision {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Allowance)
        });
        let patron = regular_patron(vec![counting.clone(), counting, rejecting(RejectionReason::RestrictedBook)]);
        let failed = patron.place_on_hold(&circulating_book(), ten_days()).expect_err("should fail");
        assert_eq!(RejectionReason::RestrictedBook, failed.reason());
        assert_eq!(2, calls.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_should_place_on_hold_when_all_policies_approve() {
        for n in [1, 2, 5, 20] {
            let patron = regular_patron((0..n).map(|_| approving()).collect());
            assert!(patron.place_on_hold(&circulating_book(), ten_days()).is_ok());
        }
    }

    #[tokio::test]
    async fn test_should_report_supplied_number_of_holds() {
        let patron = Patron::new(PatronInformation::regular(PatronId::new()), vec![], holds(3));
        assert_eq!(3, patron.number_of_holds());
        let _ = patron.place_on_hold(&circulating_book(), ten_days());
        assert_eq!(3, patron.number_of_holds());
    }

    #[tokio::test]
    async fn test_should_report_classification() {
        let regular = Patron::new(PatronInformation::regular(PatronId::new()), vec![], PatronHolds::empty());
        assert!(regular.is_regular());
        let researcher = Patron::new(PatronInformation::researcher(PatronId::new()), vec![], PatronHolds::empty());
        assert!(!researcher.is_regular());
    }

    #[tokio::test]
    async fn test_should_let_policies_read_patron_state() {
        let max_two: Arc<dyn PlacingOnHoldPolicy> = Arc::new(|_: &AvailableBook, patron: &Patron, _: &HoldDuration| -> PolicyDecision {
            if patron.is_regular() && patron.number_of_holds() >= 2 {
                return Err(Rejection::with_reason(RejectionReason::TooManyHolds));
            }
            Ok(Allowance)
        });
        let busy = Patron::new(PatronInformation::regular(PatronId::new()), vec![max_two.clone()], holds(2));
        assert!(busy.place_on_hold(&circulating_book(), ten_days()).is_err());
        let free = Patron::new(PatronInformation::regular(PatronId::new()), vec![max_two], holds(1));
        assert!(free.place_on_hold(&circulating_book(), ten_days()).is_ok());
    }

    #[tokio::test]
    async fn test_should_share_policies_across_threads() {
        let policies: PlacingOnHoldPolicies = vec![approving(), rejecting(RejectionReason::OpenEndedHold)];
        let handles: Vec<_> = (0..4).map(|_| {
            let policies = policies.clone();
            std::thread::spawn(move || {
                let patron = regular_patron(policies);
                patron.place_on_hold(&circulating_book(), ten_days()).map(|_| ()).map_err(|e| e.reason())
            })
        }).collect();
        for handle in handles {
            assert_eq!(Err(RejectionReason::OpenEndedHold), handle.join().expect("thread should finish"));
        }
    }
}
