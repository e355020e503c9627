//! Payment workbench: the stateful side of the reconciliation engine.
//!
//! Holds the current payable-trip snapshot next to the selection set and
//! runs the refresh/toggle/submit cycle the payment screen drives. The
//! total is never cached: every read recomputes it from the current
//! snapshot and selection.

use crate::api::PaymentsApi;
use chrono::NaiveDate;
use reembolso_core::payment::{PayableTrip, PaymentMethod, build_payment_payload};
use reembolso_core::selection::{SelectionSet, compute_total};
use reembolso_core::Result;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
struct Snapshot {
    trips: Vec<PayableTrip>,
    selection: SelectionSet,
}

/// One payment screen's worth of state.
///
/// Refreshes triggered on screen focus may resolve after the user has
/// moved on; each refresh carries a stamp and a response whose stamp is no
/// longer the latest is discarded instead of overwriting newer data
/// (cancellation by ignoring). A failed refresh leaves the previous
/// snapshot untouched.
pub struct PaymentWorkbench {
    api: Arc<dyn PaymentsApi>,
    snapshot: RwLock<Snapshot>,
    refresh_stamp: AtomicU64,
}

impl PaymentWorkbench {
    pub fn new(api: Arc<dyn PaymentsApi>) -> Self {
        Self {
            api,
            snapshot: RwLock::new(Snapshot::default()),
            refresh_stamp: AtomicU64::new(0),
        }
    }

    /// Refetches the payable-trip list.
    ///
    /// Existing selections are kept; ids that vanished from the list stay
    /// in the set but no longer count toward the total.
    pub async fn refresh(&self) -> Result<()> {
        let stamp = self.refresh_stamp.fetch_add(1, Ordering::SeqCst) + 1;
        let trips = self.api.payable_trips().await?;

        if self.refresh_stamp.load(Ordering::SeqCst) != stamp {
            tracing::debug!("discarding stale payable-trip response");
            return Ok(());
        }

        self.snapshot.write().await.trips = trips;
        Ok(())
    }

    /// Marks any in-flight refresh as stale (screen dismissed).
    pub fn dismiss(&self) {
        self.refresh_stamp.fetch_add(1, Ordering::SeqCst);
    }

    /// Flips one trip's selection.
    pub async fn toggle(&self, id: i64) {
        self.snapshot.write().await.selection.toggle(id);
    }

    /// The "select all" checkbox: selects every listed trip, or clears
    /// the selection when everything is already selected.
    pub async fn toggle_all(&self) {
        let mut snapshot = self.snapshot.write().await;
        if snapshot.selection.len() == snapshot.trips.len() {
            snapshot.selection.clear();
        } else {
            let trips = std::mem::take(&mut snapshot.trips);
            snapshot.selection.select_all(&trips);
            snapshot.trips = trips;
        }
    }

    /// The running total of the current selection, recomputed on demand.
    pub async fn total(&self) -> Decimal {
        let snapshot = self.snapshot.read().await;
        compute_total(&snapshot.selection, &snapshot.trips)
    }

    /// The current payable-trip snapshot.
    pub async fn trips(&self) -> Vec<PayableTrip> {
        self.snapshot.read().await.trips.clone()
    }

    pub async fn is_selected(&self, id: i64) -> bool {
        self.snapshot.read().await.selection.contains(id)
    }

    pub async fn selected_count(&self) -> usize {
        self.snapshot.read().await.selection.len()
    }

    /// Builds and submits the payment.
    ///
    /// An empty effective selection is rejected before any network call.
    /// The selection is cleared only after the backend confirms; a failed
    /// submission leaves it intact for retry.
    pub async fn submit(&self, payment_date: NaiveDate, method: PaymentMethod) -> Result<String> {
        let payment = {
            let snapshot = self.snapshot.read().await;
            build_payment_payload(&snapshot.selection, &snapshot.trips, payment_date, method)?
        };

        let message = self.api.register_payment(&payment).await?;
        self.snapshot.write().await.selection.clear();
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reembolso_core::ReembolsoError;
    use reembolso_core::payment::PaymentRequest;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    struct FakePaymentsApi {
        responses: Mutex<Vec<Result<Vec<PayableTrip>>>>,
        submissions: Mutex<Vec<PaymentRequest>>,
        submit_result: Mutex<Result<String>>,
        calls: AtomicUsize,
    }

    impl FakePaymentsApi {
        fn with_trips(trips: Vec<PayableTrip>) -> Self {
            Self {
                responses: Mutex::new(vec![Ok(trips)]),
                submissions: Mutex::new(Vec::new()),
                submit_result: Mutex::new(Ok("Pagamento registrado com sucesso!".to_string())),
                calls: AtomicUsize::new(0),
            }
        }

        fn queue(mut responses: Vec<Result<Vec<PayableTrip>>>) -> Self {
            responses.reverse(); // popped from the back
            Self {
                responses: Mutex::new(responses),
                submissions: Mutex::new(Vec::new()),
                submit_result: Mutex::new(Ok("ok".to_string())),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PaymentsApi for FakePaymentsApi {
        async fn payable_trips(&self) -> Result<Vec<PayableTrip>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn register_payment(&self, payment: &PaymentRequest) -> Result<String> {
            self.submissions.lock().unwrap().push(payment.clone());
            self.submit_result.lock().unwrap().clone()
        }
    }

    fn trip(id: i64, amount: &str) -> PayableTrip {
        PayableTrip {
            id,
            trip_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            plate: "ABC1D23".to_string(),
            description: None,
            reimbursement: amount.parse().unwrap(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn toggle_recomputes_the_total() {
        let api = Arc::new(FakePaymentsApi::with_trips(vec![
            trip(1, "120.00"),
            trip(2, "80.00"),
            trip(3, "45.50"),
        ]));
        let workbench = PaymentWorkbench::new(api);
        workbench.refresh().await.unwrap();

        workbench.toggle(1).await;
        workbench.toggle(3).await;
        assert_eq!(workbench.total().await, "165.50".parse::<Decimal>().unwrap());

        workbench.toggle(1).await;
        assert_eq!(workbench.total().await, "45.50".parse::<Decimal>().unwrap());
    }

    #[tokio::test]
    async fn toggle_all_selects_then_clears() {
        let api = Arc::new(FakePaymentsApi::with_trips(vec![
            trip(1, "120.00"),
            trip(2, "80.00"),
        ]));
        let workbench = PaymentWorkbench::new(api);
        workbench.refresh().await.unwrap();

        workbench.toggle_all().await;
        assert_eq!(workbench.total().await, "200.00".parse::<Decimal>().unwrap());

        workbench.toggle_all().await;
        assert_eq!(workbench.total().await, Decimal::ZERO);
    }

    #[tokio::test]
    async fn empty_submission_is_blocked_before_the_network() {
        let api = Arc::new(FakePaymentsApi::with_trips(vec![trip(1, "120.00")]));
        let workbench = PaymentWorkbench::new(api.clone());
        workbench.refresh().await.unwrap();

        let err = workbench
            .submit(date(), PaymentMethod::Pix)
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(api.submissions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn successful_submission_clears_the_selection() {
        let api = Arc::new(FakePaymentsApi::with_trips(vec![
            trip(1, "120.00"),
            trip(2, "80.00"),
        ]));
        let workbench = PaymentWorkbench::new(api.clone());
        workbench.refresh().await.unwrap();
        workbench.toggle(1).await;
        workbench.toggle(2).await;

        let message = workbench.submit(date(), PaymentMethod::Pix).await.unwrap();
        assert_eq!(message, "Pagamento registrado com sucesso!");
        assert_eq!(workbench.selected_count().await, 0);

        let submissions = api.submissions.lock().unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].trip_ids, vec![1, 2]);
        assert_eq!(
            submissions[0].total,
            "200.00".parse::<Decimal>().unwrap()
        );
    }

    #[tokio::test]
    async fn failed_submission_keeps_the_selection() {
        let api = Arc::new(FakePaymentsApi::with_trips(vec![trip(1, "120.00")]));
        *api.submit_result.lock().unwrap() =
            Err(ReembolsoError::api(Some(500), "Erro interno.".to_string()));
        let workbench = PaymentWorkbench::new(api);
        workbench.refresh().await.unwrap();
        workbench.toggle(1).await;

        assert!(workbench.submit(date(), PaymentMethod::Pix).await.is_err());
        assert_eq!(workbench.selected_count().await, 1);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_previous_snapshot() {
        let api = Arc::new(FakePaymentsApi::queue(vec![
            Ok(vec![trip(1, "120.00")]),
            Err(ReembolsoError::network("connection reset")),
        ]));
        let workbench = PaymentWorkbench::new(api);

        workbench.refresh().await.unwrap();
        assert_eq!(workbench.trips().await.len(), 1);

        assert!(workbench.refresh().await.is_err());
        assert_eq!(workbench.trips().await.len(), 1);
    }

    /// API whose response waits until the test releases it, so a dismiss
    /// can land while the fetch is in flight.
    struct BlockedPaymentsApi {
        release: tokio::sync::Notify,
        started: AtomicUsize,
    }

    #[async_trait]
    impl PaymentsApi for BlockedPaymentsApi {
        async fn payable_trips(&self) -> Result<Vec<PayableTrip>> {
            self.started.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(vec![trip(1, "120.00")])
        }

        async fn register_payment(&self, _payment: &PaymentRequest) -> Result<String> {
            Ok("ok".to_string())
        }
    }

    #[tokio::test]
    async fn dismissed_refresh_is_discarded() {
        let api = Arc::new(BlockedPaymentsApi {
            release: tokio::sync::Notify::new(),
            started: AtomicUsize::new(0),
        });
        let workbench = Arc::new(PaymentWorkbench::new(api.clone()));

        let in_flight = tokio::spawn({
            let workbench = workbench.clone();
            async move { workbench.refresh().await }
        });
        while api.started.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        // The screen goes away while the fetch is still in flight.
        workbench.dismiss();
        api.release.notify_one();

        in_flight.await.unwrap().unwrap();
        assert!(workbench.trips().await.is_empty());
    }

    #[tokio::test]
    async fn refresh_keeps_selection_and_drops_vanished_ids_from_total() {
        let api = Arc::new(FakePaymentsApi::queue(vec![
            Ok(vec![trip(1, "120.00"), trip(2, "80.00")]),
            Ok(vec![trip(1, "120.00")]),
        ]));
        let workbench = PaymentWorkbench::new(api);

        workbench.refresh().await.unwrap();
        workbench.toggle(1).await;
        workbench.toggle(2).await;

        workbench.refresh().await.unwrap();
        assert!(workbench.is_selected(2).await);
        assert_eq!(workbench.total().await, "120.00".parse::<Decimal>().unwrap());
    }
}
