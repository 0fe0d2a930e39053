use super::model::{
    project_listing, project_locations, project_specializations, ListingView, ProviderFilter,
    ProviderRecord, ReferenceCache, ReferenceKind,
};
use crate::shared::backend::AnalysisBackend;
use crate::shared::error::{ApiError, ValidationError};
use crate::shared::lifecycle::{
    run_request, RequestId, RequestLifecycle, RequestStatus, Settlement, StateCell, Ticket,
};
use contracts::domain::a004_doctor_directory::dto::{DoctorQuery, DoctorsResponse};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorDirectoryWorkflow {
    filter: ProviderFilter,
    lifecycle: RequestLifecycle<DoctorQuery, Vec<ProviderRecord>>,
}

impl DoctorDirectoryWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &ProviderFilter {
        &self.filter
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.filter.location = location.into();
    }

    pub fn set_specialization(&mut self, specialization: impl Into<String>) {
        self.filter.specialization = specialization.into();
    }

    pub fn set_emergency_only(&mut self, emergency_only: bool) {
        self.filter.emergency_only = emergency_only;
    }

    /// Search with the current filter; there is nothing to validate
    pub fn begin_search(&mut self) -> Ticket<DoctorQuery> {
        self.lifecycle.dispatch(self.filter.to_query())
    }

    pub fn settle(&mut self, id: RequestId, outcome: Result<DoctorsResponse, ApiError>) -> Settlement {
        let settlement = self.lifecycle.settle(id, project_listing(outcome));
        if settlement == Settlement::Fulfilled {
            log::debug!(
                "directory #{id}: {} providers",
                self.lifecycle.result().map_or(0, Vec::len)
            );
        }
        settlement
    }

    /// A failed re-query keeps showing the previous listing
    pub fn listing(&self) -> ListingView<'_> {
        match (self.lifecycle.status(), self.lifecycle.result()) {
            (RequestStatus::Idle | RequestStatus::Pending, _) => ListingView::Loading,
            (_, Some(records)) if records.is_empty() => ListingView::Empty,
            (_, Some(records)) => ListingView::Results(records),
            (_, None) => match self.lifecycle.error() {
                Some(error) => ListingView::Failed(error),
                None => ListingView::Loading,
            },
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lifecycle.is_pending()
    }
}

/// Run a search with the filter as it is now
pub async fn search<C, B>(cell: &C, backend: &B) -> Result<Settlement, ValidationError>
where
    C: StateCell<DoctorDirectoryWorkflow>,
    B: AnalysisBackend + ?Sized,
{
    run_request(
        cell,
        |w: &mut DoctorDirectoryWorkflow| Ok(w.begin_search()),
        |query| backend.doctors(query),
        |w, id, outcome| w.settle(id, outcome),
    )
    .await
}

async fn load_reference<C, B>(cache: &C, backend: &B, kind: ReferenceKind)
where
    C: StateCell<ReferenceCache>,
    B: AnalysisBackend + ?Sized,
{
    let Some(Some(ticket)) = cache.with_mut(|c| c.begin(kind)) else {
        return;
    };
    let outcome = match kind {
        ReferenceKind::Locations => project_locations(backend.locations().await),
        ReferenceKind::Specializations => project_specializations(backend.specializations().await),
    };
    cache.with_mut(|c| c.settle(kind, ticket.id, outcome));
}

/// Feature activation: fill the reference cache if needed and run the
/// initial unfiltered search, all concurrently.
///
/// Returns the settlement of the search.
pub async fn activate<R, C, B>(
    cache: &R,
    cell: &C,
    backend: &B,
) -> Result<Settlement, ValidationError>
where
    R: StateCell<ReferenceCache>,
    C: StateCell<DoctorDirectoryWorkflow>,
    B: AnalysisBackend + ?Sized,
{
    let (_, _, listing) = futures::join!(
        load_reference(cache, backend, ReferenceKind::Locations),
        load_reference(cache, backend, ReferenceKind::Specializations),
        search(cell, backend),
    );
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lifecycle::ErrorInfo;
    use crate::shared::testing::{FakeBackend, Recorded};
    use contracts::domain::a004_doctor_directory::dto::{
        DoctorDto, LocationsResponse, SpecializationsResponse,
    };
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn doctor(name: &str) -> DoctorDto {
        DoctorDto {
            name: name.to_string(),
            specialization: "Neurology".to_string(),
            hospital: "City Medical Center".to_string(),
            location: "New York, NY".to_string(),
            phone: "+1-555-0101".to_string(),
            experience_years: 12,
            rating: 4.8,
            accepts_emergency: true,
        }
    }

    fn listing(doctors: Vec<DoctorDto>) -> DoctorsResponse {
        DoctorsResponse {
            success: true,
            error: None,
            doctors: Some(doctors),
        }
    }

    fn script_references(backend: &FakeBackend) {
        backend.locations.ready(Ok(LocationsResponse {
            success: true,
            error: None,
            locations: Some(vec!["Boston, MA".to_string(), "New York, NY".to_string()]),
        }));
        backend.specializations.ready(Ok(SpecializationsResponse {
            success: true,
            error: None,
            specializations: Some(vec!["Neurology".to_string()]),
        }));
    }

    fn cells() -> (Rc<RefCell<ReferenceCache>>, Rc<RefCell<DoctorDirectoryWorkflow>>) {
        (
            Rc::new(RefCell::new(ReferenceCache::default())),
            Rc::new(RefCell::new(DoctorDirectoryWorkflow::new())),
        )
    }

    #[test]
    fn test_activation_loads_references_and_unfiltered_listing() {
        let (cache, cell) = cells();
        let backend = FakeBackend::default();
        script_references(&backend);
        backend.doctors.ready(Ok(listing(vec![doctor("Dr. A"), doctor("Dr. B")])));

        let outcome = block_on(activate(&cache, &cell, &backend));

        assert_eq!(outcome, Ok(Settlement::Fulfilled));
        assert_eq!(cache.borrow().locations().len(), 2);
        assert_eq!(cache.borrow().specializations(), ["Neurology".to_string()]);
        assert!(backend
            .calls
            .borrow()
            .contains(&Recorded::Doctors(DoctorQuery::default())));
        match cell.borrow().listing() {
            ListingView::Results(records) => assert_eq!(records.len(), 2),
            other => panic!("expected results, got {other:?}"),
        };
    }

    #[test]
    fn test_second_activation_does_not_refetch_references() {
        let (cache, cell) = cells();
        let backend = FakeBackend::default();
        script_references(&backend);
        backend.doctors.ready(Ok(listing(vec![doctor("Dr. A")])));
        block_on(activate(&cache, &cell, &backend)).unwrap();

        let fresh_page = Rc::new(RefCell::new(DoctorDirectoryWorkflow::new()));
        backend.doctors.ready(Ok(listing(vec![doctor("Dr. A")])));
        block_on(activate(&cache, &fresh_page, &backend)).unwrap();

        let calls = backend.calls.borrow();
        let reference_calls = calls
            .iter()
            .filter(|c| matches!(c, Recorded::Locations | Recorded::Specializations))
            .count();
        assert_eq!(reference_calls, 2);
        assert_eq!(cache.borrow().locations().len(), 2);
    }

    #[test]
    fn test_search_sends_only_set_dimensions() {
        let (_, cell) = cells();
        let backend = FakeBackend::default();
        backend.doctors.ready(Ok(listing(vec![doctor("Dr. A")])));
        {
            let mut w = cell.borrow_mut();
            w.set_specialization("Neurology");
            w.set_emergency_only(true);
        }

        block_on(search(&cell, &backend)).unwrap();

        assert_eq!(
            backend.calls.borrow()[0],
            Recorded::Doctors(DoctorQuery {
                location: None,
                specialization: Some("Neurology".to_string()),
                emergency: Some(true),
            })
        );
    }

    #[test]
    fn test_loading_is_distinct_from_empty() {
        let (_, cell) = cells();
        let backend = Rc::new(FakeBackend::default());
        let mut pool = LocalPool::new();
        let reply = backend.doctors.deferred();
        {
            let cell = cell.clone();
            let backend = backend.clone();
            pool.spawner()
                .spawn_local(async move {
                    let _ = search(&cell, &*backend).await;
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert_eq!(cell.borrow().listing(), ListingView::Loading);

        reply.send(Ok(listing(Vec::new()))).unwrap();
        pool.run();
        assert_eq!(cell.borrow().listing(), ListingView::Empty);
    }

    #[test]
    fn test_failed_reference_fetch_is_not_surfaced() {
        let (cache, cell) = cells();
        let backend = FakeBackend::default();
        backend
            .locations
            .ready(Err(ApiError::Network("offline".to_string())));
        backend.specializations.ready(Ok(SpecializationsResponse {
            success: true,
            error: None,
            specializations: Some(vec!["Neurology".to_string()]),
        }));
        backend.doctors.ready(Ok(listing(vec![doctor("Dr. A")])));

        let outcome = block_on(activate(&cache, &cell, &backend));

        assert_eq!(outcome, Ok(Settlement::Fulfilled));
        assert!(cache.borrow().locations().is_empty());
        assert_eq!(cache.borrow().specializations().len(), 1);
    }

    #[test]
    fn test_failed_first_search_shows_failure() {
        let (_, cell) = cells();
        let backend = FakeBackend::default();
        backend.doctors.ready(Err(ApiError::Http {
            status: 500,
            message: None,
        }));

        let outcome = block_on(search(&cell, &backend));

        let expected = ErrorInfo::new("Failed to fetch doctors");
        assert_eq!(outcome, Ok(Settlement::Rejected(expected.clone())));
        assert_eq!(cell.borrow().listing(), ListingView::Failed(&expected));
    }

    #[test]
    fn test_failed_requery_keeps_previous_listing() {
        let (_, cell) = cells();
        let backend = FakeBackend::default();
        backend.doctors.ready(Ok(listing(vec![doctor("Dr. A")])));
        block_on(search(&cell, &backend)).unwrap();

        backend.doctors.ready(Err(ApiError::Timeout(30_000)));
        block_on(search(&cell, &backend)).unwrap();

        match cell.borrow().listing() {
            ListingView::Results(records) => assert_eq!(records[0].name, "Dr. A"),
            other => panic!("expected previous results, got {other:?}"),
        };
    }

    #[test]
    fn test_last_search_wins_when_replies_arrive_out_of_order() {
        let (_, cell) = cells();
        let backend = Rc::new(FakeBackend::default());
        let mut pool = LocalPool::new();
        let first = backend.doctors.deferred();
        let second = backend.doctors.deferred();

        let spawn_search = |pool: &LocalPool, expected: Settlement| {
            let cell = cell.clone();
            let backend = backend.clone();
            pool.spawner()
                .spawn_local(async move {
                    assert_eq!(search(&cell, &*backend).await, Ok(expected));
                })
                .unwrap();
        };
        spawn_search(&pool, Settlement::Stale);
        pool.run_until_stalled();
        cell.borrow_mut().set_location("Boston, MA");
        spawn_search(&pool, Settlement::Fulfilled);
        pool.run_until_stalled();

        second.send(Ok(listing(vec![doctor("Dr. Boston")]))).unwrap();
        pool.run_until_stalled();
        first
            .send(Ok(listing(vec![doctor("Dr. A"), doctor("Dr. B")])))
            .unwrap();
        pool.run();

        match cell.borrow().listing() {
            ListingView::Results(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].name, "Dr. Boston");
            }
            other => panic!("expected the later listing, got {other:?}"),
        };
    }
}
