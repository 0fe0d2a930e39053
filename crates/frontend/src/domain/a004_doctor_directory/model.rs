use crate::shared::error::ApiError;
use crate::shared::lifecycle::{ErrorInfo, RequestId, RequestLifecycle, Settlement, Ticket};
use crate::shared::projection::open_envelope;
use contracts::domain::a004_doctor_directory::dto::{
    DoctorDto, DoctorQuery, DoctorsResponse, LocationsResponse, SpecializationsResponse,
};

pub const DOCTORS_FAILED: &str = "Failed to fetch doctors";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderFilter {
    /// Empty means any location
    pub location: String,
    /// Empty means any specialization
    pub specialization: String,
    pub emergency_only: bool,
}

impl ProviderFilter {
    /// Only non-default dimensions end up in the query
    pub fn to_query(&self) -> DoctorQuery {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        DoctorQuery {
            location: non_empty(&self.location),
            specialization: non_empty(&self.specialization),
            emergency: self.emergency_only.then_some(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRecord {
    pub name: String,
    pub specialization: String,
    pub hospital: String,
    pub location: String,
    pub phone: String,
    pub experience_years: u32,
    pub rating: f64,
    pub accepts_emergency: bool,
}

impl From<DoctorDto> for ProviderRecord {
    fn from(dto: DoctorDto) -> Self {
        Self {
            name: dto.name,
            specialization: dto.specialization,
            hospital: dto.hospital,
            location: dto.location,
            phone: dto.phone,
            experience_years: dto.experience_years,
            rating: dto.rating,
            accepts_emergency: dto.accepts_emergency,
        }
    }
}

/// What the listing area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView<'a> {
    Loading,
    /// The search succeeded and matched nothing
    Empty,
    Results(&'a [ProviderRecord]),
    Failed(&'a ErrorInfo),
}

/// A missing `doctors` array is read as no matches
pub fn project_listing(
    outcome: Result<DoctorsResponse, ApiError>,
) -> Result<Vec<ProviderRecord>, ErrorInfo> {
    open_envelope(outcome, DOCTORS_FAILED, |env| Some(env.doctors.unwrap_or_default()))
        .map(|doctors| doctors.into_iter().map(ProviderRecord::from).collect())
}

type ReferenceList = RequestLifecycle<(), Vec<String>>;

/// Session-wide cache of the filter options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceCache {
    locations: ReferenceList,
    specializations: ReferenceList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Locations,
    Specializations,
}

impl ReferenceCache {
    fn list(&self, kind: ReferenceKind) -> &ReferenceList {
        match kind {
            ReferenceKind::Locations => &self.locations,
            ReferenceKind::Specializations => &self.specializations,
        }
    }

    fn list_mut(&mut self, kind: ReferenceKind) -> &mut ReferenceList {
        match kind {
            ReferenceKind::Locations => &mut self.locations,
            ReferenceKind::Specializations => &mut self.specializations,
        }
    }

    /// Ticket for a fetch, or `None` when the list is loaded or loading.
    ///
    /// A list whose last fetch failed is fetched again.
    pub fn begin(&mut self, kind: ReferenceKind) -> Option<Ticket<()>> {
        let list = self.list_mut(kind);
        if list.result().is_some() || list.is_pending() {
            return None;
        }
        Some(list.dispatch(()))
    }

    /// Failures are logged; the list stays empty
    pub fn settle(
        &mut self,
        kind: ReferenceKind,
        id: RequestId,
        outcome: Result<Vec<String>, ErrorInfo>,
    ) -> Settlement {
        if let Err(error) = &outcome {
            log::warn!("failed to fetch {kind:?}: {}", error.message);
        }
        self.list_mut(kind).settle(id, outcome)
    }

    pub fn values(&self, kind: ReferenceKind) -> &[String] {
        self.list(kind).result().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn locations(&self) -> &[String] {
        self.values(ReferenceKind::Locations)
    }

    pub fn specializations(&self) -> &[String] {
        self.values(ReferenceKind::Specializations)
    }
}

pub fn project_locations(outcome: Result<LocationsResponse, ApiError>) -> Result<Vec<String>, ErrorInfo> {
    open_envelope(outcome, "Failed to fetch locations", |env| env.locations)
}

pub fn project_specializations(
    outcome: Result<SpecializationsResponse, ApiError>,
) -> Result<Vec<String>, ErrorInfo> {
    open_envelope(outcome, "Failed to fetch specializations", |env| env.specializations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_unconstrained() {
        assert_eq!(ProviderFilter::default().to_query(), DoctorQuery::default());
    }

    #[test]
    fn test_filter_includes_only_set_dimensions() {
        let filter = ProviderFilter {
            location: String::new(),
            specialization: "Neurology".to_string(),
            emergency_only: true,
        };
        assert_eq!(
            filter.to_query(),
            DoctorQuery {
                location: None,
                specialization: Some("Neurology".to_string()),
                emergency: Some(true),
            }
        );
    }

    #[test]
    fn test_missing_doctor_array_is_empty_listing() {
        let resp = DoctorsResponse {
            success: true,
            error: None,
            doctors: None,
        };
        assert_eq!(project_listing(Ok(resp)), Ok(Vec::new()));
    }

    #[test]
    fn test_reference_cache_fetches_once() {
        let mut cache = ReferenceCache::default();
        let ticket = cache.begin(ReferenceKind::Locations).unwrap();
        assert!(cache.begin(ReferenceKind::Locations).is_none());

        cache.settle(
            ReferenceKind::Locations,
            ticket.id,
            Ok(vec!["Boston, MA".to_string()]),
        );
        assert_eq!(cache.locations(), ["Boston, MA".to_string()]);
        assert!(cache.begin(ReferenceKind::Locations).is_none());
        assert!(cache.begin(ReferenceKind::Specializations).is_some());
    }

    #[test]
    fn test_failed_reference_fetch_leaves_list_empty() {
        let mut cache = ReferenceCache::default();
        let ticket = cache.begin(ReferenceKind::Specializations).unwrap();
        cache.settle(
            ReferenceKind::Specializations,
            ticket.id,
            Err(ErrorInfo::new("Failed to fetch specializations")),
        );
        assert!(cache.specializations().is_empty());
        assert!(cache.begin(ReferenceKind::Specializations).is_some());
    }
}
