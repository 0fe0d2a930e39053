use crate::shared::envelope::impl_envelope;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorDto {
    pub name: String,
    pub specialization: String,
    pub hospital: String,
    pub location: String,
    pub phone: String,
    pub experience_years: u32,
    pub rating: f64,
    pub accepts_emergency: bool,
}

/// Query of `GET /api/doctors`
///
/// Absent dimensions are not serialized and impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorsResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub doctors: Option<Vec<DoctorDto>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub locations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecializationsResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub specializations: Option<Vec<String>>,
}

impl_envelope!(DoctorsResponse, LocationsResponse, SpecializationsResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_doctor_listing() {
        let body = r#"{
            "success": true,
            "doctors": [{
                "name": "Dr. Sarah Johnson",
                "specialization": "Epilepsy & Seizure Disorders",
                "hospital": "City Medical Center",
                "location": "New York, NY",
                "phone": "(555) 123-4567",
                "experience_years": 15,
                "rating": 4.8,
                "accepts_emergency": true
            }]
        }"#;
        let resp: DoctorsResponse = serde_json::from_str(body).unwrap();
        let doctors = resp.doctors.unwrap();
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].experience_years, 15);
        assert!(doctors[0].accepts_emergency);
    }

    #[test]
    fn test_empty_query_serializes_to_nothing() {
        let value = serde_json::to_value(DoctorQuery::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
