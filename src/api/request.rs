//! Request types for the Attendance Ledger & Payroll Engine API.
//!
//! Actor identity arrives in headers set by the authenticating gateway:
//! `x-company-id`, `x-role`, and optionally `x-employee-id` for accounts
//! linked to an employee profile. The [`Actor`] extractor turns them into an
//! [`ActorContext`]; a missing or malformed header is rejected before any
//! handler runs.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::HeaderMap, request::Parts, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ActorContext, CompanyId, EmployeeId, ImportRecord, Role};

use super::response::{ApiError, ApiErrorResponse};

/// Extractor for the authenticated actor context.
#[derive(Debug, Clone, Copy)]
pub struct Actor(pub ActorContext);

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, ApiError> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(Some)
            .map_err(|_| ApiError::unauthenticated(format!("Header {} is not valid UTF-8", name))),
    }
}

impl Actor {
    fn from_headers(headers: &HeaderMap) -> Result<Self, ApiError> {
        let company_id: CompanyId = header_str(headers, "x-company-id")?
            .ok_or_else(|| ApiError::unauthenticated("Missing x-company-id header"))?
            .parse()
            .map_err(|_| ApiError::unauthenticated("Invalid x-company-id header"))?;

        let role: Role = match header_str(headers, "x-role")?
            .ok_or_else(|| ApiError::unauthenticated("Missing x-role header"))?
        {
            "ADMIN" => Role::Admin,
            "HR" => Role::Hr,
            "EMPLOYEE" => Role::Employee,
            _ => return Err(ApiError::unauthenticated("Invalid x-role header")),
        };

        let employee_id: Option<EmployeeId> = header_str(headers, "x-employee-id")?
            .map(|value| {
                value
                    .parse()
                    .map_err(|_| ApiError::unauthenticated("Invalid x-employee-id header"))
            })
            .transpose()?;

        Ok(Actor(ActorContext {
            company_id,
            employee_id,
            role,
        }))
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Actor {
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Actor::from_headers(&parts.headers).map_err(|error| ApiErrorResponse {
            status: StatusCode::UNAUTHORIZED,
            error,
        })
    }
}

/// Query parameters for the admin attendance listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Restrict to a single calendar day.
    #[serde(default)]
    pub day: Option<NaiveDate>,
    /// Restrict to a single employee.
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
}

/// Request body for the `/attendance/import` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// The records to ingest.
    pub records: Vec<ImportRecord>,
}

/// Request body for the `/payroll/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The full-period gross salary.
    pub gross_salary: Decimal,
    /// Days for which compensation is owed, aggregated from the ledger.
    pub payable_days: u32,
    /// Length of the period in days.
    pub total_days_in_period: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use uuid::Uuid;

    fn headers(company: Option<&str>, employee: Option<&str>, role: Option<&str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(value) = company {
            map.insert("x-company-id", HeaderValue::from_str(value).unwrap());
        }
        if let Some(value) = employee {
            map.insert("x-employee-id", HeaderValue::from_str(value).unwrap());
        }
        if let Some(value) = role {
            map.insert("x-role", HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_actor_parses_full_headers() {
        let company = Uuid::new_v4().to_string();
        let employee = Uuid::new_v4().to_string();
        let map = headers(Some(&company), Some(&employee), Some("EMPLOYEE"));

        let Actor(actor) = Actor::from_headers(&map).unwrap();
        assert_eq!(actor.company_id.to_string(), company);
        assert_eq!(actor.employee_id.unwrap().to_string(), employee);
        assert_eq!(actor.role, Role::Employee);
    }

    #[test]
    fn test_actor_without_employee_profile() {
        let company = Uuid::new_v4().to_string();
        let map = headers(Some(&company), None, Some("ADMIN"));

        let Actor(actor) = Actor::from_headers(&map).unwrap();
        assert!(actor.employee_id.is_none());
        assert_eq!(actor.role, Role::Admin);
    }

    #[test]
    fn test_missing_company_header_rejected() {
        let map = headers(None, None, Some("ADMIN"));
        let error = Actor::from_headers(&map).unwrap_err();
        assert_eq!(error.code, "UNAUTHENTICATED");
    }

    #[test]
    fn test_unknown_role_rejected() {
        let company = Uuid::new_v4().to_string();
        let map = headers(Some(&company), None, Some("SUPERUSER"));
        assert!(Actor::from_headers(&map).is_err());
    }

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{
            "gross_salary": "30000",
            "payable_days": 15,
            "total_days_in_period": 30
        }"#;
        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.payable_days, 15);
        assert_eq!(request.total_days_in_period, 30);
    }

    #[test]
    fn test_deserialize_import_request() {
        let json = r#"{
            "records": [
                { "external_id": "EMP-0001", "day": "2026-03-02", "status": "PRESENT" },
                { "external_id": "EMP-0002" }
            ]
        }"#;
        let request: ImportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.records.len(), 2);
        assert!(request.records[1].day.is_none());
    }
}
