//! Attendance record model and related types.
//!
//! An [`AttendanceRecord`] is one fact per (employee, calendar day). The
//! calendar day is a date with no time-of-day component, normalized from a
//! UTC instant, and forms the uniqueness key together with the employee id.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CompanyId, EmployeeId};

/// Normalizes a UTC instant to its calendar day.
///
/// The ledger keys records by date only; the time component is dropped,
/// which is equivalent to truncating to midnight UTC.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::utc_day;
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2026, 3, 2, 23, 59, 59).unwrap();
/// assert_eq!(utc_day(instant), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
/// ```
pub fn utc_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// The attendance status recorded for a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// The employee was present.
    Present,
    /// The employee was absent.
    Absent,
    /// The employee was on approved leave.
    OnLeave,
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    /// Parses a status string as delivered by external sources.
    ///
    /// Input is case-normalized to uppercase first, so heterogeneous
    /// machine exports ("present", "Present", "PRESENT") all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PRESENT" => Ok(AttendanceStatus::Present),
            "ABSENT" => Ok(AttendanceStatus::Absent),
            "ON_LEAVE" => Ok(AttendanceStatus::OnLeave),
            other => Err(format!("Unknown attendance status '{}'", other)),
        }
    }
}

/// The provenance of an attendance record.
///
/// Used for reporting and logging only; conflict resolution never looks at
/// the source of an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceSource {
    /// A manual clock event made by the employee.
    Manual,
    /// A bulk import from an external machine (e.g. biometric terminal).
    Machine,
    /// Generated by the engine itself, e.g. leave reconciliation.
    System,
}

/// One attendance fact for an employee on a calendar day.
///
/// At most one record exists per (employee, day) across all writers. Records
/// are created by clock-in, bulk import or leave reconciliation, mutated only
/// by the clock-out transition, and never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the fact belongs to.
    pub employee_id: EmployeeId,
    /// The tenant the employee belongs to.
    pub company_id: CompanyId,
    /// The calendar day the fact covers. Part of the uniqueness key.
    pub day: NaiveDate,
    /// The recorded status for the day.
    pub status: AttendanceStatus,
    /// Precise clock-in instant, when the source provides one.
    #[serde(default)]
    pub clock_in: Option<DateTime<Utc>>,
    /// Precise clock-out instant, when the source provides one.
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>,
    /// Worked duration in whole minutes, present only when both clock
    /// events exist.
    #[serde(default)]
    pub work_duration_mins: Option<i64>,
    /// Where the record came from.
    pub source: AttendanceSource,
    /// Free-text remarks, e.g. the leave type for reconciled days.
    #[serde(default)]
    pub remarks: Option<String>,
}

impl AttendanceRecord {
    /// Returns true if the record has been closed by a clock-out.
    pub fn is_closed(&self) -> bool {
        self.clock_out.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_record() -> AttendanceRecord {
        AttendanceRecord {
            employee_id: EmployeeId::new(),
            company_id: CompanyId::new(),
            day: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            status: AttendanceStatus::Present,
            clock_in: Some(Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()),
            clock_out: None,
            work_duration_mins: None,
            source: AttendanceSource::Manual,
            remarks: None,
        }
    }

    #[test]
    fn test_utc_day_drops_time_component() {
        let early = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 1).unwrap();
        let late = Utc.with_ymd_and_hms(2026, 3, 2, 23, 59, 59).unwrap();
        assert_eq!(utc_day(early), utc_day(late));
    }

    #[test]
    fn test_status_parses_case_insensitively() {
        assert_eq!(
            "present".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Present
        );
        assert_eq!(
            "On_Leave".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::OnLeave
        );
        assert!("HOLIDAY".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&AttendanceStatus::OnLeave).unwrap();
        assert_eq!(json, "\"ON_LEAVE\"");
    }

    #[test]
    fn test_record_is_closed_only_after_clock_out() {
        let mut record = make_record();
        assert!(!record.is_closed());
        record.clock_out = Some(Utc.with_ymd_and_hms(2026, 3, 2, 17, 0, 0).unwrap());
        assert!(record.is_closed());
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = make_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
