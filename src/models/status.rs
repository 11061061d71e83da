/// The four work statuses the board knows about.
///
/// The backend has shipped several spellings of these over time (snake_case
/// db values, spaced labels, one typo). Everything entering the crate goes
/// through [`Status::canonicalize`] exactly once, at the wire boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Working,
    WorkingRemotely,
    OnVacation,
    BusinessTrip,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Working,
        Status::WorkingRemotely,
        Status::OnVacation,
        Status::BusinessTrip,
    ];

    /// Canonical token, used for logic, sorting and the update wire body.
    pub fn canonical(&self) -> &'static str {
        match self {
            Status::Working => "Working",
            Status::WorkingRemotely => "WorkingRemotely",
            Status::OnVacation => "OnVacation",
            Status::BusinessTrip => "BusinessTrip",
        }
    }

    /// Human label, only for display.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Working => "Working",
            Status::WorkingRemotely => "Working Remotely",
            Status::OnVacation => "On Vacation",
            Status::BusinessTrip => "Business Trip",
        }
    }

    /// snake_case value as stored by the backend.
    pub fn db_value(&self) -> &'static str {
        match self {
            Status::Working => "working",
            Status::WorkingRemotely => "working_remotely",
            Status::OnVacation => "on_vacation",
            Status::BusinessTrip => "business_trip",
        }
    }

    /// Strict parse of any known spelling. Accepts canonical tokens, the
    /// "BuissnessTrip" typo one backend revision emits, and a tolerant form
    /// with casing, spaces, hyphens and underscores ignored.
    pub fn parse(raw: &str) -> Option<Status> {
        match raw.trim() {
            "Working" => return Some(Status::Working),
            "WorkingRemotely" => return Some(Status::WorkingRemotely),
            "OnVacation" => return Some(Status::OnVacation),
            "BusinessTrip" | "BuissnessTrip" => return Some(Status::BusinessTrip),
            _ => {}
        }
        let key: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        match key.as_str() {
            "working" => Some(Status::Working),
            "workingremotely" => Some(Status::WorkingRemotely),
            "onvacation" => Some(Status::OnVacation),
            "businesstrip" | "buissnesstrip" => Some(Status::BusinessTrip),
            _ => None,
        }
    }

    /// Boundary conversion: unknown or absent backend values default to
    /// Working.
    pub fn canonicalize(raw: Option<&str>) -> Status {
        raw.and_then(Status::parse).unwrap_or(Status::Working)
    }
}
