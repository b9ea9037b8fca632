//! Request/response types for callers that sit in front of the solver.
//!
//! Parsing and transport framing belong to the caller; this module only
//! fixes the shapes exchanged and turns every outcome, including an internal
//! panic, into an explicit success or failure response.

use std::panic::{self, AssertUnwindSafe};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VrpError};
use crate::models::{Location, VrpSolution};
use crate::solver::{Solver, SolverConfig};

fn default_num_vehicles() -> usize {
    1
}

/// A routing request: locations, fleet size, and depot.
///
/// Missing `num_vehicles` defaults to 1 and missing `depot_index` to 0.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::boundary::VrpRequest;
/// use u_vrp_meta::models::Location;
///
/// let request = VrpRequest::new(vec![Location::new(0.0, 0.0), Location::new(1.0, 1.0)])
///     .with_num_vehicles(2);
/// assert_eq!(request.num_vehicles, 2);
/// assert_eq!(request.depot_index, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrpRequest {
    /// Locations as `[x, y]` pairs.
    pub locations: Vec<Location>,
    /// Number of vehicles.
    #[serde(default = "default_num_vehicles")]
    pub num_vehicles: usize,
    /// Index of the depot in `locations`.
    #[serde(default)]
    pub depot_index: usize,
}

impl VrpRequest {
    /// A single-vehicle request with the depot at index 0.
    pub fn new(locations: Vec<Location>) -> Self {
        Self {
            locations,
            num_vehicles: default_num_vehicles(),
            depot_index: 0,
        }
    }

    pub fn with_num_vehicles(mut self, n: usize) -> Self {
        self.num_vehicles = n;
        self
    }

    pub fn with_depot_index(mut self, depot: usize) -> Self {
        self.depot_index = depot;
        self
    }
}

/// Outcome marker of a [`VrpResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Solver outcome in a caller-neutral shape.
///
/// On failure `routes` is empty, `total_distance` is zero, and `message`
/// describes the problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrpResponse {
    pub status: ResponseStatus,
    /// Per-vehicle coordinate lists in vehicle order, depot at both ends.
    pub routes: Vec<Vec<Location>>,
    pub total_distance: f64,
    pub message: String,
    /// The failure, if any. Not serialized; callers map it to their own codes.
    #[serde(skip)]
    pub error: Option<VrpError>,
}

impl VrpResponse {
    /// A success response carrying the solution's routes.
    pub fn success(solution: &VrpSolution) -> Self {
        Self {
            status: ResponseStatus::Success,
            routes: solution.coordinate_routes(),
            total_distance: solution.total_distance(),
            message: "VRP solved successfully.".into(),
            error: None,
        }
    }

    /// A failure response describing `error`.
    pub fn failure(error: VrpError) -> Self {
        Self {
            status: ResponseStatus::Error,
            routes: Vec::new(),
            total_distance: 0.0,
            message: error.to_string(),
            error: Some(error),
        }
    }

    /// Converts a solver result into a response.
    pub fn from_result(result: Result<VrpSolution>) -> Self {
        match result {
            Ok(solution) => Self::success(&solution),
            Err(e) => Self::failure(e),
        }
    }

    /// Returns `true` for a success response.
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// Solves a request, reporting every outcome as a response.
///
/// Fewer than two locations is reported as
/// [`VrpError::InsufficientInput`] before any computation. Other validation
/// failures map to their [`VrpError`] variant, and a panic inside the solver
/// becomes [`VrpError::Unexpected`].
///
/// # Examples
///
/// ```
/// use u_vrp_meta::boundary::{solve_request, VrpRequest};
/// use u_vrp_meta::models::Location;
/// use u_vrp_meta::solver::SolverConfig;
///
/// let config = SolverConfig::default().with_seed(7);
///
/// let ok = solve_request(
///     &VrpRequest::new(vec![Location::new(0.0, 0.0), Location::new(0.0, 5.0)]),
///     &config,
/// );
/// assert!(ok.is_success());
/// assert!((ok.total_distance - 10.0).abs() < 1e-10);
///
/// let too_few = solve_request(&VrpRequest::new(vec![Location::new(0.0, 0.0)]), &config);
/// assert!(!too_few.is_success());
/// assert_eq!(too_few.message, "At least two locations are required.");
/// ```
pub fn solve_request(request: &VrpRequest, config: &SolverConfig) -> VrpResponse {
    if request.locations.len() < 2 {
        return VrpResponse::failure(VrpError::InsufficientInput {
            found: request.locations.len(),
        });
    }

    let solver = Solver::new(config.clone());
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        solver.solve(&request.locations, request.num_vehicles, request.depot_index)
    }));

    match outcome {
        Ok(result) => {
            if let Err(e) = &result {
                warn!("request rejected: {e}");
            }
            VrpResponse::from_result(result)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!("solver fault: {message}");
            VrpResponse::failure(VrpError::unexpected(message))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected solver failure".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SolverConfig {
        SolverConfig::default().with_seed(11)
    }

    #[test]
    fn test_request_defaults_from_json() {
        let request: VrpRequest =
            serde_json::from_str(r#"{"locations": [[0, 0], [3, 4]]}"#).unwrap();
        assert_eq!(request.num_vehicles, 1);
        assert_eq!(request.depot_index, 0);
        assert_eq!(request.locations[1], Location::new(3.0, 4.0));
    }

    #[test]
    fn test_success_response_json() {
        let request = VrpRequest::new(vec![Location::new(0.0, 0.0), Location::new(3.0, 4.0)]);
        let response = solve_request(&request, &config());
        assert!(response.is_success());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["total_distance"], 10.0);
        assert_eq!(json["routes"][0][1][0], 3.0);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_insufficient_input() {
        let response = solve_request(&VrpRequest::new(vec![]), &config());
        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.error, Some(VrpError::InsufficientInput { found: 0 }));
        assert!(response.routes.is_empty());
        assert_eq!(response.total_distance, 0.0);
    }

    #[test]
    fn test_validation_failure_reported() {
        let request = VrpRequest::new(vec![Location::new(0.0, 0.0), Location::new(1.0, 0.0)])
            .with_depot_index(4);
        let response = solve_request(&request, &config());
        assert!(!response.is_success());
        assert_eq!(
            response.error,
            Some(VrpError::InvalidDepot { depot: 4, len: 2 })
        );
    }

    #[test]
    fn test_zero_vehicles_reported() {
        let request = VrpRequest::new(vec![Location::new(0.0, 0.0), Location::new(1.0, 0.0)])
            .with_num_vehicles(0);
        let response = solve_request(&request, &config());
        assert_eq!(response.error, Some(VrpError::NoVehicles));
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn std::any::Any + Send> = Box::new(3u8);
        assert_eq!(panic_message(payload.as_ref()), "unexpected solver failure");
    }

    #[test]
    fn test_from_result() {
        let ok = VrpResponse::from_result(Ok(VrpSolution::empty()));
        assert!(ok.is_success());
        assert_eq!(ok.message, "VRP solved successfully.");
        let err = VrpResponse::from_result(Err(VrpError::unexpected("disk on fire")));
        assert_eq!(err.message, "disk on fire");
    }
}
