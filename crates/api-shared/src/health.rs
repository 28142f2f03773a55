use crate::wire::HealthRes;

/// Health service shared by every front end.
///
/// Provides a standardised way to report that the triage engine is up.
#[derive(Clone, Debug, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Report health without creating an instance.
    ///
    /// The engine holds no external connections, so once the process is serving it is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Triage engine is alive".into(),
        }
    }
}
