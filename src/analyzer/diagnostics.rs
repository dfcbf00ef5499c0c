use crate::domain::ReleaseRule;
use tracing::debug;

/// An observable step of release resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolutionEvent<'a> {
    /// The rule matched and raised the best release type to `release`
    RuleMatchedAndRaised {
        rule: &'a ReleaseRule,
        release: &'a str,
    },
    /// The rule matched but `best` was already at least as high
    RuleMatchedButSuperseded {
        rule: &'a ReleaseRule,
        release: Option<&'a str>,
        best: Option<&'a str>,
    },
    /// The highest release type was reached and remaining rules were skipped
    HighestReached { release: &'a str },
}

/// Observer of resolution events, called synchronously by the resolver
pub trait Diagnostics {
    fn record(&self, event: &ResolutionEvent<'_>);
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn record(&self, _event: &ResolutionEvent<'_>) {}
}

/// Emits every event as a `tracing` debug record
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn record(&self, event: &ResolutionEvent<'_>) {
        match event {
            ResolutionEvent::RuleMatchedAndRaised { rule, release } => {
                debug!(%rule, release, "rule matched commit and raised release type");
            }
            ResolutionEvent::RuleMatchedButSuperseded {
                rule,
                release,
                best,
            } => {
                debug!(
                    %rule,
                    release = release.unwrap_or("none"),
                    best = best.unwrap_or("none"),
                    "rule matched commit but a higher release type was already found"
                );
            }
            ResolutionEvent::HighestReached { release } => {
                debug!(release, "highest release type reached, stopping analysis");
            }
        }
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn record(&self, event: &ResolutionEvent<'_>) {
        (**self).record(event)
    }
}
